//! Rendering subsystem: markup builders and the view sink seam.
//!
//! The host environment (originally two DOM regions and a modal primitive) is
//! abstracted behind [`ViewSink`], so all formatting logic is testable without
//! any rendering environment. [`html`] builds the actual fragments.

pub mod html;
pub mod sink;

pub use sink::{BufferSink, ViewSink};
