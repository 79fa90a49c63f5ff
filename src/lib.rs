//! # planview - Monthly Publishing Schedule Renderer
//!
//! Fetches a monthly publishing schedule from a dashboard endpoint and renders
//! it as an HTML calendar fragment for a modal dialog: loading placeholder,
//! fetch, shape normalization, day-card grid, and an error panel with a retry
//! control on failure.
//!
//! ## Architecture
//!
//! The library is organized into focused modules:
//!
//! - [`error`] - Centralized error types and handling
//! - [`schedule`] - Payload model and dual-shape normalization
//! - [`source`] - Schedule source abstraction (HTTP endpoint or static JSON)
//! - [`render`] - Markup builders and the view sink seam
//! - [`app`] - Lifecycle orchestration and the view state machine

pub mod error;
pub mod schedule;

pub mod render;
pub mod source;

pub mod app;

// Re-export commonly used types for convenience
pub use error::{PlanviewError, Result};

// Public API surface for external usage
pub use app::{ScheduleApp, ViewPhase};
pub use render::{BufferSink, ViewSink};
pub use schedule::{MonthAnchor, ScheduleResponse};
pub use source::{HttpScheduleSource, ScheduleSource, StaticScheduleSource};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
