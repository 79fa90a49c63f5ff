//! View sink trait and the in-memory implementation.

use crate::error::Result;
use parking_lot::Mutex;
use std::sync::Arc;

/// Target surface for rendered markup.
///
/// Every content write fully replaces the previous contents; the sink is never
/// mutated incrementally, so a later write always wins wholesale.
pub trait ViewSink: Send {
    /// Replace the sink's entire contents with the given markup.
    fn replace_content(&mut self, markup: &str) -> Result<()>;

    /// Present the surface to the user (the host's modal-dialog primitive).
    ///
    /// Called once per lifecycle, before any data has arrived.
    fn open_modal(&mut self) -> Result<()>;
}

#[derive(Default)]
struct BufferState {
    content: String,
    modal_opened: bool,
    writes: usize,
}

/// In-memory sink with shared, observable state.
///
/// Clones share one buffer, so the host can keep a handle while the app owns
/// its own copy behind `Box<dyn ViewSink>` and read back whatever was last
/// committed.
#[derive(Clone, Default)]
pub struct BufferSink {
    state: Arc<Mutex<BufferState>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently committed markup.
    pub fn content(&self) -> String {
        self.state.lock().content.clone()
    }

    /// Whether the modal primitive was invoked.
    pub fn modal_opened(&self) -> bool {
        self.state.lock().modal_opened
    }

    /// Number of full content replacements so far.
    pub fn write_count(&self) -> usize {
        self.state.lock().writes
    }
}

impl ViewSink for BufferSink {
    fn replace_content(&mut self, markup: &str) -> Result<()> {
        let mut state = self.state.lock();
        state.content.clear();
        state.content.push_str(markup);
        state.writes += 1;
        Ok(())
    }

    fn open_modal(&mut self) -> Result<()> {
        self.state.lock().modal_opened = true;
        Ok(())
    }
}
