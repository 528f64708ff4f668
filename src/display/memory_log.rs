use crate::display::DisplaySink;
use crate::error::DisplayError;
use crate::events::LogLine;
use std::cell::{Cell, RefCell};

/// In-memory alert log
///
/// Keeps every appended line for later inspection. A closed log rejects
/// appends with `DisplayError::NotReady`, which is how a display that is not
/// ready to accept output behaves.
#[derive(Debug, Default)]
pub struct MemoryLog {
    lines: RefCell<Vec<LogLine>>,
    closed: Cell<bool>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop accepting lines
    pub fn close(&self) {
        self.closed.set(true);
    }

    /// Accept lines again after `close`
    pub fn reopen(&self) {
        self.closed.set(false);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }

    /// Snapshot of all lines appended so far
    pub fn lines(&self) -> Vec<LogLine> {
        self.lines.borrow().clone()
    }

    /// Text of all lines appended so far
    pub fn texts(&self) -> Vec<String> {
        self.lines.borrow().iter().map(|l| l.text.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }
}

impl DisplaySink for MemoryLog {
    fn append(&self, line: &LogLine) -> Result<(), DisplayError> {
        if self.closed.get() {
            return Err(DisplayError::NotReady);
        }
        let mut lines = self
            .lines
            .try_borrow_mut()
            .map_err(|_| DisplayError::NotReady)?;
        lines.push(line.clone());
        Ok(())
    }
}
