/// Append-only styled alert log
pub mod memory_log;
pub mod terminal_log;

pub use memory_log::MemoryLog;
pub use terminal_log::{OutputFormat, RenderOptions, TerminalLog};

use crate::error::DisplayError;
use crate::events::LogLine;

/// Destination for rendered lines
///
/// Observers receive a shared handle to a sink at construction and append
/// their formatted lines to it. Sinks never reorder or drop lines they accept.
pub trait DisplaySink {
    /// Append a single line to the end of the log
    fn append(&self, line: &LogLine) -> Result<(), DisplayError>;
}
