//! Stakeholder observers
//!
//! Each role labels the alert it receives and appends it to the shared alert
//! log it was given at construction.

use crate::alerts::Observer;
use crate::display::DisplaySink;
use crate::error::DisplayError;
use crate::events::{Color, LogLine};
use log::debug;
use std::rc::Rc;

/// Prefix of every line rendered by `Parent`
pub const PARENT_LABEL: &str = "👨‍👩‍👧 Parent ➜ ";
/// Prefix of every line rendered by `SecurityStaff`
pub const SECURITY_LABEL: &str = "🛡️ Security ➜ ";

fn append_labeled(
    sink: &dyn DisplaySink,
    label: &str,
    message: &str,
    color: Color,
) -> Result<(), DisplayError> {
    let line = LogLine::new(format!("{}{}", label, message), color);
    debug!("Rendering line in {}: {}", color, line.text);
    sink.append(&line)
}

/// Parent of the monitored child
pub struct Parent {
    sink: Rc<dyn DisplaySink>,
}

impl Parent {
    pub fn new(sink: Rc<dyn DisplaySink>) -> Self {
        Self { sink }
    }
}

impl Observer for Parent {
    fn receive(&self, message: &str, color: Color) -> Result<(), DisplayError> {
        append_labeled(self.sink.as_ref(), PARENT_LABEL, message, color)
    }
}

/// On-site security staff
pub struct SecurityStaff {
    sink: Rc<dyn DisplaySink>,
}

impl SecurityStaff {
    pub fn new(sink: Rc<dyn DisplaySink>) -> Self {
        Self { sink }
    }
}

impl Observer for SecurityStaff {
    fn receive(&self, message: &str, color: Color) -> Result<(), DisplayError> {
        append_labeled(self.sink.as_ref(), SECURITY_LABEL, message, color)
    }
}
