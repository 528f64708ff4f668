//! Core value types shared by the notification pipeline
//!
//! This module defines the color carried by every notification and the
//! styled line that ends up in the alert log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp type for consistent time handling across the application
pub type Timestamp = DateTime<Utc>;

/// Foreground color of a rendered line, as an RGB triple
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Warning color used for motion alerts
    pub const ALERT: Color = Color::rgb(255, 102, 102);
    /// Muted gray used for sensor/system lines
    pub const SYSTEM: Color = Color::rgb(100, 100, 100);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A single entry of the append-only alert log
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogLine {
    /// When the line was produced
    pub timestamp: Timestamp,
    /// Rendered text, without trailing newline
    pub text: String,
    /// Foreground color
    pub color: Color,
    /// Whether the line is rendered in italics (system lines)
    #[serde(default)]
    pub italic: bool,
}

impl LogLine {
    /// Create a regular line stamped with the current time
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            timestamp: Utc::now(),
            text: text.into(),
            color,
            italic: false,
        }
    }

    /// Create an italic system line stamped with the current time
    pub fn system(text: impl Into<String>, color: Color) -> Self {
        Self {
            italic: true,
            ..Self::new(text, color)
        }
    }
}
