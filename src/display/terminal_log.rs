use crate::display::DisplaySink;
use crate::error::DisplayError;
use crate::events::LogLine;
use serde::{Deserialize, Serialize};
use std::cell::{Ref, RefCell};
use std::io::Write;

/// How lines are encoded on the terminal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text, optionally colored
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Rendering switches for a `TerminalLog`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit ANSI 24-bit color and italic escapes
    pub color: bool,
    /// Prefix each text line with `[HH:MM:SS]`
    pub timestamps: bool,
    pub format: OutputFormat,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: true,
            timestamps: false,
            format: OutputFormat::Text,
        }
    }
}

/// Alert log rendered onto a writer, typically stdout
///
/// Every line is flushed as soon as it is appended so the log scrolls in
/// real time.
#[derive(Debug)]
pub struct TerminalLog<W: Write> {
    writer: RefCell<W>,
    options: RenderOptions,
}

impl<W: Write> TerminalLog<W> {
    pub fn new(writer: W, options: RenderOptions) -> Self {
        Self {
            writer: RefCell::new(writer),
            options,
        }
    }

    /// Borrow the underlying writer
    pub fn writer(&self) -> Ref<'_, W> {
        self.writer.borrow()
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    /// Write a raw, unstyled line such as a header or banner
    pub fn write_raw(&self, text: &str) -> Result<(), DisplayError> {
        let mut writer = self
            .writer
            .try_borrow_mut()
            .map_err(|_| DisplayError::NotReady)?;
        writeln!(writer, "{}", text)?;
        writer.flush()?;
        Ok(())
    }

    /// Render a line according to the configured options, without newline
    fn render(&self, line: &LogLine) -> Result<String, DisplayError> {
        if self.options.format == OutputFormat::Json {
            return Ok(serde_json::to_string(line)?);
        }

        let mut rendered = String::new();
        if self.options.timestamps {
            rendered.push_str(&format!("[{}] ", line.timestamp.format("%H:%M:%S")));
        }

        if self.options.color {
            let c = line.color;
            rendered.push_str(&format!("\x1b[38;2;{};{};{}m", c.r, c.g, c.b));
            if line.italic {
                rendered.push_str("\x1b[3m");
            }
            rendered.push_str(&line.text);
            rendered.push_str("\x1b[0m");
        } else {
            rendered.push_str(&line.text);
        }

        Ok(rendered)
    }
}

impl<W: Write> DisplaySink for TerminalLog<W> {
    fn append(&self, line: &LogLine) -> Result<(), DisplayError> {
        let rendered = self.render(line)?;
        self.write_raw(&rendered)
    }
}
