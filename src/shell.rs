//! Interactive terminal front end
//!
//! The shell owns the whole notification pipeline. Its "send" action plays the
//! role of the sensor button: it logs a sensor line and feeds the literal
//! motion token to the server.

use crate::alerts::{DangerNotifier, NotificationManager, Parent, SecurityStaff};
use crate::config::Config;
use crate::display::DisplaySink;
use crate::events::{Color, LogLine};
use crate::server::Server;
use crate::triggers::{DetectionEngine, MOTION_KEYWORD};
use anyhow::Result;
use log::{info, warn};
use std::io::{BufRead, Write};
use std::rc::Rc;

/// Window title shown above the alert log
pub const TITLE: &str = "📡 Kids Danger Monitoring System";
/// Caption of the alert log
pub const LOG_TITLE: &str = "📋 Real-time Alerts";
/// Line logged by the simulated sensor before it sends data
pub const SENSOR_MESSAGE: &str = "📶 Sensor ➜ Motion detected! Sending data...";

const HELP: &str = "\
Commands:
  <enter>, send   🚀 Send Motion Alert
  <token>         feed a raw sensor token to the server
  help            show this help
  quit, exit      leave the monitor";

/// A single line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Press the send button
    Send,
    /// Feed a raw token to the server
    Token(String),
    Help,
    Quit,
}

impl ShellCommand {
    /// Interpret a line of user input
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() || line.eq_ignore_ascii_case("send") {
            Self::Send
        } else if line.eq_ignore_ascii_case("help") || line == "?" {
            Self::Help
        } else if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            Self::Quit
        } else {
            Self::Token(line.to_string())
        }
    }
}

/// Terminal monitor wired to the two stakeholder roles
pub struct MonitorShell {
    sink: Rc<dyn DisplaySink>,
    server: Server<NotificationManager>,
    announce: bool,
}

impl MonitorShell {
    /// Build the pipeline: Parent then SecurityStaff observe the alerts
    pub fn new(config: &Config, sink: Rc<dyn DisplaySink>) -> Self {
        let mut manager = NotificationManager::new();
        manager.add_observer(Rc::new(Parent::new(Rc::clone(&sink))));
        manager.add_observer(Rc::new(SecurityStaff::new(Rc::clone(&sink))));
        info!(
            "Registered {} stakeholders for motion alerts",
            manager.observer_count()
        );

        let server = Server::new(DetectionEngine::new(manager));

        Self {
            sink,
            server,
            announce: config.sensor.announce,
        }
    }

    /// Header text printed once before the log starts
    pub fn banner() -> String {
        format!("{}\n{}\n{}", TITLE, LOG_TITLE, "─".repeat(40))
    }

    /// Simulate the sensor button: announce, then send the motion token
    pub fn send_motion_alert(&self) {
        if self.announce {
            if let Err(e) = self.sink.append(&LogLine::system(SENSOR_MESSAGE, Color::SYSTEM)) {
                warn!("Failed to render sensor line: {}", e);
            }
        }
        self.server.receive_data(MOTION_KEYWORD);
    }

    /// Feed a raw sensor token to the server
    pub fn feed_token(&self, token: &str) {
        self.server.receive_data(token);
    }

    /// Execute one command, returning `false` when the shell should stop
    pub fn execute<W: Write>(&self, command: &ShellCommand, console: &mut W) -> Result<bool> {
        match command {
            ShellCommand::Send => self.send_motion_alert(),
            ShellCommand::Token(token) => self.feed_token(token),
            ShellCommand::Help => writeln!(console, "{}", HELP)?,
            ShellCommand::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Read commands until `quit` or end of input
    ///
    /// Returns the number of commands executed, `quit` excluded.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut console: W) -> Result<usize> {
        writeln!(console, "Press <enter> to send a motion alert, 'help' for commands.")?;
        console.flush()?;

        let mut executed = 0;
        for line in input.lines() {
            let command = ShellCommand::parse(&line?);
            if !self.execute(&command, &mut console)? {
                info!("Quit requested");
                break;
            }
            executed += 1;
        }
        Ok(executed)
    }
}
