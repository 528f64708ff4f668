use anyhow::{bail, ensure, Context};
use clap::Parser;
use kidsmon::config::Config;
use kidsmon::display::{OutputFormat, TerminalLog};
use kidsmon::error::ConfigError;
use kidsmon::shell::MonitorShell;
use log::{error, info, warn};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Command-line arguments for the kids danger monitor
#[derive(Parser)]
#[command(
    name = "kidsmon",
    about = "Kids Danger Monitoring System - motion alerts for parents and security staff",
    long_about = "Simulates a motion sensor. Each motion event is broadcast to the registered \
                  stakeholders (Parent, Security Staff), who log a colored alert line."
)]
struct Cli {
    /// Path to configuration file
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Configuration file path (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(
        short,
        long,
        help = "Enable verbose logging output (sets RUST_LOG=debug)"
    )]
    verbose: bool,

    /// Disable ANSI colors in the alert log
    #[arg(long)]
    no_color: bool,

    /// Feed raw sensor tokens instead of running interactively
    #[arg(long = "token", value_name = "TOKEN")]
    tokens: Vec<String>,

    /// Press the send button N times instead of running interactively
    #[arg(long, value_name = "N")]
    send: Option<usize>,
}

impl Cli {
    /// Reject arguments the monitor cannot act on
    ///
    /// A missing config file is accepted here; `load_config` falls back to
    /// defaults for it.
    fn validate(&self) -> anyhow::Result<()> {
        if let Some(path) = self.config.as_deref().filter(|path| path.exists()) {
            ensure!(
                path.is_file(),
                "Configuration path is not a file: {}",
                path.display()
            );
            if path.extension().map_or(true, |ext| ext != "toml") {
                warn!("Reading {} as TOML despite its extension", path.display());
            }
        }

        if let Some(index) = self.tokens.iter().position(|t| t.trim().is_empty()) {
            bail!("Sensor token #{} is blank", index + 1);
        }
        ensure!(self.send != Some(0), "--send needs at least one press");

        Ok(())
    }

    /// Whether the monitor should run a fixed script and exit
    fn is_batch(&self) -> bool {
        !self.tokens.is_empty() || self.send.is_some()
    }
}

/// Load configuration from file or use defaults
///
/// A missing or invalid file is reported and replaced by the default
/// configuration.
fn load_config(config_path: Option<&Path>) -> Config {
    match config_path {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            match Config::from_file(path) {
                Ok(config) => config,
                Err(ConfigError::ReadError(e)) => {
                    warn!(
                        "Configuration file not found or unreadable ({}), using defaults",
                        e
                    );
                    Config::default()
                }
                Err(e) => {
                    error!("Configuration error in '{}': {}", path.display(), e);
                    warn!("Using default configuration due to invalid config file");
                    Config::default()
                }
            }
        }
        None => {
            info!("Using default configuration");
            Config::default()
        }
    }
}

/// Drive the monitor with the alert log on `terminal` and prompts on `console`
///
/// Prompts and help never go through the alert log, so a JSON log stays one
/// object per line.
fn run_with<R, W, C>(
    cli: &Cli,
    config: &Config,
    input: R,
    terminal: Rc<TerminalLog<W>>,
    console: C,
) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write + 'static,
    C: Write,
{
    if config.display.format == OutputFormat::Text {
        terminal
            .write_raw(&MonitorShell::banner())
            .context("Failed to print header")?;
    }

    let shell = MonitorShell::new(config, terminal);

    if cli.is_batch() {
        for token in &cli.tokens {
            shell.feed_token(token);
        }
        for _ in 0..cli.send.unwrap_or(0) {
            shell.send_motion_alert();
        }
        return Ok(());
    }

    let executed = shell
        .run(input, console)
        .context("Failed to read commands")?;
    info!("Monitor stopped after {} commands", executed);
    Ok(())
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = load_config(cli.config.as_deref());
    if cli.no_color {
        config.display.color = false;
    }

    let terminal = Rc::new(TerminalLog::new(io::stdout(), config.render_options()));
    run_with(cli, &config, io::stdin().lock(), terminal, io::stderr())
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }
    env_logger::init();

    info!("Starting kids danger monitor");

    if let Err(e) = cli.validate() {
        error!("Invalid arguments: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kidsmon::events::LogLine;
    use std::io::Cursor;
    use tempfile::NamedTempFile;

    fn cli_with_config(config: Option<PathBuf>) -> Cli {
        Cli {
            config,
            verbose: false,
            no_color: false,
            tokens: Vec::new(),
            send: None,
        }
    }

    #[test]
    fn test_cli_validation_with_existing_file() {
        let file = NamedTempFile::new().unwrap();
        let cli = cli_with_config(Some(file.path().to_path_buf()));
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_cli_validation_with_missing_file() {
        let cli = cli_with_config(Some(PathBuf::from("/nonexistent/config.toml")));

        // Should not fail - missing files are handled gracefully
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_cli_validation_with_directory() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli_with_config(Some(dir.path().to_path_buf()));

        // Should fail - directories are not valid config files
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_cli_validation_no_config() {
        assert!(cli_with_config(None).validate().is_ok());
    }

    #[test]
    fn test_cli_validation_rejects_blank_token() {
        let mut cli = cli_with_config(None);
        cli.tokens = vec!["motion".to_string(), "  ".to_string()];

        let err = cli.validate().unwrap_err();
        assert!(err.to_string().contains("#2"));
    }

    #[test]
    fn test_cli_validation_rejects_zero_sends() {
        let mut cli = cli_with_config(None);
        cli.send = Some(0);
        assert!(cli.validate().is_err());

        cli.send = Some(1);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_json_session_keeps_stdout_machine_readable() {
        let mut config = Config::default();
        config.display.format = OutputFormat::Json;
        let terminal = Rc::new(TerminalLog::new(Vec::new(), config.render_options()));
        let mut console = Vec::new();

        run_with(
            &cli_with_config(None),
            &config,
            Cursor::new("help\n\nnoise\nquit\n"),
            Rc::clone(&terminal),
            &mut console,
        )
        .unwrap();

        let stdout = String::from_utf8(terminal.writer().clone()).unwrap();
        let lines: Vec<LogLine> = stdout
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].italic);

        let console = String::from_utf8(console).unwrap();
        assert!(console.contains("Commands:"));
    }

    #[test]
    fn test_text_session_prints_banner_to_log() {
        let mut config = Config::default();
        config.display.color = false;
        let terminal = Rc::new(TerminalLog::new(Vec::new(), config.render_options()));
        let mut cli = cli_with_config(None);
        cli.send = Some(1);

        run_with(&cli, &config, Cursor::new(""), Rc::clone(&terminal), io::sink()).unwrap();

        let stdout = String::from_utf8(terminal.writer().clone()).unwrap();
        assert!(stdout.starts_with(&MonitorShell::banner()));
        assert_eq!(stdout.lines().count(), 3 + 3);
    }

    #[test]
    fn test_cli_parses_batch_arguments() {
        let cli = Cli::try_parse_from([
            "kidsmon", "--token", "motion", "--token", "noise", "--send", "2", "--no-color",
        ])
        .unwrap();

        assert_eq!(cli.tokens, vec!["motion", "noise"]);
        assert_eq!(cli.send, Some(2));
        assert!(cli.no_color);
        assert!(cli.is_batch());
    }

    #[test]
    fn test_cli_interactive_by_default() {
        let cli = Cli::try_parse_from(["kidsmon"]).unwrap();
        assert!(!cli.is_batch());
    }

    #[test]
    fn test_load_config_missing_file_uses_defaults() {
        let config = load_config(Some(Path::new("/nonexistent/config.toml")));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_config_invalid_file_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[display\ncolor = ").unwrap();

        let config = load_config(Some(file.path()));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_config_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[display]\ncolor = false").unwrap();

        let config = load_config(Some(file.path()));
        assert!(!config.display.color);
    }
}
