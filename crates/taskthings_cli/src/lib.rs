//! Shared plumbing for the TaskThings binaries.
//!
//! # Responsibility
//! - Logging flags and their environment fallbacks.
//! - Stdin capture and the error type mapped to exit status.
//!
//! # Invariants
//! - Nothing here writes to stdout.

use clap::Args;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{IsTerminal, Read};
use taskthings_core::{
    default_log_level, init_logging, ConvertError, DeliveryError, LogTarget, SnapshotError,
};

/// Logging configuration shared by every binary.
#[derive(Debug, Clone, Default, Args)]
pub struct LogArgs {
    /// Log level (trace|debug|info|warn|error). Logs go to stderr unless --log-dir is set.
    #[arg(long, env = "TASKTHINGS_LOG_LEVEL")]
    pub log_level: Option<String>,
    /// Absolute directory for rotating log files.
    #[arg(long, env = "TASKTHINGS_LOG_DIR")]
    pub log_dir: Option<String>,
}

impl LogArgs {
    /// Initializes logging when any logging option is set; no-op otherwise.
    pub fn init(&self) -> Result<(), CliError> {
        let target = match self.log_dir.as_deref() {
            Some(dir) => LogTarget::directory(dir).map_err(CliError::Config)?,
            None if self.log_level.is_some() => LogTarget::Stderr,
            None => return Ok(()),
        };
        let level = self.log_level.as_deref().unwrap_or_else(|| default_log_level());
        init_logging(level, target).map_err(CliError::Config)
    }
}

/// Reads stdin to the end. An interactive terminal yields empty input.
pub fn read_stdin() -> Result<String, CliError> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }
    let mut data = String::new();
    stdin.read_to_string(&mut data).map_err(CliError::Stdin)?;
    Ok(data)
}

/// Terminal failure of one invocation.
#[derive(Debug)]
pub enum CliError {
    /// Invalid option value or logging setup failure.
    Config(String),
    Stdin(std::io::Error),
    Convert(ConvertError),
    Snapshot(SnapshotError),
    /// Editor item list is not valid JSON.
    Input(serde_json::Error),
    Delivery(DeliveryError),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(message) => write!(f, "Error: {message}"),
            Self::Stdin(err) => write!(f, "Error: failed to read stdin: {err}"),
            Self::Convert(err) => write!(f, "{err}"),
            Self::Snapshot(err) => write!(f, "Error: {err}"),
            Self::Input(err) => write!(f, "Error: failed to parse editor items: {err}"),
            Self::Delivery(err) => write!(f, "Error: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(_) => None,
            Self::Stdin(err) => Some(err),
            Self::Convert(err) => Some(err),
            Self::Snapshot(err) => Some(err),
            Self::Input(err) => Some(err),
            Self::Delivery(err) => Some(err),
        }
    }
}

impl From<ConvertError> for CliError {
    fn from(value: ConvertError) -> Self {
        Self::Convert(value)
    }
}

impl From<SnapshotError> for CliError {
    fn from(value: SnapshotError) -> Self {
        Self::Snapshot(value)
    }
}

impl From<DeliveryError> for CliError {
    fn from(value: DeliveryError) -> Self {
        Self::Delivery(value)
    }
}
