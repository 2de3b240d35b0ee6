//! Hand-off of a Things document to stdout or to the Things URL scheme.
//!
//! # Responsibility
//! - Render the document as pretty JSON or as an `add-json` URL.
//! - Dispatch the URL to the OS opener without waiting for it.
//!
//! # Invariants
//! - Nothing is written to `out` unless serialization fully succeeded.
//! - The URL payload is compact JSON, percent-encoded as one query value.

use crate::model::things::ThingsDocument;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Write;
use std::process::{Command, Stdio};

/// URL scheme registered by Things.
pub const THINGS_URL_SCHEME: &str = "things";

/// Where the converted document goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeliveryMode {
    /// Pretty JSON on stdout.
    #[default]
    Print,
    /// `things:///add-json?...` handed to the OS opener.
    Execute,
}

/// Errors from delivery.
#[derive(Debug)]
pub enum DeliveryError {
    Serialize(serde_json::Error),
    Io(std::io::Error),
    /// OS opener could not be started.
    Launch {
        program: &'static str,
        source: std::io::Error,
    },
}

impl Display for DeliveryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialize(err) => write!(f, "failed to serialize Things JSON: {err}"),
            Self::Io(err) => write!(f, "failed to write output: {err}"),
            Self::Launch { program, source } => {
                write!(f, "failed to launch `{program}`: {source}")
            }
        }
    }
}

impl Error for DeliveryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Serialize(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Launch { source, .. } => Some(source),
        }
    }
}

impl From<serde_json::Error> for DeliveryError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

impl From<std::io::Error> for DeliveryError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Renders the document with two-space indentation.
pub fn pretty_json(document: &ThingsDocument) -> Result<String, DeliveryError> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Builds the `add-json` URL carrying the document.
pub fn things_url(document: &ThingsDocument) -> Result<String, DeliveryError> {
    let json = serde_json::to_string(document)?;
    Ok(format!(
        "{THINGS_URL_SCHEME}:///add-json?data={}",
        urlencoding::encode(&json)
    ))
}

/// Delivers the document according to `mode`.
///
/// `out` is only written in `DeliveryMode::Print`.
pub fn deliver<W: Write>(
    document: &ThingsDocument,
    mode: DeliveryMode,
    out: &mut W,
) -> Result<(), DeliveryError> {
    match mode {
        DeliveryMode::Print => {
            let rendered = pretty_json(document)?;
            writeln!(out, "{rendered}")?;
            out.flush()?;
            Ok(())
        }
        DeliveryMode::Execute => open_url(&things_url(document)?),
    }
}

/// Hands `url` to the platform opener. Fire-and-forget: the child is not awaited.
pub fn open_url(url: &str) -> Result<(), DeliveryError> {
    let (program, mut command) = opener_command(url);
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| DeliveryError::Launch { program, source })?;
    info!(
        "event=deliver module=delivery status=dispatched opener={} url_len={}",
        program,
        url.len()
    );
    Ok(())
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> (&'static str, Command) {
    let mut command = Command::new("open");
    command.arg(url);
    ("open", command)
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> (&'static str, Command) {
    // `cmd /C start` would expand `%NAME%` sequences inside the payload.
    let mut command = Command::new("rundll32");
    command.args(["url.dll,FileProtocolHandler", url]);
    ("rundll32", command)
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(url: &str) -> (&'static str, Command) {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    ("xdg-open", command)
}
