//! Conversion error model.
//!
//! # Responsibility
//! - Name every way stdin text can fail to become a Things document.
//! - Render the user-facing diagnostic printed on stderr.
//!
//! # Invariants
//! - Every message starts with `Error:`.
//! - Invalid data carries the pretty-printed input it rejected.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type used by conversion entry points.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors from outline-to-Things conversion.
#[derive(Debug)]
pub enum ConvertError {
    /// Project name is missing or blank after trim.
    MissingProjectName,
    /// Input is not JSON at all (empty input included).
    Parse(serde_json::Error),
    /// Input is JSON but not a single outline object.
    ///
    /// `got` holds the pretty-printed input, echoed back in diagnostics.
    InvalidData { got: String },
    /// Input is an object but does not decode as an outline item.
    Decode(serde_json::Error),
}

impl Display for ConvertError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingProjectName => write!(f, "Error: no project name provided."),
            Self::Parse(err) => write!(f, "Error: failed to parse input JSON: {err}"),
            Self::InvalidData { got } => write!(f, "Error: data is invalid.\nGot: {got}"),
            Self::Decode(err) => write!(f, "Error: input is not an outline item: {err}"),
        }
    }
}

impl Error for ConvertError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) | Self::Decode(err) => Some(err),
            Self::MissingProjectName | Self::InvalidData { .. } => None,
        }
    }
}
