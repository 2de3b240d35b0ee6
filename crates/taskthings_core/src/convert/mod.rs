//! Outline to Things conversion.
//!
//! # Responsibility
//! - Validate raw input and map the outline tree into a Things document.
//!
//! # See also
//! - `crate::model::things` for the target wire shape.

mod decode;
mod error;
mod transformer;

pub use error::{ConvertError, ConvertResult};
pub use transformer::{convert_str, convert_value, notes_of, to_things_document, ProjectOptions};
