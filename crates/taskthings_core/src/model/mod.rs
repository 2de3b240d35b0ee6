//! Domain models on both sides of the conversion.
//!
//! # Responsibility
//! - `outline`: arbitrary-depth tree exported by the outline editor.
//! - `things`: two-level project document accepted by Things.
//!
//! # Invariants
//! - Models carry no conversion logic; see `convert` and `tree`.

pub mod outline;
pub mod things;
