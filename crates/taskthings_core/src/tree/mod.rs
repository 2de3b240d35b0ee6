//! Outline tree reconstruction.
//!
//! # Responsibility
//! - `builder`: re-nest flat, parent-linked items into one rooted tree.
//! - `snapshot`: turn raw editor items into the serialized tree fed to `convert`.

pub mod builder;
pub mod snapshot;
