//! Editor snapshot: displayed items to serialized outline tree.
//!
//! # Responsibility
//! - Normalize raw editor items into `FlatOutlineItem`s.
//! - Reconstruct and serialize the tree as one pure call.
//!
//! # Invariants
//! - Items with null or blank bodies never reach the tree builder.
//! - No state survives between calls.

use crate::model::outline::{FlatOutlineItem, OutlineItemType};
use crate::tree::builder::{build_tree, OrphanPolicy, TreeBuildError};
use log::info;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One displayed item as reported by the outline editor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorItem {
    pub id: String,
    /// Value of the editor's `data-type` attribute.
    #[serde(default)]
    pub data_type: OutlineItemType,
    #[serde(default)]
    pub body_string: Option<String>,
    pub parent_id: String,
}

impl EditorItem {
    /// Returns the cleaned body, or `None` when it is null or blank.
    pub fn clean_body(&self) -> Option<String> {
        let raw = self.body_string.as_deref()?;
        if raw.trim().is_empty() {
            return None;
        }
        Some(raw.strip_prefix('-').unwrap_or(raw).trim().to_string())
    }

    /// Converts into the flat item shape, skipping blank items.
    pub fn to_flat(&self) -> Option<FlatOutlineItem> {
        let body = self.clean_body()?;
        Some(FlatOutlineItem {
            id: self.id.clone(),
            kind: self.data_type,
            body,
            parent_id: self.parent_id.clone(),
        })
    }
}

/// Errors from the snapshot step.
#[derive(Debug)]
pub enum SnapshotError {
    /// Tree reconstruction failed.
    Tree(TreeBuildError),
    /// JSON encoding failed.
    Serialize(serde_json::Error),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tree(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize outline tree: {err}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Tree(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<TreeBuildError> for SnapshotError {
    fn from(value: TreeBuildError) -> Self {
        Self::Tree(value)
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Produces the compact JSON tree for the editor's displayed items.
///
/// A child of a blank item has no parent in the tree; `policy` decides
/// whether that fails the snapshot or drops the child.
pub fn snapshot_outline(
    items: &[EditorItem],
    policy: OrphanPolicy,
) -> Result<String, SnapshotError> {
    let flat = items.iter().filter_map(EditorItem::to_flat).collect::<Vec<_>>();
    let blank = items.len() - flat.len();
    let tree = build_tree(flat, policy)?;
    info!(
        "event=snapshot module=snapshot status=ok items={} blank_skipped={}",
        tree.subtree_len() - 1,
        blank
    );
    Ok(serde_json::to_string(&tree)?)
}
