//! Source outline model.
//!
//! # Responsibility
//! - Define the arbitrary-depth item tree exported by the outline editor.
//! - Define the flat item shape consumed by the tree builder.
//!
//! # Invariants
//! - Every non-root item has exactly one parent, referenced by `parent_id`.
//! - The synthetic root uses `ROOT_ITEM_ID` and an empty body.
//! - Unknown type tags are preserved as `OutlineItemType::Unknown`, never rejected.

use serde::{Deserialize, Serialize};

/// Reserved identifier of the synthetic root item.
///
/// Matches the root id reported by the editor, so items at the top level of
/// the document carry it as their `parent_id`.
pub const ROOT_ITEM_ID: &str = "Birch";

/// Kind tag of one outline item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutlineItemType {
    /// Synthetic document root.
    Root,
    /// Grouping line. The editor calls these `project`.
    #[serde(alias = "project")]
    Heading,
    /// Free text attached to the enclosing item.
    Note,
    /// Actionable line.
    Task,
    /// Any tag this crate does not understand.
    #[default]
    #[serde(other)]
    Unknown,
}

impl OutlineItemType {
    /// Maps a raw editor tag; unrecognized tags become `Unknown`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "root" => Self::Root,
            "heading" | "project" => Self::Heading,
            "note" => Self::Note,
            "task" => Self::Task,
            _ => Self::Unknown,
        }
    }
}

/// One node of the source outline tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineItem {
    #[serde(default)]
    pub id: String,
    /// Serialized as `type` to match the editor export.
    #[serde(rename = "type", default)]
    pub kind: OutlineItemType,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub parent_id: String,
    /// Ordered as displayed in the editor.
    #[serde(default)]
    pub children: Vec<OutlineItem>,
}

impl OutlineItem {
    /// Creates a childless item.
    pub fn new(
        id: impl Into<String>,
        kind: OutlineItemType,
        body: impl Into<String>,
        parent_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            body: body.into(),
            parent_id: parent_id.into(),
            children: Vec::new(),
        }
    }

    /// Creates the synthetic root item.
    pub fn root() -> Self {
        Self::new(ROOT_ITEM_ID, OutlineItemType::Root, "", "")
    }

    /// Appends `child` as the last child and returns `self` for chaining.
    pub fn with_child(mut self, child: OutlineItem) -> Self {
        self.children.push(child);
        self
    }

    /// Iterates direct children of one kind, in display order.
    pub fn children_of_kind(&self, kind: OutlineItemType) -> impl Iterator<Item = &OutlineItem> {
        self.children.iter().filter(move |child| child.kind == kind)
    }

    /// Counts this item and all of its descendants.
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(OutlineItem::subtree_len)
            .sum::<usize>()
    }
}

/// Flat, parent-linked item as produced by the editor snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatOutlineItem {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: OutlineItemType,
    pub body: String,
    pub parent_id: String,
}

impl FlatOutlineItem {
    /// Converts into a tree node with no children yet.
    pub fn into_item(self) -> OutlineItem {
        OutlineItem::new(self.id, self.kind, self.body, self.parent_id)
    }
}
