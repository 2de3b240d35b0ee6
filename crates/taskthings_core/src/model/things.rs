//! Things `add-json` document model.
//!
//! # Responsibility
//! - Define the two-level task-list schema accepted by the Things URL scheme.
//! - Keep wire names (`to-do`, `checklist-items`, ...) inside serde attributes.
//!
//! # Invariants
//! - A project holds headings and to-dos only; headings never nest.
//! - A to-do holds checklist items only; checklist items are leaves.
//! - `area` is omitted from the wire shape when absent.

use serde::Serialize;

/// Top-level payload. Things requires a sequence even for one project.
pub type ThingsDocument = Vec<ThingsProject>;

/// Project container, serialized as `{"type":"project","attributes":{..}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "project")]
pub struct ThingsProject {
    pub attributes: ProjectAttributes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectAttributes {
    pub title: String,
    /// Newline-joined top-level notes; empty string when there are none.
    pub notes: String,
    pub items: Vec<ProjectItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
}

/// Entry of a project's `items` sequence.
///
/// Headings are flat markers: the to-dos that follow a heading belong to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "attributes", rename_all = "kebab-case")]
pub enum ProjectItem {
    Heading(HeadingAttributes),
    ToDo(ToDoAttributes),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingAttributes {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToDoAttributes {
    pub title: String,
    pub notes: String,
    #[serde(rename = "checklist-items")]
    pub checklist_items: Vec<ChecklistItem>,
}

/// Leaf entry of a to-do checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "checklist-item")]
pub struct ChecklistItem {
    pub attributes: ChecklistItemAttributes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistItemAttributes {
    pub title: String,
}

impl ThingsProject {
    pub fn new(
        title: impl Into<String>,
        notes: impl Into<String>,
        items: Vec<ProjectItem>,
        area: Option<String>,
    ) -> Self {
        Self {
            attributes: ProjectAttributes {
                title: title.into(),
                notes: notes.into(),
                items,
                area,
            },
        }
    }
}

impl ProjectItem {
    pub fn heading(title: impl Into<String>) -> Self {
        Self::Heading(HeadingAttributes {
            title: title.into(),
        })
    }

    pub fn to_do(
        title: impl Into<String>,
        notes: impl Into<String>,
        checklist_items: Vec<ChecklistItem>,
    ) -> Self {
        Self::ToDo(ToDoAttributes {
            title: title.into(),
            notes: notes.into(),
            checklist_items,
        })
    }

    /// Returns the display title regardless of variant.
    pub fn title(&self) -> &str {
        match self {
            Self::Heading(attributes) => attributes.title.as_str(),
            Self::ToDo(attributes) => attributes.title.as_str(),
        }
    }
}

impl ChecklistItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            attributes: ChecklistItemAttributes {
                title: title.into(),
            },
        }
    }
}
