//! Outline tree to Things project mapping.
//!
//! # Responsibility
//! - Clamp an arbitrary-depth outline into project -> heading/to-do -> checklist.
//! - Validate raw JSON input before any mapping happens.
//!
//! # Invariants
//! - Output is all-or-nothing: an invalid input yields an error, never a partial project.
//! - Content without a place in the target schema is dropped silently.
//! - `notes` is always present, empty when there are no note children.
//! - Mapping is a pure function of `(tree, options)`.

use crate::convert::decode::ItemSeed;
use crate::convert::error::{ConvertError, ConvertResult};
use crate::model::outline::{OutlineItem, OutlineItemType};
use crate::model::things::{ChecklistItem, ProjectItem, ThingsDocument, ThingsProject};
use log::debug;
use serde::de::DeserializeSeed;
use serde_json::Value;

/// Presentation metadata for the produced project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOptions {
    project_name: String,
    area_name: Option<String>,
}

impl ProjectOptions {
    /// Validates project metadata.
    ///
    /// A blank `area_name` is treated as absent.
    ///
    /// # Errors
    /// - `MissingProjectName` when `project_name` is blank.
    pub fn new(project_name: impl Into<String>, area_name: Option<String>) -> ConvertResult<Self> {
        let project_name = project_name.into();
        if project_name.trim().is_empty() {
            return Err(ConvertError::MissingProjectName);
        }
        let area_name = area_name.filter(|area| !area.trim().is_empty());
        Ok(Self {
            project_name,
            area_name,
        })
    }

    pub fn project_name(&self) -> &str {
        self.project_name.as_str()
    }

    pub fn area_name(&self) -> Option<&str> {
        self.area_name.as_deref()
    }
}

/// Maps a reconstructed outline tree into a one-project Things document.
pub fn to_things_document(tree: &OutlineItem, options: &ProjectOptions) -> ThingsDocument {
    let notes = notes_of(&tree.children);
    let items = project_items(&tree.children);
    debug!(
        "event=convert module=convert status=ok source_items={} project_items={}",
        tree.subtree_len() - 1,
        items.len()
    );

    vec![ThingsProject::new(
        options.project_name.clone(),
        notes,
        items,
        options.area_name.clone(),
    )]
}

/// Validates and maps an already-parsed JSON value.
///
/// # Errors
/// - `InvalidData` when `value` is null, a scalar, or an array.
/// - `Decode` when the object does not have the outline item shape.
pub fn convert_value(value: &Value, options: &ProjectOptions) -> ConvertResult<ThingsDocument> {
    if !value.is_object() {
        let got = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
        return Err(ConvertError::InvalidData { got });
    }
    let tree = ItemSeed::root()
        .deserialize(value)
        .map_err(ConvertError::Decode)?;
    Ok(to_things_document(&tree, options))
}

/// Parses raw stdin text and maps it.
///
/// Surrounding whitespace is ignored. Empty input is a parse error.
/// Object input is decoded straight from the text, so subtrees below the
/// mapped levels are skipped unparsed and nesting depth is unbounded.
pub fn convert_str(input: &str, options: &ProjectOptions) -> ConvertResult<ThingsDocument> {
    let input = input.trim();
    if !input.starts_with('{') {
        let value: Value = serde_json::from_str(input).map_err(ConvertError::Parse)?;
        return convert_value(&value, options);
    }

    let mut deserializer = serde_json::Deserializer::from_str(input);
    let tree = ItemSeed::root()
        .deserialize(&mut deserializer)
        .and_then(|tree| deserializer.end().map(|()| tree))
        .map_err(|err| {
            if err.is_data() {
                ConvertError::Decode(err)
            } else {
                ConvertError::Parse(err)
            }
        })?;
    Ok(to_things_document(&tree, options))
}

/// Joins the bodies of direct note children with `\n`, in order.
pub fn notes_of(children: &[OutlineItem]) -> String {
    children
        .iter()
        .filter(|child| child.kind == OutlineItemType::Note)
        .map(|child| child.body.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

fn project_items(children: &[OutlineItem]) -> Vec<ProjectItem> {
    let top_level = children
        .iter()
        .filter(|child| child.kind == OutlineItemType::Task)
        .map(map_to_do);
    let grouped = children
        .iter()
        .filter(|child| child.kind == OutlineItemType::Heading)
        .flat_map(map_heading);
    top_level.chain(grouped).collect()
}

// Heading notes and nested headings have no place in a project and are dropped.
fn map_heading(heading: &OutlineItem) -> Vec<ProjectItem> {
    std::iter::once(ProjectItem::heading(heading.body.clone()))
        .chain(heading.children_of_kind(OutlineItemType::Task).map(map_to_do))
        .collect()
}

fn map_to_do(task: &OutlineItem) -> ProjectItem {
    let checklist_items = task
        .children_of_kind(OutlineItemType::Task)
        .map(|entry| ChecklistItem::new(entry.body.clone()))
        .collect();
    ProjectItem::to_do(task.body.clone(), notes_of(&task.children), checklist_items)
}
