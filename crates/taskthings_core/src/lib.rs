//! Core conversion logic for TaskThings.
//! Turns an outline editor export into a Things `add-json` project.

pub mod convert;
pub mod delivery;
pub mod logging;
pub mod model;
pub mod tree;

pub use convert::{
    convert_str, convert_value, notes_of, to_things_document, ConvertError, ConvertResult,
    ProjectOptions,
};
pub use delivery::{
    deliver, open_url, pretty_json, things_url, DeliveryError, DeliveryMode, THINGS_URL_SCHEME,
};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::outline::{FlatOutlineItem, OutlineItem, OutlineItemType, ROOT_ITEM_ID};
pub use model::things::{
    ChecklistItem, ChecklistItemAttributes, HeadingAttributes, ProjectAttributes, ProjectItem,
    ThingsDocument, ThingsProject, ToDoAttributes,
};
pub use tree::builder::{
    build_tree, OrphanPolicy, OutlineTreeBuilder, PushOutcome, TreeBuildError, TreeBuildResult,
};
pub use tree::snapshot::{snapshot_outline, EditorItem, SnapshotError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
