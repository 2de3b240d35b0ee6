//! Flat item list to outline tree reconstruction.
//!
//! # Responsibility
//! - Re-nest a parent-ordered flat item sequence under the synthetic root.
//! - Resolve parents through an `id -> slot` index instead of tree search.
//!
//! # Invariants
//! - Sibling order matches input order.
//! - A parent must be pushed before any of its children.
//! - Ids are unique across the tree, the root id included.

use crate::model::outline::{FlatOutlineItem, OutlineItem, ROOT_ITEM_ID};
use log::{debug, warn};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type used by tree reconstruction.
pub type TreeBuildResult<T> = Result<T, TreeBuildError>;

/// Errors from tree reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeBuildError {
    /// Item references a parent that has not been pushed (or was filtered out).
    ParentNotFound { item_id: String, parent_id: String },
    /// Item id is already present in the tree.
    DuplicateId(String),
}

impl Display for TreeBuildError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ParentNotFound { item_id, parent_id } => write!(
                f,
                "parent `{parent_id}` of item `{item_id}` not found in tree"
            ),
            Self::DuplicateId(id) => write!(f, "duplicate outline item id: `{id}`"),
        }
    }
}

impl Error for TreeBuildError {}

/// What to do with an item whose parent is unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrphanPolicy {
    /// Fail the whole reconstruction.
    #[default]
    Reject,
    /// Drop the orphan. Its own children become orphans in turn.
    Skip,
}

/// Outcome of one successful `push`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    Attached,
    SkippedOrphan,
}

struct Slot {
    item: OutlineItem,
    children: Vec<usize>,
}

/// Incremental tree builder seeded with the synthetic root.
pub struct OutlineTreeBuilder {
    slots: Vec<Slot>,
    index: HashMap<String, usize>,
    policy: OrphanPolicy,
    skipped: usize,
}

impl Default for OutlineTreeBuilder {
    fn default() -> Self {
        Self::new(OrphanPolicy::default())
    }
}

impl OutlineTreeBuilder {
    /// Creates a builder holding only the root.
    pub fn new(policy: OrphanPolicy) -> Self {
        let mut index = HashMap::new();
        index.insert(ROOT_ITEM_ID.to_string(), 0);
        Self {
            slots: vec![Slot {
                item: OutlineItem::root(),
                children: Vec::new(),
            }],
            index,
            policy,
            skipped: 0,
        }
    }

    /// Attaches `item` as the last child of its parent.
    ///
    /// # Errors
    /// - `ParentNotFound` under `OrphanPolicy::Reject`.
    /// - `DuplicateId` when the id was already pushed, whatever the policy.
    pub fn push(&mut self, item: FlatOutlineItem) -> TreeBuildResult<PushOutcome> {
        let Some(&parent_slot) = self.index.get(item.parent_id.as_str()) else {
            return match self.policy {
                OrphanPolicy::Reject => Err(TreeBuildError::ParentNotFound {
                    item_id: item.id,
                    parent_id: item.parent_id,
                }),
                OrphanPolicy::Skip => {
                    warn!(
                        "event=tree_orphan_skipped module=tree status=skipped item_id={} parent_id={}",
                        item.id, item.parent_id
                    );
                    self.skipped += 1;
                    Ok(PushOutcome::SkippedOrphan)
                }
            };
        };

        if self.index.contains_key(item.id.as_str()) {
            return Err(TreeBuildError::DuplicateId(item.id));
        }

        let slot = self.slots.len();
        self.index.insert(item.id.clone(), slot);
        self.slots.push(Slot {
            item: item.into_item(),
            children: Vec::new(),
        });
        self.slots[parent_slot].children.push(slot);
        Ok(PushOutcome::Attached)
    }

    /// Number of items attached so far, root excluded.
    pub fn len(&self) -> usize {
        self.slots.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of orphans dropped under `OrphanPolicy::Skip`.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Materializes the nested tree rooted at the synthetic root.
    pub fn build(self) -> OutlineItem {
        debug!(
            "event=tree_build module=tree status=ok items={} skipped={}",
            self.len(),
            self.skipped
        );

        let (mut nodes, links): (Vec<Option<OutlineItem>>, Vec<Vec<usize>>) = self
            .slots
            .into_iter()
            .map(|slot| (Some(slot.item), slot.children))
            .unzip();

        // Children always sit at higher slots than their parent, so a reverse
        // sweep sees every subtree complete before it is moved.
        for parent in (0..nodes.len()).rev() {
            let children = links[parent]
                .iter()
                .filter_map(|&child| nodes[child].take())
                .collect::<Vec<_>>();
            if let Some(node) = nodes[parent].as_mut() {
                node.children = children;
            }
        }

        nodes
            .into_iter()
            .next()
            .flatten()
            .unwrap_or_else(OutlineItem::root)
    }
}

/// Builds a tree from a parent-ordered flat sequence.
pub fn build_tree<I>(items: I, policy: OrphanPolicy) -> TreeBuildResult<OutlineItem>
where
    I: IntoIterator<Item = FlatOutlineItem>,
{
    let mut builder = OutlineTreeBuilder::new(policy);
    for item in items {
        builder.push(item)?;
    }
    Ok(builder.build())
}
