// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal item model: just enough identity and structure for the
//! focus operations to resolve what they are pointed at.

use hashbrown::HashMap;
use kurbo::Point;
use trellis_geom::Bbox;
use trellis_scene::{NodeId, Scene};

/// What kind of diagram element an item is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemKind {
    /// A node.
    Node,
    /// An edge connecting two items by id.
    Edge {
        /// Id of the source item.
        source: String,
        /// Id of the target item.
        target: String,
    },
    /// A grouping combo.
    Combo,
}

/// One registered diagram element backed by a scene group.
#[derive(Clone, Debug)]
pub struct Item {
    id: String,
    kind: ItemKind,
    group: NodeId,
}

impl Item {
    /// Creates an item over its scene group.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: ItemKind, group: NodeId) -> Self {
        Self {
            id: id.into(),
            kind,
            group,
        }
    }

    /// The item's identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The item's kind.
    #[must_use]
    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    /// The scene group carrying the item's drawables.
    #[must_use]
    pub fn group(&self) -> NodeId {
        self.group
    }

    /// The item's anchor position from its current transform, not from
    /// stale model coordinates. `None` when the group is gone.
    #[must_use]
    pub fn anchor(&self, scene: &Scene) -> Option<Point> {
        scene.local_position(self.group)
    }

    /// The item's intrinsic bounding box in model space.
    #[must_use]
    pub fn bbox(&self, scene: &Scene) -> Bbox {
        scene.world_bounds(self.group)
    }
}

/// Id lookup for [`Item`]s.
#[derive(Debug, Default)]
pub struct ItemRegistry {
    items: HashMap<String, Item>,
}

impl ItemRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an item, replacing any previous entry with its id.
    pub fn register(&mut self, item: Item) {
        self.items.insert(item.id.clone(), item);
    }

    /// Removes an item by id.
    pub fn remove(&mut self, id: &str) -> Option<Item> {
        self.items.remove(id)
    }

    /// Looks up an item by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    /// Number of registered items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
