//! Core types for the catalog store.

use serde::{Deserialize, Serialize};

/// Immutable catalog identity of an item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginItem {
    pub item_id: i64,
    pub name: String,
}

/// Immutable catalog identity of a size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Size {
    pub size_id: i64,
    pub name: String,
}

/// Immutable catalog fact: the base price of an item in a size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub item_id: i64,
    pub size_id: i64,
    pub price: f64,
}

/// Per-item, per-size editable fact: whether the size is offered and at
/// what price. `size_id` is unique within an item's property list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub size_id: i64,
    pub price: f64,
    pub size_name: String,
    pub is_checked: bool,
}

/// A catalog item exposed for editing.
///
/// `changed` is derived by diffing against the snapshot and is never set
/// directly by callers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub origin_item: OriginItem,
    pub properties: Vec<Property>,
    pub changed: bool,
}

impl Item {
    pub fn item_id(&self) -> i64 {
        self.origin_item.item_id
    }
}

/// Sentinel for "no item selected".
pub const NO_SELECTION: i64 = -1;

/// Root state aggregate.
///
/// `items` are unique by `origin_item.item_id`. `prev_items`, when present,
/// is a full snapshot of `items` taken at load or explicit snapshot time and
/// is never partially updated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemState {
    pub items: Vec<Item>,
    pub prev_items: Option<Vec<Item>>,
    pub selected_item: i64,
}

impl Default for ItemState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            prev_items: None,
            selected_item: NO_SELECTION,
        }
    }
}

impl ItemState {
    /// Look up an item by its `origin_item.item_id`.
    pub fn item(&self, item_id: i64) -> Option<&Item> {
        self.items.iter().find(|item| item.item_id() == item_id)
    }
}

/// The durable slot document: the root state under its feature key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub item: ItemState,
}

/// A request to mutate state, processed synchronously by the transition
/// engine. Every variant is tolerant: a command referencing an id with no
/// match leaves the state unchanged rather than failing.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Replace `items` wholesale. `prev_items` and `selected_item` are
    /// untouched. Used for full reloads.
    SetItems(Vec<Item>),

    /// Toggle selection: selecting the already-selected id deselects
    /// (back to `NO_SELECTION`). The id is not validated against `items`.
    SetSelectedItem(i64),

    /// Replace one property's price and checked flag, then recompute the
    /// owning item's `changed` flag against the snapshot.
    UpdatePrice {
        item_id: i64,
        size_id: i64,
        price: f64,
        is_checked: bool,
    },

    /// Replace the snapshot wholesale. Does not recompute `changed` on
    /// `items`; flags refresh on the next `UpdatePrice`.
    SetPrevItems(Option<Vec<Item>>),

    /// Restore one item to its snapshot entry, including the entry's stored
    /// `changed` flag.
    UndoChanges { item_id: i64 },
}
