//! Main Store coordinator tying transitions, persistence, and queries together.

use crate::error::{Result, StoreError};
use crate::seed::Catalog;
use crate::state::transition;
use crate::storage::Storage;
use crate::types::{Command, Item, ItemState, PersistedState, NO_SELECTION};
use parking_lot::Mutex;
use tracing::{debug, warn};

/// Feature key of the item state within the slot namespace.
const ITEM_STATE_KEY: &str = "item";

/// Store configuration.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    /// Namespace prefix for the durable slot key.
    pub key_prefix: String,

    /// Catalog used to seed when the slot holds no usable state.
    pub catalog: Catalog,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            key_prefix: "menustore".to_string(),
            catalog: Catalog::sample(),
        }
    }
}

/// The catalog store.
///
/// Owns the current [`ItemState`] value and serializes command processing:
/// each dispatch runs the pure transition, commits the result, and mirrors
/// the full root state into the durable slot before returning. Reads are
/// cloned projections of the current value.
pub struct Store {
    /// Durable slot key, `<prefix>_item`.
    slot_key: String,

    /// Consumed storage backend; this store is its sole writer.
    storage: Box<dyn Storage>,

    /// Current state value. The lock serializes dispatches.
    state: Mutex<ItemState>,
}

impl Store {
    /// Open a store against a storage backend.
    ///
    /// Adopts the persisted state verbatim when the slot parses; otherwise
    /// seeds from the configured catalog, with the seed list doubling as the
    /// initial snapshot, and writes that state to the slot immediately.
    /// Initialization failures degrade to seeding and are never surfaced.
    pub fn open(config: StoreConfig, storage: Box<dyn Storage>) -> Self {
        let slot_key = format!("{}_{}", config.key_prefix, ITEM_STATE_KEY);

        let state = match Self::load_slot(storage.as_ref(), &slot_key) {
            Some(state) => {
                debug!(key = %slot_key, items = state.items.len(), "adopted persisted state");
                state
            }
            None => Self::seed_initial_state(&config.catalog, storage.as_ref(), &slot_key),
        };

        Self {
            slot_key,
            storage,
            state: Mutex::new(state),
        }
    }

    /// Apply a command and mirror the result to the durable slot.
    ///
    /// The transition itself cannot fail; an error from here is a
    /// persistence failure. The in-memory state keeps the transition result
    /// either way, so a failed write costs durability, not the edit.
    pub fn dispatch(&self, command: Command) -> Result<()> {
        let mut state = self.state.lock();

        let next = transition(state.clone(), command);
        if next == *state {
            debug!(key = %self.slot_key, "command left state unchanged");
        }
        *state = next;

        let encoded = serde_json::to_string(&PersistedState {
            item: state.clone(),
        })?;
        self.storage
            .write(&self.slot_key, &encoded)
            .map_err(|e| StoreError::SlotWrite {
                key: self.slot_key.clone(),
                reason: e.to_string(),
            })
    }

    // --- Queries ---

    /// The whole current state.
    pub fn state(&self) -> ItemState {
        self.state.lock().clone()
    }

    /// The current item list.
    pub fn items(&self) -> Vec<Item> {
        self.state.lock().items.clone()
    }

    /// The selected item id, or [`NO_SELECTION`].
    pub fn selected_item(&self) -> i64 {
        self.state.lock().selected_item
    }

    /// The last-saved snapshot, if one exists.
    pub fn prev_items(&self) -> Option<Vec<Item>> {
        self.state.lock().prev_items.clone()
    }

    /// The durable slot key this store reads and writes.
    pub fn slot_key(&self) -> &str {
        &self.slot_key
    }

    // --- Private Helpers ---

    /// Read and decode the slot. Read errors and malformed documents are
    /// both "no prior state".
    fn load_slot(storage: &dyn Storage, key: &str) -> Option<ItemState> {
        let raw = match storage.read(key) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(key, error = %e, "durable slot unreadable, falling back to seed");
                return None;
            }
        };

        match serde_json::from_str::<PersistedState>(&raw) {
            Ok(doc) => Some(doc.item),
            Err(e) => {
                warn!(key, error = %e, "durable slot malformed, falling back to seed");
                None
            }
        }
    }

    /// Derive the seed state and write it as the initial slot value.
    fn seed_initial_state(catalog: &Catalog, storage: &dyn Storage, key: &str) -> ItemState {
        let items = catalog.derive_items();
        if items.is_empty() {
            warn!(key, "seed catalog produced no items; check the data source");
        }

        let state = ItemState {
            prev_items: Some(items.clone()),
            items,
            selected_item: NO_SELECTION,
        };

        match serde_json::to_string(&PersistedState {
            item: state.clone(),
        }) {
            Ok(encoded) => {
                if let Err(e) = storage.write(key, &encoded) {
                    warn!(key, error = %e, "failed to write seeded state");
                }
            }
            Err(e) => {
                warn!(key, error = %e, "failed to encode seeded state");
            }
        }

        state
    }
}
