//! # Menustore
//!
//! A change-tracking catalog price store with per-item undo, mirrored into
//! a durable key-value slot after every mutation.
//!
//! ## Core Concepts
//!
//! - **Items**: catalog products wrapping an immutable identity plus
//!   per-size editable price properties
//! - **Commands**: a closed set of mutations applied by a pure transition
//!   function; missing ids are no-ops, never errors
//! - **Snapshot**: the last-saved baseline powering derived change flags
//!   and per-item undo
//! - **Durable slot**: a single named storage key holding the serialized
//!   root state across restarts
//!
//! ## Example
//!
//! ```ignore
//! use menustore::{Command, MemoryStorage, Store, StoreConfig};
//!
//! let store = Store::open(StoreConfig::default(), Box::new(MemoryStorage::new()));
//!
//! // Toggle a size off and reprice it
//! store.dispatch(Command::UpdatePrice {
//!     item_id: 1,
//!     size_id: 0,
//!     price: 4.49,
//!     is_checked: false,
//! })?;
//!
//! // Roll the item back to its last-saved values
//! store.dispatch(Command::UndoChanges { item_id: 1 })?;
//! ```

pub mod error;
pub mod seed;
pub mod state;
pub mod storage;
pub mod store;
pub mod types;

// Re-exports
pub use error::{Result, StoreError};
pub use seed::{derive_seed_items, Catalog};
pub use state::{compute_changed, transition};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{Store, StoreConfig};
pub use types::*;
