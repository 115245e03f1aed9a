//! Pure state transitions over the item aggregate.
//!
//! Transitions take the current state by value and return the next state;
//! they perform no I/O and never fail. Missing ids are no-ops.

mod changes;
mod transition;

pub use changes::compute_changed;
pub use transition::transition;
