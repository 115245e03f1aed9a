//! Command application.

use crate::state::changes::compute_changed;
use crate::types::{Command, ItemState, Property, NO_SELECTION};

/// Apply a command to the state, producing the next state.
///
/// Commands never fail: a command naming an item or size with no match in
/// the current state returns the input state unchanged.
pub fn transition(state: ItemState, command: Command) -> ItemState {
    match command {
        Command::SetItems(items) => ItemState { items, ..state },

        Command::SetSelectedItem(item_id) => {
            let selected_item = if state.selected_item == item_id {
                NO_SELECTION
            } else {
                item_id
            };
            ItemState {
                selected_item,
                ..state
            }
        }

        Command::UpdatePrice {
            item_id,
            size_id,
            price,
            is_checked,
        } => {
            let items = state
                .items
                .iter()
                .map(|item| {
                    if item.item_id() != item_id {
                        return item.clone();
                    }
                    let mut updated = item.clone();
                    updated.properties =
                        update_properties(&item.properties, size_id, price, is_checked);
                    updated.changed = compute_changed(&updated, state.prev_items.as_deref());
                    updated
                })
                .collect();
            ItemState { items, ..state }
        }

        Command::SetPrevItems(prev_items) => ItemState { prev_items, ..state },

        Command::UndoChanges { item_id } => undo_changes(state, item_id),
    }
}

/// Replace the price and checked flag of the property matching `size_id`,
/// leaving siblings and ordering intact.
fn update_properties(
    properties: &[Property],
    size_id: i64,
    price: f64,
    is_checked: bool,
) -> Vec<Property> {
    properties
        .iter()
        .map(|property| {
            if property.size_id == size_id {
                Property {
                    price,
                    is_checked,
                    ..property.clone()
                }
            } else {
                property.clone()
            }
        })
        .collect()
}

/// Restore the item matching `item_id` to its snapshot entry.
///
/// The snapshot entry is taken whole, stored `changed` flag included. With
/// no snapshot, or no entry for the id, this is the identity even when the
/// id exists in `items`.
fn undo_changes(state: ItemState, item_id: i64) -> ItemState {
    let prev_item = match state
        .prev_items
        .as_ref()
        .and_then(|prev| prev.iter().find(|item| item.item_id() == item_id))
    {
        Some(prev) => prev.clone(),
        None => return state,
    };

    let items = state
        .items
        .iter()
        .map(|item| {
            if item.item_id() == item_id {
                prev_item.clone()
            } else {
                item.clone()
            }
        })
        .collect();

    ItemState { items, ..state }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Item, OriginItem};

    fn property(size_id: i64, price: f64, is_checked: bool) -> Property {
        Property {
            size_id,
            price,
            size_name: match size_id {
                0 => "Small".to_string(),
                1 => "Medium".to_string(),
                _ => "Large".to_string(),
            },
            is_checked,
        }
    }

    fn item(item_id: i64, properties: Vec<Property>) -> Item {
        Item {
            origin_item: OriginItem {
                item_id,
                name: format!("item-{item_id}"),
            },
            properties,
            changed: false,
        }
    }

    fn two_item_state() -> ItemState {
        let items = vec![
            item(1, vec![property(0, 4.42, false), property(1, 6.52, true)]),
            item(2, vec![property(0, 3.99, true)]),
        ];
        ItemState {
            prev_items: Some(items.clone()),
            items,
            selected_item: NO_SELECTION,
        }
    }

    #[test]
    fn test_set_items_replaces_wholesale() {
        let state = two_item_state();
        let replacement = vec![item(7, vec![property(0, 1.0, true)])];

        let next = transition(state.clone(), Command::SetItems(replacement.clone()));

        assert_eq!(next.items, replacement);
        assert_eq!(next.prev_items, state.prev_items);
        assert_eq!(next.selected_item, state.selected_item);
    }

    #[test]
    fn test_select_then_reselect_toggles_off() {
        let state = two_item_state();

        let next = transition(state, Command::SetSelectedItem(5));
        assert_eq!(next.selected_item, 5);

        let next = transition(next, Command::SetSelectedItem(5));
        assert_eq!(next.selected_item, NO_SELECTION);
    }

    #[test]
    fn test_select_does_not_validate_id() {
        let state = two_item_state();
        let next = transition(state, Command::SetSelectedItem(999));
        assert_eq!(next.selected_item, 999);
    }

    #[test]
    fn test_update_price_replaces_matched_property_only() {
        let state = two_item_state();

        let next = transition(
            state.clone(),
            Command::UpdatePrice {
                item_id: 1,
                size_id: 0,
                price: 150.0,
                is_checked: true,
            },
        );

        let updated = next.item(1).unwrap();
        assert_eq!(updated.properties[0], property(0, 150.0, true));
        // Sibling property and the other item are untouched.
        assert_eq!(updated.properties[1], state.item(1).unwrap().properties[1]);
        assert_eq!(next.item(2), state.item(2));
    }

    #[test]
    fn test_update_price_missing_item_is_identity() {
        let state = two_item_state();
        let next = transition(
            state.clone(),
            Command::UpdatePrice {
                item_id: 42,
                size_id: 0,
                price: 1.0,
                is_checked: false,
            },
        );
        assert_eq!(next, state);
    }

    #[test]
    fn test_update_price_missing_size_keeps_properties() {
        let state = two_item_state();
        let next = transition(
            state.clone(),
            Command::UpdatePrice {
                item_id: 2,
                size_id: 9,
                price: 1.0,
                is_checked: false,
            },
        );
        assert_eq!(next.item(2).unwrap().properties, state.item(2).unwrap().properties);
    }

    #[test]
    fn test_change_flag_follows_values_not_history() {
        let state = two_item_state();

        let next = transition(
            state,
            Command::UpdatePrice {
                item_id: 2,
                size_id: 0,
                price: 101.0,
                is_checked: true,
            },
        );
        assert!(next.item(2).unwrap().changed);

        // Restoring the original value clears the flag again.
        let next = transition(
            next,
            Command::UpdatePrice {
                item_id: 2,
                size_id: 0,
                price: 3.99,
                is_checked: true,
            },
        );
        assert!(!next.item(2).unwrap().changed);
    }

    #[test]
    fn test_update_without_snapshot_never_flags() {
        let mut state = two_item_state();
        state.prev_items = None;

        let next = transition(
            state,
            Command::UpdatePrice {
                item_id: 1,
                size_id: 0,
                price: 999.0,
                is_checked: false,
            },
        );
        assert!(!next.item(1).unwrap().changed);
    }

    #[test]
    fn test_set_prev_items_does_not_touch_flags() {
        let state = two_item_state();
        let next = transition(
            state.clone(),
            Command::UpdatePrice {
                item_id: 1,
                size_id: 0,
                price: 100.0,
                is_checked: true,
            },
        );
        assert!(next.item(1).unwrap().changed);

        // Snapshotting the edited list leaves the stale flag in place until
        // the next update recomputes it.
        let snapshotted = transition(
            next.clone(),
            Command::SetPrevItems(Some(next.items.clone())),
        );
        assert!(snapshotted.item(1).unwrap().changed);
        assert_eq!(snapshotted.prev_items.as_deref(), Some(next.items.as_slice()));
    }

    #[test]
    fn test_undo_restores_snapshot_entry() {
        let state = two_item_state();

        let edited = transition(
            state.clone(),
            Command::UpdatePrice {
                item_id: 1,
                size_id: 0,
                price: 100.0,
                is_checked: true,
            },
        );
        let edited = transition(
            edited,
            Command::UpdatePrice {
                item_id: 1,
                size_id: 1,
                price: 200.0,
                is_checked: false,
            },
        );
        assert!(edited.item(1).unwrap().changed);

        // However many edits were applied, undo lands exactly on the snapshot.
        let undone = transition(edited, Command::UndoChanges { item_id: 1 });
        assert_eq!(undone.item(1), state.prev_items.as_ref().unwrap().iter().find(|i| i.item_id() == 1));
        assert!(!undone.item(1).unwrap().changed);
    }

    #[test]
    fn test_undo_without_snapshot_is_identity() {
        let mut state = two_item_state();
        state.prev_items = None;

        let next = transition(state.clone(), Command::UndoChanges { item_id: 1 });
        assert_eq!(next, state);
    }

    #[test]
    fn test_undo_missing_snapshot_entry_is_identity() {
        let mut state = two_item_state();
        // Snapshot knows nothing about item 2 even though items does.
        state.prev_items = Some(vec![item(1, vec![property(0, 4.42, false)])]);

        let next = transition(state.clone(), Command::UndoChanges { item_id: 2 });
        assert_eq!(next, state);
    }

    #[test]
    fn test_undo_leaves_other_items_alone() {
        let state = two_item_state();
        let edited = transition(
            state,
            Command::UpdatePrice {
                item_id: 2,
                size_id: 0,
                price: 50.0,
                is_checked: false,
            },
        );

        let undone = transition(edited.clone(), Command::UndoChanges { item_id: 1 });
        assert_eq!(undone.item(2), edited.item(2));
    }
}
