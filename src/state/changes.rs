//! Change detection against the last-saved snapshot.

use crate::types::Item;

/// Derive the `changed` flag for an item by diffing its properties against
/// the matching snapshot entry.
///
/// Without a snapshot there is nothing to compare against, so the item is
/// never flagged. The same holds for an item with no snapshot entry: a
/// brand-new item cannot show as changed until a snapshot contains it.
/// Properties are matched by `size_id`, not position; a current property
/// with no counterpart counts as a change.
pub fn compute_changed(item: &Item, prev_items: Option<&[Item]>) -> bool {
    let prev_items = match prev_items {
        Some(prev) => prev,
        None => return false,
    };

    let prev_item = match prev_items.iter().find(|prev| prev.item_id() == item.item_id()) {
        Some(prev) => prev,
        None => return false,
    };

    item.properties.iter().any(|prop| {
        match prev_item
            .properties
            .iter()
            .find(|prev_prop| prev_prop.size_id == prop.size_id)
        {
            Some(prev_prop) => {
                prop.price != prev_prop.price || prop.is_checked != prev_prop.is_checked
            }
            None => true,
        }
    })
}
