//! Catalog seed source and bootstrap derivation.

use crate::types::{Item, OriginItem, Price, Property, Size};

/// The three immutable catalog lists the store seeds from when the durable
/// slot holds no usable state.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub origin_items: Vec<OriginItem>,
    pub prices: Vec<Price>,
    pub sizes: Vec<Size>,
}

impl Catalog {
    /// The dataset the store ships with: two pizzas in three sizes each.
    pub fn sample() -> Self {
        Self {
            origin_items: vec![
                OriginItem {
                    item_id: 0,
                    name: "Margherita".to_string(),
                },
                OriginItem {
                    item_id: 1,
                    name: "Pepperoni".to_string(),
                },
            ],
            prices: vec![
                Price { item_id: 0, size_id: 0, price: 3.99 },
                Price { item_id: 0, size_id: 1, price: 5.99 },
                Price { item_id: 0, size_id: 2, price: 7.99 },
                Price { item_id: 1, size_id: 0, price: 4.42 },
                Price { item_id: 1, size_id: 1, price: 6.52 },
                Price { item_id: 1, size_id: 2, price: 8.62 },
            ],
            sizes: vec![
                Size { size_id: 0, name: "Small".to_string() },
                Size { size_id: 1, name: "Medium".to_string() },
                Size { size_id: 2, name: "Large".to_string() },
            ],
        }
    }

    /// Derive the bootstrap item list from this catalog.
    pub fn derive_items(&self) -> Vec<Item> {
        derive_seed_items(&self.origin_items, &self.prices, &self.sizes)
    }
}

/// Derive bootstrap items from the catalog lists.
///
/// Each origin item gets one property per matching price entry, all checked,
/// with the size name looked up by `size_id` (`"Unknown"` when the size list
/// has no entry). Derived item ids carry the source id shifted by one: a
/// zero-valued id reads as absent in downstream presentation logic, and
/// stored sessions depend on the shifted ids.
pub fn derive_seed_items(
    origin_items: &[OriginItem],
    prices: &[Price],
    sizes: &[Size],
) -> Vec<Item> {
    origin_items
        .iter()
        .map(|origin| {
            let properties = prices
                .iter()
                .filter(|price| price.item_id == origin.item_id)
                .map(|price| {
                    let size_name = sizes
                        .iter()
                        .find(|size| size.size_id == price.size_id)
                        .map(|size| size.name.clone())
                        .unwrap_or_else(|| "Unknown".to_string());
                    Property {
                        size_id: price.size_id,
                        price: price.price,
                        size_name,
                        is_checked: true,
                    }
                })
                .collect();

            Item {
                origin_item: OriginItem {
                    item_id: origin.item_id + 1,
                    name: origin.name.clone(),
                },
                properties,
                changed: false,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_derivation() {
        let items = Catalog::sample().derive_items();

        assert_eq!(items.len(), 2);
        for item in &items {
            assert_eq!(item.properties.len(), 3);
            assert!(!item.changed);
            assert!(item.properties.iter().all(|p| p.is_checked));
        }

        // Source ids are shifted by one.
        assert_eq!(items[0].item_id(), 1);
        assert_eq!(items[0].origin_item.name, "Margherita");
        assert_eq!(items[1].item_id(), 2);
        assert_eq!(items[1].origin_item.name, "Pepperoni");

        assert_eq!(items[1].properties[0].price, 4.42);
        assert_eq!(items[1].properties[0].size_name, "Small");
        assert_eq!(items[1].properties[2].price, 8.62);
        assert_eq!(items[1].properties[2].size_name, "Large");
    }

    #[test]
    fn test_empty_origin_items_yield_empty_list() {
        let catalog = Catalog::sample();
        let items = derive_seed_items(&[], &catalog.prices, &catalog.sizes);
        assert!(items.is_empty());
    }

    #[test]
    fn test_unknown_size_gets_fallback_name() {
        let origin_items = vec![OriginItem {
            item_id: 0,
            name: "Calzone".to_string(),
        }];
        let prices = vec![Price {
            item_id: 0,
            size_id: 99,
            price: 9.99,
        }];

        let items = derive_seed_items(&origin_items, &prices, &[]);
        assert_eq!(items[0].properties[0].size_name, "Unknown");
    }

    #[test]
    fn test_item_without_prices_has_no_properties() {
        let origin_items = vec![OriginItem {
            item_id: 5,
            name: "Bianca".to_string(),
        }];

        let items = derive_seed_items(&origin_items, &[], &Catalog::sample().sizes);
        assert_eq!(items.len(), 1);
        assert!(items[0].properties.is_empty());
    }
}
