//! Ordered item storage and aggregate queries.
//!
//! [`ItemCollection`] knows nothing about sessions. The cart loads a
//! collection from the store, works on it, and writes [`ItemMap`] back.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CartError;
use crate::ids::ItemId;
use crate::item::Item;

/// Items keyed by id, in insertion order.
///
/// Stored as a JSON array of item records, since JSON object keys cannot
/// carry numeric ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Item>", into = "Vec<Item>")]
pub struct ItemMap(IndexMap<ItemId, Item>);

impl ItemMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a stored snapshot. `null` reads as an empty map.
    pub fn from_value(value: Value) -> Result<Self, CartError> {
        if value.is_null() {
            return Ok(Self::new());
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Encode for storage.
    pub fn to_value(&self) -> Result<Value, CartError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Upsert by id, keeping the original position of an existing id.
    pub fn insert(&mut self, item: Item) {
        self.0.insert(item.id.clone(), item);
    }

    /// Remove by id, keeping the order of the rest.
    pub fn remove(&mut self, id: &ItemId) -> Option<Item> {
        self.0.shift_remove(id)
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.0.get(id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.0.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.0.values()
    }

    /// Ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &ItemId> {
        self.0.keys()
    }
}

impl From<Vec<Item>> for ItemMap {
    fn from(items: Vec<Item>) -> Self {
        let mut map = ItemMap::new();
        for item in items {
            map.insert(item);
        }
        map
    }
}

impl From<ItemMap> for Vec<Item> {
    fn from(map: ItemMap) -> Self {
        map.0.into_values().collect()
    }
}

impl FromIterator<Item> for ItemMap {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        let mut map = ItemMap::new();
        for item in iter {
            map.insert(item);
        }
        map
    }
}

impl<'a> IntoIterator for &'a ItemMap {
    type Item = &'a Item;
    type IntoIter = indexmap::map::Values<'a, ItemId, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.values()
    }
}

/// In-memory working set of cart items.
///
/// Also serves as the read-only view handed back from cart operations,
/// exposing [`count`](Self::count) and [`sum`](Self::sum).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemCollection {
    items: ItemMap,
}

impl ItemCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a raw map in a fresh collection.
    pub fn make(items: ItemMap) -> Self {
        Self { items }
    }

    /// Replace the contents. `None` empties the collection.
    pub fn set_items(&mut self, items: Option<ItemMap>) {
        self.items = items.unwrap_or_default();
    }

    /// Check that `item` may be inserted.
    pub fn validate_item(&self, item: &Item) -> Result<(), CartError> {
        item.validate()
    }

    /// Upsert `item` and return the updated map.
    ///
    /// The returned map is the collection's own state; callers persist it
    /// if the change should outlive this collection.
    pub fn insert(&mut self, item: Item) -> &ItemMap {
        self.items.insert(item);
        &self.items
    }

    /// Look up an item by id.
    pub fn find_item(&self, id: &ItemId) -> Option<&Item> {
        self.items.get(id)
    }

    /// Number of distinct items, not total quantity.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Sum a projection over every item.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cart_core::{Item, ItemCollection, ItemMap};
    ///
    /// let items: ItemMap = vec![Item::new(1, 2, 10.0), Item::new(2, 1, 5.0)].into();
    /// let view = ItemCollection::make(items);
    ///
    /// assert_eq!(view.sum(|i| i.quantity), 3);
    /// assert_eq!(view.sum(|i| i.line_total()), 25.0);
    /// ```
    pub fn sum<T, F>(&self, projection: F) -> T
    where
        T: std::iter::Sum<T>,
        F: Fn(&Item) -> T,
    {
        self.items.iter().map(projection).sum()
    }

    /// Sum of quantities, failing on overflow.
    pub fn total_quantity(&self) -> Result<i64, CartError> {
        self.items
            .iter()
            .try_fold(0i64, |acc, item| acc.checked_add(item.quantity))
            .ok_or(CartError::Overflow)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Borrow the underlying map.
    pub fn items(&self) -> &ItemMap {
        &self.items
    }

    /// Take the underlying map.
    pub fn into_items(self) -> ItemMap {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ids(collection: &ItemCollection) -> Vec<ItemId> {
        collection.items().ids().cloned().collect()
    }

    #[test]
    fn test_insert_appends_in_order() {
        let mut collection = ItemCollection::new();
        collection.insert(Item::new(3, 1, 1.0));
        collection.insert(Item::new("b", 1, 1.0));
        collection.insert(Item::new(1, 1, 1.0));

        assert_eq!(
            ids(&collection),
            vec![ItemId::from(3), ItemId::from("b"), ItemId::from(1)]
        );
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut collection = ItemCollection::new();
        collection.insert(Item::new(1, 1, 1.0));
        collection.insert(Item::new(2, 1, 1.0));
        let items = collection.insert(Item::new(1, 9, 1.0));

        assert_eq!(items.len(), 2);
        assert_eq!(items.iter().next().map(|i| i.quantity), Some(9));
        assert_eq!(ids(&collection), vec![ItemId::from(1), ItemId::from(2)]);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut items: ItemMap = (1..=4).map(|n| Item::new(n, 1, 1.0)).collect();
        items.remove(&ItemId::from(2));

        let remaining: Vec<ItemId> = items.ids().cloned().collect();
        assert_eq!(
            remaining,
            vec![ItemId::from(1), ItemId::from(3), ItemId::from(4)]
        );
    }

    #[test]
    fn test_find_item() {
        let mut collection = ItemCollection::new();
        collection.insert(Item::new("mug", 1, 3.0));

        assert!(collection.find_item(&ItemId::from("mug")).is_some());
        assert!(collection.find_item(&ItemId::from("cup")).is_none());
    }

    #[test]
    fn test_set_items_none_is_empty() {
        let mut collection = ItemCollection::make(vec![Item::new(1, 1, 1.0)].into());
        collection.set_items(None);
        assert!(collection.is_empty());
    }

    #[test]
    fn test_count_is_unique_items() {
        let view = ItemCollection::make(vec![Item::new(1, 5, 1.0), Item::new(2, 5, 1.0)].into());
        assert_eq!(view.count(), 2);
        assert_eq!(view.sum(|i| i.quantity), 10);
    }

    #[test]
    fn test_empty_sums_are_zero() {
        let view = ItemCollection::new();
        assert_eq!(view.count(), 0);
        assert_eq!(view.sum(|i| i.quantity), 0);
        assert_eq!(view.sum(|i| i.line_total()), 0.0);
    }

    #[test]
    fn test_total_quantity_overflow() {
        let view = ItemCollection::make(
            vec![Item::new(1, i64::MAX, 1.0), Item::new(2, 1, 1.0)].into(),
        );
        assert!(matches!(view.total_quantity(), Err(CartError::Overflow)));

        let view = ItemCollection::make(vec![Item::new(1, 2, 1.0), Item::new(2, 3, 1.0)].into());
        assert_eq!(view.total_quantity().unwrap(), 5);
    }

    #[test]
    fn test_map_wire_format() {
        let items: ItemMap = vec![Item::new(2, 1, 1.5), Item::new("a", 2, 3.0)].into();
        let value = items.to_value().unwrap();

        assert_eq!(
            value,
            json!([
                {"id": 2, "quantity": 1, "price": 1.5},
                {"id": "a", "quantity": 2, "price": 3.0}
            ])
        );
        assert_eq!(ItemMap::from_value(value).unwrap(), items);
    }

    #[test]
    fn test_map_from_null() {
        assert!(ItemMap::from_value(Value::Null).unwrap().is_empty());
    }

    #[test]
    fn test_map_from_garbage() {
        let err = ItemMap::from_value(json!({"not": "a list"})).unwrap_err();
        assert!(matches!(err, CartError::Serialization(_)));
    }
}
