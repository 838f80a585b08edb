//! The cart façade.

use cart_store::SessionStore;
use serde_json::Value;
use tracing::{debug, warn};

use crate::cart::CartSummary;
use crate::collection::{ItemCollection, ItemMap};
use crate::config::CartConfig;
use crate::error::CartError;
use crate::ids::ItemId;
use crate::item::{Item, ItemPatch};

/// A named shopping cart kept in a session store.
///
/// The store is the only source of truth: every operation loads the cart's
/// items, works on them, and (for mutations) writes them straight back.
/// Nothing is cached between calls, so several `Cart` values pointing at
/// the same key always agree.
///
/// `add` and `update` differ on purpose. `add` of an id already in the cart
/// increases its quantity by the added amount and leaves everything else
/// alone; `update` overwrites the fields it is given, so an `update` with a
/// quantity sets that quantity rather than adding to it.
///
/// # Example
///
/// ```rust
/// use cart_core::prelude::*;
/// use cart_store::MemoryStore;
///
/// let session = MemoryStore::new();
/// let cart = Cart::new(&session);
///
/// cart.add(Item::new(1, 2, 10.0)).unwrap();
/// cart.add(Item::new(1, 3, 10.0)).unwrap();
///
/// assert_eq!(cart.get(1).unwrap().map(|i| i.quantity), Some(5));
/// assert_eq!(cart.total().unwrap(), 50.0);
/// assert_eq!(cart.count().unwrap(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Cart<S> {
    store: S,
    config: CartConfig,
    name: String,
    key: String,
}

/// Where `copy` reads items from.
#[derive(Debug)]
pub enum CartSource<'a, S> {
    /// Another cart, read through its own store.
    Handle(&'a Cart<S>),
    /// A cart name in this cart's store. The cart must exist.
    Name(&'a str),
}

impl<'a, S> From<&'a Cart<S>> for CartSource<'a, S> {
    fn from(cart: &'a Cart<S>) -> Self {
        CartSource::Handle(cart)
    }
}

impl<'a, S> From<&'a str> for CartSource<'a, S> {
    fn from(name: &'a str) -> Self {
        CartSource::Name(name)
    }
}

impl<S: SessionStore> Cart<S> {
    /// Create the default cart over `store`.
    pub fn new(store: S) -> Self {
        Self::with_config(store, CartConfig::default())
    }

    /// Create the configured default cart over `store`.
    pub fn with_config(store: S, config: CartConfig) -> Self {
        let name = config.default_name.clone();
        let key = config.key_for(&name);
        Self {
            store,
            config,
            name,
            key,
        }
    }

    /// Switch to the cart called `name`.
    pub fn set_cart(&mut self, name: &str) -> Result<(), CartError> {
        if name.is_empty() {
            return Err(CartError::InvalidArgument(
                "Cart name can not be empty.".into(),
            ));
        }
        self.key = self.config.key_for(name);
        self.name = name.to_string();
        Ok(())
    }

    /// Fluent form of [`set_cart`](Self::set_cart).
    ///
    /// ```rust
    /// # use cart_core::prelude::*;
    /// # use cart_store::MemoryStore;
    /// let session = MemoryStore::new();
    /// let mut cart = Cart::new(&session);
    /// let count = cart.named("wishlist").unwrap().count().unwrap();
    /// assert_eq!(count, 0);
    /// assert_eq!(cart.cart_key(), "wishlist_cart");
    /// ```
    pub fn named(&mut self, name: &str) -> Result<&mut Self, CartError> {
        self.set_cart(name)?;
        Ok(self)
    }

    /// Session key this cart reads and writes.
    pub fn cart_key(&self) -> &str {
        &self.key
    }

    /// Cart name, without the key suffix.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Settings this cart was built with.
    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    /// The session store behind this cart.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Add an item.
    ///
    /// If the id is already in the cart, its quantity grows by
    /// `item.quantity` and its price and attributes stay as they are.
    pub fn add(&self, item: Item) -> Result<ItemCollection, CartError> {
        let mut collection = self.load()?;
        collection.validate_item(&item)?;

        if let Some(existing) = collection.find_item(&item.id) {
            let quantity = existing
                .quantity
                .checked_add(item.quantity)
                .ok_or(CartError::Overflow)?;
            debug!(cart = %self.key, item = %item.id, quantity, "merging into existing item");
            return self.update_qty(item.id, quantity);
        }

        self.check_quantity(item.quantity)?;
        debug!(cart = %self.key, item = %item.id, quantity = item.quantity, "adding item");
        let items = collection.insert(item);
        self.save(items)?;
        Ok(collection)
    }

    /// Overwrite the fields of an existing item.
    ///
    /// Fields missing from `patch` keep their stored values. Fails if the
    /// patch has no id or the id is not in the cart; the stored items are
    /// untouched in either case.
    pub fn update(&self, patch: ItemPatch) -> Result<ItemCollection, CartError> {
        let mut collection = self.load()?;

        let id = patch.id.clone().ok_or(CartError::MissingItemId)?;
        let existing = match collection.find_item(&id) {
            Some(item) => item.clone(),
            None => {
                warn!(cart = %self.key, item = %id, "update of missing item");
                return Err(CartError::ItemNotInCart(id));
            }
        };

        let merged = patch.apply_to(existing);
        collection.validate_item(&merged)?;
        self.check_quantity(merged.quantity)?;

        debug!(cart = %self.key, item = %id, "updating item");
        let items = collection.insert(merged);
        self.save(items)?;
        Ok(collection)
    }

    /// Set the quantity of an existing item.
    pub fn update_qty(
        &self,
        id: impl Into<ItemId>,
        quantity: i64,
    ) -> Result<ItemCollection, CartError> {
        self.update(ItemPatch::new(id).quantity(quantity))
    }

    /// Set the price of an existing item.
    pub fn update_price(&self, id: impl Into<ItemId>, price: f64) -> Result<ItemCollection, CartError> {
        self.update(ItemPatch::new(id).price(price))
    }

    /// Remove an item. Removing an absent id is not an error.
    pub fn remove(&self, id: impl Into<ItemId>) -> Result<ItemCollection, CartError> {
        let id = id.into();
        let mut items = self.load()?.into_items();

        if items.remove(&id).is_some() {
            debug!(cart = %self.key, item = %id, "removed item");
        }

        self.save(&items)?;
        Ok(ItemCollection::make(items))
    }

    /// Snapshot of every item.
    pub fn items(&self) -> Result<ItemCollection, CartError> {
        self.get_items()
    }

    /// Snapshot of every item.
    pub fn get_items(&self) -> Result<ItemCollection, CartError> {
        self.load()
    }

    /// Get a single item.
    pub fn get(&self, id: impl Into<ItemId>) -> Result<Option<Item>, CartError> {
        let collection = self.load()?;
        Ok(collection.find_item(&id.into()).cloned())
    }

    /// Check if an item is in the cart.
    pub fn has(&self, id: impl Into<ItemId>) -> Result<bool, CartError> {
        Ok(self.get(id)?.is_some())
    }

    /// Number of distinct items.
    pub fn count(&self) -> Result<usize, CartError> {
        Ok(self.get_items()?.count())
    }

    /// Sum of price × quantity over all items.
    pub fn total(&self) -> Result<f64, CartError> {
        Ok(self.get_items()?.sum(|item| item.line_total()))
    }

    /// Sum of quantities over all items.
    pub fn total_quantity(&self) -> Result<i64, CartError> {
        self.get_items()?.total_quantity()
    }

    /// Count, quantity and total from one snapshot.
    pub fn summary(&self) -> Result<CartSummary, CartError> {
        CartSummary::of(&self.get_items()?)
    }

    /// Replace this cart's items with another cart's.
    ///
    /// A [`CartSource::Name`] must name a cart that exists in this cart's
    /// store; an existing but empty cart is fine.
    pub fn copy<'a>(&self, source: impl Into<CartSource<'a, S>>) -> Result<(), CartError>
    where
        S: 'a,
    {
        let raw = match source.into() {
            CartSource::Handle(other) => other.store.get_or(&other.key, empty())?,
            CartSource::Name(name) => {
                if name.is_empty() {
                    return Err(CartError::InvalidArgument(
                        "Cart name can not be empty.".into(),
                    ));
                }
                let key = self.config.key_for(name);
                if !self.store.has(&key)? {
                    warn!(cart = %self.key, source = %key, "copy from missing cart");
                    return Err(CartError::CartNotFound(name.to_string()));
                }
                self.store.get_or(&key, empty())?
            }
        };

        let items = ItemMap::from_value(raw)?;
        debug!(cart = %self.key, items = items.len(), "copied cart");
        self.save(&items)
    }

    /// Empty the cart.
    #[deprecated(note = "use `clear` instead")]
    pub fn flash(&self) -> Result<(), CartError> {
        self.clear()
    }

    /// Empty the cart by dropping its session entry.
    pub fn clear(&self) -> Result<(), CartError> {
        debug!(cart = %self.key, "clearing cart");
        self.store.forget(&self.key)?;
        Ok(())
    }

    fn load(&self) -> Result<ItemCollection, CartError> {
        let raw = self.store.get_or(&self.key, empty())?;
        let mut collection = ItemCollection::new();
        collection.set_items(Some(ItemMap::from_value(raw)?));
        Ok(collection)
    }

    fn save(&self, items: &ItemMap) -> Result<(), CartError> {
        self.store.put(&self.key, items.to_value()?)?;
        Ok(())
    }

    fn check_quantity(&self, quantity: i64) -> Result<(), CartError> {
        match self.config.max_quantity_per_item {
            Some(max) if quantity > max => Err(CartError::QuantityExceedsLimit(quantity, max)),
            _ => Ok(()),
        }
    }
}

fn empty() -> Value {
    Value::Array(Vec::new())
}
