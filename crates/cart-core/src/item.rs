//! Line item records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CartError;
use crate::ids::ItemId;

/// Field names owned by the typed part of an item.
const RESERVED_FIELDS: [&str; 3] = ["id", "quantity", "price"];

/// A line item in the cart.
///
/// Extra attributes (name, options, ...) are carried opaquely and flattened
/// alongside the required fields when stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Item identifier, unique within a cart.
    pub id: ItemId,
    /// Quantity.
    pub quantity: i64,
    /// Unit price.
    pub price: f64,
    /// Additional attributes echoed back verbatim.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Item {
    /// Create a new item with no extra attributes.
    pub fn new(id: impl Into<ItemId>, quantity: i64, price: f64) -> Self {
        Self {
            id: id.into(),
            quantity,
            price,
            attributes: Map::new(),
        }
    }

    /// Attach an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Look up an attribute.
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Price times quantity.
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }

    /// Check that the item is fit for insertion.
    ///
    /// Requires a non-empty id, a quantity of at least zero, a finite,
    /// non-negative price, and no attribute named after one of those fields.
    pub fn validate(&self) -> Result<(), CartError> {
        if self.id.is_empty() {
            return Err(CartError::Validation("id must not be empty".into()));
        }
        if self.quantity < 0 {
            return Err(CartError::Validation(format!(
                "quantity must be zero or more, got {}",
                self.quantity
            )));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(CartError::Validation(format!(
                "price must be a non-negative number, got {}",
                self.price
            )));
        }
        if let Some(name) = RESERVED_FIELDS
            .iter()
            .find(|name| self.attributes.contains_key(**name))
        {
            return Err(CartError::Validation(format!(
                "attribute name `{}` is reserved",
                name
            )));
        }
        Ok(())
    }
}

impl TryFrom<Value> for Item {
    type Error = CartError;

    /// Parse an untyped payload such as a decoded request body.
    ///
    /// `id`, `quantity` and `price` are required; every other field becomes
    /// an attribute.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let mut fields = into_object(value)?;

        let id = match fields.remove("id") {
            Some(v) => parse_id(v)?,
            None => return Err(CartError::Validation("id is required".into())),
        };
        let quantity = match fields.remove("quantity") {
            Some(v) => parse_quantity(&v)?,
            None => return Err(CartError::Validation("quantity is required".into())),
        };
        let price = match fields.remove("price") {
            Some(v) => parse_price(&v)?,
            None => return Err(CartError::Validation("price is required".into())),
        };

        let item = Item {
            id,
            quantity,
            price,
            attributes: fields,
        };
        item.validate()?;
        Ok(item)
    }
}

/// Partial item used by `update`.
///
/// Fields left as `None` (and attributes not listed) keep the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    /// Item to update. Required by `update`.
    pub id: Option<ItemId>,
    /// New quantity.
    pub quantity: Option<i64>,
    /// New unit price.
    pub price: Option<f64>,
    /// Attributes to overwrite or add.
    pub attributes: Map<String, Value>,
}

impl ItemPatch {
    /// Patch targeting `id` with no changes yet.
    pub fn new(id: impl Into<ItemId>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Set the quantity.
    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Set the unit price.
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Set an attribute.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Shallow-merge this patch over `item`.
    pub fn apply_to(self, mut item: Item) -> Item {
        if let Some(quantity) = self.quantity {
            item.quantity = quantity;
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        item.attributes.extend(self.attributes);
        item
    }
}

impl TryFrom<Value> for ItemPatch {
    type Error = CartError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let mut fields = into_object(value)?;

        let id = fields.remove("id").map(parse_id).transpose()?;
        let quantity = fields
            .remove("quantity")
            .map(|v| parse_quantity(&v))
            .transpose()?;
        let price = fields
            .remove("price")
            .map(|v| parse_price(&v))
            .transpose()?;

        Ok(ItemPatch {
            id,
            quantity,
            price,
            attributes: fields,
        })
    }
}

impl From<Item> for ItemPatch {
    fn from(item: Item) -> Self {
        ItemPatch {
            id: Some(item.id),
            quantity: Some(item.quantity),
            price: Some(item.price),
            attributes: item.attributes,
        }
    }
}

fn into_object(value: Value) -> Result<Map<String, Value>, CartError> {
    match value {
        Value::Object(fields) => Ok(fields),
        other => Err(CartError::Validation(format!(
            "item must be an object, got {}",
            other
        ))),
    }
}

fn parse_id(value: Value) -> Result<ItemId, CartError> {
    let id = match value {
        Value::Number(n) => n
            .as_i64()
            .map(ItemId::Number)
            .ok_or_else(|| CartError::Validation(format!("id must be an integer, got {}", n)))?,
        Value::String(s) => ItemId::Text(s),
        other => {
            return Err(CartError::Validation(format!(
                "id must be a number or string, got {}",
                other
            )))
        }
    };
    if id.is_empty() {
        return Err(CartError::Validation("id must not be empty".into()));
    }
    Ok(id)
}

fn parse_quantity(value: &Value) -> Result<i64, CartError> {
    match value.as_i64() {
        Some(q) if q >= 0 => Ok(q),
        _ => Err(CartError::Validation(format!(
            "quantity must be a non-negative integer, got {}",
            value
        ))),
    }
}

fn parse_price(value: &Value) -> Result<f64, CartError> {
    match value.as_f64() {
        Some(p) if p.is_finite() && p >= 0.0 => Ok(p),
        _ => Err(CartError::Validation(format!(
            "price must be a non-negative number, got {}",
            value
        ))),
    }
}
