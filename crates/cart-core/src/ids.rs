//! Item identifiers.
//!
//! Carts accept either numeric or textual product ids. Both forms are kept
//! as-is in storage, so `1` and `"1"` are different items.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a line item within a cart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    /// Numeric id.
    Number(i64),
    /// Textual id (SKU, slug, ...).
    Text(String),
}

impl ItemId {
    /// Whether this id is unusable as a key.
    pub fn is_empty(&self) -> bool {
        matches!(self, ItemId::Text(s) if s.is_empty())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ItemId {
    fn from(n: i64) -> Self {
        ItemId::Number(n)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId::Text(s)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::Text(s.to_string())
    }
}

impl From<&ItemId> for ItemId {
    fn from(id: &ItemId) -> Self {
        id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_number_and_text() {
        assert_eq!(ItemId::from(42), ItemId::Number(42));
        assert_eq!(ItemId::from("sku-1"), ItemId::Text("sku-1".to_string()));
    }

    #[test]
    fn test_number_and_text_differ() {
        assert_ne!(ItemId::from(1), ItemId::from("1"));
    }

    #[test]
    fn test_id_display() {
        assert_eq!(ItemId::from(9).to_string(), "9");
        assert_eq!(ItemId::from("mug").to_string(), "mug");
    }

    #[test]
    fn test_empty() {
        assert!(ItemId::from("").is_empty());
        assert!(!ItemId::from(0).is_empty());
    }

    #[test]
    fn test_serde_keeps_shape() {
        assert_eq!(serde_json::to_string(&ItemId::from(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&ItemId::from("a")).unwrap(), r#""a""#);

        let n: ItemId = serde_json::from_str("3").unwrap();
        let s: ItemId = serde_json::from_str(r#""3""#).unwrap();
        assert_eq!(n, ItemId::Number(3));
        assert_eq!(s, ItemId::Text("3".to_string()));
    }
}
