//! Aggregate cart figures.

use serde::{Deserialize, Serialize};

use crate::collection::ItemCollection;
use crate::error::CartError;

/// Totals computed from a single snapshot of a cart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CartSummary {
    /// Number of distinct items.
    pub unique_items: usize,
    /// Sum of quantities.
    pub total_quantity: i64,
    /// Sum of price × quantity.
    pub total: f64,
}

impl CartSummary {
    /// Summarize a collection.
    pub fn of(collection: &ItemCollection) -> Result<Self, CartError> {
        Ok(Self {
            unique_items: collection.count(),
            total_quantity: collection.total_quantity()?,
            total: collection.sum(|item| item.line_total()),
        })
    }

    /// Check if the summarized cart had no items.
    pub fn is_empty(&self) -> bool {
        self.unique_items == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;

    #[test]
    fn test_summary() {
        let collection = ItemCollection::make(
            vec![Item::new(1, 2, 1000.0), Item::new(2, 1, 2000.0)].into(),
        );
        let summary = CartSummary::of(&collection).unwrap();

        assert_eq!(summary.unique_items, 2);
        assert_eq!(summary.total_quantity, 3);
        assert_eq!(summary.total, 4000.0); // 2*1000 + 1*2000
    }

    #[test]
    fn test_summary_quantity_overflow() {
        let collection = ItemCollection::make(
            vec![Item::new(1, i64::MAX, 1.0), Item::new(2, 1, 1.0)].into(),
        );
        assert!(matches!(
            CartSummary::of(&collection),
            Err(CartError::Overflow)
        ));
    }

    #[test]
    fn test_empty_summary() {
        let summary = CartSummary::of(&ItemCollection::new()).unwrap();
        assert!(summary.is_empty());
        assert_eq!(summary, CartSummary::default());
    }
}
