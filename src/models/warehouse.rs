//! Warehouse (depot) model.
//!
//! A warehouse holds stock per product type. Stock only decreases, and
//! only when a load is committed.

use serde::{Deserialize, Serialize};

use super::ProductType;
use crate::geometry::Position;

/// A stocked depot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    /// Warehouse id (its index in the world).
    pub id: usize,
    /// Grid position.
    pub position: Position,
    /// Remaining units per product type.
    pub stock: Vec<u32>,
}

impl Warehouse {
    /// Creates a warehouse.
    pub fn new(id: usize, position: Position, stock: Vec<u32>) -> Self {
        Self {
            id,
            position,
            stock,
        }
    }

    /// Remaining units of a product type.
    #[inline]
    pub fn stock_of(&self, product: ProductType) -> u32 {
        self.stock[product]
    }

    /// Whether at least one unit of a product type is in stock.
    #[inline]
    pub fn has_stock(&self, product: ProductType) -> bool {
        self.stock[product] > 0
    }

    /// Removes units from stock.
    pub(crate) fn take(&mut self, product: ProductType, count: u32) {
        debug_assert!(
            count <= self.stock[product],
            "warehouse {} stock of type {product} would go negative",
            self.id
        );
        self.stock[product] -= count;
    }
}
