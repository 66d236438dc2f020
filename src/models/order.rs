//! Order (demand point) model.
//!
//! Demand is reserved when a drone loads units for the order, not when
//! they are delivered, so `demand` counts units nobody has picked up yet.

use serde::{Deserialize, Serialize};

use super::ProductType;
use crate::geometry::Position;

/// A customer order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Order id (its index in the world).
    pub id: usize,
    /// Delivery position.
    pub position: Position,
    /// Units per product type not yet reserved by a load.
    pub demand: Vec<u32>,
}

impl Order {
    /// Creates an order from a per-type demand vector.
    pub fn new(id: usize, position: Position, demand: Vec<u32>) -> Self {
        Self {
            id,
            position,
            demand,
        }
    }

    /// Creates an order by tallying a flat list of requested product types.
    ///
    /// # Example
    /// ```
    /// use drone_dispatch::geometry::Position;
    /// use drone_dispatch::models::Order;
    ///
    /// let order = Order::from_items(0, Position::new(1, 1), &[2, 0, 2], 3);
    /// assert_eq!(order.demand, vec![1, 0, 2]);
    /// ```
    pub fn from_items(
        id: usize,
        position: Position,
        items: &[ProductType],
        product_count: usize,
    ) -> Self {
        let mut demand = vec![0; product_count];
        for &item in items {
            demand[item] += 1;
        }
        Self::new(id, position, demand)
    }

    /// Remaining demand for a product type.
    #[inline]
    pub fn demand_of(&self, product: ProductType) -> u32 {
        self.demand[product]
    }

    /// Total units still unreserved.
    pub fn total_demand(&self) -> u64 {
        self.demand.iter().map(|&n| u64::from(n)).sum()
    }

    /// Whether every unit has been reserved.
    pub fn is_reserved(&self) -> bool {
        self.demand.iter().all(|&n| n == 0)
    }

    /// Reserves units against this order's demand.
    pub(crate) fn reserve(&mut self, product: ProductType, count: u32) {
        debug_assert!(
            count <= self.demand[product],
            "order {} demand of type {product} would go negative",
            self.id
        );
        self.demand[product] -= count;
    }
}
