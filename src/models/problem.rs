//! Problem (input) model.
//!
//! A problem is the loaded description of a run: grid, fleet, horizon,
//! catalog, warehouses, and orders. The world is built from it.

use serde::{Deserialize, Serialize};

use super::{Order, ProductCatalog, Warehouse};
use crate::geometry::Position;

/// A delivery problem instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Grid rows (advisory).
    pub rows: u32,
    /// Grid columns (advisory).
    pub cols: u32,
    /// Number of drones.
    pub drone_count: usize,
    /// Total turns available.
    pub horizon: u32,
    /// Maximum payload weight per drone.
    pub payload: u32,
    /// Unit weights per product type.
    pub catalog: ProductCatalog,
    /// Depots.
    pub warehouses: Vec<Warehouse>,
    /// Demand points.
    pub orders: Vec<Order>,
    /// Drone start position. `None` = position of warehouse 0.
    pub start: Option<Position>,
}

impl Problem {
    /// Creates a problem with no warehouses or orders.
    pub fn new(drone_count: usize, horizon: u32, payload: u32, catalog: ProductCatalog) -> Self {
        Self {
            rows: 0,
            cols: 0,
            drone_count,
            horizon,
            payload,
            catalog,
            warehouses: Vec::new(),
            orders: Vec::new(),
            start: None,
        }
    }

    /// Sets the advisory grid dimensions.
    pub fn with_grid(mut self, rows: u32, cols: u32) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Adds a warehouse; its id is its index.
    pub fn with_warehouse(mut self, position: Position, stock: Vec<u32>) -> Self {
        let id = self.warehouses.len();
        self.warehouses.push(Warehouse::new(id, position, stock));
        self
    }

    /// Adds an order with a per-type demand vector; its id is its index.
    pub fn with_order(mut self, position: Position, demand: Vec<u32>) -> Self {
        let id = self.orders.len();
        self.orders.push(Order::new(id, position, demand));
        self
    }

    /// Overrides the drone start position.
    pub fn with_start(mut self, start: Position) -> Self {
        self.start = Some(start);
        self
    }

    /// Number of product types.
    pub fn product_count(&self) -> usize {
        self.catalog.len()
    }

    /// Where drones start: the explicit start, else warehouse 0.
    pub fn start_position(&self) -> Option<Position> {
        self.start
            .or_else(|| self.warehouses.first().map(|w| w.position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_builder() {
        let p = Problem::new(2, 100, 50, ProductCatalog::new(vec![1, 2]))
            .with_grid(10, 20)
            .with_warehouse(Position::new(3, 3), vec![1, 1])
            .with_warehouse(Position::new(5, 5), vec![0, 4])
            .with_order(Position::new(9, 9), vec![1, 0]);

        assert_eq!(p.rows, 10);
        assert_eq!(p.cols, 20);
        assert_eq!(p.warehouses[1].id, 1);
        assert_eq!(p.orders[0].id, 0);
        assert_eq!(p.product_count(), 2);
    }

    #[test]
    fn test_start_position() {
        let p = Problem::new(1, 10, 10, ProductCatalog::new(vec![1]))
            .with_warehouse(Position::new(3, 4), vec![1]);
        assert_eq!(p.start_position(), Some(Position::new(3, 4)));

        let p = p.with_start(Position::new(0, 0));
        assert_eq!(p.start_position(), Some(Position::new(0, 0)));

        let empty = Problem::new(1, 10, 10, ProductCatalog::new(vec![1]));
        assert_eq!(empty.start_position(), None);
    }
}
