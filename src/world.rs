//! Simulation world.
//!
//! The world owns every entity collection, the turn counter, and the
//! append-only command log. The scheduler borrows it mutably for one
//! turn at a time.

use serde::{Deserialize, Serialize};

use crate::geometry::Position;
use crate::models::{
    Command, Drone, LoggedCommand, Order, Problem, ProductCatalog, Warehouse,
};

/// Mutable state of a delivery run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct World {
    /// Grid rows (advisory).
    pub rows: u32,
    /// Grid columns (advisory).
    pub cols: u32,
    /// Current turn (0-based).
    pub turn: u32,
    /// Total turns available.
    pub horizon: u32,
    /// Unit weights per product type.
    pub catalog: ProductCatalog,
    /// Depots, indexed by id.
    pub warehouses: Vec<Warehouse>,
    /// Demand points, indexed by id.
    pub orders: Vec<Order>,
    /// Carriers, indexed by id.
    pub drones: Vec<Drone>,
    log: Vec<LoggedCommand>,
}

impl World {
    /// Builds the initial world for a problem.
    ///
    /// Drones start at the problem's start position (warehouse 0 unless
    /// overridden), empty and idle.
    ///
    /// # Example
    /// ```
    /// use drone_dispatch::geometry::Position;
    /// use drone_dispatch::models::{Problem, ProductCatalog};
    /// use drone_dispatch::world::World;
    ///
    /// let problem = Problem::new(2, 50, 10, ProductCatalog::new(vec![1]))
    ///     .with_warehouse(Position::new(4, 4), vec![3]);
    /// let world = World::new(problem);
    /// assert_eq!(world.drones.len(), 2);
    /// assert_eq!(world.drones[1].position, Position::new(4, 4));
    /// assert_eq!(world.turns_left(), 50);
    /// ```
    pub fn new(problem: Problem) -> Self {
        let start = problem.start_position().unwrap_or_default();
        let product_count = problem.product_count();
        let drones = (0..problem.drone_count)
            .map(|id| Drone::new(id, start, problem.payload, product_count))
            .collect();

        Self {
            rows: problem.rows,
            cols: problem.cols,
            turn: 0,
            horizon: problem.horizon,
            catalog: problem.catalog,
            warehouses: problem.warehouses,
            orders: problem.orders,
            drones,
            log: Vec::new(),
        }
    }

    /// Turns remaining in the horizon, counting the current one.
    #[inline]
    pub fn turns_left(&self) -> u32 {
        self.horizon.saturating_sub(self.turn)
    }

    /// Whether the turn counter has reached the horizon.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.turn >= self.horizon
    }

    /// Moves to the next turn.
    pub(crate) fn advance_turn(&mut self) {
        self.turn += 1;
    }

    /// Whether any warehouse holds stock of a product type.
    pub fn product_available(&self, product: usize) -> bool {
        self.warehouses.iter().any(|w| w.has_stock(product))
    }

    /// Appends a committed command to the log.
    pub(crate) fn record(&mut self, command: Command, travel: u32) {
        self.log.push(LoggedCommand {
            turn: self.turn,
            turns_left: self.turns_left(),
            travel,
            command,
        });
    }

    /// Committed commands with their turn bookkeeping, in commit order.
    pub fn log(&self) -> &[LoggedCommand] {
        &self.log
    }

    /// Committed commands in commit order.
    pub fn commands(&self) -> impl Iterator<Item = &Command> + '_ {
        self.log.iter().map(|entry| &entry.command)
    }

    /// Number of committed commands.
    pub fn command_count(&self) -> usize {
        self.log.len()
    }

    /// Position of an order.
    pub fn order_position(&self, order_id: usize) -> Position {
        self.orders[order_id].position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_problem() -> Problem {
        Problem::new(3, 20, 100, ProductCatalog::new(vec![5, 10]))
            .with_grid(50, 50)
            .with_warehouse(Position::new(2, 3), vec![1, 2])
            .with_warehouse(Position::new(7, 7), vec![0, 5])
            .with_order(Position::new(9, 1), vec![1, 1])
    }

    #[test]
    fn test_world_from_problem() {
        let world = World::new(sample_problem());
        assert_eq!(world.turn, 0);
        assert_eq!(world.horizon, 20);
        assert_eq!(world.drones.len(), 3);
        for (i, d) in world.drones.iter().enumerate() {
            assert_eq!(d.id, i);
            assert_eq!(d.position, Position::new(2, 3));
            assert_eq!(d.payload, 100);
            assert_eq!(d.carried, vec![0, 0]);
        }
        assert_eq!(world.command_count(), 0);
    }

    #[test]
    fn test_explicit_start() {
        let world = World::new(sample_problem().with_start(Position::new(0, 0)));
        assert!(world
            .drones
            .iter()
            .all(|d| d.position == Position::new(0, 0)));
    }

    #[test]
    fn test_turn_counter() {
        let mut world = World::new(sample_problem());
        assert_eq!(world.turns_left(), 20);
        for _ in 0..20 {
            assert!(!world.is_finished());
            world.advance_turn();
        }
        assert!(world.is_finished());
        assert_eq!(world.turns_left(), 0);
    }

    #[test]
    fn test_product_available() {
        let mut world = World::new(sample_problem());
        assert!(world.product_available(0));
        world.warehouses[0].stock[0] = 0;
        assert!(!world.product_available(0));
        assert!(world.product_available(1));
    }

    #[test]
    fn test_record_captures_turn() {
        let mut world = World::new(sample_problem());
        world.advance_turn();
        world.advance_turn();
        let cmd = Command::Load {
            drone_id: 0,
            warehouse_id: 1,
            product: 1,
            count: 2,
        };
        world.record(cmd, 4);

        let entry = world.log()[0];
        assert_eq!(entry.turn, 2);
        assert_eq!(entry.turns_left, 18);
        assert_eq!(entry.travel, 4);
        assert_eq!(world.commands().next(), Some(&cmd));
    }

    #[test]
    fn test_independent_worlds_equal() {
        let a = World::new(sample_problem());
        let mut b = World::new(sample_problem());
        assert_eq!(a, b);
        b.warehouses[0].stock[0] = 0;
        assert_ne!(a, b);
    }
}
