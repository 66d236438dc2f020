//! Run quality metrics.
//!
//! Summarises a finished (or interrupted) run against the problem it
//! started from.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Units loaded | Sum of Load counts |
//! | Units delivered | Sum of Deliver counts |
//! | In flight | Loaded but not yet delivered |
//! | Remaining demand | Units no drone has reserved |
//! | Orders completed | Orders whose every unit was delivered |
//! | Score | Σ ceil(100 · (T − c) / T) over completed orders |
//!
//! `c` is the turn the order's last delivery lands on and `T` the horizon.

use serde::{Deserialize, Serialize};

use crate::models::{Command, Problem};
use crate::world::World;

/// Delivery performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleReport {
    /// Turn the run stopped on.
    pub turns_simulated: u32,
    /// Total committed commands.
    pub command_count: usize,
    /// Committed Load commands.
    pub load_count: usize,
    /// Committed Deliver commands.
    pub deliver_count: usize,
    /// Units picked up.
    pub units_loaded: u64,
    /// Units dropped at orders.
    pub units_delivered: u64,
    /// Units aboard drones at the end.
    pub units_in_flight: u64,
    /// Units still unreserved across all orders.
    pub remaining_demand: u64,
    /// Orders with non-zero initial demand.
    pub orders_total: usize,
    /// Orders fully delivered.
    pub orders_completed: usize,
    /// Completion score.
    pub score: u64,
}

impl ScheduleReport {
    /// Computes the report for a world that started from `problem`.
    pub fn calculate(problem: &Problem, world: &World) -> Self {
        let horizon = u64::from(world.horizon);
        let mut delivered_by_order = vec![0u64; problem.orders.len()];
        let mut completion_by_order = vec![0u32; problem.orders.len()];

        let mut load_count = 0;
        let mut deliver_count = 0;
        let mut units_loaded = 0u64;
        let mut units_delivered = 0u64;

        for entry in world.log() {
            match entry.command {
                Command::Load { count, .. } => {
                    load_count += 1;
                    units_loaded += u64::from(count);
                }
                Command::Deliver {
                    order_id, count, ..
                } => {
                    deliver_count += 1;
                    units_delivered += u64::from(count);
                    delivered_by_order[order_id] += u64::from(count);
                    let done = &mut completion_by_order[order_id];
                    *done = (*done).max(entry.completes_at());
                }
            }
        }

        let mut orders_total = 0;
        let mut orders_completed = 0;
        let mut score = 0u64;
        for (i, order) in problem.orders.iter().enumerate() {
            let wanted = order.total_demand();
            if wanted == 0 {
                continue;
            }
            orders_total += 1;
            if delivered_by_order[i] == wanted {
                orders_completed += 1;
                let c = u64::from(completion_by_order[i]);
                if c < horizon {
                    score += (100 * (horizon - c)).div_ceil(horizon);
                }
            }
        }

        Self {
            turns_simulated: world.turn,
            command_count: world.command_count(),
            load_count,
            deliver_count,
            units_loaded,
            units_delivered,
            units_in_flight: units_loaded - units_delivered,
            remaining_demand: world.orders.iter().map(|o| o.total_demand()).sum(),
            orders_total,
            orders_completed,
            score,
        }
    }

    /// Fraction of initially demanded units delivered (0.0..1.0).
    pub fn fulfillment_rate(&self) -> f64 {
        let demanded = self.units_loaded + self.remaining_demand;
        if demanded == 0 {
            1.0
        } else {
            self.units_delivered as f64 / demanded as f64
        }
    }
}
