//! Greedy dispatching and run metrics.
//!
//! Provides the per-turn greedy drone dispatcher and a report of how much
//! demand a run satisfied.
//!
//! # Algorithm
//!
//! `GreedyScheduler` assigns each ready drone either its pending delivery
//! or the first open `(order, product)` pair, served from the warehouse
//! with the shortest detour. It never backtracks and gives no optimality
//! guarantee.
//!
//! # Report
//!
//! `ScheduleReport` counts loaded/delivered units, completed orders, and
//! the turn-weighted completion score.

mod greedy;
mod report;

pub use greedy::{is_feasible, GreedyScheduler, TurnSummary};
pub use report::ScheduleReport;
