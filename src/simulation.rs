//! Turn loop.
//!
//! Drives the world's turn counter from 0 to the horizon, running the
//! scheduler once per turn. An interruption flag stops the loop at the
//! next turn boundary; commands committed so far are kept.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::scheduler::GreedyScheduler;
use crate::world::World;

/// Default number of turns between progress log lines.
pub const DEFAULT_PROGRESS_INTERVAL: u32 = 1000;

/// Simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Turns between progress log lines (0 = never).
    pub progress_interval: u32,
    /// Optional cap on the world's horizon.
    pub turn_limit: Option<u32>,
}

impl SimulationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self {
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            turn_limit: None,
        }
    }

    /// Sets the progress logging interval.
    pub fn with_progress_interval(mut self, turns: u32) -> Self {
        self.progress_interval = turns;
        self
    }

    /// Caps the horizon at `turns`.
    ///
    /// The capped horizon also drives the feasibility check.
    pub fn with_turn_limit(mut self, turns: u32) -> Self {
        self.turn_limit = Some(turns);
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulationOutcome {
    /// Every turn up to the horizon was processed.
    Completed { turns: u32 },
    /// Stopped early by the interruption flag before `turn` was processed.
    Interrupted { turn: u32 },
}

impl SimulationOutcome {
    /// Whether the run stopped early.
    pub fn is_interrupted(&self) -> bool {
        matches!(self, SimulationOutcome::Interrupted { .. })
    }
}

/// Turn-based simulation driver.
///
/// # Example
/// ```
/// use std::sync::atomic::AtomicBool;
/// use drone_dispatch::geometry::Position;
/// use drone_dispatch::models::{Problem, ProductCatalog};
/// use drone_dispatch::simulation::{Simulation, SimulationOutcome};
/// use drone_dispatch::world::World;
///
/// let problem = Problem::new(1, 20, 10, ProductCatalog::new(vec![1]))
///     .with_warehouse(Position::new(0, 0), vec![2])
///     .with_order(Position::new(0, 3), vec![2]);
/// let mut world = World::new(problem);
///
/// let outcome = Simulation::new().run(&mut world, &AtomicBool::new(false));
/// assert_eq!(outcome, SimulationOutcome::Completed { turns: 20 });
/// assert_eq!(world.command_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    config: SimulationConfig,
    scheduler: GreedyScheduler,
}

impl Simulation {
    /// Creates a simulation with the default configuration.
    pub fn new() -> Self {
        Self::with_config(SimulationConfig::new())
    }

    /// Creates a simulation with the given configuration.
    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            config,
            scheduler: GreedyScheduler::new(),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs one turn and advances the turn counter.
    ///
    /// Does nothing once the world is finished.
    pub fn step(&self, world: &mut World) {
        if world.is_finished() {
            return;
        }
        let summary = self.scheduler.run_turn(world);
        if summary.committed() > 0 {
            debug!(
                turn = world.turn,
                loads = summary.loads,
                deliveries = summary.deliveries,
                busy = summary.busy,
                idle = summary.idle,
                "turn processed"
            );
        }
        world.advance_turn();

        let interval = self.config.progress_interval;
        if interval > 0 && world.turn % interval == 0 && !world.is_finished() {
            info!(
                turn = world.turn,
                horizon = world.horizon,
                commands = world.command_count(),
                "progress"
            );
        }
    }

    /// Runs turns until the horizon or until `interrupted` is set.
    pub fn run(&self, world: &mut World, interrupted: &AtomicBool) -> SimulationOutcome {
        if let Some(limit) = self.config.turn_limit {
            world.horizon = world.horizon.min(limit);
        }

        info!(
            drones = world.drones.len(),
            warehouses = world.warehouses.len(),
            orders = world.orders.len(),
            horizon = world.horizon,
            "simulation started"
        );

        while !world.is_finished() {
            if interrupted.load(Ordering::SeqCst) {
                warn!(
                    turn = world.turn,
                    commands = world.command_count(),
                    "simulation interrupted; keeping committed commands"
                );
                return SimulationOutcome::Interrupted { turn: world.turn };
            }
            self.step(world);
        }

        info!(
            turns = world.turn,
            commands = world.command_count(),
            "simulation finished"
        );
        SimulationOutcome::Completed { turns: world.turn }
    }
}
