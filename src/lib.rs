//! Turn-based drone delivery scheduling.
//!
//! Moves units of several product types from stocked warehouses to
//! orders with a fleet of payload-limited drones, inside a fixed number
//! of turns. The schedule comes from a greedy, non-backtracking
//! heuristic, not an optimal solver.
//!
//! # Modules
//!
//! - **`geometry`**: Grid positions and ceil-Euclidean travel time
//! - **`models`**: Domain types — `Warehouse`, `Order`, `Drone`,
//!   `ProductCatalog`, `Command`, `Problem`
//! - **`world`**: The mutable run state and command log
//! - **`scheduler`**: Greedy per-turn dispatcher and run report
//! - **`simulation`**: Turn loop with interruption support
//! - **`validation`**: Input integrity checks
//! - **`io`**: Problem file loader and schedule file writer
//!
//! # Example
//!
//! ```
//! use std::sync::atomic::AtomicBool;
//! use drone_dispatch::io::{parse_problem, write_schedule};
//! use drone_dispatch::simulation::Simulation;
//! use drone_dispatch::world::World;
//!
//! let problem = parse_problem("10 10 1 20 10\n1\n1\n1\n0 0\n3\n1\n0 3\n1\n0\n").unwrap();
//! let mut world = World::new(problem);
//! Simulation::new().run(&mut world, &AtomicBool::new(false));
//!
//! let mut out = Vec::new();
//! write_schedule(&mut out, &world).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "2\n0 L 0 0 1\n0 D 0 0 1\n");
//! ```

pub mod geometry;
pub mod io;
pub mod models;
pub mod scheduler;
pub mod simulation;
pub mod validation;
pub mod world;
