//! Delivery domain models.
//!
//! Entity records for a turn-based delivery run. Entities are created
//! once from a [`Problem`] and mutated in place; cross references
//! (a drone's pending delivery naming an order) are indices, never
//! owned pointers.
//!
//! # Domain Mappings
//!
//! | drone-dispatch | Logistics | Manufacturing |
//! |----------------|-----------|---------------|
//! | Warehouse | Depot | Store room |
//! | Order | Customer drop | Work station |
//! | Drone | Vehicle | AGV |
//! | Command | Route leg | Transport job |

mod command;
mod drone;
mod order;
mod problem;
mod product;
mod warehouse;

pub use command::{Command, LoggedCommand};
pub use drone::{DeliveryTarget, Drone, DroneState};
pub use order::Order;
pub use problem::Problem;
pub use product::{ProductCatalog, ProductType};
pub use warehouse::Warehouse;
