//! Drone (carrier) model.
//!
//! A drone carries units up to its payload weight, holds at most one
//! pending delivery, and ignores the scheduler while its busy counter
//! is running down.
//!
//! # States
//!
//! | State | busy | target |
//! |-------|------|--------|
//! | `Idle` | 0 | none |
//! | `Busy` | > 0 | any |
//! | `PendingDelivery` | 0 | some |

use serde::{Deserialize, Serialize};

use super::{ProductCatalog, ProductType};
use crate::geometry::Position;

/// Delivery obligation picked up by a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryTarget {
    /// Order the units are reserved for.
    pub order_id: usize,
    /// Where the order is.
    pub destination: Position,
    /// Product type carried for the order.
    pub product: ProductType,
    /// Units carried for the order.
    pub count: u32,
}

/// Observable drone state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DroneState {
    /// Free to pick up new work.
    Idle,
    /// Travelling or handling; skipped by the scheduler.
    Busy,
    /// Loaded and waiting to start its delivery.
    PendingDelivery,
}

/// A capacity-limited carrier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drone {
    /// Drone id (its index in the world).
    pub id: usize,
    /// Current position.
    pub position: Position,
    /// Maximum carried weight.
    pub payload: u32,
    /// Units aboard per product type.
    pub carried: Vec<u32>,
    /// Turns remaining until the drone can act again.
    pub busy: u32,
    /// Pending delivery, if any.
    pub target: Option<DeliveryTarget>,
}

impl Drone {
    /// Creates an idle, empty drone.
    pub fn new(id: usize, position: Position, payload: u32, product_count: usize) -> Self {
        Self {
            id,
            position,
            payload,
            carried: vec![0; product_count],
            busy: 0,
            target: None,
        }
    }

    /// Current state.
    pub fn state(&self) -> DroneState {
        if self.busy > 0 {
            DroneState::Busy
        } else if self.target.is_some() {
            DroneState::PendingDelivery
        } else {
            DroneState::Idle
        }
    }

    /// Total weight aboard.
    pub fn carried_weight(&self, catalog: &ProductCatalog) -> u64 {
        catalog.load_weight(&self.carried)
    }

    /// Weight that can still be added.
    pub fn capacity_left(&self, catalog: &ProductCatalog) -> u64 {
        u64::from(self.payload).saturating_sub(self.carried_weight(catalog))
    }

    /// Whole units of `product` that still fit.
    pub fn max_units_of(&self, product: ProductType, catalog: &ProductCatalog) -> u32 {
        let weight = u64::from(catalog.weight(product));
        if weight == 0 {
            return u32::MAX;
        }
        u32::try_from(self.capacity_left(catalog) / weight).unwrap_or(u32::MAX)
    }

    /// Runs the busy counter down by one turn.
    ///
    /// Returns `true` if the drone was busy this turn.
    pub(crate) fn tick(&mut self) -> bool {
        if self.busy > 0 {
            self.busy -= 1;
            true
        } else {
            false
        }
    }
}
