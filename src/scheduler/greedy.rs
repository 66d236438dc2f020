//! Greedy turn-by-turn dispatcher.
//!
//! # Algorithm
//!
//! For each drone, in id order:
//! 1. Busy drones run their counter down and do nothing else.
//! 2. A drone with a pending delivery flies it to the order.
//! 3. An idle drone takes the first `(order, product)` pair, scanning
//!    orders then product types by index, with unreserved demand and
//!    stock somewhere; loads as many units as capacity, demand, and the
//!    chosen warehouse allow at the warehouse minimising
//!    `drone → warehouse → order` travel (first minimum wins).
//!
//! Every action is planned in full, feasibility check included, before
//! any state is touched. A plan either commits completely or is dropped
//! and the drone idles until the next turn. Commits are visible to the
//! drones processed after it in the same turn, so the outcome depends on
//! drone order.
//!
//! # Feasibility
//! An action with travel `d` is allowed only when `d + 2 <= turns_left`:
//! one turn to execute it and one turn of slack.
//!
//! # Complexity
//! O(d * (o * p + w)) per turn where d=drones, o=orders, p=product types,
//! w=warehouses.

use tracing::debug;

use crate::geometry::distance;
use crate::models::{Command, DeliveryTarget, ProductType};
use crate::world::World;

/// Whether an action needing `travel` turns fits in `turns_left`.
///
/// # Example
/// ```
/// use drone_dispatch::scheduler::is_feasible;
///
/// assert!(is_feasible(2, 4));
/// assert!(!is_feasible(2, 3));
/// ```
#[inline]
pub fn is_feasible(travel: u32, turns_left: u32) -> bool {
    u64::from(travel) + 2 <= u64::from(turns_left)
}

/// A fully evaluated action, ready to commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Plan {
    Deliver {
        drone: usize,
        target: DeliveryTarget,
        travel: u32,
    },
    Load {
        drone: usize,
        warehouse: usize,
        order: usize,
        product: ProductType,
        count: u32,
        travel: u32,
    },
}

/// Per-turn tally of what the drones did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TurnSummary {
    /// Drones skipped because their busy counter was running.
    pub busy: usize,
    /// Loads committed.
    pub loads: usize,
    /// Deliveries committed.
    pub deliveries: usize,
    /// Ready drones that committed nothing.
    pub idle: usize,
}

impl TurnSummary {
    /// Commands committed this turn.
    pub fn committed(&self) -> usize {
        self.loads + self.deliveries
    }
}

/// Greedy, non-backtracking drone dispatcher.
///
/// # Example
///
/// ```
/// use drone_dispatch::geometry::Position;
/// use drone_dispatch::models::{Command, Problem, ProductCatalog};
/// use drone_dispatch::scheduler::GreedyScheduler;
/// use drone_dispatch::world::World;
///
/// let problem = Problem::new(1, 20, 10, ProductCatalog::new(vec![1]))
///     .with_warehouse(Position::new(0, 2), vec![5])
///     .with_order(Position::new(0, 5), vec![3])
///     .with_start(Position::new(0, 0));
/// let mut world = World::new(problem);
///
/// let summary = GreedyScheduler::new().run_turn(&mut world);
/// assert_eq!(summary.loads, 1);
/// assert!(matches!(
///     world.commands().next(),
///     Some(Command::Load { count: 3, .. })
/// ));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyScheduler;

impl GreedyScheduler {
    /// Creates a scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Processes every drone once for the world's current turn.
    ///
    /// Does not advance the turn counter.
    pub fn run_turn(&self, world: &mut World) -> TurnSummary {
        let mut summary = TurnSummary::default();

        for idx in 0..world.drones.len() {
            if world.drones[idx].tick() {
                summary.busy += 1;
                continue;
            }

            let plan = if world.drones[idx].target.is_some() {
                self.plan_delivery(world, idx)
            } else {
                self.plan_pickup(world, idx)
            };

            match plan {
                Some(plan) => {
                    match plan {
                        Plan::Deliver { .. } => summary.deliveries += 1,
                        Plan::Load { .. } => summary.loads += 1,
                    }
                    self.commit(world, plan);
                }
                None => summary.idle += 1,
            }
        }

        summary
    }

    /// Plans the pending delivery of a drone, if it fits in the horizon.
    fn plan_delivery(&self, world: &World, idx: usize) -> Option<Plan> {
        let drone = &world.drones[idx];
        let target = drone.target?;
        let travel = distance(drone.position, target.destination);
        if !is_feasible(travel, world.turns_left()) {
            return None;
        }
        Some(Plan::Deliver {
            drone: idx,
            target,
            travel,
        })
    }

    /// Plans a pickup for an idle drone.
    fn plan_pickup(&self, world: &World, idx: usize) -> Option<Plan> {
        let (order, product) = first_open_demand(world)?;
        let drone = &world.drones[idx];

        let need = world.orders[order].demand_of(product);
        let fits = drone.max_units_of(product, &world.catalog);

        let warehouse = nearest_warehouse(world, idx, product, order)?;
        // Zero when the product outweighs the free capacity; the empty
        // load still commits and is delivered like any other.
        let count = need.min(fits).min(world.warehouses[warehouse].stock_of(product));

        let travel = distance(drone.position, world.warehouses[warehouse].position);
        if !is_feasible(travel, world.turns_left()) {
            debug!(
                drone = idx,
                order, warehouse, travel, "pickup out of reach; drone idles"
            );
            return None;
        }

        Some(Plan::Load {
            drone: idx,
            warehouse,
            order,
            product,
            count,
            travel,
        })
    }

    /// Applies a plan to the world and logs its command.
    fn commit(&self, world: &mut World, plan: Plan) {
        match plan {
            Plan::Deliver {
                drone,
                target,
                travel,
            } => {
                let d = &mut world.drones[drone];
                debug_assert!(d.carried[target.product] >= target.count);
                d.position = target.destination;
                d.carried[target.product] -= target.count;
                d.busy = travel + 1;
                d.target = None;

                let command = Command::Deliver {
                    drone_id: drone,
                    order_id: target.order_id,
                    product: target.product,
                    count: target.count,
                };
                debug!(turn = world.turn, %command, "deliver");
                world.record(command, travel);
            }
            Plan::Load {
                drone,
                warehouse,
                order,
                product,
                count,
                travel,
            } => {
                let wh_pos = world.warehouses[warehouse].position;
                let destination = world.order_position(order);

                world.warehouses[warehouse].take(product, count);
                world.orders[order].reserve(product, count);

                let d = &mut world.drones[drone];
                d.position = wh_pos;
                d.carried[product] += count;
                d.busy = travel + 1;
                d.target = Some(DeliveryTarget {
                    order_id: order,
                    destination,
                    product,
                    count,
                });
                debug_assert!(d.carried_weight(&world.catalog) <= u64::from(d.payload));

                let command = Command::Load {
                    drone_id: drone,
                    warehouse_id: warehouse,
                    product,
                    count,
                };
                debug!(turn = world.turn, %command, "load");
                world.record(command, travel);
            }
        }
    }
}

/// First `(order, product)` with unreserved demand and stock in some warehouse.
fn first_open_demand(world: &World) -> Option<(usize, ProductType)> {
    world.orders.iter().enumerate().find_map(|(o, order)| {
        order
            .demand
            .iter()
            .enumerate()
            .find(|&(p, &need)| need > 0 && world.product_available(p))
            .map(|(p, _)| (o, p))
    })
}

/// Stocked warehouse minimising drone → warehouse → order travel.
///
/// Ties go to the lowest warehouse index.
fn nearest_warehouse(
    world: &World,
    drone: usize,
    product: ProductType,
    order: usize,
) -> Option<usize> {
    let from = world.drones[drone].position;
    let to = world.orders[order].position;

    let mut best: Option<(usize, u64)> = None;
    for (i, wh) in world.warehouses.iter().enumerate() {
        if !wh.has_stock(product) {
            continue;
        }
        let cost = u64::from(distance(from, wh.position)) + u64::from(distance(wh.position, to));
        if best.map_or(true, |(_, c)| cost < c) {
            best = Some((i, cost));
        }
    }
    best.map(|(i, _)| i)
}
