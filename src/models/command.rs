//! Committed drone commands.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ProductType;

/// A committed load or deliver action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Pick up units at a warehouse.
    Load {
        drone_id: usize,
        warehouse_id: usize,
        product: ProductType,
        count: u32,
    },
    /// Drop units at an order.
    Deliver {
        drone_id: usize,
        order_id: usize,
        product: ProductType,
        count: u32,
    },
}

impl Command {
    /// Drone that executes the command.
    pub fn drone_id(&self) -> usize {
        match *self {
            Command::Load { drone_id, .. } | Command::Deliver { drone_id, .. } => drone_id,
        }
    }

    /// Units moved.
    pub fn count(&self) -> u32 {
        match *self {
            Command::Load { count, .. } | Command::Deliver { count, .. } => count,
        }
    }

    /// Product type moved.
    pub fn product(&self) -> ProductType {
        match *self {
            Command::Load { product, .. } | Command::Deliver { product, .. } => product,
        }
    }

    /// One-letter action code used in schedule files.
    pub fn code(&self) -> char {
        match self {
            Command::Load { .. } => 'L',
            Command::Deliver { .. } => 'D',
        }
    }
}

/// Schedule-file line: `<drone> <code> <counterpart> <type> <count>`.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counterpart = match *self {
            Command::Load { warehouse_id, .. } => warehouse_id,
            Command::Deliver { order_id, .. } => order_id,
        };
        write!(
            f,
            "{} {} {} {} {}",
            self.drone_id(),
            self.code(),
            counterpart,
            self.product(),
            self.count()
        )
    }
}

/// A command with the turn bookkeeping captured at commit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedCommand {
    /// Turn the command was committed on.
    pub turn: u32,
    /// Turns left in the horizon at commit.
    pub turns_left: u32,
    /// Travel time the command required.
    pub travel: u32,
    /// The committed command.
    pub command: Command,
}

impl LoggedCommand {
    /// Turn on which the action itself happens (after travel).
    #[inline]
    pub fn completes_at(&self) -> u32 {
        self.turn + self.travel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_display() {
        let load = Command::Load {
            drone_id: 0,
            warehouse_id: 1,
            product: 2,
            count: 3,
        };
        let deliver = Command::Deliver {
            drone_id: 4,
            order_id: 5,
            product: 6,
            count: 7,
        };
        assert_eq!(load.to_string(), "0 L 1 2 3");
        assert_eq!(deliver.to_string(), "4 D 5 6 7");
    }

    #[test]
    fn test_completes_at() {
        let logged = LoggedCommand {
            turn: 10,
            turns_left: 40,
            travel: 4,
            command: Command::Load {
                drone_id: 0,
                warehouse_id: 0,
                product: 0,
                count: 1,
            },
        };
        assert_eq!(logged.completes_at(), 14);
    }
}
