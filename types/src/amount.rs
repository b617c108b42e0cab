//! Directed amounts: the signed contribution of a transfer to one account.
//!
//! Amounts are carried in the chain's smallest unit (mutez, drops, nAVAX) as
//! `u64`; an amount plus its fee is widened before it is summed. Balances are accumulated as `i128` so that replaying an arbitrary
//! transfer history can never overflow.

use serde::{Deserialize, Serialize};

/// Whether value flows into or out of the account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Incoming,
    Outgoing,
}

/// An unsigned amount paired with the direction it moves relative to an account.
///
/// The value is at most `2 * u64::MAX` (an amount plus its fee), so it is
/// held as `u128` and always converts to `i128` exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectedAmount {
    value: u128,
    direction: Direction,
}

impl DirectedAmount {
    pub fn incoming(value: u64) -> Self {
        Self {
            value: u128::from(value),
            direction: Direction::Incoming,
        }
    }

    pub fn outgoing(value: u64) -> Self {
        Self {
            value: u128::from(value),
            direction: Direction::Outgoing,
        }
    }

    /// An outgoing `amount` together with the `fee` paid for it.
    pub fn spent(amount: u64, fee: u64) -> Self {
        Self {
            value: u128::from(amount) + u128::from(fee),
            direction: Direction::Outgoing,
        }
    }

    pub fn value(&self) -> u128 {
        self.value
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_outgoing(&self) -> bool {
        self.direction == Direction::Outgoing
    }

    /// Signed balance delta: positive when incoming, negative when outgoing.
    pub fn signed(&self) -> i128 {
        // Exact for every constructed value; saturates only for hand-edited
        // serialized input.
        let value = i128::try_from(self.value).unwrap_or(i128::MAX);
        match self.direction {
            Direction::Incoming => value,
            Direction::Outgoing => -value,
        }
    }
}
