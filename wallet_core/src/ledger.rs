//! The generic wallet ledger.
//!
//! A wallet owns copies of every transfer touching its account and derives
//! from them:
//!
//! - the balance, the sum of directed amounts;
//! - the sequence, the number of transfers the account issued that either
//!   made it into a block or did not fail;
//! - the block height at creation, the lowest block of a successful
//!   incoming transfer;
//! - whether the account's key must still be revealed on chain.
//!
//! Adding a transfer applies its delta to the balance. Removing or updating
//! one recomputes everything, since the affected transfer's error state may
//! have changed. One mutex guards the transfers and everything derived from
//! them.

use std::fmt;

use parking_lot::Mutex;
use tracing::{debug, info};
use wk_types::{DirectedAmount, Timestamp, TxHash};

/// A transfer as the ledger sees it.
pub trait LedgerTransfer: Clone + Send {
    type Address: Copy + PartialEq + fmt::Debug + Send;

    fn source(&self) -> &Self::Address;
    fn target(&self) -> &Self::Address;
    fn hash(&self) -> Option<TxHash>;
    fn timestamp(&self) -> Timestamp;
    fn block_height(&self) -> Option<u64>;
    fn has_error(&self) -> bool;

    /// # Panics
    ///
    /// Implementations panic when `account` is neither source nor target.
    fn amount_directed(&self, account: &Self::Address) -> DirectedAmount;

    /// Chain-specific dedup identity.
    fn is_same(&self, other: &Self) -> bool;
}

/// An account the ledger can write replayed state back into.
pub trait LedgerAccount: Clone + Send {
    type Address: Copy + PartialEq + fmt::Debug + Send;

    fn address(&self) -> Self::Address;

    fn apply_replay(&mut self, _replay: &Replay) {}
}

/// Ties one chain's account, transfer and fee-basis types together.
pub trait Chain {
    type Address: Copy + PartialEq + fmt::Debug + Send;
    type Account: LedgerAccount<Address = Self::Address>;
    type Transfer: LedgerTransfer<Address = Self::Address>;
    type FeeBasis: Copy + PartialEq + fmt::Debug + Send;

    const NAME: &'static str;

    fn default_fee_basis() -> Self::FeeBasis;

    /// Minimum (or, with `as_maximum`, maximum) balance the wallet may keep,
    /// or `None` when the chain imposes no limit.
    fn balance_limit(_as_maximum: bool) -> Option<u64> {
        None
    }
}

/// State derived by replaying a wallet's transfers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Replay {
    pub balance: i128,
    pub sequence: u64,
    pub block_height_at_creation: Option<u64>,
    pub needs_reveal: bool,
}

impl Default for Replay {
    fn default() -> Self {
        Self {
            balance: 0,
            sequence: 0,
            block_height_at_creation: None,
            needs_reveal: true,
        }
    }
}

/// Replay `transfers` for `account`, oldest first.
///
/// Confirmed transfers order by block height, then timestamp; pending ones
/// come last.
pub fn replay<T: LedgerTransfer>(transfers: &[T], account: &T::Address) -> Replay {
    let mut ordered: Vec<&T> = transfers.iter().collect();
    ordered.sort_by_key(|t| (t.block_height().unwrap_or(u64::MAX), t.timestamp()));

    let mut state = Replay::default();
    for transfer in ordered {
        let directed = transfer.amount_directed(account);
        state.balance += directed.signed();

        if directed.is_outgoing() && !transfer.has_error() {
            state.needs_reveal = false;
        }
        if directed.value() != 0 && state.balance == 0 {
            state.needs_reveal = true;
        }

        if transfer.source() == account {
            if transfer.block_height().is_some() || !transfer.has_error() {
                state.sequence += 1;
            }
        } else if !transfer.has_error() && transfer.target() == account {
            if let Some(height) = transfer.block_height() {
                state.block_height_at_creation = Some(
                    state
                        .block_height_at_creation
                        .map_or(height, |h| h.min(height)),
                );
            }
        }
    }
    state
}

struct WalletState<C: Chain> {
    account: C::Account,
    transfers: Vec<C::Transfer>,
    replay: Replay,
    default_fee_basis: C::FeeBasis,
}

impl<C: Chain> WalletState<C> {
    fn position(&self, transfer: &C::Transfer) -> Option<usize> {
        self.transfers.iter().position(|t| t.is_same(transfer))
    }

    fn recompute(&mut self) {
        let address = self.account.address();
        let replay = replay(&self.transfers, &address);
        self.set_replay(replay);
    }

    fn set_replay(&mut self, replay: Replay) {
        if replay.needs_reveal != self.replay.needs_reveal {
            debug!(
                chain = C::NAME,
                needs_reveal = replay.needs_reveal,
                "reveal-need changed"
            );
        }
        self.replay = replay;
        self.account.apply_replay(&replay);
    }
}

pub struct Wallet<C: Chain> {
    address: C::Address,
    state: Mutex<WalletState<C>>,
}

impl<C: Chain> Wallet<C> {
    pub fn new(account: C::Account) -> Self {
        Self {
            address: account.address(),
            state: Mutex::new(WalletState {
                account,
                transfers: Vec::new(),
                replay: Replay::default(),
                default_fee_basis: C::default_fee_basis(),
            }),
        }
    }

    pub fn address(&self) -> C::Address {
        self.address
    }

    pub fn has_address(&self, address: &C::Address) -> bool {
        self.address == *address
    }

    /// A copy of the account, including state written back by replay.
    pub fn account(&self) -> C::Account {
        self.state.lock().account.clone()
    }

    pub fn balance(&self) -> i128 {
        self.state.lock().replay.balance
    }

    pub fn balance_limit(&self, as_maximum: bool) -> Option<u64> {
        C::balance_limit(as_maximum)
    }

    pub fn sequence(&self) -> u64 {
        self.state.lock().replay.sequence
    }

    pub fn block_height_at_creation(&self) -> Option<u64> {
        self.state.lock().replay.block_height_at_creation
    }

    pub fn default_fee_basis(&self) -> C::FeeBasis {
        self.state.lock().default_fee_basis
    }

    pub fn set_default_fee_basis(&self, fee_basis: C::FeeBasis) {
        self.state.lock().default_fee_basis = fee_basis;
    }

    pub fn transfers(&self) -> Vec<C::Transfer> {
        self.state.lock().transfers.clone()
    }

    pub fn transfer_count(&self) -> usize {
        self.state.lock().transfers.len()
    }

    pub fn has_transfer(&self, transfer: &C::Transfer) -> bool {
        self.state.lock().position(transfer).is_some()
    }

    pub fn transfer_by_hash(&self, hash: &TxHash) -> Option<C::Transfer> {
        let state = self.state.lock();
        state
            .transfers
            .iter()
            .find(|t| t.hash().as_ref() == Some(hash))
            .cloned()
    }

    /// Store a copy of `transfer` unless an equal one is already held.
    ///
    /// Returns whether it was added.
    ///
    /// # Panics
    ///
    /// Panics if the transfer involves neither side of this wallet's account.
    pub fn add_transfer(&self, transfer: &C::Transfer) -> bool {
        let mut state = self.state.lock();
        if state.position(transfer).is_some() {
            return false;
        }
        let delta = transfer.amount_directed(&self.address).signed();
        state.transfers.push(transfer.clone());
        let balance = state.replay.balance + delta;
        let derived = replay(&state.transfers, &self.address);
        state.set_replay(Replay { balance, ..derived });
        info!(
            chain = C::NAME,
            hash = ?transfer.hash(),
            balance = %balance,
            "transfer added"
        );
        true
    }

    /// Drop the held copy equal to `transfer`. Returns whether one existed.
    pub fn remove_transfer(&self, transfer: &C::Transfer) -> bool {
        let mut state = self.state.lock();
        let Some(index) = state.position(transfer) else {
            return false;
        };
        state.transfers.remove(index);
        state.recompute();
        info!(
            chain = C::NAME,
            hash = ?transfer.hash(),
            balance = %state.replay.balance,
            "transfer removed"
        );
        true
    }

    /// Replace the held copy equal to `transfer` (e.g. now confirmed or
    /// failed) and recompute. Returns whether one existed.
    pub fn update_transfer(&self, transfer: &C::Transfer) -> bool {
        let mut state = self.state.lock();
        let Some(index) = state.position(transfer) else {
            return false;
        };
        state.transfers[index] = transfer.clone();
        state.recompute();
        debug!(
            chain = C::NAME,
            hash = ?transfer.hash(),
            balance = %state.replay.balance,
            "transfer updated"
        );
        true
    }

    pub(crate) fn replay_state(&self) -> Replay {
        self.state.lock().replay
    }
}
