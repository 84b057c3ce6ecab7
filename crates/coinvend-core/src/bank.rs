//! # Coin Bank
//!
//! The machine's coin inventory, keyed by denomination, and the greedy
//! change-making algorithm that pays out of it.
//!
//! ## Bank Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Coin Bank Flow                                  │
//! │                                                                         │
//! │  Operator float ──► deposit(d, n) ──┐                                  │
//! │                                     │                                   │
//! │  Customer coin  ──► deposit(d, 1) ──┼──► coins: {d → held}             │
//! │                                     │                                   │
//! │  Operator empties ◄─ withdraw(d, n) ┤                                  │
//! │                                     │                                   │
//! │  Change tray    ◄─ pay_out(amount) ─┘  largest denomination first      │
//! │                                                                         │
//! │  Key set is fixed at construction. Unknown coins are rejected.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreResult, VendingError};
use crate::money::Money;
use crate::validation::{validate_denominations, ValidationResult};
use crate::DEFAULT_DENOMINATIONS;

// =============================================================================
// Coin Bank
// =============================================================================

/// Held coin counts per recognized denomination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinBank {
    coins: BTreeMap<u32, u32>,
}

impl CoinBank {
    /// Creates an empty bank that recognizes exactly `denominations`.
    pub fn new(denominations: &[u32]) -> ValidationResult<Self> {
        validate_denominations(denominations)?;

        Ok(CoinBank {
            coins: denominations.iter().map(|&d| (d, 0)).collect(),
        })
    }

    /// Rebuilds a bank from previously captured counts.
    pub fn from_counts(coins: BTreeMap<u32, u32>) -> ValidationResult<Self> {
        let denominations: Vec<u32> = coins.keys().copied().collect();
        validate_denominations(&denominations)?;

        Ok(CoinBank { coins })
    }

    /// Recognized denominations, smallest first.
    pub fn denominations(&self) -> impl DoubleEndedIterator<Item = u32> + '_ {
        self.coins.keys().copied()
    }

    /// Checks if `denomination` is one of the bank's keys.
    #[inline]
    pub fn recognizes(&self, denomination: u32) -> bool {
        self.coins.contains_key(&denomination)
    }

    /// Held count for `denomination`, or `None` if it is not recognized.
    #[inline]
    pub fn count(&self, denomination: u32) -> Option<u32> {
        self.coins.get(&denomination).copied()
    }

    /// All held counts, zero entries included.
    #[inline]
    pub fn counts(&self) -> &BTreeMap<u32, u32> {
        &self.coins
    }

    /// Total value of every coin held.
    ///
    /// Clamps at `u64::MAX` units when a bank of very large coins holds more
    /// value than a `Money` can express.
    pub fn total(&self) -> Money {
        self.coins
            .iter()
            .fold(Money::zero(), |acc, (&d, &n)| {
                acc.saturating_add(Money::of_coins(d, n))
            })
    }

    /// Adds `count` coins of `denomination` and returns the new held count.
    ///
    /// A zero count is accepted and changes nothing.
    pub fn deposit(&mut self, denomination: u32, count: u32) -> CoreResult<u32> {
        let held = self
            .coins
            .get_mut(&denomination)
            .ok_or(VendingError::UnknownDenomination(denomination))?;

        *held = held
            .checked_add(count)
            .ok_or(VendingError::CoinCountOverflow(denomination))?;

        debug!(denomination, count, held = *held, "Coins deposited");
        Ok(*held)
    }

    /// Removes `count` coins of `denomination` and returns the new held count.
    pub fn withdraw(&mut self, denomination: u32, count: u32) -> CoreResult<u32> {
        let held = self
            .coins
            .get_mut(&denomination)
            .ok_or(VendingError::UnknownDenomination(denomination))?;

        if *held < count {
            return Err(VendingError::InsufficientBankFunds {
                denomination,
                available: *held,
                requested: count,
            });
        }

        *held -= count;
        debug!(denomination, count, held = *held, "Coins withdrawn");
        Ok(*held)
    }

    /// Pays out `amount` greedily, largest denomination first.
    ///
    /// Returns the coins taken from the bank and the part of `amount` that
    /// could not be paid.
    ///
    /// ## Algorithm
    /// ```text
    /// for d in denominations (descending):
    ///     desired = remaining / d
    ///     if held[d] >= desired:  take desired,  remaining = remaining % d
    ///     else:                   take held[d],  remaining -= d * held[d]
    /// ```
    ///
    /// A shortfall at one denomination is carried to the smaller ones only;
    /// a larger denomination already passed is never revisited. Whatever is
    /// left after the smallest denomination is the residual.
    ///
    /// ## Example
    /// ```rust
    /// use coinvend_core::bank::CoinBank;
    /// use coinvend_core::money::Money;
    ///
    /// let mut bank = CoinBank::new(&[1, 10, 20]).unwrap();
    /// bank.deposit(20, 1).unwrap();
    /// bank.deposit(10, 2).unwrap();
    ///
    /// let (change, residual) = bank.pay_out(Money::from_units(45));
    /// assert_eq!(change.count(20), 1);
    /// assert_eq!(change.count(10), 2);
    /// assert_eq!(residual, Money::from_units(5));
    /// ```
    pub fn pay_out(&mut self, amount: Money) -> (Change, Money) {
        let mut remaining = amount;
        let mut paid = BTreeMap::new();

        for (&denomination, held) in self.coins.iter_mut().rev() {
            let desired = remaining.coins_of(denomination);

            let taken = if u64::from(*held) >= desired {
                remaining = remaining.remainder_of(denomination);
                // desired <= held, so it fits in u32
                desired as u32
            } else {
                // held < desired, so d * held < remaining
                remaining = Money::from_units(
                    remaining.units() - Money::of_coins(denomination, *held).units(),
                );
                *held
            };

            *held -= taken;
            paid.insert(denomination, taken);
        }

        let change = Change { coins: paid };
        debug!(
            paid = change.total().units(),
            residual = remaining.units(),
            "Change paid out"
        );
        (change, remaining)
    }
}

impl Default for CoinBank {
    /// Empty bank with the standard denomination set.
    fn default() -> Self {
        CoinBank {
            coins: DEFAULT_DENOMINATIONS.iter().map(|&d| (d, 0)).collect(),
        }
    }
}

// =============================================================================
// Change
// =============================================================================

/// Coins returned to the customer, one entry per recognized denomination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Change {
    coins: BTreeMap<u32, u32>,
}

impl Change {
    /// Coins returned of `denomination` (0 if none or unrecognized).
    pub fn count(&self, denomination: u32) -> u32 {
        self.coins.get(&denomination).copied().unwrap_or(0)
    }

    /// Total value returned.
    pub fn total(&self) -> Money {
        self.coins
            .iter()
            .fold(Money::zero(), |acc, (&d, &n)| {
                acc.saturating_add(Money::of_coins(d, n))
            })
    }

    /// Checks if no coins were returned at all.
    pub fn is_empty(&self) -> bool {
        self.coins.values().all(|&n| n == 0)
    }

    /// Iterates `(denomination, count)` pairs, smallest denomination first.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.coins.iter().map(|(&d, &n)| (d, n))
    }

    pub fn as_map(&self) -> &BTreeMap<u32, u32> {
        &self.coins
    }
}

impl From<Change> for BTreeMap<u32, u32> {
    fn from(change: Change) -> Self {
        change.coins
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
