//! # Money Module
//!
//! Provides the `Money` type for prices and the customer balance.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every coin the machine accepts is a whole number of the smallest      │
//! │  currency unit. Prices are set in the same unit.                       │
//! │                                                                         │
//! │    insert 100 + insert 20  → balance 120                               │
//! │    buy Coke @ 120          → balance 0                                 │
//! │                                                                         │
//! │  Integer units mean the balance always reconciles exactly with the     │
//! │  coins sitting in the bank. No floating point, ever.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use coinvend_core::money::Money;
//!
//! let price = Money::from_units(120);
//! let balance = Money::from_units(100)
//!     .checked_add(Money::from_units(20))
//!     .unwrap();
//!
//! assert!(balance >= price);
//! assert_eq!(balance.checked_sub(price), Some(Money::zero()));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A non-negative amount in the smallest currency unit.
///
/// ## Design Decisions
/// - **u64 (unsigned)**: a balance or price can never be negative
/// - **Single field tuple struct**: zero-cost abstraction over u64
/// - **No arithmetic operators**: use [`Money::checked_add`] and
///   [`Money::checked_sub`] so overflow or underflow is a visible `None`,
///   never a wrap or panic
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(u64);

impl Money {
    /// Creates a Money value from smallest currency units.
    #[inline]
    pub const fn from_units(units: u64) -> Self {
        Money(units)
    }

    /// Returns the value in smallest currency units.
    #[inline]
    pub const fn units(&self) -> u64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds `other`, returning `None` if the sum does not fit in a `u64`.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(units) => Some(Money(units)),
            None => None,
        }
    }

    /// Adds `other`, clamping at the largest representable amount.
    #[inline]
    pub const fn saturating_add(&self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// Subtracts `other`, returning `None` if the result would be negative.
    ///
    /// ## Example
    /// ```rust
    /// use coinvend_core::money::Money;
    ///
    /// let balance = Money::from_units(100);
    /// assert_eq!(balance.checked_sub(Money::from_units(120)), None);
    /// assert_eq!(balance.checked_sub(Money::from_units(40)), Some(Money::from_units(60)));
    /// ```
    #[inline]
    pub const fn checked_sub(&self, other: Money) -> Option<Money> {
        match self.0.checked_sub(other.0) {
            Some(units) => Some(Money(units)),
            None => None,
        }
    }

    /// Number of whole coins of `denomination` that fit in this amount.
    #[inline]
    pub const fn coins_of(&self, denomination: u32) -> u64 {
        self.0 / denomination as u64
    }

    /// Value left over after paying out as many `denomination` coins as fit.
    #[inline]
    pub const fn remainder_of(&self, denomination: u32) -> Money {
        Money(self.0 % denomination as u64)
    }

    /// Value of `count` coins of `denomination`.
    #[inline]
    pub const fn of_coins(denomination: u32, count: u32) -> Money {
        Money(denomination as u64 * count as u64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Bare unit count. Currency formatting belongs to the UI.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Money {
    fn from(units: u32) -> Self {
        Money(units as u64)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        let money = Money::from_units(142);
        assert_eq!(money.units(), 142);
        assert!(!money.is_zero());
        assert!(Money::zero().is_zero());
        assert_eq!(Money::default(), Money::zero());
    }

    #[test]
    fn test_checked_add() {
        let a = Money::from_units(100);
        let b = Money::from_units(20);

        assert_eq!(a.checked_add(b), Some(Money::from_units(120)));
        assert_eq!(Money::from_units(u64::MAX).checked_add(Money::from_units(1)), None);
    }

    #[test]
    fn test_saturating_add_clamps_at_max() {
        let max = Money::from_units(u64::MAX);
        assert_eq!(max.saturating_add(Money::from_units(5)), max);
        assert_eq!(
            Money::from_units(1).saturating_add(Money::from_units(2)),
            Money::from_units(3)
        );
    }

    #[test]
    fn test_checked_sub_never_goes_negative() {
        let a = Money::from_units(100);
        assert_eq!(a.checked_sub(Money::from_units(100)), Some(Money::zero()));
        assert_eq!(a.checked_sub(Money::from_units(101)), None);
    }

    #[test]
    fn test_coin_division() {
        let balance = Money::from_units(142);
        assert_eq!(balance.coins_of(100), 1);
        assert_eq!(balance.remainder_of(100), Money::from_units(42));
        assert_eq!(balance.coins_of(200), 0);
        assert_eq!(balance.remainder_of(200), balance);
        assert_eq!(Money::of_coins(20, 3), Money::from_units(60));
    }

    #[test]
    fn test_display_is_bare_units() {
        assert_eq!(Money::from_units(120).to_string(), "120");
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let json = serde_json::to_string(&Money::from_units(120)).unwrap();
        assert_eq!(json, "120");
    }
}
