//! # Error Types
//!
//! Contract errors for coinvend-core.
//!
//! ## Two-Tier Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Failure vs. Outcome                               │
//! │                                                                         │
//! │  Contract errors (this file)  → Err(VendingError)                      │
//! │  ├── bad location, empty / unconfigured slot                           │
//! │  ├── unknown denomination, bank cannot cover a withdrawal              │
//! │  └── zero quantity, mismatched product id                              │
//! │                                                                         │
//! │  Business outcomes (types.rs) → Ok(PurchaseOutcome)                    │
//! │  └── out of stock, insufficient balance, dispensed                     │
//! │                                                                         │
//! │  Flow: ValidationError → VendingError → ConfigError (config crate)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation that returns `Err` leaves the machine untouched.

use thiserror::Error;

// =============================================================================
// Vending Error
// =============================================================================

/// Caller misuse of the machine API.
///
/// These are bug signals for the embedding application: it should validate
/// before calling, or surface the error to an operator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VendingError {
    /// Location is not one of the fixed dispensing positions.
    #[error("Location {location} is out of range (0-{max})")]
    LocationOutOfRange { location: usize, max: usize },

    /// A stocking operation was called with a zero quantity.
    #[error("Quantity for location {location} must be greater than zero")]
    InvalidQuantity { location: usize },

    /// Stock or purchase requested on a slot with no product.
    ///
    /// ## User Workflow
    /// ```text
    /// Operator: add_stock(3, COKE, 10)
    ///      │
    ///      ▼
    /// Slot 3 is Empty
    ///      │
    ///      ▼
    /// SlotUnconfigured { location: 3 }
    ///      │
    ///      ▼
    /// Operator runs add_product(3, ...) first
    /// ```
    #[error("Location {location} is unconfigured. Use add_product first.")]
    SlotUnconfigured { location: usize },

    /// Removal requested on a slot that is already empty.
    #[error("Location {location} is empty")]
    SlotEmpty { location: usize },

    /// The slot holds a different product than the one being stocked.
    #[error("Location {location} is stocked with product {stocked}, not {requested}")]
    ProductMismatch {
        location: usize,
        stocked: u32,
        requested: u32,
    },

    /// Restocking would overflow the slot quantity counter.
    #[error("Quantity at location {location} would overflow")]
    QuantityOverflow { location: usize },

    /// Coin value is not one of the bank's denominations.
    #[error("Invalid coin {0}")]
    UnknownDenomination(u32),

    /// The bank holds fewer coins than requested.
    #[error("Not enough of {denomination} to withdraw {requested} (held {available})")]
    InsufficientBankFunds {
        denomination: u32,
        available: u32,
        requested: u32,
    },

    /// Adding coins would overflow the held count.
    #[error("Coin count for {0} would overflow")]
    CoinCountOverflow(u32),

    /// Crediting a coin would overflow the customer's balance.
    #[error("Balance {balance} cannot accept a coin of {denomination}")]
    BalanceOverflow { balance: u64, denomination: u32 },

    /// A snapshot handed to `restore` is not a valid machine state.
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the checks in [`crate::validation`] before any state changes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Duplicate value (e.g., a denomination listed twice).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with VendingError.
pub type CoreResult<T> = Result<T, VendingError>;

// =============================================================================
// Unit Tests
// =============================================================================
