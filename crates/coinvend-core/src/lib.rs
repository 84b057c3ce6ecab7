//! # coinvend-core: Pure Vending Machine Logic
//!
//! This crate is the **heart** of Coinvend. It models one coin-operated
//! vending machine: product slots, the coin bank, the customer balance, and
//! the change-making rules, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Coinvend Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Kiosk host (hardware I/O, UI, persistence)         │   │
//! │  │    coin acceptor ──► selection panel ──► dispenser / tray       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ method calls                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ coinvend-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  machine  │  │   bank    │  │   types   │  │ validation│  │   │
//! │  │   │ Vending-  │  │ CoinBank  │  │  Product  │  │   rules   │  │   │
//! │  │   │ Machine   │  │  Change   │  │   Slot    │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO HARDWARE • SYNCHRONOUS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`machine`] - The `VendingMachine` aggregate and its snapshot
//! - [`bank`] - Coin bank and the greedy change-making algorithm
//! - [`types`] - Product, Slot, PurchaseOutcome
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Contract error types
//! - [`validation`] - Input checks
//!
//! ## Design Principles
//!
//! 1. **Contract errors vs. business outcomes**: misuse is `Err`, an empty
//!    wallet or empty slot is an ordinary `PurchaseOutcome`
//! 2. **All-or-nothing**: a failed operation never half-applies
//! 3. **Integer Money**: all amounts are whole smallest currency units
//! 4. **No globals**: every machine is self-contained
//!
//! ## Example Usage
//!
//! ```rust
//! use coinvend_core::{Money, VendingMachine};
//!
//! let mut machine = VendingMachine::new();
//! machine.add_product(0, 1, "Coke", Money::from_units(120), 5).unwrap();
//!
//! machine.insert_coin(100).unwrap();
//! machine.insert_coin(50).unwrap();
//!
//! let outcome = machine.purchase_product(0).unwrap();
//! assert_eq!(outcome.to_string(), "Coke");
//! assert_eq!(machine.balance(), Money::from_units(30));
//!
//! // The bank holds the 100 and the 50; it cannot make 30.
//! let change = machine.eject_change();
//! assert!(change.is_empty());
//! assert_eq!(machine.balance(), Money::from_units(30));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bank;
pub mod error;
pub mod machine;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use bank::{Change, CoinBank};
pub use error::{CoreResult, ValidationError, VendingError};
pub use machine::{MachineSnapshot, VendingMachine};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of dispensing locations (0-8).
pub const SLOT_COUNT: usize = 9;

/// Coins accepted when no denomination list is configured.
pub const DEFAULT_DENOMINATIONS: [u32; 8] = [1, 2, 5, 10, 20, 50, 100, 200];

/// Longest product name the selection display can show.
pub const MAX_PRODUCT_NAME_LEN: usize = 100;
