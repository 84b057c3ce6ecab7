//! # Domain Types
//!
//! Value types held by the vending machine and returned from purchases.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    Product      │   │      Slot       │   │  PurchaseOutcome    │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  id (u32)       │   │  Empty          │   │  Dispensed          │   │
//! │  │  name           │◄──│  Occupied(..)   │   │  OutOfStock         │   │
//! │  │  price (Money)  │   └─────────────────┘   │  InsufficientBalance│   │
//! │  │  quantity (u32) │                         └─────────────────────┘   │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product loaded into a slot.
///
/// Quantity only changes through [`Product::restock`] and
/// [`Product::take_one`]; both refuse to wrap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Stable product identifier.
    id: u32,

    /// Display name shown on the selection panel.
    name: String,

    /// Price in smallest currency units.
    price: Money,

    /// Units left in the slot.
    quantity: u32,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, price: Money, quantity: u32) -> Self {
        Product {
            id,
            name: name.into(),
            price,
            quantity,
        }
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Checks if at least one unit can be dispensed.
    #[inline]
    pub fn is_in_stock(&self) -> bool {
        self.quantity > 0
    }

    /// Adds `quantity` units and returns the new quantity.
    ///
    /// Returns `None` without changing anything if the counter would overflow.
    pub fn restock(&mut self, quantity: u32) -> Option<u32> {
        self.quantity = self.quantity.checked_add(quantity)?;
        Some(self.quantity)
    }

    /// Removes one unit and returns the new quantity.
    ///
    /// Returns `None` if the product is already out of stock.
    pub fn take_one(&mut self) -> Option<u32> {
        self.quantity = self.quantity.checked_sub(1)?;
        Some(self.quantity)
    }
}

// =============================================================================
// Slot
// =============================================================================

/// One dispensing location.
///
/// `Empty` means unconfigured. An `Occupied` slot normally holds at least one
/// unit (the last purchase clears it), but a slot restored from a snapshot can
/// be occupied with zero units until it is restocked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "state", rename_all = "snake_case")]
#[ts(export)]
pub enum Slot {
    #[default]
    Empty,
    Occupied(Product),
}

impl Slot {
    /// Returns the product in this slot, if any.
    pub fn product(&self) -> Option<&Product> {
        match self {
            Slot::Empty => None,
            Slot::Occupied(product) => Some(product),
        }
    }

    pub(crate) fn product_mut(&mut self) -> Option<&mut Product> {
        match self {
            Slot::Empty => None,
            Slot::Occupied(product) => Some(product),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    /// Empties the slot, returning what was in it.
    pub(crate) fn take(&mut self) -> Slot {
        std::mem::take(self)
    }
}

// =============================================================================
// Purchase Outcome
// =============================================================================

/// Result of a purchase attempt that passed the contract checks.
///
/// ## User Workflow
/// ```text
/// Customer presses button 2
///      │
///      ▼
/// purchase_product(2)
///      │
///      ├── no units left      → OutOfStock          "Product is out of stock"
///      ├── balance < price    → InsufficientBalance "Insufficient balance"
///      └── otherwise          → Dispensed           "Coke"
/// ```
///
/// These are routine: the customer can insert more coins or pick another
/// product, so they are values, not errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "outcome", rename_all = "snake_case")]
#[ts(export)]
pub enum PurchaseOutcome {
    /// The product was vended and its price taken from the balance.
    Dispensed { product_id: u32, name: String },

    /// The slot is configured but has no units left.
    OutOfStock,

    /// The customer has not inserted enough.
    InsufficientBalance { price: Money, balance: Money },
}

impl PurchaseOutcome {
    /// Checks if a product was vended.
    pub fn is_dispensed(&self) -> bool {
        matches!(self, PurchaseOutcome::Dispensed { .. })
    }

    /// Name of the vended product, if any.
    pub fn product_name(&self) -> Option<&str> {
        match self {
            PurchaseOutcome::Dispensed { name, .. } => Some(name),
            _ => None,
        }
    }
}

/// Message for the customer display.
impl fmt::Display for PurchaseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PurchaseOutcome::Dispensed { name, .. } => write!(f, "{}", name),
            PurchaseOutcome::OutOfStock => write!(f, "Product is out of stock"),
            PurchaseOutcome::InsufficientBalance { .. } => write!(f, "Insufficient balance"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
