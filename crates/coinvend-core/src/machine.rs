//! # Vending Machine
//!
//! The aggregate root: nine product slots, a coin bank, and the customer's
//! running balance.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Vending Machine Operations                           │
//! │                                                                         │
//! │  Operator                      Machine State Change                     │
//! │  ────────                      ────────────────────                     │
//! │  add_product(loc, ..) ───────► slot Empty → Occupied, or qty += n      │
//! │  add_stock(loc, id, n) ──────► qty += n                                │
//! │  remove_product(loc) ────────► slot → Empty                            │
//! │  add_coins_to_bank(d, n) ────► bank[d] += n                            │
//! │  withdraw_coins_from_bank ───► bank[d] -= n                            │
//! │                                                                         │
//! │  Customer                                                               │
//! │  ────────                                                               │
//! │  insert_coin(d) ─────────────► bank[d] += 1, balance += d              │
//! │  purchase_product(loc) ──────► balance -= price, qty -= 1              │
//! │  eject_change() ─────────────► bank -= change, balance -= change       │
//! │                                                                         │
//! │  Every Err leaves the machine exactly as it was.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Stocking Policy
//! Stocking merges: adding the product already in a slot increases its
//! quantity, adding a different product is a `ProductMismatch`. Selling the
//! last unit clears the slot.
//!
//! ## Thread Safety
//! The machine has no internal locking. A host that shares one across threads
//! wraps the whole instance in a `Mutex` so operations stay serialized.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use ts_rs::TS;

use crate::bank::{Change, CoinBank};
use crate::error::{CoreResult, VendingError};
use crate::money::Money;
use crate::types::{Product, PurchaseOutcome, Slot};
use crate::validation::{validate_location, validate_product_name, validate_quantity};
use crate::SLOT_COUNT;

// =============================================================================
// Snapshot
// =============================================================================

/// Read-only copy of the full machine state.
///
/// Handed to the host's persistence layer; [`VendingMachine::restore`] turns
/// it back into a machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MachineSnapshot {
    /// One entry per location, in location order.
    pub slots: Vec<Slot>,

    /// Held count per denomination.
    pub bank: BTreeMap<u32, u32>,

    /// Customer's unspent balance.
    pub balance: Money,
}

// =============================================================================
// Vending Machine
// =============================================================================

/// A single coin-operated vending machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendingMachine {
    slots: [Slot; SLOT_COUNT],
    bank: CoinBank,
    balance: Money,
}

impl VendingMachine {
    /// Creates an empty machine accepting the standard denominations
    /// (1, 2, 5, 10, 20, 50, 100, 200).
    pub fn new() -> Self {
        VendingMachine {
            slots: Default::default(),
            bank: CoinBank::default(),
            balance: Money::zero(),
        }
    }

    /// Creates an empty machine accepting exactly `denominations`.
    ///
    /// ## Example
    /// ```rust
    /// use coinvend_core::VendingMachine;
    ///
    /// let machine = VendingMachine::with_denominations(&[5, 10, 25]).unwrap();
    /// assert!(machine.bank().recognizes(25));
    /// assert!(VendingMachine::with_denominations(&[]).is_err());
    /// ```
    pub fn with_denominations(denominations: &[u32]) -> CoreResult<Self> {
        let bank = CoinBank::new(denominations)?;

        Ok(VendingMachine {
            slots: Default::default(),
            bank,
            balance: Money::zero(),
        })
    }

    /// Rebuilds a machine from a snapshot.
    ///
    /// Product names must pass the same checks `add_product` applies, and
    /// must already be trimmed.
    pub fn restore(snapshot: MachineSnapshot) -> CoreResult<Self> {
        let slot_count = snapshot.slots.len();
        let slots = <[Slot; SLOT_COUNT]>::try_from(snapshot.slots).map_err(|_| {
            VendingError::InvalidSnapshot(format!(
                "expected {} slots, got {}",
                SLOT_COUNT, slot_count
            ))
        })?;

        for (location, product) in slots
            .iter()
            .enumerate()
            .filter_map(|(location, slot)| slot.product().map(|p| (location, p)))
        {
            validate_product_name(product.name())?;
            if product.name().trim() != product.name() {
                return Err(VendingError::InvalidSnapshot(format!(
                    "product name at location {} is not trimmed",
                    location
                )));
            }
        }

        let bank = CoinBank::from_counts(snapshot.bank)?;

        debug!(balance = snapshot.balance.units(), "Machine restored");
        Ok(VendingMachine {
            slots,
            bank,
            balance: snapshot.balance,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// All slots, indexed by location.
    pub fn slots(&self) -> &[Slot; SLOT_COUNT] {
        &self.slots
    }

    /// The slot at `location`.
    pub fn slot(&self, location: usize) -> CoreResult<&Slot> {
        validate_location(location)?;
        Ok(&self.slots[location])
    }

    pub fn bank(&self) -> &CoinBank {
        &self.bank
    }

    /// Customer's unspent balance.
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Copies the full machine state.
    pub fn snapshot(&self) -> MachineSnapshot {
        MachineSnapshot {
            slots: self.slots.to_vec(),
            bank: self.bank.counts().clone(),
            balance: self.balance,
        }
    }

    // =========================================================================
    // Slot / Product Management
    // =========================================================================

    /// Stocks `quantity` units of a product at `location`.
    ///
    /// ## Behavior
    /// - Empty slot: the product is created
    /// - Same product id already there: quantity increases, name and price
    ///   stay as first configured
    /// - Different product id: `ProductMismatch`
    pub fn add_product(
        &mut self,
        location: usize,
        product_id: u32,
        name: &str,
        price: Money,
        quantity: u32,
    ) -> CoreResult<()> {
        validate_location(location)?;
        validate_quantity(location, quantity)?;
        validate_product_name(name)?;

        let slot = &mut self.slots[location];
        if slot.is_empty() {
            *slot = Slot::Occupied(Product::new(product_id, name.trim(), price, quantity));
            debug!(location, product_id, quantity, "Product added");
            return Ok(());
        }

        let product = slot
            .product_mut()
            .ok_or(VendingError::SlotUnconfigured { location })?;
        Self::restock(location, product, product_id, quantity)
    }

    /// Adds `quantity` units to the product already configured at `location`.
    pub fn add_stock(&mut self, location: usize, product_id: u32, quantity: u32) -> CoreResult<()> {
        validate_location(location)?;
        validate_quantity(location, quantity)?;

        let product = self.slots[location]
            .product_mut()
            .ok_or(VendingError::SlotUnconfigured { location })?;

        Self::restock(location, product, product_id, quantity)
    }

    /// Clears the slot at `location`, returning the product it held.
    ///
    /// Any remaining units are discarded from the machine's books.
    pub fn remove_product(&mut self, location: usize) -> CoreResult<Product> {
        validate_location(location)?;

        match self.slots[location].take() {
            Slot::Occupied(product) => {
                debug!(
                    location,
                    product_id = product.id(),
                    discarded = product.quantity(),
                    "Product removed"
                );
                Ok(product)
            }
            Slot::Empty => Err(VendingError::SlotEmpty { location }),
        }
    }

    fn restock(
        location: usize,
        product: &mut Product,
        product_id: u32,
        quantity: u32,
    ) -> CoreResult<()> {
        if product.id() != product_id {
            return Err(VendingError::ProductMismatch {
                location,
                stocked: product.id(),
                requested: product_id,
            });
        }

        let total = product
            .restock(quantity)
            .ok_or(VendingError::QuantityOverflow { location })?;

        debug!(location, product_id, added = quantity, total, "Stock added");
        Ok(())
    }

    // =========================================================================
    // Coin Bank Accounting
    // =========================================================================

    /// Loads `count` coins into the bank. A zero count is a no-op.
    pub fn add_coins_to_bank(&mut self, denomination: u32, count: u32) -> CoreResult<()> {
        self.bank.deposit(denomination, count)?;
        Ok(())
    }

    /// Removes `count` coins from the bank.
    pub fn withdraw_coins_from_bank(&mut self, denomination: u32, count: u32) -> CoreResult<()> {
        self.bank.withdraw(denomination, count)?;
        Ok(())
    }

    /// Accepts one customer coin and returns the new balance.
    ///
    /// The coin goes to the bank and its value to the balance, or neither
    /// changes if the bank rejects it or the balance would overflow.
    ///
    /// ## Example
    /// ```rust
    /// use coinvend_core::{Money, VendingMachine};
    ///
    /// let mut machine = VendingMachine::new();
    /// machine.insert_coin(20).unwrap();
    /// assert_eq!(machine.insert_coin(5).unwrap(), Money::from_units(25));
    ///
    /// assert!(machine.insert_coin(3).is_err());
    /// assert_eq!(machine.balance(), Money::from_units(25));
    /// ```
    pub fn insert_coin(&mut self, denomination: u32) -> CoreResult<Money> {
        let balance = self
            .balance
            .checked_add(Money::from(denomination))
            .ok_or(VendingError::BalanceOverflow {
                balance: self.balance.units(),
                denomination,
            })?;

        self.bank.deposit(denomination, 1)?;
        self.balance = balance;

        debug!(denomination, balance = self.balance.units(), "Coin inserted");
        Ok(self.balance)
    }

    // =========================================================================
    // Purchase Flow
    // =========================================================================

    /// Attempts to vend the product at `location`.
    ///
    /// ## Returns
    /// - `Err` for a bad location or an unconfigured slot
    /// - `Ok(OutOfStock)` / `Ok(InsufficientBalance)` with nothing changed
    /// - `Ok(Dispensed)` after taking the price from the balance and one unit
    ///   from the slot; the slot is cleared when its last unit goes
    pub fn purchase_product(&mut self, location: usize) -> CoreResult<PurchaseOutcome> {
        validate_location(location)?;

        let balance = self.balance;
        let slot = &mut self.slots[location];
        let product = slot
            .product_mut()
            .ok_or(VendingError::SlotUnconfigured { location })?;

        if !product.is_in_stock() {
            debug!(location, product_id = product.id(), "Purchase refused: out of stock");
            return Ok(PurchaseOutcome::OutOfStock);
        }

        let price = product.price();
        let Some(remaining) = balance.checked_sub(price) else {
            debug!(
                location,
                price = price.units(),
                balance = balance.units(),
                "Purchase refused: insufficient balance"
            );
            return Ok(PurchaseOutcome::InsufficientBalance { price, balance });
        };

        let left = product.take_one().unwrap_or(0);
        let outcome = PurchaseOutcome::Dispensed {
            product_id: product.id(),
            name: product.name().to_string(),
        };

        if left == 0 {
            slot.take();
        }
        self.balance = remaining;

        info!(
            location,
            price = price.units(),
            balance = remaining.units(),
            left,
            "Product dispensed"
        );
        Ok(outcome)
    }

    // =========================================================================
    // Change Ejection
    // =========================================================================

    /// Returns the balance to the customer as coins from the bank.
    ///
    /// Pays greedily, largest denomination first (see [`CoinBank::pay_out`]).
    /// The returned [`Change`] has an entry for every recognized denomination.
    ///
    /// ## Compromise Change
    /// When the bank cannot cover the balance, the customer gets what could
    /// be paid and the rest stays on the machine as balance.
    pub fn eject_change(&mut self) -> Change {
        let requested = self.balance;
        let (change, residual) = self.bank.pay_out(requested);
        self.balance = residual;

        if residual.is_zero() {
            info!(paid = change.total().units(), "Change ejected");
        } else {
            warn!(
                requested = requested.units(),
                paid = change.total().units(),
                residual = residual.units(),
                "Bank short, compromise change ejected"
            );
        }

        change
    }
}

impl Default for VendingMachine {
    fn default() -> Self {
        VendingMachine::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn coke_at(machine: &mut VendingMachine, location: usize, quantity: u32) {
        machine
            .add_product(location, 1, "Coke", Money::from_units(120), quantity)
            .unwrap();
    }

    #[test]
    fn test_new_machine_is_empty() {
        let machine = VendingMachine::new();
        assert_eq!(machine.slots().len(), SLOT_COUNT);
        assert!(machine.slots().iter().all(Slot::is_empty));
        assert_eq!(machine.balance(), Money::zero());
        assert_eq!(machine.bank().total(), Money::zero());
        assert_eq!(machine, VendingMachine::default());
    }

    #[test]
    fn test_with_denominations_rejects_duplicates() {
        let err = VendingMachine::with_denominations(&[1, 1]).unwrap_err();
        assert!(matches!(
            err,
            VendingError::Validation(ValidationError::Duplicate { .. })
        ));
    }

    // -------------------------------------------------------------------------
    // add_product
    // -------------------------------------------------------------------------

    #[test]
    fn test_add_product_valid_input() {
        let mut machine = VendingMachine::new();
        for location in 0..SLOT_COUNT {
            let id = location as u32 + 1;
            let price = Money::from_units(50 + 10 * location as u64);
            machine
                .add_product(location, id, &format!("Item {}", location), price, 2)
                .unwrap();
        }

        for location in 0..SLOT_COUNT {
            let product = machine.slot(location).unwrap().product().unwrap();
            assert_eq!(product.id(), location as u32 + 1);
            assert_eq!(product.name(), format!("Item {}", location));
            assert_eq!(product.price(), Money::from_units(50 + 10 * location as u64));
            assert_eq!(product.quantity(), 2);
        }
    }

    #[test]
    fn test_add_product_invalid_location() {
        let mut machine = VendingMachine::new();
        assert_eq!(
            machine.add_product(9, 1, "Coke", Money::from_units(120), 1),
            Err(VendingError::LocationOutOfRange { location: 9, max: 8 })
        );
    }

    #[test]
    fn test_add_product_zero_quantity() {
        let mut machine = VendingMachine::new();
        assert_eq!(
            machine.add_product(2, 1, "Coke", Money::from_units(120), 0),
            Err(VendingError::InvalidQuantity { location: 2 })
        );
        assert!(machine.slot(2).unwrap().is_empty());
    }

    #[test]
    fn test_add_product_blank_name() {
        let mut machine = VendingMachine::new();
        let err = machine
            .add_product(2, 1, "  ", Money::from_units(120), 1)
            .unwrap_err();
        assert!(matches!(err, VendingError::Validation(_)));
    }

    #[test]
    fn test_add_existing_product_increases_quantity() {
        let mut machine = VendingMachine::new();
        coke_at(&mut machine, 2, 2);
        coke_at(&mut machine, 2, 2);

        assert_eq!(machine.slot(2).unwrap().product().unwrap().quantity(), 4);
    }

    #[test]
    fn test_add_different_product_is_mismatch() {
        let mut machine = VendingMachine::new();
        coke_at(&mut machine, 2, 1);

        assert_eq!(
            machine.add_product(2, 2, "Fanta", Money::from_units(120), 1),
            Err(VendingError::ProductMismatch {
                location: 2,
                stocked: 1,
                requested: 2,
            })
        );
        assert_eq!(machine.slot(2).unwrap().product().unwrap().name(), "Coke");
    }

    // -------------------------------------------------------------------------
    // add_stock
    // -------------------------------------------------------------------------

    #[test]
    fn test_add_stock() {
        let mut machine = VendingMachine::new();
        coke_at(&mut machine, 0, 1);

        machine.add_stock(0, 1, 5).unwrap();
        assert_eq!(machine.slot(0).unwrap().product().unwrap().quantity(), 6);
    }

    #[test]
    fn test_add_stock_failures() {
        let mut machine = VendingMachine::new();
        coke_at(&mut machine, 0, 1);

        assert!(matches!(
            machine.add_stock(9, 1, 1),
            Err(VendingError::LocationOutOfRange { .. })
        ));
        assert_eq!(
            machine.add_stock(0, 1, 0),
            Err(VendingError::InvalidQuantity { location: 0 })
        );
        assert_eq!(
            machine.add_stock(1, 1, 1),
            Err(VendingError::SlotUnconfigured { location: 1 })
        );
        assert!(matches!(
            machine.add_stock(0, 7, 1),
            Err(VendingError::ProductMismatch { .. })
        ));
        assert_eq!(machine.slot(0).unwrap().product().unwrap().quantity(), 1);
    }

    #[test]
    fn test_add_stock_overflow() {
        let mut machine = VendingMachine::new();
        coke_at(&mut machine, 0, u32::MAX);

        assert_eq!(
            machine.add_stock(0, 1, 1),
            Err(VendingError::QuantityOverflow { location: 0 })
        );
        assert_eq!(
            machine.slot(0).unwrap().product().unwrap().quantity(),
            u32::MAX
        );
    }

    // -------------------------------------------------------------------------
    // remove_product
    // -------------------------------------------------------------------------

    #[test]
    fn test_remove_product() {
        let mut machine = VendingMachine::new();
        coke_at(&mut machine, 2, 2);

        let removed = machine.remove_product(2).unwrap();
        assert_eq!(removed.quantity(), 2);
        assert!(machine.slot(2).unwrap().is_empty());
    }

    #[test]
    fn test_remove_product_failures() {
        let mut machine = VendingMachine::new();
        assert!(matches!(
            machine.remove_product(9),
            Err(VendingError::LocationOutOfRange { .. })
        ));
        assert_eq!(
            machine.remove_product(0),
            Err(VendingError::SlotEmpty { location: 0 })
        );
    }

    // -------------------------------------------------------------------------
    // bank
    // -------------------------------------------------------------------------

    #[test]
    fn test_add_and_withdraw_coins() {
        let mut machine = VendingMachine::new();
        machine.add_coins_to_bank(10, 2).unwrap();
        assert_eq!(machine.bank().count(10), Some(2));

        machine.withdraw_coins_from_bank(10, 2).unwrap();
        assert_eq!(machine.bank().count(10), Some(0));
    }

    #[test]
    fn test_bank_failures() {
        let mut machine = VendingMachine::new();
        assert_eq!(
            machine.add_coins_to_bank(11, 1),
            Err(VendingError::UnknownDenomination(11))
        );
        assert_eq!(
            machine.withdraw_coins_from_bank(11, 1),
            Err(VendingError::UnknownDenomination(11))
        );

        machine.add_coins_to_bank(10, 2).unwrap();
        assert!(matches!(
            machine.withdraw_coins_from_bank(10, 3),
            Err(VendingError::InsufficientBankFunds { .. })
        ));
    }

    #[test]
    fn test_insert_coin() {
        let mut machine = VendingMachine::new();
        machine.insert_coin(20).unwrap();
        machine.insert_coin(5).unwrap();

        assert_eq!(machine.balance(), Money::from_units(25));
        assert_eq!(machine.bank().count(20), Some(1));
        assert_eq!(machine.bank().count(5), Some(1));
    }

    #[test]
    fn test_insert_unknown_coin_changes_nothing() {
        let mut machine = VendingMachine::new();
        machine.insert_coin(10).unwrap();
        let before = machine.clone();

        assert_eq!(
            machine.insert_coin(3),
            Err(VendingError::UnknownDenomination(3))
        );
        assert_eq!(machine, before);
    }

    #[test]
    fn test_insert_coin_bank_overflow_changes_nothing() {
        let mut machine = VendingMachine::new();
        machine.add_coins_to_bank(1, u32::MAX).unwrap();
        let before = machine.clone();

        assert_eq!(machine.insert_coin(1), Err(VendingError::CoinCountOverflow(1)));
        assert_eq!(machine, before);
    }

    #[test]
    fn test_insert_coin_balance_overflow_changes_nothing() {
        let mut snapshot = VendingMachine::new().snapshot();
        snapshot.balance = Money::from_units(u64::MAX - 50);
        let mut machine = VendingMachine::restore(snapshot).unwrap();
        let before = machine.clone();

        assert_eq!(
            machine.insert_coin(100),
            Err(VendingError::BalanceOverflow {
                balance: u64::MAX - 50,
                denomination: 100,
            })
        );
        assert_eq!(machine, before);
        assert_eq!(machine.bank().count(100), Some(0));

        assert_eq!(machine.insert_coin(50).unwrap(), Money::from_units(u64::MAX));
    }

    #[test]
    fn test_huge_coin_bank_total_does_not_panic() {
        let mut machine = VendingMachine::with_denominations(&[u32::MAX, u32::MAX - 1]).unwrap();
        machine.add_coins_to_bank(u32::MAX, u32::MAX).unwrap();
        machine.add_coins_to_bank(u32::MAX - 1, u32::MAX).unwrap();

        assert_eq!(machine.bank().total(), Money::from_units(u64::MAX));
    }

    // -------------------------------------------------------------------------
    // purchase_product
    // -------------------------------------------------------------------------

    #[test]
    fn test_purchase_valid_input() {
        let mut machine = VendingMachine::new();
        coke_at(&mut machine, 0, 1);
        machine.insert_coin(20).unwrap();
        machine.insert_coin(100).unwrap();

        let outcome = machine.purchase_product(0).unwrap();
        assert_eq!(outcome.product_name(), Some("Coke"));
        assert_eq!(machine.balance(), Money::zero());
        // last unit sold clears the slot
        assert!(machine.slot(0).unwrap().is_empty());
    }

    #[test]
    fn test_purchase_decrements_quantity() {
        let mut machine = VendingMachine::new();
        coke_at(&mut machine, 4, 3);
        machine.insert_coin(200).unwrap();

        let outcome = machine.purchase_product(4).unwrap();
        assert!(outcome.is_dispensed());
        assert_eq!(machine.balance(), Money::from_units(80));
        assert_eq!(machine.slot(4).unwrap().product().unwrap().quantity(), 2);
    }

    #[test]
    fn test_purchase_invalid_location() {
        let mut machine = VendingMachine::new();
        assert!(matches!(
            machine.purchase_product(9),
            Err(VendingError::LocationOutOfRange { .. })
        ));
    }

    #[test]
    fn test_purchase_empty_location() {
        let mut machine = VendingMachine::new();
        assert_eq!(
            machine.purchase_product(1),
            Err(VendingError::SlotUnconfigured { location: 1 })
        );
    }

    #[test]
    fn test_purchase_insufficient_balance() {
        let mut machine = VendingMachine::new();
        coke_at(&mut machine, 0, 5);
        machine.insert_coin(100).unwrap();
        let before = machine.clone();

        let outcome = machine.purchase_product(0).unwrap();
        assert_eq!(
            outcome,
            PurchaseOutcome::InsufficientBalance {
                price: Money::from_units(120),
                balance: Money::from_units(100),
            }
        );
        assert_eq!(outcome.to_string(), "Insufficient balance");
        assert_eq!(machine, before);
    }

    #[test]
    fn test_purchase_out_of_stock() {
        let mut snapshot = VendingMachine::new().snapshot();
        snapshot.slots[3] = Slot::Occupied(Product::new(1, "Coke", Money::from_units(120), 0));
        let mut machine = VendingMachine::restore(snapshot).unwrap();
        machine.insert_coin(200).unwrap();
        let before = machine.clone();

        let outcome = machine.purchase_product(3).unwrap();
        assert_eq!(outcome, PurchaseOutcome::OutOfStock);
        assert_eq!(outcome.to_string(), "Product is out of stock");
        assert_eq!(machine, before);
    }

    // -------------------------------------------------------------------------
    // snapshot / restore
    // -------------------------------------------------------------------------

    #[test]
    fn test_snapshot_restore() {
        let mut machine = VendingMachine::new();
        coke_at(&mut machine, 5, 3);
        machine.add_coins_to_bank(50, 4).unwrap();
        machine.insert_coin(100).unwrap();

        let restored = VendingMachine::restore(machine.snapshot()).unwrap();
        assert_eq!(restored, machine);
    }

    #[test]
    fn test_restore_rejects_wrong_slot_count() {
        let mut snapshot = VendingMachine::new().snapshot();
        snapshot.slots.pop();

        assert!(matches!(
            VendingMachine::restore(snapshot),
            Err(VendingError::InvalidSnapshot(_))
        ));
    }

    #[test]
    fn test_restore_rejects_invalid_product_names() {
        let mut snapshot = VendingMachine::new().snapshot();
        snapshot.slots[1] = Slot::Occupied(Product::new(1, "   ", Money::from_units(120), 3));
        assert!(matches!(
            VendingMachine::restore(snapshot),
            Err(VendingError::Validation(ValidationError::Required { .. }))
        ));

        let mut snapshot = VendingMachine::new().snapshot();
        let long_name = "A".repeat(crate::MAX_PRODUCT_NAME_LEN + 1);
        snapshot.slots[1] = Slot::Occupied(Product::new(1, long_name, Money::from_units(120), 3));
        assert!(matches!(
            VendingMachine::restore(snapshot),
            Err(VendingError::Validation(ValidationError::TooLong { .. }))
        ));

        let mut snapshot = VendingMachine::new().snapshot();
        snapshot.slots[1] = Slot::Occupied(Product::new(1, " Coke ", Money::from_units(120), 3));
        assert!(matches!(
            VendingMachine::restore(snapshot),
            Err(VendingError::InvalidSnapshot(_))
        ));
    }

    #[test]
    fn test_restore_rejects_empty_bank() {
        let mut snapshot = VendingMachine::new().snapshot();
        snapshot.bank.clear();

        assert!(matches!(
            VendingMachine::restore(snapshot),
            Err(VendingError::Validation(_))
        ));
    }
}
