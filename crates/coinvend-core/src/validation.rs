//! # Validation Module
//!
//! Input checks run before the machine mutates any state.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Kiosk UI / hardware driver                                   │
//! │  └── Only offers valid buttons and accepted coins                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Configuration (coinvend-config)                              │
//! │  └── Rejects bad denomination lists and planograms at start-up         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE                                                  │
//! │  └── Guards every VendingMachine mutator                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use coinvend_core::validation::{validate_location, validate_denominations};
//!
//! assert!(validate_location(8).is_ok());
//! assert!(validate_location(9).is_err());
//! assert!(validate_denominations(&[1, 2, 5]).is_ok());
//! ```

use std::collections::BTreeSet;

use crate::error::{CoreResult, ValidationError, VendingError};
use crate::{MAX_PRODUCT_NAME_LEN, SLOT_COUNT};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Slot Validators
// =============================================================================

/// Validates a dispensing location.
///
/// Out-of-range indices are rejected here rather than left to a slice
/// bounds-check panic, so the caller always gets `LocationOutOfRange`.
pub fn validate_location(location: usize) -> CoreResult<()> {
    if location >= SLOT_COUNT {
        return Err(VendingError::LocationOutOfRange {
            location,
            max: SLOT_COUNT - 1,
        });
    }

    Ok(())
}

/// Validates a stocking quantity (must be non-zero).
pub fn validate_quantity(location: usize, quantity: u32) -> CoreResult<()> {
    if quantity == 0 {
        return Err(VendingError::InvalidQuantity { location });
    }

    Ok(())
}

/// Validates a product display name.
///
/// ## Rules
/// - Must not be blank
/// - At most MAX_PRODUCT_NAME_LEN characters (fits the selection display)
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Bank Validators
// =============================================================================

/// Validates the denomination list a bank is built from.
///
/// ## Rules
/// - At least one denomination
/// - Every denomination positive
/// - No duplicates
pub fn validate_denominations(denominations: &[u32]) -> ValidationResult<()> {
    if denominations.is_empty() {
        return Err(ValidationError::Required {
            field: "denominations".to_string(),
        });
    }

    let mut seen = BTreeSet::new();
    for &denomination in denominations {
        if denomination == 0 {
            return Err(ValidationError::MustBePositive {
                field: "denomination".to_string(),
            });
        }
        if !seen.insert(denomination) {
            return Err(ValidationError::Duplicate {
                field: "denomination".to_string(),
                value: denomination.to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
