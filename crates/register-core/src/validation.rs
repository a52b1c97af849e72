//! # Validation Module
//!
//! Input checks run by the register before it touches any state.
//!
//! ## Validation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  scan_item(sku, price, qty)                                             │
//! │       │                                                                 │
//! │       ├── validate_unit_price(price) ──► InvalidPrice                   │
//! │       ├── validate_quantity(qty, policy) ──► InvalidQuantity            │
//! │       └── OK → append to scan log                                       │
//! │                                                                         │
//! │  apply_discount(percent)                                                │
//! │       │                                                                 │
//! │       ├── validate_discount_percent(percent) ──► InvalidDiscount        │
//! │       └── OK → replace discount                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use register_core::money::Money;
//! use register_core::validation::{validate_discount_percent, validate_unit_price};
//! use rust_decimal_macros::dec;
//!
//! assert!(validate_unit_price(Money::new(dec!(2.50))).is_ok());
//! assert!(validate_discount_percent(dec!(100)).is_err());
//! ```

use rust_decimal::Decimal;

use crate::config::QuantityPolicy;
use crate::error::{RegisterError, RegisterResult};
use crate::money::Money;

/// Validates a scanned unit price.
///
/// ## Rules
/// - Must be strictly positive; free items are not scanned
pub fn validate_unit_price(price: Money) -> RegisterResult<()> {
    if !price.is_positive() {
        return Err(RegisterError::InvalidPrice { price });
    }

    Ok(())
}

/// Validates a discount percent.
///
/// ## Rules
/// - Must be greater than 0 (clearing a discount is `remove_discount`)
/// - Must be less than 100
pub fn validate_discount_percent(percent: Decimal) -> RegisterResult<()> {
    if percent <= Decimal::ZERO || percent >= Decimal::ONE_HUNDRED {
        return Err(RegisterError::InvalidDiscount { percent });
    }

    Ok(())
}

/// Validates a scanned quantity against the register's policy.
///
/// ## Rules
/// - [`QuantityPolicy::Permissive`]: anything goes, including 0 and negatives
/// - [`QuantityPolicy::RequirePositive`]: must be at least 1
pub fn validate_quantity(qty: i64, policy: QuantityPolicy) -> RegisterResult<()> {
    match policy {
        QuantityPolicy::Permissive => Ok(()),
        QuantityPolicy::RequirePositive if qty < 1 => {
            Err(RegisterError::InvalidQuantity { qty })
        }
        QuantityPolicy::RequirePositive => Ok(()),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
