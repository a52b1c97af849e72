//! # Error Types
//!
//! Domain-specific error types for register-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  RegisterError   - rejected register input                             │
//! │  ├── InvalidPrice      scan_item with unit price <= 0                  │
//! │  ├── InvalidDiscount   apply_discount outside (0, 100)                 │
//! │  ├── InvalidQuantity   qty < 1 under QuantityPolicy::RequirePositive   │
//! │  └── TotalOverflow     scan would push a total past Decimal range      │
//! │                                                                         │
//! │  ConfigError     - unusable configuration values                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every variant carries the rejected value
//! 3. A failed operation never mutates the register

use rust_decimal::Decimal;
use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Register Error
// =============================================================================

/// Input rejected by a [`CashRegister`](crate::CashRegister) operation.
///
/// The register state is unchanged whenever one of these is returned; the
/// caller decides whether to retry with corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    /// A scanned unit price was zero or negative.
    #[error("Invalid price: {price} (must be greater than zero)")]
    InvalidPrice { price: Money },

    /// A discount percent was outside the open interval (0, 100).
    ///
    /// ## When This Occurs
    /// ```text
    /// apply_discount(0)    → rejected (use remove_discount instead)
    /// apply_discount(100)  → rejected (nothing would be due)
    /// apply_discount(-10)  → rejected
    /// apply_discount(12.5) → accepted
    /// ```
    #[error("Invalid discount: {percent}% (must be greater than 0 and less than 100)")]
    InvalidDiscount { percent: Decimal },

    /// A scanned quantity was below one while the register enforces
    /// [`QuantityPolicy::RequirePositive`](crate::config::QuantityPolicy).
    #[error("Invalid quantity: {qty} (must be at least 1)")]
    InvalidQuantity { qty: i64 },

    /// Recording the scan would make a quantity or total unrepresentable.
    ///
    /// ## When This Occurs
    /// - The line's quantities sum past `i64::MAX` once consolidated
    /// - `unit_price × qty`, the subtotal, or the subtotal times a discount
    ///   percent no longer fits a `Decimal`
    #[error("Scan of {qty} x {sku} would overflow the register totals")]
    TotalOverflow { sku: String, qty: i64 },
}

// =============================================================================
// Config Error
// =============================================================================

/// Configuration could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A configuration key held a value we do not understand.
    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with RegisterError.
pub type RegisterResult<T> = Result<T, RegisterError>;

/// Convenience type alias for Results with ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Unit Tests
// =============================================================================
