//! # register-core: Pure Cash Register Logic
//!
//! Scan items, apply one percentage discount, compute totals and build a
//! consolidated receipt. Everything is synchronous, in memory, and exact.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Embedding Application                               │
//! │        (till UI, kiosk, test harness: owns formatting & storage)       │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ register-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ register  │  │   types   │  │   money   │  │ validation│  │   │
//! │  │   │ Cash-     │  │ LineItem  │  │   Money   │  │  price    │  │   │
//! │  │   │ Register  │  │ Receipt   │  │ (Decimal) │  │  discount │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • NO FLOATS                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`register`] - The `CashRegister` session and receipt consolidation
//! - [`types`] - `LineItem` and `Receipt`
//! - [`money`] - Money type over exact decimals
//! - [`error`] - Domain error types
//! - [`validation`] - Input checks run before any mutation
//! - [`config`] - Register configuration
//! - [`shared`] - Mutex-guarded register for shared access
//!
//! ## Example Usage
//!
//! ```rust
//! use register_core::CashRegister;
//! use rust_decimal_macros::dec;
//!
//! let mut register = CashRegister::new();
//! register.scan_item("ITEM1", dec!(100.00), 1)?;
//! register.scan_item("ITEM2", dec!(50.00), 1)?;
//! register.apply_discount(dec!(20))?;
//!
//! let receipt = register.to_receipt();
//! assert_eq!(receipt.total_gross.amount(), dec!(150.00));
//! assert_eq!(receipt.total_due.amount(), dec!(120.00));
//! # Ok::<(), register_core::RegisterError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod money;
pub mod register;
pub mod shared;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::{QuantityPolicy, RegisterConfig};
pub use error::{ConfigError, RegisterError, RegisterResult};
pub use money::{Money, CURRENCY_SCALE};
pub use register::CashRegister;
pub use shared::SharedRegister;
pub use types::{LineItem, Receipt};

/// Re-exported so callers can build prices without naming the crate.
pub use rust_decimal::Decimal;
