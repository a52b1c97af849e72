//! # Shared Register
//!
//! A [`CashRegister`] behind one mutex, for callers that reach the same
//! register from several threads.
//!
//! ## Thread Safety
//! Every operation takes the lock once, for its whole duration, so a scan
//! can never interleave with a receipt being built:
//! ```text
//! thread A: scan_item ──[lock]── push ──[unlock]
//! thread B:                                 to_receipt ──[lock]── consolidate ──[unlock]
//! ```
//!
//! Callers that need several operations to be atomic together use
//! [`SharedRegister::with_register_mut`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rust_decimal::Decimal;

use crate::error::RegisterResult;
use crate::money::Money;
use crate::register::CashRegister;
use crate::types::Receipt;

/// Cloneable handle to a mutex-guarded register.
///
/// Clones share the same register.
#[derive(Debug, Clone, Default)]
pub struct SharedRegister {
    register: Arc<Mutex<CashRegister>>,
}

impl SharedRegister {
    /// Wraps an existing register.
    pub fn new(register: CashRegister) -> Self {
        SharedRegister {
            register: Arc::new(Mutex::new(register)),
        }
    }

    // Register operations validate before mutating, so the state behind a
    // poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, CashRegister> {
        self.register.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Executes a function with read access to the register.
    ///
    /// ## Usage
    /// ```rust
    /// use register_core::SharedRegister;
    ///
    /// let shared = SharedRegister::default();
    /// let count = shared.with_register(|register| register.item_count());
    /// assert_eq!(count, 0);
    /// ```
    pub fn with_register<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CashRegister) -> R,
    {
        let register = self.lock();
        f(&register)
    }

    /// Executes a function with write access to the register.
    ///
    /// ## Usage
    /// ```rust
    /// use register_core::SharedRegister;
    /// use rust_decimal_macros::dec;
    ///
    /// let shared = SharedRegister::default();
    /// let receipt = shared.with_register_mut(|register| {
    ///     register.reset();
    ///     register.scan_item("APPLE", dec!(2.50), 2)?;
    ///     Ok::<_, register_core::RegisterError>(register.to_receipt())
    /// })?;
    /// assert_eq!(receipt.lines.len(), 1);
    /// # Ok::<(), register_core::RegisterError>(())
    /// ```
    pub fn with_register_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CashRegister) -> R,
    {
        let mut register = self.lock();
        f(&mut register)
    }

    /// Scans under the lock; see [`CashRegister::scan_item`].
    pub fn scan_item(
        &self,
        sku: impl Into<String>,
        unit_price: impl Into<Money>,
        qty: i64,
    ) -> RegisterResult<()> {
        self.with_register_mut(|register| register.scan_item(sku, unit_price, qty))
    }

    /// Sets the discount under the lock; see [`CashRegister::apply_discount`].
    pub fn apply_discount(&self, percent: Decimal) -> RegisterResult<()> {
        self.with_register_mut(|register| register.apply_discount(percent))
    }

    /// Clears the discount under the lock.
    pub fn remove_discount(&self) {
        self.with_register_mut(CashRegister::remove_discount)
    }

    /// Clears the scan log under the lock. The discount stays.
    pub fn reset(&self) {
        self.with_register_mut(CashRegister::reset)
    }

    /// Amount due, read under the lock.
    pub fn total(&self) -> Money {
        self.with_register(CashRegister::total)
    }

    /// Consolidated receipt, built under the lock so no scan interleaves.
    pub fn to_receipt(&self) -> Receipt {
        self.with_register(CashRegister::to_receipt)
    }
}

impl From<CashRegister> for SharedRegister {
    fn from(register: CashRegister) -> Self {
        SharedRegister::new(register)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
