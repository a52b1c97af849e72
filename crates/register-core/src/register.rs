//! # Cash Register
//!
//! The register session: a scan log plus a single discount.
//!
//! ## State
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Register State Operations                          │
//! │                                                                         │
//! │  Operation              State Change                                    │
//! │  ─────────              ────────────                                    │
//! │                                                                         │
//! │  scan_item() ─────────► items.push(line)        (validated first)      │
//! │  reset() ─────────────► items.clear()           (discount kept)        │
//! │                                                                         │
//! │  apply_discount() ────► discount = Some(pct)    (validated first)      │
//! │  remove_discount() ───► discount = None                                 │
//! │                                                                         │
//! │  total() ─────────────► (read only)                                     │
//! │  to_receipt() ────────► (read only, consolidates a copy)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Scans are kept exactly as recorded. Lines sharing a sku and unit price
//! are merged only when a receipt is built.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::RegisterConfig;
use crate::error::{RegisterError, RegisterResult};
use crate::money::Money;
use crate::types::{LineItem, Receipt};
use crate::validation::{validate_discount_percent, validate_quantity, validate_unit_price};

/// A point-of-sale register session.
///
/// ## Invariants
/// - Every recorded line has a unit price > 0
/// - A set discount is strictly between 0 and 100
/// - `reset()` clears the scan log but keeps the discount
///
/// ## Example
/// ```rust
/// use register_core::CashRegister;
/// use rust_decimal_macros::dec;
///
/// let mut register = CashRegister::new();
/// register.scan_item("APPLE", dec!(2.50), 3)?;
/// register.scan_item("BREAD", dec!(1.80), 2)?;
/// register.scan_item("APPLE", dec!(2.50), 2)?;
///
/// let receipt = register.to_receipt();
/// assert_eq!(receipt.lines.len(), 2);
/// assert_eq!(receipt.lines[0].qty, 5);
/// assert_eq!(receipt.total_due.amount(), dec!(16.10));
/// # Ok::<(), register_core::RegisterError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CashRegister {
    items: Vec<LineItem>,
    discount: Option<Decimal>,
    config: RegisterConfig,
}

impl CashRegister {
    /// Creates an empty register with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty register with the given configuration.
    pub fn with_config(config: RegisterConfig) -> Self {
        CashRegister {
            items: Vec::new(),
            discount: None,
            config,
        }
    }

    // -------------------------------------------------------------------------
    // Scanning
    // -------------------------------------------------------------------------

    /// Records `qty` units of `sku` at `unit_price`.
    ///
    /// ## Errors
    /// - `InvalidPrice` if `unit_price <= 0`
    /// - `InvalidQuantity` if `qty < 1` and the register requires positive
    ///   quantities
    /// - `TotalOverflow` if the scan would take a consolidated quantity or
    ///   any total out of range, so `total()` and `to_receipt()` never
    ///   overflow
    ///
    /// Nothing is recorded when an error is returned.
    pub fn scan_item(
        &mut self,
        sku: impl Into<String>,
        unit_price: impl Into<Money>,
        qty: i64,
    ) -> RegisterResult<()> {
        let sku = sku.into();
        let unit_price = unit_price.into();

        if let Err(err) = validate_unit_price(unit_price)
            .and_then(|()| validate_quantity(qty, self.config.quantity_policy))
        {
            warn!(sku = %sku, unit_price = %unit_price, qty, error = %err, "Scan rejected");
            return Err(err);
        }

        let item = LineItem::new(sku, qty, unit_price);
        if !totals_fit(self.items.iter().chain(std::iter::once(&item))) {
            let err = RegisterError::TotalOverflow {
                sku: item.sku,
                qty,
            };
            warn!(unit_price = %unit_price, error = %err, "Scan rejected");
            return Err(err);
        }

        debug!(sku = %item.sku, unit_price = %unit_price, qty, "Scanning item");
        self.items.push(item);
        Ok(())
    }

    /// Records a single unit of `sku`.
    pub fn scan_one(
        &mut self,
        sku: impl Into<String>,
        unit_price: impl Into<Money>,
    ) -> RegisterResult<()> {
        self.scan_item(sku, unit_price, 1)
    }

    /// Clears the scan log. The discount stays in effect.
    pub fn reset(&mut self) {
        debug!(cleared = self.items.len(), "Resetting register");
        self.items.clear();
    }

    // -------------------------------------------------------------------------
    // Discount
    // -------------------------------------------------------------------------

    /// Sets the discount, replacing any previous one.
    ///
    /// ## Errors
    /// `InvalidDiscount` unless `0 < percent < 100`; the current discount is
    /// kept in that case.
    pub fn apply_discount(&mut self, percent: Decimal) -> RegisterResult<()> {
        if let Err(err) = validate_discount_percent(percent) {
            warn!(percent = %percent, "Discount rejected");
            return Err(err);
        }

        debug!(percent = %percent, previous = ?self.discount, "Applying discount");
        self.discount = Some(percent);
        Ok(())
    }

    /// Clears the discount. Calling it with no discount set is a no-op.
    pub fn remove_discount(&mut self) {
        if let Some(previous) = self.discount.take() {
            debug!(percent = %previous, "Removing discount");
        }
    }

    /// The discount in effect, if any.
    pub fn discount(&self) -> Option<Decimal> {
        self.discount
    }

    // -------------------------------------------------------------------------
    // Totals
    // -------------------------------------------------------------------------

    /// Sum of every recorded line, before discount.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::total_price).sum()
    }

    /// Amount due: the subtotal less the discount, exact to the last digit.
    ///
    /// ```text
    /// scan 33.33 × 1, discount 10%  →  33.33 − 3.333 = 29.997
    /// ```
    pub fn total(&self) -> Money {
        let subtotal = self.subtotal();
        match self.discount {
            Some(pct) => subtotal.apply_percentage_discount(pct),
            None => subtotal,
        }
    }

    // -------------------------------------------------------------------------
    // Receipt
    // -------------------------------------------------------------------------

    /// Builds a consolidated receipt without changing the register.
    ///
    /// ## Consolidation
    /// ```text
    /// scans:   APPLE 2.50 ×3, BREAD 1.80 ×2, APPLE 2.50 ×2, APPLE 3.00 ×1
    ///            │
    ///            ▼  group by (sku, unit_price), first-seen order
    /// groups:  APPLE 2.50 ×5, BREAD 1.80 ×2, APPLE 3.00 ×1
    ///            │
    ///            ▼  stable sort by sku
    /// lines:   APPLE 2.50 ×5, APPLE 3.00 ×1, BREAD 1.80 ×2
    /// ```
    pub fn to_receipt(&self) -> Receipt {
        let lines = consolidate(&self.items);
        let discount_pct = self.discount.unwrap_or(Decimal::ZERO);
        let receipt = Receipt::from_lines(lines, discount_pct);

        debug!(
            scans = self.items.len(),
            lines = receipt.line_count(),
            total_gross = %receipt.total_gross,
            total_due = %receipt.total_due,
            "Built receipt"
        );
        receipt
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Recorded scans, in scan order and unconsolidated.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of recorded scans.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn config(&self) -> &RegisterConfig {
        &self.config
    }
}

/// Merges scans sharing (sku, unit_price) and orders the result by sku.
///
/// Groups keep first-seen order, and the sort is stable, so lines with the
/// same sku but different prices stay in the order they were first scanned.
fn consolidate(items: &[LineItem]) -> Vec<LineItem> {
    let mut lines: Vec<LineItem> = Vec::new();

    for item in items {
        match lines.iter_mut().find(|line| line.same_group(item)) {
            // Group sums were range-checked by scan_item.
            Some(line) => line.qty = line.qty.saturating_add(item.qty),
            None => lines.push(item.clone()),
        }
    }

    lines.sort_by(|a, b| a.sku.cmp(&b.sku));
    lines
}

/// [`consolidate`] with overflow detection on the summed quantities.
fn checked_consolidate<'a>(
    items: impl IntoIterator<Item = &'a LineItem>,
) -> Option<Vec<LineItem>> {
    let mut lines: Vec<LineItem> = Vec::new();

    for item in items {
        match lines.iter_mut().find(|line| line.same_group(item)) {
            Some(line) => line.qty = line.qty.checked_add(item.qty)?,
            None => lines.push(item.clone()),
        }
    }

    lines.sort_by(|a, b| a.sku.cmp(&b.sku));
    Some(lines)
}

/// Sums line totals in order, `None` if any step overflows.
fn checked_sum<'a>(lines: impl IntoIterator<Item = &'a LineItem>) -> Option<Money> {
    lines.into_iter().try_fold(Money::zero(), |sum, line| {
        sum.checked_add(line.unit_price.checked_multiply_quantity(line.qty)?)
    })
}

/// True when every total the register can compute from `items` is in range.
///
/// ```text
/// raw subtotal   Σ unit_price × qty in scan order        (total)
/// gross          Σ over consolidated lines, sku order    (to_receipt)
/// discount part  subtotal × pct, for any pct < 100
/// ```
/// The discounted total is smaller in magnitude than twice the subtotal, so
/// it fits whenever `subtotal × 100` does.
fn totals_fit<'a>(items: impl Iterator<Item = &'a LineItem> + Clone) -> bool {
    let Some(subtotal) = checked_sum(items.clone()) else {
        return false;
    };
    let Some(gross) = checked_consolidate(items).and_then(|lines| checked_sum(&lines)) else {
        return false;
    };

    [subtotal, gross]
        .iter()
        .all(|total| total.checked_percentage(Decimal::ONE_HUNDRED).is_some())
}

// =============================================================================
// Unit Tests
// =============================================================================
