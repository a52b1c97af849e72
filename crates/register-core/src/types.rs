//! # Domain Types
//!
//! The line items a register records and the receipts it produces.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌──────────────────────┐                    │
//! │  │    LineItem     │  0..n  │       Receipt        │                    │
//! │  │  ─────────────  │◄───────│  ──────────────────  │                    │
//! │  │  sku            │        │  lines (by sku)      │                    │
//! │  │  qty            │        │  total_gross         │                    │
//! │  │  unit_price     │        │  discount_pct        │                    │
//! │  │  total_price()  │        │  total_due           │                    │
//! │  └─────────────────┘        └──────────────────────┘                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Line Item
// =============================================================================

/// One scanned batch of a sku at a unit price.
///
/// On a [`Receipt`] a line item is the consolidation of every scan sharing
/// the same sku and unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Stock Keeping Unit.
    pub sku: String,

    /// Number of units. Not validated under the default quantity policy.
    pub qty: i64,

    /// Price of a single unit, always > 0 for items the register accepted.
    #[ts(as = "String")]
    pub unit_price: Money,
}

impl LineItem {
    /// Creates a line item.
    pub fn new(sku: impl Into<String>, qty: i64, unit_price: Money) -> Self {
        LineItem {
            sku: sku.into(),
            qty,
            unit_price,
        }
    }

    /// Line total (unit price × quantity), computed on demand.
    #[inline]
    pub fn total_price(&self) -> Money {
        self.unit_price * self.qty
    }

    /// True when `other` was scanned at the same sku and unit price.
    pub(crate) fn same_group(&self, other: &LineItem) -> bool {
        self.sku == other.sku && self.unit_price == other.unit_price
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// Immutable snapshot of a register.
///
/// ## Totals
/// ```text
/// total_gross = Σ line.total_price()
/// total_due   = total_gross − total_gross × discount_pct / 100
/// ```
/// Both are exact; `discount_pct` of zero means no discount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Consolidated lines, sorted by sku.
    pub lines: Vec<LineItem>,

    /// Subtotal before discount.
    #[ts(as = "String")]
    pub total_gross: Money,

    /// Discount percent in effect when the receipt was taken.
    #[ts(as = "String")]
    pub discount_pct: Decimal,

    /// Amount owed after discount.
    #[ts(as = "String")]
    pub total_due: Money,
}

impl Receipt {
    /// Builds a receipt from already consolidated lines, deriving both totals.
    ///
    /// A `discount_pct` of zero leaves `total_due` equal to `total_gross`.
    pub fn from_lines(lines: Vec<LineItem>, discount_pct: Decimal) -> Self {
        let total_gross: Money = lines.iter().map(LineItem::total_price).sum();
        let total_due = if discount_pct > Decimal::ZERO {
            total_gross.apply_percentage_discount(discount_pct)
        } else {
            total_gross
        };

        Receipt {
            lines,
            total_gross,
            discount_pct,
            total_due,
        }
    }

    /// Number of receipt lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.qty).sum()
    }

    /// Amount taken off by the discount (`total_gross − total_due`).
    pub fn discount_amount(&self) -> Money {
        self.total_gross - self.total_due
    }

    pub fn has_discount(&self) -> bool {
        !self.discount_pct.is_zero()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn money(amount: Decimal) -> Money {
        Money::new(amount)
    }

    #[test]
    fn test_line_item_total_price() {
        let item = LineItem::new("BREAD", 2, money(dec!(1.80)));
        assert_eq!(item.sku, "BREAD");
        assert_eq!(item.total_price().amount(), dec!(3.60));

        let item = LineItem::new("ITEM", 3, money(dec!(33.33)));
        assert_eq!(item.total_price().amount(), dec!(99.99));
    }

    #[test]
    fn test_line_item_same_group() {
        let a = LineItem::new("APPLE", 3, money(dec!(2.50)));
        let b = LineItem::new("APPLE", 1, money(dec!(2.5)));
        let c = LineItem::new("APPLE", 1, money(dec!(3.00)));
        let d = LineItem::new("PEAR", 3, money(dec!(2.50)));

        assert!(a.same_group(&b));
        assert!(!a.same_group(&c));
        assert!(!a.same_group(&d));
    }

    #[test]
    fn test_receipt_from_lines() {
        let lines = vec![
            LineItem::new("APPLE", 3, money(dec!(2.50))),
            LineItem::new("BREAD", 2, money(dec!(1.80))),
        ];

        let receipt = Receipt::from_lines(lines, dec!(10));

        assert_eq!(receipt.line_count(), 2);
        assert_eq!(receipt.total_quantity(), 5);
        assert_eq!(receipt.total_gross.amount(), dec!(11.10));
        assert_eq!(receipt.total_due.amount(), dec!(9.99));
        assert_eq!(receipt.discount_amount().amount(), dec!(1.11));
        assert!(receipt.has_discount());
    }

    #[test]
    fn test_receipt_empty_lines() {
        let receipt = Receipt::from_lines(Vec::new(), Decimal::ZERO);

        assert!(receipt.is_empty());
        assert_eq!(receipt.total_gross.amount(), dec!(0.00));
        assert_eq!(receipt.total_due.amount(), dec!(0.00));
        assert!(!receipt.has_discount());
        assert!(receipt.discount_amount().is_zero());
    }

    #[test]
    fn test_receipt_serializes_amounts_as_strings() {
        let receipt = Receipt::from_lines(
            vec![LineItem::new("APPLE", 5, money(dec!(2.50)))],
            Decimal::ZERO,
        );

        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["lines"][0]["sku"], "APPLE");
        assert_eq!(json["lines"][0]["unitPrice"], "2.50");
        assert_eq!(json["totalGross"], "12.50");
        assert_eq!(json["totalDue"], "12.50");

        let back: Receipt = serde_json::from_value(json).unwrap();
        assert_eq!(back, receipt);
    }
}
