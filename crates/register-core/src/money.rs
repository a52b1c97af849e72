//! # Money Module
//!
//! Provides the `Money` type for handling monetary values exactly.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Integer cents fix addition but not percentages:                        │
//! │    33.33 - 10% = 29.997  → cents can only hold 29.99 or 30.00          │
//! │                                                                         │
//! │  OUR SOLUTION: base-10 Decimal                                          │
//! │    3333 × 10^-2 - 10% = 29997 × 10^-3                                   │
//! │    Every fractional digit produced by the arithmetic is kept           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use register_core::money::Money;
//! use rust_decimal_macros::dec;
//!
//! let price = Money::new(dec!(33.33));
//! let tripled = price * 3;                       // 99.99
//! let discounted = price.apply_percentage_discount(dec!(10));
//!
//! assert_eq!(tripled.amount(), dec!(99.99));
//! assert_eq!(discounted.amount(), dec!(29.997));
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// Fractional digits of the register's currency.
///
/// Only used for presentation ([`Money::round_to_cents`] and the minimum
/// digits printed by `Display`). Arithmetic never rounds to it.
pub const CURRENCY_SCALE: u32 = 2;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount held as an exact decimal.
///
/// ## Design Decisions
/// - **Decimal (signed)**: negative values are representable so that
///   rejected prices can be reported back, and zero/negative quantities
///   produce the line totals callers expect
/// - **Single field tuple struct**: zero-cost wrapper over `Decimal`
/// - **Transparent serde**: serializes as the decimal string, e.g. `"12.50"`
///
/// ## Where Money is Used
/// ```text
/// scan_item(unit_price) ──► LineItem.unit_price ──► LineItem.total_price()
///                                                         │
///                              Receipt.total_gross ◄──────┘
///                                     │
///                          apply_percentage_discount
///                                     │
///                                     ▼
///                              Receipt.total_due
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Wraps a decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use register_core::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let unit_price = Money::new(dec!(1.80));
    /// assert_eq!(unit_price.multiply_quantity(3).amount(), dec!(5.40));
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }

    /// Adds, returning `None` if the sum leaves `Decimal` range.
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Multiplies by a quantity, returning `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use register_core::money::Money;
    /// use register_core::Decimal;
    ///
    /// let unit_price = Money::new(Decimal::from(10_000_000_000i64));
    /// assert!(unit_price.checked_multiply_quantity(2).is_some());
    /// assert!(unit_price.checked_multiply_quantity(i64::MAX).is_none());
    /// ```
    pub fn checked_multiply_quantity(&self, qty: i64) -> Option<Money> {
        self.0.checked_mul(Decimal::from(qty)).map(Money)
    }

    /// Like [`Money::percentage`], returning `None` if `amount × pct` overflows.
    ///
    /// A `Some` for `pct = 100` means every smaller percent fits too.
    pub fn checked_percentage(&self, pct: Decimal) -> Option<Money> {
        self.0
            .checked_mul(pct)?
            .checked_div(Decimal::ONE_HUNDRED)
            .map(Money)
    }

    /// Returns `pct` percent of this amount, exactly.
    ///
    /// ## Example
    /// ```rust
    /// use register_core::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let subtotal = Money::new(dec!(24.10));
    /// assert_eq!(subtotal.percentage(dec!(15)).amount(), dec!(3.615));
    /// ```
    pub fn percentage(&self, pct: Decimal) -> Money {
        Money(self.0 * pct / Decimal::ONE_HUNDRED)
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// No rounding happens here: `33.33` at 10% off is `29.997`, not `30.00`.
    ///
    /// ## Example
    /// ```rust
    /// use register_core::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let subtotal = Money::new(dec!(150.00));
    /// let discounted = subtotal.apply_percentage_discount(dec!(20));
    /// assert_eq!(discounted.amount(), dec!(120.00));
    /// ```
    pub fn apply_percentage_discount(&self, pct: Decimal) -> Money {
        *self - self.percentage(pct)
    }

    /// Rounds to [`CURRENCY_SCALE`] places using Bankers Rounding.
    ///
    /// For presentation only; register totals are never rounded.
    ///
    /// ```text
    /// 29.997 → 30.00
    /// 20.485 → 20.48   (half to even)
    /// 20.475 → 20.48
    /// ```
    pub fn round_to_cents(&self) -> Money {
        Money(
            self.0
                .round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointNearestEven),
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows at least [`CURRENCY_SCALE`] fractional digits and never drops any.
///
/// ## Note
/// This is for logs and error messages. Receipts are formatted by the caller.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut shown = self.0;
        if shown.scale() < CURRENCY_SCALE {
            // Widening the scale is exact.
            shown.rescale(CURRENCY_SCALE);
        }
        write!(f, "{}", shown)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::new(dec!(10.99))), "10.99");
        assert_eq!(format!("{}", Money::new(dec!(5))), "5.00");
        assert_eq!(format!("{}", Money::new(dec!(-5.5))), "-5.50");
        assert_eq!(format!("{}", Money::zero()), "0.00");
        // Extra precision is never hidden.
        assert_eq!(format!("{}", Money::new(dec!(29.997))), "29.997");
    }

    #[test]
    fn test_currency_scale_at_crate_root() {
        assert_eq!(crate::CURRENCY_SCALE, 2);
        let shown = Money::new(dec!(7)).to_string();
        let fraction = shown.split('.').nth(1).unwrap_or_default();
        assert_eq!(fraction.len() as u32, crate::CURRENCY_SCALE);
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::new(dec!(10.00));
        let b = Money::new(dec!(5.00));

        assert_eq!((a + b).amount(), dec!(15.00));
        assert_eq!((a - b).amount(), dec!(5.00));
        assert_eq!((a * 3).amount(), dec!(30.00));

        let mut running = Money::zero();
        running += a;
        running -= b;
        assert_eq!(running, Money::new(dec!(5)));
    }

    #[test]
    fn test_equality_ignores_trailing_zeros() {
        assert_eq!(Money::new(dec!(2.5)), Money::new(dec!(2.50)));
        assert_eq!(Money::new(dec!(0)), Money::new(dec!(0.00)));
    }

    #[test]
    fn test_multiply_quantity_keeps_precision() {
        let price = Money::new(dec!(33.33));
        assert_eq!(price.multiply_quantity(3).amount(), dec!(99.99));
        assert_eq!(price.multiply_quantity(0), Money::zero());
        assert_eq!(price.multiply_quantity(-1).amount(), dec!(-33.33));
    }

    #[test]
    fn test_percentage_discount_is_exact() {
        let subtotal = Money::new(dec!(33.33));
        assert_eq!(
            subtotal.apply_percentage_discount(dec!(10)).amount(),
            dec!(29.997)
        );

        let subtotal = Money::new(dec!(24.10));
        assert_eq!(
            subtotal.apply_percentage_discount(dec!(15)).amount(),
            dec!(20.485)
        );
    }

    #[test]
    fn test_checked_arithmetic() {
        let max = Money::new(Decimal::MAX);
        assert_eq!(max.checked_add(Money::new(dec!(1))), None);
        assert_eq!(
            Money::new(dec!(7.50)).checked_add(Money::new(dec!(3.60))),
            Some(Money::new(dec!(11.10)))
        );

        let price = Money::new(Decimal::from(10_000_000_000i64));
        assert_eq!(price.checked_multiply_quantity(i64::MAX), None);
        assert_eq!(
            Money::new(dec!(2.50)).checked_multiply_quantity(3),
            Some(Money::new(dec!(7.50)))
        );

        assert_eq!(max.checked_percentage(Decimal::ONE_HUNDRED), None);
        assert_eq!(
            Money::new(dec!(33.33)).checked_percentage(dec!(10)),
            Some(Money::new(dec!(3.333)))
        );
    }

    #[test]
    fn test_fractional_percentage() {
        let subtotal = Money::new(dec!(80.00));
        assert_eq!(subtotal.percentage(dec!(12.5)).amount(), dec!(10));
    }

    #[test]
    fn test_round_to_cents_uses_bankers_rounding() {
        assert_eq!(Money::new(dec!(29.997)).round_to_cents().amount(), dec!(30.00));
        assert_eq!(Money::new(dec!(20.485)).round_to_cents().amount(), dec!(20.48));
        assert_eq!(Money::new(dec!(20.475)).round_to_cents().amount(), dec!(20.48));
    }

    #[test]
    fn test_sum() {
        let amounts = [
            Money::new(dec!(7.50)),
            Money::new(dec!(3.60)),
            Money::new(dec!(3.20)),
        ];
        let by_ref: Money = amounts.iter().sum();
        let by_value: Money = amounts.into_iter().sum();
        assert_eq!(by_ref.amount(), dec!(14.30));
        assert_eq!(by_ref, by_value);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::new(dec!(0.01));
        assert!(positive.is_positive());

        let negative = Money::new(dec!(-0.01));
        assert!(negative.is_negative());
    }
}
