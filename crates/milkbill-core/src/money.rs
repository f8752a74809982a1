//! # Money Module
//!
//! Provides the `Rupees` type for the monetary values on a milk receipt.
//!
//! ## Why Not Integer Paise?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  QUANTITIES ARE REAL NUMBERS                                            │
//! │                                                                         │
//! │  Milk is sold by the litre: 12.5 L × Rs. 65.00 = Rs. 812.50             │
//! │                                                                         │
//! │  Line totals, subtotal and tax keep full precision through the         │
//! │  calculation. Rounding to two decimals happens ONLY at display time    │
//! │  (see the Display impl), so the preview and the export always agree.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use milkbill_core::money::Rupees;
//! use milkbill_core::types::TaxRate;
//!
//! let line = Rupees::new(65.0) * 10.0;
//! assert_eq!(line.to_string(), "Rs. 650.00");
//!
//! let tax = line.calculate_tax(TaxRate::from_percentage(5.0));
//! assert_eq!(tax.value(), 32.5);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

use crate::types::TaxRate;

/// Display prefix for every amount on the receipt.
pub const CURRENCY_PREFIX: &str = "Rs.";

// =============================================================================
// Rupees Type
// =============================================================================

/// A non-negative rupee amount.
///
/// ## Design Decisions
/// - **f64**: quantities are fractional litres, so amounts are too
/// - **Newtype**: serializes as a bare JSON number
/// - **Clamped input**: the constructor maps negative, NaN and infinite input
///   to zero
/// - **Unclamped arithmetic**: products and sums of non-negative amounts are
///   kept as computed, even when they overflow to infinity
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rupees(f64);

impl Rupees {
    /// Creates an amount, clamping anything that is not a finite positive
    /// number to zero.
    ///
    /// ## Example
    /// ```rust
    /// use milkbill_core::money::Rupees;
    ///
    /// assert_eq!(Rupees::new(12.5).value(), 12.5);
    /// assert_eq!(Rupees::new(-3.0).value(), 0.0);
    /// assert_eq!(Rupees::new(f64::NAN).value(), 0.0);
    /// ```
    #[inline]
    pub fn new(value: f64) -> Self {
        if value.is_finite() && value > 0.0 {
            Rupees(value)
        } else {
            Rupees(0.0)
        }
    }

    /// Zero rupees.
    #[inline]
    pub const fn zero() -> Self {
        Rupees(0.0)
    }

    /// Returns the raw value.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Checks if the amount is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Calculates tax on this amount: `amount × rate / 100`.
    ///
    /// No rounding is applied; the result is rounded only when displayed.
    ///
    /// ## Example
    /// ```rust
    /// use milkbill_core::money::Rupees;
    /// use milkbill_core::types::TaxRate;
    ///
    /// let subtotal = Rupees::new(930.0);
    /// let tax = subtotal.calculate_tax(TaxRate::from_percentage(5.0));
    /// assert_eq!(tax.value(), 46.5);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Rupees {
        Rupees::non_negative(self.0 * rate.percentage() / 100.0)
    }

    /// Keeps a computed value as is unless it is NaN or not positive.
    /// Infinity survives.
    #[inline]
    fn non_negative(value: f64) -> Self {
        if value > 0.0 {
            Rupees(value)
        } else {
            Rupees(0.0)
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display uses the receipt format: `Rs. 1234.50`.
impl fmt::Display for Rupees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}", CURRENCY_PREFIX, self.0)
    }
}

impl Default for Rupees {
    fn default() -> Self {
        Rupees::zero()
    }
}

impl Add for Rupees {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Rupees(self.0 + other.0)
    }
}

impl AddAssign for Rupees {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Multiplication by a quantity (litres).
impl Mul<f64> for Rupees {
    type Output = Self;

    #[inline]
    fn mul(self, qty: f64) -> Self {
        Rupees::non_negative(self.0 * qty)
    }
}

impl Sum for Rupees {
    fn sum<I: Iterator<Item = Rupees>>(iter: I) -> Self {
        iter.fold(Rupees::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Rupees> for Rupees {
    fn sum<I: Iterator<Item = &'a Rupees>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Rupees::new(650.0).to_string(), "Rs. 650.00");
        assert_eq!(Rupees::new(46.5).to_string(), "Rs. 46.50");
        assert_eq!(Rupees::zero().to_string(), "Rs. 0.00");
        assert_eq!(Rupees::new(0.124).to_string(), "Rs. 0.12");
    }

    #[test]
    fn test_negative_zero_is_normalized() {
        assert_eq!(Rupees::new(-0.0).to_string(), "Rs. 0.00");
        assert!(Rupees::new(-0.0).is_zero());
    }

    #[test]
    fn test_sum() {
        let items = [Rupees::new(650.0), Rupees::new(280.0)];
        let total: Rupees = items.iter().sum();
        assert_eq!(total.value(), 930.0);

        let empty: Rupees = Vec::<Rupees>::new().into_iter().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_multiply_quantity() {
        assert_eq!((Rupees::new(65.0) * 12.5).value(), 812.5);
        assert_eq!((Rupees::new(65.0) * -1.0).value(), 0.0);
    }

    #[test]
    fn test_overflowing_product_is_not_zeroed() {
        let line = Rupees::new(1e200) * 1e200;
        assert!(line.value().is_infinite());
        assert!(!line.is_zero());
        assert_eq!(line.to_string(), "Rs. inf");

        let tax = line.calculate_tax(TaxRate::from_percentage(5.0));
        assert!(tax.value().is_infinite());
    }

    #[test]
    fn test_zero_tax_rate() {
        let tax = Rupees::new(930.0).calculate_tax(TaxRate::zero());
        assert!(tax.is_zero());
    }

    #[test]
    fn test_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Rupees::new(976.5)).unwrap(), "976.5");
    }
}
