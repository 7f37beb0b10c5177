//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Units                                            │
//! │    Every price and balance in the simulation is a whole number of       │
//! │    currency units, so u64 arithmetic is exact. There are no             │
//! │    fractional amounts anywhere in the domain.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use marketsim_core::Money;
//!
//! // Create from whole units
//! let price = Money::from_units(12);
//!
//! // Arithmetic operations
//! let doubled = price * 2;                       // $24
//! let total = price + Money::from_units(5);      // $17
//! assert_eq!(total.units(), 17);
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

use serde::{Deserialize, Serialize};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole currency units.
///
/// ## Design Decisions
/// - **u64 (unsigned)**: Balances and prices are non-negative by
///   construction; the type makes a negative amount unrepresentable
/// - **Single field tuple struct**: Zero-cost abstraction over u64
/// - **Derives**: Full ordering for affordability comparisons, serde
///   support for receipt DTOs
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Money(u64);

impl Money {
    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use marketsim_core::Money;
    ///
    /// let price = Money::from_units(12);
    /// assert_eq!(price.units(), 12);
    /// ```
    #[inline]
    pub const fn from_units(units: u64) -> Self {
        Money(units)
    }

    /// Returns the value in whole currency units.
    #[inline]
    pub const fn units(&self) -> u64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies a unit price by a line quantity.
    ///
    /// ## Example
    /// ```rust
    /// use marketsim_core::Money;
    ///
    /// let unit_price = Money::from_units(7);
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.units(), 21);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * qty as u64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Multiplication by quantity (for line totals).
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

/// Summation over an iterator of line totals.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        let money = Money::from_units(17);
        assert_eq!(money.units(), 17);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_units(12)), "$12");
        assert_eq!(format!("{}", Money::from_units(0)), "$0");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_units(10);
        let b = Money::from_units(5);

        assert_eq!((a + b).units(), 15);
        let result: Money = a * 3;
        assert_eq!(result.units(), 30);

        let mut acc = Money::zero();
        acc += b;
        assert_eq!(acc.units(), 5);
    }

    #[test]
    fn test_sum() {
        let total: Money = [3, 4, 5].into_iter().map(Money::from_units).sum();
        assert_eq!(total.units(), 12);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert_eq!(zero, Money::default());

        let positive = Money::from_units(1);
        assert!(!positive.is_zero());
        assert!(positive > zero);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_units(9);
        let line_total = unit_price.multiply_quantity(4);
        assert_eq!(line_total.units(), 36);
    }
}
