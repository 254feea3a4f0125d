//! Money type for representing prices.
//!
//! Amounts are integers in the smallest unit the menu is priced in. The
//! store trades in a single currency, so there is no currency tag; the
//! symbol only matters when formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

/// Default currency symbol (Philippine peso).
pub const DEFAULT_SYMBOL: &str = "\u{20b1}";

/// A monetary amount in the smallest currency unit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a new Money value.
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Zero.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The raw amount.
    pub const fn amount(&self) -> i64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiply by a quantity, saturating at the numeric bounds.
    pub fn times(&self, quantity: i64) -> Money {
        Money(self.0.saturating_mul(quantity))
    }

    /// Format with the default symbol (e.g., "₱95").
    pub fn display(&self) -> String {
        self.display_with(DEFAULT_SYMBOL)
    }

    /// Format with a custom symbol.
    pub fn display_with(&self, symbol: &str) -> String {
        if self.0 < 0 {
            format!("-{}{}", symbol, self.0.unsigned_abs())
        } else {
            format!("{}{}", symbol, self.0)
        }
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        *self = *self + other;
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, quantity: i64) -> Money {
        self.times(quantity)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

impl From<i64> for Money {
    fn from(amount: i64) -> Self {
        Money(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
