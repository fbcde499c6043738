//! Multipliers

use std::{fmt, ops::Deref};

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use serde::Serialize;

/// A price multiplier applied to a daily rate.
///
/// Values above 1 are surcharges (peak seasons), values below 1 are discounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Multiplier(Decimal);

impl Multiplier {
    /// Multiplier that leaves a price unchanged.
    pub const IDENTITY: Self = Self(Decimal::ONE);

    /// Creates a new multiplier
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Discount implied by this multiplier as a fraction of the price.
    ///
    /// A multiplier of 0.9 is a 10% discount; surcharges give a negative percentage.
    pub fn discount(&self) -> Percentage {
        Percentage::from(Decimal::ONE - self.0)
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Deref for Multiplier {
    type Target = Decimal;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Decimal> for Multiplier {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "×{}", self.0.normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_identity() {
        assert_eq!(Multiplier::default(), Multiplier::IDENTITY);
        assert_eq!(*Multiplier::IDENTITY, Decimal::ONE);
    }

    #[test]
    fn multiplier_derefs_to_decimal() {
        let multiplier = Multiplier::new(Decimal::new(85, 2));

        assert_eq!(*multiplier, Decimal::new(85, 2));
    }

    #[test]
    fn discount_is_complement_of_multiplier() {
        assert_eq!(
            Multiplier::new(Decimal::new(9, 1)).discount() * Decimal::ONE,
            Decimal::new(1, 1)
        );
        assert_eq!(
            Multiplier::new(Decimal::new(125, 2)).discount() * Decimal::ONE,
            Decimal::new(-25, 2)
        );
    }

    #[test]
    fn display_normalizes_trailing_zeros() {
        assert_eq!(Multiplier::new(Decimal::new(1200, 3)).to_string(), "×1.2");
    }
}
