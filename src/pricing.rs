//! Pricing

use rust_decimal::Decimal;
use thiserror::Error;

use crate::multiplier::Multiplier;

/// Errors that can occur while composing a price.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// Decimal arithmetic overflowed.
    #[error("price calculation overflowed")]
    Overflow,
}

/// Daily and total price for a rental.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposedPrice {
    /// Price per day with both multipliers applied
    pub daily_price: Decimal,

    /// `daily_price` times the number of days
    pub total_price: Decimal,
}

/// Applies the season and duration multipliers to a base daily price.
///
/// The duration multiplier discounts the daily rate itself, so the daily
/// price already reflects the length-of-stay discount.
///
/// # Errors
///
/// - [`PricingError::Overflow`]: the result does not fit in a [`Decimal`].
pub fn compose(
    base_price: Decimal,
    season_multiplier: Multiplier,
    days: i64,
    duration_multiplier: Multiplier,
) -> Result<ComposedPrice, PricingError> {
    let daily_price = base_price
        .checked_mul(*season_multiplier)
        .and_then(|price| price.checked_mul(*duration_multiplier))
        .ok_or(PricingError::Overflow)?;

    let total_price = daily_price
        .checked_mul(Decimal::from(days))
        .ok_or(PricingError::Overflow)?;

    Ok(ComposedPrice {
        daily_price,
        total_price,
    })
}
