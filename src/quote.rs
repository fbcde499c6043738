//! Quote
//!
//! A [`PricingResult`] expressed in money for a customer-facing quote.

use std::io;

use decimal_percentage::Percentage;
use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};
use rusty_money::{Money, MoneyError, iso::Currency};
use tabled::{
    builder::Builder,
    settings::{Alignment, Color, Style, object::Columns},
};
use thiserror::Error;

use crate::calculator::PricingResult;

/// Errors that can occur when building or printing a quote.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// An amount could not be represented in the currency's minor units.
    #[error("amount cannot be represented in minor units")]
    MinorUnitConversion,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// IO error
    #[error("IO error")]
    IO,
}

/// Customer-facing price of a rental, rounded to the currency's minor units.
#[derive(Debug, Clone)]
pub struct Quote<'a> {
    /// Number of charged days
    days: i64,

    /// Price per day after multipliers
    daily: Money<'a, Currency>,

    /// Price for the whole rental
    total: Money<'a, Currency>,

    /// Base price times days, without any multiplier
    undiscounted_total: Money<'a, Currency>,

    /// Matched season name
    season_name: Option<String>,

    /// Matched duration bracket name
    duration_name: Option<String>,
}

impl<'a> Quote<'a> {
    /// Build a quote from a pricing result.
    ///
    /// `base_price` is the daily price the result was calculated from, in
    /// major units of `currency`.
    ///
    /// # Errors
    ///
    /// - [`QuoteError::MinorUnitConversion`]: an amount overflows the minor-unit range.
    pub fn from_result(
        result: &PricingResult,
        base_price: Decimal,
        currency: &'a Currency,
    ) -> Result<Self, QuoteError> {
        let undiscounted = Decimal::from_i64(result.days)
            .and_then(|days| base_price.checked_mul(days))
            .ok_or(QuoteError::MinorUnitConversion)?;

        Ok(Self {
            days: result.days,
            daily: to_money(result.daily_price, currency)?,
            total: to_money(result.total_price, currency)?,
            undiscounted_total: to_money(undiscounted, currency)?,
            season_name: result.season_name.clone(),
            duration_name: result.duration_name.clone(),
        })
    }

    /// Number of charged days
    pub fn days(&self) -> i64 {
        self.days
    }

    /// Price per day
    pub fn daily(&self) -> Money<'a, Currency> {
        self.daily
    }

    /// Total price
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// Price without season or duration adjustments
    pub fn undiscounted_total(&self) -> Money<'a, Currency> {
        self.undiscounted_total
    }

    /// Matched season name
    pub fn season_name(&self) -> Option<&str> {
        self.season_name.as_deref()
    }

    /// Matched duration bracket name
    pub fn duration_name(&self) -> Option<&str> {
        self.duration_name.as_deref()
    }

    /// Savings against the unadjusted price. Negative in surcharged seasons.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the subtraction operation fails.
    pub fn savings(&self) -> Result<Money<'a, Currency>, MoneyError> {
        self.undiscounted_total.sub(self.total)
    }

    /// Savings as a fraction of the unadjusted price.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the subtraction operation fails.
    pub fn savings_percent(&self) -> Result<Percentage, MoneyError> {
        let savings_minor = self.savings()?.to_minor_units();
        let undiscounted_minor = self.undiscounted_total.to_minor_units();

        if undiscounted_minor == 0 {
            return Ok(Percentage::from(0.0));
        }

        let savings_dec = Decimal::from_i64(savings_minor).unwrap_or(Decimal::ZERO);
        let undiscounted_dec = Decimal::from_i64(undiscounted_minor).unwrap_or(Decimal::ZERO);

        Ok(Percentage::from(savings_dec / undiscounted_dec))
    }

    /// Prints the quote.
    ///
    /// # Errors
    ///
    /// Returns an error if the quote cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), QuoteError> {
        let mut builder = Builder::default();

        builder.push_record(["Season", "Duration", "Days", "Per Day", "Total"]);
        builder.push_record([
            self.season_name().unwrap_or("-").to_string(),
            self.duration_name().unwrap_or("-").to_string(),
            self.days.to_string(),
            self.daily.to_string(),
            self.total.to_string(),
        ]);

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(2..), Alignment::right());
        table.modify(Columns::last(), Color::BOLD);

        let savings = self.savings()?;
        let points = ((self.savings_percent()? * Decimal::ONE) * Decimal::ONE_HUNDRED).round_dp(2);

        writeln!(out, "\n{table}").map_err(|_err| QuoteError::IO)?;
        writeln!(out, " Before adjustments: {}", self.undiscounted_total)
            .map_err(|_err| QuoteError::IO)?;
        writeln!(out, " Savings: ({points:.2}%) {savings}").map_err(|_err| QuoteError::IO)?;

        Ok(())
    }
}

/// Round an amount to the currency's minor units.
fn to_money(amount: Decimal, currency: &Currency) -> Result<Money<'_, Currency>, QuoteError> {
    let scale = 10_i64
        .checked_pow(currency.exponent)
        .ok_or(QuoteError::MinorUnitConversion)?;

    let Some(scaled) = amount.checked_mul(Decimal::from(scale)) else {
        return Err(QuoteError::MinorUnitConversion);
    };

    let rounded = scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let Some(minor) = rounded.to_i64() else {
        return Err(QuoteError::MinorUnitConversion);
    };

    Ok(Money::from_minor(minor, currency))
}
