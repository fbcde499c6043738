//! Fleetrate prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    calculator::{PricingResult, calculate, rental_days},
    calendar::{CalendarError, MonthDay},
    durations::{DurationMatch, MaxDays, RentalDuration, average_days_for_duration, resolve_duration},
    fixtures::{Fixture, FixtureError, RateCard},
    matrix::{MatrixError, PricingMatrix},
    multiplier::Multiplier,
    pricing::{ComposedPrice, PricingError, compose},
    quote::{Quote, QuoteError},
    seasons::{Season, find_season},
};
