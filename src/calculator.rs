//! Rental Price Calculator
//!
//! Entry point of the pricing engine. Given a base daily price, a rental period
//! and a company's seasons and duration brackets, [`calculate`] prices the whole
//! stay:
//!
//! 1. the day count is the elapsed time rounded up to whole days,
//! 2. the season is chosen from the start date only,
//! 3. the duration bracket is chosen from the day count,
//! 4. both multipliers are applied to the daily rate.

use jiff::Zoned;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::{
    durations::{RentalDuration, resolve_duration},
    multiplier::Multiplier,
    pricing::{PricingError, compose},
    seasons::{Season, find_season},
};

const SECONDS_PER_DAY: i64 = 86_400;

/// Price of a rental, with the rules that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingResult {
    /// Price per day after season and duration multipliers
    pub daily_price: Decimal,

    /// Price for the whole rental
    pub total_price: Decimal,

    /// Number of charged days
    pub days: i64,

    /// Season multiplier applied, 1 when no season matched
    pub season_multiplier: Multiplier,

    /// Duration multiplier applied, 1 when no bracket matched
    pub duration_multiplier: Multiplier,

    /// Name of the matched season
    pub season_name: Option<String>,

    /// Name of the matched duration bracket
    pub duration_name: Option<String>,
}

/// Number of charged days between two instants.
///
/// Any partial day counts as a full day. The result is not clamped: an `end`
/// at or before `start` gives zero or a negative count.
pub fn rental_days(start: &Zoned, end: &Zoned) -> i64 {
    let elapsed = end.timestamp().duration_since(start.timestamp());
    let secs = elapsed.as_secs();
    let remainder = secs % SECONDS_PER_DAY;

    let partial_day = remainder > 0 || (remainder == 0 && elapsed.subsec_nanos() > 0);

    secs / SECONDS_PER_DAY + i64::from(partial_day)
}

/// Calculates the price of a rental from `start` to `end`.
///
/// The season in effect on the start date governs the whole stay, even when the
/// rental runs past the end of that season.
///
/// # Errors
///
/// - [`PricingError::Overflow`]: the price does not fit in a [`Decimal`].
pub fn calculate(
    base_price: Decimal,
    start: &Zoned,
    end: &Zoned,
    seasons: &[Season],
    durations: &[RentalDuration],
) -> Result<PricingResult, PricingError> {
    let days = rental_days(start, end);

    let season = find_season(start, seasons);
    let season_multiplier = season.map_or(Multiplier::IDENTITY, |season| season.multiplier);

    let resolved = resolve_duration(days, durations);

    let price = compose(base_price, season_multiplier, days, resolved.multiplier)?;

    debug!(
        days,
        season = season.map(|season| season.id.as_str()),
        duration = resolved.duration.map(|duration| duration.id.as_str()),
        daily_price = %price.daily_price,
        total_price = %price.total_price,
        "priced rental"
    );

    Ok(PricingResult {
        daily_price: price.daily_price,
        total_price: price.total_price,
        days,
        season_multiplier,
        duration_multiplier: resolved.multiplier,
        season_name: season.map(|season| season.name.clone()),
        duration_name: resolved.duration.map(|duration| duration.name.clone()),
    })
}

#[cfg(test)]
mod tests {
    use jiff::{Timestamp, tz::TimeZone};
    use testresult::TestResult;

    use crate::{calendar::MonthDay, durations::MaxDays};

    use super::*;

    fn at(timestamp: &str) -> TestResult<Zoned> {
        Ok(timestamp.parse::<Timestamp>()?.to_zoned(TimeZone::UTC))
    }

    fn summer() -> TestResult<Season> {
        Ok(Season {
            id: "summer".to_string(),
            name: "Summer".to_string(),
            start: MonthDay::new(5, 6)?,
            end: MonthDay::new(10, 20)?,
            multiplier: Multiplier::new(Decimal::new(12, 1)),
            discount_label: Some("+20%".to_string()),
        })
    }

    fn short_stay() -> RentalDuration {
        RentalDuration {
            id: "short".to_string(),
            name: "Short stay".to_string(),
            min_days: 3,
            max_days: MaxDays::Bounded(6),
            multiplier: Multiplier::new(Decimal::new(9, 1)),
            discount_label: Some("-10%".to_string()),
        }
    }

    #[test]
    fn rental_days_rounds_partial_days_up() -> TestResult {
        let start = at("2024-07-01T10:00Z")?;

        assert_eq!(rental_days(&start, &at("2024-07-02T12:00Z")?), 2);
        assert_eq!(rental_days(&start, &at("2024-07-02T10:00Z")?), 1);
        assert_eq!(rental_days(&start, &at("2024-07-02T10:00:00.000000001Z")?), 2);
        assert_eq!(rental_days(&start, &at("2024-07-01T10:00:01Z")?), 1);

        Ok(())
    }

    #[test]
    fn rental_days_is_not_clamped() -> TestResult {
        let start = at("2024-07-05T10:00Z")?;

        assert_eq!(rental_days(&start, &start), 0);
        assert_eq!(rental_days(&start, &at("2024-07-03T10:00Z")?), -2);
        assert_eq!(rental_days(&start, &at("2024-07-04T22:00Z")?), 0);

        Ok(())
    }

    #[test]
    fn rental_days_uses_elapsed_time_across_offsets() -> TestResult {
        let start: Zoned = "2024-07-01T10:00+02:00[+02:00]".parse()?;
        let end = at("2024-07-02T08:00Z")?;

        // 24 hours exactly
        assert_eq!(rental_days(&start, &end), 1);

        Ok(())
    }

    #[test]
    fn calculate_applies_season_and_duration() -> TestResult {
        let result = calculate(
            Decimal::new(1000, 0),
            &at("2024-07-01T09:00Z")?,
            &at("2024-07-06T09:00Z")?,
            &[summer()?],
            &[short_stay()],
        )?;

        assert_eq!(result.days, 5);
        assert_eq!(result.daily_price, Decimal::new(1080, 0));
        assert_eq!(result.total_price, Decimal::new(5400, 0));
        assert_eq!(result.season_name.as_deref(), Some("Summer"));
        assert_eq!(result.duration_name.as_deref(), Some("Short stay"));

        Ok(())
    }

    #[test]
    fn calculate_without_rules_uses_base_price() -> TestResult {
        let result = calculate(
            Decimal::new(4500, 2),
            &at("2024-03-01T09:00Z")?,
            &at("2024-03-03T09:00Z")?,
            &[],
            &[],
        )?;

        assert_eq!(result.season_multiplier, Multiplier::IDENTITY);
        assert_eq!(result.duration_multiplier, Multiplier::IDENTITY);
        assert_eq!(result.daily_price, Decimal::new(4500, 2));
        assert_eq!(result.total_price, Decimal::new(9000, 2));
        assert_eq!(result.season_name, None);
        assert_eq!(result.duration_name, None);

        Ok(())
    }

    #[test]
    fn season_of_start_date_covers_whole_stay() -> TestResult {
        // Starts on the last day of summer and runs into November.
        let result = calculate(
            Decimal::new(100, 0),
            &at("2024-10-20T09:00Z")?,
            &at("2024-11-05T09:00Z")?,
            &[summer()?],
            &[],
        )?;

        assert_eq!(result.days, 16);
        assert_eq!(result.season_multiplier, Multiplier::new(Decimal::new(12, 1)));
        assert_eq!(result.total_price, Decimal::new(1920, 0));

        Ok(())
    }

    #[test]
    fn season_uses_start_date_in_its_own_time_zone() -> TestResult {
        // 2024-05-05T23:30 in UTC is already May 6 at +09:00.
        let start: Zoned = "2024-05-06T08:30+09:00[+09:00]".parse()?;
        let end: Zoned = "2024-05-07T08:30+09:00[+09:00]".parse()?;

        let result = calculate(Decimal::new(100, 0), &start, &end, &[summer()?], &[])?;

        assert_eq!(result.season_name.as_deref(), Some("Summer"));

        Ok(())
    }

    #[test]
    fn calculate_is_deterministic() -> TestResult {
        let start = at("2024-07-01T09:00Z")?;
        let end = at("2024-07-04T11:00Z")?;
        let seasons = [summer()?];
        let durations = [short_stay()];

        let first = calculate(Decimal::new(3999, 2), &start, &end, &seasons, &durations)?;
        let second = calculate(Decimal::new(3999, 2), &start, &end, &seasons, &durations)?;

        assert_eq!(first, second);
        assert_eq!(first.daily_price.serialize(), second.daily_price.serialize());

        Ok(())
    }
}
