//! Rental Durations
//!
//! Discount brackets keyed by trip length in days.

use std::fmt;

use serde::Serialize;
use tracing::trace;

use crate::multiplier::Multiplier;

/// Upper bound of a duration bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MaxDays {
    /// Inclusive upper limit
    Bounded(u32),

    /// Open-ended "N+ days" bracket
    Unbounded,
}

impl fmt::Display for MaxDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded(max) => write!(f, "{max}"),
            Self::Unbounded => f.write_str("unbounded"),
        }
    }
}

/// A named discount bracket for rentals of a given length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentalDuration {
    /// Bracket identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Minimum number of days (inclusive)
    pub min_days: u32,

    /// Maximum number of days
    pub max_days: MaxDays,

    /// Price multiplier applied to the daily rate
    pub multiplier: Multiplier,

    /// Optional label shown next to the price, e.g. "-15%"
    pub discount_label: Option<String>,
}

impl RentalDuration {
    /// Whether a rental of `days` days falls in this bracket.
    pub fn contains(&self, days: i64) -> bool {
        let min = i64::from(self.min_days);

        match self.max_days {
            MaxDays::Unbounded => days >= min,
            MaxDays::Bounded(max) => min <= days && days <= i64::from(max),
        }
    }
}

/// Result of resolving a day count against a set of duration brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationMatch<'a> {
    /// Multiplier to apply; [`Multiplier::IDENTITY`] when nothing matched
    pub multiplier: Multiplier,

    /// Matched bracket, if any
    pub duration: Option<&'a RentalDuration>,
}

/// Resolves the bracket for a rental of `days` days.
///
/// Brackets are scanned in ascending `min_days` order, keeping input order for
/// equal minimums, and the first containing bracket wins. Without a match the
/// identity multiplier is returned.
pub fn resolve_duration(days: i64, durations: &[RentalDuration]) -> DurationMatch<'_> {
    // `min_by_key` keeps the first of equal minimums, same as a stable sort + scan.
    let duration = durations
        .iter()
        .filter(|duration| duration.contains(days))
        .min_by_key(|duration| duration.min_days);

    if duration.is_none() {
        trace!(days, candidates = durations.len(), "no duration bracket matched");
    }

    DurationMatch {
        multiplier: duration.map_or(Multiplier::IDENTITY, |duration| duration.multiplier),
        duration,
    }
}

/// Representative day count for a bracket, used by pricing matrix displays.
///
/// Open-ended brackets are sampled at `min_days + 2`; bounded ones at the
/// midpoint, rounded up.
pub fn average_days_for_duration(duration: &RentalDuration) -> u32 {
    match duration.max_days {
        MaxDays::Unbounded => duration.min_days.saturating_add(2),
        MaxDays::Bounded(max) => duration.min_days.saturating_add(max).div_ceil(2),
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn bracket(id: &str, min_days: u32, max_days: MaxDays, multiplier: Decimal) -> RentalDuration {
        RentalDuration {
            id: id.to_string(),
            name: id.to_uppercase(),
            min_days,
            max_days,
            multiplier: Multiplier::new(multiplier),
            discount_label: None,
        }
    }

    #[test]
    fn unbounded_bracket_matches_from_minimum() {
        let month = bracket("month", 29, MaxDays::Unbounded, Decimal::new(7, 1));

        assert!(month.contains(29));
        assert!(month.contains(45));
        assert!(month.contains(1000));
        assert!(!month.contains(28));
    }

    #[test]
    fn bounded_bracket_is_inclusive() {
        let week = bracket("week", 7, MaxDays::Bounded(13), Decimal::new(9, 1));

        assert!(week.contains(7));
        assert!(week.contains(13));
        assert!(!week.contains(6));
        assert!(!week.contains(14));
    }

    #[test]
    fn resolve_prefers_lower_minimum_on_overlap() {
        let durations = [
            bracket("short", 1, MaxDays::Bounded(3), Decimal::ONE),
            bracket("flexible", 1, MaxDays::Bounded(10), Decimal::new(8, 1)),
        ];

        let resolved = resolve_duration(2, &durations);

        assert_eq!(resolved.multiplier, Multiplier::IDENTITY);
        assert_eq!(resolved.duration.map(|d| d.id.as_str()), Some("short"));
    }

    #[test]
    fn resolve_orders_by_minimum_days_not_input_order() {
        let durations = [
            bracket("long", 5, MaxDays::Unbounded, Decimal::new(8, 1)),
            bracket("any", 1, MaxDays::Unbounded, Decimal::new(95, 2)),
        ];

        let resolved = resolve_duration(10, &durations);

        assert_eq!(resolved.duration.map(|d| d.id.as_str()), Some("any"));
        assert_eq!(*resolved.multiplier, Decimal::new(95, 2));
    }

    #[test]
    fn resolve_falls_through_to_unbounded_catch_all() {
        let durations = [
            bracket("catch-all", 1, MaxDays::Unbounded, Decimal::new(95, 2)),
            bracket("short", 1, MaxDays::Bounded(3), Decimal::ONE),
        ];

        // Same minimum: input order decides.
        let resolved = resolve_duration(2, &durations);

        assert_eq!(resolved.duration.map(|d| d.id.as_str()), Some("catch-all"));
    }

    #[test]
    fn resolve_without_match_is_identity() {
        let durations = [bracket("week", 7, MaxDays::Bounded(13), Decimal::new(9, 1))];

        let resolved = resolve_duration(3, &durations);

        assert_eq!(resolved.multiplier, Multiplier::IDENTITY);
        assert!(resolved.duration.is_none());
        assert!(resolve_duration(3, &[]).duration.is_none());
    }

    #[test]
    fn resolve_ignores_non_positive_day_counts() {
        let durations = [bracket("any", 1, MaxDays::Unbounded, Decimal::new(9, 1))];

        assert!(resolve_duration(0, &durations).duration.is_none());
        assert!(resolve_duration(-3, &durations).duration.is_none());
    }

    #[test]
    fn average_days_for_unbounded_bracket() {
        let month = bracket("month", 29, MaxDays::Unbounded, Decimal::ONE);

        assert_eq!(average_days_for_duration(&month), 31);
    }

    #[test]
    fn average_days_for_bounded_bracket_rounds_up() {
        let week = bracket("week", 7, MaxDays::Bounded(13), Decimal::ONE);
        let short = bracket("short", 1, MaxDays::Bounded(4), Decimal::ONE);

        assert_eq!(average_days_for_duration(&week), 10);
        assert_eq!(average_days_for_duration(&short), 3);
    }
}
