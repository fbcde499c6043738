//! Duration Fixtures

use serde::Deserialize;

use crate::{
    durations::{MaxDays, RentalDuration},
    fixtures::{FixtureError, parse_multiplier},
};

/// Duration bracket as written in YAML
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DurationFixture {
    /// Bracket identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Minimum days, at least 1
    pub min_days: u32,

    /// Maximum days; omit for an open-ended bracket
    #[serde(default)]
    pub max_days: Option<u32>,

    /// Multiplier as a decimal string, e.g. "0.9"
    pub multiplier: String,

    /// Optional display label
    #[serde(default)]
    pub discount_label: Option<String>,
}

impl TryFrom<DurationFixture> for RentalDuration {
    type Error = FixtureError;

    fn try_from(fixture: DurationFixture) -> Result<Self, Self::Error> {
        let max_days = fixture.max_days.map_or(MaxDays::Unbounded, MaxDays::Bounded);
        let below_min = fixture.max_days.is_some_and(|max| max < fixture.min_days);

        if fixture.min_days == 0 || below_min {
            return Err(FixtureError::InvalidDuration {
                id: fixture.id,
                min_days: fixture.min_days,
                max_days,
            });
        }

        let multiplier = parse_multiplier(&fixture.id, &fixture.multiplier)?;

        Ok(RentalDuration {
            id: fixture.id,
            name: fixture.name,
            min_days: fixture.min_days,
            max_days,
            multiplier,
            discount_label: fixture.discount_label,
        })
    }
}
