//! Season Fixtures

use serde::Deserialize;

use crate::{
    calendar::MonthDay,
    fixtures::{FixtureError, parse_multiplier},
    seasons::Season,
};

/// Season as written in YAML
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeasonFixture {
    /// Season identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Start month, 1-12
    pub start_month: u8,

    /// Start day of month
    pub start_day: u8,

    /// End month, 1-12
    pub end_month: u8,

    /// End day of month
    pub end_day: u8,

    /// Multiplier as a decimal string, e.g. "1.25"
    pub multiplier: String,

    /// Optional display label
    #[serde(default)]
    pub discount_label: Option<String>,
}

impl TryFrom<SeasonFixture> for Season {
    type Error = FixtureError;

    fn try_from(fixture: SeasonFixture) -> Result<Self, Self::Error> {
        let invalid = |source| FixtureError::InvalidSeason {
            id: fixture.id.clone(),
            source,
        };

        let start = MonthDay::new(fixture.start_month, fixture.start_day).map_err(invalid)?;
        let end = MonthDay::new(fixture.end_month, fixture.end_day).map_err(invalid)?;

        let multiplier = parse_multiplier(&fixture.id, &fixture.multiplier)?;

        Ok(Season {
            id: fixture.id,
            name: fixture.name,
            start,
            end,
            multiplier,
            discount_label: fixture.discount_label,
        })
    }
}
