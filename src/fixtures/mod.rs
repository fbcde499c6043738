//! Fixtures
//!
//! Rate cards (a company's seasons and duration brackets) loaded from YAML.
//! Records are validated here, so the pricing functions can trust them.

use std::{fs, path::PathBuf};

use jiff::Zoned;
use rust_decimal::Decimal;
use rustc_hash::FxHashSet;
use rusty_money::iso::{self, Currency};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{
    calculator::{PricingResult, calculate},
    calendar::CalendarError,
    durations::{MaxDays, RentalDuration},
    fixtures::{durations::DurationFixture, seasons::SeasonFixture},
    matrix::PricingMatrix,
    multiplier::Multiplier,
    pricing::PricingError,
    seasons::Season,
};

pub mod durations;
pub mod seasons;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Multiplier is not a positive decimal
    #[error("Invalid multiplier for {id}: {value}")]
    InvalidMultiplier {
        /// Record identifier
        id: String,
        /// Raw multiplier value
        value: String,
    },

    /// Season window is not a valid calendar range
    #[error("Invalid season {id}: {source}")]
    InvalidSeason {
        /// Season identifier
        id: String,
        /// Calendar validation error
        source: CalendarError,
    },

    /// Duration bracket has a zero minimum or a maximum below its minimum
    #[error("Invalid duration {id}: min {min_days} days, max {max_days}")]
    InvalidDuration {
        /// Duration identifier
        id: String,
        /// Minimum days
        min_days: u32,
        /// Maximum days
        max_days: MaxDays,
    },

    /// The same identifier appears twice in one list
    #[error("Duplicate identifier: {0}")]
    DuplicateId(String),
}

/// Rate card as written in YAML
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RateCardFixture {
    /// ISO 4217 currency code
    pub currency: String,

    /// Seasons, in match order
    #[serde(default)]
    pub seasons: Vec<SeasonFixture>,

    /// Duration brackets
    #[serde(default)]
    pub durations: Vec<DurationFixture>,
}

/// A company's validated pricing rules.
#[derive(Debug, Clone)]
pub struct RateCard {
    currency: &'static Currency,
    seasons: Vec<Season>,
    durations: Vec<RentalDuration>,
}

impl RateCard {
    /// Parse and validate a rate card from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or a record fails validation.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        let fixture: RateCardFixture = serde_norway::from_str(yaml)?;

        Self::try_from(fixture)
    }

    /// Currency prices on this card are quoted in
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Seasons, in match order
    pub fn seasons(&self) -> &[Season] {
        &self.seasons
    }

    /// Duration brackets, in file order
    pub fn durations(&self) -> &[RentalDuration] {
        &self.durations
    }

    /// Price a rental against this card.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the price overflows.
    pub fn calculate(
        &self,
        base_price: Decimal,
        start: &Zoned,
        end: &Zoned,
    ) -> Result<PricingResult, PricingError> {
        calculate(base_price, start, end, &self.seasons, &self.durations)
    }

    /// Build the pricing matrix for a vehicle on this card.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if a price overflows.
    pub fn matrix(&self, base_price: Decimal) -> Result<PricingMatrix, PricingError> {
        PricingMatrix::build(base_price, &self.seasons, &self.durations)
    }
}

impl TryFrom<RateCardFixture> for RateCard {
    type Error = FixtureError;

    fn try_from(fixture: RateCardFixture) -> Result<Self, Self::Error> {
        let currency = iso::find(&fixture.currency)
            .ok_or_else(|| FixtureError::UnknownCurrency(fixture.currency.clone()))?;

        ensure_unique_ids(fixture.seasons.iter().map(|season| season.id.as_str()))?;
        ensure_unique_ids(fixture.durations.iter().map(|duration| duration.id.as_str()))?;

        let seasons = fixture
            .seasons
            .into_iter()
            .map(Season::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let durations = fixture
            .durations
            .into_iter()
            .map(RentalDuration::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            currency,
            seasons,
            durations,
        })
    }
}

/// Fixture loader
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,
}

impl Fixture {
    /// Create a new fixture loader with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new fixture loader with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Load a rate card from `<base>/rate_cards/<name>.yml`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation.
    pub fn load_rate_card(&self, name: &str) -> Result<RateCard, FixtureError> {
        let file_path = self
            .base_path
            .join("rate_cards")
            .join(format!("{name}.yml"));

        let contents = fs::read_to_string(&file_path)?;
        let rate_card = RateCard::from_yaml(&contents)?;

        debug!(
            path = %file_path.display(),
            currency = rate_card.currency.iso_alpha_code,
            seasons = rate_card.seasons.len(),
            durations = rate_card.durations.len(),
            "loaded rate card"
        );

        Ok(rate_card)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a multiplier, which must be a positive decimal.
fn parse_multiplier(id: &str, value: &str) -> Result<Multiplier, FixtureError> {
    let invalid = || FixtureError::InvalidMultiplier {
        id: id.to_string(),
        value: value.to_string(),
    };

    let decimal = value.trim().parse::<Decimal>().map_err(|_err| invalid())?;

    if decimal <= Decimal::ZERO {
        return Err(invalid());
    }

    Ok(Multiplier::new(decimal))
}

fn ensure_unique_ids<'a>(ids: impl Iterator<Item = &'a str>) -> Result<(), FixtureError> {
    let mut seen = FxHashSet::default();

    for id in ids {
        if !seen.insert(id) {
            return Err(FixtureError::DuplicateId(id.to_string()));
        }
    }

    Ok(())
}
