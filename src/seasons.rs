//! Seasons
//!
//! Seasonal rate rules tied to a recurring yearly calendar window.

use serde::Serialize;
use tracing::trace;

use crate::{calendar::MonthDay, multiplier::Multiplier};

/// A named rate adjustment applied to rentals starting inside a yearly window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Season {
    /// Season identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// First day of the window (inclusive)
    pub start: MonthDay,

    /// Last day of the window (inclusive)
    pub end: MonthDay,

    /// Price multiplier for rentals starting in this season
    pub multiplier: Multiplier,

    /// Optional label shown next to the price, e.g. "-10%"
    pub discount_label: Option<String>,
}

impl Season {
    /// Whether the window crosses the year boundary (e.g. Dec 20 to Jan 20).
    pub fn wraps_year_end(&self) -> bool {
        self.start.ordinal() > self.end.ordinal()
    }

    /// Whether `date` falls inside this season's window.
    pub fn contains(&self, date: MonthDay) -> bool {
        let day = date.ordinal();
        let start = self.start.ordinal();
        let end = self.end.ordinal();

        if start <= end {
            start <= day && day <= end
        } else {
            day >= start || day <= end
        }
    }
}

/// Returns the first season in `seasons` whose window contains `date`.
///
/// Only the month and day of `date` are used. Overlapping seasons are not
/// rejected; the earliest one in input order wins.
pub fn find_season(date: impl Into<MonthDay>, seasons: &[Season]) -> Option<&Season> {
    let date = date.into();
    let season = seasons.iter().find(|season| season.contains(date));

    if season.is_none() {
        trace!(%date, candidates = seasons.len(), "no season matched");
    }

    season
}
