//! Calendar

use std::fmt;

use jiff::{Zoned, civil::Date};
use serde::Serialize;
use thiserror::Error;

/// Days per month used for day-of-year ordinals.
///
/// February always has 29 days, so every (month, day) pair maps to the same
/// ordinal whatever the year and ordinal order is plain (month, day) order.
const DAYS_PER_MONTH: [u8; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Errors raised when constructing calendar values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    /// Month outside 1-12.
    #[error("invalid month {0}; expected 1-12")]
    InvalidMonth(u8),

    /// Day outside the valid range for its month.
    #[error("invalid day {day} for month {month}")]
    InvalidDay {
        /// Month the day was given for
        month: u8,
        /// Offending day
        day: u8,
    },
}

/// A recurring yearly date: a month and a day of that month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MonthDay {
    month: u8,
    day: u8,
}

impl MonthDay {
    /// Creates a new `MonthDay`.
    ///
    /// # Errors
    ///
    /// - [`CalendarError::InvalidMonth`]: `month` is not in 1-12.
    /// - [`CalendarError::InvalidDay`]: `day` is zero or past the end of the month.
    pub fn new(month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = days_in_month(month).ok_or(CalendarError::InvalidMonth(month))?;

        if day == 0 || day > max_day {
            return Err(CalendarError::InvalidDay { month, day });
        }

        Ok(Self { month, day })
    }

    /// Month, 1-12
    pub fn month(self) -> u8 {
        self.month
    }

    /// Day of the month, starting at 1
    pub fn day(self) -> u8 {
        self.day
    }

    /// 1-based day-of-year ordinal.
    pub fn ordinal(self) -> u16 {
        let preceding: u16 = DAYS_PER_MONTH
            .iter()
            .take(usize::from(self.month.saturating_sub(1)))
            .map(|&days| u16::from(days))
            .sum();

        preceding + u16::from(self.day)
    }
}

impl From<Date> for MonthDay {
    fn from(date: Date) -> Self {
        Self {
            month: date.month().unsigned_abs(),
            day: date.day().unsigned_abs(),
        }
    }
}

impl From<&Zoned> for MonthDay {
    fn from(zoned: &Zoned) -> Self {
        Self::from(zoned.date())
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

/// Number of days in `month` according to the ordinal table, or `None` for an
/// invalid month.
pub fn days_in_month(month: u8) -> Option<u8> {
    let idx = usize::from(month).checked_sub(1)?;

    DAYS_PER_MONTH.get(idx).copied()
}
