//! Target date resolution for rate lookups.
//!
//! Field bounds are checked first and reported as errors. A complete triple
//! that still does not form a calendar date (e.g. Feb 31), or a missing
//! field, falls back to today. The resolved date must not lie after today.

use chrono::NaiveDate;
use thiserror::Error;

/// Earliest year the upstream provider serves.
pub const MIN_YEAR: i32 = 1999;

/// Date resolution errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// Year before the first supported year.
    #[error("year must be at least 1999, got {0}")]
    YearOutOfRange(i32),

    /// Month outside 1-12.
    #[error("month must be between 1 and 12, got {0}")]
    MonthOutOfRange(u32),

    /// Day outside 1-31.
    #[error("day must be between 1 and 31, got {0}")]
    DayOutOfRange(u32),

    /// Resolved date lies after the current date.
    #[error("{0} is later than the current date")]
    InFuture(NaiveDate),
}

/// Optional year/month/day supplied by a caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateParts {
    /// Year, at least [`MIN_YEAR`] when present.
    pub year: Option<i32>,
    /// Month, 1-12 when present.
    pub month: Option<u32>,
    /// Day of month, 1-31 when present.
    pub day: Option<u32>,
}

impl DateParts {
    /// Creates date parts from optional fields.
    #[must_use]
    pub const fn new(year: Option<i32>, month: Option<u32>, day: Option<u32>) -> Self {
        Self { year, month, day }
    }

    /// Checks each supplied field against its bounds.
    pub fn check_bounds(&self) -> Result<(), DateError> {
        if let Some(year) = self.year.filter(|y| *y < MIN_YEAR) {
            return Err(DateError::YearOutOfRange(year));
        }
        if let Some(month) = self.month.filter(|m| !(1..=12).contains(m)) {
            return Err(DateError::MonthOutOfRange(month));
        }
        if let Some(day) = self.day.filter(|d| !(1..=31).contains(d)) {
            return Err(DateError::DayOutOfRange(day));
        }
        Ok(())
    }
}

/// Outcome of date resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedDate {
    /// The caller's date was used as given.
    Requested(NaiveDate),
    /// The caller's date was missing or not a calendar date; today was used.
    Fallback(NaiveDate),
}

impl ResolvedDate {
    /// The date to look rates up for.
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        match self {
            Self::Requested(date) | Self::Fallback(date) => date,
        }
    }

    /// Returns true if today was substituted for the caller's date.
    #[must_use]
    pub const fn is_fallback(self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Resolves the lookup date from optional parts, relative to `today`.
pub fn resolve_target_date(parts: DateParts, today: NaiveDate) -> Result<ResolvedDate, DateError> {
    parts.check_bounds()?;

    let resolved = match (parts.year, parts.month, parts.day) {
        (Some(year), Some(month), Some(day)) => NaiveDate::from_ymd_opt(year, month, day)
            .map_or(ResolvedDate::Fallback(today), ResolvedDate::Requested),
        _ => ResolvedDate::Fallback(today),
    };

    if resolved.date() > today {
        return Err(DateError::InFuture(resolved.date()));
    }

    Ok(resolved)
}
