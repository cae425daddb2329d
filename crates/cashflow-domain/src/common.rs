//! Shared date-range primitives.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive calendar range used for statements and projections.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if end < start {
            return Err(DateRangeError::EndBeforeStart);
        }
        Ok(Self { start, end })
    }

    /// Both bounds are part of the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Iterates every day of the range in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

/// Errors that can occur when constructing [`DateRange`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRangeError {
    EndBeforeStart,
}

impl fmt::Display for DateRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateRangeError::EndBeforeStart => {
                f.write_str("date range end must not be before start")
            }
        }
    }
}

impl std::error::Error for DateRangeError {}
