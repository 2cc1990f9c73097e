//! Year-month calendar values and birth date parsing

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::CalculatorError;

/// Earliest birth year accepted at the boundary
pub const MIN_YEAR: i32 = 1000;

/// Latest birth year accepted at the boundary
pub const MAX_YEAR: i32 = 9999;

/// A Gregorian calendar month (year + month 1-12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    /// Create without validation; callers supply a month in 1-12
    pub const fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Same month, `years` later; saturates at `i32::MAX`
    pub fn plus_years(self, years: u32) -> Self {
        let years = i32::try_from(years).unwrap_or(i32::MAX);
        Self::new(self.year.saturating_add(years), self.month)
    }

    /// Shift forward by `months`, carrying into the year
    pub fn plus_months(self, months: u32) -> Self {
        let zero_based = u64::from(self.month - 1) + u64::from(months);
        let carry = i32::try_from(zero_based / 12).unwrap_or(i32::MAX);
        Self::new(self.year.saturating_add(carry), (zero_based % 12) as u32 + 1)
    }

    /// Months elapsed since January of `year`; negative before it
    pub fn months_since_january(self, year: i32) -> i64 {
        (self.year as i64 - year as i64) * 12 + (self.month as i64 - 1)
    }

    /// First day of the month, when representable by chrono
    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Parse a strict `YYYY-MM` birth date.
    ///
    /// The year must be exactly four ASCII digits in 1000-9999 and the month
    /// exactly two ASCII digits in 01-12.
    pub fn parse_birth_date(input: &str) -> Result<Self, CalculatorError> {
        let invalid = || CalculatorError::InvalidDateFormat(input.to_string());

        let (year_str, month_str) = input.split_once('-').ok_or_else(invalid)?;
        if year_str.len() != 4 || !year_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        if month_str.len() != 2 || !month_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let year: i32 = year_str.parse().map_err(|_| invalid())?;
        let month: u32 = month_str.parse().map_err(|_| invalid())?;
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) || !(1..=12).contains(&month) {
            return Err(invalid());
        }

        let date = Self::new(year, month);
        // Reject anything chrono cannot represent
        date.first_day().ok_or_else(invalid)?;
        Ok(date)
    }
}

impl fmt::Display for YearMonth {
    /// Unpadded `Y-M`, e.g. `2025-2`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_birth_date(s)
    }
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        use chrono::Datelike;
        Self::new(date.year(), date.month())
    }
}
