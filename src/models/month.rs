//! Calendar month representation
//!
//! A `Month` is the period unit the balance engine works in: only the
//! calendar year and month of a date are significant for filtering records.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month (e.g., "2025-03")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    /// Create a month, returning `None` when the month number is out of range
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The month containing the given date
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Get the first day of this month
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(self.year, 1, 1).unwrap())
    }

    /// Get the last day of this month (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        let next_month = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        next_month.unwrap() - Duration::days(1)
    }

    /// Number of days in this month
    pub fn day_count(&self) -> u32 {
        self.end_date().day()
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date() && date <= self.end_date()
    }

    /// Get the next month
    pub fn next(&self) -> Self {
        self.add_months(1)
    }

    /// Get the previous month
    pub fn prev(&self) -> Self {
        self.add_months(-1)
    }

    /// Shift by a signed number of calendar months
    pub fn add_months(&self, months: i32) -> Self {
        let total = self.year * 12 + (self.month as i32 - 1) + months;
        Self {
            year: total.div_euclid(12),
            month: (total.rem_euclid(12) + 1) as u32,
        }
    }

    /// The date with the given day-of-month, clamped to the month's last day
    ///
    /// A recurring record anchored on the 31st falls on the 28th (or 29th)
    /// in February.
    pub fn date_with_day(&self, day: u32) -> NaiveDate {
        let day = day.clamp(1, self.day_count());
        NaiveDate::from_ymd_opt(self.year, self.month, day)
            .unwrap_or_else(|| self.start_date())
    }

    /// Short display label for dashboards (e.g., "Mar 2025")
    pub fn label(&self) -> String {
        self.start_date().format("%b %Y").to_string()
    }

    /// Parse a month string in "YYYY-MM" format
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let (year_str, month_str) = s
            .split_once('-')
            .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year_str
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month_str
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month).ok_or(MonthParseError::InvalidMonth(month))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Ord for Month {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month).cmp(&(other.year, other.month))
    }
}

impl PartialOrd for Month {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => write!(f, "Invalid month format: {}", s),
            MonthParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_bounds() {
        let mar = Month::new(2025, 3).unwrap();
        assert_eq!(mar.start_date(), date(2025, 3, 1));
        assert_eq!(mar.end_date(), date(2025, 3, 31));

        let feb = Month::new(2025, 2).unwrap();
        assert_eq!(feb.end_date(), date(2025, 2, 28));
        assert_eq!(feb.day_count(), 28);

        let leap_feb = Month::new(2024, 2).unwrap();
        assert_eq!(leap_feb.end_date(), date(2024, 2, 29));
    }

    #[test]
    fn test_invalid_month_number() {
        assert!(Month::new(2025, 0).is_none());
        assert!(Month::new(2025, 13).is_none());
    }

    #[test]
    fn test_contains() {
        let jan = Month::new(2025, 1).unwrap();
        assert!(jan.contains(date(2025, 1, 1)));
        assert!(jan.contains(date(2025, 1, 31)));
        assert!(!jan.contains(date(2025, 2, 1)));
        assert!(!jan.contains(date(2024, 12, 31)));
    }

    #[test]
    fn test_navigation() {
        let jan = Month::new(2025, 1).unwrap();
        assert_eq!(jan.next(), Month::new(2025, 2).unwrap());
        assert_eq!(jan.prev(), Month::new(2024, 12).unwrap());

        let dec = Month::new(2024, 12).unwrap();
        assert_eq!(dec.next(), Month::new(2025, 1).unwrap());
    }

    #[test]
    fn test_add_months_across_years() {
        let nov = Month::new(2024, 11).unwrap();
        assert_eq!(nov.add_months(3), Month::new(2025, 2).unwrap());
        assert_eq!(nov.add_months(-11), Month::new(2023, 12).unwrap());
        assert_eq!(nov.add_months(0), nov);
    }

    #[test]
    fn test_date_with_day_clamps() {
        let feb = Month::new(2025, 2).unwrap();
        assert_eq!(feb.date_with_day(31), date(2025, 2, 28));
        assert_eq!(feb.date_with_day(15), date(2025, 2, 15));
    }

    #[test]
    fn test_parse_and_display() {
        let month = Month::parse("2025-03").unwrap();
        assert_eq!(month, Month::new(2025, 3).unwrap());
        assert_eq!(format!("{}", month), "2025-03");

        assert!(Month::parse("2025").is_err());
        assert!(matches!(
            Month::parse("2025-13"),
            Err(MonthParseError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_label() {
        assert_eq!(Month::new(2025, 3).unwrap().label(), "Mar 2025");
    }

    #[test]
    fn test_ordering() {
        assert!(Month::new(2024, 12).unwrap() < Month::new(2025, 1).unwrap());
        assert!(Month::new(2025, 2).unwrap() < Month::new(2025, 3).unwrap());
    }

    #[test]
    fn test_serialization() {
        let month = Month::new(2025, 3).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        let deserialized: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, deserialized);
    }
}
