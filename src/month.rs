//! The year-month value that drives which transactions the charts show.

use std::{collections::BTreeSet, fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::{Date, Month, OffsetDateTime, UtcOffset, util::is_leap_year};

/// A calendar month in a specific year, e.g. October 2026.
///
/// Formats and parses as a zero-padded `YYYY-MM` string, so the string order
/// matches chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: Month,
}

/// The reasons a string cannot be parsed as a [YearMonth].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseYearMonthError {
    /// The string was not in the `YYYY-MM` format.
    #[error("\"{0}\" is not formatted as YYYY-MM")]
    InvalidFormat(String),
    /// The month number was outside 1 to 12.
    #[error("{0} is not a month number between 1 and 12")]
    InvalidMonth(u8),
}

impl YearMonth {
    /// Create a year-month value.
    pub const fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// The month that `date` falls in.
    pub fn from_date(date: Date) -> Self {
        Self::new(date.year(), date.month())
    }

    /// The current month in the timezone given by `local_offset`.
    pub fn current(local_offset: UtcOffset) -> Self {
        Self::from_date(OffsetDateTime::now_utc().to_offset(local_offset).date())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Month {
        self.month
    }

    /// The number of days in the month, accounting for leap years.
    pub fn days(&self) -> u8 {
        match self.month {
            Month::February if is_leap_year(self.year) => 29,
            Month::February => 28,
            Month::April | Month::June | Month::September | Month::November => 30,
            _ => 31,
        }
    }

    /// Whether `date` falls within this month.
    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// A human readable label such as "October 2026".
    pub fn label(&self) -> String {
        format!("{} {}", self.month, self.year)
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, u8::from(self.month))
    }
}

impl FromStr for YearMonth {
    type Err = ParseYearMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid_format = || ParseYearMonthError::InvalidFormat(s.to_owned());

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid_format)?;

        if year.len() != 4 || month.len() != 2 {
            return Err(invalid_format());
        }

        let year: i32 = year.parse().map_err(|_| invalid_format())?;
        let month_number: u8 = month.parse().map_err(|_| invalid_format())?;
        let month = Month::try_from(month_number)
            .map_err(|_| ParseYearMonthError::InvalidMonth(month_number))?;

        Ok(Self::new(year, month))
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// The months a user can pick from: every month that has a transaction plus
/// `current_month`, newest first.
pub fn selectable_months(
    transaction_dates: impl IntoIterator<Item = Date>,
    current_month: YearMonth,
) -> Vec<YearMonth> {
    let mut months: BTreeSet<YearMonth> = transaction_dates
        .into_iter()
        .map(YearMonth::from_date)
        .collect();
    months.insert(current_month);

    months.into_iter().rev().collect()
}
