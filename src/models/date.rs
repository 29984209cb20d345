use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::DomainError;

/// Field value of a date that failed validation at construction.
pub const UNSET: i32 = -1;

const FEBRUARY: i32 = 2;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Month/day/year triple with bounds-only validation.
///
/// An invalid triple given to [`Date::new`] produces the unset sentinel
/// (every field [`UNSET`]) instead of failing. Setters report rejection
/// through their return value and leave the previous state untouched.
/// [`Date::to_naive_date`] applies the stricter calendar check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "DateFields")]
pub struct Date {
    // Field order drives the derived chronological ordering.
    year: i32,
    month: i32,
    day: i32,
}

/// Wire form of [`Date`], checked on the way in.
#[derive(Deserialize)]
struct DateFields {
    year: i32,
    month: i32,
    day: i32,
}

impl TryFrom<DateFields> for Date {
    type Error = DomainError;

    fn try_from(fields: DateFields) -> Result<Self, Self::Error> {
        let DateFields { year, month, day } = fields;
        if (year, month, day) == (UNSET, UNSET, UNSET) {
            return Ok(Self::unset());
        }
        let date = Self::new(month, day, year);
        if date.is_set() {
            Ok(date)
        } else {
            Err(DomainError::InvalidDate(format!("{month}/{day}/{year}")))
        }
    }
}

impl Date {
    pub fn new(month: i32, day: i32, year: i32) -> Self {
        if is_bad_date(month, day, year) {
            return Self::unset();
        }
        Self { year, month, day }
    }

    pub const fn unset() -> Self {
        Self {
            year: UNSET,
            month: UNSET,
            day: UNSET,
        }
    }

    pub fn is_set(&self) -> bool {
        self.month != UNSET
    }

    pub fn month(&self) -> i32 {
        self.month
    }

    pub fn day(&self) -> i32 {
        self.day
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn set_month(&mut self, month: i32) -> bool {
        self.set_date(month, self.day, self.year)
    }

    pub fn set_day(&mut self, day: i32) -> bool {
        self.set_date(self.month, day, self.year)
    }

    pub fn set_year(&mut self, year: i32) -> bool {
        self.set_date(self.month, self.day, year)
    }

    pub fn set_date(&mut self, month: i32, day: i32, year: i32) -> bool {
        if is_bad_date(month, day, year) {
            return false;
        }
        *self = Self { year, month, day };
        true
    }

    /// `m/d/yyyy`, the house format used on notes.
    pub fn standard(&self) -> String {
        format!("{}/{}/{}", self.month, self.day, self.year)
    }

    /// `January 2, 2026`. Unset dates render as `INVALID`.
    pub fn readable(&self) -> String {
        match usize::try_from(self.month - 1)
            .ok()
            .and_then(|i| MONTH_NAMES.get(i))
        {
            Some(name) if self.is_set() => format!("{name} {}, {}", self.day, self.year),
            _ => "INVALID".to_string(),
        }
    }

    /// Calendar-checked conversion. Rejects days the bounds check lets
    /// through, such as April 31 or February 29 outside leap years.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        if !self.is_set() {
            return None;
        }
        NaiveDate::from_ymd_opt(
            self.year,
            u32::try_from(self.month).ok()?,
            u32::try_from(self.day).ok()?,
        )
    }
}

impl Default for Date {
    fn default() -> Self {
        Self::unset()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.standard())
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        use chrono::Datelike;
        Self::new(date.month() as i32, date.day() as i32, date.year())
    }
}

/// Strict `m/d/yyyy`: one or two digit month and day, four digit year.
impl FromStr for Date {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidDate(s.to_string());
        let parts: Vec<&str> = s.trim().split('/').collect();
        let [month, day, year] = parts.as_slice() else {
            return Err(invalid());
        };

        let widths_ok = (1..=2).contains(&month.len())
            && (1..=2).contains(&day.len())
            && year.len() == 4;
        let digits_ok = [month, day, year]
            .iter()
            .all(|p| p.chars().all(|c| c.is_ascii_digit()));
        if !widths_ok || !digits_ok {
            return Err(invalid());
        }

        let date = Self::new(
            month.parse().map_err(|_| invalid())?,
            day.parse().map_err(|_| invalid())?,
            year.parse().map_err(|_| invalid())?,
        );
        if date.is_set() {
            Ok(date)
        } else {
            Err(invalid())
        }
    }
}

fn is_bad_date(month: i32, day: i32, year: i32) -> bool {
    !(1..=12).contains(&month)
        || !(0..=31).contains(&day)
        || year < 0
        || (day > 29 && month == FEBRUARY)
}
