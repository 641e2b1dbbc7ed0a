//! Expiration date parsing and validation.
//!
//! Only the exact `MM/YY` form is accepted. An expiration is valid while the
//! first instant (UTC) of its month is strictly in the future, so a card
//! whose expiration month is the current month is already invalid.
//!
//! # Example
//!
//! ```
//! use cardgate::expiry::parse_expiration;
//! use chrono::{TimeZone, Utc};
//!
//! let exp = parse_expiration("10/27").unwrap();
//! assert_eq!(exp.month(), 10);
//! assert_eq!(exp.year(), 2027);
//!
//! let before = Utc.with_ymd_and_hms(2027, 9, 30, 23, 59, 59).unwrap();
//! let during = Utc.with_ymd_and_hms(2027, 10, 1, 0, 0, 0).unwrap();
//! assert!(exp.is_valid_at(before));
//! assert!(!exp.is_valid_at(during));
//! ```

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use std::fmt;

use crate::error::FormatError;

/// Two-digit years at or above this value belong to the 1900s.
const CENTURY_PIVOT: u16 = 69;

/// A parsed `MM/YY` expiration date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpirationDate {
    month: u8,
    year: u16,
    starts_on: NaiveDate,
}

impl ExpirationDate {
    /// Creates an expiration date from a month (1-12) and a four-digit year.
    ///
    /// Returns `None` if the month is out of range.
    pub fn new(month: u8, year: u16) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        let starts_on = NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), 1)?;
        Some(Self {
            month,
            year,
            starts_on,
        })
    }

    /// Returns the month (1-12).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the four-digit year.
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the first instant of the expiration month in UTC.
    pub fn starts_at(&self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.starts_on.and_time(NaiveTime::default()))
    }

    /// Returns true if the expiration month starts strictly after `now`.
    #[inline]
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.starts_at() > now
    }

    /// Like [`is_valid_at`](Self::is_valid_at) with the current time.
    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }
}

impl fmt::Display for ExpirationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.year % 100)
    }
}

/// Parses an expiration date in exact `MM/YY` form.
///
/// Both fields must be two ASCII digits. Years `00`-`68` map to 2000-2068,
/// `69`-`99` to 1969-1999.
///
/// # Errors
///
/// - `FormatError::MissingExpiration` for empty input
/// - `FormatError::InvalidExpiration` for any other shape
/// - `FormatError::ExpirationMonthOutOfRange` when the month is not 01-12
pub fn parse_expiration(input: &str) -> Result<ExpirationDate, FormatError> {
    if input.is_empty() {
        return Err(FormatError::MissingExpiration);
    }

    let bytes = input.as_bytes();
    let well_formed = bytes.len() == 5
        && bytes[2] == b'/'
        && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit());
    if !well_formed {
        return Err(FormatError::InvalidExpiration);
    }

    let two_digits = |i: usize| (bytes[i] - b'0') * 10 + (bytes[i + 1] - b'0');
    let month = two_digits(0);
    let yy = u16::from(two_digits(3));

    let year = if yy >= CENTURY_PIVOT { 1900 + yy } else { 2000 + yy };

    ExpirationDate::new(month, year).ok_or(FormatError::ExpirationMonthOutOfRange(month))
}
