//! Birthday value object and days-to-next-occurrence arithmetic.

use super::errors::ValidationError;
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A contact's birthday, parsed from `YYYY-MM-DD` text.
///
/// Construction validates the text strictly; a `Birthday` always holds a
/// real calendar date. The derived operations answer "when is the next
/// occurrence of this month/day" and "how many days until then".
///
/// # Example
///
/// ```
/// use rolodex::domain::Birthday;
///
/// let birthday = Birthday::new("1990-05-14").unwrap();
/// assert!(birthday.days_to_birthday() < 366);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `YYYY-MM-DD` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the text is not a valid
    /// date in that format.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        let date = NaiveDate::parse_from_str(&value, "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate(value))?;

        Ok(Self(date))
    }

    /// The stored date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The next occurrence of this birthday's month/day on or after `today`.
    ///
    /// A Feb 29 birthday resolves to Mar 1 in non-leap years.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let candidate = Self::month_day_in_year(today.year(), self.0.month(), self.0.day());
        if candidate >= today {
            candidate
        } else {
            Self::month_day_in_year(today.year() + 1, self.0.month(), self.0.day())
        }
    }

    /// Days from `today` until the next occurrence. Always in `0..366`.
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.next_occurrence(today) - today).num_days()
    }

    /// Days from the current local date until the next occurrence.
    pub fn days_to_birthday(&self) -> i64 {
        self.days_until(Local::now().date_naive())
    }

    fn month_day_in_year(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day)
            // Only Feb 29 can fail here; roll over to Mar 1.
            .unwrap_or_else(|| {
                NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 exists in every year")
            })
    }
}

// Serde support - serialize as `YYYY-MM-DD` string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("1990-05-14").unwrap();
        assert_eq!(birthday.to_string(), "1990-05-14");
    }

    #[test]
    fn test_birthday_validates_format() {
        assert!(Birthday::new("1990-05-14").is_ok());
        assert!(Birthday::new("14-05-1990").is_err());
        assert!(Birthday::new("1990/05/14").is_err());
        assert!(Birthday::new("1990-13-01").is_err()); // no month 13
        assert!(Birthday::new("1990-02-30").is_err()); // no Feb 30
        assert!(Birthday::new("not a date").is_err());
        assert!(Birthday::new("").is_err());
    }

    #[test]
    fn test_next_occurrence_later_this_year() {
        let birthday = Birthday::new("1990-05-14").unwrap();
        let today = date(2026, 3, 1);
        assert_eq!(birthday.next_occurrence(today), date(2026, 5, 14));
    }

    #[test]
    fn test_next_occurrence_today_counts() {
        let birthday = Birthday::new("1990-05-14").unwrap();
        let today = date(2026, 5, 14);
        assert_eq!(birthday.next_occurrence(today), today);
        assert_eq!(birthday.days_until(today), 0);
    }

    #[test]
    fn test_next_occurrence_rolls_to_next_year() {
        let birthday = Birthday::new("1990-05-14").unwrap();
        let today = date(2026, 5, 15);
        assert_eq!(birthday.next_occurrence(today), date(2027, 5, 14));
        assert_eq!(birthday.days_until(today), 364);
    }

    #[test]
    fn test_feb_29_falls_back_to_mar_1() {
        let birthday = Birthday::new("2000-02-29").unwrap();
        // 2026 is not a leap year
        let today = date(2026, 1, 1);
        assert_eq!(birthday.next_occurrence(today), date(2026, 3, 1));
        // 2028 is a leap year
        let today = date(2027, 12, 1);
        assert_eq!(birthday.next_occurrence(today), date(2028, 2, 29));
    }

    #[test]
    fn test_days_until_bounds() {
        let birthday = Birthday::new("1990-07-01").unwrap();
        let mut today = date(2026, 1, 1);
        for _ in 0..800 {
            let days = birthday.days_until(today);
            assert!((0..366).contains(&days), "out of range at {}: {}", today, days);
            today = today.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_birthday_serialization_round_trip() {
        let birthday = Birthday::new("1985-12-31").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"1985-12-31\"");
        let back: Birthday = serde_json::from_str(&json).unwrap();
        assert_eq!(back, birthday);
    }
}
