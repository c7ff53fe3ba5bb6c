use chrono::{Datelike, NaiveDate};

use crate::error::Error;

/// One calendar month. Every period query and the daily-salary divisor are
/// derived from the same value, so totals and ledger cannot disagree on the
/// boundary dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    month: u32,
    year: i32,
}

impl Period {
    pub fn new(month: u32, year: i32) -> Result<Self, Error> {
        if !(1..=12).contains(&month) {
            return Err(Error::validation("month must be between 1 and 12"));
        }
        if year < 2000 {
            return Err(Error::validation("year must be 2000 or later"));
        }
        Ok(Period { month, year })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn first_day(&self) -> NaiveDate {
        // Safe: month was validated in new()
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    pub fn last_day(&self) -> NaiveDate {
        let next_month = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1).unwrap()
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1).unwrap()
        };
        next_month.pred_opt().unwrap()
    }

    /// Actual number of days in the month, leap years included.
    pub fn days(&self) -> u32 {
        self.last_day().day()
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.month, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_month() {
        assert!(Period::new(0, 2024).is_err());
        assert!(Period::new(13, 2024).is_err());
        assert!(Period::new(12, 2024).is_ok());
    }

    #[test]
    fn rejects_pre_2000_year() {
        assert!(Period::new(6, 1999).is_err());
        assert!(Period::new(6, 2000).is_ok());
    }

    #[test]
    fn month_boundaries_are_inclusive_first_to_last() {
        let p = Period::new(11, 2023).unwrap();
        assert_eq!(p.first_day(), NaiveDate::from_ymd_opt(2023, 11, 1).unwrap());
        assert_eq!(p.last_day(), NaiveDate::from_ymd_opt(2023, 11, 30).unwrap());
    }

    #[test]
    fn december_rolls_into_next_year() {
        let p = Period::new(12, 2023).unwrap();
        assert_eq!(p.last_day(), NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
        assert_eq!(p.days(), 31);
    }

    #[test]
    fn february_respects_leap_years() {
        assert_eq!(Period::new(2, 2024).unwrap().days(), 29);
        assert_eq!(Period::new(2, 2023).unwrap().days(), 28);
    }
}
