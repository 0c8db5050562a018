use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeSet;

/// Days on which no vehicle pays toll.
///
/// Weekends are free in every year. Holidays and exempt months are only known
/// for `year`; dates in other years fall back to the weekend rule alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExemptionCalendar {
    year: i32,
    /// `(month, day)` pairs.
    holidays: BTreeSet<(u32, u32)>,
    exempt_months: BTreeSet<u32>,
}

impl ExemptionCalendar {
    pub fn new(
        year: i32,
        holidays: impl IntoIterator<Item = (u32, u32)>,
        exempt_months: impl IntoIterator<Item = u32>,
    ) -> Self {
        Self {
            year,
            holidays: holidays.into_iter().collect(),
            exempt_months: exempt_months.into_iter().collect(),
        }
    }

    pub fn is_weekend(date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    pub fn is_toll_free_date(&self, date: NaiveDate) -> bool {
        if Self::is_weekend(date) {
            return true;
        }
        if date.year() != self.year {
            return false;
        }
        self.exempt_months.contains(&date.month())
            || self.holidays.contains(&(date.month(), date.day()))
    }
}

impl Default for ExemptionCalendar {
    /// Public holidays and days before holidays for 2013, plus all of July.
    fn default() -> Self {
        Self::new(
            2013,
            [
                (1, 1),
                (3, 28),
                (3, 29),
                (4, 1),
                (4, 30),
                (5, 1),
                (5, 8),
                (5, 9),
                (6, 5),
                (6, 6),
                (6, 21),
                (11, 1),
                (12, 24),
                (12, 25),
                (12, 26),
                (12, 31),
            ],
            [7],
        )
    }
}
