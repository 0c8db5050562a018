use super::fee::Fee;
use std::ops::RangeInclusive;

/// A time-of-day band charged at a fixed fee.
///
/// A band matches when the hour falls in `hours` and the minute falls in
/// `minutes`; both ranges are inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeBand {
    pub hours: RangeInclusive<u32>,
    pub minutes: RangeInclusive<u32>,
    pub fee: Fee,
}

impl FeeBand {
    pub const fn new(hours: RangeInclusive<u32>, minutes: RangeInclusive<u32>, fee: u32) -> Self {
        Self {
            hours,
            minutes,
            fee: Fee::new(fee),
        }
    }

    pub fn matches(&self, hour: u32, minute: u32) -> bool {
        self.hours.contains(&hour) && self.minutes.contains(&minute)
    }
}

/// Ordered list of fee bands. The first band that matches wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeSchedule {
    bands: Vec<FeeBand>,
}

impl FeeSchedule {
    pub fn new(bands: Vec<FeeBand>) -> Self {
        Self { bands }
    }

    /// Fee for a time of day, or zero when no band covers it.
    pub fn fee_at(&self, hour: u32, minute: u32) -> Fee {
        self.bands
            .iter()
            .find(|band| band.matches(hour, minute))
            .map(|band| band.fee)
            .unwrap_or(Fee::ZERO)
    }
}

impl Default for FeeSchedule {
    /// The weekday rush-hour tariff.
    ///
    /// Two bands are kept exactly as the tariff has always been applied even
    /// though they look unintended: 09:00-14:29 is uncovered apart from the
    /// half hours starting at :30, and all of 15:00-16:59 falls into the 18
    /// band once 15:00-15:29 has been taken by the 13 band.
    fn default() -> Self {
        Self::new(vec![
            FeeBand::new(6..=6, 0..=29, 8),
            FeeBand::new(6..=6, 30..=59, 13),
            FeeBand::new(7..=7, 0..=59, 18),
            FeeBand::new(8..=8, 0..=29, 13),
            FeeBand::new(8..=14, 30..=59, 8),
            FeeBand::new(15..=15, 0..=29, 13),
            FeeBand::new(15..=16, 0..=59, 18),
            FeeBand::new(17..=17, 0..=59, 13),
            FeeBand::new(18..=18, 0..=29, 8),
        ])
    }
}
