use super::calendar::ExemptionCalendar;
use super::fee::Fee;
use super::schedule::FeeSchedule;

/// Everything the calculator needs to price one day of passings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TollPolicy {
    pub schedule: FeeSchedule,
    pub calendar: ExemptionCalendar,
    /// Most a vehicle pays in one day.
    pub daily_cap: Fee,
    /// Passings within this many minutes of a window's first passing are charged once.
    pub window_minutes: i64,
}

impl TollPolicy {
    pub const DAILY_CAP: Fee = Fee::new(60);
    pub const WINDOW_MINUTES: i64 = 60;

    pub fn new(schedule: FeeSchedule, calendar: ExemptionCalendar) -> Self {
        Self {
            schedule,
            calendar,
            daily_cap: Self::DAILY_CAP,
            window_minutes: Self::WINDOW_MINUTES,
        }
    }
}

impl Default for TollPolicy {
    fn default() -> Self {
        Self::new(FeeSchedule::default(), ExemptionCalendar::default())
    }
}
