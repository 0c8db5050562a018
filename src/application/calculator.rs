use crate::domain::fee::Fee;
use crate::domain::passing::Passing;
use crate::domain::policy::TollPolicy;
use crate::domain::vehicle::Vehicle;
use crate::error::{Result, TollError};
use chrono::NaiveDate;
use tracing::{debug, trace, warn};

/// Prices one vehicle's passings for one day.
///
/// The calculator holds no mutable state; a single instance can be shared
/// freely between threads.
#[derive(Debug, Clone, Default)]
pub struct TollCalculator {
    policy: TollPolicy,
}

impl TollCalculator {
    /// Creates a calculator applying `policy`.
    pub fn new(policy: TollPolicy) -> Self {
        Self { policy }
    }

    /// Total fee owed for a day of passings.
    ///
    /// Passings are walked in the order given. Passings within the policy
    /// window of a window's first passing are charged once; a passing earlier
    /// than the window start joins that window. Exempt vehicles and empty days
    /// cost nothing. An absent vehicle is charged like any other.
    ///
    /// # Errors
    ///
    /// Returns [`TollError::MultipleDays`] if the passings do not all fall on
    /// the same calendar day.
    pub fn total_fee(&self, vehicle: Option<&dyn Vehicle>, passings: &[Passing]) -> Result<Fee> {
        if self.is_toll_free_vehicle(vehicle) {
            return Ok(Fee::ZERO);
        }
        let Some(first) = passings.first() else {
            return Ok(Fee::ZERO);
        };
        if let Some(other) = passings.iter().find(|p| p.date() != first.date()) {
            return Err(TollError::MultipleDays {
                first: first.date(),
                other: other.date(),
            });
        }

        Ok(self.windowed_total(passings))
    }

    /// Sums the day's fees window by window and applies the daily cap.
    ///
    /// Each in-window passing takes back the window start's fee and adds the
    /// larger of its own fee and the start's. `window_start` only moves when a
    /// new window opens.
    fn windowed_total(&self, passings: &[Passing]) -> Fee {
        let mut window_start = passings[0];
        let mut total = Fee::ZERO;

        for passing in passings {
            let next_fee = self.passing_fee(passing);
            let mut window_fee = self.passing_fee(&window_start);
            let minutes = passing.elapsed_minutes_since(&window_start);

            if minutes <= self.policy.window_minutes {
                if total > Fee::ZERO {
                    total -= window_fee;
                }
                if next_fee >= window_fee {
                    window_fee = next_fee;
                }
                total += window_fee;
                debug!(passing = %passing.at(), %window_fee, %total, "passing joins window");
            } else {
                total += next_fee;
                window_start = *passing;
                debug!(passing = %passing.at(), %next_fee, %total, "passing opens window");
            }
        }

        if total > self.policy.daily_cap {
            warn!(%total, cap = %self.policy.daily_cap, "daily fee capped");
            total = self.policy.daily_cap;
        }
        total
    }

    /// Fee for a single passing, ignoring every other passing that day.
    pub fn passing_fee(&self, passing: &Passing) -> Fee {
        if self.is_toll_free_date(passing.date()) {
            return Fee::ZERO;
        }
        let fee = self
            .policy
            .schedule
            .fee_at(passing.hour(), passing.minute());
        trace!(passing = %passing.at(), %fee, "passing fee");
        fee
    }

    pub fn is_toll_free_vehicle(&self, vehicle: Option<&dyn Vehicle>) -> bool {
        vehicle.is_some_and(|v| v.is_toll_free())
    }

    pub fn is_toll_free_date(&self, date: NaiveDate) -> bool {
        self.policy.calendar.is_toll_free_date(date)
    }
}
