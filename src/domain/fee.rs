use super::vehicle::VehicleType;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A toll amount in whole currency units.
///
/// Fees are never negative: subtraction saturates at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash, Serialize)]
#[serde(transparent)]
pub struct Fee(u32);

impl Fee {
    pub const ZERO: Self = Self(0);

    pub const fn new(amount: u32) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Fee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Fee {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Fee {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl AddAssign for Fee {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Fee {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// The outcome of pricing one vehicle's day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyFee {
    pub vehicle: VehicleType,
    /// Day the passings fall on; absent when there were none.
    pub date: Option<NaiveDate>,
    /// Number of passings priced.
    pub passings: usize,
    pub fee: Fee,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_arithmetic() {
        let a = Fee::new(18);
        let b = Fee::new(8);
        assert_eq!(a + b, Fee::new(26));
        assert_eq!(a - b, Fee::new(10));
    }

    #[test]
    fn test_fee_subtraction_saturates() {
        let mut fee = Fee::new(8);
        fee -= Fee::new(13);
        assert_eq!(fee, Fee::ZERO);
    }

    #[test]
    fn test_fee_serializes_as_plain_number() {
        let json = serde_json::to_string(&Fee::new(60)).unwrap();
        assert_eq!(json, "60");
    }
}
