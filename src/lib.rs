//! Daily road toll pricing.
//!
//! A [`TollCalculator`](application::calculator::TollCalculator) applies a
//! [`TollPolicy`](domain::policy::TollPolicy) (time-of-day fees, exempt dates,
//! a daily cap and a single-charge window) to one vehicle's passings for a day.

pub mod application;
pub mod domain;
pub mod error;
pub mod interfaces;
