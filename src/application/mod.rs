//! Application layer containing the toll pricing logic.
//!
//! This module defines the `TollCalculator`, which applies a `TollPolicy` to a
//! vehicle's passings for a single day.

pub mod calculator;
