//! Domain layer: value objects and the policy data the calculator applies.
//!
//! Nothing in here performs I/O. The fee schedule and exemption calendar are
//! plain immutable values so a calculator can be built for any policy year.

pub mod calendar;
pub mod fee;
pub mod passing;
pub mod policy;
pub mod schedule;
pub mod vehicle;
