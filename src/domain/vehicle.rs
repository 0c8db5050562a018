use crate::error::{Result, TollError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const ALL: [VehicleType; 7] = [
    VehicleType::Car,
    VehicleType::Motorbike,
    VehicleType::Tractor,
    VehicleType::Emergency,
    VehicleType::Diplomat,
    VehicleType::Foreign,
    VehicleType::Military,
];

/// Vehicle categories known to the toll system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Car,
    Motorbike,
    Tractor,
    Emergency,
    Diplomat,
    Foreign,
    Military,
}

impl VehicleType {
    /// Every category except private cars passes the gates free of charge.
    pub fn is_toll_free(&self) -> bool {
        !matches!(self, VehicleType::Car)
    }

    pub fn name(&self) -> &'static str {
        match self {
            VehicleType::Car => "car",
            VehicleType::Motorbike => "motorbike",
            VehicleType::Tractor => "tractor",
            VehicleType::Emergency => "emergency",
            VehicleType::Diplomat => "diplomat",
            VehicleType::Foreign => "foreign",
            VehicleType::Military => "military",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VehicleType {
    type Err = TollError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        ALL.into_iter()
            .find(|vt| vt.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| TollError::UnknownVehicle(s.to_string()))
    }
}

/// Anything that passes a toll gate.
///
/// Callers can bring their own vehicle representation; the calculator only
/// ever asks whether it is exempt.
pub trait Vehicle: Send + Sync {
    fn vehicle_type(&self) -> VehicleType;

    fn is_toll_free(&self) -> bool {
        self.vehicle_type().is_toll_free()
    }
}

impl Vehicle for VehicleType {
    fn vehicle_type(&self) -> VehicleType {
        *self
    }
}
