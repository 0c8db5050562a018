use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TollError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unknown vehicle type: {0}")]
    UnknownVehicle(String),
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
    #[error("Passings span more than one day: {first} and {other}")]
    MultipleDays { first: NaiveDate, other: NaiveDate },
}

pub type Result<T> = std::result::Result<T, TollError>;
