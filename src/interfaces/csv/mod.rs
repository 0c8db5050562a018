//! CSV adapters for feeding passings in and writing daily fees out.

pub mod fee_writer;
pub mod passing_reader;
