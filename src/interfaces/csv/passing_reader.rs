use crate::domain::passing::Passing;
use crate::error::{Result, TollError};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct PassingRecord {
    timestamp: Passing,
}

/// Reads passings from a CSV source with a `timestamp` column.
///
/// Whitespace is trimmed and extra columns are ignored.
pub struct PassingReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PassingReader<R> {
    /// Creates a new `PassingReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads passings, one result per row.
    pub fn passings(self) -> impl Iterator<Item = Result<Passing>> {
        self.reader
            .into_deserialize::<PassingRecord>()
            .map(|result| result.map(|record| record.timestamp).map_err(TollError::from))
    }
}
