#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rand::Rng;
use std::io::{Error, Write};
use tempfile::NamedTempFile;
use toll_calculator::domain::passing::Passing;

/// Writes a passings CSV with the given raw timestamp cells.
pub fn passings_csv(rows: &[&str]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    {
        let mut wtr = csv::WriterBuilder::new().from_writer(file.as_file_mut());
        wtr.write_record(["timestamp"])?;
        for row in rows {
            wtr.write_record([row])?;
        }
        wtr.flush()?;
    }
    file.flush()?;
    Ok(file)
}

/// Random passings, all on `date`.
pub fn random_day<R: Rng>(rng: &mut R, date: NaiveDate, count: usize) -> Vec<Passing> {
    (0..count)
        .map(|_| {
            let time = NaiveTime::from_hms_milli_opt(
                rng.gen_range(0..24),
                rng.gen_range(0..60),
                rng.gen_range(0..60),
                rng.gen_range(0..1000),
            )
            .unwrap();
            Passing::new(NaiveDateTime::new(date, time))
        })
        .collect()
}
