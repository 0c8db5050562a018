use crate::domain::fee::DailyFee;
use crate::error::Result;
use std::io::Write;

/// Writes daily fees as CSV with a `vehicle,date,passings,fee` header.
pub struct DailyFeeWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> DailyFeeWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_fees(&mut self, fees: impl IntoIterator<Item = DailyFee>) -> Result<()> {
        for fee in fees {
            self.writer.serialize(fee)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
