pub mod console;
pub mod csv;
pub mod json;

use crate::error::Result;
use crate::sim::record::StepRecord;

pub use console::ConsoleSink;
pub use csv::CsvSink;
pub use json::FlightSummary;

/// Anything that accepts the per-step flight log.
pub trait RecordSink {
    fn accept(&mut self, record: &StepRecord) -> Result<()>;

    /// Called once after the last record.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<S: RecordSink + ?Sized> RecordSink for &mut S {
    fn accept(&mut self, record: &StepRecord) -> Result<()> {
        (**self).accept(record)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

impl RecordSink for Vec<StepRecord> {
    fn accept(&mut self, record: &StepRecord) -> Result<()> {
        self.push(*record);
        Ok(())
    }
}

/// Forwards every record to two sinks, in order.
pub struct Tee<A, B>(pub A, pub B);

impl<A: RecordSink, B: RecordSink> RecordSink for Tee<A, B> {
    fn accept(&mut self, record: &StepRecord) -> Result<()> {
        self.0.accept(record)?;
        self.1.accept(record)
    }

    fn finish(&mut self) -> Result<()> {
        self.0.finish()?;
        self.1.finish()
    }
}

/// Discards everything.
pub struct NullSink;

impl RecordSink for NullSink {
    fn accept(&mut self, _record: &StepRecord) -> Result<()> {
        Ok(())
    }
}
