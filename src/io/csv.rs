use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::RecordSink;
use crate::error::Result;
use crate::sim::record::StepRecord;

pub const HEADER: &str = "time, mass, altitude, velocity, Mach";

/// Comma-space separated flight log, two decimals per field.
///
/// Columns: time, mass, altitude, velocity, Mach
pub struct CsvSink<W: Write> {
    writer: W,
}

impl CsvSink<BufWriter<File>> {
    /// Create (or truncate) the file at `path` and write the header.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Self::new(BufWriter::new(file))
    }
}

impl<W: Write> CsvSink<W> {
    pub fn new(mut writer: W) -> Result<Self> {
        writeln!(writer, "{}", HEADER)?;
        Ok(Self { writer })
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RecordSink for CsvSink<W> {
    fn accept(&mut self, r: &StepRecord) -> Result<()> {
        writeln!(
            self.writer,
            "{:.2}, {:.2}, {:.2}, {:.2}, {:.2}",
            r.time, r.mass, r.altitude, r.velocity, r.mach
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
