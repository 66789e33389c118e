use std::io::{self, Stdout, Write};

use super::RecordSink;
use crate::error::Result;
use crate::sim::record::StepRecord;

/// Human-readable, one line per step.
pub struct ConsoleSink<W: Write> {
    writer: W,
}

impl ConsoleSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

pub fn format_record(r: &StepRecord) -> String {
    format!(
        "time = {:.2} s, mass = {:.2} kg, altitude = {:.2} m, velocity = {:.2} m/s, Mach = {:.2}",
        r.time, r.mass, r.altitude, r.velocity, r.mach
    )
}

impl<W: Write> RecordSink for ConsoleSink<W> {
    fn accept(&mut self, record: &StepRecord) -> Result<()> {
        writeln!(self.writer, "{}", format_record(record))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
