use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use super::RecordSink;
use crate::error::Result;
use crate::sim::record::StepRecord;

/// Summary statistics accumulated from the flight log.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FlightSummary {
    pub steps: usize,
    pub max_altitude_m: f64,
    pub max_altitude_time: f64,
    pub max_velocity: f64,
    pub max_mach: f64,
    pub max_accel: f64,
    pub flight_time: f64,
    pub final_mass: f64,
    pub final_altitude: f64,
    pub final_velocity: f64,
    #[serde(skip)]
    last: Option<StepRecord>,
}

impl FlightSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute summary from a recorded flight log.
    pub fn from_records(records: &[StepRecord]) -> Self {
        let mut summary = Self::new();
        for r in records {
            summary.add(r);
        }
        summary
    }

    pub fn add(&mut self, r: &StepRecord) {
        if self.last.is_none() || r.altitude > self.max_altitude_m {
            self.max_altitude_m = r.altitude;
            self.max_altitude_time = r.time;
        }
        if self.last.is_none() {
            self.max_velocity = r.velocity;
            self.max_mach = r.mach;
        } else {
            self.max_velocity = self.max_velocity.max(r.velocity);
            self.max_mach = self.max_mach.max(r.mach);
        }

        if let Some(prev) = self.last {
            let dt = r.time - prev.time;
            if dt > 0.0 {
                self.max_accel = self.max_accel.max((r.velocity - prev.velocity).abs() / dt);
            }
        }

        self.steps += 1;
        self.flight_time = r.time;
        self.final_mass = r.mass;
        self.final_altitude = r.altitude;
        self.final_velocity = r.velocity;
        self.last = Some(*r);
    }
}

impl RecordSink for FlightSummary {
    fn accept(&mut self, record: &StepRecord) -> Result<()> {
        self.add(record);
        Ok(())
    }
}

/// Write flight summary as pretty-printed JSON to a writer.
pub fn write_summary<W: Write>(writer: W, summary: &FlightSummary) -> Result<()> {
    serde_json::to_writer_pretty(writer, summary)?;
    Ok(())
}

/// Write flight summary JSON to a file.
pub fn write_summary_file<P: AsRef<Path>>(path: P, summary: &FlightSummary) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_summary(&mut writer, summary)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple_log() -> Vec<StepRecord> {
        vec![
            StepRecord {
                time: 0.0,
                mass: 50.0,
                altitude: 0.0,
                velocity: 0.0,
                mach: 0.0,
            },
            StepRecord {
                time: 1.0,
                mass: 49.5,
                altitude: 40.0,
                velocity: 80.0,
                mach: 0.235,
            },
            StepRecord {
                time: 2.0,
                mass: 49.0,
                altitude: 35.0,
                velocity: -10.0,
                mach: -0.029,
            },
        ]
    }

    #[test]
    fn summary_tracks_extremes_and_final_state() {
        let s = FlightSummary::from_records(&simple_log());
        assert_eq!(s.steps, 3);
        assert_eq!(s.max_altitude_m, 40.0);
        assert_eq!(s.max_altitude_time, 1.0);
        assert_eq!(s.max_velocity, 80.0);
        assert_eq!(s.max_mach, 0.235);
        assert_eq!(s.max_accel, 90.0);
        assert_eq!(s.flight_time, 2.0);
        assert_eq!(s.final_mass, 49.0);
        assert_eq!(s.final_velocity, -10.0);
    }

    #[test]
    fn falling_log_keeps_negative_maxima() {
        let log: Vec<StepRecord> = simple_log()
            .into_iter()
            .skip(2)
            .chain([StepRecord {
                time: 3.0,
                mass: 49.0,
                altitude: 20.0,
                velocity: -20.0,
                mach: -0.059,
            }])
            .collect();
        let s = FlightSummary::from_records(&log);
        assert_eq!(s.steps, 2);
        assert_eq!(s.max_velocity, -10.0);
        assert_eq!(s.max_mach, -0.029);
        assert_eq!(s.max_altitude_m, 35.0);
    }

    #[test]
    fn json_output_is_valid() {
        let s = FlightSummary::from_records(&simple_log());
        let mut buf = Vec::new();
        write_summary(&mut buf, &s).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["steps"], 3);
        assert_eq!(value["max_altitude_m"], 40.0);
        assert!(value.get("last").is_none());
    }
}
