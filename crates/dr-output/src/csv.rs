//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `progress.csv`
//! - `transitions.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, ProgressRow, TransitionRow};

/// Writes session telemetry to two CSV files.
pub struct CsvWriter {
    progress:    Writer<File>,
    transitions: Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut progress = Writer::from_path(dir.join("progress.csv"))?;
        progress.write_record(["frame", "state", "consumed", "initial", "percent"])?;

        let mut transitions = Writer::from_path(dir.join("transitions.csv"))?;
        transitions.write_record(["frame", "from", "to"])?;

        Ok(Self {
            progress,
            transitions,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_progress(&mut self, row: &ProgressRow) -> OutputResult<()> {
        self.progress.write_record(&[
            row.frame.to_string(),
            row.state.as_str().to_owned(),
            row.consumed.to_string(),
            row.initial.to_string(),
            format!("{:.1}", row.percent),
        ])?;
        Ok(())
    }

    fn write_transition(&mut self, row: &TransitionRow) -> OutputResult<()> {
        self.transitions.write_record([
            row.frame.to_string().as_str(),
            row.from.as_str(),
            row.to.as_str(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.progress.flush()?;
        self.transitions.flush()?;
        Ok(())
    }
}
