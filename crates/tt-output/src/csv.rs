//! CSV output backend.
//!
//! One row per trace under the header `timestamp,id,x,y,symbol`.  There is
//! no end marker; the file ends with the last row.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::writer::TraceWriter;
use crate::{OutputResult, TraceRow};

const HEADER: [&str; 5] = ["timestamp", "id", "x", "y", "symbol"];

/// Writes trace rows as CSV.
pub struct CsvWriter<W: Write = File> {
    rows:     Writer<W>,
    finished: bool,
}

impl CsvWriter<File> {
    /// Open (or create) the file at `path` and write the header row.
    pub fn new(path: &Path) -> OutputResult<Self> {
        let mut rows = Writer::from_path(path)?;
        rows.write_record(HEADER)?;
        Ok(Self { rows, finished: false })
    }
}

impl<W: Write> CsvWriter<W> {
    /// Write to an already-open handle, header first.
    pub fn from_writer(out: W) -> OutputResult<Self> {
        let mut rows = Writer::from_writer(out);
        rows.write_record(HEADER)?;
        Ok(Self { rows, finished: false })
    }
}

impl<W: Write> TraceWriter for CsvWriter<W> {
    fn write_rows(&mut self, rows: &[TraceRow]) -> OutputResult<()> {
        for row in rows {
            self.rows.write_record(&[
                format!("{:.6}", row.timestamp_secs),
                row.id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.symbol.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}
