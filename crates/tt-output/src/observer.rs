//! `TraceOutput<W>`: bridges `TraceSink` to a `TraceWriter`.

use tt_core::TraceSequence;
use tt_sim::TraceSink;

use crate::row::TraceRow;
use crate::writer::TraceWriter;
use crate::{OutputError, OutputResult};

/// A [`TraceSink`] that writes every reported trace to any [`TraceWriter`]
/// backend (text or CSV).
///
/// Errors from the writer are stored internally because `TraceSink` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct TraceOutput<W: TraceWriter> {
    writer:     W,
    rows:       usize,
    last_error: Option<OutputError>,
}

impl<W: TraceWriter> TraceOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, last_error: None }
    }

    /// Number of trace rows handed to the writer so far.
    pub fn rows_written(&self) -> usize {
        self.rows
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect output after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TraceWriter> TraceSink for TraceOutput<W> {
    fn on_sequence(&mut self, seq: &TraceSequence) {
        let rows: Vec<TraceRow> = seq.traces.iter().map(TraceRow::from).collect();
        self.rows += rows.len();
        let result = self.writer.write_rows(&rows);
        self.store_err(result);
    }

    fn on_end(&mut self, travelers: u32, width: u32, height: u32) {
        let result = self
            .writer
            .write_end(travelers, width, height)
            .and_then(|()| self.writer.finish());
        self.store_err(result);
    }
}
