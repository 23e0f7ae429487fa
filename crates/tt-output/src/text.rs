//! Plain-text output backend: the line-oriented trace stream.
//!
//! ```text
//! 0.000000  0  3  7 A
//! 0.000000 -1  4  4 #
//! ...
//! -1 15 15 15
//! ```
//!
//! Columns are seconds since the start, owner id (`-(k + 1)` for trap `k`),
//! x, y and symbol.  The last line is `-1 <travelers> <width> <height>`.

use std::io::Write;

use crate::writer::TraceWriter;
use crate::{OutputResult, TraceRow};

/// Writes trace lines to any [`Write`] handle.
pub struct TextWriter<W: Write> {
    out:      W,
    finished: bool,
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    /// Unwrap the inner handle (e.g. to inspect a buffer after the run).
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TraceWriter for TextWriter<W> {
    fn write_rows(&mut self, rows: &[TraceRow]) -> OutputResult<()> {
        for row in rows {
            writeln!(
                self.out,
                "{:8.6} {:2} {:2} {:2} {}",
                row.timestamp_secs, row.id, row.x, row.y, row.symbol,
            )?;
        }
        Ok(())
    }

    fn write_end(&mut self, travelers: u32, width: u32, height: u32) -> OutputResult<()> {
        writeln!(self.out, "-1 {travelers} {width} {height}")?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
