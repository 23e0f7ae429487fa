//! The `TraceWriter` trait implemented by all backend writers.

use crate::{OutputResult, TraceRow};

/// Trait implemented by the text and CSV writers.
///
/// Errors are stored by [`TraceOutput`][crate::TraceOutput] and retrieved
/// with [`TraceOutput::take_error`][crate::TraceOutput::take_error].
pub trait TraceWriter {
    /// Write the rows of one reported sequence.
    fn write_rows(&mut self, rows: &[TraceRow]) -> OutputResult<()>;

    /// Write the end-of-stream marker, if the format has one.
    fn write_end(&mut self, _travelers: u32, _width: u32, _height: u32) -> OutputResult<()> {
        Ok(())
    }

    /// Flush the underlying handle.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
