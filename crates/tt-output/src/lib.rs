//! `tt-output`: trace stream writers for the torus travelers simulation.
//!
//! | Writer        | Format                                                   |
//! |---------------|----------------------------------------------------------|
//! | `TextWriter`  | `{secs:8.6} {id:2} {x:2} {y:2} {sym}` lines, `-1 …` end  |
//! | `CsvWriter`   | `timestamp,id,x,y,symbol` rows                           |
//!
//! Both implement [`TraceWriter`] and are driven by [`TraceOutput`], which
//! implements `tt_sim::TraceSink`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tt_output::TextSink;
//!
//! let mut sink = TextSink::text(std::io::stdout().lock());
//! sim.run(&mut sink).await?;
//! sink.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;

#[cfg(test)]
mod tests;

use std::fs::File;
use std::io::Write;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceOutput;
pub use row::TraceRow;
pub use text::TextWriter;
pub use writer::TraceWriter;

/// Trace sink printing the text stream.
pub type TextSink<W> = TraceOutput<TextWriter<W>>;

/// Trace sink writing a CSV file.
pub type CsvSink<W = File> = TraceOutput<CsvWriter<W>>;

impl<W: Write> TraceOutput<TextWriter<W>> {
    pub fn text(out: W) -> Self {
        TraceOutput::new(TextWriter::new(out))
    }
}
