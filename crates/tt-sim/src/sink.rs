//! Destination for reported trace sequences.

use tt_core::TraceSequence;

/// Callbacks invoked by the [`Reporter`][crate::Reporter] as sequences
/// arrive.
///
/// Methods have default no-op implementations so implementors only need to
/// override what they care about.  Sinks cannot fail the run; a sink that
/// writes to I/O keeps its first error and exposes it after the run (see
/// `tt_output::TraceOutput`).
///
/// # Example: live counter
///
/// ```rust,ignore
/// struct Counter(usize);
///
/// impl TraceSink for Counter {
///     fn on_sequence(&mut self, seq: &TraceSequence) {
///         self.0 += seq.len();
///     }
/// }
/// ```
pub trait TraceSink {
    /// Called once per received sequence, in arrival order.
    fn on_sequence(&mut self, _seq: &TraceSequence) {}

    /// Called once after the last expected sequence.
    fn on_end(&mut self, _travelers: u32, _width: u32, _height: u32) {}
}

/// A [`TraceSink`] that discards everything.
pub struct NoopSink;

impl TraceSink for NoopSink {}

/// A [`TraceSink`] that keeps every sequence in memory.
#[derive(Default, Debug)]
pub struct CollectingSink {
    pub sequences: Vec<TraceSequence>,
    /// `(travelers, width, height)` once the run has ended.
    pub ended:     Option<(u32, u32, u32)>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TraceSink for CollectingSink {
    fn on_sequence(&mut self, seq: &TraceSequence) {
        self.sequences.push(seq.clone());
    }

    fn on_end(&mut self, travelers: u32, width: u32, height: u32) {
        self.ended = Some((travelers, width, height));
    }
}
