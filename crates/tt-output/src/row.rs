//! Plain data row type written by output backends.

use tt_core::Trace;

/// One trace flattened to the columns of the output stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceRow {
    /// Seconds since the run's time origin.
    pub timestamp_secs: f64,
    /// Agent index, or `-(k + 1)` for trap `k`.
    pub id:             i64,
    pub x:              u32,
    pub y:              u32,
    pub symbol:         char,
}

impl From<&Trace> for TraceRow {
    fn from(t: &Trace) -> Self {
        Self {
            timestamp_secs: t.timestamp.as_secs_f64(),
            id:             t.owner.wire_id(),
            x:              t.position.x,
            y:              t.position.y,
            symbol:         t.symbol.as_char(),
        }
    }
}
