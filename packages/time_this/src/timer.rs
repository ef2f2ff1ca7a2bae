//! The stopwatch whose lifetime brackets exactly one timed call.

use crate::elapsed::Elapsed;
use crate::pal::{TimeSource, TimeSourceFacade, Timestamp};

/// Measures the elapsed wall-clock interval of one scope and deposits it into
/// caller-owned storage.
///
/// The timer arms at construction (capturing the start timestamp from the
/// active time source) and fires exactly once, at drop, writing the elapsed
/// time through the borrowed slot. There are no intermediate states and the
/// transition is irreversible. Drop runs on every exit path, including
/// unwinding after a panic in the timed code, so the slot then holds the time
/// up to the failure point.
///
/// Construction is `pub(crate)`: only the dispatch entry points can arm a
/// timer. The mutable borrow makes it impossible for a timer to outlive the
/// storage it targets.
#[must_use = "measures between construction and drop"]
#[derive(Debug)]
pub(crate) struct ScopedTimer<'slot> {
    start: Timestamp,
    slot: &'slot mut Elapsed,
    source: TimeSourceFacade,
}

impl<'slot> ScopedTimer<'slot> {
    pub(crate) fn new(slot: &'slot mut Elapsed, source: TimeSourceFacade) -> Self {
        let start = source.now();

        Self {
            start,
            slot,
            source,
        }
    }
}

impl Drop for ScopedTimer<'_> {
    fn drop(&mut self) {
        let end = self.source.now();
        *self.slot = Elapsed::from_secs_f64(end.saturating_seconds_since(self.start));
    }
}
