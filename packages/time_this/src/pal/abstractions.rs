//! Time source trait definitions.

use std::fmt::Debug;

/// An opaque timestamp drawn from the active time source.
///
/// Carried as a floating-point count of seconds since an arbitrary fixed
/// epoch, monotonically non-decreasing for the duration of one process run.
/// Timestamps never escape the crate; they exist only as subtraction
/// operands.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub(crate) struct Timestamp {
    seconds: f64,
}

impl Timestamp {
    pub(crate) fn from_seconds(seconds: f64) -> Self {
        Self { seconds }
    }

    /// Seconds elapsed since an earlier timestamp, clamped at zero if the
    /// source misbehaves and runs backwards.
    #[allow(
        clippy::arithmetic_side_effects,
        reason = "floating-point subtraction cannot panic"
    )]
    pub(crate) fn saturating_seconds_since(self, earlier: Self) -> f64 {
        (self.seconds - earlier.seconds).max(0.0)
    }
}

/// Provides the current time.
///
/// Implementations must be stateless read-only queries, safe for concurrent
/// reads from multiple threads.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait TimeSource: Debug + Send {
    /// Captures the current instant from the underlying clock.
    fn now(&self) -> Timestamp;
}
