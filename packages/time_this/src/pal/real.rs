//! The build-selected clock.
//!
//! By default timestamps come from the platform steady clock
//! ([`std::time::Instant`]), which is monotonic and immune to wall-clock
//! adjustments. That is the right default unless a platform-specific source
//! is proven better for the target.
//!
//! With the `mpi_wtime` Cargo feature enabled, timestamps come from the MPI
//! runtime wall clock instead. `MPI_Wtime` is resolved at link time only in
//! that configuration; default builds never reference the symbol. No
//! cross-process barrier is taken before reading it, so readings on different
//! ranks may be skewed relative to each other — single-process semantics
//! only.

#[cfg(not(feature = "mpi_wtime"))]
use std::sync::LazyLock;
#[cfg(not(feature = "mpi_wtime"))]
use std::time::Instant;

use crate::pal::abstractions::{TimeSource, Timestamp};

#[cfg(feature = "mpi_wtime")]
unsafe extern "C" {
    /// Wall clock exported by the MPI runtime: seconds since an arbitrary
    /// epoch.
    #[allow(non_snake_case, reason = "matches the symbol name exported by the MPI runtime")]
    fn MPI_Wtime() -> f64;
}

/// Epoch for the steady-clock source; timestamps are seconds since the first
/// reading taken by this process.
#[cfg(not(feature = "mpi_wtime"))]
static PROCESS_EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Real implementation of the time source using the build-selected clock.
#[derive(Clone, Debug)]
pub(crate) struct RealTimeSource;

impl TimeSource for RealTimeSource {
    #[cfg(not(feature = "mpi_wtime"))]
    #[cfg_attr(test, mutants::skip)] // Readings from the real clock cannot be asserted exactly.
    fn now(&self) -> Timestamp {
        Timestamp::from_seconds(PROCESS_EPOCH.elapsed().as_secs_f64())
    }

    #[cfg(feature = "mpi_wtime")]
    fn now(&self) -> Timestamp {
        // SAFETY: MPI_Wtime takes no arguments, reads only the runtime clock
        // and may be called from any thread per the MPI specification.
        Timestamp::from_seconds(unsafe { MPI_Wtime() })
    }
}

#[cfg(test)]
#[cfg(not(feature = "mpi_wtime"))]
#[cfg(not(miri))] // Miri cannot talk to the real platform clock.
mod tests {
    use super::*;

    #[test]
    fn readings_are_monotonically_non_decreasing() {
        let source = RealTimeSource;

        let first = source.now();
        let second = source.now();

        assert!(second >= first);
    }

    #[test]
    fn readings_advance_across_a_sleep() {
        let source = RealTimeSource;

        let before = source.now();
        std::thread::sleep(std::time::Duration::from_millis(10));
        let after = source.now();

        assert!(after.saturating_seconds_since(before) >= 0.010);
    }
}
