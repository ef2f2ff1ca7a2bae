//! Times a single function call, returning its result together with a
//! unit-convertible elapsed duration.
//!
//! Hand [`time()`] any zero-argument callable and get back the callable's
//! result plus the wall-clock time it took, as one value. Void callables go
//! through [`time_void()`] and come back as duration only — the result field
//! does not exist, so misreading it is a compile-time error rather than a
//! runtime surprise.
//!
//! # Key properties
//!
//! - **One call, one measurement**: this is not a profiler or a statistics
//!   engine; each invocation measures exactly one elapsed interval.
//! - **Truncation is opt-in, never accidental**: the fractional unit ladder
//!   ([`units::Picoseconds`] through [`units::Millennia`]) stores counts as
//!   `f64`, so conversions round-trip within floating-point error. The
//!   whole-count units ([`units::WholeSeconds`] and friends) truncate toward
//!   zero, silently and by documented design.
//! - **Panics propagate unchanged**: if the timed callable panics, no wrapper
//!   is produced and the panic reaches the caller as-is.
//! - **Build-time clock selection**: the platform steady clock by default;
//!   the MPI runtime wall clock (`MPI_Wtime`) with the `mpi_wtime` feature.
//!
//! # Basic usage
//!
//! ```
//! use std::time::Duration;
//!
//! use time_this::units::{Milliseconds, WholeSeconds};
//!
//! let result = time_this::time(|| {
//!     std::thread::sleep(Duration::from_millis(25));
//!     6 * 7
//! });
//!
//! assert_eq!(*result.value(), 42);
//! assert!(result.elapsed().as_secs_f64() >= 0.025);
//!
//! // Fractional view: full precision.
//! println!("took {} ms", result.view::<Milliseconds>().to::<f64>());
//!
//! // Whole-count view: truncates toward zero.
//! assert_eq!(result.view::<WholeSeconds>().count(), 0);
//! ```
//!
//! # Void callables
//!
//! ```
//! use std::time::Duration;
//!
//! let run = time_this::time_void(|| {
//!     std::thread::sleep(Duration::from_millis(5));
//! });
//!
//! assert!(run.elapsed().as_secs_f64() >= 0.005);
//! ```
//!
//! # Currying
//!
//! Callables taking arguments are pre-bound into closures by the caller; the
//! entry points never manage argument binding:
//!
//! ```
//! fn add(a: u64, b: u64) -> u64 {
//!     a + b
//! }
//!
//! let (a, b) = (40, 2);
//! let result = time_this::time(move || add(a, b));
//! assert_eq!(*result.value(), 42);
//! ```
//!
//! # Threading
//!
//! Each call owns its own duration slot and result wrapper; there is no
//! shared mutable state between calls, so concurrent calls on different
//! threads are safe. The call itself is synchronous and blocks until the
//! callable finishes.

mod dispatch;
mod elapsed;
mod pal;
mod timed;
mod timer;
pub mod units;
mod view;

pub use dispatch::{time, time_void};
pub use elapsed::Elapsed;
pub use timed::{Timed, TimedVoid};
pub use units::{TimeUnit, UnitCount};
pub use view::{FromCount, TimeView};
