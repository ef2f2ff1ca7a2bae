//! The public entry points: time one callable, get one wrapper back.

use crate::elapsed::Elapsed;
use crate::pal::TimeSourceFacade;
use crate::timed::{Timed, TimedVoid};
use crate::timer::ScopedTimer;

/// Times a value-returning callable, yielding its result by move together
/// with the measured wall-clock duration.
///
/// The callable must take no arguments; pre-bind (curry) any arguments into a
/// closure first. Which wrapper shape comes back is decided entirely at
/// compile time by the entry point used — there is no runtime branch. The
/// call blocks until the callable returns or panics; there is no cancellation
/// and no timeout.
///
/// If the callable panics, the timer still fires during unwinding but no
/// wrapper is produced: the panic propagates to the caller unchanged, never
/// wrapped, translated or suppressed.
///
/// # Examples
///
/// ```
/// use time_this::units::Milliseconds;
///
/// let input = 6;
/// let result = time_this::time(move || input * 7); // argument curried in
///
/// assert_eq!(*result.value(), 42);
/// println!(
///     "multiplication took {} ms",
///     result.view::<Milliseconds>().to::<f64>()
/// );
/// ```
#[must_use = "the measurement is discarded if the result is dropped"]
pub fn time<F, T>(func: F) -> Timed<T>
where
    F: FnOnce() -> T,
{
    time_with_source(func, TimeSourceFacade::real())
}

/// Times a void callable, yielding only the measured wall-clock duration.
///
/// Identical to [`time()`] except that the returned wrapper carries no result
/// field; see [`TimedVoid`].
///
/// # Examples
///
/// ```
/// use time_this::units::Microseconds;
///
/// let run = time_this::time_void(|| {
///     std::thread::sleep(std::time::Duration::from_millis(5));
/// });
///
/// assert!(run.view::<Microseconds>().to::<f64>() >= 5000.0);
/// ```
#[must_use = "the measurement is discarded if the result is dropped"]
pub fn time_void<F>(func: F) -> TimedVoid
where
    F: FnOnce(),
{
    time_void_with_source(func, TimeSourceFacade::real())
}

pub(crate) fn time_with_source<F, T>(func: F, source: TimeSourceFacade) -> Timed<T>
where
    F: FnOnce() -> T,
{
    let mut elapsed = Elapsed::ZERO;

    let value = {
        let _timer = ScopedTimer::new(&mut elapsed, source);
        func()
    };

    Timed::new(value, elapsed)
}

pub(crate) fn time_void_with_source<F>(func: F, source: TimeSourceFacade) -> TimedVoid
where
    F: FnOnce(),
{
    let mut elapsed = Elapsed::ZERO;

    {
        let _timer = ScopedTimer::new(&mut elapsed, source);
        func();
    }

    TimedVoid::new(elapsed)
}
