//! The per-call result wrappers: (optional function result, elapsed duration).

use crate::elapsed::Elapsed;
use crate::units::TimeUnit;
use crate::view::TimeView;

/// The result of timing a value-returning callable: the moved function result
/// together with the measured duration.
///
/// Exactly one wrapper is produced per [`time()`][crate::time] call; its
/// duration is written exactly once, by the timer that was active during that
/// call, before the wrapper is returned. Wrappers have plain value semantics
/// and no cleanup obligation.
///
/// # Examples
///
/// ```
/// use time_this::units::Milliseconds;
///
/// let result = time_this::time(|| 6 * 7);
///
/// assert_eq!(*result.value(), 42);
/// let millis = result.view::<Milliseconds>().to::<f64>();
/// assert!(millis >= 0.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Timed<T> {
    value: T,
    elapsed: Elapsed,
}

impl<T> Timed<T> {
    pub(crate) fn new(value: T, elapsed: Elapsed) -> Self {
        Self { value, elapsed }
    }

    /// The timed callable's result.
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the wrapper, moving the function result out.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Consumes the wrapper, yielding the function result and the duration.
    #[must_use]
    pub fn into_parts(self) -> (T, Elapsed) {
        (self.value, self.elapsed)
    }

    /// The measured duration in its canonical form: fractional seconds.
    #[must_use]
    pub fn elapsed(&self) -> Elapsed {
        self.elapsed
    }

    /// The measured duration converted into unit `U`, per that unit's own
    /// storage policy (fractional, or truncating toward zero for whole-count
    /// units).
    #[must_use]
    pub fn elapsed_in<U: TimeUnit>(&self) -> U::Count {
        self.elapsed.in_unit::<U>()
    }

    /// A [`TimeView`] of the measured duration in unit `U`.
    #[must_use]
    pub fn view<U: TimeUnit>(&self) -> TimeView<U> {
        self.elapsed.view::<U>()
    }
}

/// The result of timing a void callable: only the measured duration.
///
/// There is no result field at all, so reading one is a compile-time error
/// rather than a runtime "missing value" case:
///
/// ```compile_fail
/// let run = time_this::time_void(|| ());
/// run.value(); // void callables carry no result
/// ```
///
/// The duration accessors mirror [`Timed`]:
///
/// ```
/// use time_this::units::WholeSeconds;
///
/// let run = time_this::time_void(|| {
///     // work measured here
/// });
///
/// assert!(run.elapsed().as_secs_f64() >= 0.0);
/// assert_eq!(run.view::<WholeSeconds>().count(), 0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TimedVoid {
    elapsed: Elapsed,
}

impl TimedVoid {
    pub(crate) fn new(elapsed: Elapsed) -> Self {
        Self { elapsed }
    }

    /// The measured duration in its canonical form: fractional seconds.
    #[must_use]
    pub fn elapsed(&self) -> Elapsed {
        self.elapsed
    }

    /// The measured duration converted into unit `U`, per that unit's own
    /// storage policy.
    #[must_use]
    pub fn elapsed_in<U: TimeUnit>(&self) -> U::Count {
        self.elapsed.in_unit::<U>()
    }

    /// A [`TimeView`] of the measured duration in unit `U`.
    #[must_use]
    pub fn view<U: TimeUnit>(&self) -> TimeView<U> {
        self.elapsed.view::<U>()
    }
}
