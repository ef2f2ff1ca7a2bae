//! The canonical duration: fractional seconds, the single source of truth.

use std::fmt;
use std::time::Duration;

use crate::units::{TimeUnit, UnitCount};
use crate::view::TimeView;

/// One measured elapsed interval, counted in fractional seconds.
///
/// This is the canonical representation every other unit converts from.
/// Values are immutable once computed and have plain value semantics: `Copy`,
/// no background references, no cleanup obligation. A duration produced by a
/// timed call is never negative.
///
/// # Examples
///
/// ```
/// use time_this::units::{Milliseconds, WholeSeconds};
/// use time_this::Elapsed;
///
/// let elapsed = Elapsed::from_secs_f64(0.75);
///
/// assert!((elapsed.as_secs_f64() - 0.75).abs() < f64::EPSILON);
/// assert!((elapsed.in_unit::<Milliseconds>() - 750.0).abs() < 1e-9);
/// assert_eq!(elapsed.in_unit::<WholeSeconds>(), 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Elapsed {
    seconds: f64,
}

impl Elapsed {
    /// A zero-length interval.
    pub const ZERO: Self = Self { seconds: 0.0 };

    /// Wraps a fractional-seconds value as a canonical duration.
    #[must_use]
    pub fn from_secs_f64(seconds: f64) -> Self {
        Self { seconds }
    }

    /// The raw canonical count: fractional seconds, full precision.
    #[must_use]
    pub fn as_secs_f64(&self) -> f64 {
        self.seconds
    }

    /// Converts the duration into unit `U`, applying that unit's own storage
    /// policy: fractional units keep full `f64` precision, whole-count units
    /// truncate toward zero.
    #[must_use]
    #[allow(
        clippy::arithmetic_side_effects,
        reason = "floating-point division cannot panic"
    )]
    pub fn in_unit<U: TimeUnit>(&self) -> U::Count {
        U::Count::from_scaled(self.seconds / U::SECONDS_PER_UNIT)
    }

    /// A [`TimeView`] over the duration as-converted into unit `U`.
    ///
    /// The view captures the converted count at this point and never
    /// re-scales it.
    #[must_use]
    pub fn view<U: TimeUnit>(&self) -> TimeView<U> {
        TimeView::new(self.in_unit::<U>())
    }

    /// Converts to a [`std::time::Duration`], clamping negative values to
    /// zero.
    #[must_use]
    pub fn to_std(&self) -> Duration {
        Duration::from_secs_f64(self.seconds.max(0.0))
    }
}

impl From<Duration> for Elapsed {
    fn from(duration: Duration) -> Self {
        Self::from_secs_f64(duration.as_secs_f64())
    }
}

impl From<Elapsed> for Duration {
    fn from(elapsed: Elapsed) -> Self {
        elapsed.to_std()
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} s", self.seconds)
    }
}
