//! A typed window over one duration already expressed in a chosen unit.

use std::fmt;
use std::marker::PhantomData;

use crate::units::{TimeUnit, UnitCount};

/// A duration count pinned to one unit, with a single conversion operation
/// into a caller-chosen representation.
///
/// The wrapped magnitude is as-converted at construction time and is never
/// re-scaled afterwards; views are `Copy` and immutable, so repeated reads
/// always agree.
///
/// # Examples
///
/// ```
/// use time_this::units::{Milliseconds, WholeSeconds};
/// use time_this::Elapsed;
///
/// let elapsed = Elapsed::from_secs_f64(0.75);
///
/// let millis = elapsed.view::<Milliseconds>();
/// assert!((millis.to::<f64>() - 750.0).abs() < 1e-9);
///
/// // Whole-count units truncate toward zero, silently and by design.
/// let seconds = elapsed.view::<WholeSeconds>();
/// assert_eq!(seconds.to::<i64>(), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeView<U: TimeUnit> {
    count: U::Count,
    _unit: PhantomData<U>,
}

impl<U: TimeUnit> TimeView<U> {
    pub(crate) fn new(count: U::Count) -> Self {
        Self {
            count,
            _unit: PhantomData,
        }
    }

    /// The raw stored count, in this view's own storage type, without
    /// narrowing.
    #[must_use]
    pub fn count(&self) -> U::Count {
        self.count
    }

    /// Converts the count to the requested representation.
    ///
    /// `R` must be a primitive numeric type or exactly this view's own type
    /// (in which case the view is returned unchanged); anything else fails to
    /// compile. Converting to a floating-point type loses nothing beyond the
    /// unit's own storage precision; converting to an integer type narrows by
    /// the standard `as`-cast rules, truncating toward zero. Whether the
    /// magnitude is reasonable for the chosen representation is the caller's
    /// judgement — requesting picoseconds of a months-long interval is not
    /// guarded against.
    ///
    /// ```compile_fail
    /// use time_this::units::Seconds;
    /// use time_this::Elapsed;
    ///
    /// let view = Elapsed::from_secs_f64(1.5).view::<Seconds>();
    /// let _: String = view.to(); // not a numeric representation
    /// ```
    #[must_use]
    pub fn to<R>(&self) -> R
    where
        R: FromCount<U>,
    {
        R::from_count(self.count)
    }
}

impl<U: TimeUnit> fmt::Display for TimeView<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.count, U::SYMBOL)
    }
}

/// Representations a [`TimeView`] can be read back as.
///
/// This is the compile-time shape constraint on [`TimeView::to()`]: the
/// implementations below are the complete set of legal targets, so an
/// unsupported representation is a trait-bound failure, never a runtime one.
pub trait FromCount<U: TimeUnit>: Sized {
    /// Converts a stored count into this representation.
    fn from_count(count: U::Count) -> Self;
}

macro_rules! numeric_representation {
    ($($repr:ty),* $(,)?) => {
        $(
            impl<U: TimeUnit> FromCount<U> for $repr {
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss,
                    reason = "standard numeric narrowing is the documented conversion contract"
                )]
                fn from_count(count: U::Count) -> Self {
                    count.into_f64() as $repr
                }
            }
        )*
    };
}

numeric_representation!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<U: TimeUnit> FromCount<U> for TimeView<U> {
    fn from_count(count: U::Count) -> Self {
        Self::new(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Microseconds, Seconds, WholeSeconds};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn count_returns_raw_storage() {
        let view = TimeView::<Seconds>::new(0.75);
        assert_close(view.count(), 0.75);

        let view = TimeView::<WholeSeconds>::new(3);
        assert_eq!(view.count(), 3);
    }

    #[test]
    fn floating_point_representation_is_lossless() {
        let view = TimeView::<Microseconds>::new(750_000.25);
        assert_close(view.to::<f64>(), 750_000.25);
    }

    #[test]
    fn integer_representation_truncates_toward_zero() {
        let view = TimeView::<Seconds>::new(0.75);
        assert_eq!(view.to::<i64>(), 0);
        assert_eq!(view.to::<u8>(), 0);

        let view = TimeView::<Seconds>::new(42.9);
        assert_eq!(view.to::<i64>(), 42);
    }

    #[test]
    fn own_type_representation_is_identity() {
        let view = TimeView::<Seconds>::new(1.5);
        let same: TimeView<Seconds> = view.to();
        assert_eq!(same, view);
    }

    #[test]
    fn repeated_conversions_agree() {
        let view = TimeView::<Microseconds>::new(750_000.0);

        let first: f64 = view.to();
        let second: f64 = view.to();
        assert_close(first, second);

        assert_eq!(view.to::<u64>(), view.to::<u64>());
    }

    #[test]
    fn displays_count_with_symbol() {
        let view = TimeView::<WholeSeconds>::new(42);
        assert_eq!(view.to_string(), "42 s");
    }

    // Views are plain values and safe to hand across threads.
    static_assertions::assert_impl_all!(TimeView<Seconds>: Send, Sync, Copy);
}
