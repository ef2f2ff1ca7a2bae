//! The unit ladder: named duration units, each a fixed scale factor against
//! the canonical base unit (seconds).
//!
//! The ladder is a closed, static table. Units exist only as type-level
//! conversion targets; they have no values and no runtime lifecycle. Adding a
//! unit means adding a tag type here — the set is not extensible at runtime or
//! from outside this crate.
//!
//! Two families are provided:
//!
//! - Fractional units ([`Picoseconds`] through [`Millennia`]) store their
//!   count as `f64`, so converting a duration into any of them and back
//!   reproduces the original value within floating-point rounding error.
//! - Whole-count units ([`WholeNanoseconds`] through [`WholeHours`]) store
//!   their count as `i64` and truncate toward zero on conversion. The
//!   truncation is deliberate and silent; 0.75 seconds becomes exactly zero
//!   [`WholeSeconds`].

use std::fmt::{Debug, Display};

mod private {
    /// Prevents external implementations; the ladder is closed.
    pub trait Sealed {}
}

/// Numeric storage for a unit's count.
///
/// Implemented for `f64` (fractional units, no truncation) and `i64`
/// (whole-count units, truncation toward zero). Sealed; the storage policies
/// are part of the ladder definition.
pub trait UnitCount:
    private::Sealed + Copy + Debug + Display + PartialEq + PartialOrd + Send + Sync + 'static
{
    /// Narrows a count already scaled into the target unit (but still carried
    /// as `f64`) into this storage, applying the storage's own policy.
    fn from_scaled(count: f64) -> Self;

    /// Widens the stored count back to `f64`.
    fn into_f64(self) -> f64;
}

impl private::Sealed for f64 {}

impl UnitCount for f64 {
    fn from_scaled(count: f64) -> Self {
        count
    }

    fn into_f64(self) -> f64 {
        self
    }
}

impl private::Sealed for i64 {}

impl UnitCount for i64 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "truncation toward zero is the whole-count storage policy"
    )]
    fn from_scaled(count: f64) -> Self {
        count as Self
    }

    #[allow(
        clippy::cast_precision_loss,
        reason = "counts large enough to lose precision are far outside realistic measurements"
    )]
    fn into_f64(self) -> f64 {
        self as f64
    }
}

/// A named duration unit: a type-level tag carrying its fixed ratio relative
/// to one second and the numeric storage its counts use.
///
/// Used only as a type parameter when converting an
/// [`Elapsed`][crate::Elapsed] value or constructing a
/// [`TimeView`][crate::TimeView]; unit types are never instantiated.
pub trait TimeUnit: private::Sealed + Copy + Debug + Send + Sync + 'static {
    /// Storage for counts expressed in this unit.
    type Count: UnitCount;

    /// Length of one unit, in seconds.
    const SECONDS_PER_UNIT: f64;

    /// Short suffix for display purposes.
    const SYMBOL: &'static str;
}

macro_rules! time_unit {
    ($(#[$meta:meta])* $name:ident, $count:ty, $seconds_per_unit:expr, $symbol:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub struct $name;

        impl private::Sealed for $name {}

        impl TimeUnit for $name {
            type Count = $count;
            const SECONDS_PER_UNIT: f64 = $seconds_per_unit;
            const SYMBOL: &'static str = $symbol;
        }
    };
}

time_unit!(
    /// 10⁻¹² seconds, fractional storage.
    ///
    /// Asking for picoseconds of a months-long interval is legal but the
    /// caller owns the judgement call; magnitude is not validated.
    Picoseconds, f64, 1e-12, "ps"
);
time_unit!(
    /// 10⁻⁹ seconds, fractional storage.
    Nanoseconds, f64, 1e-9, "ns"
);
time_unit!(
    /// 10⁻⁶ seconds, fractional storage.
    Microseconds, f64, 1e-6, "µs"
);
time_unit!(
    /// 10⁻³ seconds, fractional storage.
    Milliseconds, f64, 1e-3, "ms"
);
time_unit!(
    /// The canonical base unit, fractional storage.
    Seconds, f64, 1.0, "s"
);
time_unit!(
    /// 60 seconds, fractional storage.
    Minutes, f64, 60.0, "min"
);
time_unit!(
    /// 3600 seconds, fractional storage.
    Hours, f64, 3600.0, "h"
);
time_unit!(
    /// 86 400 seconds, fractional storage.
    Days, f64, 86_400.0, "d"
);
time_unit!(
    /// 604 800 seconds, fractional storage.
    Weeks, f64, 604_800.0, "wk"
);
time_unit!(
    /// The Gregorian average year of 365.2425 days, fractional storage.
    Years, f64, 31_556_952.0, "yr"
);
time_unit!(
    /// Ten Gregorian average years, fractional storage.
    Decades, f64, 315_569_520.0, "dec"
);
time_unit!(
    /// One hundred Gregorian average years, fractional storage.
    Centuries, f64, 3_155_695_200.0, "c"
);
time_unit!(
    /// One thousand Gregorian average years, fractional storage.
    Millennia, f64, 31_556_952_000.0, "ka"
);

time_unit!(
    /// 10⁻⁹ seconds, whole-count storage (truncates toward zero).
    WholeNanoseconds, i64, 1e-9, "ns"
);
time_unit!(
    /// 10⁻⁶ seconds, whole-count storage (truncates toward zero).
    WholeMicroseconds, i64, 1e-6, "µs"
);
time_unit!(
    /// 10⁻³ seconds, whole-count storage (truncates toward zero).
    WholeMilliseconds, i64, 1e-3, "ms"
);
time_unit!(
    /// Whole seconds, truncating toward zero: 0.75 seconds counts as 0.
    WholeSeconds, i64, 1.0, "s"
);
time_unit!(
    /// Whole 60-second minutes, truncating toward zero.
    WholeMinutes, i64, 60.0, "min"
);
time_unit!(
    /// Whole 3600-second hours, truncating toward zero.
    WholeHours, i64, 3600.0, "h"
);
