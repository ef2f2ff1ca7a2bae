//! Integration tests for `time_this` against the real platform clock.
//!
//! Sleeps give a known-minimum nominal interval; upper bounds are generous
//! because test machines may be heavily loaded.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use time_this::units::{Microseconds, Milliseconds, Seconds, WholeSeconds};

/// Scheduling noise allowance on a loaded test machine.
const NOISE_BOUND: f64 = 0.5;

#[test]
#[cfg_attr(miri, ignore)] // Miri cannot use the real operating system clock.
fn void_sleep_is_measured_in_every_unit_shape() {
    // Concrete scenario from the design: a void callable sleeping 750 ms.
    let run = time_this::time_void(|| {
        std::thread::sleep(Duration::from_millis(750));
    });

    let seconds = run.elapsed().as_secs_f64();
    assert!(
        seconds >= 0.75,
        "sleep of 750 ms measured as only {seconds} s"
    );
    assert!(
        seconds < 0.75 + NOISE_BOUND,
        "sleep of 750 ms measured as implausible {seconds} s"
    );

    // Fractional microsecond view keeps the fraction.
    let micros = run.view::<Microseconds>().to::<f64>();
    assert!(
        micros >= 750_000.0 && micros < (0.75 + NOISE_BOUND) * 1_000_000.0,
        "microsecond view out of range: {micros}"
    );

    // Whole-seconds view truncates 0.75-ish seconds to exactly zero.
    assert_eq!(run.view::<WholeSeconds>().to::<i64>(), 0);
}

#[test]
#[cfg_attr(miri, ignore)] // Miri cannot use the real operating system clock.
fn value_returning_sleep_carries_both_halves() {
    // Concrete scenario from the design: 42 after sleeping one second.
    let result = time_this::time(|| {
        std::thread::sleep(Duration::from_secs(1));
        42_i32
    });

    assert_eq!(*result.value(), 42);

    let seconds = result.elapsed().as_secs_f64();
    assert!(seconds >= 1.0, "sleep of 1 s measured as only {seconds} s");
    assert!(
        seconds < 1.0 + NOISE_BOUND,
        "sleep of 1 s measured as implausible {seconds} s"
    );
}

#[test]
#[cfg_attr(miri, ignore)] // Miri cannot use the real operating system clock.
fn measurement_is_bounded_below_by_the_nominal_interval() {
    let run = time_this::time_void(|| {
        std::thread::sleep(Duration::from_millis(200));
    });

    let seconds = run.elapsed().as_secs_f64();
    assert!(seconds >= 0.2);
    assert!(seconds < 0.2 + NOISE_BOUND);
}

#[test]
#[cfg_attr(miri, ignore)] // Miri cannot use the real operating system clock.
fn curried_callable_times_like_any_other() {
    fn sleep_then_double(input: u64, pause: Duration) -> u64 {
        std::thread::sleep(pause);
        input * 2
    }

    let input = 21;
    let pause = Duration::from_millis(50);
    let result = time_this::time(move || sleep_then_double(input, pause));

    assert_eq!(*result.value(), 42);
    assert!(result.elapsed().as_secs_f64() >= 0.05);
}

#[test]
#[cfg_attr(miri, ignore)] // Miri cannot use the real operating system clock.
fn panicking_callable_propagates_without_a_wrapper() {
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        let _result = time_this::time::<_, u32>(|| panic!("work exploded"));
    }));

    let payload = outcome.expect_err("panic must propagate to the caller");
    let message = payload
        .downcast_ref::<&str>()
        .expect("panic payload should be the original message");
    assert_eq!(*message, "work exploded");
}

#[test]
#[cfg_attr(miri, ignore)] // Miri cannot use the real operating system clock.
fn views_are_idempotent() {
    let run = time_this::time_void(|| {
        std::thread::sleep(Duration::from_millis(20));
    });

    let view = run.view::<Milliseconds>();
    let first = view.to::<f64>();
    let second = view.to::<f64>();
    let third = view.to::<f64>();

    assert!((first - second).abs() < f64::EPSILON);
    assert!((second - third).abs() < f64::EPSILON);

    let whole = run.view::<WholeSeconds>();
    assert_eq!(whole.to::<i64>(), whole.to::<i64>());
}

#[test]
#[cfg_attr(miri, ignore)] // Miri cannot use the real operating system clock.
fn fractional_and_whole_views_of_one_run_stay_consistent() {
    let run = time_this::time_void(|| {
        std::thread::sleep(Duration::from_millis(30));
    });

    let seconds = run.view::<Seconds>().to::<f64>();
    let millis = run.view::<Milliseconds>().to::<f64>();

    // Same interval, two rungs of the ladder.
    assert!((millis - seconds * 1000.0).abs() < 1e-6);
}

#[test]
#[cfg_attr(miri, ignore)] // Miri cannot use the real operating system clock.
fn concurrent_calls_do_not_interfere() {
    let long_call = std::thread::spawn(|| {
        time_this::time_void(|| std::thread::sleep(Duration::from_millis(300)))
    });
    let short_call = std::thread::spawn(|| {
        time_this::time_void(|| std::thread::sleep(Duration::from_millis(50)))
    });

    let long_run = long_call.join().expect("timing thread must not panic");
    let short_run = short_call.join().expect("timing thread must not panic");

    assert!(long_run.elapsed().as_secs_f64() >= 0.3);
    assert!(short_run.elapsed().as_secs_f64() >= 0.05);
    assert!(short_run.elapsed().as_secs_f64() < 0.05 + NOISE_BOUND);
}
