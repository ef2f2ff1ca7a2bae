//! Example code for the `README.md` file.
//!
//! This contains the same code that appears in the `time_this` package
//! `README.md`.

#![allow(
    clippy::arithmetic_side_effects,
    reason = "this is example code that does not need production-level safety"
)]

use std::time::Duration;

use time_this::units::{Milliseconds, WholeSeconds};

fn main() {
    // Time a value-returning callable; get the result and the duration back.
    let result = time_this::time(|| {
        std::thread::sleep(Duration::from_millis(250));
        6 * 7
    });

    println!("computed {} in {}", result.value(), result.elapsed());

    // Convert through the unit ladder without losing the fraction.
    println!("that is {} ms", result.view::<Milliseconds>().to::<f64>());

    // Whole-count units truncate toward zero, deliberately.
    println!(
        "or, as whole seconds: {}",
        result.view::<WholeSeconds>().to::<i64>()
    );

    // Void callables come back as duration only.
    let run = time_this::time_void(|| {
        std::thread::sleep(Duration::from_millis(100));
    });
    println!("void work took {}", run.elapsed());
}
