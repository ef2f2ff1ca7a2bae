//! Full tour of the unit ladder and the result wrapper shapes.
//!
//! Times all four callable shapes (void/value-returning, with and without a
//! curried argument), then walks one measurement through the fractional
//! ladder, the truncating whole-count units and the extreme units.
//!
//! Run with: `cargo run --example time_this_units`.

#![allow(
    clippy::arithmetic_side_effects,
    reason = "this is example code that does not need production-level safety"
)]

use std::time::Duration;

use time_this::Timed;
use time_this::units::{
    Centuries, Days, Decades, Hours, Microseconds, Milliseconds, Millennia, Minutes, Nanoseconds,
    Picoseconds, Seconds, Weeks, WholeHours, WholeMicroseconds, WholeMilliseconds, WholeMinutes,
    WholeNanoseconds, WholeSeconds, Years,
};

fn do_long_task() {
    std::thread::sleep(Duration::from_millis(750));
}

fn do_long_task_with_param(pause: Duration) {
    std::thread::sleep(pause);
}

fn do_long_task_with_return() -> u32 {
    std::thread::sleep(Duration::from_secs(1));
    42
}

fn do_long_task_with_return_and_param(pause: Duration) -> u32 {
    std::thread::sleep(pause);
    42
}

fn main() {
    println!("=== time_this full demo ===");
    println!();

    let pause = Duration::from_millis(750);

    // Time all four shapes once. Arguments are curried into closures.
    let void_no_param = time_this::time_void(do_long_task);
    let void_with_param = time_this::time_void(move || do_long_task_with_param(pause));
    let return_no_param = time_this::time(do_long_task_with_return);
    let return_with_param = time_this::time(move || do_long_task_with_return_and_param(pause));

    // 1. Recommended and simplest: direct fractional seconds.
    println!("[1] Direct access - fractional seconds:");
    println!("    void, no param:         {}", void_no_param.elapsed());
    println!("    void, curried param:    {}", void_with_param.elapsed());
    println!(
        "    return, no param:       {} (returned {})",
        return_no_param.elapsed(),
        return_no_param.value()
    );
    println!(
        "    return, curried param:  {} (returned {})",
        return_with_param.elapsed(),
        return_with_param.value()
    );
    println!();

    // 2. Full-precision ladder units: no truncation anywhere.
    println!("[2] Full-precision ladder units (no truncation):");
    let result = &return_with_param;
    print_fractional(result);
    println!();

    // 3. Whole-count units: shows the deliberate truncation.
    println!("[3] Whole-count units (truncate fractions):");
    println!("    {} (truncated)", result.view::<WholeNanoseconds>());
    println!("    {} (truncated)", result.view::<WholeMicroseconds>());
    println!("    {} (truncated)", result.view::<WholeMilliseconds>());
    println!("    {} (truncated)", result.view::<WholeSeconds>());
    println!("    {} (truncated)", result.view::<WholeMinutes>());
    println!("    {} (truncated)", result.view::<WholeHours>());
    println!();

    // 4. High-resolution capture, displayed in the unit of choice.
    println!("[4] High-resolution capture, displayed as you like:");
    let micros = result.view::<Microseconds>().to::<f64>();
    let millis = result.view::<Milliseconds>().to::<f64>();
    println!("    {} seconds (from µs)", micros / 1_000_000.0);
    println!("    {millis} milliseconds");
    println!("    {} milliseconds (from µs)", micros / 1000.0);
    println!();

    // 5. Extreme units, for very long-running jobs.
    println!("[5] Extreme units (for long-running jobs):");
    println!("    {}", result.view::<Decades>());
    println!("    {}", result.view::<Centuries>());
    println!("    {}", result.view::<Millennia>());
    println!();

    println!("=== end of demo ===");
}

fn print_fractional(result: &Timed<u32>) {
    println!("    {}", result.view::<Picoseconds>());
    println!("    {}", result.view::<Nanoseconds>());
    println!("    {}", result.view::<Microseconds>());
    println!("    {}", result.view::<Milliseconds>());
    println!("    {}", result.view::<Seconds>());
    println!("    {}", result.view::<Minutes>());
    println!("    {}", result.view::<Hours>());
    println!("    {}", result.view::<Days>());
    println!("    {}", result.view::<Weeks>());
    println!("    {}", result.view::<Years>());
    println!("    {}", result.view::<Decades>());
    println!("    {}", result.view::<Centuries>());
    println!("    {}", result.view::<Millennia>());
}
