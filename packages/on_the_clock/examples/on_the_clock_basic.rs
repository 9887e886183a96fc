//! Simplified example demonstrating key `on_the_clock` types working together.
//!
//! This example shows how to use the main types in the `on_the_clock` package:
//! - `Session`: Manages wall-clock tracking state
//! - `Span`: Measures a region of code between creation and drop
//! - `Record`: Aggregates durations and answers statistics queries
//!
//! Run with: `cargo run --example on_the_clock_basic`.

use std::fmt::Write;
use std::hint::black_box;
use std::thread;
use std::time::Duration;

use on_the_clock::Session;

fn main() {
    println!("=== Wall-Clock Time Tracking Example ===");
    println!();

    // Create a tracking session - all measurements land in its registry.
    let session = Session::new();
    println!("✓ Created tracking session");
    println!();

    // Measure string formatting under an explicit name, several times over.
    for i in 0..5 {
        let _span = session.open("string_formatting");
        let mut result = String::new();
        for j in 0..2000 {
            write!(
                result,
                "String number {i}-{j} with some content that is longer to force more work. "
            )
            .unwrap();
        }
        black_box(result);
    }

    // Wrap a function so every call is measured under its qualified name.
    let mut timed_nap = session.wrap(short_nap);
    timed_nap();
    timed_nap();

    // Bracket a region manually when a scope does not fit.
    session.start("manual_phase");
    thread::sleep(Duration::from_millis(10));
    let elapsed = session.stop().expect("a measurement was started above");
    println!("✓ Manual phase took {elapsed:?}");
    println!();

    // Query individual statistics off a record.
    let formatting = session
        .record("string_formatting")
        .expect("measured above");
    println!("string_formatting:");
    println!("  calls: {}", formatting.call_count());
    println!("  mean:  {:?}", formatting.mean());
    println!("  min:   {:?}", formatting.min());
    println!("  max:   {:?}", formatting.max());
    println!("  last:  {:?}", formatting.last());
    println!("  total: {:?}", formatting.total_time());
    println!();

    // Or enumerate every record collected so far, in first-seen order.
    for record in session.records() {
        println!("{record}");
    }
    println!();

    // Print the full report.
    session.print_to_stdout();
}

fn short_nap() {
    thread::sleep(Duration::from_millis(5));
}
