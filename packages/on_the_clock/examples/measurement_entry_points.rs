//! Demonstrates the three equivalent measurement entry points and how their
//! results merge into reports.
//!
//! Run with: `cargo run --example measurement_entry_points`.

use std::hint::black_box;
use std::time::Duration;

use on_the_clock::{DEFAULT_TARGET, Report, Session};

fn main() {
    let session = Session::new();

    // Entry point 1: a named span around a block.
    {
        let _span = session.open("block_work");
        busy_work(10_000);
    }

    // Entry point 2: a wrapped function, measured on every call.
    let mut timed = session.wrap(busy_default);
    timed();
    timed();
    timed();

    // Entry point 3: manual bracketing, matched in stack order.
    session.start("outer_phase");
    session.start("inner_phase");
    busy_work(5_000);
    session.stop().expect("inner_phase is pending");
    session.stop().expect("outer_phase is pending");

    // An unnamed scope files its measurement under the default target.
    {
        let _span = session.scope();
        busy_work(1_000);
    }
    println!(
        "default target measured {} time(s)",
        session
            .record(DEFAULT_TARGET)
            .expect("the unnamed scope above recorded it")
            .call_count()
    );
    println!();

    // Reports from independent sessions can be merged for a combined view.
    let other_session = Session::new();
    other_session.record_duration("block_work", Duration::from_millis(3));

    let merged = Report::merge(&session.to_report(), &other_session.to_report());
    println!("{merged}");
}

fn busy_work(limit: u64) {
    black_box((0..limit).sum::<u64>());
}

fn busy_default() {
    busy_work(2_000);
}
