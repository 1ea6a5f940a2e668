//! Counts the full event set around a single `println!`.
//!
//! Run with `RUST_LOG=debug` to see each counter being opened.

use std::error::Error;
use std::process::ExitCode;

use perf_group::count::CounterGroup;
use perf_group::event::FULL_SET;

fn main() -> ExitCode {
    env_logger::init();

    let mut group = match CounterGroup::open(FULL_SET) {
        Ok(group) => group,
        Err(e) => {
            report(&e);
            return ExitCode::FAILURE;
        }
    };

    println!("Measuring counts for this println");

    match group.stop() {
        Ok(snapshot) => {
            print!("{}", snapshot.format());
            ExitCode::SUCCESS
        }
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn report(e: &dyn Error) {
    eprint!("{}", e);
    let mut source = e.source();
    while let Some(it) = source {
        eprint!(": {}", it);
        source = it.source();
    }
    eprintln!();
}
