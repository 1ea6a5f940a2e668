//! Count a group of hardware and software events with the `perf_event_open`
//! system call.
//!
//! A [`CounterGroup`][count::CounterGroup] opens one counter per event, the
//! first one leading the group, and starts them all at once. Stopping the
//! group disables it, reads every count with a single grouped read and closes
//! the counters.
//!
//! ## Example
//!
//! Count cycles and retired instructions of the (inefficient) fibonacci calculation.
//!
//! ```rust,no_run
//! use perf_group::count::CounterGroup;
//! use perf_group::event::Hardware;
//!
//! let mut group = CounterGroup::open([Hardware::CpuCycle, Hardware::Instr]).unwrap();
//!
//! fn fib(n: usize) -> usize {
//!     match n {
//!         0 => 0,
//!         1 => 1,
//!         n => fib(n - 1) + fib(n - 2),
//!     }
//! }
//! std::hint::black_box(fib(30));
//!
//! let snapshot = group.stop().unwrap(); // Stop and close the counters.
//!
//! let cycles = snapshot.counts()[0];
//! let instrs = snapshot.counts()[1];
//! println!("IPC: {}", instrs as f64 / cycles as f64);
//!
//! print!("{}", snapshot.format()); // PERF	<cycles>	<instrs>
//! ```
//!
//! ## Platform support
//!
//! Linux and Android only. Elsewhere opening a group returns
//! [`Error::Unsupported`].

pub mod config;
pub mod count;
mod error;
pub mod event;
mod ffi;

pub use error::{Error, Result};
