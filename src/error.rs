use std::io;

use thiserror::Error;

/// Errors returned by counter group operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A group needs at least one event to act as its leader.
    #[error("counter group has no events")]
    EmptyGroup,

    /// The kernel refused to open a counter: the event is not supported by
    /// the hardware, permission was denied or counter resources ran out.
    #[error("failed to open counter #{index} (config {config:#x})")]
    Open {
        index: usize,
        config: u64,
        #[source]
        source: io::Error,
    },

    /// Resetting or enabling the group leader failed.
    #[error("failed to {op} counter group")]
    Control {
        op: &'static str,
        #[source]
        source: io::Error,
    },

    /// The grouped read on the leader failed.
    #[error("failed to read counter group")]
    Read(#[source] io::Error),

    /// The grouped read returned fewer bytes than one slot per member plus the leading slot.
    #[error("short read from counter group: expected {expected} bytes, got {actual}")]
    ShortRead { expected: usize, actual: usize },

    /// The group was already stopped and its counters closed.
    #[error("counter group is already stopped")]
    Stopped,

    /// The platform has no `perf_event_open` facility.
    #[error("performance counters are not supported on this platform")]
    Unsupported,
}

pub type Result<T> = std::result::Result<T, Error>;
