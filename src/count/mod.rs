//! Counting events with a counter group.

use crate::error::Result;
use crate::event::EventSpec;

pub mod group;
mod snapshot;


pub use group::CounterGroup;
pub use snapshot::*;

/// Counts `specs` while running `f`.
///
/// Opens a group on the current process, runs `f`, then stops the group.
/// Counters are released even if `f` panics.
///
/// ```rust,no_run
/// use perf_group::count::measure;
/// use perf_group::event::Software;
///
/// let (_, snapshot) = measure([Software::TaskClock, Software::PageFault], || {
///     std::hint::black_box(vec![0_u8; 1 << 20]);
/// })
/// .unwrap();
///
/// for it in snapshot.iter() {
///     println!("{}: {}", it.spec, it.count);
/// }
/// ```
pub fn measure<I, F, R>(specs: I, f: F) -> Result<(R, CountSnapshot)>
where
    I: IntoIterator,
    I::Item: Into<EventSpec>,
    F: FnOnce() -> R,
{
    let mut group = CounterGroup::open(specs)?;
    let ret = f();
    let snapshot = group.stop()?;
    Ok((ret, snapshot))
}

/// Renders `snapshot` as one `PERF` line, see [`CountSnapshot::format`].
pub fn format(snapshot: &CountSnapshot) -> String {
    snapshot.format()
}
