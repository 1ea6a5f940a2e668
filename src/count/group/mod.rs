use std::borrow::Borrow;
use std::fs::File;
use std::io;
use std::marker::PhantomData;
use std::mem;
use std::os::fd::AsRawFd;
use std::rc::Rc;
use std::slice;

use log::{debug, warn};

use super::CountSnapshot;
use crate::config::attr;
use crate::config::{Opts, Target};
use crate::error::{Error, Result};
use crate::event::EventSpec;
use crate::ffi::bindings as b;
use crate::ffi::syscall;

#[cfg(test)]
mod test;

/// Counter group.
///
/// The first event leads the group. The leader is opened disabled and every
/// other member follows it, so the kernel schedules, starts and stops the
/// whole group as a unit and the member counts cover the same instructions.
///
/// Opening a group starts counting; [`stop`][Self::stop] ends it, closes all
/// counters and returns the counts. A group cannot be restarted.
///
/// `CounterGroup` is neither `Send` nor `Sync`: it must be stopped by the
/// thread that opened it. Groups that overlap in time compete for the same
/// hardware counters, in which case the kernel multiplexes or refuses them.
///
/// # Examples
///
/// ```rust,no_run
/// use perf_group::count::CounterGroup;
/// use perf_group::event::{EventSpec, Hardware, Software};
///
/// let mut group = CounterGroup::open([
///     EventSpec::from(Hardware::Instr),
///     EventSpec::from(Hardware::CpuCycle),
///     EventSpec::from(Software::PageFault),
/// ])
/// .unwrap();
///
/// let v: Vec<u64> = (0..1_000_000).collect();
/// std::hint::black_box(v);
///
/// let snapshot = group.stop().unwrap();
/// print!("{}", snapshot.format());
/// ```
pub struct CounterGroup {
    // Leader first. Empty once the group is stopped.
    members: Vec<Member>,

    // `stop` reads counters bound to the thread that opened them,
    // so the group is kept on that thread.
    _not_send: PhantomData<Rc<()>>,
}

struct Member {
    spec: EventSpec,
    perf: File,
}

impl CounterGroup {
    /// Opens and starts a group on the current process, all CPUs, with default [`Opts`].
    pub fn open<I>(specs: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<EventSpec>,
    {
        Self::open_with(specs, Target::default(), Opts::default())
    }

    /// Opens and starts a group on `target`.
    ///
    /// If any counter fails to open, the ones already opened are closed and
    /// the error names the failing event. No partial group is returned.
    pub fn open_with<I>(specs: I, target: impl Into<Target>, opts: impl Borrow<Opts>) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<EventSpec>,
    {
        let target = target.into();
        let opts = opts.borrow();

        let mut members: Vec<Member> = vec![];
        for (index, spec) in specs.into_iter().map(Into::into).enumerate() {
            let (attr, group_fd) = match members.first() {
                None => (attr::leader(&spec, opts), -1),
                Some(leader) => (attr::sibling(&spec, opts), leader.perf.as_raw_fd()),
            };
            let perf = syscall!(perf_event_open, &attr, target.pid, target.cpu, group_fd, 0)
                .map_err(|source| open_error(index, &spec, source))?;

            debug!("opened counter #{} ({})", index, spec);
            members.push(Member { spec, perf });
        }

        if members.is_empty() {
            return Err(Error::EmptyGroup);
        }

        let group = Self {
            members,
            _not_send: PhantomData,
        };
        group.control("reset", b::PERF_IOC_OP_RESET)?;
        group.control("enable", b::PERF_IOC_OP_ENABLE)?;
        debug!("started counter group of {}", group.len());

        Ok(group)
    }

    /// Events of the group in open order, empty once stopped.
    pub fn specs(&self) -> impl Iterator<Item = &EventSpec> {
        self.members.iter().map(|it| &it.spec)
    }

    /// Number of open counters.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// No counters are left, which means the group was stopped.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether the group is still counting.
    pub fn is_running(&self) -> bool {
        !self.members.is_empty()
    }

    /// Stops the group, reads every count with one grouped read and closes all counters.
    ///
    /// Counters are closed even if the read fails. Failures to disable or
    /// close are logged as warnings since the counts are still usable.
    ///
    /// Returns [`Error::Stopped`] if the group was already stopped.
    pub fn stop(&mut self) -> Result<CountSnapshot> {
        if self.members.is_empty() {
            return Err(Error::Stopped);
        }
        let members = mem::take(&mut self.members);
        let leader = &members[0].perf;

        if let Err(e) = syscall!(
            ioctl_arg,
            leader,
            b::PERF_IOC_OP_DISABLE as _,
            b::PERF_IOC_FLAG_GROUP as _,
        ) {
            warn!("failed to disable counter group: {}", e);
        }

        // struct read_format {
        //     u64 nr;
        //     u64 values[nr];
        // };
        let mut raw = vec![0_i64; members.len() + 1];
        let expected = raw.len() * size_of::<i64>();
        let buf = unsafe { slice::from_raw_parts_mut(raw.as_mut_ptr() as *mut u8, expected) };
        let read = syscall!(read, leader, buf);

        let specs = close_all(members);

        let actual = read.map_err(Error::Read)?;
        if actual != expected {
            return Err(Error::ShortRead { expected, actual });
        }
        debug!("stopped counter group of {}", specs.len());

        Ok(CountSnapshot::new(specs, raw))
    }

    fn control(&self, name: &'static str, op: u32) -> Result<()> {
        let leader = &self.members[0].perf;
        syscall!(ioctl_arg, leader, op as _, b::PERF_IOC_FLAG_GROUP as _)
            .map_err(|source| Error::Control { op: name, source })?;
        Ok(())
    }
}

impl Drop for CounterGroup {
    fn drop(&mut self) {
        if self.members.is_empty() {
            return;
        }
        debug!("dropping running counter group");
        if let Err(e) = self.control("disable", b::PERF_IOC_OP_DISABLE) {
            warn!("{}", e);
        }
        close_all(mem::take(&mut self.members));
    }
}

fn open_error(index: usize, spec: &EventSpec, source: io::Error) -> Error {
    if cfg!(not(any(target_os = "linux", target_os = "android"))) {
        return Error::Unsupported;
    }
    Error::Open {
        index,
        config: spec.code,
        source,
    }
}

fn close_all(members: Vec<Member>) -> Vec<EventSpec> {
    members
        .into_iter()
        .enumerate()
        .map(|(index, Member { spec, perf })| {
            if let Err(e) = syscall!(close, perf) {
                warn!("failed to close counter #{} ({}): {}", index, spec, e);
            }
            spec
        })
        .collect()
}
