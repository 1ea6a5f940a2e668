use std::env::temp_dir;
use std::fs::{self, File, OpenOptions};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use super::{CounterGroup, Member};
use crate::error::Error;
use crate::event::{EventSpec, Hardware, Software};

// A file holding a grouped read payload stands in for the leader,
// the control ioctls fail on it and are only logged.
struct Payload(PathBuf);

impl Payload {
    fn new(values: &[i64]) -> Self {
        let path = temp_dir().join(format!("perf-group-{}", Uuid::new_v4()));
        let bytes: Vec<u8> = values.iter().flat_map(|it| it.to_ne_bytes()).collect();
        fs::write(&path, bytes).unwrap();
        Self(path)
    }
}

impl Drop for Payload {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

fn group(specs: &[EventSpec], open: impl Fn() -> File) -> CounterGroup {
    let members = specs
        .iter()
        .map(|&spec| Member { spec, perf: open() })
        .collect();
    CounterGroup {
        members,
        _not_send: PhantomData,
    }
}

// Descriptors of this process that refer to `path`.
fn fds_on(path: &Path) -> usize {
    let path = fs::canonicalize(path).unwrap();
    fs::read_dir("/proc/self/fd")
        .unwrap()
        .filter_map(|it| fs::read_link(it.ok()?.path()).ok())
        .filter(|it| *it == path)
        .count()
}

fn reader(path: &Path) -> impl Fn() -> File + '_ {
    move || File::open(path).unwrap()
}

fn specs() -> Vec<EventSpec> {
    vec![Hardware::CpuCycle.into(), Software::CtxSwitch.into()]
}

#[test]
fn test_stop_reads_group() {
    let payload = Payload::new(&[2, 1500, 7]);
    let mut group = group(&specs(), reader(&payload.0));
    assert!(group.is_running());
    assert_eq!(group.len(), 2);

    let snapshot = group.stop().unwrap();
    assert_eq!(fds_on(&payload.0), 0);
    assert_eq!(snapshot.raw(), &[2, 1500, 7]);
    assert_eq!(snapshot.counts(), &[1500, 7]);
    assert_eq!(snapshot.get(0).unwrap().spec, EventSpec::from(Hardware::CpuCycle));
    assert_eq!(snapshot.format(), "PERF\t1500\t7\n");

    assert!(!group.is_running());
    assert!(group.is_empty());
    assert_eq!(group.specs().count(), 0);
}

#[test]
fn test_stop_twice() {
    let payload = Payload::new(&[2, 1, 1]);
    let mut group = group(&specs(), reader(&payload.0));

    group.stop().unwrap();
    assert!(matches!(group.stop(), Err(Error::Stopped)));
    assert!(matches!(group.stop(), Err(Error::Stopped)));
}

#[test]
fn test_short_read_still_closes() {
    let payload = Payload::new(&[2, 1500]);
    let mut group = group(&specs(), reader(&payload.0));

    match group.stop() {
        Err(Error::ShortRead { expected, actual }) => {
            assert_eq!(expected, 24);
            assert_eq!(actual, 16);
        }
        other => panic!("unexpected: {:?}", other),
    }
    assert!(!group.is_running());
    assert!(matches!(group.stop(), Err(Error::Stopped)));
}

#[test]
fn test_read_error() {
    let payload = Payload::new(&[]);
    let writer = || OpenOptions::new().write(true).open(&payload.0).unwrap();
    let mut group = group(&specs(), writer);

    assert!(matches!(group.stop(), Err(Error::Read(_))));
    assert!(!group.is_running());
}

#[test]
fn test_drop_running_group() {
    let payload = Payload::new(&[1, 0]);
    let group = group(&specs(), reader(&payload.0));
    assert!(group.is_running());
    assert_eq!(fds_on(&payload.0), 2);

    drop(group);
    assert_eq!(fds_on(&payload.0), 0);
}
