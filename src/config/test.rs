use super::attr::{leader, sibling};
use super::{Cpu, Opts, Priv, Proc, Target};
use crate::event::{Domain, EventSpec, Hardware, Software};
use crate::ffi::bindings as b;

#[test]
fn test_leader_attr() {
    let spec = EventSpec::from(Hardware::CpuCycle);
    let attr = leader(&spec, &Opts::default());

    assert_eq!(attr.type_, b::PERF_TYPE_HARDWARE);
    assert_eq!(attr.config, b::PERF_COUNT_HW_CPU_CYCLES as u64);
    assert_eq!(attr.size, b::PERF_ATTR_SIZE_VER8);
    assert_eq!(attr.read_format, b::PERF_FORMAT_GROUP as u64);
    assert_eq!(attr.disabled(), 1);
    assert_eq!(attr.exclude_kernel(), 1);
    assert_eq!(attr.exclude_hv(), 1);
    assert_eq!(attr.exclude_user(), 0);
    assert_eq!(attr.exclude_idle(), 0);
}

#[test]
fn test_sibling_attr() {
    let spec = EventSpec::from(Software::PageFault);
    let attr = sibling(&spec, &Opts::default());

    assert_eq!(attr.type_, b::PERF_TYPE_SOFTWARE);
    assert_eq!(attr.config, b::PERF_COUNT_SW_PAGE_FAULTS as u64);
    assert_eq!(attr.read_format, 0);
    assert_eq!(attr.disabled(), 0);
    assert_eq!(attr.exclude_kernel(), 1);
    assert_eq!(attr.exclude_hv(), 1);
}

#[test]
fn test_raw_code_passthrough() {
    let spec = EventSpec::new(0x1234, Domain::Hardware);
    let attr = sibling(&spec, &Opts::default());
    assert_eq!(attr.config, 0x1234);
}

#[test]
fn test_custom_exclusions() {
    let opts = Opts {
        exclude: Priv {
            user: true,
            idle: true,
            ..Default::default()
        },
    };
    let attr = leader(&EventSpec::from(Hardware::Instr), &opts);

    assert_eq!(attr.exclude_user(), 1);
    assert_eq!(attr.exclude_idle(), 1);
    assert_eq!(attr.exclude_kernel(), 0);
    assert_eq!(attr.exclude_hv(), 0);
    // Exclusion bits must not clobber `disabled`.
    assert_eq!(attr.disabled(), 1);
}

#[test]
fn test_target() {
    let target = Target::default();
    assert_eq!((target.pid, target.cpu), (0, -1));

    let target: Target = (Cpu(2), Proc(42)).into();
    assert_eq!((target.pid, target.cpu), (42, 2));

    let target: Target = (Cpu::ALL, Proc(7)).into();
    assert_eq!((target.pid, target.cpu), (7, -1));

    let target: Target = (Proc::ALL, Cpu(0)).into();
    assert_eq!((target.pid, target.cpu), (-1, 0));
}
