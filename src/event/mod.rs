//! Events a counter can measure.

use std::fmt;

use crate::ffi::bindings as b;

pub mod hw;
pub mod sw;

#[cfg(test)]
mod test;

pub use hw::Hardware;
pub use sw::Software;

/// What kind of event an [`EventSpec`] code refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Domain {
    /// Events counted by the CPU's performance monitoring unit.
    Hardware,
    /// Events counted by the kernel (faults, context switches, clocks).
    Software,
}

impl Domain {
    pub(crate) fn as_type(&self) -> u32 {
        match self {
            Domain::Hardware => b::PERF_TYPE_HARDWARE,
            Domain::Software => b::PERF_TYPE_SOFTWARE,
        }
    }
}

/// One counter request: an event code within a [`Domain`].
///
/// The code is passed to the kernel as-is, so any generic hardware or software
/// event id is accepted, including ones [`Hardware`] and [`Software`] don't name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventSpec {
    /// Event id (`perf_event_attr.config`).
    pub code: u64,
    /// Event type (`perf_event_attr.type`).
    pub domain: Domain,
}

impl EventSpec {
    pub const fn new(code: u64, domain: Domain) -> Self {
        Self { code, domain }
    }
}

impl fmt::Display for EventSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let domain = match self.domain {
            Domain::Hardware => "hw",
            Domain::Software => "sw",
        };
        write!(f, "{}:{:#x}", domain, self.code)
    }
}

macro_rules! into_spec {
    ($ty:ty, $value:ident, $impl: expr) => {
        impl From<&$ty> for crate::event::EventSpec {
            fn from($value: &$ty) -> Self {
                $impl
            }
        }

        impl From<$ty> for crate::event::EventSpec {
            fn from(value: $ty) -> Self {
                (&value).into()
            }
        }
    };
}
use into_spec;

macro_rules! hw {
    ($id:ident) => {
        EventSpec::new(b::$id as _, Domain::Hardware)
    };
}

macro_rules! sw {
    ($id:ident) => {
        EventSpec::new(b::$id as _, Domain::Software)
    };
}

/// Every generic event the classic `perf stat` style measurement reports,
/// cycles first so it leads the group.
pub const FULL_SET: [EventSpec; 18] = [
    hw!(PERF_COUNT_HW_CPU_CYCLES),
    hw!(PERF_COUNT_HW_INSTRUCTIONS),
    hw!(PERF_COUNT_HW_CACHE_REFERENCES),
    hw!(PERF_COUNT_HW_CACHE_MISSES),
    hw!(PERF_COUNT_HW_BRANCH_INSTRUCTIONS),
    hw!(PERF_COUNT_HW_BRANCH_MISSES),
    hw!(PERF_COUNT_HW_BUS_CYCLES),
    hw!(PERF_COUNT_HW_STALLED_CYCLES_FRONTEND),
    hw!(PERF_COUNT_HW_STALLED_CYCLES_BACKEND),
    sw!(PERF_COUNT_SW_CPU_CLOCK),
    sw!(PERF_COUNT_SW_TASK_CLOCK),
    sw!(PERF_COUNT_SW_PAGE_FAULTS),
    sw!(PERF_COUNT_SW_CONTEXT_SWITCHES),
    sw!(PERF_COUNT_SW_CPU_MIGRATIONS),
    sw!(PERF_COUNT_SW_PAGE_FAULTS_MIN),
    sw!(PERF_COUNT_SW_PAGE_FAULTS_MAJ),
    sw!(PERF_COUNT_SW_ALIGNMENT_FAULTS),
    sw!(PERF_COUNT_SW_EMULATION_FAULTS),
];
