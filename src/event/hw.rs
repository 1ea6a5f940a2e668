use super::{Domain, EventSpec};
use crate::ffi::bindings as b;

/// Generic hardware events.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hardware {
    CpuCycle,
    BusCycle,
    RefCpuCycle,

    CacheMiss,
    CacheAccess,

    BranchMiss,
    BranchInstr,

    BackendStalledCycle,
    FrontendStalledCycle,

    Instr,
}

super::into_spec!(Hardware, value, {
    let code = match value {
        Hardware::CpuCycle => b::PERF_COUNT_HW_CPU_CYCLES,
        Hardware::BusCycle => b::PERF_COUNT_HW_BUS_CYCLES,
        Hardware::RefCpuCycle => b::PERF_COUNT_HW_REF_CPU_CYCLES,

        Hardware::CacheMiss => b::PERF_COUNT_HW_CACHE_MISSES,
        Hardware::CacheAccess => b::PERF_COUNT_HW_CACHE_REFERENCES,

        Hardware::BranchMiss => b::PERF_COUNT_HW_BRANCH_MISSES,
        Hardware::BranchInstr => b::PERF_COUNT_HW_BRANCH_INSTRUCTIONS,

        Hardware::BackendStalledCycle => b::PERF_COUNT_HW_STALLED_CYCLES_BACKEND,
        Hardware::FrontendStalledCycle => b::PERF_COUNT_HW_STALLED_CYCLES_FRONTEND,

        Hardware::Instr => b::PERF_COUNT_HW_INSTRUCTIONS,
    };

    EventSpec::new(code as _, Domain::Hardware)
});
