#![allow(dead_code, non_camel_case_types, non_upper_case_globals)]

// Mirrors the parts of `include/uapi/linux/perf_event.h` this crate touches:
// https://github.com/torvalds/linux/blob/v6.13/include/uapi/linux/perf_event.h

pub const PERF_TYPE_HARDWARE: u32 = 0;
pub const PERF_TYPE_SOFTWARE: u32 = 1;

pub const PERF_COUNT_HW_CPU_CYCLES: u32 = 0;
pub const PERF_COUNT_HW_INSTRUCTIONS: u32 = 1;
pub const PERF_COUNT_HW_CACHE_REFERENCES: u32 = 2;
pub const PERF_COUNT_HW_CACHE_MISSES: u32 = 3;
pub const PERF_COUNT_HW_BRANCH_INSTRUCTIONS: u32 = 4;
pub const PERF_COUNT_HW_BRANCH_MISSES: u32 = 5;
pub const PERF_COUNT_HW_BUS_CYCLES: u32 = 6;
pub const PERF_COUNT_HW_STALLED_CYCLES_FRONTEND: u32 = 7;
pub const PERF_COUNT_HW_STALLED_CYCLES_BACKEND: u32 = 8;
pub const PERF_COUNT_HW_REF_CPU_CYCLES: u32 = 9;

pub const PERF_COUNT_SW_CPU_CLOCK: u32 = 0;
pub const PERF_COUNT_SW_TASK_CLOCK: u32 = 1;
pub const PERF_COUNT_SW_PAGE_FAULTS: u32 = 2;
pub const PERF_COUNT_SW_CONTEXT_SWITCHES: u32 = 3;
pub const PERF_COUNT_SW_CPU_MIGRATIONS: u32 = 4;
pub const PERF_COUNT_SW_PAGE_FAULTS_MIN: u32 = 5;
pub const PERF_COUNT_SW_PAGE_FAULTS_MAJ: u32 = 6;
pub const PERF_COUNT_SW_ALIGNMENT_FAULTS: u32 = 7;
pub const PERF_COUNT_SW_EMULATION_FAULTS: u32 = 8;
pub const PERF_COUNT_SW_DUMMY: u32 = 9;
pub const PERF_COUNT_SW_BPF_OUTPUT: u32 = 10;
pub const PERF_COUNT_SW_CGROUP_SWITCHES: u32 = 11;

pub const PERF_FORMAT_TOTAL_TIME_ENABLED: u32 = 1 << 0;
pub const PERF_FORMAT_TOTAL_TIME_RUNNING: u32 = 1 << 1;
pub const PERF_FORMAT_ID: u32 = 1 << 2;
pub const PERF_FORMAT_GROUP: u32 = 1 << 3;

pub const PERF_IOC_FLAG_GROUP: u32 = 1;

// _IO('$', n)
pub const PERF_IOC_OP_ENABLE: u32 = 0x2400;
pub const PERF_IOC_OP_DISABLE: u32 = 0x2401;
pub const PERF_IOC_OP_RESET: u32 = 0x2403;

pub const PERF_ATTR_SIZE_VER8: u32 = 136;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct perf_event_attr {
    pub type_: u32,
    pub size: u32,
    pub config: u64,
    // union { sample_period; sample_freq; }
    pub sample_period: u64,
    pub sample_type: u64,
    pub read_format: u64,
    pub _bitfield_1: u64,
    // union { wakeup_events; wakeup_watermark; }
    pub wakeup_events: u32,
    pub bp_type: u32,
    // union { bp_addr; kprobe_func; uprobe_path; config1; }
    pub config1: u64,
    // union { bp_len; kprobe_addr; probe_offset; config2; }
    pub config2: u64,
    pub branch_sample_type: u64,
    pub sample_regs_user: u64,
    pub sample_stack_user: u32,
    pub clockid: i32,
    pub sample_regs_intr: u64,
    pub aux_watermark: u32,
    pub sample_max_stack: u16,
    pub __reserved_2: u16,
    pub aux_sample_size: u32,
    pub __reserved_3: u32,
    pub sig_data: u64,
    pub config3: u64,
}

macro_rules! bitfield {
    ($($get:ident, $set:ident, $bit:literal;)+) => {
        impl perf_event_attr {
            $(
            #[inline]
            pub fn $get(&self) -> u64 {
                (self._bitfield_1 >> $bit) & 1
            }

            #[inline]
            pub fn $set(&mut self, val: u64) {
                self._bitfield_1 &= !(1 << $bit);
                self._bitfield_1 |= (val & 1) << $bit;
            }
            )+
        }
    };
}

bitfield! {
    disabled,       set_disabled,       0;
    inherit,        set_inherit,        1;
    pinned,         set_pinned,         2;
    exclusive,      set_exclusive,      3;
    exclude_user,   set_exclude_user,   4;
    exclude_kernel, set_exclude_kernel, 5;
    exclude_hv,     set_exclude_hv,     6;
    exclude_idle,   set_exclude_idle,   7;
}

const _: () = assert!(size_of::<perf_event_attr>() == PERF_ATTR_SIZE_VER8 as usize);
