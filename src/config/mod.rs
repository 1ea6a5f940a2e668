//! Options applied to every counter of a group.

pub(crate) mod attr;
mod target;

#[cfg(test)]
mod test;

pub use target::*;

/// Counter options shared by every member of a group.
///
/// The default excludes kernel and hypervisor mode, so only what the target
/// executes in user space is counted.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Opts {
    pub exclude: Priv,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            exclude: Priv {
                kernel: true,
                hv: true,
                ..Default::default()
            },
        }
    }
}

/// Privilege levels.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Priv {
    /// User space.
    pub user: bool,

    /// Kernel space.
    pub kernel: bool,

    /// Hypervisor.
    pub hv: bool,

    /// Idle task.
    pub idle: bool,
}
