//! Machine configuration.

use serde::{Deserialize, Serialize};

/// Whether staying in the current state needs an explicit declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfLoopPolicy {
    /// `A -> A` is legal only when `A` lists itself as a destination.
    #[default]
    Explicit,

    /// `A -> A` is always legal, whatever the table declares for `A`.
    Implicit,
}

/// Options applied when a [`StateMachine`](crate::StateMachine) is constructed.
///
/// Missing fields fall back to their defaults when deserializing, so hosts
/// can embed this in their own configuration files.
///
/// # Example
///
/// ```rust
/// use transit::{MachineConfig, SelfLoopPolicy};
///
/// let config = MachineConfig::default().with_self_loops(SelfLoopPolicy::Implicit);
/// assert_eq!(config.self_loops, SelfLoopPolicy::Implicit);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    pub self_loops: SelfLoopPolicy,
}

impl MachineConfig {
    pub fn with_self_loops(mut self, policy: SelfLoopPolicy) -> Self {
        self.self_loops = policy;
        self
    }
}
