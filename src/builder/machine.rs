//! Builder for constructing state machines.

use crate::builder::table::TransitionTableBuilder;
use crate::core::{BuildError, State, TransitionTable};
use crate::machine::{MachineConfig, SelfLoopPolicy, StateMachine};
use std::sync::Arc;

/// Builder for constructing state machines with a fluent API.
#[derive(Debug, Default)]
pub struct StateMachineBuilder {
    initial: Option<State>,
    table: Option<Arc<TransitionTable>>,
    config: MachineConfig,
}

impl StateMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: State) -> Self {
        self.initial = Some(state);
        self
    }

    /// Use an already built table.
    pub fn table(mut self, table: TransitionTable) -> Self {
        self.table = Some(Arc::new(table));
        self
    }

    /// Use a table shared with other machines.
    pub fn shared_table(mut self, table: Arc<TransitionTable>) -> Self {
        self.table = Some(table);
        self
    }

    /// Build the table from per-state registrations.
    /// Returns an error if the declarations are invalid.
    pub fn transitions(self, builder: TransitionTableBuilder) -> Result<Self, BuildError> {
        let table = builder.build()?;
        Ok(self.table(table))
    }

    pub fn self_loops(mut self, policy: SelfLoopPolicy) -> Self {
        self.config.self_loops = policy;
        self
    }

    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the state machine.
    /// Returns an error if the initial state or the table is missing.
    pub fn build(self) -> Result<StateMachine, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let table = self.table.ok_or(BuildError::EmptyTable)?;

        StateMachine::with_config(table, initial, self.config)
    }
}
