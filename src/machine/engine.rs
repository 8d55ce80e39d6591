//! State machine that enforces a transition table.

use crate::core::{BuildError, State, TransitionError, TransitionTable};
use crate::machine::config::{MachineConfig, SelfLoopPolicy};
use std::sync::Arc;

/// Tracks the current state and moves only along declared edges.
///
/// The table is shared behind an [`Arc`], so several machines may follow one
/// policy. The current state is the only thing that ever changes, and only
/// through [`transition`](Self::transition).
///
/// A machine is not internally synchronized. Callers that share one across
/// threads must hold a lock around each `can` + `transition` pair.
///
/// # Example
///
/// ```rust
/// use transit::{State, StateMachine, TransitionError, TransitionTable};
///
/// let table = TransitionTable::from_names([
///     ("green", vec!["yellow"]),
///     ("yellow", vec!["red"]),
///     ("red", vec!["green"]),
/// ])
/// .unwrap();
///
/// let green = State::new("green").unwrap();
/// let yellow = State::new("yellow").unwrap();
///
/// let mut machine = StateMachine::new(table, green.clone()).unwrap();
/// assert!(machine.can(&yellow));
///
/// machine.transition(&yellow).unwrap();
/// assert!(machine.is(&yellow));
///
/// let err = machine.transition(&green).unwrap_err();
/// assert!(matches!(err, TransitionError::IllegalTransition { .. }));
/// assert!(machine.is(&yellow));
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    table: Arc<TransitionTable>,
    current: usize,
    config: MachineConfig,
}

impl StateMachine {
    /// Create a machine in `starting` with the default configuration.
    ///
    /// Fails with [`BuildError::UnknownStartState`] if `starting` appears
    /// nowhere in the table.
    pub fn new(
        table: impl Into<Arc<TransitionTable>>,
        starting: State,
    ) -> Result<Self, BuildError> {
        Self::with_config(table, starting, MachineConfig::default())
    }

    /// Create a machine in `starting` with an explicit configuration.
    pub fn with_config(
        table: impl Into<Arc<TransitionTable>>,
        starting: State,
        config: MachineConfig,
    ) -> Result<Self, BuildError> {
        let table = table.into();
        let Some(current) = table.id_of(&starting) else {
            return Err(BuildError::UnknownStartState { state: starting });
        };

        Ok(Self {
            table,
            current,
            config,
        })
    }

    /// Get current state (pure)
    pub fn current(&self) -> &State {
        self.table.state_at(self.current)
    }

    /// Check whether the machine is in `state` (pure)
    pub fn is(&self, state: &State) -> bool {
        self.current() == state
    }

    /// Check whether moving to `next` would succeed (pure)
    pub fn can(&self, next: &State) -> bool {
        self.resolve(next).is_ok()
    }

    /// Move to `next`, returning the new current state.
    ///
    /// Fails with [`TransitionError::UnregisteredSource`] when the current
    /// state has no declaration in the table, and with
    /// [`TransitionError::IllegalTransition`] when `next` is not one of its
    /// destinations. On failure the current state is left untouched.
    pub fn transition(&mut self, next: &State) -> Result<&State, TransitionError> {
        match self.resolve(next) {
            Ok(to) => {
                tracing::debug!(from = %self.current(), to = %next, "state transition");
                self.current = to;
                Ok(self.current())
            }
            Err(error) => {
                tracing::debug!(
                    from = %self.current(),
                    to = %next,
                    %error,
                    "state transition rejected"
                );
                Err(error)
            }
        }
    }

    /// Destinations declared for the current state.
    ///
    /// Implicit self-loops are not listed.
    pub fn allowed_next(&self) -> impl ExactSizeIterator<Item = &State> {
        self.table.allowed_destinations(self.current())
    }

    /// Whether the current state has no outgoing edges.
    pub fn is_terminal(&self) -> bool {
        self.table.is_terminal(self.current())
    }

    pub fn table(&self) -> &Arc<TransitionTable> {
        &self.table
    }

    pub fn config(&self) -> MachineConfig {
        self.config
    }

    fn resolve(&self, next: &State) -> Result<usize, TransitionError> {
        if self.config.self_loops == SelfLoopPolicy::Implicit && self.is(next) {
            return Ok(self.current);
        }

        let Some(targets) = self.table.targets_of(self.current) else {
            return Err(TransitionError::UnregisteredSource {
                state: self.current().clone(),
            });
        };

        self.table
            .id_of(next)
            .filter(|to| targets.contains(to))
            .ok_or_else(|| TransitionError::IllegalTransition {
                from: self.current().clone(),
                to: next.clone(),
            })
    }
}
