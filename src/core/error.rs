//! Construction and transition errors.

use super::state::State;
use thiserror::Error;

/// Errors that prevent a state, table, or machine from being constructed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("State name cannot be empty")]
    InvalidName,

    #[error("Transition table is empty. Declare at least one source state")]
    EmptyTable,

    #[error("Source state '{state}' is declared more than once")]
    DuplicateSource { state: State },

    #[error("Starting state '{state}' is not known to the transition table")]
    UnknownStartState { state: State },

    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,
}

/// Errors returned by a rejected transition.
///
/// A rejected transition never changes the machine's current state.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TransitionError {
    #[error("No transition registered for state '{state}'")]
    UnregisteredSource { state: State },

    #[error("Illegal state transition: {from} -> {to}")]
    IllegalTransition { from: State, to: State },
}
