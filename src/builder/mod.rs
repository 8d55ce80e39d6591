//! Builder API for ergonomic table and machine construction.
//!
//! This module provides fluent builders and a declaration macro for setting
//! up transition policies with minimal boilerplate. Every builder funnels
//! into the same validation as the direct constructors.

pub mod machine;
pub mod macros;
pub mod table;

pub use machine::StateMachineBuilder;
pub use table::TransitionTableBuilder;

use crate::core::{BuildError, State, TransitionTable};

/// Build a table where each state may only advance to the next one in
/// `names`, and the last state is terminal.
///
/// # Example
///
/// ```
/// use transit::builder::linear_table;
/// use transit::State;
///
/// let table = linear_table(["queued", "running", "finished"]).unwrap();
///
/// let finished = State::new("finished").unwrap();
/// assert!(table.contains(&State::new("running").unwrap(), &finished));
/// assert!(table.is_terminal(&finished));
/// ```
pub fn linear_table<'a, I>(names: I) -> Result<TransitionTable, BuildError>
where
    I: IntoIterator<Item = &'a str>,
{
    let states = names
        .into_iter()
        .map(State::new)
        .collect::<Result<Vec<_>, _>>()?;

    let mut builder = TransitionTableBuilder::new();
    for pair in states.windows(2) {
        builder = builder.allow(pair[0].clone(), pair[1].clone());
    }
    if let Some(last) = states.last() {
        builder = builder.terminal(last.clone());
    }

    builder.build()
}

/// Build a table where every state follows the previous one and the last
/// state wraps around to the first.
pub fn cyclic_table<'a, I>(names: I) -> Result<TransitionTable, BuildError>
where
    I: IntoIterator<Item = &'a str>,
{
    let states = names
        .into_iter()
        .map(State::new)
        .collect::<Result<Vec<_>, _>>()?;

    let mut builder = TransitionTableBuilder::new();
    for (i, state) in states.iter().enumerate() {
        let next = &states[(i + 1) % states.len()];
        builder = builder.allow(state.clone(), next.clone());
    }

    builder.build()
}
