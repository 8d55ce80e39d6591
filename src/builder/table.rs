//! Builder for declaring a transition table one state at a time.

use crate::core::{BuildError, State, TransitionTable};

/// Builder for [`TransitionTable`] with per-state adjacency registration.
///
/// # Example
///
/// ```rust
/// use transit::builder::TransitionTableBuilder;
/// use transit::State;
///
/// let draft = State::new("draft").unwrap();
/// let review = State::new("review").unwrap();
/// let published = State::new("published").unwrap();
///
/// let table = TransitionTableBuilder::new()
///     .register(draft.clone(), [review.clone()])
///     .allow(review.clone(), draft.clone())
///     .allow(review.clone(), published.clone())
///     .terminal(published.clone())
///     .build()
///     .unwrap();
///
/// assert!(table.contains(&review, &published));
/// assert!(table.is_terminal(&published));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TransitionTableBuilder {
    declarations: Vec<(State, Vec<State>)>,
}

impl TransitionTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare every destination of `source` at once.
    ///
    /// Registering the same source twice makes [`build`](Self::build) fail
    /// with [`BuildError::DuplicateSource`].
    pub fn register<D>(mut self, source: State, destinations: D) -> Self
    where
        D: IntoIterator<Item = State>,
    {
        self.declarations
            .push((source, destinations.into_iter().collect()));
        self
    }

    /// Add a single edge, extending the declaration of `from` if one exists.
    pub fn allow(mut self, from: State, to: State) -> Self {
        match self
            .declarations
            .iter_mut()
            .find(|(source, _)| *source == from)
        {
            Some((_, destinations)) => destinations.push(to),
            None => self.declarations.push((from, vec![to])),
        }
        self
    }

    /// Declare `state` as a dead end with no outgoing edges.
    pub fn terminal(self, state: State) -> Self {
        self.register(state, [])
    }

    pub fn build(self) -> Result<TransitionTable, BuildError> {
        TransitionTable::build(self.declarations)
    }
}
