//! Declared adjacency between states.
//!
//! The table is an index-based adjacency map: every known state is interned
//! once and edges are stored as indices, so cyclic policies such as
//! `green -> yellow -> red -> green` need no references between states.

use super::error::BuildError;
use super::state::State;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Immutable transition policy: for each source state, the ordered set of
/// states it may move to.
///
/// A source declared with no destinations is a terminal state. A state that
/// only ever appears as a destination is known to the table but has no
/// registered policy of its own.
///
/// # Example
///
/// ```rust
/// use transit::{State, TransitionTable};
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
/// let red = State::new("red").unwrap();
///
/// assert!(table.contains(&green, &yellow));
/// assert!(!table.contains(&green, &red));
/// assert_eq!(table.known_states().count(), 3);
/// ```
#[derive(Clone)]
pub struct TransitionTable {
    states: Vec<State>,
    index: HashMap<State, usize>,
    adjacency: Vec<Option<Vec<usize>>>,
    sources: Vec<usize>,
}

impl TransitionTable {
    /// Build a table from `(source, destinations)` declarations.
    ///
    /// Repeated destinations within one declaration collapse to their first
    /// occurrence. Fails with [`BuildError::EmptyTable`] when nothing is
    /// declared and with [`BuildError::DuplicateSource`] when a source is
    /// declared twice.
    pub fn build<I, D>(edges: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = (State, D)>,
        D: IntoIterator<Item = State>,
    {
        let mut table = Self {
            states: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            sources: Vec::new(),
        };

        for (source, destinations) in edges {
            let from = table.intern(source);
            if table.adjacency[from].is_some() {
                return Err(BuildError::DuplicateSource {
                    state: table.states[from].clone(),
                });
            }

            let mut targets = Vec::new();
            for destination in destinations {
                let to = table.intern(destination);
                if !targets.contains(&to) {
                    targets.push(to);
                }
            }

            table.adjacency[from] = Some(targets);
            table.sources.push(from);
        }

        if table.sources.is_empty() {
            return Err(BuildError::EmptyTable);
        }

        tracing::trace!(
            sources = table.sources.len(),
            states = table.states.len(),
            "transition table built"
        );

        Ok(table)
    }

    /// Build a table from raw state names.
    ///
    /// Every name is validated as by [`State::new`] before the table itself
    /// is checked.
    pub fn from_names<'a, I, D>(edges: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = (&'a str, D)>,
        D: IntoIterator<Item = &'a str>,
    {
        let edges = edges
            .into_iter()
            .map(|(source, destinations)| -> Result<_, BuildError> {
                let destinations = destinations
                    .into_iter()
                    .map(State::new)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok((State::new(source)?, destinations))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::build(edges)
    }

    /// States reachable from `source` in one step, in declaration order.
    ///
    /// Empty when `source` is terminal or has no declaration at all.
    pub fn allowed_destinations<'a>(
        &'a self,
        source: &State,
    ) -> impl ExactSizeIterator<Item = &'a State> + 'a {
        self.destinations_of(source)
            .unwrap_or_default()
            .iter()
            .map(move |&id| &self.states[id])
    }

    /// Whether `destination` is declared reachable from `source`.
    pub fn contains(&self, source: &State, destination: &State) -> bool {
        match (self.destinations_of(source), self.id_of(destination)) {
            (Some(targets), Some(to)) => targets.contains(&to),
            _ => false,
        }
    }

    /// Every state that appears in the table, as a source or a destination,
    /// in first-seen order.
    pub fn known_states(&self) -> impl ExactSizeIterator<Item = &State> {
        self.states.iter()
    }

    pub fn is_known(&self, state: &State) -> bool {
        self.index.contains_key(state)
    }

    /// Whether `source` has its own declaration, possibly with no
    /// destinations.
    pub fn is_registered(&self, source: &State) -> bool {
        self.destinations_of(source).is_some()
    }

    /// Whether `state` is known but has no outgoing edges.
    pub fn is_terminal(&self, state: &State) -> bool {
        self.is_known(state) && self.destinations_of(state).is_none_or(<[usize]>::is_empty)
    }

    /// Declared source states, in declaration order.
    pub fn sources(&self) -> impl ExactSizeIterator<Item = &State> {
        self.sources.iter().map(move |&id| &self.states[id])
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().flatten().map(Vec::len).sum()
    }

    pub(crate) fn id_of(&self, state: &State) -> Option<usize> {
        self.index.get(state).copied()
    }

    pub(crate) fn state_at(&self, id: usize) -> &State {
        &self.states[id]
    }

    pub(crate) fn targets_of(&self, id: usize) -> Option<&[usize]> {
        self.adjacency.get(id).and_then(|targets| targets.as_deref())
    }

    fn destinations_of(&self, source: &State) -> Option<&[usize]> {
        self.id_of(source).and_then(|id| self.targets_of(id))
    }

    fn intern(&mut self, state: State) -> usize {
        if let Some(&id) = self.index.get(&state) {
            return id;
        }
        let id = self.states.len();
        self.index.insert(state.clone(), id);
        self.states.push(state);
        self.adjacency.push(None);
        id
    }
}

impl fmt::Debug for TransitionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.sources()
                    .map(|source| (source, self.allowed_destinations(source).collect::<Vec<_>>())),
            )
            .finish()
    }
}

impl Serialize for TransitionTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.source_count()))?;
        for source in self.sources() {
            let destinations: Vec<&State> = self.allowed_destinations(source).collect();
            map.serialize_entry(source, &destinations)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TransitionTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = TransitionTable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from source state to its destination states")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut edges = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((source, destinations)) = map.next_entry::<State, Vec<State>>()? {
                    edges.push((source, destinations));
                }
                TransitionTable::build(edges).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}
