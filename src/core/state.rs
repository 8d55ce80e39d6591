//! Named state identities.
//!
//! A [`State`] is an immutable, value-equal token. Two states built from the
//! same name are interchangeable everywhere, including as transition table
//! keys, so a table can be rebuilt from parsed names without losing its
//! meaning.

use super::error::BuildError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A named node in a state machine's state space.
///
/// Names are never empty. Cloning is cheap: the name is shared, never
/// copied.
///
/// # Example
///
/// ```rust
/// use transit::State;
///
/// let green = State::new("green").unwrap();
/// assert_eq!(green.name(), "green");
/// assert_eq!(green, State::new("green").unwrap());
/// assert!(State::new("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct State {
    name: Arc<str>,
}

impl State {
    /// Create a state from its name.
    ///
    /// Fails with [`BuildError::InvalidName`] if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, BuildError> {
        let name = name.into();
        if name.is_empty() {
            return Err(BuildError::InvalidName);
        }
        Ok(Self { name: name.into() })
    }

    /// The state's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("State").field(&self.name()).finish()
    }
}

impl AsRef<str> for State {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl TryFrom<String> for State {
    type Error = BuildError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl TryFrom<&str> for State {
    type Error = BuildError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl FromStr for State {
    type Err = BuildError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::new(name)
    }
}

impl From<State> for String {
    fn from(state: State) -> Self {
        state.name.to_string()
    }
}
