//! Core value types of the engine.
//!
//! - [`State`]: immutable, value-equal state identities
//! - [`TransitionTable`]: the declared, immutable adjacency policy
//! - [`BuildError`] and [`TransitionError`]: construction and transition failures
//!
//! Nothing in this module mutates after construction; it is safe to share
//! across threads without synchronization.

mod error;
mod state;
mod table;

pub use error::{BuildError, TransitionError};
pub use state::State;
pub use table::TransitionTable;
