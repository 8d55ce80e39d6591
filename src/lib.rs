//! Transit: a deterministic finite state machine engine
//!
//! Transit tracks a current position among a fixed set of named states and
//! refuses any move the declared transition table does not allow. It attaches
//! no actions to transitions and has no nested states: it is a plain
//! adjacency check with a single mutable cursor.
//!
//! # Core Concepts
//!
//! - **State**: An immutable, value-equal named identity
//! - **TransitionTable**: The immutable policy of which states may follow which
//! - **StateMachine**: The current state plus the table it is checked against
//!
//! # Example
//!
//! ```rust
//! use transit::{transition_table, State, StateMachine, TransitionError};
//!
//! let table = transition_table! {
//!     "green" => ["yellow"],
//!     "yellow" => ["red"],
//!     "red" => ["green"],
//! }
//! .unwrap();
//!
//! let green = State::new("green").unwrap();
//! let yellow = State::new("yellow").unwrap();
//! let red = State::new("red").unwrap();
//!
//! let mut light = StateMachine::new(table, green.clone()).unwrap();
//! assert!(light.can(&yellow));
//! assert!(!light.can(&red));
//!
//! light.transition(&yellow).unwrap();
//! assert_eq!(
//!     light.transition(&green),
//!     Err(TransitionError::IllegalTransition { from: yellow.clone(), to: green })
//! );
//! assert!(light.is(&yellow));
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use core::{BuildError, State, TransitionError, TransitionTable};
pub use machine::{MachineConfig, SelfLoopPolicy, StateMachine};
