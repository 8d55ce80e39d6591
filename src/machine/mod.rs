//! The state machine engine.
//!
//! A [`StateMachine`] pairs a shared [`TransitionTable`](crate::TransitionTable)
//! with a current state and consults the table on every requested move.
//! [`MachineConfig`] carries the options fixed at construction time.

mod config;
mod engine;

pub use config::{MachineConfig, SelfLoopPolicy};
pub use engine::StateMachine;
