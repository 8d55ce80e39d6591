//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Declarative tables with `transition_table!`
//! - Illegal moves are rejected and leave the light untouched
//!
//! Run with: cargo run --example traffic_light

use transit::{transition_table, BuildError, State, StateMachine};

fn main() -> Result<(), BuildError> {
    println!("=== Traffic Light State Machine ===\n");

    let table = transition_table! {
        "green" => ["yellow"],
        "yellow" => ["red"],
        "red" => ["green"],
    }?;

    let green = State::new("green")?;
    let yellow = State::new("yellow")?;
    let red = State::new("red")?;

    let mut light = StateMachine::new(table, green.clone())?;
    println!("Initial state: {}\n", light.current());

    println!("Transition sequence:");
    for next in [&yellow, &green, &red, &green, &yellow] {
        let from = light.current().clone();
        match light.transition(next) {
            Ok(current) => println!("  {from} -> {current}"),
            Err(err) => println!("  {from} -> {next} rejected: {err}"),
        }
    }

    println!("\nFinal state: {}", light.current());
    println!("No final state: the sequence cycles indefinitely");

    println!("\n=== Example Complete ===");
    Ok(())
}
