//! Order Workflow
//!
//! This example demonstrates an order lifecycle declared one state at a time.
//!
//! Key concepts:
//! - Per-state registration with `TransitionTableBuilder`
//! - Terminal states (Delivered, Cancelled, Refunded)
//! - Loading the same policy from JSON
//! - Implicit self-loops for idempotent status updates
//!
//! Run with: cargo run --example order_workflow

use transit::builder::{StateMachineBuilder, TransitionTableBuilder};
use transit::{SelfLoopPolicy, State, StateMachine, TransitionError, TransitionTable};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Order Workflow ===\n");

    let pending = State::new("pending")?;
    let paid = State::new("paid")?;
    let shipped = State::new("shipped")?;
    let delivered = State::new("delivered")?;
    let cancelled = State::new("cancelled")?;
    let refunded = State::new("refunded")?;

    let table = TransitionTableBuilder::new()
        .register(pending.clone(), [paid.clone(), cancelled.clone()])
        .register(paid.clone(), [shipped.clone(), refunded.clone()])
        .allow(shipped.clone(), delivered.clone())
        .terminal(delivered.clone())
        .terminal(cancelled.clone())
        .terminal(refunded.clone())
        .build()?;

    println!("Declared policy: {table:?}\n");

    let mut order = StateMachineBuilder::new()
        .initial(pending.clone())
        .table(table.clone())
        .self_loops(SelfLoopPolicy::Implicit)
        .build()?;

    // Status updates may repeat the current state
    order.transition(&pending)?;
    order.transition(&paid)?;
    order.transition(&paid)?;

    if let Err(err) = order.transition(&delivered) {
        println!("Cannot skip shipping: {err}");
    }

    order.transition(&shipped)?;
    order.transition(&delivered)?;
    println!("Order is {} (terminal: {})\n", order.current(), order.is_terminal());

    // The same policy round-trips through JSON
    let json = serde_json::to_string_pretty(&table)?;
    println!("Policy as JSON:\n{json}\n");

    let restored: TransitionTable = serde_json::from_str(&json)?;
    let mut replay = StateMachine::new(restored, pending)?;
    match replay.transition(&refunded) {
        Err(TransitionError::IllegalTransition { from, to }) => {
            println!("Replay refused {from} -> {to}");
        }
        other => println!("Unexpected replay result: {other:?}"),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
