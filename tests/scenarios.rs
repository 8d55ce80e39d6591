//! End-to-end scenarios driving a machine through its public API.

use std::sync::{Arc, Mutex};
use std::thread;
use transit::builder::{StateMachineBuilder, TransitionTableBuilder};
use transit::{
    transition_table, BuildError, MachineConfig, SelfLoopPolicy, State, StateMachine,
    TransitionError, TransitionTable,
};

fn state(name: &str) -> State {
    State::new(name).unwrap()
}

#[test]
fn traffic_light_cycle() {
    let table = transition_table! {
        "green" => ["yellow"],
        "yellow" => ["red"],
        "red" => ["green"],
    }
    .unwrap();
    let mut machine = StateMachine::new(table, state("green")).unwrap();

    assert_eq!(machine.current(), &state("green"));
    assert!(machine.can(&state("yellow")));
    assert!(!machine.can(&state("red")));

    machine.transition(&state("yellow")).unwrap();
    assert_eq!(machine.current(), &state("yellow"));

    let err = machine.transition(&state("green")).unwrap_err();
    assert_eq!(
        err,
        TransitionError::IllegalTransition {
            from: state("yellow"),
            to: state("green"),
        }
    );
    assert_eq!(machine.current(), &state("yellow"));

    machine.transition(&state("red")).unwrap();
    assert_eq!(machine.current(), &state("red"));
}

#[test]
fn special_light_may_return_from_yellow() {
    let table = TransitionTableBuilder::new()
        .register(state("green"), [state("yellow")])
        .register(state("yellow"), [state("red"), state("green")])
        .register(state("red"), [state("green")])
        .build()
        .unwrap();
    let mut machine = StateMachine::new(table, state("green")).unwrap();

    for next in ["yellow", "green", "yellow", "red", "green"] {
        machine.transition(&state(next)).unwrap();
        assert!(machine.is(&state(next)));
    }
}

#[test]
fn unregistered_source_scenario() {
    let table = transition_table! { "green" => ["yellow"] }.unwrap();
    let mut machine = StateMachine::new(table, state("green")).unwrap();

    machine.transition(&state("yellow")).unwrap();
    assert_eq!(machine.current(), &state("yellow"));

    let err = machine.transition(&state("green")).unwrap_err();
    assert_eq!(
        err,
        TransitionError::UnregisteredSource {
            state: state("yellow")
        }
    );
    assert_eq!(err.to_string(), "No transition registered for state 'yellow'");
}

#[test]
fn construction_failures() {
    assert_eq!(
        TransitionTable::build(Vec::<(State, Vec<State>)>::new()).unwrap_err(),
        BuildError::EmptyTable
    );

    let table = transition_table! { "green" => ["yellow"] }.unwrap();
    assert_eq!(
        StateMachine::new(table, state("purple")).unwrap_err(),
        BuildError::UnknownStartState {
            state: state("purple")
        }
    );

    assert_eq!(State::new("").unwrap_err(), BuildError::InvalidName);
}

#[test]
fn rebuilt_states_drive_the_machine() {
    let table = transition_table! { "draft" => ["review"], "review" => ["draft"] }.unwrap();
    let mut machine = StateMachine::new(table, State::new("draft").unwrap()).unwrap();

    let review: State = "review".parse().unwrap();
    machine.transition(&review).unwrap();

    assert!(machine.is(&State::try_from("review").unwrap()));
}

#[test]
fn machine_loads_table_and_config_from_json() {
    let table: TransitionTable = serde_json::from_str(
        r#"{
            "pending": ["paid", "cancelled"],
            "paid": ["shipped", "refunded"],
            "shipped": ["delivered"],
            "delivered": [],
            "cancelled": [],
            "refunded": []
        }"#,
    )
    .unwrap();
    let config: MachineConfig = serde_json::from_str(r#"{"self_loops":"implicit"}"#).unwrap();

    let mut order = StateMachine::with_config(table, state("pending"), config).unwrap();

    order.transition(&state("pending")).unwrap();
    order.transition(&state("paid")).unwrap();
    order.transition(&state("shipped")).unwrap();
    order.transition(&state("delivered")).unwrap();

    assert!(order.is_terminal());
    assert!(order.can(&state("delivered")));
    assert!(!order.can(&state("refunded")));
}

#[test]
fn json_table_rejects_invalid_names() {
    let result: Result<TransitionTable, _> = serde_json::from_str(r#"{"pending": [""]}"#);
    assert!(result.is_err());
}

#[test]
fn builder_shares_policy_between_machines() {
    let table = Arc::new(transition_table! { "on" => ["off"], "off" => ["on"] }.unwrap());

    let mut left = StateMachineBuilder::new()
        .initial(state("on"))
        .shared_table(Arc::clone(&table))
        .build()
        .unwrap();
    let right = StateMachineBuilder::new()
        .initial(state("off"))
        .shared_table(Arc::clone(&table))
        .self_loops(SelfLoopPolicy::Implicit)
        .build()
        .unwrap();

    left.transition(&state("off")).unwrap();

    assert!(left.is(&state("off")));
    assert!(!left.can(&state("off")));
    assert!(right.can(&state("off")));
}

#[test]
fn locked_machine_serializes_check_then_act() {
    let table = transition_table! {
        "idle" => ["busy"],
        "busy" => ["idle"],
    }
    .unwrap();
    let machine = Arc::new(Mutex::new(StateMachine::new(table, state("idle")).unwrap()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let machine = Arc::clone(&machine);
            thread::spawn(move || {
                let mut machine = machine.lock().unwrap();
                let next = machine.allowed_next().next().cloned().unwrap();
                if machine.can(&next) {
                    machine.transition(&next).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert!(machine.lock().unwrap().is(&state("idle")));
}
