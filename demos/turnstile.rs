//! Coin-Operated Turnstile
//!
//! This example demonstrates the classic two-state turnstile.
//!
//! Key concepts:
//! - Ordered actions on a transition
//! - Unhandled events leave the machine untouched
//! - Configuration loaded from JSON
//! - Post-stop dispatch policy
//!
//! Run with: RUST_LOG=featherstate=trace cargo run --example turnstile

use featherstate::{transition_between, Dispatch, Machine, MachineConfig, State};
use std::cell::Cell;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Input {
    Coin,
    Push,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Turnstile State Machine ===\n");

    let config = MachineConfig::from_json(r#"{ "name": "turnstile", "after_stop": "ignore" }"#)?;
    let mut machine: Machine<Input> = Machine::with_config(config);

    let takings = Rc::new(Cell::new(0u32));
    let passages = Rc::new(Cell::new(0u32));

    let locked = machine.add_state(
        State::named("locked").on_enter(|_| println!("  [locked] bar is down")),
    );
    let unlocked = machine.add_state(
        State::named("unlocked").on_enter(|_| println!("  [unlocked] bar released")),
    );

    let cash = Rc::clone(&takings);
    let people = Rc::clone(&passages);
    machine
        .register(
            transition_between(locked, unlocked)
                .on(Input::Coin)
                .with_action(move |_| cash.set(cash.get() + 1))
                .with_action(|_| println!("  coin accepted")),
        )
        .register(
            transition_between(unlocked, locked)
                .on(Input::Push)
                .with_action(move |_| people.set(people.get() + 1)),
        );

    machine.start(locked);

    for input in [Input::Push, Input::Coin, Input::Coin, Input::Push, Input::Push] {
        match machine.notify(input) {
            Dispatch::Fired { from, to } => println!("{input:?}: {from} -> {to}"),
            Dispatch::Unhandled => println!("{input:?}: ignored in current state"),
            Dispatch::Inactive => println!("{input:?}: machine inactive"),
        }
    }

    machine.stop();
    println!("\nAfter stop, Coin -> {:?}", machine.notify(Input::Coin));

    println!("\nCoins collected: {}", takings.get());
    println!("People through:  {}", passages.get());

    println!("\n=== Example Complete ===");
    Ok(())
}
