//! Keyboard Emulator
//!
//! A keyboard that wears out after a fixed number of key presses.
//!
//! Key concepts:
//! - Self transitions guarded by a countdown
//! - A fallback transition sharing the same trigger
//! - An enter hook that stops the machine
//! - Caps lock toggling between two modes
//!
//! Run with: RUST_LOG=featherstate=debug cargo run --example keyboard

use featherstate::{transition, MachineBuilder, MachineConfig, State};
use std::cell::Cell;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Key {
    Pressed,
    CapsLock,
}

const KEY_BUDGET: u32 = 20;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Keyboard Emulator ===\n");

    let remaining = Rc::new(Cell::new(KEY_BUDGET));

    let mut builder =
        MachineBuilder::<Key>::with_config(MachineConfig::default().with_name("keyboard"));
    let standard = builder.state(State::named("standard"));
    let caps_locked = builder.state(State::named("caps_locked"));
    let broken = builder.state(State::named("broken").on_enter(|machine| {
        println!("  *click* the keyboard broke");
        machine.stop();
    }));

    let keys_left = {
        let remaining = Rc::clone(&remaining);
        move || {
            let remaining = Rc::clone(&remaining);
            move |_: &Key| remaining.get() > 0
        }
    };
    let press = {
        let remaining = Rc::clone(&remaining);
        move || {
            let remaining = Rc::clone(&remaining);
            move |_: &mut featherstate::Machine<Key>| remaining.set(remaining.get() - 1)
        }
    };

    builder.initial(standard).transitions([
        transition!(standard => caps_locked; Key::CapsLock),
        transition!(caps_locked => standard; Key::CapsLock),
        transition!(standard => standard; Key::Pressed, if keys_left(), then [press()]),
        transition!(caps_locked => caps_locked; Key::Pressed, if keys_left(), then [press()]),
        transition!(standard => broken; Key::Pressed),
        transition!(caps_locked => broken; Key::Pressed),
    ]);

    let mut machine = builder.build()?;
    machine.start_initial();

    let mut step = 0u32;
    while machine.is_running() {
        step += 1;
        let key = if step % 7 == 0 {
            Key::CapsLock
        } else {
            Key::Pressed
        };
        let outcome = machine.notify(key);
        println!(
            "step {step:>2}: {key:?} -> {outcome:?} (keys left: {})",
            remaining.get()
        );
    }

    println!("\nFinal state is broken: {}", machine.is_in(broken));

    println!("\n=== Example Complete ===");
    Ok(())
}
