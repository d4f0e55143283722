//! Hungry Cat
//!
//! This example walks a small machine loaded from JSON through transitions,
//! undo, redo, and reset.
//!
//! Run with: cargo run --example hungry_cat

use retrace::{Config, ConfigError, Fsm, FsmError};

const CONFIG: &str = r#"{
    "initial": "hungry",
    "states": {
        "hungry": { "transitions": { "eat": "full", "nap": "sleeping" } },
        "full": { "transitions": { "play": "hungry", "nap": "sleeping" } },
        "sleeping": { "transitions": { "wake": "hungry" } }
    }
}"#;

fn main() -> Result<(), ConfigError> {
    println!("=== Hungry Cat Example ===\n");

    let config: Config = Config::from_json(CONFIG)?;
    let mut cat = Fsm::new(config)?;

    println!("Declared states: {:?}", cat.states());
    println!("States that can nap: {:?}", cat.states_with_event(&"nap".to_string()));
    println!("Starting state: {}", cat.state());

    for event in ["eat", "nap", "wake"] {
        match cat.trigger(&event.to_string()) {
            Ok(()) => println!("  {event} -> {}", cat.state()),
            Err(e) => println!("  {event} rejected: {e}"),
        }
    }

    if let Err(FsmError::InvalidEvent { state, event }) = cat.trigger(&"wake".to_string()) {
        println!("  cannot {event} while {state}");
    }

    println!("\nUndoing everything:");
    while cat.undo() {
        println!("  back to {}", cat.state());
    }

    println!("\nRedo once, then reset:");
    cat.redo();
    println!("  redo -> {}", cat.state());
    cat.reset();
    println!("  reset -> {} (redo still available: {})", cat.state(), cat.can_redo());

    cat.clear_history();
    println!("  history cleared, undo available: {}", cat.can_undo());

    println!("\n=== Example Complete ===");
    Ok(())
}
