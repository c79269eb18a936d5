//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine with history.
//!
//! Key concepts:
//! - Cyclic transitions driven by a single event
//! - Maintenance override via direct state changes
//! - Walking history back and forth with undo/redo
//!
//! Run with: RUST_LOG=retrace=debug cargo run --example traffic_light

use retrace::{MachineBuilder, MachineError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Traffic Light State Machine ===\n");

    let mut light = MachineBuilder::new()
        .initial("red")
        .transition("red", "timer", "green")
        .transition("green", "timer", "yellow")
        .transition("yellow", "timer", "red")
        .state("flashing")
        .transition("flashing", "repair", "red")
        .build()?;

    println!("Initial state: {}", light.state());

    for _ in 0..4 {
        light.trigger("timer")?;
        println!("  timer -> {}", light.state());
    }

    println!("\nMaintenance override:");
    light.change_state("flashing")?;
    println!("  now {}", light.state());

    match light.trigger("timer") {
        Err(MachineError::NoTransition { state, event }) => {
            println!("  '{event}' ignored while {state}");
        }
        other => other?,
    }

    println!("\nRewinding:");
    while light.undo() {
        println!("  undo -> {} (cursor {})", light.state(), light.cursor());
    }

    println!("\nReplaying:");
    while light.redo() {
        println!("  redo -> {} (cursor {})", light.state(), light.cursor());
    }

    let path: Vec<&str> = light.history().path().into_iter().map(|s| s.as_str()).collect();
    println!("\nHistory: {}", path.join(" -> "));
    println!(
        "States reacting to 'timer': {:?}",
        light.states(Some("timer"))
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
