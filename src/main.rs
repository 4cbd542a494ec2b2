// Entry point for the Minesweeper TUI application
// Loads configuration and launches the event-dispatch loop

use std::error::Error;

// Module declarations
mod xms_color;  // Terminal color capability adaptation
mod xms_config; // User configuration, difficulty presets, and records
mod xms_event;  // Symbolic events, observer protocol, and the model
mod xms_field;  // Minefield state machine and algorithms
mod xms_ui;     // Widgets, hit-testing, and the dispatch loop

use xms_config::load_or_create_config;
use xms_ui::run as run_ui;

fn main() -> Result<(), Box<dyn Error>> {
    // Load or create user configuration (board geometry, preferences, records)
    let mut cfg = load_or_create_config();

    // Launch the dispatch loop
    run_ui(&mut cfg)
}
