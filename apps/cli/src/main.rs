//! # marketsim Terminal Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration from the environment
//! 3. Build the random generator (seeded or from entropy)
//! 4. Open the shop — stock and queue are generated eagerly, once
//! 5. Print the opening assortment
//! 6. Enter the menu loop
//!
//! ## Menu Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  print commands ──► read key ──► dispatch                               │
//! │                                    │                                    │
//! │        Q ── show the queue         │                                    │
//! │        W ── serve the next client  │                                    │
//! │        Esc ─ quit                  │                                    │
//! │        other ─ ignored             │                                    │
//! │                                    ▼                                    │
//! │             wait for one more key ──► clear screen ──► repeat           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All state lives in memory and is discarded at exit; the process always
//! terminates normally.

mod config;
mod ui;

use std::error::Error;

use console::Term;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use marketsim_core::{ServeOutcome, Shop};

use crate::config::SimConfig;
use crate::ui::Command;

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let config = SimConfig::load()?;
    info!(seed = ?config.seed, "Configuration loaded");

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut shop = Shop::open(rng)?;
    info!(clients = shop.queue_len(), "Shop open for the day");

    let term = Term::stdout();
    term.hide_cursor()?;

    ui::show_assortment(&term, &shop)?;

    loop {
        ui::show_commands(&term)?;

        let key = term.read_key()?;
        match Command::from_key(&key) {
            Some(Command::ShowQueue) => ui::show_queue(&term, &shop)?,
            Some(Command::ServeClient) => {
                let outcome = shop.serve_client();
                if let ServeOutcome::Serviced(receipt) = &outcome {
                    let json = serde_json::to_string(receipt)?;
                    debug!(receipt = %json, "Client checked out");
                }
                ui::show_serve(&term, &outcome)?;
            }
            Some(Command::Exit) => break,
            // Unrecognized keys change nothing; the loop still waits for a
            // key below and clears the screen.
            None => {}
        }

        term.read_key()?;
        term.clear_screen()?;
    }

    term.show_cursor()?;
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages (includes JSON receipts)
/// - Default: INFO level, debug for the marketsim crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,marketsim=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
