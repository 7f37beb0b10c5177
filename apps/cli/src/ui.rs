//! Key dispatch and rendering.
//!
//! Everything here is presentation: the shop state is read through the core
//! crate's accessors and printed line by line. Quantities and prices always
//! come straight from the underlying state — the wording is the only thing
//! this module owns.

use std::io;

use console::{style, Key, Term};
use marketsim_core::{CheckoutOutcome, Client, ServeOutcome, Shop};

// =============================================================================
// Commands
// =============================================================================

/// The three things the operator can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ShowQueue,
    ServeClient,
    Exit,
}

impl Command {
    /// Maps a key press to a command. Every other key is ignored.
    pub fn from_key(key: &Key) -> Option<Command> {
        match key {
            Key::Char('q') | Key::Char('Q') => Some(Command::ShowQueue),
            Key::Char('w') | Key::Char('W') => Some(Command::ServeClient),
            Key::Escape => Some(Command::Exit),
            _ => None,
        }
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// The menu printed at the top of every loop iteration.
pub fn show_commands(term: &Term) -> io::Result<()> {
    term.write_line(&format!("{} - show the queue", style("Q").bold()))?;
    term.write_line(&format!(
        "{} - serve the next client in line",
        style("W").bold()
    ))?;
    term.write_line(&format!("{} - quit", style("Esc").bold()))
}

/// The opening assortment, printed once at startup.
pub fn show_assortment<R>(term: &Term, shop: &Shop<R>) -> io::Result<()> {
    term.write_line("Opening shop assortment:")?;

    for shelf_line in shop.opening_inventory() {
        term.write_line(&shelf_line.to_string())?;
    }

    term.write_line("")?;
    term.write_line("People came in and filled their carts...")?;
    term.write_line("")
}

/// Everyone in line, front first, with their balance and cart.
pub fn show_queue<R>(term: &Term, shop: &Shop<R>) -> io::Result<()> {
    term.write_line(&format!(
        "{} client(s) in line, with these items:",
        shop.queue_len()
    ))?;
    term.write_line("")?;

    for (position, client) in shop.queue().enumerate() {
        show_cart(term, position + 1, client)?;
    }

    Ok(())
}

fn show_cart(term: &Term, position: usize, client: &Client) -> io::Result<()> {
    term.write_line(&format!("Client {position}"))?;
    term.write_line(&format!("Balance: {}", client.balance()))?;
    term.write_line("Cart:")?;

    for cart_line in client.cart() {
        term.write_line(&cart_line.to_string())?;
    }

    term.write_line("")
}

/// What happened at the till.
pub fn show_serve(term: &Term, outcome: &ServeOutcome) -> io::Result<()> {
    let receipt = match outcome {
        ServeOutcome::QueueEmpty => return term.write_line("The queue is empty..."),
        ServeOutcome::Serviced(receipt) => receipt,
    };

    term.write_line(&format!(
        "The client has {}, the cart costs {}",
        receipt.balance, receipt.opening_total
    ))?;

    for dropped_line in &receipt.dropped {
        term.write_line(&format!(
            "The client put back {} pcs of {}",
            dropped_line.quantity(),
            dropped_line.product().title()
        ))?;
    }

    match receipt.outcome {
        CheckoutOutcome::Served { total } => {
            term.write_line(&format!("Client served! Rang up {total}."))
        }
        CheckoutOutcome::LeftUnserved => {
            term.write_line("The client could not afford anything and left...")
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
