//! # marketsim-core: Pure Simulation Logic for marketsim
//!
//! This crate is the **heart** of marketsim: a single-threaded, in-memory
//! simulation of a small shop — a generated stock of products, a FIFO queue
//! of clients with randomly drawn carts, and a checkout decision that sheds
//! whole cart lines at random until a client can pay.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       marketsim Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     apps/cli (terminal)                         │   │
//! │  │    show queue ──► serve next client ──► quit                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ key dispatch                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ marketsim-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   money   │  │  client   │  │   shop    │   │   │
//! │  │   │  Product  │  │   Money   │  │  Client   │  │   Shop    │   │   │
//! │  │   │ StockItem │  │           │  │ Checkout  │  │  Serving  │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TERMINAL • INJECTED RANDOMNESS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, StockItem)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`client`] - A queued client and the checkout decision
//! - [`shop`] - Stock/queue generation and serving
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **No I/O**: Terminal, file system, and logging are FORBIDDEN here
//! 2. **Injected Randomness**: Every draw goes through a caller-supplied
//!    [`rand::Rng`], so a seeded generator makes a whole run reproducible
//! 3. **Integer Money**: All monetary values are whole currency units (u64)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use marketsim_core::{ServeOutcome, Shop};
//!
//! // A seeded generator makes the whole day reproducible.
//! let mut shop = Shop::open(StdRng::seed_from_u64(7)).unwrap();
//!
//! // Serve everyone in line, in arrival order.
//! while let ServeOutcome::Serviced(receipt) = shop.serve_client() {
//!     println!("client had {}", receipt.balance);
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod client;
pub mod error;
pub mod money;
pub mod shop;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use marketsim_core::Shop` instead of
// `use marketsim_core::shop::Shop`

pub use client::{CheckoutOutcome, CheckoutReceipt, Client};
pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use shop::{ServeOutcome, Shop};
pub use types::{Product, StockItem};

use std::ops::Range;

// =============================================================================
// Crate-Level Constants
// =============================================================================
// All ranges below are low-inclusive/high-exclusive, exactly as drawn via
// `Rng::gen_range`. The upper bounds are deliberate: a queue, for example,
// never actually holds 4 clients. Do not "fix" the bounds.

/// The fixed product catalog. One stock line is generated per title.
pub const CATALOG: [&str; 6] = [
    "Tomato",
    "Cucumber",
    "Apple",
    "Chocolate",
    "Water",
    "Lipton",
];

/// Units on the shelf per stock line at opening, drawn from `[2, 10)`.
pub const STOCK_QUANTITY_RANGE: Range<u32> = 2..10;

/// Price per unit for a generated product, drawn from `[5, 25)`.
pub const PRICE_RANGE: Range<u64> = 5..25;

/// A client's funds, drawn once at creation from `[10, 120)`.
pub const BALANCE_RANGE: Range<u64> = 10..120;

/// Clients in line at opening, drawn from `[1, 4)`.
pub const QUEUE_SIZE_RANGE: Range<usize> = 1..4;
