//! # Client & Checkout
//!
//! A queued client and the checkout decision.
//!
//! ## Client Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Client State Machine                               │
//! │                                                                         │
//! │  ┌──────────┐   checkout()    ┌──────────────┐                          │
//! │  │  Queued  │────────────────►│    Served    │  cart (possibly         │
//! │  │          │                 └──────────────┘  reduced) paid for      │
//! │  │          │                 ┌──────────────┐                          │
//! │  │          │────────────────►│ LeftUnserved │  cart shed to empty     │
//! │  └──────────┘                 └──────────────┘                          │
//! │                                                                         │
//! │  checkout() consumes the Client, so both outcomes are terminal:        │
//! │  re-serving a checked-out client does not typecheck.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Shedding Pass
//! A client who cannot cover the whole cart puts back uniformly random
//! whole lines (never partial quantities) until the rest is affordable or
//! the cart is empty. This is a randomized greedy drop with no minimality
//! guarantee — it may put back more than strictly necessary.

use rand::Rng;
use serde::Serialize;

use crate::money::Money;
use crate::types::StockItem;
use crate::BALANCE_RANGE;

// =============================================================================
// Client
// =============================================================================

/// A client in the queue: a typed balance and a cart of drawn lines.
///
/// Balance and cart are both assigned once at creation. The cart only ever
/// shrinks (during checkout); the balance never changes.
#[derive(Debug)]
pub struct Client {
    balance: Money,
    cart: Vec<StockItem>,
}

impl Client {
    /// Creates a client holding `cart`, with funds drawn uniformly from
    /// [`BALANCE_RANGE`].
    pub fn new<R: Rng>(cart: Vec<StockItem>, rng: &mut R) -> Self {
        Client {
            balance: Money::from_units(rng.gen_range(BALANCE_RANGE)),
            cart,
        }
    }

    /// Creates a client with an explicit balance.
    ///
    /// Useful for scripted scenarios and tests where the outcome must not
    /// depend on the balance draw.
    pub fn with_balance(cart: Vec<StockItem>, balance: Money) -> Self {
        Client { balance, cart }
    }

    /// The client's funds.
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Current cart contents, in draw order.
    pub fn cart(&self) -> &[StockItem] {
        &self.cart
    }

    /// Sum of `quantity × price` over the current cart lines.
    ///
    /// Recomputed fresh on every call, never cached — the cart shrinks
    /// during checkout and the total must track it exactly.
    pub fn total_cart_price(&self) -> Money {
        self.cart.iter().map(StockItem::line_total).sum()
    }

    /// Rings the client up.
    ///
    /// A balance strictly above the cart total buys the whole cart outright.
    /// Anything else — including a balance exactly equal to the total —
    /// goes through the shedding pass: random whole lines are put back while
    /// the total still exceeds the balance. On exact equality the pass drops
    /// nothing and the client is served with the full cart.
    ///
    /// Consumes the client; the receipt is all that leaves the till.
    pub fn checkout<R: Rng>(mut self, rng: &mut R) -> CheckoutReceipt {
        let opening_total = self.total_cart_price();

        if self.balance > opening_total {
            return CheckoutReceipt {
                balance: self.balance,
                opening_total,
                dropped: Vec::new(),
                outcome: CheckoutOutcome::Served {
                    total: opening_total,
                },
            };
        }

        let mut dropped = Vec::new();
        let mut total = opening_total;

        // Each pass removes one whole line, so this ends within
        // `cart.len()` iterations.
        while total > self.balance && !self.cart.is_empty() {
            let index = rng.gen_range(0..self.cart.len());
            dropped.push(self.cart.remove(index));
            total = self.total_cart_price();
        }

        let outcome = if self.cart.is_empty() {
            CheckoutOutcome::LeftUnserved
        } else {
            CheckoutOutcome::Served { total }
        };

        CheckoutReceipt {
            balance: self.balance,
            opening_total,
            dropped,
            outcome,
        }
    }
}

// =============================================================================
// Checkout Receipt
// =============================================================================

/// What happened at the till — the DTO handed to the presentation layer.
#[derive(Debug, Serialize)]
pub struct CheckoutReceipt {
    /// The client's funds at the till.
    pub balance: Money,

    /// Cart total before any lines were put back.
    pub opening_total: Money,

    /// Whole lines put back during the shedding pass, in drop order.
    /// Empty when the client was served outright.
    pub dropped: Vec<StockItem>,

    /// Terminal outcome.
    pub outcome: CheckoutOutcome,
}

/// Terminal checkout outcome.
#[derive(Debug, Serialize)]
pub enum CheckoutOutcome {
    /// The client paid `total` for the (possibly reduced) cart.
    Served { total: Money },

    /// The cart shed to empty; the client left without buying anything.
    LeftUnserved,
}

// =============================================================================
// Unit Tests
// =============================================================================
