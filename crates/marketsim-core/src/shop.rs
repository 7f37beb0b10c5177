//! # Shop
//!
//! Stock generation, queue generation, and serving.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       One Day at the Shop                               │
//! │                                                                         │
//! │  Shop::open(rng)                                                        │
//! │   ├── generate_stock()   one line per catalog title                    │
//! │   ├── snapshot opening assortment                                      │
//! │   └── create_queue()     1-3 clients, carts drawn off the shelves      │
//! │                                                                         │
//! │  serve_client()          dequeue front client ──► checkout ──► receipt │
//! │  serve_client()          ...in strict arrival order...                 │
//! │  serve_client()          queue empty ──► QueueEmpty, no state change   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Construction is one-shot and eager: stock and queue are fully generated
//! before `open` returns, and neither is ever repopulated. Cart draws
//! decrement the shelf quantities as they happen, so for every product
//!
//! ```text
//! opening quantity == remaining shelf quantity + Σ cart line quantities
//! ```
//!
//! holds at all times.

use std::collections::VecDeque;
use std::ops::Range;
use std::rc::Rc;

use rand::distributions::uniform::SampleUniform;
use rand::Rng;

use crate::client::{CheckoutReceipt, Client};
use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{Product, StockItem};
use crate::{CATALOG, PRICE_RANGE, QUEUE_SIZE_RANGE, STOCK_QUANTITY_RANGE};

// =============================================================================
// Serve Outcome
// =============================================================================

/// Result of asking the operator to serve the next client.
#[derive(Debug)]
pub enum ServeOutcome {
    /// The front client was dequeued and rung up.
    Serviced(CheckoutReceipt),

    /// Nobody in line. Nothing changed.
    QueueEmpty,
}

// =============================================================================
// Shop
// =============================================================================

/// The shop: shelf inventory, a FIFO queue of clients, and the random
/// generator every draw goes through.
///
/// Generic over [`rand::Rng`] so the caller decides the randomness source —
/// an entropy-seeded `StdRng` for a live run, a fixed-seed one for a
/// reproducible run or a test.
pub struct Shop<R> {
    opening: Vec<StockItem>,
    inventory: Vec<StockItem>,
    queue: VecDeque<Client>,
    rng: R,
}

impl<R: Rng> Shop<R> {
    /// Opens the shop for the day: generates the stock, snapshots the
    /// opening assortment, then fills the queue with clients whose carts
    /// are drawn off the freshly stocked shelves.
    ///
    /// Both generation steps run exactly once, here.
    pub fn open(rng: R) -> CoreResult<Self> {
        let mut shop = Shop {
            opening: Vec::new(),
            inventory: Vec::new(),
            queue: VecDeque::new(),
            rng,
        };

        shop.generate_stock();
        shop.opening = shop.inventory.clone();
        shop.create_queue()?;

        Ok(shop)
    }

    /// Serves the front of the queue, if anyone is waiting.
    ///
    /// The client is removed from the queue *before* checkout, so a second
    /// serve can never reach the same client.
    pub fn serve_client(&mut self) -> ServeOutcome {
        match self.queue.pop_front() {
            Some(client) => ServeOutcome::Serviced(client.checkout(&mut self.rng)),
            None => ServeOutcome::QueueEmpty,
        }
    }

    /// One stock line per catalog title, with quantity and price drawn from
    /// [`STOCK_QUANTITY_RANGE`] and [`PRICE_RANGE`].
    fn generate_stock(&mut self) {
        for title in CATALOG {
            let quantity = self.rng.gen_range(STOCK_QUANTITY_RANGE);
            let price = Money::from_units(self.rng.gen_range(PRICE_RANGE));

            self.inventory
                .push(StockItem::new(Rc::new(Product::new(title, price)), quantity));
        }
    }

    /// Fills the queue with [`QUEUE_SIZE_RANGE`] clients, in arrival order.
    fn create_queue(&mut self) -> CoreResult<()> {
        let client_count = self.rng.gen_range(QUEUE_SIZE_RANGE);

        for _ in 0..client_count {
            let client = self.create_cart()?;
            self.queue.push_back(client);
        }

        Ok(())
    }

    /// Draws one client's cart off the shelves.
    ///
    /// The attempt count comes from `[1, stock size)`. Each attempt picks a
    /// shelf line independently of previous picks — the same line may come
    /// up more than once, each time drawing against whatever it still
    /// holds — so one cart can carry several separate lines for the same
    /// product. Zero draws are discarded, never inserted.
    fn create_cart(&mut self) -> CoreResult<Client> {
        let mut cart = Vec::new();
        let attempts = uniform_or_low(&mut self.rng, 1..self.inventory.len());

        for _ in 0..attempts {
            let index = self.rng.gen_range(0..self.inventory.len());
            let amount = Self::draw_amount(&self.inventory[index], &mut self.rng);

            if amount != 0 {
                let shelf_line = &mut self.inventory[index];
                shelf_line.decrease_quantity(amount)?;

                cart.push(StockItem::new(Rc::clone(shelf_line.product()), amount));
            }
        }

        Ok(Client::new(cart, &mut self.rng))
    }

    /// Picks how many units to pull off a shelf line.
    ///
    /// An exhausted line yields 0 (no draw). Otherwise values come from
    /// `[1, quantity)` — quantity 1 yields the low bound — and anything
    /// above the line's current quantity is redrawn until an acceptable
    /// amount comes up. The exclusive upper bound already keeps every draw
    /// acceptable; the redraw check stays as a safeguard on the bound.
    fn draw_amount(line: &StockItem, rng: &mut R) -> u32 {
        if line.quantity() == 0 {
            return 0;
        }

        loop {
            let amount = uniform_or_low(rng, 1..line.quantity());
            if amount <= line.quantity() {
                return amount;
            }
        }
    }
}

impl<R> Shop<R> {
    /// The assortment as generated, before any cart draws.
    pub fn opening_inventory(&self) -> &[StockItem] {
        &self.opening
    }

    /// The shelves as they stand now.
    pub fn inventory(&self) -> &[StockItem] {
        &self.inventory
    }

    /// The waiting clients, front of the line first.
    pub fn queue(&self) -> impl Iterator<Item = &Client> {
        self.queue.iter()
    }

    /// How many clients are waiting.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Uniform draw from a low-inclusive/high-exclusive range.
///
/// An empty range yields the low bound instead of panicking; both the cart
/// attempt count and the per-line draw hit this when only one value is
/// possible.
fn uniform_or_low<T, R>(rng: &mut R, range: Range<T>) -> T
where
    T: SampleUniform + PartialOrd + Copy,
    R: Rng,
{
    if range.end <= range.start {
        range.start
    } else {
        rng.gen_range(range)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::client::CheckoutOutcome;

    fn shop(seed: u64) -> Shop<StdRng> {
        Shop::open(StdRng::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn test_generated_stock_matches_catalog_and_ranges() {
        for seed in 0..50 {
            let shop = shop(seed);
            let opening = shop.opening_inventory();

            assert_eq!(opening.len(), CATALOG.len());
            for (line, title) in opening.iter().zip(CATALOG) {
                assert_eq!(line.product().title(), title);
                assert!((2..10).contains(&line.quantity()));
                assert!((5..25).contains(&line.product().price().units()));
            }
        }
    }

    #[test]
    fn test_queue_size_in_range() {
        for seed in 0..50 {
            let shop = shop(seed);
            assert!((1..4).contains(&shop.queue_len()));
        }
    }

    #[test]
    fn test_cart_lines_never_zero_quantity() {
        for seed in 0..50 {
            let shop = shop(seed);
            for client in shop.queue() {
                for cart_line in client.cart() {
                    assert!(cart_line.quantity() > 0);
                }
            }
        }
    }

    #[test]
    fn test_stock_conservation() {
        // Whatever was pulled off a shelf is sitting in somebody's cart:
        // opening == remaining + drawn, per product.
        for seed in 0..50 {
            let shop = shop(seed);

            for (opening_line, shelf_line) in
                shop.opening_inventory().iter().zip(shop.inventory())
            {
                assert!(Rc::ptr_eq(opening_line.product(), shelf_line.product()));

                let drawn: u32 = shop
                    .queue()
                    .flat_map(|client| client.cart())
                    .filter(|cart_line| Rc::ptr_eq(cart_line.product(), shelf_line.product()))
                    .map(StockItem::quantity)
                    .sum();

                assert_eq!(opening_line.quantity(), shelf_line.quantity() + drawn);
            }
        }
    }

    #[test]
    fn test_serve_is_fifo_and_empty_queue_is_a_no_op() {
        let mut shop = shop(11);

        let expected: Vec<(Money, Money)> = shop
            .queue()
            .map(|client| (client.balance(), client.total_cart_price()))
            .collect();
        let shelf_before: Vec<u32> = shop.inventory().iter().map(StockItem::quantity).collect();

        for (balance, opening_total) in expected {
            match shop.serve_client() {
                ServeOutcome::Serviced(receipt) => {
                    assert_eq!(receipt.balance, balance);
                    assert_eq!(receipt.opening_total, opening_total);
                }
                ServeOutcome::QueueEmpty => panic!("queue drained early"),
            }
        }

        // Drained: further serves report an empty queue and touch nothing.
        assert!(matches!(shop.serve_client(), ServeOutcome::QueueEmpty));
        assert!(matches!(shop.serve_client(), ServeOutcome::QueueEmpty));
        assert_eq!(shop.queue_len(), 0);

        let shelf_after: Vec<u32> = shop.inventory().iter().map(StockItem::quantity).collect();
        assert_eq!(shelf_before, shelf_after);
    }

    #[test]
    fn test_served_clients_never_overpay() {
        for seed in 0..50 {
            let mut shop = shop(seed);

            while let ServeOutcome::Serviced(receipt) = shop.serve_client() {
                if let CheckoutOutcome::Served { total } = receipt.outcome {
                    assert!(total <= receipt.balance);
                }
            }
        }
    }

    #[test]
    fn test_draw_amount_on_exhausted_line_is_zero() {
        let mut rng = StdRng::seed_from_u64(0);
        let line = StockItem::new(
            Rc::new(Product::new("Water", Money::from_units(5))),
            0,
        );

        assert_eq!(Shop::<StdRng>::draw_amount(&line, &mut rng), 0);
    }

    #[test]
    fn test_draw_amount_respects_current_quantity() {
        let mut rng = StdRng::seed_from_u64(0);

        // A single unit on the shelf always draws exactly that unit.
        let single = StockItem::new(Rc::new(Product::new("Apple", Money::from_units(9))), 1);
        assert_eq!(Shop::<StdRng>::draw_amount(&single, &mut rng), 1);

        let stocked = StockItem::new(Rc::new(Product::new("Tomato", Money::from_units(12))), 9);
        for _ in 0..200 {
            let amount = Shop::<StdRng>::draw_amount(&stocked, &mut rng);
            assert!((1..9).contains(&amount));
        }
    }

    #[test]
    fn test_uniform_or_low_on_empty_range() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(uniform_or_low(&mut rng, 1..1), 1);
        assert_eq!(uniform_or_low(&mut rng, 5..3), 5);
    }
}
