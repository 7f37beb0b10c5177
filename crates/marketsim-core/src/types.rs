//! # Domain Types
//!
//! Core domain types used throughout marketsim.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌───────────────────────────────┐          │
//! │  │    Product      │        │          StockItem            │          │
//! │  │  ─────────────  │◄───────│  ────────────────────────     │          │
//! │  │  title          │  Rc    │  product (shared reference)   │          │
//! │  │  price (Money)  │        │  quantity (mutable)           │          │
//! │  └─────────────────┘        └───────────────────────────────┘          │
//! │                                                                         │
//! │  One Product may be referenced by the shop's stock line AND by any     │
//! │  number of cart lines at once. The Product itself is never copied      │
//! │  or mutated; only StockItem quantities change.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::rc::Rc;

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product on sale: a (price, title) pair, immutable after creation.
///
/// Shared by reference (`Rc<Product>`) between the shop inventory and every
/// cart line that mentions it — the simulation is single-threaded, so `Rc`
/// is the right pointer.
#[derive(Debug, Serialize)]
pub struct Product {
    title: String,
    price: Money,
}

impl Product {
    /// Creates a new product. Both fields are fixed for the object's lifetime.
    pub fn new(title: impl Into<String>, price: Money) -> Self {
        Product {
            title: title.into(),
            price,
        }
    }

    /// The product's display name.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Price per unit.
    pub fn price(&self) -> Money {
        self.price
    }
}

// =============================================================================
// StockItem
// =============================================================================

/// A (product, quantity) record.
///
/// Used both as a **stock line** in the shop's inventory and as a **cart
/// line** inside a client's cart; the two are independent records that share
/// the same `Rc<Product>`. Quantity is non-negative by construction (`u32`),
/// and [`decrease_quantity`](StockItem::decrease_quantity) refuses to drive
/// it below zero.
#[derive(Debug, Clone, Serialize)]
pub struct StockItem {
    product: Rc<Product>,
    quantity: u32,
}

impl StockItem {
    /// Creates a new line holding `quantity` units of `product`.
    pub fn new(product: Rc<Product>, quantity: u32) -> Self {
        StockItem { product, quantity }
    }

    /// The shared product this line refers to.
    pub fn product(&self) -> &Rc<Product> {
        &self.product
    }

    /// Units currently on this line.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Price × quantity for this line.
    pub fn line_total(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }

    /// Subtracts `amount` units from this line.
    ///
    /// Returns [`CoreError::InsufficientQuantity`] if the line holds fewer
    /// than `amount` units. Amounts drawn by the generation flow are always
    /// bounded by the current quantity, so the guard only trips on misuse.
    pub fn decrease_quantity(&mut self, amount: u32) -> CoreResult<()> {
        if amount > self.quantity {
            return Err(CoreError::InsufficientQuantity {
                title: self.product.title().to_string(),
                available: self.quantity,
                requested: amount,
            });
        }

        self.quantity -= amount;
        Ok(())
    }

    /// Unconditional quantity overwrite.
    pub fn set_quantity(&mut self, amount: u32) {
        self.quantity = amount;
    }
}

/// One human-readable line per stock or cart entry.
///
/// The same formatting serves the shop assortment and cart displays; the
/// printed price and quantity always come straight from the current state.
impl fmt::Display for StockItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Item {}, price {} | on hand: {} pcs",
            self.product.title(),
            self.product.price(),
            self.quantity
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn water() -> Rc<Product> {
        Rc::new(Product::new("Water", Money::from_units(5)))
    }

    #[test]
    fn test_line_total() {
        let line = StockItem::new(water(), 3);
        assert_eq!(line.line_total(), Money::from_units(15));
    }

    #[test]
    fn test_decrease_quantity() {
        let mut line = StockItem::new(water(), 4);

        line.decrease_quantity(3).unwrap();
        assert_eq!(line.quantity(), 1);

        line.decrease_quantity(1).unwrap();
        assert_eq!(line.quantity(), 0);
    }

    #[test]
    fn test_decrease_quantity_guard() {
        let mut line = StockItem::new(water(), 2);

        let err = line.decrease_quantity(3).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientQuantity {
                available: 2,
                requested: 3,
                ..
            }
        ));

        // The failed call must not have touched the line.
        assert_eq!(line.quantity(), 2);
    }

    #[test]
    fn test_set_quantity() {
        let mut line = StockItem::new(water(), 2);
        line.set_quantity(9);
        assert_eq!(line.quantity(), 9);
    }

    #[test]
    fn test_shared_product_reference() {
        let product = water();
        let stock_line = StockItem::new(Rc::clone(&product), 4);
        let cart_line = StockItem::new(Rc::clone(&product), 1);

        assert!(Rc::ptr_eq(stock_line.product(), cart_line.product()));
    }

    #[test]
    fn test_display() {
        let line = StockItem::new(water(), 4);
        assert_eq!(line.to_string(), "Item Water, price $5 | on hand: 4 pcs");
    }
}
