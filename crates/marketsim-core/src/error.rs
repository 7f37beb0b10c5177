//! # Error Types
//!
//! Domain-specific error types for marketsim-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (title, quantities)
//! 3. Errors are enum variants, never String
//!
//! Note the short list: an empty queue and a client who can afford nothing
//! are expected simulation outcomes, modeled as enum variants on the
//! operations that produce them — not errors.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core simulation errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A stock or cart line was asked to give up more units than it holds.
    ///
    /// ## When This Occurs
    /// Internally drawn amounts are always bounded by the line's current
    /// quantity, so this only fires on a misused [`decrease_quantity`] call
    /// from outside the generation flow.
    ///
    /// [`decrease_quantity`]: crate::types::StockItem::decrease_quantity
    #[error("Insufficient quantity of {title}: available {available}, requested {requested}")]
    InsufficientQuantity {
        title: String,
        available: u32,
        requested: u32,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
