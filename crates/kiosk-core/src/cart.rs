//! # Cart
//!
//! The shopping cart: an ordered list of SKU + quantity line items.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                  │
//! │                                                                     │
//! │  Action                   Stock check           Cart change         │
//! │  ──────                   ───────────           ───────────         │
//! │                                                                     │
//! │  add(catalog, sku, qty) ─► qty <= available? ──► items.push(item)   │
//! │                                                                     │
//! │  clear() ───────────────────────────────────────► items.clear()     │
//! │                                                                     │
//! │  NOTE: add() checks stock but does NOT reserve it. The level seen   │
//! │        at add time can change before checkout; checkout re-checks.  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CheckoutError, CheckoutResult};
use crate::product::Catalog;
use crate::validation::validate_quantity;
use crate::{MAX_CART_ITEMS, MAX_ITEM_QUANTITY};

// =============================================================================
// Cart Item
// =============================================================================

/// A line item: a product reference plus a requested quantity.
///
/// Holds the SKU, not the product. The cart never owns products; price and
/// stock are read from the catalog when checkout runs, so a price change
/// between add and checkout is reflected in the final total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// SKU of the product in the catalog.
    pub sku: String,

    /// Requested quantity.
    pub quantity: u32,
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Line items keep insertion order; checkout processes them in order
/// - Quantity is validated positive and <= MAX_ITEM_QUANTITY on add
/// - At most MAX_CART_ITEMS line items
/// - Empty is a valid state, but checkout rejects it
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds a product to the cart by SKU.
    ///
    /// ## Failure Modes
    /// - [`CheckoutError::ProductNotFound`] - the SKU is not in the catalog
    /// - [`CheckoutError::InsufficientStockOnAdd`] - requested more than the
    ///   stock available right now
    /// - [`CheckoutError::CartTooLarge`] / [`CheckoutError::QuantityTooLarge`]
    /// - [`CheckoutError::Validation`] - zero quantity
    ///
    /// Stock is NOT reserved: two carts can both add the last unit, and the
    /// later checkout fails with `OutOfStock`.
    pub fn add(&mut self, catalog: &Catalog, sku: &str, quantity: u32) -> CheckoutResult<()> {
        validate_quantity(quantity)?;

        if quantity > MAX_ITEM_QUANTITY {
            return Err(CheckoutError::QuantityTooLarge {
                requested: quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }

        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CheckoutError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        let product = catalog
            .get(sku)
            .ok_or_else(|| CheckoutError::ProductNotFound {
                sku: sku.to_string(),
            })?;

        if !product.in_stock(quantity) {
            return Err(CheckoutError::InsufficientStockOnAdd {
                sku: product.sku.clone(),
                available: product.stock,
                requested: quantity,
            });
        }

        self.items.push(CartItem {
            sku: product.sku.clone(),
            quantity,
        });
        Ok(())
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Clears all line items.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
