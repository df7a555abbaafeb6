//! # Checkout
//!
//! The checkout routine: validates every cart line, mutates stock, deducts
//! the customer's wallet, and produces the receipt and shipment notice.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        checkout()                                   │
//! │                                                                     │
//! │  cart empty? ──────────────────────────► Err(EmptyCart)             │
//! │       │                                                             │
//! │       ▼  for each line, in cart order:                              │
//! │  sku in catalog? ──────── no ──────────► Err(ProductNotFound)       │
//! │  expired at `at`? ─────── yes ─────────► Err(ProductExpired)        │
//! │  stock >= qty? ────────── no ──────────► Err(OutOfStock)            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  reduce stock, subtotal += price × qty                              │
//! │  shippable? shipping += $15.00 flat, record shipment line           │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  customer.deduct(subtotal + shipping) ─► Err(InsufficientFunds)     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Ok(CheckoutSummary { receipt, shipment })                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Fail-Fast, No Rollback
//! The first failing line aborts the attempt, but lines processed before it
//! keep their stock reduction, and an `InsufficientFunds` failure happens
//! after ALL stock was reduced. This mirrors the historical behavior of the
//! system and is pinned by tests; see the open-questions section of
//! DESIGN.md before "fixing" it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::customer::Customer;
use crate::error::{CheckoutError, CheckoutResult};
use crate::money::Money;
use crate::product::Catalog;
use crate::receipt::{Receipt, ReceiptLine};
use crate::shipping::ShipmentNotice;
use crate::SHIPPING_FEE;

/// Everything a successful checkout produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSummary {
    /// The printable receipt.
    pub receipt: Receipt,

    /// Shipment notice, present iff at least one line needs shipping.
    pub shipment: Option<ShipmentNotice>,
}

/// Runs checkout for a cart against the catalog and the customer's wallet.
///
/// `at` is the instant used for expiry checks; applications pass
/// `Utc::now()`, tests pass fixed instants.
///
/// On success the catalog's stock and the customer's balance have been
/// updated and the returned [`CheckoutSummary`] holds the receipt plus the
/// shipment notice (if any line needs shipping). On failure the error names
/// the offending line; partial stock reductions are NOT rolled back.
pub fn checkout(
    catalog: &mut Catalog,
    customer: &mut Customer,
    cart: &Cart,
    at: DateTime<Utc>,
) -> CheckoutResult<CheckoutSummary> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let mut subtotal = Money::zero();
    let mut shipping = Money::zero();
    let mut lines = Vec::with_capacity(cart.len());
    let mut shipment = ShipmentNotice::new();

    for item in cart.items() {
        let product = catalog
            .get_mut(&item.sku)
            .ok_or_else(|| CheckoutError::ProductNotFound {
                sku: item.sku.clone(),
            })?;

        if product.is_expired(at) {
            return Err(CheckoutError::ProductExpired {
                sku: product.sku.clone(),
            });
        }

        if !product.in_stock(item.quantity) {
            return Err(CheckoutError::OutOfStock {
                sku: product.sku.clone(),
                available: product.stock,
                requested: item.quantity,
            });
        }

        product.reduce_stock(item.quantity);

        let line_total = product.unit_price.multiply_quantity(item.quantity);
        subtotal += line_total;

        if product.requires_shipping() {
            // Flat fee per shippable line; weight recorded once per line
            shipping += SHIPPING_FEE;
            shipment.add_line(product.name.clone(), product.weight());
        }

        lines.push(ReceiptLine {
            name: product.name.clone(),
            quantity: item.quantity,
            line_total,
        });
    }

    let total = subtotal + shipping;
    customer.deduct(total)?;

    let receipt = Receipt {
        lines,
        subtotal,
        shipping,
        total,
        balance_left: customer.balance(),
    };

    let shipment = if shipment.is_empty() {
        None
    } else {
        Some(shipment)
    };

    Ok(CheckoutSummary { receipt, shipment })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{Product, Weight};
    use chrono::Duration;

    /// The catalog from the reference scenario: Cheese (expirable +
    /// shippable), Biscuits (expirable), TV (shippable), Scratch Card
    /// (plain).
    fn demo_catalog(now: DateTime<Utc>) -> Catalog {
        let tomorrow = now + Duration::days(1);
        let mut catalog = Catalog::new();
        catalog
            .insert(
                Product::new("CHEESE", "Cheese", Money::from_cents(10_000), 5)
                    .with_expiry(tomorrow)
                    .with_shipping_weight(Weight::from_grams(400)),
            )
            .unwrap();
        catalog
            .insert(
                Product::new("BISCUITS", "Biscuits", Money::from_cents(15_000), 3)
                    .with_expiry(tomorrow),
            )
            .unwrap();
        catalog
            .insert(
                Product::new("TV", "TV", Money::from_cents(300_000), 2)
                    .with_shipping_weight(Weight::from_grams(5000)),
            )
            .unwrap();
        catalog
            .insert(Product::new("CARD", "Scratch Card", Money::from_cents(5_000), 10))
            .unwrap();
        catalog
    }

    #[test]
    fn test_empty_cart_fails() {
        let now = Utc::now();
        let mut catalog = demo_catalog(now);
        let mut customer = Customer::new("Reham", Money::from_cents(100_000));
        let cart = Cart::new();

        let err = checkout(&mut catalog, &mut customer, &cart, now).unwrap_err();
        assert_eq!(err, CheckoutError::EmptyCart);
        assert_eq!(customer.balance(), Money::from_cents(100_000));
    }

    #[test]
    fn test_reference_scenario() {
        // Cheese x2 + Biscuits x1 + Scratch Card x1, balance $1000.00:
        // subtotal $400.00, shipping $15.00 (one shippable line),
        // total $415.00, balance left $585.00
        let now = Utc::now();
        let mut catalog = demo_catalog(now);
        let mut customer = Customer::new("Reham", Money::from_cents(100_000));

        let mut cart = Cart::new();
        cart.add(&catalog, "CHEESE", 2).unwrap();
        cart.add(&catalog, "BISCUITS", 1).unwrap();
        cart.add(&catalog, "CARD", 1).unwrap();

        let summary = checkout(&mut catalog, &mut customer, &cart, now).unwrap();

        assert_eq!(summary.receipt.subtotal, Money::from_cents(40_000));
        assert_eq!(summary.receipt.shipping, Money::from_cents(1_500));
        assert_eq!(summary.receipt.total, Money::from_cents(41_500));
        assert_eq!(summary.receipt.balance_left, Money::from_cents(58_500));
        assert_eq!(customer.balance(), Money::from_cents(58_500));

        // Stock reduced by exactly the purchased quantities
        assert_eq!(catalog.get("CHEESE").unwrap().stock, 3);
        assert_eq!(catalog.get("BISCUITS").unwrap().stock, 2);
        assert_eq!(catalog.get("CARD").unwrap().stock, 9);
        assert_eq!(catalog.get("TV").unwrap().stock, 2);

        // One shippable line: Cheese at its unit weight, not weight x qty
        let shipment = summary.shipment.unwrap();
        assert_eq!(shipment.lines().len(), 1);
        assert_eq!(shipment.total_weight(), Weight::from_grams(400));
    }

    #[test]
    fn test_receipt_lines_keep_cart_order() {
        let now = Utc::now();
        let mut catalog = demo_catalog(now);
        let mut customer = Customer::new("Reham", Money::from_cents(100_000));

        let mut cart = Cart::new();
        cart.add(&catalog, "CARD", 1).unwrap();
        cart.add(&catalog, "CHEESE", 1).unwrap();

        let summary = checkout(&mut catalog, &mut customer, &cart, now).unwrap();
        let names: Vec<&str> = summary
            .receipt
            .lines
            .iter()
            .map(|l| l.name.as_str())
            .collect();
        assert_eq!(names, vec!["Scratch Card", "Cheese"]);
    }

    #[test]
    fn test_no_shipment_for_unshippable_cart() {
        let now = Utc::now();
        let mut catalog = demo_catalog(now);
        let mut customer = Customer::new("Reham", Money::from_cents(100_000));

        let mut cart = Cart::new();
        cart.add(&catalog, "CARD", 2).unwrap();

        let summary = checkout(&mut catalog, &mut customer, &cart, now).unwrap();
        assert!(summary.shipment.is_none());
        assert_eq!(summary.receipt.shipping, Money::zero());
    }

    #[test]
    fn test_flat_fee_per_shippable_line() {
        let now = Utc::now();
        let mut catalog = demo_catalog(now);
        let mut customer = Customer::new("Reham", Money::from_cents(1_000_000));

        let mut cart = Cart::new();
        cart.add(&catalog, "CHEESE", 2).unwrap();
        cart.add(&catalog, "TV", 1).unwrap();

        let summary = checkout(&mut catalog, &mut customer, &cart, now).unwrap();

        // Two shippable lines: 2 x $15.00, regardless of quantities
        assert_eq!(summary.receipt.shipping, Money::from_cents(3_000));
        let shipment = summary.shipment.unwrap();
        assert_eq!(shipment.lines().len(), 2);
        assert_eq!(shipment.total_weight(), Weight::from_grams(5_400));
    }

    #[test]
    fn test_expired_product_fails_before_any_deduction() {
        let now = Utc::now();
        let mut catalog = demo_catalog(now);
        let mut customer = Customer::new("Reham", Money::from_cents(100_000));

        let mut cart = Cart::new();
        cart.add(&catalog, "CHEESE", 1).unwrap();

        let err = checkout(&mut catalog, &mut customer, &cart, now + Duration::days(2))
            .unwrap_err();
        assert_eq!(err, CheckoutError::ProductExpired { sku: "CHEESE".to_string() });
        assert_eq!(customer.balance(), Money::from_cents(100_000));
        assert_eq!(catalog.get("CHEESE").unwrap().stock, 5);
    }

    #[test]
    fn test_stock_drop_between_add_and_checkout() {
        let now = Utc::now();
        let mut catalog = demo_catalog(now);
        let mut customer = Customer::new("Reham", Money::from_cents(100_000));

        let mut cart = Cart::new();
        cart.add(&catalog, "CARD", 5).unwrap();

        // Another sale drains the stock after the add
        catalog.get_mut("CARD").unwrap().reduce_stock(8);

        let err = checkout(&mut catalog, &mut customer, &cart, now).unwrap_err();
        assert_eq!(
            err,
            CheckoutError::OutOfStock {
                sku: "CARD".to_string(),
                available: 2,
                requested: 5,
            }
        );
    }

    #[test]
    fn test_mid_cart_failure_keeps_earlier_stock_reductions() {
        let now = Utc::now();
        let mut catalog = demo_catalog(now);
        let mut customer = Customer::new("Reham", Money::from_cents(100_000));

        let mut cart = Cart::new();
        cart.add(&catalog, "CHEESE", 2).unwrap();
        cart.add(&catalog, "BISCUITS", 3).unwrap();

        catalog.get_mut("BISCUITS").unwrap().reduce_stock(2);

        let err = checkout(&mut catalog, &mut customer, &cart, now).unwrap_err();
        assert!(matches!(err, CheckoutError::OutOfStock { .. }));

        // Cheese was processed first and keeps its reduction (no rollback)
        assert_eq!(catalog.get("CHEESE").unwrap().stock, 3);
        // The wallet was never touched
        assert_eq!(customer.balance(), Money::from_cents(100_000));
    }

    #[test]
    fn test_insufficient_funds_after_stock_reduced() {
        let now = Utc::now();
        let mut catalog = demo_catalog(now);
        let mut customer = Customer::new("Reham", Money::from_cents(1_000));

        let mut cart = Cart::new();
        cart.add(&catalog, "CHEESE", 2).unwrap();

        let err = checkout(&mut catalog, &mut customer, &cart, now).unwrap_err();
        assert_eq!(
            err,
            CheckoutError::InsufficientFunds {
                required: Money::from_cents(21_500),
                balance: Money::from_cents(1_000),
            }
        );

        // Stock was already reduced when the deduction failed (no rollback)
        assert_eq!(catalog.get("CHEESE").unwrap().stock, 3);
        assert_eq!(customer.balance(), Money::from_cents(1_000));
    }

    #[test]
    fn test_product_removed_between_add_and_checkout() {
        let now = Utc::now();
        let mut catalog = demo_catalog(now);
        let mut customer = Customer::new("Reham", Money::from_cents(100_000));

        let mut cart = Cart::new();
        cart.add(&catalog, "CARD", 1).unwrap();

        let mut emptied = Catalog::new();
        std::mem::swap(&mut catalog, &mut emptied);

        let err = checkout(&mut catalog, &mut customer, &cart, now).unwrap_err();
        assert_eq!(err, CheckoutError::ProductNotFound { sku: "CARD".to_string() });
    }
}
