//! # kiosk-core: Pure Business Logic for Kiosk
//!
//! This crate is the **heart** of Kiosk. It contains all business logic as
//! pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Kiosk Architecture                           │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                    apps/cli (binary)                          │ │
//! │  │    catalog setup ──► cart fill ──► checkout ──► print         │ │
//! │  └─────────────────────────────┬─────────────────────────────────┘ │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐ │
//! │  │               ★ kiosk-core (THIS CRATE) ★                     │ │
//! │  │                                                               │ │
//! │  │  ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌──────────────────┐   │ │
//! │  │  │  money  │ │ product │ │   cart   │ │     checkout     │   │ │
//! │  │  │  Money  │ │ Product │ │   Cart   │ │  checkout()      │   │ │
//! │  │  │ Weight* │ │ Catalog │ │ CartItem │ │ CheckoutSummary  │   │ │
//! │  │  └─────────┘ └─────────┘ └──────────┘ └──────────────────┘   │ │
//! │  │  ┌──────────┐ ┌──────────┐ ┌─────────┐ ┌────────────────┐    │ │
//! │  │  │ customer │ │ shipping │ │ receipt │ │ error/validate │    │ │
//! │  │  └──────────┘ └──────────┘ └─────────┘ └────────────────┘    │ │
//! │  │                                                               │ │
//! │  │  NO I/O • NO CLOCK • NO PRINTING • PURE FUNCTIONS             │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! (* Weight lives in `product`)
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: expiry checks take the instant as a parameter,
//!    receipts are values, printing belongs to the application layer
//! 2. **Integer Money**: all monetary values are cents (i64), weights are
//!    grams (u32); no floating point in business math
//! 3. **Explicit Errors**: all errors are typed enum variants, never
//!    strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::Utc;
//! use kiosk_core::{checkout, Cart, Catalog, Customer, Money, Product};
//!
//! let mut catalog = Catalog::new();
//! catalog.insert(Product::new("CARD", "Scratch Card", Money::from_cents(5_000), 10))?;
//!
//! let mut customer = Customer::new("Reham", Money::from_cents(100_000));
//! let mut cart = Cart::new();
//! cart.add(&catalog, "CARD", 1)?;
//!
//! let summary = checkout(&mut catalog, &mut customer, &cart, Utc::now())?;
//! assert_eq!(summary.receipt.total, Money::from_cents(5_000));
//! # Ok::<(), kiosk_core::CheckoutError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod customer;
pub mod error;
pub mod money;
pub mod product;
pub mod receipt;
pub mod shipping;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use kiosk_core::Money` instead of
// `use kiosk_core::money::Money`

pub use cart::{Cart, CartItem};
pub use checkout::{checkout, CheckoutSummary};
pub use customer::Customer;
pub use error::{CheckoutError, CheckoutResult, ValidationError};
pub use money::Money;
pub use product::{Catalog, Product, Weight};
pub use receipt::{Receipt, ReceiptLine};
pub use shipping::{ShipmentLine, ShipmentNotice};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Flat shipping fee charged once per shippable line item.
///
/// A cart line with two units of one shippable product incurs the fee once;
/// two separate shippable lines incur it twice.
pub const SHIPPING_FEE: Money = Money::from_cents(1_500);

/// Maximum line items allowed in a single cart.
///
/// ## Business Reason
/// Prevents runaway carts and ensures reasonable transaction sizes.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single line item.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: u32 = 999;
