//! # Product & Catalog
//!
//! Products and the in-memory catalog that owns them.
//!
//! ## Capability Fields, Not Subtypes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Two orthogonal capabilities combine into four product variants:   │
//! │                                                                     │
//! │                   expiry: None          expiry: Some(date)          │
//! │  shipping: None   plain (ScratchCard)   expirable (Biscuits)        │
//! │  shipping: Some   shippable (TV)        both (Cheese)               │
//! │                                                                     │
//! │  One struct with two Option fields covers all four. No trait       │
//! │  objects, no downcasting: `requires_shipping()` is a field check.  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Products carry a `sku` business identifier. Carts reference products by
//! SKU; the catalog owns the product values themselves. Products are
//! long-lived and shared across carts through the catalog.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CheckoutResult;
use crate::money::Money;
use crate::validation::{validate_price_cents, validate_product_name, validate_sku};

// =============================================================================
// Weight
// =============================================================================

/// A package weight in grams.
///
/// Same ethos as [`Money`]: store the smallest unit as an integer and only
/// convert at the display boundary. `0.4kg` is stored as `400`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Weight(u32);

impl Weight {
    /// Creates a weight from grams.
    #[inline]
    pub const fn from_grams(grams: u32) -> Self {
        Weight(grams)
    }

    /// Returns the weight in grams.
    #[inline]
    pub const fn grams(&self) -> u32 {
        self.0
    }

    /// Zero weight.
    #[inline]
    pub const fn zero() -> Self {
        Weight(0)
    }
}

/// Display renders kilograms the way they appear on a shipment notice:
/// `400` grams becomes `0.4kg`, `5000` becomes `5kg`.
impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}kg", self.0 as f64 / 1000.0)
    }
}

impl std::ops::Add for Weight {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl std::ops::AddAssign for Weight {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Stock Keeping Unit - business identifier, unique within the catalog.
    pub sku: String,

    /// Display name shown on the receipt and shipment notice.
    pub name: String,

    /// Unit price.
    pub unit_price: Money,

    /// Current stock level. Never goes negative: reductions are checked
    /// against the level first and only happen during checkout.
    pub stock: u32,

    /// Expiry date, if this product can expire.
    pub expiry: Option<DateTime<Utc>>,

    /// Shipping weight, if this product needs physical shipment.
    pub shipping_weight: Option<Weight>,
}

impl Product {
    /// Creates a plain product: no expiry, no shipping.
    pub fn new(sku: impl Into<String>, name: impl Into<String>, unit_price: Money, stock: u32) -> Self {
        Product {
            sku: sku.into(),
            name: name.into(),
            unit_price,
            stock,
            expiry: None,
            shipping_weight: None,
        }
    }

    /// Adds an expiry date (builder style, used for the expirable variants).
    pub fn with_expiry(mut self, expiry: DateTime<Utc>) -> Self {
        self.expiry = Some(expiry);
        self
    }

    /// Adds a shipping weight (builder style, used for the shippable variants).
    pub fn with_shipping_weight(mut self, weight: Weight) -> Self {
        self.shipping_weight = Some(weight);
        self
    }

    /// Checks whether the product is expired at the given instant.
    ///
    /// Products without an expiry date never expire. The instant is a
    /// parameter so the check stays deterministic; callers pass `Utc::now()`.
    pub fn is_expired(&self, at: DateTime<Utc>) -> bool {
        match self.expiry {
            Some(expiry) => at > expiry,
            None => false,
        }
    }

    /// Checks whether the product needs physical shipment.
    #[inline]
    pub fn requires_shipping(&self) -> bool {
        self.shipping_weight.is_some()
    }

    /// Returns the shipping weight, zero for non-shippable products.
    #[inline]
    pub fn weight(&self) -> Weight {
        self.shipping_weight.unwrap_or(Weight::zero())
    }

    /// Checks whether the requested quantity can currently be sold.
    #[inline]
    pub fn in_stock(&self, quantity: u32) -> bool {
        self.stock >= quantity
    }

    /// Reduces stock by the sold quantity.
    ///
    /// Callers must have verified availability via [`Product::in_stock`];
    /// the saturating arithmetic keeps the invariant (stock never negative)
    /// even if they did not.
    pub fn reduce_stock(&mut self, quantity: u32) {
        self.stock = self.stock.saturating_sub(quantity);
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The in-memory product catalog.
///
/// Owns every [`Product`]; carts hold SKU references into it. A `BTreeMap`
/// keeps iteration order stable for listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    products: BTreeMap<String, Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog {
            products: BTreeMap::new(),
        }
    }

    /// Inserts a product, replacing any previous product with the same SKU.
    ///
    /// Validates the SKU, name, and price first; a product that fails
    /// validation never enters the catalog.
    pub fn insert(&mut self, product: Product) -> CheckoutResult<()> {
        validate_sku(&product.sku)?;
        validate_product_name(&product.name)?;
        validate_price_cents(product.unit_price.cents())?;

        self.products.insert(product.sku.clone(), product);
        Ok(())
    }

    /// Looks up a product by SKU.
    pub fn get(&self, sku: &str) -> Option<&Product> {
        self.products.get(sku)
    }

    /// Looks up a product by SKU for mutation (stock reduction).
    pub fn get_mut(&mut self, sku: &str) -> Option<&mut Product> {
        self.products.get_mut(sku)
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterates products in SKU order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn test_weight_display() {
        assert_eq!(format!("{}", Weight::from_grams(400)), "0.4kg");
        assert_eq!(format!("{}", Weight::from_grams(5000)), "5kg");
        assert_eq!(format!("{}", Weight::from_grams(0)), "0kg");
    }

    #[test]
    fn test_weight_addition() {
        let total = Weight::from_grams(400) + Weight::from_grams(400);
        assert_eq!(total.grams(), 800);
        assert_eq!(format!("{}", total), "0.8kg");
    }

    #[test]
    fn test_plain_product_never_expires_never_ships() {
        let card = Product::new("CARD", "Scratch Card", Money::from_cents(5_000), 10);
        assert!(!card.is_expired(now() + Duration::days(10_000)));
        assert!(!card.requires_shipping());
        assert_eq!(card.weight(), Weight::zero());
    }

    #[test]
    fn test_expiry_check_uses_given_instant() {
        let at = now();
        let cheese = Product::new("CHEESE", "Cheese", Money::from_cents(10_000), 5)
            .with_expiry(at + Duration::days(1));

        assert!(!cheese.is_expired(at));
        assert!(cheese.is_expired(at + Duration::days(2)));
    }

    #[test]
    fn test_shippable_product_reports_weight() {
        let tv = Product::new("TV", "TV", Money::from_cents(300_000), 2)
            .with_shipping_weight(Weight::from_grams(5000));

        assert!(tv.requires_shipping());
        assert_eq!(tv.weight().grams(), 5000);
    }

    #[test]
    fn test_stock_reduction_never_goes_negative() {
        let mut cheese = Product::new("CHEESE", "Cheese", Money::from_cents(10_000), 5);

        assert!(cheese.in_stock(5));
        assert!(!cheese.in_stock(6));

        cheese.reduce_stock(2);
        assert_eq!(cheese.stock, 3);

        // Guarded by in_stock in practice, but the type holds the invariant
        cheese.reduce_stock(100);
        assert_eq!(cheese.stock, 0);
    }

    #[test]
    fn test_catalog_lookup_and_mutation() {
        let mut catalog = Catalog::new();
        catalog
            .insert(Product::new("CARD", "Scratch Card", Money::from_cents(5_000), 10))
            .unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("CARD").unwrap().stock, 10);
        assert!(catalog.get("MISSING").is_none());

        catalog.get_mut("CARD").unwrap().reduce_stock(4);
        assert_eq!(catalog.get("CARD").unwrap().stock, 6);
    }

    #[test]
    fn test_catalog_rejects_invalid_products() {
        let mut catalog = Catalog::new();

        let bad_sku = Product::new("has space", "Cheese", Money::from_cents(100), 1);
        assert!(catalog.insert(bad_sku).is_err());

        let bad_name = Product::new("CHEESE", "", Money::from_cents(100), 1);
        assert!(catalog.insert(bad_name).is_err());

        let bad_price = Product::new("CHEESE", "Cheese", Money::from_cents(-100), 1);
        assert!(catalog.insert(bad_price).is_err());

        assert!(catalog.is_empty());
    }
}
