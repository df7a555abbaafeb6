//! # Error Types
//!
//! Domain-specific error types for kiosk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  kiosk-core errors (this file)                                      │
//! │  ├── CheckoutError    - Cart and checkout rule violations           │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  Flow: ValidationError → CheckoutError → CLI message → exit code    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (SKU, available stock, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each variant's message is what the user sees before the process exits
//!
//! Every variant here is unrecoverable at the point it is raised: the
//! checkout attempt is over, and the caller decides how to report it.

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Checkout Error
// =============================================================================

/// Cart and checkout business rule violations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// Checkout was attempted on a cart with no line items.
    #[error("cart is empty, nothing to check out")]
    EmptyCart,

    /// A cart entry references a SKU the catalog does not know.
    ///
    /// ## When This Occurs
    /// Cart items reference products by SKU rather than owning them, so a
    /// product removed from the catalog between add and checkout surfaces
    /// here.
    #[error("product not found: {sku}")]
    ProductNotFound { sku: String },

    /// A product in the cart passed its expiry date before checkout.
    #[error("product expired: {sku}")]
    ProductExpired { sku: String },

    /// Requested quantity exceeds available stock at add-to-cart time.
    ///
    /// ## User Workflow
    /// ```text
    /// Add to Cart (qty: 5)
    ///      │
    ///      ▼
    /// Check stock: available=3
    ///      │
    ///      ▼
    /// InsufficientStockOnAdd { sku: "CHEESE", available: 3, requested: 5 }
    /// ```
    #[error("not enough stock to add {sku}: available {available}, requested {requested}")]
    InsufficientStockOnAdd {
        sku: String,
        available: u32,
        requested: u32,
    },

    /// Stock ran out between add-to-cart and checkout.
    ///
    /// Adding to the cart does not reserve stock, so the level seen at
    /// checkout can be lower than the level seen at add time.
    #[error("out of stock for {sku}: available {available}, requested {requested}")]
    OutOfStock {
        sku: String,
        available: u32,
        requested: u32,
    },

    /// Customer balance cannot cover subtotal + shipping.
    #[error("insufficient funds: order total {required}, balance {balance}")]
    InsufficientFunds { required: Money, balance: Money },

    /// Cart has exceeded maximum allowed line items.
    #[error("cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Item quantity exceeds maximum allowed.
    #[error("quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: u32, max: u32 },

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when a value doesn't meet basic requirements, before any
/// business rule runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., bad characters in a SKU).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CheckoutError.
pub type CheckoutResult<T> = Result<T, CheckoutError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CheckoutError::OutOfStock {
            sku: "CHEESE".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "out of stock for CHEESE: available 3, requested 5"
        );

        let err = CheckoutError::InsufficientFunds {
            required: Money::from_cents(41_500),
            balance: Money::from_cents(1_000),
        };
        assert_eq!(
            err.to_string(),
            "insufficient funds: order total $415.00, balance $10.00"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn test_validation_converts_to_checkout_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let err: CheckoutError = validation_err.into();
        assert!(matches!(err, CheckoutError::Validation(_)));
    }
}
