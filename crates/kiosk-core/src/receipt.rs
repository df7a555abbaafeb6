//! # Receipt
//!
//! The checkout receipt: line totals, subtotal, shipping, total, and the
//! customer's remaining balance.
//!
//! Like the shipment notice, this is a pure value; rendering happens via
//! `Display` and printing happens in the application layer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// One receipt line: quantity, name, line total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub name: String,
    pub quantity: u32,
    pub line_total: Money,
}

/// The receipt for one successful checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub lines: Vec<ReceiptLine>,
    pub subtotal: Money,
    pub shipping: Money,
    pub total: Money,
    /// Customer balance after the total was deducted.
    pub balance_left: Money,
}

/// Renders the console receipt:
///
/// ```text
/// ** Checkout receipt **
/// 2x Cheese = $200.00
/// 1x Biscuits = $150.00
/// ----------------------
/// Subtotal: $350.00
/// Shipping: $15.00
/// Total: $365.00
/// Balance left: $635.00
/// ```
impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "** Checkout receipt **")?;
        for line in &self.lines {
            writeln!(f, "{}x {} = {}", line.quantity, line.name, line.line_total)?;
        }
        writeln!(f, "----------------------")?;
        writeln!(f, "Subtotal: {}", self.subtotal)?;
        writeln!(f, "Shipping: {}", self.shipping)?;
        writeln!(f, "Total: {}", self.total)?;
        write!(f, "Balance left: {}", self.balance_left)
    }
}
