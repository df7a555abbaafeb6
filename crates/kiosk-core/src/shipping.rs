//! # Shipment Notice
//!
//! The shipment summary produced for shippable line items.
//!
//! Pure value type: checkout collects the lines, the application layer
//! prints the rendered notice. No failure modes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::product::Weight;

/// One shippable line on the notice: product name plus unit weight.
///
/// Weight is recorded once per line item regardless of quantity. Two units
/// of Cheese in one cart entry contribute 0.4kg, not 0.8kg. Matches the
/// historical packing-slip behavior; see DESIGN.md.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentLine {
    pub name: String,
    pub weight: Weight,
}

/// The shipment notice for one checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentNotice {
    lines: Vec<ShipmentLine>,
}

impl ShipmentNotice {
    /// Creates an empty notice.
    pub fn new() -> Self {
        ShipmentNotice { lines: Vec::new() }
    }

    /// Records a shippable line.
    pub fn add_line(&mut self, name: impl Into<String>, weight: Weight) {
        self.lines.push(ShipmentLine {
            name: name.into(),
            weight,
        });
    }

    /// Lines in cart order.
    pub fn lines(&self) -> &[ShipmentLine] {
        &self.lines
    }

    /// Checks whether anything needs shipping.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total package weight: the sum of per-line weights.
    pub fn total_weight(&self) -> Weight {
        self.lines
            .iter()
            .fold(Weight::zero(), |acc, line| acc + line.weight)
    }
}

/// Renders the console shipment notice:
///
/// ```text
/// ** Shipment notice **
/// - Cheese 0.4kg
/// Total package weight: 0.4kg
/// ```
impl fmt::Display for ShipmentNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "** Shipment notice **")?;
        for line in &self.lines {
            writeln!(f, "- {} {}", line.name, line.weight)?;
        }
        write!(f, "Total package weight: {}", self.total_weight())
    }
}
