//! Cart line items.

use serde::{Deserialize, Serialize};

/// One line of the local cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Opaque ID of the selected product variant.
    pub variant_id: String,
    /// Number of units.
    pub quantity: u32,
}

impl CartItem {
    #[must_use]
    pub fn new(variant_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            variant_id: variant_id.into(),
            quantity,
        }
    }
}
