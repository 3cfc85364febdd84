//! Postal addresses collected during checkout.

use serde::{Deserialize, Serialize};

/// A shipping or billing address as entered by the shopper (or as returned
/// by the payment sheet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalAddress {
    /// Street line.
    pub address1: String,
    /// Apartment, suite, etc.
    #[serde(default)]
    pub address2: Option<String>,
    pub city: String,
    /// Province or state.
    pub province: String,
    pub country: String,
    /// Postal or ZIP code.
    pub zip: String,
    pub first_name: String,
    pub last_name: String,
}
