//! Checkout, shipping and payment view models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use storefront_buy_core::Money;

/// A shipping rate offered for a checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingRate {
    /// Handle passed back with `checkoutShippingLineUpdate`.
    pub handle: String,
    /// Display title (e.g., "Expedited Parcel").
    pub title: String,
    pub price: Money,
}

/// The parts of a checkout needed to complete it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSummary {
    /// Opaque checkout ID.
    pub id: String,
    /// Amount still owed, charged by the tokenized payment.
    pub payment_due: Decimal,
}

/// Wallet the payment token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    #[default]
    ApplePay,
}

impl PaymentType {
    /// Value sent as the tokenized payment `type`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ApplePay => "apple_pay",
        }
    }
}

/// A tokenized payment ready to be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentToken {
    /// Encrypted payment data from the wallet.
    pub payment_data: String,
    /// Client-generated key that makes retries of the same payment safe.
    pub idempotency_key: String,
    #[serde(default)]
    pub payment_type: PaymentType,
}
