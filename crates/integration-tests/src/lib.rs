//! Integration tests for Storefront Buy.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p storefront-buy-integration-tests
//! ```
//!
//! Set `RUST_LOG=storefront_buy=debug` to see the builders' trace output.
//!
//! # Test Categories
//!
//! - `checkout_flow` - A full checkout, from collections to payment
//! - `documents` - Rendered documents and request bodies

use std::sync::Once;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use storefront_buy::models::{
    CartItem, CheckoutSummary, PaymentToken, PaymentType, PostalAddress, ShippingRate,
};
use storefront_buy_core::{CurrencyCode, Money};

static TRACING: Once = Once::new();

/// Install a test-friendly tracing subscriber once per test binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Encode a global ID the way older Storefront API versions hand them out.
#[must_use]
pub fn encoded_gid(resource: &str, id: &str) -> String {
    STANDARD.encode(format!("gid://shopify/{resource}/{id}"))
}

#[must_use]
pub fn checkout_id() -> String {
    encoded_gid("Checkout", "e28f9f4b7a1c6d0f?key=3f5e8a")
}

#[must_use]
pub fn cart() -> Vec<CartItem> {
    vec![
        CartItem::new(encoded_gid("ProductVariant", "36607622086"), 2),
        CartItem::new(encoded_gid("ProductVariant", "36607622150"), 1),
    ]
}

#[must_use]
pub fn shopper_address() -> PostalAddress {
    PostalAddress {
        address1: "150 Elgin St".to_string(),
        address2: None,
        city: "Ottawa".to_string(),
        province: "ON".to_string(),
        country: "Canada".to_string(),
        zip: "K2P 1L4".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
    }
}

#[must_use]
pub fn shipping_rate() -> ShippingRate {
    ShippingRate {
        handle: "canada_post-DOM.EP-12.50".to_string(),
        title: "Expedited Parcel".to_string(),
        price: Money::from_minor(1250, CurrencyCode::CAD),
    }
}

#[must_use]
pub fn checkout_summary() -> CheckoutSummary {
    CheckoutSummary {
        id: checkout_id(),
        payment_due: Decimal::new(8749, 2),
    }
}

#[must_use]
pub fn payment_token() -> PaymentToken {
    PaymentToken {
        payment_data: "{\"version\":\"EC_v1\",\"data\":\"...\"}".to_string(),
        idempotency_key: "7d4c2a1e-checkout".to_string(),
        payment_type: PaymentType::ApplePay,
    }
}
