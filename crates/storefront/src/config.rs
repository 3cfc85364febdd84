//! Query builder configuration.
//!
//! Every field has a default, so an empty object (or [`QueryConfig::default`])
//! is a complete configuration. Callers that keep settings in a file pass the
//! JSON to [`QueryConfig::from_json`].
//!
//! # Fields
//!
//! - `collection_products_page_size` - products per collection in the
//!   collections query when the caller gives no limit (default: 25)
//! - `line_items_page_size` - line items fetched by the checkout fragment (default: 250)
//! - `image_page_size` - images per product in the product fragment (default: 1)
//! - `variant_page_size` - variants per product in the product fragment (default: 250)
//! - `shipping_address_source` - `forward` or `placeholder` (default: `forward`)
//! - `placeholder_address` - address substituted when the source is `placeholder`

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::PostalAddress;
use crate::shopify::PageSize;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid query configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the shipping-address update takes its address from.
///
/// Early builds of the checkout flow ignored the shopper's address and
/// always sent a fixed one. `Placeholder` keeps that behaviour available for
/// sandboxes that depend on it; `Forward` sends what the shopper entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShippingAddressSource {
    /// Send the caller's address.
    #[default]
    Forward,
    /// Send [`QueryConfig::placeholder_address`] instead of the caller's address.
    Placeholder,
}

/// Query builder configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueryConfig {
    pub collection_products_page_size: PageSize,
    pub line_items_page_size: PageSize,
    pub image_page_size: PageSize,
    pub variant_page_size: PageSize,
    pub shipping_address_source: ShippingAddressSource,
    pub placeholder_address: PostalAddress,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            collection_products_page_size: PageSize::DEFAULT_PRODUCTS,
            line_items_page_size: PageSize::MAX_CONNECTION,
            image_page_size: PageSize::ONE,
            variant_page_size: PageSize::MAX_CONNECTION,
            shipping_address_source: ShippingAddressSource::default(),
            placeholder_address: placeholder_address(),
        }
    }
}

impl QueryConfig {
    /// Load configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the document is not valid JSON, contains an
    /// unknown key, or a page size outside `1..=2147483647`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        debug!(
            shipping_address_source = ?config.shipping_address_source,
            line_items_page_size = config.line_items_page_size.get(),
            "Loaded query configuration"
        );
        Ok(config)
    }
}

/// The fixed address the early checkout flow sent for every shipping update.
#[must_use]
pub fn placeholder_address() -> PostalAddress {
    PostalAddress {
        address1: "80 Spadina".to_string(),
        address2: Some(String::new()),
        city: "Toronto".to_string(),
        province: "ON".to_string(),
        country: "Canada".to_string(),
        zip: "M5V 2J4".to_string(),
        first_name: "John".to_string(),
        last_name: "Smith".to_string(),
    }
}
