//! Shopify Storefront API operations for the checkout flow.
//!
//! # Architecture
//!
//! - Operations are built as typed selection trees ([`crate::graphql`]),
//!   rendered to a document only when sent
//! - Shared fragments keep every checkout-returning operation on one shape
//! - No transport here: execute the returned [`Operation`](crate::graphql::Operation)
//!   with any GraphQL-over-HTTP client
//!
//! # Operations
//!
//! ## Catalog
//! - Collections with their first page of products
//! - Further pages of products in one collection
//!
//! ## Checkout
//! - Create from cart items
//! - Update shipping address, shipping rate, email
//! - Complete with a tokenized (wallet) payment
//! - Fetch available shipping rates
//!
//! # Example
//!
//! ```rust
//! use storefront_buy::models::CartItem;
//! use storefront_buy::shopify::QueryBuilder;
//!
//! let builder = QueryBuilder::default();
//!
//! let mutation = builder
//!     .mutation_for_create_checkout(&[CartItem::new("gid://shopify/ProductVariant/1", 2)])
//!     .unwrap();
//! assert!(mutation.document().starts_with("mutation CheckoutCreate {"));
//!
//! // Undecodable identifiers are rejected before anything is built.
//! assert!(builder.query_shipping_rates_for_checkout("???").is_err());
//! ```

mod storefront;
pub mod types;

pub use storefront::{QueryBuilder, fragments, inputs};
pub use types::*;
