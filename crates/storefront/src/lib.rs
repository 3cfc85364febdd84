//! Storefront Buy - checkout query construction.
//!
//! This crate builds the GraphQL queries and mutations a mobile storefront
//! needs for browsing collections and running a checkout, as immutable
//! values that can be inspected in tests and rendered for any transport.
//!
//! # Modules
//!
//! - [`graphql`] - Selection trees, fragments, and document rendering
//! - [`shopify`] - The checkout-flow [`QueryBuilder`] and its fragments
//! - [`models`] - Cart, address, shipping and payment view models
//! - [`config`] - Page sizes and the shipping-address policy
//! - [`error`] - Construction-time errors

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod graphql;
pub mod models;
pub mod shopify;

pub use config::{QueryConfig, ShippingAddressSource};
pub use error::QueryError;
pub use shopify::{PageSize, QueryBuilder};
pub use storefront_buy_core::TransactionStatus;
