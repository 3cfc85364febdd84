//! Storefront Buy Core - Shared types library.
//!
//! This crate provides the leaf types used by the `storefront-buy` query
//! builders:
//! - opaque GraphQL identifiers with typed wrappers per resource
//! - the permissive `TransactionStatus` enum
//! - money and email value types
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no query construction,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for identifiers, prices, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
