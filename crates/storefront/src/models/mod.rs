//! View models consumed by the query builders.
//!
//! These mirror what the checkout UI hands over: raw identifier strings as
//! received from earlier responses, plus the address, shipping and payment
//! details the shopper entered. Identifiers are decoded by the builders, not
//! here, so a bad ID surfaces as a [`crate::QueryError`] at the call site.

mod address;
mod cart;
mod checkout;

pub use address::PostalAddress;
pub use cart::CartItem;
pub use checkout::{CheckoutSummary, PaymentToken, PaymentType, ShippingRate};
