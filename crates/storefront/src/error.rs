//! Construction-time errors.
//!
//! Building a query never touches the network, so the only things that can
//! go wrong are inputs the schema would reject outright. Validation errors
//! the server reports for well-formed input come back as `userErrors` in the
//! mutation payload and are not represented here.

use thiserror::Error;

use storefront_buy_core::IdError;

/// Errors raised while building a query or mutation.
#[derive(Debug, Error)]
pub enum QueryError {
    /// An opaque identifier could not be decoded or references the wrong
    /// resource type.
    #[error("Invalid {field}: {source}")]
    InvalidId {
        /// Input field the identifier was destined for.
        field: &'static str,
        source: IdError,
    },

    /// A cart quantity does not fit the schema's 32-bit `Int`.
    #[error("Quantity {quantity} of line item {index} exceeds the 32-bit integer range")]
    QuantityOutOfRange { index: usize, quantity: u32 },

    /// An input payload could not be encoded.
    #[error("Input encoding error: {0}")]
    Input(#[from] serde_json::Error),
}
