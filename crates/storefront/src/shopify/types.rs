//! Argument types for Storefront API connections.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graphql::{InputValue, IntoInputValue};

/// Error returned for a page size of zero or one above `i32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("page size must be between 1 and {max}, got {value}", max = PageSize::MAX.get())]
pub struct PageSizeError {
    pub value: u64,
}

/// Number of items requested from a connection (`first:`).
///
/// Always positive and within the schema's 32-bit `Int`, so a builder can
/// never emit an out-of-range count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "i32")]
pub struct PageSize(i32);

impl PageSize {
    pub const ONE: Self = Self(1);
    /// Products fetched per collection when the caller does not say.
    pub const DEFAULT_PRODUCTS: Self = Self(25);
    /// Largest page the Storefront API serves for a connection.
    pub const MAX_CONNECTION: Self = Self(250);
    pub const MAX: Self = Self(i32::MAX);

    /// Create a page size, or `None` if `count` is zero or too large.
    #[must_use]
    pub fn new(count: u64) -> Option<Self> {
        i32::try_from(count).ok().filter(|n| *n > 0).map(Self)
    }

    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<u64> for PageSize {
    type Error = PageSizeError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(PageSizeError { value })
    }
}

impl TryFrom<usize> for PageSize {
    type Error = PageSizeError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        let value = u64::try_from(value).unwrap_or(u64::MAX);
        Self::try_from(value)
    }
}

impl From<PageSize> for i32 {
    fn from(size: PageSize) -> Self {
        size.0
    }
}

impl IntoInputValue for PageSize {
    fn into_input_value(self) -> InputValue {
        self.0.into_input_value()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
