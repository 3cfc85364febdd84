//! Status enums returned by the Storefront API.

use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Outcome of a payment transaction.
///
/// Decoding never fails: any wire value the client does not know about
/// (including values added to the schema after this build) becomes
/// [`TransactionStatus::Unknown`].
///
/// ```
/// use storefront_buy_core::TransactionStatus;
///
/// assert_eq!(TransactionStatus::from_wire("SUCCESS"), TransactionStatus::Success);
/// assert_eq!(TransactionStatus::from_wire("WEIRD"), TransactionStatus::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Error,
    Failure,
    Pending,
    Success,
    /// Any value not listed above. Serializes as the empty string.
    #[default]
    #[serde(rename = "", other)]
    Unknown,
}

impl TransactionStatus {
    /// Decode a wire value. Unrecognized values map to `Unknown`.
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value {
            "ERROR" => Self::Error,
            "FAILURE" => Self::Failure,
            "PENDING" => Self::Pending,
            "SUCCESS" => Self::Success,
            _ => Self::Unknown,
        }
    }

    /// The wire value for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Failure => "FAILURE",
            Self::Pending => "PENDING",
            Self::Success => "SUCCESS",
            Self::Unknown => "",
        }
    }

    /// Whether the transaction has settled one way or the other.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Error | Self::Failure | Self::Success)
    }

    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_wire(s))
    }
}

impl From<&str> for TransactionStatus {
    fn from(value: &str) -> Self {
        Self::from_wire(value)
    }
}
