//! Opaque identifiers for Storefront API entities.
//!
//! The Storefront API references every entity (checkout, product, variant,
//! collection) through an opaque ID. Depending on the API version the server
//! hands out either a raw global ID (`gid://shopify/Checkout/abc123`) or its
//! base64 encoding. [`GraphQlId`] accepts both, validates the shape, and keeps
//! the caller's original encoding so it can be echoed back unchanged.
//!
//! Use the `define_gid!` macro to create wrappers that additionally pin the
//! resource type, so a variant ID can never be passed where a checkout ID is
//! expected.

use core::fmt;

use base64::Engine;
use base64::engine::GeneralPurpose;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};

const GID_SCHEME: &str = "gid://";

/// Alphabets tried, in order, when decoding an encoded identifier.
const ENGINES: [&GeneralPurpose; 4] = [&STANDARD, &URL_SAFE, &STANDARD_NO_PAD, &URL_SAFE_NO_PAD];

/// Errors that can occur when decoding an opaque identifier.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The input string is empty.
    #[error("identifier cannot be empty")]
    Empty,
    /// The input is neither a global ID nor a base64-encoded global ID.
    #[error("identifier could not be decoded: {0}")]
    Undecodable(String),
    /// The decoded global ID does not have a namespace, type and id segment.
    #[error("malformed global ID: {0}")]
    Malformed(String),
    /// The identifier references a different resource type.
    #[error("expected a {expected} identifier, found {found}")]
    WrongType {
        /// Resource type the caller asked for.
        expected: &'static str,
        /// Resource type encoded in the identifier.
        found: String,
    },
}

/// A validated opaque identifier.
///
/// ## Examples
///
/// ```
/// use storefront_buy_core::GraphQlId;
///
/// let id = GraphQlId::parse("gid://shopify/Checkout/abc123?key=k").unwrap();
/// assert_eq!(id.resource_type(), "Checkout");
/// assert_eq!(id.resource_id(), "abc123");
///
/// // base64 of "gid://shopify/Collection/42"
/// let id = GraphQlId::parse("Z2lkOi8vc2hvcGlmeS9Db2xsZWN0aW9uLzQy").unwrap();
/// assert_eq!(id.resource_type(), "Collection");
///
/// assert!(GraphQlId::parse("").is_err());
/// assert!(GraphQlId::parse("not an id").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GraphQlId {
    raw: String,
    resource_type: String,
    resource_id: String,
}

impl GraphQlId {
    /// Decode an identifier as received from the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty
    /// - Is neither `gid://...` nor base64 that decodes to `gid://...`
    /// - Does not have exactly a namespace, type and id segment
    pub fn parse(raw: &str) -> Result<Self, IdError> {
        if raw.is_empty() {
            return Err(IdError::Empty);
        }

        let (resource_type, resource_id) = if raw.starts_with(GID_SCHEME) {
            split_gid(raw)?
        } else {
            split_gid(&decode_base64(raw)?)?
        };

        Ok(Self {
            raw: raw.to_owned(),
            resource_type,
            resource_id,
        })
    }

    /// Require this identifier to reference `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::WrongType`] if the resource type differs.
    pub fn expect_type(self, expected: &'static str) -> Result<Self, IdError> {
        if self.resource_type == expected {
            Ok(self)
        } else {
            Err(IdError::WrongType {
                expected,
                found: self.resource_type,
            })
        }
    }

    /// The identifier exactly as the server sent it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Resource type segment (e.g. `Checkout`).
    #[must_use]
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// Resource id segment, without any query string.
    #[must_use]
    pub fn resource_id(&self) -> &str {
        &self.resource_id
    }
}

fn decode_base64(raw: &str) -> Result<String, IdError> {
    let undecodable = || IdError::Undecodable(raw.to_owned());

    let bytes = ENGINES
        .iter()
        .find_map(|engine| engine.decode(raw).ok())
        .ok_or_else(undecodable)?;
    let text = String::from_utf8(bytes).map_err(|_| undecodable())?;

    if text.starts_with(GID_SCHEME) {
        Ok(text)
    } else {
        Err(undecodable())
    }
}

/// Split `gid://namespace/Type/id[?query]` into `(Type, id)`.
///
/// Whitespace and control characters are rejected anywhere after the scheme.
fn split_gid(gid: &str) -> Result<(String, String), IdError> {
    let malformed = || IdError::Malformed(gid.to_owned());

    let path = gid.strip_prefix(GID_SCHEME).ok_or_else(malformed)?;
    if path.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(malformed());
    }
    let path = path.split_once('?').map_or(path, |(path, _query)| path);

    let mut segments = path.split('/');
    match (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) {
        (Some(namespace), Some(kind), Some(id), None)
            if !namespace.is_empty() && !kind.is_empty() && !id.is_empty() =>
        {
            Ok((kind.to_owned(), id.to_owned()))
        }
        _ => Err(malformed()),
    }
}

impl fmt::Display for GraphQlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl TryFrom<String> for GraphQlId {
    type Error = IdError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<GraphQlId> for String {
    fn from(id: GraphQlId) -> Self {
        id.raw
    }
}

impl AsRef<str> for GraphQlId {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

/// Macro to define a resource-typed identifier.
///
/// Creates a newtype wrapper around [`GraphQlId`] with:
/// - `parse()` that rejects identifiers of any other resource type
/// - `Serialize`/`Deserialize` as the raw string (validated on the way in)
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `Display`
/// - `TryFrom<&str>`, `TryFrom<String>` and `From<$name> for String`
///
/// # Example
///
/// ```rust
/// # use storefront_buy_core::define_gid;
/// define_gid!(OrderId, "Order");
///
/// assert!(OrderId::parse("gid://shopify/Order/1").is_ok());
/// assert!(OrderId::parse("gid://shopify/Checkout/1").is_err());
/// ```
#[macro_export]
macro_rules! define_gid {
    ($name:ident, $resource:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name($crate::GraphQlId);

        impl $name {
            /// Resource type this identifier must reference.
            pub const RESOURCE_TYPE: &'static str = $resource;

            /// Decode and type-check an identifier.
            ///
            /// # Errors
            ///
            /// Returns an error if the identifier cannot be decoded or
            /// references another resource type.
            pub fn parse(raw: &str) -> ::core::result::Result<Self, $crate::IdError> {
                $crate::GraphQlId::parse(raw)?
                    .expect_type(Self::RESOURCE_TYPE)
                    .map(Self)
            }

            /// The untyped identifier.
            #[must_use]
            pub const fn as_id(&self) -> &$crate::GraphQlId {
                &self.0
            }

            /// The identifier exactly as the server sent it.
            #[must_use]
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::core::convert::TryFrom<&str> for $name {
            type Error = $crate::IdError;

            fn try_from(raw: &str) -> ::core::result::Result<Self, Self::Error> {
                Self::parse(raw)
            }
        }

        impl ::core::convert::TryFrom<String> for $name {
            type Error = $crate::IdError;

            fn try_from(raw: String) -> ::core::result::Result<Self, Self::Error> {
                Self::parse(&raw)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0.into()
            }
        }
    };
}

// Storefront resources referenced by the checkout flow
define_gid!(CheckoutId, "Checkout");
define_gid!(CollectionId, "Collection");
define_gid!(ProductId, "Product");
define_gid!(VariantId, "ProductVariant");

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const CHECKOUT_GID: &str = "gid://shopify/Checkout/e28f9f4b7a1c?key=3f5e";

    #[test]
    fn test_parse_raw_gid() {
        let id = GraphQlId::parse(CHECKOUT_GID).unwrap();
        assert_eq!(id.resource_type(), "Checkout");
        assert_eq!(id.resource_id(), "e28f9f4b7a1c");
        assert_eq!(id.as_str(), CHECKOUT_GID);
    }

    #[test]
    fn test_parse_base64_keeps_original_encoding() {
        let encoded = STANDARD.encode(CHECKOUT_GID);
        let id = GraphQlId::parse(&encoded).unwrap();
        assert_eq!(id.resource_type(), "Checkout");
        assert_eq!(id.as_str(), encoded);
    }

    #[test]
    fn test_parse_unpadded_url_safe() {
        let encoded = URL_SAFE_NO_PAD.encode("gid://shopify/ProductVariant/808950810");
        let id = GraphQlId::parse(&encoded).unwrap();
        assert_eq!(id.resource_type(), "ProductVariant");
        assert_eq!(id.resource_id(), "808950810");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(GraphQlId::parse(""), Err(IdError::Empty));
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(
            GraphQlId::parse("not a checkout"),
            Err(IdError::Undecodable(_))
        ));
    }

    #[test]
    fn test_parse_base64_of_non_gid() {
        let encoded = STANDARD.encode("hello world");
        assert!(matches!(
            GraphQlId::parse(&encoded),
            Err(IdError::Undecodable(_))
        ));
    }

    #[test]
    fn test_parse_malformed_gid() {
        for raw in [
            "gid://",
            "gid://shopify/Checkout",
            "gid://shopify/Checkout/",
            "gid:///Checkout/1",
            "gid://shopify/Checkout/1/extra",
            "gid://shopify/Checkout/a b\"}",
            "gid://shop ify/Checkout/1",
            "gid://shopify/Check\tout/1",
            "gid://shopify/Checkout/1\n",
            "gid://shopify/Checkout/1?key=a\u{7}",
        ] {
            assert!(
                matches!(GraphQlId::parse(raw), Err(IdError::Malformed(_))),
                "{raw} should be malformed"
            );
        }
    }

    #[test]
    fn test_parse_base64_of_gid_with_whitespace() {
        let encoded = STANDARD.encode("gid://shopify/Checkout/a b");
        assert!(matches!(
            CheckoutId::parse(&encoded),
            Err(IdError::Malformed(_))
        ));
    }

    #[test]
    fn test_typed_id_rejects_other_resource() {
        let err = CheckoutId::parse("gid://shopify/ProductVariant/1").unwrap_err();
        assert_eq!(
            err,
            IdError::WrongType {
                expected: "Checkout",
                found: "ProductVariant".to_string(),
            }
        );
    }

    #[test]
    fn test_typed_id_accepts_matching_resource() {
        let id = VariantId::parse("gid://shopify/ProductVariant/1").unwrap();
        assert_eq!(id.as_id().resource_id(), "1");
        assert_eq!(id.to_string(), "gid://shopify/ProductVariant/1");
    }

    #[test]
    fn test_serde_roundtrip_is_raw_string() {
        let id = CheckoutId::parse(CHECKOUT_GID).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{CHECKOUT_GID}\""));

        let parsed: CheckoutId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_deserialize_validates() {
        assert!(serde_json::from_str::<CheckoutId>("\"\"").is_err());
        assert!(serde_json::from_str::<CollectionId>("\"gid://shopify/Product/1\"").is_err());
    }
}
