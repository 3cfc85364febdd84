//! Storefront API query and mutation builders.
//!
//! [`QueryBuilder`] turns checkout-flow intents into [`Operation`] values.
//! It never performs I/O: each method is a pure function of its arguments
//! and the builder's configuration, and the returned operation is handed to
//! whatever GraphQL client the application uses.

pub mod fragments;
pub mod inputs;

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use storefront_buy_core::{CheckoutId, CollectionId, Email, VariantId};

use crate::config::{QueryConfig, ShippingAddressSource};
use crate::error::QueryError;
use crate::graphql::{
    Field, Fragment, InlineFragment, InputValue, Operation, Selectable, SelectionSet,
    to_input_value,
};
use crate::models::{CartItem, CheckoutSummary, PaymentToken, PostalAddress, ShippingRate};
use crate::shopify::PageSize;

use inputs::{
    CheckoutCompleteWithTokenizedPaymentInput, CheckoutCreateInput, CheckoutEmailUpdateInput,
    CheckoutShippingAddressUpdateInput, CheckoutShippingLineUpdateInput, LineItemInput,
    MailingAddressInput,
};

// =============================================================================
// QueryBuilder
// =============================================================================

/// Builds the queries and mutations of the checkout flow.
///
/// Cheap to clone; the shared fragments are reference counted and the
/// builder holds no mutable state, so one instance can serve any number of
/// threads.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    config: Arc<QueryConfig>,
    checkout_fragment: Arc<Fragment>,
    product_fragment: Arc<Fragment>,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new(QueryConfig::default())
    }
}

impl QueryBuilder {
    /// Create a builder with the given configuration.
    #[must_use]
    pub fn new(config: QueryConfig) -> Self {
        Self {
            checkout_fragment: fragments::checkout(&config),
            product_fragment: fragments::product_connection(&config),
            config: Arc::new(config),
        }
    }

    #[must_use]
    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    // =========================================================================
    // Catalog Queries
    // =========================================================================

    /// Collections of the shop, each with its first page of products.
    ///
    /// `product_limit` defaults to `collection_products_page_size`.
    #[instrument(skip_all, fields(limit = %limit, has_cursor = after.is_some()))]
    pub fn query_for_collections(
        &self,
        limit: PageSize,
        after: Option<&str>,
        product_limit: Option<PageSize>,
        product_cursor: Option<&str>,
    ) -> Operation {
        let product_limit = product_limit.unwrap_or(self.config.collection_products_page_size);
        debug!(product_limit = %product_limit, "Building collections query");

        let collection = Field::new("node")
            .fields(&["id", "title", "descriptionHtml"])
            .select(Field::new("image").field("src"))
            .select(
                Field::new("products")
                    .arg("first", product_limit)
                    .arg_opt("after", product_cursor)
                    .spread(&self.product_fragment),
            );

        Operation::query(
            SelectionSet::new().select(
                Field::new("shop").select(
                    Field::new("collections")
                        .arg("first", limit)
                        .arg_opt("after", after)
                        .select(Field::new("pageInfo").field("hasNextPage"))
                        .select(Field::new("edges").field("cursor").select(collection)),
                ),
            ),
        )
        .named("Collections")
    }

    /// Next page of products in a collection.
    #[instrument(skip_all, fields(collection = %collection, limit = %limit))]
    pub fn query_for_products(
        &self,
        collection: &CollectionId,
        limit: PageSize,
        after: Option<&str>,
    ) -> Operation {
        debug!("Building collection products query");

        Operation::query(
            SelectionSet::new().select(
                Field::new("node").arg("id", collection.as_str()).on(
                    InlineFragment::new("Collection").select(
                        Field::new("products")
                            .arg("first", limit)
                            .arg_opt("after", after)
                            .spread(&self.product_fragment),
                    ),
                ),
            ),
        )
        .named("CollectionProducts")
    }

    // =========================================================================
    // Checkout Mutations
    // =========================================================================

    /// Create a checkout with one line item per cart item, in cart order.
    ///
    /// # Errors
    ///
    /// Returns an error if a variant ID cannot be decoded or a quantity does
    /// not fit in 32 bits.
    #[instrument(skip_all, fields(items = items.len()))]
    pub fn mutation_for_create_checkout(&self, items: &[CartItem]) -> Result<Operation, QueryError> {
        let line_items = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let variant_id = VariantId::parse(&item.variant_id)
                    .map_err(|source| invalid_id("variantId", source))?;
                let quantity = i32::try_from(item.quantity).map_err(|_| {
                    warn!(index, quantity = item.quantity, "Cart quantity out of range");
                    QueryError::QuantityOutOfRange {
                        index,
                        quantity: item.quantity,
                    }
                })?;
                Ok(LineItemInput {
                    variant_id,
                    quantity,
                })
            })
            .collect::<Result<Vec<_>, QueryError>>()?;

        let input = to_input_value(&CheckoutCreateInput { line_items })?;
        debug!("Building checkoutCreate mutation");

        Ok(self.checkout_mutation("checkoutCreate", input).named("CheckoutCreate"))
    }

    /// Set the shipping address of a checkout.
    ///
    /// Which address is sent depends on
    /// [`QueryConfig::shipping_address_source`]: the caller's by default, or
    /// the configured placeholder.
    ///
    /// # Errors
    ///
    /// Returns an error if `checkout_id` cannot be decoded.
    #[instrument(skip_all, fields(source = ?self.config.shipping_address_source))]
    pub fn mutation_for_update_shipping_address(
        &self,
        checkout_id: &str,
        address: &PostalAddress,
    ) -> Result<Operation, QueryError> {
        let checkout_id = decode_checkout_id(checkout_id)?;

        let address = match self.config.shipping_address_source {
            ShippingAddressSource::Forward => address,
            ShippingAddressSource::Placeholder => {
                warn!("Sending placeholder shipping address instead of the shopper's");
                &self.config.placeholder_address
            }
        };

        let input = to_input_value(&CheckoutShippingAddressUpdateInput {
            shipping_address: MailingAddressInput::from(address),
            checkout_id,
        })?;
        debug!("Building checkoutShippingAddressUpdate mutation");

        Ok(self
            .checkout_mutation("checkoutShippingAddressUpdate", input)
            .named("CheckoutShippingAddressUpdate"))
    }

    /// Select a shipping rate by handle.
    ///
    /// # Errors
    ///
    /// Returns an error if `checkout_id` cannot be decoded.
    #[instrument(skip_all, fields(handle = %shipping_rate.handle))]
    pub fn mutation_for_update_shipping_rate(
        &self,
        checkout_id: &str,
        shipping_rate: &ShippingRate,
    ) -> Result<Operation, QueryError> {
        let input = to_input_value(&CheckoutShippingLineUpdateInput {
            checkout_id: decode_checkout_id(checkout_id)?,
            shipping_rate_handle: shipping_rate.handle.clone(),
        })?;
        debug!("Building checkoutShippingLineUpdate mutation");

        Ok(self
            .checkout_mutation("checkoutShippingLineUpdate", input)
            .named("CheckoutShippingLineUpdate"))
    }

    /// Attach the shopper's email to a checkout.
    ///
    /// # Errors
    ///
    /// Returns an error if `checkout_id` cannot be decoded.
    #[instrument(skip_all, fields(domain = %email.domain()))]
    pub fn mutation_for_update_email(
        &self,
        checkout_id: &str,
        email: &Email,
    ) -> Result<Operation, QueryError> {
        let input = to_input_value(&CheckoutEmailUpdateInput {
            checkout_id: decode_checkout_id(checkout_id)?,
            email: email.clone(),
        })?;
        debug!("Building checkoutEmailUpdate mutation");

        Ok(self
            .checkout_mutation("checkoutEmailUpdate", input)
            .named("CheckoutEmailUpdate"))
    }

    /// Complete a checkout with a wallet payment token.
    ///
    /// The billing address is always the caller's; the amount charged is the
    /// checkout's payment due.
    ///
    /// # Errors
    ///
    /// Returns an error if the checkout ID cannot be decoded.
    #[instrument(skip_all, fields(payment_type = token.payment_type.as_str()))]
    pub fn mutation_for_complete_checkout(
        &self,
        checkout: &CheckoutSummary,
        billing_address: &PostalAddress,
        token: &PaymentToken,
    ) -> Result<Operation, QueryError> {
        let input = to_input_value(&CheckoutCompleteWithTokenizedPaymentInput {
            checkout_id: decode_checkout_id(&checkout.id)?,
            amount: checkout.payment_due,
            idempotency_key: token.idempotency_key.clone(),
            billing_address: MailingAddressInput::from(billing_address),
            payment_type: token.payment_type,
            payment_data: token.payment_data.clone(),
        })?;
        debug!("Building checkoutCompleteWithTokenizedPayment mutation");

        let payment = Field::new("payment")
            .fields(&["id", "ready", "test", "amount"])
            .select(Field::new("checkout").spread(&self.checkout_fragment))
            .select(Field::new("creditCard").fields(&[
                "firstDigits",
                "lastDigits",
                "maskedNumber",
                "brand",
                "firstName",
                "lastName",
                "expiryMonth",
                "expiryYear",
            ]));

        Ok(Operation::mutation(
            SelectionSet::new().select(
                Field::new("checkoutCompleteWithTokenizedPayment")
                    .arg("input", input)
                    .select(user_errors())
                    .select(payment),
            ),
        )
        .named("CheckoutCompleteWithTokenizedPayment"))
    }

    // =========================================================================
    // Checkout Queries
    // =========================================================================

    /// The checkout together with the shipping rates available for it.
    ///
    /// # Errors
    ///
    /// Returns an error if `checkout_id` cannot be decoded.
    #[instrument(skip_all)]
    pub fn query_shipping_rates_for_checkout(
        &self,
        checkout_id: &str,
    ) -> Result<Operation, QueryError> {
        let checkout_id = decode_checkout_id(checkout_id)?;
        debug!(checkout_id = %checkout_id, "Building shipping rates query");

        Ok(Operation::query(
            SelectionSet::new().select(
                Field::new("node").arg("id", checkout_id.as_str()).on(
                    InlineFragment::new("Checkout")
                        .spread(&self.checkout_fragment)
                        .select(
                            Field::new("availableShippingRates")
                                .field("ready")
                                .select(
                                    Field::new("shippingRates")
                                        .fields(&["handle", "price", "title"]),
                                ),
                        ),
                ),
            ),
        )
        .named("CheckoutShippingRates"))
    }

    /// `mutation { <name>(input: ..) { userErrors { .. } checkout { ..Fragment } } }`
    fn checkout_mutation(&self, name: &'static str, input: InputValue) -> Operation {
        Operation::mutation(
            SelectionSet::new().select(
                Field::new(name)
                    .arg("input", input)
                    .select(user_errors())
                    .select(Field::new("checkout").spread(&self.checkout_fragment)),
            ),
        )
    }
}

fn user_errors() -> Field {
    Field::new("userErrors").fields(&["field", "message"])
}

fn decode_checkout_id(raw: &str) -> Result<CheckoutId, QueryError> {
    CheckoutId::parse(raw).map_err(|source| invalid_id("checkoutId", source))
}

fn invalid_id(field: &'static str, source: storefront_buy_core::IdError) -> QueryError {
    warn!(field, error = %source, "Rejected opaque identifier");
    QueryError::InvalidId { field, source }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::config::placeholder_address;
    use crate::graphql::query::Selection;
    use crate::graphql::{ArgumentLookup, OperationKind, SelectionLookup, ValueLookup};
    use storefront_buy_core::{CurrencyCode, IdError, Money};

    use rust_decimal::Decimal;

    const CHECKOUT_ID: &str = "gid://shopify/Checkout/e28f9f4b7a1c?key=3f5e";

    fn address() -> PostalAddress {
        PostalAddress {
            address1: "150 Elgin St".to_string(),
            address2: Some("Suite 800".to_string()),
            city: "Ottawa".to_string(),
            province: "ON".to_string(),
            country: "Canada".to_string(),
            zip: "K2P 1L4".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        }
    }

    fn shipping_rate(handle: &str) -> ShippingRate {
        ShippingRate {
            handle: handle.to_string(),
            title: "Expedited Parcel".to_string(),
            price: Money::from_minor(1055, CurrencyCode::CAD),
        }
    }

    fn input<'a>(op: &'a Operation, root: &str) -> &'a InputValue {
        op.root(root).unwrap().argument("input").unwrap()
    }

    fn page(n: u64) -> PageSize {
        PageSize::new(n).unwrap()
    }

    fn all_mutations(builder: &QueryBuilder) -> Vec<Operation> {
        vec![
            builder
                .mutation_for_create_checkout(&[CartItem::new("gid://shopify/ProductVariant/1", 1)])
                .unwrap(),
            builder
                .mutation_for_update_shipping_address(CHECKOUT_ID, &address())
                .unwrap(),
            builder
                .mutation_for_update_shipping_rate(CHECKOUT_ID, &shipping_rate("H"))
                .unwrap(),
            builder
                .mutation_for_update_email(CHECKOUT_ID, &Email::parse("ada@example.com").unwrap())
                .unwrap(),
            builder
                .mutation_for_complete_checkout(
                    &CheckoutSummary {
                        id: CHECKOUT_ID.to_string(),
                        payment_due: Decimal::new(4250, 2),
                    },
                    &address(),
                    &PaymentToken {
                        payment_data: "token".to_string(),
                        idempotency_key: "idem-1".to_string(),
                        payment_type: crate::models::PaymentType::ApplePay,
                    },
                )
                .unwrap(),
        ]
    }

    // =========================================================================
    // Catalog queries
    // =========================================================================

    #[test]
    fn test_collections_query_shape() {
        let op = QueryBuilder::default().query_for_collections(page(10), Some("c1"), None, None);
        let collections = op.selection_set().path(&["shop", "collections"]).unwrap();

        assert_eq!(op.kind(), OperationKind::Query);
        assert_eq!(collections.argument("first").and_then(InputValue::as_i64), Some(10));
        assert_eq!(collections.argument("after").and_then(InputValue::as_str), Some("c1"));

        let set = &collections.selection_set;
        assert!(set.contains_path(&["pageInfo", "hasNextPage"]));
        assert!(set.contains_path(&["edges", "cursor"]));
        for field in ["id", "title", "descriptionHtml"] {
            assert!(set.contains_path(&["edges", "node", field]), "missing {field}");
        }
        assert!(set.contains_path(&["edges", "node", "image", "src"]));
    }

    #[test]
    fn test_collections_nested_products_use_own_paging() {
        let builder = QueryBuilder::default();

        let op = builder.query_for_collections(page(5), None, Some(page(3)), Some("p9"));
        let products = op
            .selection_set()
            .path(&["shop", "collections", "edges", "node", "products"])
            .unwrap();
        assert_eq!(products.argument("first").and_then(InputValue::as_i64), Some(3));
        assert_eq!(products.argument("after").and_then(InputValue::as_str), Some("p9"));
        assert!(products.selection_set.spreads_fragment(fragments::PRODUCT_CONNECTION));

        let op = builder.query_for_collections(page(5), None, None, None);
        let products = op
            .selection_set()
            .path(&["shop", "collections", "edges", "node", "products"])
            .unwrap();
        assert_eq!(products.argument("first").and_then(InputValue::as_i64), Some(25));
        assert!(products.argument("after").is_none());
        assert!(
            op.selection_set()
                .path(&["shop", "collections"])
                .unwrap()
                .argument("after")
                .is_none()
        );
    }

    #[test]
    fn test_products_in_collection() {
        let collection = CollectionId::parse("gid://shopify/Collection/42").unwrap();
        let op = QueryBuilder::default().query_for_products(&collection, page(20), Some("cur"));

        let node = op.root("node").unwrap();
        assert_eq!(
            node.argument("id").and_then(InputValue::as_str),
            Some("gid://shopify/Collection/42")
        );
        let products = node
            .selection_set
            .inline("Collection")
            .unwrap()
            .selection_set
            .get("products")
            .unwrap();
        assert_eq!(products.argument("first").and_then(InputValue::as_i64), Some(20));
        assert_eq!(products.argument("after").and_then(InputValue::as_str), Some("cur"));
        assert!(op.document().contains("fragment ProductConnectionFragment on ProductConnection"));
    }

    // =========================================================================
    // Checkout creation
    // =========================================================================

    #[test]
    fn test_create_checkout_one_line_per_item_in_order() {
        let items = vec![
            CartItem::new("gid://shopify/ProductVariant/3", 2),
            CartItem::new("gid://shopify/ProductVariant/1", 1),
            CartItem::new("gid://shopify/ProductVariant/2", 7),
        ];
        let op = QueryBuilder::default()
            .mutation_for_create_checkout(&items)
            .unwrap();

        let lines = input(&op, "checkoutCreate")
            .get("lineItems")
            .and_then(InputValue::as_list)
            .unwrap();
        assert_eq!(lines.len(), items.len());
        for (line, item) in lines.iter().zip(&items) {
            assert_eq!(
                line.get("variantId").and_then(InputValue::as_str),
                Some(item.variant_id.as_str())
            );
            assert_eq!(
                line.get("quantity").and_then(InputValue::as_i64),
                Some(i64::from(item.quantity))
            );
        }
    }

    #[test]
    fn test_create_checkout_rejects_bad_variant() {
        let items = vec![
            CartItem::new("gid://shopify/ProductVariant/1", 1),
            CartItem::new("gid://shopify/Product/1", 1),
        ];
        let err = QueryBuilder::default()
            .mutation_for_create_checkout(&items)
            .unwrap_err();

        assert!(matches!(
            err,
            QueryError::InvalidId {
                field: "variantId",
                source: IdError::WrongType { .. },
            }
        ));
    }

    #[test]
    fn test_create_checkout_rejects_oversized_quantity() {
        let items = vec![CartItem::new("gid://shopify/ProductVariant/1", u32::MAX)];
        let err = QueryBuilder::default()
            .mutation_for_create_checkout(&items)
            .unwrap_err();

        assert!(matches!(
            err,
            QueryError::QuantityOutOfRange {
                index: 0,
                quantity: u32::MAX,
            }
        ));
    }

    // =========================================================================
    // Checkout updates
    // =========================================================================

    #[test]
    fn test_shipping_rate_update_references_id_and_handle() {
        let op = QueryBuilder::default()
            .mutation_for_update_shipping_rate(CHECKOUT_ID, &shipping_rate("H"))
            .unwrap();
        let input = input(&op, "checkoutShippingLineUpdate");

        assert_eq!(input.get("checkoutId").and_then(InputValue::as_str), Some(CHECKOUT_ID));
        assert_eq!(
            input.get("shippingRateHandle").and_then(InputValue::as_str),
            Some("H")
        );
    }

    #[test]
    fn test_shipping_address_forwarded_by_default() {
        let op = QueryBuilder::default()
            .mutation_for_update_shipping_address(CHECKOUT_ID, &address())
            .unwrap();
        let shipping = input(&op, "checkoutShippingAddressUpdate")
            .get("shippingAddress")
            .unwrap();

        assert_eq!(shipping.get("address1").and_then(InputValue::as_str), Some("150 Elgin St"));
        assert_eq!(shipping.get("address2").and_then(InputValue::as_str), Some("Suite 800"));
        assert_eq!(shipping.get("city").and_then(InputValue::as_str), Some("Ottawa"));
        assert_eq!(shipping.get("zip").and_then(InputValue::as_str), Some("K2P 1L4"));
        assert_eq!(shipping.get("firstName").and_then(InputValue::as_str), Some("Ada"));
    }

    #[test]
    fn test_shipping_address_placeholder_policy_wins() {
        let builder = QueryBuilder::new(QueryConfig {
            shipping_address_source: ShippingAddressSource::Placeholder,
            ..QueryConfig::default()
        });
        let op = builder
            .mutation_for_update_shipping_address(CHECKOUT_ID, &address())
            .unwrap();
        let shipping = input(&op, "checkoutShippingAddressUpdate")
            .get("shippingAddress")
            .unwrap();

        let expected = placeholder_address();
        assert_eq!(
            shipping.get("address1").and_then(InputValue::as_str),
            Some(expected.address1.as_str())
        );
        assert_eq!(shipping.get("city").and_then(InputValue::as_str), Some("Toronto"));
        assert_eq!(shipping.get("province").and_then(InputValue::as_str), Some("ON"));
        assert_eq!(shipping.get("lastName").and_then(InputValue::as_str), Some("Smith"));
        // The checkout reference is still the caller's.
        assert_eq!(
            input(&op, "checkoutShippingAddressUpdate")
                .get("checkoutId")
                .and_then(InputValue::as_str),
            Some(CHECKOUT_ID)
        );
    }

    #[test]
    fn test_email_update() {
        let op = QueryBuilder::default()
            .mutation_for_update_email(CHECKOUT_ID, &Email::parse("ada@example.com").unwrap())
            .unwrap();
        let input = input(&op, "checkoutEmailUpdate");

        assert_eq!(input.get("email").and_then(InputValue::as_str), Some("ada@example.com"));
        assert_eq!(input.get("checkoutId").and_then(InputValue::as_str), Some(CHECKOUT_ID));
    }

    // =========================================================================
    // Completion
    // =========================================================================

    #[test]
    fn test_complete_checkout_forwards_billing_address() {
        let builder = QueryBuilder::new(QueryConfig {
            shipping_address_source: ShippingAddressSource::Placeholder,
            ..QueryConfig::default()
        });
        let ops = all_mutations(&builder);
        let op = ops.last().unwrap();
        let input = input(op, "checkoutCompleteWithTokenizedPayment");

        let billing = input.get("billingAddress").unwrap();
        assert_eq!(billing.get("city").and_then(InputValue::as_str), Some("Ottawa"));
        assert_eq!(input.get("amount").and_then(InputValue::as_str), Some("42.50"));
        assert_eq!(input.get("paymentData").and_then(InputValue::as_str), Some("token"));
        assert_eq!(input.get("type").and_then(InputValue::as_str), Some("apple_pay"));

        let payment = op
            .selection_set()
            .path(&["checkoutCompleteWithTokenizedPayment", "payment"])
            .unwrap();
        for field in ["id", "ready", "test", "amount"] {
            assert!(payment.selection_set.get(field).is_some(), "missing {field}");
        }
        assert!(payment.selection_set.contains_path(&["creditCard", "maskedNumber"]));
        assert!(
            payment
                .selection_set
                .get("checkout")
                .unwrap()
                .selection_set
                .spreads_fragment(fragments::CHECKOUT)
        );
    }

    #[test]
    fn test_every_mutation_requests_user_errors_and_checkout() {
        for op in all_mutations(&QueryBuilder::default()) {
            assert_eq!(op.kind(), OperationKind::Mutation);

            let root = match op.selection_set().items.first().unwrap() {
                Selection::Field(field) => field.name.as_str(),
                other => panic!("unexpected root selection {other:?}"),
            };
            assert!(
                op.selection_set().contains_path(&[root, "userErrors", "field"]),
                "{root} lacks userErrors.field"
            );
            assert!(
                op.selection_set().contains_path(&[root, "userErrors", "message"]),
                "{root} lacks userErrors.message"
            );
            assert!(
                op.fragments().iter().any(|f| f.name() == fragments::CHECKOUT),
                "{root} lacks the checkout fragment"
            );
        }
    }

    // =========================================================================
    // Shipping rates
    // =========================================================================

    #[test]
    fn test_shipping_rates_query() {
        let op = QueryBuilder::default()
            .query_shipping_rates_for_checkout(CHECKOUT_ID)
            .unwrap();
        let node = op.root("node").unwrap();

        assert_eq!(node.argument("id").and_then(InputValue::as_str), Some(CHECKOUT_ID));
        assert!(node.selection_set.spreads_fragment(fragments::CHECKOUT));
        for field in ["handle", "price", "title"] {
            assert!(
                node.selection_set
                    .contains_path(&["availableShippingRates", "shippingRates", field]),
                "missing {field}"
            );
        }
        assert!(
            node.selection_set
                .contains_path(&["availableShippingRates", "ready"])
        );
    }

    #[test]
    fn test_undecodable_checkout_id_fails_construction() {
        let builder = QueryBuilder::default();

        for raw in [
            "",
            "not a checkout",
            "gid://shopify/Checkout",
            "gid://shopify/Checkout/a b\"}",
        ] {
            let err = builder.query_shipping_rates_for_checkout(raw).unwrap_err();
            assert!(
                matches!(err, QueryError::InvalidId { field: "checkoutId", .. }),
                "{raw:?} gave {err:?}"
            );
        }

        assert!(
            builder
                .mutation_for_update_shipping_rate("", &shipping_rate("H"))
                .is_err()
        );
        assert!(
            builder
                .mutation_for_update_shipping_address("gid://shopify/Cart/1", &address())
                .is_err()
        );
    }

    #[test]
    fn test_builder_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<QueryBuilder>();
    }
}
