//! Shared sub-selections.
//!
//! Every operation that returns a checkout spreads [`CHECKOUT`], and every
//! product listing spreads [`PRODUCT_CONNECTION`], so callers always decode
//! the same shape regardless of which operation produced it.

use std::sync::Arc;

use crate::config::QueryConfig;
use crate::graphql::{Field, Fragment, Selectable};

/// Name of the checkout fragment.
pub const CHECKOUT: &str = "CheckoutFragment";

/// Name of the product connection fragment.
pub const PRODUCT_CONNECTION: &str = "ProductConnectionFragment";

/// `fragment CheckoutFragment on Checkout`.
#[must_use]
pub fn checkout(config: &QueryConfig) -> Arc<Fragment> {
    Arc::new(
        Fragment::new(CHECKOUT, "Checkout")
            .fields(&["id", "ready", "requiresShipping", "taxesIncluded", "email"])
            .select(Field::new("shippingAddress").fields(&[
                "firstName",
                "lastName",
                "address1",
                "address2",
                "city",
                "province",
                "country",
                "zip",
            ]))
            .select(Field::new("shippingLine").fields(&["handle", "title", "price"]))
            .field("note")
            .select(
                Field::new("lineItems")
                    .arg("first", config.line_items_page_size)
                    .select(
                        Field::new("edges").field("cursor").select(
                            Field::new("node")
                                .fields(&["title", "quantity"])
                                .select(Field::new("variant").fields(&["id", "price"])),
                        ),
                    ),
            )
            .fields(&[
                "webUrl",
                "currencyCode",
                "subtotalPrice",
                "totalTax",
                "totalPrice",
                "paymentDue",
            ]),
    )
}

/// `fragment ProductConnectionFragment on ProductConnection`.
#[must_use]
pub fn product_connection(config: &QueryConfig) -> Arc<Fragment> {
    Arc::new(
        Fragment::new(PRODUCT_CONNECTION, "ProductConnection")
            .select(Field::new("pageInfo").field("hasNextPage"))
            .select(
                Field::new("edges").field("cursor").select(
                    Field::new("node")
                        .fields(&["id", "title", "descriptionHtml"])
                        .select(
                            Field::new("images")
                                .arg("first", config.image_page_size)
                                .select(Field::new("edges").select(Field::new("node").field("src"))),
                        )
                        .select(
                            Field::new("variants")
                                .arg("first", config.variant_page_size)
                                .select(
                                    Field::new("edges").select(
                                        Field::new("node").fields(&["id", "title", "price"]),
                                    ),
                                ),
                        ),
                ),
            ),
    )
}
