//! Mutation input payloads.
//!
//! Each struct mirrors an input object of the Storefront schema and is
//! serialized field-for-field (camelCase) into an inline argument. Entity
//! references are typed IDs, so a payload cannot hold an undecoded one.

use rust_decimal::Decimal;
use serde::Serialize;

use storefront_buy_core::{CheckoutId, Email, VariantId};

use crate::models::{PaymentType, PostalAddress};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemInput {
    pub variant_id: VariantId,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutCreateInput {
    pub line_items: Vec<LineItemInput>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MailingAddressInput {
    pub address1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    pub city: String,
    pub country: String,
    pub first_name: String,
    pub last_name: String,
    pub province: String,
    pub zip: String,
}

impl From<&PostalAddress> for MailingAddressInput {
    fn from(address: &PostalAddress) -> Self {
        Self {
            address1: address.address1.clone(),
            address2: address.address2.clone(),
            city: address.city.clone(),
            country: address.country.clone(),
            first_name: address.first_name.clone(),
            last_name: address.last_name.clone(),
            province: address.province.clone(),
            zip: address.zip.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutShippingAddressUpdateInput {
    pub shipping_address: MailingAddressInput,
    pub checkout_id: CheckoutId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutShippingLineUpdateInput {
    pub checkout_id: CheckoutId,
    pub shipping_rate_handle: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutEmailUpdateInput {
    pub checkout_id: CheckoutId,
    pub email: Email,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutCompleteWithTokenizedPaymentInput {
    pub checkout_id: CheckoutId,
    /// Amount charged, serialized as a decimal string.
    pub amount: Decimal,
    pub idempotency_key: String,
    pub billing_address: MailingAddressInput,
    #[serde(rename = "type")]
    pub payment_type: PaymentType,
    pub payment_data: String,
}
