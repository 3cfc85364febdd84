//! Argument values.
//!
//! Input payloads are plain serde structs; [`to_input_value`] turns them
//! into `graphql-parser` value nodes so they can be written inline as an
//! argument. Object keys come out sorted (`serde_json::Map` and the AST's
//! `BTreeMap` both order by key), which keeps rendered documents stable.

use graphql_parser::query::Number;
use serde::Serialize;

use super::InputValue;

/// Conversion into an argument value node.
pub trait IntoInputValue {
    fn into_input_value(self) -> InputValue;
}

impl IntoInputValue for InputValue {
    fn into_input_value(self) -> InputValue {
        self
    }
}

impl IntoInputValue for &str {
    fn into_input_value(self) -> InputValue {
        InputValue::String(self.to_owned())
    }
}

impl IntoInputValue for String {
    fn into_input_value(self) -> InputValue {
        InputValue::String(self)
    }
}

impl IntoInputValue for bool {
    fn into_input_value(self) -> InputValue {
        InputValue::Boolean(self)
    }
}

impl IntoInputValue for i32 {
    fn into_input_value(self) -> InputValue {
        InputValue::Int(Number::from(self))
    }
}

impl<T: IntoInputValue> IntoInputValue for Option<T> {
    fn into_input_value(self) -> InputValue {
        self.map_or(InputValue::Null, IntoInputValue::into_input_value)
    }
}

impl<T: IntoInputValue> IntoInputValue for Vec<T> {
    fn into_input_value(self) -> InputValue {
        InputValue::List(self.into_iter().map(IntoInputValue::into_input_value).collect())
    }
}

/// Convert any serializable input struct into an object literal.
///
/// # Errors
///
/// Returns an error if `value` cannot be represented as JSON (for example a
/// map with non-string keys).
pub fn to_input_value<T: Serialize + ?Sized>(value: &T) -> Result<InputValue, serde_json::Error> {
    serde_json::to_value(value).map(from_json)
}

/// Map a JSON value onto the GraphQL value grammar.
///
/// Integers outside the 32-bit `Int` range become floats, as GraphQL has no
/// wider integer literal.
#[must_use]
pub fn from_json(value: serde_json::Value) -> InputValue {
    use serde_json::Value;

    match value {
        Value::Null => InputValue::Null,
        Value::Bool(b) => InputValue::Boolean(b),
        Value::Number(n) => n
            .as_i64()
            .and_then(|i| i32::try_from(i).ok())
            .map(|i| InputValue::Int(Number::from(i)))
            .or_else(|| n.as_f64().map(InputValue::Float))
            .unwrap_or(InputValue::Null),
        Value::String(s) => InputValue::String(s),
        Value::Array(items) => InputValue::List(items.into_iter().map(from_json).collect()),
        Value::Object(map) => {
            InputValue::Object(map.into_iter().map(|(k, v)| (k, from_json(v))).collect())
        }
    }
}
