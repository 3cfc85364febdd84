//! Read access to assembled trees.

use graphql_parser::query::{Selection, TypeCondition, Value};

use super::{FieldNode, InlineFragmentNode, InputValue, SelectionSetNode};

/// Field and fragment lookups on a selection set.
pub trait SelectionLookup {
    /// Find a field selected at this level.
    ///
    /// Inline fragments are transparent to lookups; fragment spreads are
    /// not, use [`SelectionLookup::spreads_fragment`] for those.
    fn get(&self, name: &str) -> Option<&FieldNode>;

    /// Inline fragment for `type_condition` at this level.
    fn inline(&self, type_condition: &str) -> Option<&InlineFragmentNode>;

    /// Whether `...name` is spread directly at this level (or inside an
    /// inline fragment at this level).
    fn spreads_fragment(&self, name: &str) -> bool;

    /// Follow a path of field names, e.g. `["checkoutCreate", "userErrors"]`.
    fn path(&self, path: &[&str]) -> Option<&FieldNode> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.get(first)?, |field, name| field.selection_set.get(name))
    }

    fn contains_path(&self, path: &[&str]) -> bool {
        self.path(path).is_some()
    }
}

impl SelectionLookup for SelectionSetNode {
    fn get(&self, name: &str) -> Option<&FieldNode> {
        self.items.iter().find_map(|selection| match selection {
            Selection::Field(field) if field.name == name => Some(field),
            Selection::InlineFragment(inline) => inline.selection_set.get(name),
            _ => None,
        })
    }

    fn inline(&self, type_condition: &str) -> Option<&InlineFragmentNode> {
        self.items.iter().find_map(|selection| match selection {
            Selection::InlineFragment(inline)
                if matches!(&inline.type_condition, Some(TypeCondition::On(on)) if on == type_condition) =>
            {
                Some(inline)
            }
            _ => None,
        })
    }

    fn spreads_fragment(&self, name: &str) -> bool {
        self.items.iter().any(|selection| match selection {
            Selection::FragmentSpread(spread) => spread.fragment_name == name,
            Selection::InlineFragment(inline) => inline.selection_set.spreads_fragment(name),
            Selection::Field(_) => false,
        })
    }
}

/// Argument lookup on a field node.
pub trait ArgumentLookup {
    fn argument(&self, name: &str) -> Option<&InputValue>;
}

impl ArgumentLookup for FieldNode {
    fn argument(&self, name: &str) -> Option<&InputValue> {
        self.arguments
            .iter()
            .find_map(|(key, value)| (key == name).then_some(value))
    }
}

/// Accessors for argument values.
pub trait ValueLookup {
    /// Entry of an object value.
    fn get(&self, key: &str) -> Option<&InputValue>;

    /// String or enum literal.
    fn as_str(&self) -> Option<&str>;

    fn as_i64(&self) -> Option<i64>;

    fn as_list(&self) -> Option<&[InputValue]>;

    fn is_null(&self) -> bool;
}

impl ValueLookup for InputValue {
    fn get(&self, key: &str) -> Option<&InputValue> {
        match self {
            Value::Object(entries) => entries.get(key),
            _ => None,
        }
    }

    fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::Enum(s) => Some(s.as_str()),
            _ => None,
        }
    }

    fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => n.as_i64(),
            _ => None,
        }
    }

    fn as_list(&self) -> Option<&[InputValue]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}
