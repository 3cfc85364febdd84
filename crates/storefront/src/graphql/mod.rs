//! Typed GraphQL selection trees.
//!
//! Operations are assembled as `graphql-parser` query ASTs rather than
//! strings. The builder types here ([`Field`], [`InlineFragment`],
//! [`Fragment`], [`SelectionSet`]) wrap the AST nodes and remember which
//! named fragments a tree spreads, so an [`Operation`] can append each
//! fragment definition exactly once. Everything is immutable once built and
//! can be inspected node by node through [`SelectionLookup`], which is what
//! the builder tests rely on.
//!
//! Printing is left to `graphql-parser`: [`Operation::document`] formats the
//! assembled [`query::Document`] with the crate's default style.
//!
//! ```
//! use storefront_buy::graphql::{Field, Operation, Selectable, SelectionSet};
//!
//! let op = Operation::query(
//!     SelectionSet::new().select(Field::new("shop").field("name")),
//! );
//! assert_eq!(op.document(), "query {\n  shop {\n    name\n  }\n}\n");
//! ```

mod document;
mod lookup;
mod selection;
mod value;

pub use graphql_parser::query;

pub use document::{Operation, OperationKind};
pub use lookup::{ArgumentLookup, SelectionLookup, ValueLookup};
pub use selection::{Field, Fragment, InlineFragment, Selectable, SelectionSet};
pub use value::{IntoInputValue, from_json, to_input_value};

/// Argument value node.
pub type InputValue = query::Value<'static, String>;

/// Field node of an assembled tree.
pub type FieldNode = query::Field<'static, String>;

/// Selection set node.
pub type SelectionSetNode = query::SelectionSet<'static, String>;

/// Inline fragment node.
pub type InlineFragmentNode = query::InlineFragment<'static, String>;

/// Fragment definition node.
pub type FragmentNode = query::FragmentDefinition<'static, String>;

/// A complete document: one operation followed by its fragments.
pub type Document = query::Document<'static, String>;
