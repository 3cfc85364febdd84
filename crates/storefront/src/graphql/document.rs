//! Operations and their rendered documents.

use std::fmt;
use std::sync::Arc;

use graphql_parser::Pos;
use graphql_parser::query::{Definition, Mutation, OperationDefinition, Query};
use serde::Serialize;

use super::lookup::SelectionLookup;
use super::selection::{Fragment, SelectionSet};
use super::{Document, FieldNode, SelectionSetNode};

/// Root operation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Query,
    Mutation,
}

impl OperationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable query or mutation.
///
/// `Display` renders the full document: the operation followed by the
/// definition of every fragment it references. Serializing produces the
/// JSON body of a GraphQL-over-HTTP request.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    kind: OperationKind,
    name: Option<&'static str>,
    selection_set: SelectionSetNode,
    fragments: Vec<Arc<Fragment>>,
}

impl Operation {
    fn new(kind: OperationKind, selection_set: SelectionSet) -> Self {
        let (selection_set, fragments) = selection_set.into_parts();
        Self {
            kind,
            name: None,
            selection_set,
            fragments,
        }
    }

    #[must_use]
    pub fn query(selection_set: SelectionSet) -> Self {
        Self::new(OperationKind::Query, selection_set)
    }

    #[must_use]
    pub fn mutation(selection_set: SelectionSet) -> Self {
        Self::new(OperationKind::Mutation, selection_set)
    }

    /// Attach an operation name.
    #[must_use]
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    #[must_use]
    pub const fn kind(&self) -> OperationKind {
        self.kind
    }

    #[must_use]
    pub const fn name(&self) -> Option<&'static str> {
        self.name
    }

    #[must_use]
    pub const fn selection_set(&self) -> &SelectionSetNode {
        &self.selection_set
    }

    /// Top-level field by name.
    #[must_use]
    pub fn root(&self, name: &str) -> Option<&FieldNode> {
        self.selection_set.get(name)
    }

    /// Fragments that will be defined alongside the operation, in
    /// first-use order.
    #[must_use]
    pub fn fragments(&self) -> &[Arc<Fragment>] {
        &self.fragments
    }

    /// Assemble the document AST.
    #[must_use]
    pub fn to_document(&self) -> Document {
        let name = self.name.map(str::to_owned);
        let selection_set = self.selection_set.clone();
        let operation = match self.kind {
            OperationKind::Query => OperationDefinition::Query(Query {
                position: Pos::default(),
                name,
                variable_definitions: Vec::new(),
                directives: Vec::new(),
                selection_set,
            }),
            OperationKind::Mutation => OperationDefinition::Mutation(Mutation {
                position: Pos::default(),
                name,
                variable_definitions: Vec::new(),
                directives: Vec::new(),
                selection_set,
            }),
        };

        let mut definitions = vec![Definition::Operation(operation)];
        definitions.extend(
            self.fragments
                .iter()
                .map(|fragment| Definition::Fragment(fragment.definition().clone())),
        );
        Document { definitions }
    }

    /// Render the GraphQL document.
    #[must_use]
    pub fn document(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_document(), f)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestBody<'a> {
    query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    operation_name: Option<&'a str>,
}

impl Serialize for Operation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RequestBody {
            query: self.document(),
            operation_name: self.name,
        }
        .serialize(serializer)
    }
}
