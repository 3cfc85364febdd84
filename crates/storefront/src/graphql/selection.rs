//! Builders for fields, fragments and selection sets.

use std::fmt;
use std::sync::Arc;

use graphql_parser::Pos;
use graphql_parser::query::{FragmentSpread, Selection, TypeCondition};

use super::value::IntoInputValue;
use super::{FieldNode, FragmentNode, InlineFragmentNode, SelectionSetNode};

fn empty_set() -> SelectionSetNode {
    SelectionSetNode {
        span: (Pos::default(), Pos::default()),
        items: Vec::new(),
    }
}

/// Append `referenced` to `found`, skipping names already present.
fn merge_fragments(
    found: &mut Vec<Arc<Fragment>>,
    referenced: impl IntoIterator<Item = Arc<Fragment>>,
) {
    for fragment in referenced {
        if !found.iter().any(|f| f.name() == fragment.name()) {
            found.push(fragment);
        }
    }
}

/// Builder methods shared by everything that owns a selection set.
///
/// All methods consume `self` and hand it back, so selection trees are
/// written as a single expression and never mutated after construction.
/// Besides the AST node, every builder tracks the named fragments spread
/// anywhere below it, in first-use order.
pub trait Selectable: Sized {
    fn selection_set(&self) -> &SelectionSetNode;

    fn selection_set_mut(&mut self) -> &mut SelectionSetNode;

    /// Fragments spread anywhere below this node.
    fn fragments(&self) -> &[Arc<Fragment>];

    fn fragments_mut(&mut self) -> &mut Vec<Arc<Fragment>>;

    /// Add a leaf field.
    #[must_use]
    fn field(self, name: &'static str) -> Self {
        self.select(Field::new(name))
    }

    /// Add several leaf fields in order.
    #[must_use]
    fn fields(self, names: &[&'static str]) -> Self {
        names.iter().fold(self, |acc, &name| acc.field(name))
    }

    /// Add a field with its own arguments or sub-selection.
    #[must_use]
    fn select(mut self, field: Field) -> Self {
        let Field { node, fragments } = field;
        self.selection_set_mut().items.push(Selection::Field(node));
        merge_fragments(self.fragments_mut(), fragments);
        self
    }

    /// Spread a named fragment (`...Name`).
    #[must_use]
    fn spread(mut self, fragment: &Arc<Fragment>) -> Self {
        self.selection_set_mut()
            .items
            .push(Selection::FragmentSpread(FragmentSpread {
                position: Pos::default(),
                fragment_name: fragment.name().to_owned(),
                directives: Vec::new(),
            }));
        let nested = fragment.fragments.iter().cloned();
        merge_fragments(
            self.fragments_mut(),
            std::iter::once(Arc::clone(fragment)).chain(nested),
        );
        self
    }

    /// Add an inline fragment (`... on Type { .. }`).
    #[must_use]
    fn on(mut self, fragment: InlineFragment) -> Self {
        let InlineFragment { node, fragments } = fragment;
        self.selection_set_mut()
            .items
            .push(Selection::InlineFragment(node));
        merge_fragments(self.fragments_mut(), fragments);
        self
    }
}

/// The root selection set of an operation.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionSet {
    node: SelectionSetNode,
    fragments: Vec<Arc<Fragment>>,
}

impl Default for SelectionSet {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionSet {
    #[must_use]
    pub fn new() -> Self {
        Self {
            node: empty_set(),
            fragments: Vec::new(),
        }
    }

    pub(super) fn into_parts(self) -> (SelectionSetNode, Vec<Arc<Fragment>>) {
        (self.node, self.fragments)
    }
}

impl Selectable for SelectionSet {
    fn selection_set(&self) -> &SelectionSetNode {
        &self.node
    }

    fn selection_set_mut(&mut self) -> &mut SelectionSetNode {
        &mut self.node
    }

    fn fragments(&self) -> &[Arc<Fragment>] {
        &self.fragments
    }

    fn fragments_mut(&mut self) -> &mut Vec<Arc<Fragment>> {
        &mut self.fragments
    }
}

/// A field selection with optional arguments and sub-selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    node: FieldNode,
    fragments: Vec<Arc<Fragment>>,
}

impl Field {
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            node: FieldNode {
                position: Pos::default(),
                alias: None,
                name: name.to_owned(),
                arguments: Vec::new(),
                directives: Vec::new(),
                selection_set: empty_set(),
            },
            fragments: Vec::new(),
        }
    }

    /// Add an argument.
    #[must_use]
    pub fn arg(mut self, name: &'static str, value: impl IntoInputValue) -> Self {
        self.node
            .arguments
            .push((name.to_owned(), value.into_input_value()));
        self
    }

    /// Add an argument only when a value is present.
    #[must_use]
    pub fn arg_opt<V: IntoInputValue>(self, name: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.arg(name, value),
            None => self,
        }
    }

    #[must_use]
    pub const fn node(&self) -> &FieldNode {
        &self.node
    }
}

impl Selectable for Field {
    fn selection_set(&self) -> &SelectionSetNode {
        &self.node.selection_set
    }

    fn selection_set_mut(&mut self) -> &mut SelectionSetNode {
        &mut self.node.selection_set
    }

    fn fragments(&self) -> &[Arc<Fragment>] {
        &self.fragments
    }

    fn fragments_mut(&mut self) -> &mut Vec<Arc<Fragment>> {
        &mut self.fragments
    }
}

/// `... on Type { .. }` inside a selection set.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineFragment {
    node: InlineFragmentNode,
    fragments: Vec<Arc<Fragment>>,
}

impl InlineFragment {
    #[must_use]
    pub fn new(type_condition: &'static str) -> Self {
        Self {
            node: InlineFragmentNode {
                position: Pos::default(),
                type_condition: Some(TypeCondition::On(type_condition.to_owned())),
                directives: Vec::new(),
                selection_set: empty_set(),
            },
            fragments: Vec::new(),
        }
    }
}

impl Selectable for InlineFragment {
    fn selection_set(&self) -> &SelectionSetNode {
        &self.node.selection_set
    }

    fn selection_set_mut(&mut self) -> &mut SelectionSetNode {
        &mut self.node.selection_set
    }

    fn fragments(&self) -> &[Arc<Fragment>] {
        &self.fragments
    }

    fn fragments_mut(&mut self) -> &mut Vec<Arc<Fragment>> {
        &mut self.fragments
    }
}

/// A named, reusable sub-selection (`fragment Name on Type { .. }`).
///
/// Build it with the [`Selectable`] methods, then wrap it in an `Arc` to
/// share it between operations.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    node: FragmentNode,
    fragments: Vec<Arc<Fragment>>,
}

impl Fragment {
    #[must_use]
    pub fn new(name: &'static str, type_condition: &'static str) -> Self {
        Self {
            node: FragmentNode {
                position: Pos::default(),
                name: name.to_owned(),
                type_condition: TypeCondition::On(type_condition.to_owned()),
                directives: Vec::new(),
                selection_set: empty_set(),
            },
            fragments: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.node.name
    }

    #[must_use]
    pub fn type_condition(&self) -> &str {
        let TypeCondition::On(on) = &self.node.type_condition;
        on
    }

    #[must_use]
    pub const fn definition(&self) -> &FragmentNode {
        &self.node
    }
}

impl Selectable for Fragment {
    fn selection_set(&self) -> &SelectionSetNode {
        &self.node.selection_set
    }

    fn selection_set_mut(&mut self) -> &mut SelectionSetNode {
        &mut self.node.selection_set
    }

    fn fragments(&self) -> &[Arc<Fragment>] {
        &self.fragments
    }

    fn fragments_mut(&mut self) -> &mut Vec<Arc<Fragment>> {
        &mut self.fragments
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.node, f)
    }
}
