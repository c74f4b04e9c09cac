//! Node templates and the tree builder that applies them to rows.

use super::diagnostics::Diagnostics;
use super::field::{FieldSpec, Scope};
use super::node::{Content, Node};
use super::table::Row;

/// How many times a template is emitted inside its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    /// Once, against the current row.
    #[default]
    Once,
    /// Once per row of the record (leader first, then followers), each
    /// against its own row.
    EachRow,
}

#[derive(Debug, Clone, Default)]
enum Body {
    #[default]
    Empty,
    Text(FieldSpec),
    Children(Vec<NodeTemplate>),
}

/// Declarative description of one XML element.
///
/// Children are emitted in declaration order. A template has either a text
/// body or children, never both; adding a child to a text template
/// discards the text.
#[derive(Debug, Clone)]
pub struct NodeTemplate {
    tag: &'static str,
    attrs: Vec<(&'static str, FieldSpec)>,
    body: Body,
    repeat: Repeat,
}

impl NodeTemplate {
    /// An element with no attributes and no content.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            body: Body::Empty,
            repeat: Repeat::Once,
        }
    }

    /// A leaf element whose text comes from `spec`.
    pub fn text(tag: &'static str, spec: FieldSpec) -> Self {
        Self {
            body: Body::Text(spec),
            ..Self::new(tag)
        }
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn attr(mut self, name: &'static str, spec: FieldSpec) -> Self {
        self.attrs.push((name, spec));
        self
    }

    /// `TYPE="String"`-style literal attribute.
    pub fn attr_literal(self, name: &'static str, value: &'static str) -> Self {
        self.attr(name, FieldSpec::literal(value))
    }

    pub fn each_row(mut self) -> Self {
        self.repeat = Repeat::EachRow;
        self
    }

    /// Append a nested template.
    pub fn child(mut self, child: NodeTemplate) -> Self {
        match &mut self.body {
            Body::Children(children) => children.push(child),
            body => *body = Body::Children(vec![child]),
        }
        self
    }

    /// Append a text child.
    pub fn field(self, tag: &'static str, spec: FieldSpec) -> Self {
        self.child(Self::text(tag, spec))
    }

    /// Append a text child with fixed content.
    pub fn literal(self, tag: &'static str, text: &'static str) -> Self {
        self.field(tag, FieldSpec::literal(text))
    }

    /// Append text children sharing one fixed value, e.g. a run of `No` flags.
    pub fn flags(self, tags: &[&'static str], value: &'static str) -> Self {
        tags.iter().fold(self, |t, tag| t.literal(*tag, value))
    }

    /// Append list elements holding only a whitespace placeholder, which
    /// keeps them from serializing as self-closing tags.
    pub fn placeholders(self, tags: &[&'static str], filler: &'static str) -> Self {
        self.flags(tags, filler)
    }

    /// Append text children read from columns, each `(tag, column, default)`.
    pub fn column_fields(self, fields: &[(&'static str, &'static str, &'static str)]) -> Self {
        fields.iter().fold(self, |t, (tag, column, default)| {
            t.field(*tag, FieldSpec::column(*column).or(*default))
        })
    }

    /// Append childless, self-closing elements.
    pub fn empties(self, tags: &[&'static str]) -> Self {
        tags.iter().fold(self, |t, tag| t.child(Self::new(*tag)))
    }

    /// Build this template against one scope.
    ///
    /// `rows` is the full row set of the enclosing record; `EachRow`
    /// children iterate it. Returns one node, or one node per row for an
    /// `EachRow` template.
    pub fn build<'a>(
        &self,
        scope: &Scope<'a>,
        rows: &[Row<'a>],
        diag: &mut Diagnostics,
    ) -> Vec<Node> {
        match self.repeat {
            Repeat::Once => vec![self.build_one(scope, rows, diag)],
            Repeat::EachRow => rows
                .iter()
                .map(|row| {
                    let row_scope = Scope { row: *row, ..*scope };
                    self.build_one(&row_scope, rows, diag)
                })
                .collect(),
        }
    }

    fn build_one<'a>(&self, scope: &Scope<'a>, rows: &[Row<'a>], diag: &mut Diagnostics) -> Node {
        let mut node = Node::new(self.tag);
        for (name, spec) in &self.attrs {
            node.attrs.push(((*name).to_string(), spec.resolve(scope, diag)));
        }
        match &self.body {
            Body::Empty => {}
            Body::Text(spec) => {
                let text = spec.resolve(scope, diag);
                if !text.is_empty() {
                    node.content = Content::Text(text);
                }
            }
            Body::Children(children) => {
                for child in children {
                    for built in child.build(scope, rows, diag) {
                        node.push(built);
                    }
                }
            }
        }
        node
    }
}
