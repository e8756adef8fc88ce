//! Schema traversal.

use crate::{error::ErrorTree, node::SchemaNode};

///
/// Segment
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Segment {
    /// Named object field.
    Field(String),
    /// Array element type.
    Element,
    /// Optional/Nullable inner type.
    Inner,
    /// Union branch by position.
    Branch(usize),
}

///
/// Visitor
///

pub trait Visitor {
    fn enter(&mut self, _node: &SchemaNode) {}
    fn exit(&mut self, _node: &SchemaNode) {}

    fn push(&mut self, _seg: Segment) {}
    fn pop(&mut self) {}
}

impl SchemaNode {
    pub fn accept<V: Visitor>(&self, v: &mut V) {
        v.enter(self);
        self.drive(v);
        v.exit(self);
    }

    fn drive<V: Visitor>(&self, v: &mut V) {
        match self {
            Self::Array(node) => {
                v.push(Segment::Element);
                node.element.accept(v);
                v.pop();
            }
            Self::Nullable(node) => {
                v.push(Segment::Inner);
                node.inner.accept(v);
                v.pop();
            }
            Self::Object(node) => {
                for field in &node.shape {
                    v.push(Segment::Field(field.ident.clone()));
                    field.value.accept(v);
                    v.pop();
                }
            }
            Self::Optional(node) => {
                v.push(Segment::Inner);
                node.inner.accept(v);
                v.pop();
            }
            Self::Union(node) => {
                v.push(Segment::Branch(0));
                node.first.accept(v);
                v.pop();
                v.push(Segment::Branch(1));
                node.second.accept(v);
                v.pop();
            }
            Self::Date | Self::Enum(_) | Self::Literal(_) | Self::Nan | Self::Number
            | Self::String(_) => {}
        }
    }
}

/// Render a traversal path for diagnostics: fields joined with `.`,
/// array elements as `[]`, union branches as `|n`.
#[must_use]
pub fn render_path(path: &[Segment]) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    for seg in path {
        match seg {
            Segment::Field(name) => {
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(name);
            }
            Segment::Element => out.push_str("[]"),
            Segment::Inner => {}
            Segment::Branch(index) => {
                let _ = write!(out, "|{index}");
            }
        }
    }

    out
}

///
/// ValidateVisitor
/// Collects each node's local invariant failures under its route.
///

pub(crate) struct ValidateVisitor {
    pub path: Vec<Segment>,
    pub errors: ErrorTree,
}

impl ValidateVisitor {
    pub fn new() -> Self {
        Self {
            path: Vec::new(),
            errors: ErrorTree::new(),
        }
    }
}

impl Visitor for ValidateVisitor {
    fn enter(&mut self, node: &SchemaNode) {
        if let Err(errs) = node.validate_local() {
            self.errors.merge_at(&render_path(&self.path), errs);
        }
    }

    fn push(&mut self, seg: Segment) {
        self.path.push(seg);
    }

    fn pop(&mut self) {
        self.path.pop();
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::ObjectNode;

    #[test]
    fn render_path_formats_segments() {
        let path = vec![
            Segment::Field("name".to_string()),
            Segment::Field("tags".to_string()),
            Segment::Element,
            Segment::Branch(1),
        ];
        assert_eq!(render_path(&path), "name.tags[]|1");
    }

    #[test]
    fn traversal_visits_every_node() {
        struct Counter(usize);
        impl Visitor for Counter {
            fn enter(&mut self, _node: &SchemaNode) {
                self.0 += 1;
            }
        }

        let schema: SchemaNode = ObjectNode::new()
            .field("age", SchemaNode::number().or(SchemaNode::nan()))
            .field("tags", SchemaNode::enumeration(["a", "b"]).array())
            .into();

        let mut counter = Counter(0);
        schema.accept(&mut counter);

        // object + union + number + nan + array + enum
        assert_eq!(counter.0, 6);
    }
}
