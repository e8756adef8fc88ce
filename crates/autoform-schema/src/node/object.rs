use crate::{prelude::*, validate::naming};
use std::collections::BTreeSet;

///
/// FieldList
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct FieldList {
    pub fields: Vec<ObjectField>,
}

impl FieldList {
    // get
    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&ObjectField> {
        self.fields.iter().find(|f| f.ident == ident)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ObjectField> {
        self.fields.iter()
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a ObjectField;
    type IntoIter = std::slice::Iter<'a, ObjectField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

///
/// ObjectField
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ObjectField {
    pub ident: String,
    pub value: SchemaNode,
}

///
/// ObjectNode
/// Named fields in declared order; insertion order is render order.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ObjectNode {
    pub shape: FieldList,
}

impl ObjectNode {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a named field.
    #[must_use]
    pub fn field(mut self, ident: impl Into<String>, value: impl Into<SchemaNode>) -> Self {
        self.shape.fields.push(ObjectField {
            ident: ident.into(),
            value: value.into(),
        });
        self
    }
}

impl ValidateNode for ObjectNode {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();
        let mut seen = BTreeSet::new();

        for field in &self.shape {
            if let Err(msg) = naming::validate_ident(&field.ident) {
                errs.add(msg);
            }
            if !seen.insert(field.ident.as_str()) {
                err!(errs, "duplicate field ident '{}'", field.ident);
            }
        }

        errs.result()
    }
}

impl From<ObjectNode> for SchemaNode {
    fn from(node: ObjectNode) -> Self {
        Self::Object(node)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_keep_declared_order() {
        let node = ObjectNode::new()
            .field("first", SchemaNode::string())
            .field("last", SchemaNode::string());
        let idents: Vec<_> = node.shape.iter().map(|f| f.ident.as_str()).collect();
        assert_eq!(idents, ["first", "last"]);
        assert!(node.shape.get("last").is_some());
        assert!(node.shape.get("middle").is_none());
    }

    #[test]
    fn duplicate_idents_are_rejected() {
        let errs = ObjectNode::new()
            .field("a", SchemaNode::string())
            .field("a", SchemaNode::number())
            .validate()
            .unwrap_err();
        assert_eq!(errs.messages_at(""), ["duplicate field ident 'a'"]);
    }

    #[test]
    fn dotted_idents_are_rejected() {
        let errs = ObjectNode::new()
            .field("a.b", SchemaNode::string())
            .validate()
            .unwrap_err();
        assert_eq!(errs.len(), 1);
    }
}
