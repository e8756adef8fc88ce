use crate::prelude::*;

///
/// UnionNode
/// Binary union. Branch order is part of the contract: recognized
/// compositions (number-or-NaN, enum-array-or-literal) place the core
/// type first and the sentinel second.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct UnionNode {
    pub first: Box<SchemaNode>,
    pub second: Box<SchemaNode>,
}

impl UnionNode {
    #[must_use]
    pub fn new(first: impl Into<SchemaNode>, second: impl Into<SchemaNode>) -> Self {
        Self {
            first: Box::new(first.into()),
            second: Box::new(second.into()),
        }
    }
}

impl ValidateNode for UnionNode {}

impl From<UnionNode> for SchemaNode {
    fn from(node: UnionNode) -> Self {
        Self::Union(node)
    }
}
