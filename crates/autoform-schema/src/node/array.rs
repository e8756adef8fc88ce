use crate::prelude::*;

///
/// ArrayNode
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ArrayNode {
    pub element: Box<SchemaNode>,
}

impl ArrayNode {
    #[must_use]
    pub fn new(element: impl Into<SchemaNode>) -> Self {
        Self {
            element: Box::new(element.into()),
        }
    }
}

impl ValidateNode for ArrayNode {}

impl From<ArrayNode> for SchemaNode {
    fn from(node: ArrayNode) -> Self {
        Self::Array(node)
    }
}
