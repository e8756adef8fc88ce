use crate::prelude::*;

///
/// OptionalNode
/// Wrapper expressing "value may be absent". Optionality is composed,
/// never stored as a boolean on the wrapped node.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct OptionalNode {
    pub inner: Box<SchemaNode>,
}

impl OptionalNode {
    #[must_use]
    pub fn new(inner: impl Into<SchemaNode>) -> Self {
        Self {
            inner: Box::new(inner.into()),
        }
    }
}

impl ValidateNode for OptionalNode {}

impl From<OptionalNode> for SchemaNode {
    fn from(node: OptionalNode) -> Self {
        Self::Optional(node)
    }
}

///
/// NullableNode
/// Wrapper expressing "value may be null".
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct NullableNode {
    pub inner: Box<SchemaNode>,
}

impl NullableNode {
    #[must_use]
    pub fn new(inner: impl Into<SchemaNode>) -> Self {
        Self {
            inner: Box::new(inner.into()),
        }
    }
}

impl ValidateNode for NullableNode {}

impl From<NullableNode> for SchemaNode {
    fn from(node: NullableNode) -> Self {
        Self::Nullable(node)
    }
}
