use crate::prelude::*;
use derive_more::Display;

///
/// LiteralNode
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct LiteralNode {
    pub value: LiteralValue,
}

impl LiteralNode {
    #[must_use]
    pub fn new(value: impl Into<LiteralValue>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl ValidateNode for LiteralNode {}

impl From<LiteralNode> for SchemaNode {
    fn from(node: LiteralNode) -> Self {
        Self::Literal(node)
    }
}

///
/// LiteralValue
///

#[derive(Clone, Debug, Display, Eq, PartialEq, Serialize)]
#[serde(untagged)]
#[remain::sorted]
pub enum LiteralValue {
    #[display("{_0}")]
    Bool(bool),
    #[display("{_0}")]
    Int(i64),
    #[display("\"{_0}\"")]
    Str(String),
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}
