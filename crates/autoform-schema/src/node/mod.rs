pub mod array;
pub mod r#enum;
pub mod literal;
pub mod object;
pub mod string;
pub mod union;
pub mod wrap;

pub use self::{
    array::ArrayNode,
    literal::{LiteralNode, LiteralValue},
    object::{FieldList, ObjectField, ObjectNode},
    r#enum::EnumNode,
    string::{StringCheck, StringNode},
    union::UnionNode,
    wrap::{NullableNode, OptionalNode},
};

use crate::error::ErrorTree;
use derive_more::Display;
use serde::Serialize;

///
/// NodeKind
/// Discriminant tag identifying which primitive shape a node represents.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum NodeKind {
    Array,
    Date,
    Enum,
    Literal,
    Nan,
    Nullable,
    Number,
    Object,
    Optional,
    String,
    Union,
}

///
/// ValidateNode
///

pub trait ValidateNode {
    fn validate(&self) -> Result<(), ErrorTree> {
        Ok(())
    }
}

///
/// SchemaNode
/// Immutable description of one validation rule within a composed
/// schema tree. Classification always goes through the discriminant,
/// never structural guessing.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind")]
#[remain::sorted]
pub enum SchemaNode {
    Array(ArrayNode),
    Date,
    Enum(EnumNode),
    Literal(LiteralNode),
    Nan,
    Nullable(NullableNode),
    Number,
    Object(ObjectNode),
    Optional(OptionalNode),
    String(StringNode),
    Union(UnionNode),
}

impl SchemaNode {
    /// Bare string with no refinement checks.
    #[must_use]
    pub fn string() -> Self {
        StringNode::new().into()
    }

    #[must_use]
    pub const fn number() -> Self {
        Self::Number
    }

    #[must_use]
    pub const fn date() -> Self {
        Self::Date
    }

    /// The second branch of a number-or-NaN union.
    #[must_use]
    pub const fn nan() -> Self {
        Self::Nan
    }

    #[must_use]
    pub fn literal(value: impl Into<LiteralValue>) -> Self {
        LiteralNode::new(value).into()
    }

    /// Closed set of string values, in declared order.
    #[must_use]
    pub fn enumeration<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        EnumNode::new(values).into()
    }

    //
    // wrapper combinators
    //

    #[must_use]
    pub fn optional(self) -> Self {
        Self::Optional(OptionalNode::new(self))
    }

    #[must_use]
    pub fn nullable(self) -> Self {
        Self::Nullable(NullableNode::new(self))
    }

    #[must_use]
    pub fn array(self) -> Self {
        Self::Array(ArrayNode::new(self))
    }

    /// Binary union; branch order is preserved and significant.
    #[must_use]
    pub fn or(self, second: impl Into<Self>) -> Self {
        Self::Union(UnionNode::new(self, second))
    }

    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Array(_) => NodeKind::Array,
            Self::Date => NodeKind::Date,
            Self::Enum(_) => NodeKind::Enum,
            Self::Literal(_) => NodeKind::Literal,
            Self::Nan => NodeKind::Nan,
            Self::Nullable(_) => NodeKind::Nullable,
            Self::Number => NodeKind::Number,
            Self::Object(_) => NodeKind::Object,
            Self::Optional(_) => NodeKind::Optional,
            Self::String(_) => NodeKind::String,
            Self::Union(_) => NodeKind::Union,
        }
    }

    /// Render the composed shape for diagnostics, e.g. `Array<String>`.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Array(node) => format!("Array<{}>", node.element.describe()),
            Self::Nullable(node) => format!("Nullable<{}>", node.inner.describe()),
            Self::Optional(node) => format!("Optional<{}>", node.inner.describe()),
            Self::Union(node) => format!(
                "Union<{}, {}>",
                node.first.describe(),
                node.second.describe()
            ),
            other => other.kind().to_string(),
        }
    }

    // Local (single-node) invariants; tree walks live in `validate`.
    pub(crate) fn validate_local(&self) -> Result<(), ErrorTree> {
        match self {
            Self::Array(node) => node.validate(),
            Self::Enum(node) => node.validate(),
            Self::Literal(node) => node.validate(),
            Self::Nullable(node) => node.validate(),
            Self::Object(node) => node.validate(),
            Self::Optional(node) => node.validate(),
            Self::String(node) => node.validate(),
            Self::Union(node) => node.validate(),
            Self::Date | Self::Nan | Self::Number => Ok(()),
        }
    }
}

///
/// TESTS
///
