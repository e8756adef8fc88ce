use crate::prelude::*;
use std::collections::BTreeSet;

///
/// EnumNode
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct EnumNode {
    pub values: Vec<String>,
}

impl EnumNode {
    #[must_use]
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

impl ValidateNode for EnumNode {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.values.is_empty() {
            err!(errs, "enum has no values");
        }

        let mut seen = BTreeSet::new();
        for value in &self.values {
            if value.is_empty() {
                err!(errs, "enum value is empty");
            }
            if !seen.insert(value.as_str()) {
                err!(errs, "duplicate enum value '{value}'");
            }
        }

        errs.result()
    }
}

impl From<EnumNode> for SchemaNode {
    fn from(node: EnumNode) -> Self {
        Self::Enum(node)
    }
}

///
/// TESTS
///
