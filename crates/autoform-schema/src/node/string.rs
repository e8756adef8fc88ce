use crate::prelude::*;
use derive_more::Display;
use std::mem::{Discriminant, discriminant};

///
/// StringNode
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct StringNode {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checks: Vec<StringCheck>,
}

impl StringNode {
    #[must_use]
    pub const fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Attach a refinement check. Order is irrelevant for resolution.
    #[must_use]
    pub fn check(mut self, check: StringCheck) -> Self {
        self.checks.push(check);
        self
    }

    #[must_use]
    pub fn email(self) -> Self {
        self.check(StringCheck::Email)
    }

    #[must_use]
    pub fn url(self) -> Self {
        self.check(StringCheck::Url)
    }

    #[must_use]
    pub fn ip(self) -> Self {
        self.check(StringCheck::Ip)
    }

    #[must_use]
    pub fn uuid(self) -> Self {
        self.check(StringCheck::Uuid)
    }

    #[must_use]
    pub fn min(self, len: usize) -> Self {
        self.check(StringCheck::Min(len))
    }

    #[must_use]
    pub fn max(self, len: usize) -> Self {
        self.check(StringCheck::Max(len))
    }

    /// True when any attached check has the given kind, regardless of
    /// position or payload.
    #[must_use]
    pub fn contains_check(&self, kind: &StringCheck) -> bool {
        let wanted = discriminant(kind);
        self.checks.iter().any(|check| discriminant(check) == wanted)
    }
}

impl ValidateNode for StringNode {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();
        let mut seen: Vec<Discriminant<StringCheck>> = Vec::new();

        for check in &self.checks {
            let d = discriminant(check);
            if seen.contains(&d) {
                err!(errs, "duplicate string check '{check}'");
            } else {
                seen.push(d);
            }
        }

        errs.result()
    }
}

impl From<StringNode> for SchemaNode {
    fn from(node: StringNode) -> Self {
        Self::String(node)
    }
}

///
/// StringCheck
///

#[derive(Clone, Debug, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum StringCheck {
    Email,
    Ip,
    #[display("Max({_0})")]
    Max(usize),
    #[display("Min({_0})")]
    Min(usize),
    Url,
    Uuid,
}

///
/// TESTS
///
