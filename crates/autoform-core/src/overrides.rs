//! Per-field override resolution.

use crate::widget::{RenderFn, WidgetPlan};

///
/// Override
/// Caller-supplied directive that replaces schema-derived resolution
/// for one named field. Takes precedence unconditionally; the schema
/// resolver is never consulted for an overridden field.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Override {
    /// Free-form HTML input type ("password", "range", "select", ...).
    InputType(String),
    /// Fully custom render function.
    Render(RenderFn),
}

impl Override {
    /// Stable directive tag used by traces.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InputType(_) => "input-type",
            Self::Render(_) => "render",
        }
    }
}

impl From<&str> for Override {
    fn from(input_type: &str) -> Self {
        Self::InputType(input_type.to_string())
    }
}

impl From<String> for Override {
    fn from(input_type: String) -> Self {
        Self::InputType(input_type)
    }
}

impl From<RenderFn> for Override {
    fn from(render: RenderFn) -> Self {
        Self::Render(render)
    }
}

/// Resolve an override directive into a plan. No schema introspection
/// happens here: required-ness and validation stay with the caller.
#[must_use]
pub fn resolve_override(directive: &Override) -> WidgetPlan {
    match directive {
        Override::InputType(input_type) => WidgetPlan::Html {
            input_type: input_type.clone(),
        },
        Override::Render(render) => WidgetPlan::Custom {
            render: render.clone(),
        },
    }
}

///
/// TESTS
///
