//! Plan data model.

use serde::Serialize;
use serde_json::Value;
use std::{fmt, sync::Arc};

///
/// InputWidget
/// Leaf input control derived from a schema shape.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum InputWidget {
    CheckboxGroup { values: Vec<String> },
    Date,
    Email,
    Number,
    RadioGroup { values: Vec<String> },
    Text,
    Url,
}

impl InputWidget {
    /// HTML input type rendered for this widget.
    #[must_use]
    pub const fn html_type(&self) -> &'static str {
        match self {
            Self::CheckboxGroup { .. } => "checkbox",
            Self::Date => "date",
            Self::Email => "email",
            Self::Number => "number",
            Self::RadioGroup { .. } => "radio",
            Self::Text => "text",
            Self::Url => "url",
        }
    }

    /// Option values for grouped widgets; `None` for single inputs.
    #[must_use]
    pub fn values(&self) -> Option<&[String]> {
        match self {
            Self::CheckboxGroup { values } | Self::RadioGroup { values } => Some(values),
            _ => None,
        }
    }
}

///
/// FieldProps
/// Field identity handed to any rendered input, resolved or custom,
/// so the two stay interchangeable at the render boundary.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FieldProps {
    pub name: String,
    pub label: String,
}

///
/// RenderFn
/// Caller-supplied render function producing a renderer-agnostic value.
/// Compared by identity: two plans are equal when they share a function.
///

#[derive(Clone)]
pub struct RenderFn(Arc<dyn Fn(&FieldProps) -> Value + Send + Sync>);

impl RenderFn {
    pub fn new(render: impl Fn(&FieldProps) -> Value + Send + Sync + 'static) -> Self {
        Self(Arc::new(render))
    }

    #[must_use]
    pub fn render(&self, props: &FieldProps) -> Value {
        (self.0)(props)
    }
}

impl fmt::Debug for RenderFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RenderFn")
    }
}

impl PartialEq for RenderFn {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for RenderFn {}

///
/// WidgetPlan
/// Resolved, renderer-agnostic description of what a field renders as.
/// Computed fresh per pass; never cached or mutated.
///

#[derive(Clone, Debug, Eq, PartialEq)]
#[remain::sorted]
pub enum WidgetPlan {
    /// Caller-supplied render function; validation stays with the caller.
    Custom { render: RenderFn },
    /// Nested group of child fields. Required-ness is leaf-only.
    Fieldset { fields: Vec<FieldPlan> },
    /// Free-form HTML input type supplied by an override.
    Html { input_type: String },
    /// Schema-derived leaf input.
    Input { widget: InputWidget, required: bool },
}

impl WidgetPlan {
    /// Stable component tag used by traces and blueprints.
    #[must_use]
    pub const fn component(&self) -> &'static str {
        match self {
            Self::Custom { .. } => "custom",
            Self::Fieldset { .. } => "fieldset",
            Self::Html { .. } => "html",
            Self::Input { widget, .. } => widget.html_type(),
        }
    }

    /// Required flag for leaf inputs; fieldsets and overrides have none.
    #[must_use]
    pub const fn required(&self) -> Option<bool> {
        match self {
            Self::Input { required, .. } => Some(*required),
            _ => None,
        }
    }
}

///
/// FieldPlan
/// A named node in a form plan; names are dot-joined paths.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldPlan {
    pub name: String,
    pub plan: WidgetPlan,
}

///
/// TESTS
///
