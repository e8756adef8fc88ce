//! Schema-to-widget resolution.
//!
//! The resolver is a pure function of a schema node and a field name.
//! Optionality is never a property read off a node; it is derived from
//! the wrapper composition (Optional/Nullable/sentinel-union) around
//! the core type, so rendering code never re-derives it.

use crate::{
    MAX_FIELDSET_DEPTH,
    error::ResolveError,
    widget::{FieldPlan, InputWidget, WidgetPlan},
};
use autoform_schema::node::{ObjectNode, SchemaNode, StringCheck, StringNode, UnionNode};

/// Resolve a schema node into a widget plan for the named field.
///
/// Unsupported shapes fail loudly; no fallback widget is guessed.
pub fn resolve(node: &SchemaNode, name: &str) -> Result<WidgetPlan, ResolveError> {
    resolve_at(node, name, 0)
}

// Dispatch order matters: several shapes satisfy more than one weaker
// predicate, so the first matching classification wins.
fn resolve_at(node: &SchemaNode, name: &str, depth: usize) -> Result<WidgetPlan, ResolveError> {
    match node {
        SchemaNode::String(string) => Ok(input(string_widget(string), true)),

        SchemaNode::Date => Ok(input(InputWidget::Date, true)),

        SchemaNode::Number => Ok(input(InputWidget::Number, true)),

        SchemaNode::Enum(en) => Ok(input(
            InputWidget::RadioGroup {
                values: en.values.clone(),
            },
            true,
        )),

        SchemaNode::Nullable(wrap) => match wrap.inner.as_ref() {
            SchemaNode::Date => Ok(input(InputWidget::Date, false)),
            SchemaNode::Enum(en) => Ok(input(
                InputWidget::RadioGroup {
                    values: en.values.clone(),
                },
                false,
            )),
            _ => Err(unsupported(node, name)),
        },

        SchemaNode::Optional(wrap) => match wrap.inner.as_ref() {
            SchemaNode::Number => Ok(input(InputWidget::Number, false)),
            _ => Err(unsupported(node, name)),
        },

        SchemaNode::Union(union) => {
            if is_nan_union(union) {
                Ok(input(InputWidget::Number, false))
            } else if let Some(values) = enum_array_literal_values(union) {
                Ok(input(InputWidget::CheckboxGroup { values }, false))
            } else {
                Err(unsupported(node, name))
            }
        }

        SchemaNode::Array(array) => match array.element.as_ref() {
            SchemaNode::Enum(en) => Ok(input(
                InputWidget::CheckboxGroup {
                    values: en.values.clone(),
                },
                true,
            )),
            _ => Err(unsupported(node, name)),
        },

        SchemaNode::Object(object) => fieldset(object, name, depth),

        SchemaNode::Literal(_) | SchemaNode::Nan => Err(unsupported(node, name)),
    }
}

const fn input(widget: InputWidget, required: bool) -> WidgetPlan {
    WidgetPlan::Input { widget, required }
}

// email wins over url when both checks are present
fn string_widget(node: &StringNode) -> InputWidget {
    if node.contains_check(&StringCheck::Email) {
        InputWidget::Email
    } else if node.contains_check(&StringCheck::Url) {
        InputWidget::Url
    } else {
        InputWidget::Text
    }
}

/// Number-or-NaN union: the calling form layer parses an empty numeric
/// input as NaN rather than undefined, so the pair reads as "optional
/// numeric". Branch order is a contract: numeric first, NaN second.
fn is_nan_union(union: &UnionNode) -> bool {
    let first_numeric = matches!(union.first.as_ref(), SchemaNode::Number)
        || matches!(
            union.first.as_ref(),
            SchemaNode::Optional(wrap) if matches!(wrap.inner.as_ref(), SchemaNode::Number)
        );

    first_numeric && matches!(union.second.as_ref(), SchemaNode::Nan)
}

/// Enum-array-or-literal union: the literal second branch (e.g. `false`)
/// stands for "none selected", making the group optional.
fn enum_array_literal_values(union: &UnionNode) -> Option<Vec<String>> {
    let SchemaNode::Array(array) = union.first.as_ref() else {
        return None;
    };
    let SchemaNode::Enum(en) = array.element.as_ref() else {
        return None;
    };

    matches!(union.second.as_ref(), SchemaNode::Literal(_)).then(|| en.values.clone())
}

fn fieldset(object: &ObjectNode, name: &str, depth: usize) -> Result<WidgetPlan, ResolveError> {
    if depth >= MAX_FIELDSET_DEPTH {
        return Err(ResolveError::DepthExceeded {
            name: name.to_string(),
        });
    }

    let mut fields = Vec::with_capacity(object.shape.len());
    for field in &object.shape {
        let child = format!("{name}.{}", field.ident);
        let plan = resolve_at(&field.value, &child, depth + 1)?;
        fields.push(FieldPlan { name: child, plan });
    }

    Ok(WidgetPlan::Fieldset { fields })
}

fn unsupported(node: &SchemaNode, name: &str) -> ResolveError {
    ResolveError::UnsupportedShape {
        name: name.to_string(),
        shape: node.describe(),
    }
}

///
/// TESTS
///
