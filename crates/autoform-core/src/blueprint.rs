//! JSON blueprints for form plans.
//!
//! A blueprint is the renderer-facing view of a plan: plain
//! `serde_json::Value` trees a UI layer can walk without linking this
//! crate's types.

use crate::{
    form::FormPlan,
    widget::{FieldPlan, FieldProps, WidgetPlan},
};
use convert_case::{Case, Casing};
use serde_json::{Value, json};
use std::{fmt, sync::Arc};

/// Maps a dot-joined field name to a human-facing label.
pub type Labeler = Arc<dyn Fn(&str) -> String + Send + Sync>;

///
/// RenderOptions
/// Presentation knobs shared by every field in a blueprint.
///

#[derive(Clone)]
pub struct RenderOptions {
    pub labeler: Labeler,
    pub field_class: String,
    pub error_class: String,
    pub wrapper_class: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            labeler: Arc::new(|name| default_label(name)),
            field_class: "form-field".to_string(),
            error_class: "form-error".to_string(),
            wrapper_class: "form-group".to_string(),
        }
    }
}

impl fmt::Debug for RenderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderOptions")
            .field("field_class", &self.field_class)
            .field("error_class", &self.error_class)
            .field("wrapper_class", &self.wrapper_class)
            .finish_non_exhaustive()
    }
}

/// Title-case the last path segment: "home.street_name" -> "Street Name".
#[must_use]
pub fn default_label(name: &str) -> String {
    let leaf = name.rsplit('.').next().unwrap_or(name);

    leaf.to_case(Case::Title)
}

/// Render a whole plan as a JSON blueprint, field order preserved.
#[must_use]
pub fn form_blueprint(plan: &FormPlan, opts: &RenderOptions) -> Value {
    let fields: Vec<Value> = plan
        .fields
        .iter()
        .map(|field| field_blueprint(field, opts))
        .collect();

    json!({
        "class": opts.wrapper_class,
        "fields": fields,
    })
}

// Fieldsets get no error slot; errors belong to leaf inputs.
fn field_blueprint(field: &FieldPlan, opts: &RenderOptions) -> Value {
    let label = (opts.labeler)(&field.name);
    let mut blueprint = json!({
        "name": field.name,
        "label": label,
        "class": opts.field_class,
        "widget": widget_blueprint(field, &label, opts),
    });

    if !matches!(field.plan, WidgetPlan::Fieldset { .. }) {
        blueprint["error"] = json!({ "class": opts.error_class });
    }

    blueprint
}

fn widget_blueprint(field: &FieldPlan, label: &str, opts: &RenderOptions) -> Value {
    match &field.plan {
        WidgetPlan::Input { widget, required } => {
            if let Some(values) = widget.values() {
                let options: Vec<Value> = values
                    .iter()
                    .map(|value| {
                        json!({
                            "value": value,
                            "label": (opts.labeler)(value),
                        })
                    })
                    .collect();

                json!({
                    "component": "group",
                    "type": widget.html_type(),
                    "required": required,
                    "options": options,
                })
            } else {
                json!({
                    "component": "input",
                    "type": widget.html_type(),
                    "required": required,
                })
            }
        }
        WidgetPlan::Fieldset { fields } => {
            let children: Vec<Value> = fields
                .iter()
                .map(|child| field_blueprint(child, opts))
                .collect();

            json!({
                "component": "fieldset",
                "fields": children,
            })
        }
        WidgetPlan::Html { input_type } => json!({
            "component": "input",
            "type": input_type,
        }),
        WidgetPlan::Custom { render } => render.render(&FieldProps {
            name: field.name.clone(),
            label: label.to_string(),
        }),
    }
}

///
/// TESTS
///
