//! Top-level form planning.

use crate::{
    error::FormError,
    overrides::{Override, resolve_override},
    resolve::resolve,
    trace::{PlanTraceEvent, PlanTraceSink},
    widget::{FieldPlan, WidgetPlan},
};
use autoform_schema::node::ObjectNode;
use std::collections::BTreeMap;

/// Per-field override directives keyed by top-level field ident.
pub type Overrides = BTreeMap<String, Override>;

///
/// FormPlan
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FormPlan {
    pub fields: Vec<FieldPlan>,
}

impl FormPlan {
    // get
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldPlan> {
        self.fields.iter().find(|f| f.name == name)
    }
}

///
/// FormBuilder
///

#[derive(Default)]
pub struct FormBuilder<'a> {
    overrides: Overrides,
    trace: Option<&'a dyn PlanTraceSink>,
}

impl<'a> FormBuilder<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace schema resolution for the named top-level field.
    #[must_use]
    pub fn override_field(
        mut self,
        name: impl Into<String>,
        directive: impl Into<Override>,
    ) -> Self {
        self.overrides.insert(name.into(), directive.into());
        self
    }

    #[must_use]
    pub fn overrides(mut self, overrides: Overrides) -> Self {
        self.overrides.extend(overrides);
        self
    }

    #[must_use]
    pub fn trace(mut self, sink: &'a dyn PlanTraceSink) -> Self {
        self.trace = Some(sink);
        self
    }

    /// Plan every field of the schema's top-level shape, in declared
    /// order. Overridden fields skip schema resolution entirely.
    pub fn build(&self, schema: &ObjectNode) -> Result<FormPlan, FormError> {
        self.check_override_targets(schema)?;

        let mut fields = Vec::with_capacity(schema.shape.len());
        for field in &schema.shape {
            let plan = if let Some(directive) = self.overrides.get(&field.ident) {
                if let Some(sink) = self.trace {
                    sink.on_event(PlanTraceEvent::OverrideApplied {
                        name: field.ident.clone(),
                        kind: directive.kind(),
                    });
                }
                resolve_override(directive)
            } else {
                let plan = resolve(&field.value, &field.ident)?;
                self.emit_resolved(&field.ident, &plan);
                plan
            };

            fields.push(FieldPlan {
                name: field.ident.clone(),
                plan,
            });
        }

        Ok(FormPlan { fields })
    }

    // An override naming an absent field would plan an orphaned input;
    // reject all unknown targets at once, in name order.
    fn check_override_targets(&self, schema: &ObjectNode) -> Result<(), FormError> {
        let unknown: Vec<String> = self
            .overrides
            .keys()
            .filter(|name| schema.shape.get(name).is_none())
            .cloned()
            .collect();

        if unknown.is_empty() {
            Ok(())
        } else {
            Err(FormError::MissingOverrideTarget { names: unknown })
        }
    }

    // Report every resolved leaf; fieldsets report their size and recurse.
    fn emit_resolved(&self, name: &str, plan: &WidgetPlan) {
        let Some(sink) = self.trace else { return };

        match plan {
            WidgetPlan::Fieldset { fields } => {
                sink.on_event(PlanTraceEvent::FieldsetEntered {
                    name: name.to_string(),
                    fields: fields.len(),
                });
                for field in fields {
                    self.emit_resolved(&field.name, &field.plan);
                }
            }
            _ => sink.on_event(PlanTraceEvent::FieldResolved {
                name: name.to_string(),
                component: plan.component(),
                required: plan.required(),
            }),
        }
    }
}

/// Build a form plan with no tracing.
pub fn build_form(schema: &ObjectNode, overrides: &Overrides) -> Result<FormPlan, FormError> {
    let mut builder = FormBuilder::new();
    builder.overrides = overrides.clone();
    builder.build(schema)
}

///
/// TESTS
///
