//! Plan-side runtime: widget plans, the schema resolver, per-field
//! overrides, form building, tracing, and JSON blueprints.

pub mod blueprint;
pub mod error;
pub mod form;
pub mod overrides;
pub mod resolve;
pub mod trace;
pub mod widget;

/// Maximum fieldset recursion depth accepted by the resolver.
///
/// Stricter than schema validation's overall nesting limit: validation
/// accepts any structurally sound tree, while resolution also bounds
/// how deep rendered fieldsets may nest. A valid schema that exceeds
/// this fails resolution with [`ResolveError::DepthExceeded`], like
/// any other unplannable shape.
pub const MAX_FIELDSET_DEPTH: usize = 16;

use crate::error::{FormError, ResolveError};
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        blueprint::{RenderOptions, default_label, form_blueprint},
        error::{FormError, ResolveError},
        form::{FormBuilder, FormPlan, Overrides, build_form},
        overrides::{Override, resolve_override},
        resolve::resolve,
        trace::{PlanTraceEvent, PlanTraceSink},
        widget::{FieldPlan, FieldProps, InputWidget, RenderFn, WidgetPlan},
    };
    pub use autoform_schema::prelude::*;
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
