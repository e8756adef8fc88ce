//! AutoForm: schema-driven form planning.
//!
//! Describe a form's data shape once, as a validation schema, and get a
//! renderer-agnostic widget plan back. The schema is the single source
//! of truth: widget choice, required-ness, and option lists are all
//! derived from shape, never stored separately.
//!
//! ```
//! use autoform::prelude::*;
//!
//! let schema = ObjectNode::new()
//!     .field("email", StringNode::new().min(1).email())
//!     .field("name", StringNode::new().min(1));
//!
//! let plan = plan_form(&schema, &Overrides::new()).unwrap();
//! assert_eq!(plan.fields.len(), 2);
//! ```

pub mod error;

pub use autoform_core as plan;
pub use autoform_schema as schema;

pub use error::{Error, ErrorKind};

use autoform_core::form::{FormPlan, Overrides, build_form};
use autoform_schema::{node::ObjectNode, validate::validate_object};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{Error, ErrorKind, plan_form};
    pub use autoform_core::prelude::*;
}

/// Validate a schema, then plan every field of it. The one-call entry
/// point: a plan is only produced for a schema that passed validation.
pub fn plan_form(schema: &ObjectNode, overrides: &Overrides) -> Result<FormPlan, Error> {
    validate_object(schema).map_err(autoform_schema::Error::from)?;
    let plan = build_form(schema, overrides).map_err(autoform_core::Error::from)?;

    Ok(plan)
}
