use crate::MAX_FIELDSET_DEPTH;
use thiserror::Error as ThisError;

///
/// ResolveError
/// Classification failures are fatal to the field: guessing a wrong
/// widget is worse than failing loudly, so there is no fallback.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ResolveError {
    #[error("field '{name}': nesting exceeds {MAX_FIELDSET_DEPTH} fieldset levels")]
    DepthExceeded { name: String },

    #[error("field '{name}': unsupported schema shape {shape}")]
    UnsupportedShape { name: String, shape: String },
}

///
/// FormError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum FormError {
    #[error("override target(s) not present in schema: {}", names.join(", "))]
    MissingOverrideTarget { names: Vec<String> },

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
