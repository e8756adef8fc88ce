pub mod error;
pub mod node;
pub mod validate;
pub mod visit;

/// Maximum length for object field identifiers.
pub const MAX_FIELD_NAME_LEN: usize = 64;

/// Maximum nesting depth accepted by schema validation.
///
/// Owned trees cannot form cycles, but a runaway builder loop can still
/// produce a tree deep enough to overflow the resolver's stack; fail
/// during validation instead.
pub const MAX_SCHEMA_DEPTH: usize = 64;

use crate::error::ErrorTree;
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        err,
        error::ErrorTree,
        node::*,
        visit::{Segment, Visitor},
    };
    pub use serde::Serialize;
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Validate(#[from] ErrorTree),
}
