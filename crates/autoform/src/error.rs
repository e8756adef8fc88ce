use autoform_core::error::FormError;
use derive_more::Display;
use thiserror::Error as ThisError;

///
/// Error
/// Flattened public error: one kind tag plus a rendered message, so
/// callers never match on the internal crates' error types.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

///
/// ErrorKind
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[remain::sorted]
pub enum ErrorKind {
    Form,
    Resolve,
    Schema,
}

impl From<autoform_schema::Error> for Error {
    fn from(err: autoform_schema::Error) -> Self {
        Self {
            kind: ErrorKind::Schema,
            message: err.to_string(),
        }
    }
}

impl From<autoform_core::Error> for Error {
    fn from(err: autoform_core::Error) -> Self {
        let kind = match &err {
            autoform_core::Error::Form(FormError::Resolve(_))
            | autoform_core::Error::Resolve(_) => ErrorKind::Resolve,
            autoform_core::Error::Form(_) => ErrorKind::Form,
        };

        Self {
            kind,
            message: err.to_string(),
        }
    }
}

///
/// TESTS
///
