//! Route-keyed error aggregation for schema validation.

use serde::Serialize;
use std::{collections::BTreeMap, fmt};

/// Insert a formatted message into an [`ErrorTree`].
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add(format!($($arg)*))
    };
}

///
/// ErrorTree
/// Validation messages keyed by the dotted route they were found at.
/// The empty route holds tree-level messages.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ErrorTree {
    entries: BTreeMap<String, Vec<String>>,
}

impl ErrorTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of messages across all routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Add a message at the empty route.
    pub fn add(&mut self, message: impl Into<String>) {
        self.add_at("", message);
    }

    /// Add a message at the given route.
    pub fn add_at(&mut self, route: impl Into<String>, message: impl Into<String>) {
        self.entries
            .entry(route.into())
            .or_default()
            .push(message.into());
    }

    /// Fold another tree in, prefixing its routes.
    pub fn merge_at(&mut self, prefix: &str, other: Self) {
        for (route, messages) in other.entries {
            let key = join_routes(prefix, &route);
            self.entries.entry(key).or_default().extend(messages);
        }
    }

    #[must_use]
    pub fn messages_at(&self, route: &str) -> &[String] {
        self.entries.get(route).map_or(&[], Vec::as_slice)
    }

    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (route, messages) in &self.entries {
            for message in messages {
                if !first {
                    writeln!(f)?;
                }
                first = false;
                if route.is_empty() {
                    write!(f, "{message}")?;
                } else {
                    write!(f, "{route}: {message}")?;
                }
            }
        }
        Ok(())
    }
}

impl std::error::Error for ErrorTree {}

fn join_routes(prefix: &str, route: &str) -> String {
    match (prefix.is_empty(), route.is_empty()) {
        (true, _) => route.to_string(),
        (_, true) => prefix.to_string(),
        _ => format!("{prefix}.{route}"),
    }
}

///
/// TESTS
///
