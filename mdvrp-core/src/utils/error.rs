#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use crate::models::problem::NodeId;
use std::fmt;

/// A basic error type which, essentially, a wrapper on String type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl fmt::Display for GenericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(value: std::io::Error) -> Self {
        Self(value.to_string())
    }
}

impl From<RoutingError> for GenericError {
    fn from(value: RoutingError) -> Self {
        Self(value.to_string())
    }
}

/// A fatal error which aborts routing for the tick: no output is produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoutingError {
    /// No depot is present when assignment runs.
    Configuration(String),
    /// Snapshot has missing required fields, duplicate ids or invalid values.
    MalformedSnapshot(String),
}

impl RoutingError {
    /// Returns a short error code.
    pub fn code(&self) -> &'static str {
        match self {
            RoutingError::Configuration(_) => "E0001",
            RoutingError::MalformedSnapshot(_) => "E0002",
        }
    }
}

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutingError::Configuration(cause) => write!(f, "{}, configuration error: '{cause}'", self.code()),
            RoutingError::MalformedSnapshot(cause) => write!(f, "{}, malformed snapshot: '{cause}'", self.code()),
        }
    }
}

impl std::error::Error for RoutingError {}

/// A non-fatal issue detected while routing: the pipeline proceeds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoutingWarning {
    /// A depot has no assigned shops, only a depot-only closing leg is emitted for it.
    DegenerateCluster {
        /// A depot id.
        depot_id: NodeId,
    },
}

impl fmt::Display for RoutingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutingWarning::DegenerateCluster { depot_id } => {
                write!(f, "degenerate cluster: depot '{depot_id}' has no assigned shops")
            }
        }
    }
}
