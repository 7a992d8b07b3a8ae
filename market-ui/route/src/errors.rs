use thiserror::Error;

/// Reasons a legacy route href cannot be turned into a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteParseError {
    #[error("route path is empty")]
    EmptyPath,
    #[error("legacy route has no query component")]
    MissingQuery,
    #[error("legacy route query has no key/value pairs")]
    EmptyQuery,
}
