use std::fmt;

use thiserror::Error;

/// Canonical result for the boxing crates.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required function or callback argument was absent. Carries the
    /// parameter name.
    #[error("argument `{0}` must not be absent")]
    Argument(&'static str),

    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    // Produced by stream subscription functions; the rx crate routes these
    // into the observer instead of returning them to the subscriber's caller.
    #[error("subscription failed: {0}")]
    Subscription(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub fn subscription(reason: impl fmt::Display) -> Self {
        Error::Subscription(reason.to_string())
    }

    /// Name of the offending parameter for argument errors.
    pub fn argument_name(&self) -> Option<&'static str> {
        match self {
            Error::Argument(name) => Some(*name),
            _ => None,
        }
    }
}

/// Unwrap an optional argument or fail with [`Error::Argument`] naming it.
pub fn require<A>(arg: Option<A>, name: &'static str) -> Result<A> {
    arg.ok_or(Error::Argument(name))
}
