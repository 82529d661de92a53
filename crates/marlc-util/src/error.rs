//! Positioned fatal errors.
//!
//! A [`StaticError`] is produced when source text cannot be tokenized or
//! parsed. It renders as `name:line:column message`, which is the exact
//! format surfaced to the end user; callers must not rewrap the text.

use thiserror::Error;

use crate::span::Location;

/// A fatal front-end error anchored to a source position.
///
/// # Example
///
/// ```
/// use marlc_util::{Location, StaticError};
///
/// let err = StaticError::new("config.marl", Location::new(1, 3), "Unterminated String");
/// assert_eq!(err.to_string(), "config.marl:1:3 Unterminated String");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{source_name}:{location} {message}")]
pub struct StaticError {
    /// Name of the offending source, as given by the caller.
    pub source_name: String,
    /// Position the error is anchored to.
    pub location: Location,
    /// Human-readable description of what went wrong.
    pub message: String,
}

impl StaticError {
    /// Creates a new error at the given position.
    pub fn new(
        source_name: impl Into<String>,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            location,
            message: message.into(),
        }
    }
}

/// Result type alias for operations that fail with a [`StaticError`].
pub type StaticResult<T> = std::result::Result<T, StaticError>;
