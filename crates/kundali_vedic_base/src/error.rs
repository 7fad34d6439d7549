//! Error types for name parsing.
//!
//! The numeric classifiers in this crate never fail: every longitude is
//! normalized. The only fallible surface is turning caller-supplied names
//! into the closed enums.

use thiserror::Error;

/// Failure to map a name onto one of the closed enums.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    #[error("unknown graha name: {0:?}")]
    UnknownGraha(String),
    #[error("unknown dignity name: {0:?}")]
    UnknownDignity(String),
}
