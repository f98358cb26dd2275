//! Error type shared by every fallible resolver operation.
//!
//! An absent repository source and an unknown subject are not
//! represented here: the first loads zero statements and the second resolves
//! to a default-filled record.

use std::path::PathBuf;

use crate::unit::UnitError;

/// Errors raised while loading repositories or resolving records.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A repository source exists but could not be decoded.
    #[error("failed to parse {}: {message}", source_path.display())]
    Parse {
        /// Path of the malformed source.
        source_path: PathBuf,
        /// Decoder diagnostic.
        message: String,
    },

    /// A repository source exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path of the unreadable source.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The caller asked for an entity kind that has no repository group.
    #[error("unknown entity kind: {0}")]
    UnknownKind(String),

    /// A mapped predicate's value could not be converted by its transform.
    #[error("cannot convert value {value:?} of predicate <{predicate}>: {source}")]
    Transform {
        /// Predicate whose field transform failed.
        predicate: String,
        /// Raw object value handed to the transform.
        value: String,
        /// Failure reported by the unit resolver.
        source: UnitError,
    },

    /// The service configuration could not be read or is invalid.
    #[error("invalid configuration {}: {message}", path.display())]
    Config {
        /// Path of the configuration file (empty for in-memory configs).
        path: PathBuf,
        /// Description of the problem.
        message: String,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
