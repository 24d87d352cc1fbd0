//! Error types for the tzsum binary

use std::{io, path::PathBuf};
use thiserror::Error;

/// Result type alias for tzsum operations
pub(crate) type Result<T> = std::result::Result<T, CliError>;

/// Everything that can go wrong while running a command
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// Reading an input failed
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Input that failed, `-` for standard input
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A hash argument is not valid hex
    #[error("invalid hex in {arg:?}: {source}")]
    Hex {
        /// Offending argument
        arg: String,
        /// Underlying decoding error
        #[source]
        source: hex::FromHexError,
    },

    /// Hash arithmetic failed
    #[error(transparent)]
    Hash(#[from] tzhash::Error),
}
