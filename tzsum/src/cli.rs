//! Command-line definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Environment variable overriding the log filter, e.g. `TZSUM_LOG=debug`.
pub(crate) const LOG_ENV: &str = "TZSUM_LOG";

/// Compute, combine and check Tillich-Zémor homomorphic hashes
#[derive(Debug, Parser)]
#[command(name = "tzsum", version)]
pub(crate) struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Hash files, or standard input when no file (or `-`) is given
    Hash {
        /// Files to hash
        files: Vec<PathBuf>,

        /// Hash in parallel chunks of this many bytes (reads each input fully into memory)
        #[arg(long, value_name = "BYTES")]
        chunk_size: Option<usize>,
    },

    /// Combine the hashes of consecutive pieces into the hash of the whole
    Concat {
        /// Hex-encoded piece hashes, in order
        #[arg(required = true)]
        hashes: Vec<String>,
    },

    /// Check a combined hash against the hashes of its pieces
    Validate {
        /// Hex-encoded hash of the whole
        combined: String,

        /// Hex-encoded piece hashes, in order
        #[arg(required = true)]
        hashes: Vec<String>,
    },

    /// Remove the hash of a leading or trailing piece from a combined hash
    Subtract {
        /// Which end of the combined data the piece was at
        #[arg(long, value_enum, default_value_t = Side::Right)]
        side: Side,

        /// Hex-encoded hash of the whole
        combined: String,

        /// Hex-encoded hash of the piece to remove
        part: String,
    },
}

/// End of the combined data a piece is removed from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub(crate) enum Side {
    /// The piece is a prefix
    Left,
    /// The piece is a suffix
    Right,
}
