//! Error type for the command-line frontend.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Anything that stops a run before it completes normally.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O failure on stdin or stdout.
    #[error("{0}")]
    Io(#[from] io::Error),

    /// Counted input ended before the count header.
    #[error("missing test-case count on the first line")]
    MissingCount,

    /// The count header did not parse as a non-negative integer.
    #[error("invalid test-case count {0:?}")]
    BadCount(String),

    /// Counted input promised more cases than it delivered.
    #[error("expected {expected} test cases but input ended after {found}")]
    TooFewCases {
        /// The count the header promised.
        expected: usize,
        /// How many cases were actually read.
        found: usize,
    },

    /// `--counted` only makes sense for stdin.
    #[error("--counted reads from stdin and cannot be combined with file inputs")]
    CountedWithFiles,

    /// A file could not be opened or read.
    #[error("{}: {}", .path.display(), .source)]
    File {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// A glob pattern did not parse.
    #[error("invalid glob pattern {pattern:?}: {source}")]
    Pattern {
        /// The offending pattern.
        pattern: String,
        /// The underlying parse error.
        source: glob::PatternError,
    },

    /// A glob match could not be read back from the filesystem.
    #[error("{0}")]
    Glob(#[from] glob::GlobError),

    /// A configuration file did not parse as TOML.
    #[error("{}: {}", .path.display(), .source)]
    Config {
        /// The configuration file that failed.
        path: PathBuf,
        /// The underlying TOML error.
        source: toml::de::Error,
    },
}
