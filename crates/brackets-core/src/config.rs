use serde::Deserialize;

/// How to treat characters outside the six bracket symbols.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum UnknownChars {
    /// Treat any non-opening character as a closer. A character that is not
    /// one of the six bracket symbols can never match an opener, so it always
    /// invalidates the sequence (default).
    #[default]
    Strict,
    /// Skip characters outside the six bracket symbols.
    Ignore,
}

/// Validation configuration options.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How to treat characters outside the six bracket symbols.
    pub unknown_chars: UnknownChars,
}
