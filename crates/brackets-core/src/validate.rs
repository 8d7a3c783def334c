//! Bracket sequence validation.
//!
//! A single left-to-right scan over the input with an explicit stack of
//! pending openers. The scan stops at the first failure, so every invalid
//! sequence is rejected with the earliest reason that applies.

use miette::Diagnostic;
use thiserror::Error;

use crate::{Config, UnknownChars};

/// One of the three bracket pair kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bracket {
    /// `(` and `)`.
    Round,
    /// `[` and `]`.
    Square,
    /// `{` and `}`.
    Curly,
}

impl Bracket {
    /// The opening symbol of this pair.
    #[must_use]
    pub const fn opening(self) -> char {
        match self {
            Self::Round => '(',
            Self::Square => '[',
            Self::Curly => '{',
        }
    }

    /// The closing symbol of this pair.
    #[must_use]
    pub const fn closing(self) -> char {
        match self {
            Self::Round => ')',
            Self::Square => ']',
            Self::Curly => '}',
        }
    }

    /// The pair whose opening symbol is `c`, if any.
    #[must_use]
    pub const fn from_opening(c: char) -> Option<Self> {
        match c {
            '(' => Some(Self::Round),
            '[' => Some(Self::Square),
            '{' => Some(Self::Curly),
            _ => None,
        }
    }

    /// The pair whose closing symbol is `c`, if any.
    #[must_use]
    pub const fn from_closing(c: char) -> Option<Self> {
        match c {
            ')' => Some(Self::Round),
            ']' => Some(Self::Square),
            '}' => Some(Self::Curly),
            _ => None,
        }
    }
}

/// Why a sequence failed validation.
///
/// Columns are 1-indexed character positions into the input.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum InvalidSequence {
    /// A closer arrived with no opener left to match it.
    #[error("unmatched `{found}` at column {column}: nothing left to close")]
    #[diagnostic(code(brackets::unmatched_closer))]
    UnmatchedCloser {
        /// The closing symbol that had no opener.
        found: char,
        /// Where the closer appeared.
        column: usize,
    },

    /// A closer did not pair with the most recent opener.
    #[error("mismatched pair at column {column}: expected `{expected}`, found `{found}`")]
    #[diagnostic(code(brackets::mismatched_pair))]
    MismatchedPair {
        /// The closing symbol the pending opener required.
        expected: char,
        /// The closing symbol that actually appeared.
        found: char,
        /// Where the mismatch appeared.
        column: usize,
    },

    /// A character outside the six bracket symbols under strict handling.
    #[error("unexpected character `{found}` at column {column}")]
    #[diagnostic(code(brackets::unexpected_char))]
    UnexpectedChar {
        /// The offending character.
        found: char,
        /// Where it appeared.
        column: usize,
    },

    /// The input ended with at least one opener still unclosed.
    #[error("unclosed `{opening}` opened at column {column}")]
    #[diagnostic(code(brackets::unclosed_opener))]
    UnclosedOpener {
        /// The opening symbol left on the stack.
        opening: char,
        /// Where it was opened.
        column: usize,
    },
}

impl InvalidSequence {
    /// The 1-indexed column the failure points at.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnmatchedCloser { column, .. }
            | Self::MismatchedPair { column, .. }
            | Self::UnexpectedChar { column, .. }
            | Self::UnclosedOpener { column, .. } => *column,
        }
    }
}

/// Check whether `source` is a properly nested and matched bracket sequence.
///
/// # Errors
///
/// Returns the first failure found during the scan.
pub fn check(source: &str, config: &Config) -> Result<(), InvalidSequence> {
    // Openers still waiting for their closer, with the column each opened at.
    let mut pending: Vec<(Bracket, usize)> = Vec::new();

    for (index, c) in source.chars().enumerate() {
        let column = index + 1;

        if let Some(opened) = Bracket::from_opening(c) {
            pending.push((opened, column));
            continue;
        }

        let Some(found) = Bracket::from_closing(c) else {
            match config.unknown_chars {
                UnknownChars::Ignore => continue,
                // Anything that is not an opener takes the closer branch and
                // can never match, so the sequence is invalid either way.
                UnknownChars::Strict => {
                    return Err(InvalidSequence::UnexpectedChar { found: c, column });
                }
            }
        };

        match pending.pop() {
            None => {
                return Err(InvalidSequence::UnmatchedCloser {
                    found: found.closing(),
                    column,
                });
            }
            Some((opened, _)) if opened != found => {
                return Err(InvalidSequence::MismatchedPair {
                    expected: opened.closing(),
                    found: found.closing(),
                    column,
                });
            }
            Some(_) => {}
        }
    }

    match pending.pop() {
        None => Ok(()),
        Some((opened, column)) => Err(InvalidSequence::UnclosedOpener {
            opening: opened.opening(),
            column,
        }),
    }
}

/// Whether `source` is a well-formed bracket sequence.
///
/// Equivalent to [`check`] under the default (strict) configuration. Pure and
/// deterministic; the same input always yields the same answer.
#[must_use]
pub fn is_valid(source: &str) -> bool {
    check(source, &Config::default()).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ignore_unknown() -> Config {
        Config {
            unknown_chars: UnknownChars::Ignore,
        }
    }

    #[test]
    fn test_empty_string_is_valid() {
        assert!(is_valid(""));
    }

    #[test]
    fn test_flat_pairs_are_valid() {
        assert!(is_valid("()[]{}"));
    }

    #[test]
    fn test_nested_pairs_are_valid() {
        assert!(is_valid("{[]}"));
        assert!(is_valid("([{}])"));
    }

    #[test]
    fn test_mismatched_pair_is_invalid() {
        assert!(!is_valid("(]"));
    }

    #[test]
    fn test_interleaved_pairs_are_invalid() {
        assert!(!is_valid("([)]"));
    }

    #[test]
    fn test_lone_opener_is_invalid() {
        assert!(!is_valid("("));
    }

    #[test]
    fn test_lone_closer_is_invalid() {
        assert!(!is_valid(")"));
    }

    #[test]
    fn test_is_valid_is_idempotent() {
        for input in ["", "()[]{}", "([)]", "{[]}", "((("] {
            assert_eq!(is_valid(input), is_valid(input));
        }
    }

    #[test]
    fn test_unmatched_closer_reports_column() {
        let err = check("()]", &Config::default()).unwrap_err();
        assert_eq!(
            err,
            InvalidSequence::UnmatchedCloser {
                found: ']',
                column: 3,
            }
        );
    }

    #[test]
    fn test_mismatched_pair_reports_expected_closer() {
        let err = check("{)", &Config::default()).unwrap_err();
        assert_eq!(
            err,
            InvalidSequence::MismatchedPair {
                expected: '}',
                found: ')',
                column: 2,
            }
        );
    }

    #[test]
    fn test_unclosed_opener_reports_innermost() {
        let err = check("({", &Config::default()).unwrap_err();
        assert_eq!(
            err,
            InvalidSequence::UnclosedOpener {
                opening: '{',
                column: 2,
            }
        );
    }

    #[test]
    fn test_strict_rejects_non_bracket_chars() {
        assert!(!is_valid("(a)"));
        assert!(!is_valid("a"));
        let err = check("(a)", &Config::default()).unwrap_err();
        assert_eq!(
            err,
            InvalidSequence::UnexpectedChar {
                found: 'a',
                column: 2,
            }
        );
    }

    #[test]
    fn test_strict_rejects_non_bracket_after_opener() {
        // A scan that popped without checking the pair would call this
        // balanced once the opener is consumed.
        assert!(!is_valid("(a"));
        let err = check("(a", &Config::default()).unwrap_err();
        assert_eq!(
            err,
            InvalidSequence::UnexpectedChar {
                found: 'a',
                column: 2,
            }
        );
    }

    #[test]
    fn test_ignore_skips_non_bracket_chars() {
        let config = ignore_unknown();
        assert!(check("(a)", &config).is_ok());
        assert!(check("fn main() { [1, 2]; }", &config).is_ok());
        assert!(check("(]", &config).is_err());
    }

    #[test]
    fn test_columns_count_chars_not_bytes() {
        let err = check("(é]", &Config::default()).unwrap_err();
        assert_eq!(err.column(), 2);
    }

    #[test]
    fn test_bracket_pair_accessors_agree() {
        for bracket in [Bracket::Round, Bracket::Square, Bracket::Curly] {
            assert_eq!(Bracket::from_opening(bracket.opening()), Some(bracket));
            assert_eq!(Bracket::from_closing(bracket.closing()), Some(bracket));
            assert_eq!(Bracket::from_opening(bracket.closing()), None);
            assert_eq!(Bracket::from_closing(bracket.opening()), None);
        }
    }
}
