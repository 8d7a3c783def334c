//! Caret diagnostics for invalid lines.

use std::io::IsTerminal;

use brackets_core::InvalidSequence;
use owo_colors::OwoColorize;

/// Render a diagnostic for one invalid line to stderr.
pub fn render(label: &str, line_number: usize, line: &str, cause: &InvalidSequence) {
    let color = std::io::stderr().is_terminal();
    eprintln!("{}", format_invalid(label, line_number, line, cause, color));
}

/// Format a diagnostic with the offending line and a caret under the column.
fn format_invalid(
    label: &str,
    line_number: usize,
    line: &str,
    cause: &InvalidSequence,
    color: bool,
) -> String {
    use std::fmt::Write;
    let mut output = String::new();

    let column = cause.column();
    let message = if color {
        cause.red().to_string()
    } else {
        cause.to_string()
    };

    let _ = writeln!(output, "{label}:{line_number}:{column}: {message}");
    let _ = writeln!(output, "  |");
    let _ = writeln!(output, "{line_number:>3} | {line}");
    let _ = write!(output, "  | {:>width$}^", "", width = column - 1);

    output
}

#[cfg(test)]
mod tests {
    use brackets_core::{Config, check};

    use super::*;

    fn diagnose(line: &str) -> String {
        let cause = check(line, &Config::default()).unwrap_err();
        format_invalid("stdin", 4, line, &cause, false)
    }

    #[test]
    fn test_caret_points_at_the_failing_column() {
        let rendered = diagnose("([)]");
        assert_eq!(
            rendered,
            "stdin:4:3: mismatched pair at column 3: expected `]`, found `)`\n\
             \x20 |\n\
             \x20 4 | ([)]\n\
             \x20 |   ^"
        );
    }

    #[test]
    fn test_unclosed_opener_points_at_the_opening_column() {
        let rendered = diagnose("{[]");
        assert!(rendered.starts_with("stdin:4:1: unclosed `{` opened at column 1"));
        assert!(rendered.ends_with("| ^"));
    }
}
