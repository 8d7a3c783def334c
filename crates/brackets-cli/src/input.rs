//! The two line-oriented input adapters.
//!
//! Both adapters feed trimmed lines to the validator and write one `true` or
//! `false` line per case. They differ only in how they decide when to stop:
//! [`run_counted`] trusts a count header, [`run_stream`] reads until EOF and
//! skips blank lines.

use std::io::{BufRead, Write};

use brackets_core::{Config, check};

use crate::{diagnostics, error::Error};

/// What a run looked at and how much of it was invalid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Lines validated.
    pub checked: usize,
    /// Lines that failed validation.
    pub invalid: usize,
}

impl Summary {
    /// Fold another summary into this one.
    pub fn absorb(&mut self, other: Self) {
        self.checked += other.checked;
        self.invalid += other.invalid;
    }
}

/// Output behavior shared by both adapters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Suppress the per-line `true`/`false` output.
    pub quiet: bool,
    /// Render a caret diagnostic on stderr for each invalid line.
    pub explain: bool,
}

/// One run over one source of lines.
struct Session<'a, W> {
    writer: &'a mut W,
    label: &'a str,
    config: &'a Config,
    options: Options,
    summary: Summary,
}

impl<W: Write> Session<'_, W> {
    fn validate(&mut self, line: &str, line_number: usize) -> Result<(), Error> {
        self.summary.checked += 1;

        let verdict = check(line, self.config);
        if !self.options.quiet {
            let answer = if verdict.is_ok() { "true" } else { "false" };
            writeln!(self.writer, "{answer}")?;
        }

        if let Err(cause) = verdict {
            self.summary.invalid += 1;
            if self.options.explain {
                diagnostics::render(self.label, line_number, line, &cause);
            }
        }

        Ok(())
    }
}

/// Streaming adapter: validate every non-blank line until end of input.
///
/// Lines are trimmed before validation; lines that are blank after trimming
/// are skipped without producing output.
///
/// # Errors
///
/// Returns an error when reading or writing fails.
pub fn run_stream<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    label: &str,
    config: &Config,
    options: Options,
) -> Result<Summary, Error> {
    let mut session = Session {
        writer,
        label,
        config,
        options,
        summary: Summary::default(),
    };

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        session.validate(trimmed, index + 1)?;
    }

    Ok(session.summary)
}

/// Counted adapter: a count header, then exactly that many cases.
///
/// The first line must parse as a non-negative integer `T`; each of the next
/// `T` lines is trimmed and validated, blank or not. Lines beyond the `T`th
/// are ignored.
///
/// # Errors
///
/// Returns an error when the header is missing or malformed, when the input
/// ends before `T` cases were read, or when reading or writing fails.
pub fn run_counted<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    label: &str,
    config: &Config,
    options: Options,
) -> Result<Summary, Error> {
    let mut lines = reader.lines();

    let header = lines.next().ok_or(Error::MissingCount)??;
    let expected: usize = header
        .trim()
        .parse()
        .map_err(|_| Error::BadCount(header.trim().to_string()))?;

    let mut session = Session {
        writer,
        label,
        config,
        options,
        summary: Summary::default(),
    };

    for found in 0..expected {
        let line = lines.next().ok_or(Error::TooFewCases { expected, found })??;
        // Line 1 is the header, so case `found` sits on line `found + 2`.
        session.validate(line.trim(), found + 2)?;
    }

    Ok(session.summary)
}
