//! File-mode validation: glob expansion and a parallel fan-out.
//!
//! Each file runs through the streaming adapter independently. Validation is
//! fanned out across files with rayon, and per-file output is buffered so it
//! reaches stdout in argument order regardless of which file finished first.

use std::{
    fs::File,
    io::{self, BufReader, Write},
    path::{Path, PathBuf},
};

use brackets_core::Config;
use rayon::prelude::*;

use crate::{
    error::Error,
    input::{self, Options, Summary},
};

/// Validate every line of every named file.
///
/// # Errors
///
/// Returns the first error in argument order: unreadable files, bad glob
/// patterns, or a stdout failure.
pub fn run(patterns: &[PathBuf], config: &Config, options: Options) -> Result<Summary, Error> {
    let paths = expand(patterns)?;

    let results: Vec<Result<(Vec<u8>, Summary), Error>> = paths
        .par_iter()
        .map(|path| validate_file(path, config, options))
        .collect();

    let mut total = Summary::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for result in results {
        let (output, summary) = result?;
        out.write_all(&output)?;
        total.absorb(summary);
    }

    Ok(total)
}

/// Run one file through the streaming adapter, buffering its output.
fn validate_file(
    path: &Path,
    config: &Config,
    options: Options,
) -> Result<(Vec<u8>, Summary), Error> {
    let file = File::open(path).map_err(|source| Error::File {
        path: path.to_path_buf(),
        source,
    })?;

    let label = path.display().to_string();
    let mut output = Vec::new();
    let summary = input::run_stream(BufReader::new(file), &mut output, &label, config, options)?;

    Ok((output, summary))
}

/// Expand glob patterns among the arguments; plain paths pass through.
fn expand(patterns: &[PathBuf]) -> Result<Vec<PathBuf>, Error> {
    let mut paths = Vec::with_capacity(patterns.len());

    for pattern in patterns {
        let text = pattern.to_string_lossy();
        if text.contains(['*', '?', '[']) {
            for entry in glob::glob(&text).map_err(|source| Error::Pattern {
                pattern: text.into_owned(),
                source,
            })? {
                paths.push(entry?);
            }
        } else {
            paths.push(pattern.clone());
        }
    }

    Ok(paths)
}
