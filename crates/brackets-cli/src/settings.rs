//! Configuration discovery and loading.

use std::{fs, path::Path};

use brackets_core::Config;

use crate::error::Error;

/// File name searched in the current directory when no path is given.
const CONFIG_FILE: &str = "brackets.toml";

/// Load the configuration.
///
/// An explicit path must exist and parse. Without one, `brackets.toml` in the
/// current directory is used when present, and defaults otherwise.
///
/// # Errors
///
/// Returns an error when the file cannot be read or is not valid TOML.
pub fn load(path: Option<&Path>) -> Result<Config, Error> {
    if let Some(path) = path {
        return read(path);
    }

    let discovered = Path::new(CONFIG_FILE);
    if discovered.is_file() {
        return read(discovered);
    }

    Ok(Config::default())
}

fn read(path: &Path) -> Result<Config, Error> {
    let text = fs::read_to_string(path).map_err(|source| Error::File {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&text).map_err(|source| Error::Config {
        path: path.to_path_buf(),
        source,
    })
}
