//! Bracket sequence validation library.
//!
//! This library decides whether a string of bracket characters is properly
//! nested and matched.

mod config;
mod validate;

pub use config::{Config, UnknownChars};
pub use validate::{Bracket, InvalidSequence, check, is_valid};
