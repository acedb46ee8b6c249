// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors surfaced by this crate.
///
/// The carousel controller is a pure state machine over host-supplied input,
/// so the only failure mode is an invalid configuration at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
