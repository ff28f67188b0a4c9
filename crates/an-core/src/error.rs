//! Simulator error type.
//!
//! The simulation core has exactly one failure kind: a configuration that
//! cannot drive a run.  It is detected when a driver is built, never mid-run.

use thiserror::Error;

/// The error type shared by every `an-*` crate that validates input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NavError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl NavError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        NavError::InvalidConfiguration(msg.into())
    }
}

/// Shorthand result type for all `an-*` crates.
pub type NavResult<T> = Result<T, NavError>;
