// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.
//!
//! Policy breaches are not errors: they are [`Violation`](crate::violation::Violation)
//! records routed through the enforcement modes. Errors here are misuse and
//! misconfiguration, and all of them are fatal.

use std::path::PathBuf;

use crate::violation::PolicyDomain;

/// Errors raised by the enforcement engine and its configuration layer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A marker or config key named a tier outside the catalog.
    #[error("unknown test size tier {0:?} (expected small, medium, large, or xlarge)")]
    UnknownTier(String),

    /// A mode string other than OFF, WARN, or STRICT.
    #[error("invalid {domain} enforcement mode {value:?} (expected OFF, WARN, or STRICT)")]
    InvalidMode { domain: PolicyDomain, value: String },

    /// A distribution bound that is malformed or not satisfiable.
    #[error("invalid distribution constraint for {tier}: {reason}")]
    InvalidConstraint { tier: String, reason: String },

    /// The aggregator was used out of order.
    #[error("lifecycle violation: {0}")]
    LifecycleViolation(&'static str),

    /// Config file is not valid TOML or has unexpected keys.
    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// Results handed over by a framework integration are malformed.
    #[error("invalid results: {0}")]
    InvalidResults(String),
}

impl Error {
    /// Whether this error comes from configuration rather than engine misuse.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidMode { .. } | Self::InvalidConstraint { .. } | Self::Parse { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Verdict was Pass or Warn.
    Success = 0,
    /// Verdict was Fail.
    CheckFailed = 1,
    /// Configuration could not be loaded or validated.
    ConfigError = 2,
    /// Anything else (I/O, malformed results, engine misuse).
    InternalError = 3,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
