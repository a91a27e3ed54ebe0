//! Error types for configuration resolution.
//!
//! Responsibilities:
//! - Define error variants for every way resolution can fail.
//! - Provide conversion from the driver crate's connection error.
//!
//! Does NOT handle:
//! - Driver-level diagnostics (see `sitekit_driver::DriverError`).
//!
//! Invariants:
//! - Every variant carries enough context to debug (field names, paths,
//!   offending values, missing keys).
//! - An `InvalidInput` raised while applying a settings file is the exact
//!   same variant a direct setter raises; file mode adds no wrapping.
//! - Secrets never appear in error output; only non-sensitive fields are
//!   validated, so no variant carries a password.

use std::path::PathBuf;
use thiserror::Error;

use sitekit_driver::DriverError;

/// Errors that can occur while resolving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A site metadata value failed its format rule.
    #[error("invalid {field}: {value}")]
    InvalidInput {
        /// Which field was rejected (e.g. `site_url`).
        field: &'static str,
        /// The rejected value, verbatim.
        value: String,
    },

    /// The settings file path does not exist.
    #[error("settings file does not exist: {path}")]
    NotFound { path: PathBuf },

    /// The settings file exists but cannot be parsed into sections and keys.
    #[error("settings file cannot be parsed: {path}")]
    Parse { path: PathBuf },

    /// The settings file parses but lacks one or more required keys.
    #[error("required settings are missing: {}", .missing.join(", "))]
    MissingConfiguration { missing: Vec<String> },

    /// The database driver rejected the derived DSN or credentials.
    #[error("database connection failed: {0}")]
    Connection(#[from] DriverError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_names_field_and_value() {
        let err = ConfigError::InvalidInput {
            field: "site_currency",
            value: "EUROS".to_string(),
        };
        assert_eq!(err.to_string(), "invalid site_currency: EUROS");
    }

    #[test]
    fn test_missing_configuration_lists_keys() {
        let err = ConfigError::MissingConfiguration {
            missing: vec!["database.port".to_string(), "site.url".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "required settings are missing: database.port, site.url"
        );
    }

    #[test]
    fn test_connection_preserves_driver_message_and_code() {
        let err: ConfigError = DriverError::new("no such host", 2005).into();
        assert_eq!(
            err.to_string(),
            "database connection failed: driver error 2005: no such host"
        );
        match err {
            ConfigError::Connection(inner) => {
                assert_eq!(inner.message, "no such host");
                assert_eq!(inner.code, 2005);
            }
            _ => panic!("expected Connection variant"),
        }
    }
}
