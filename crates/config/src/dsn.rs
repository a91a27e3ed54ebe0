//! DSN derivation from discrete connection parts.
//!
//! Responsibilities:
//! - Hold the five settings-file fields a DSN is derived from.
//! - Render them into the driver-specific connection string.
//!
//! Does NOT handle:
//! - Validating the parts (the driver rejects a bad DSN at connect time).
//!
//! Invariants:
//! - Derivation is deterministic: identical parts always render the
//!   identical string.
//! - PostgreSQL encodes the charset through a server `client_encoding`
//!   option; every other driver takes a plain `charset` clause.

use std::fmt;

use crate::constants::POSTGRES_DRIVER;

/// The discrete parts a settings file supplies for DSN derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DsnParts {
    pub driver: String,
    pub host: String,
    /// Kept as supplied; the driver parses it, we never do arithmetic on it.
    pub port: String,
    pub dbname: String,
    pub charset: String,
}

impl DsnParts {
    /// Render the driver-specific DSN string.
    pub fn to_dsn(&self) -> String {
        format!("{self}")
    }
}

impl fmt::Display for DsnParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:host={};port={};dbname={}",
            self.driver, self.host, self.port, self.dbname
        )?;
        if self.driver == POSTGRES_DRIVER {
            write!(f, ";options='-c client_encoding={}'", self.charset)
        } else {
            write!(f, ";charset={}", self.charset)
        }
    }
}
