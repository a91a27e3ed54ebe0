//! Settings-file loading.
//!
//! Responsibilities:
//! - Parse the INI settings file into its `database` and `site` sections.
//! - Enforce the all-or-nothing required-key gate.
//! - Derive the DSN from the discrete database keys.
//!
//! Does NOT handle:
//! - Path existence (checked by the resolver before loading).
//! - Validation of site values (the resolver funnels them through the same
//!   setters direct mode uses).
//!
//! Invariants:
//! - Partial configuration is never accepted; a missing key fails the whole
//!   load and names every absent key.
//! - The password leaves this module already wrapped in `SecretString`.

use ini::{Ini, Properties};
use secrecy::SecretString;
use std::path::Path;

use crate::constants::{
    REQUIRED_DATABASE_KEYS, REQUIRED_SITE_KEYS, SECTION_DATABASE, SECTION_SITE,
};
use crate::dsn::DsnParts;
use crate::error::ConfigError;

/// The fully gathered contents of a settings file, DSN already derived.
///
/// Field order mirrors the fixed order in which the resolver applies them.
/// Debug output redacts the password through `SecretString`.
#[derive(Debug)]
pub(crate) struct Settings {
    pub dsn: String,
    pub username: String,
    pub password: SecretString,
    pub site_url: String,
    pub site_domain: String,
    pub site_currency: String,
    pub site_language: String,
}

impl Settings {
    /// Parse a settings file and gather every required key.
    pub(crate) fn load(path: &Path) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_file(path).map_err(|_| ConfigError::Parse {
            path: path.to_path_buf(),
        })?;

        let database = ini.section(Some(SECTION_DATABASE));
        let site = ini.section(Some(SECTION_SITE));

        let mut missing = Vec::new();
        let mut require = |section: Option<&Properties>, section_name: &str, key: &str| {
            match section.and_then(|s| s.get(key)) {
                Some(value) => value.to_string(),
                None => {
                    missing.push(format!("{section_name}.{key}"));
                    String::new()
                }
            }
        };

        let [driver, host, port, dbname, charset, username, password] =
            REQUIRED_DATABASE_KEYS.map(|key| require(database, SECTION_DATABASE, key));
        let [site_url, site_domain, site_currency, site_language] =
            REQUIRED_SITE_KEYS.map(|key| require(site, SECTION_SITE, key));

        if !missing.is_empty() {
            return Err(ConfigError::MissingConfiguration { missing });
        }

        tracing::debug!(path = %path.display(), driver = %driver, "loaded settings file");

        let parts = DsnParts {
            driver,
            host,
            port,
            dbname,
            charset,
        };

        Ok(Self {
            dsn: parts.to_dsn(),
            username,
            password: SecretString::new(password.into()),
            site_url,
            site_domain,
            site_currency,
            site_language,
        })
    }
}
