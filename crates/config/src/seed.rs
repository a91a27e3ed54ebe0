//! Direct-mode construction input.
//!
//! Responsibilities:
//! - Define the one-shot configuration object a caller hands to
//!   `ConfigResolver::from_seed`.
//! - Deserialize the password straight into `SecretString`.
//!
//! Does NOT handle:
//! - Validation or application order (see `resolver`).
//!
//! Invariants:
//! - Every field is optional; absent fields simply leave the resolver unset.
//! - When `settings_file` is present, every other value field is ignored
//!   (the options mapping is still applied first).

use secrecy::SecretString;
use serde::Deserialize;
use std::path::PathBuf;

use sitekit_driver::ConnectionOptions;

/// Module for deserializing an optional secret string.
mod opt_secret_string {
    use secrecy::SecretString;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.map(|s| SecretString::new(s.into())))
    }
}

/// One-shot construction input for a resolver.
///
/// Recognized keys follow the settings-file vocabulary; unknown keys are
/// ignored so callers can embed this in a larger configuration document.
#[derive(Debug, Default, Deserialize)]
pub struct ResolverSeed {
    /// Driver options mapping, applied before anything else.
    #[serde(default, rename = "pdo_options")]
    pub driver_options: Option<ConnectionOptions>,
    /// Settings file path; when present, the value fields below are ignored.
    #[serde(default)]
    pub settings_file: Option<PathBuf>,
    #[serde(default)]
    pub dsn: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "opt_secret_string::deserialize")]
    pub password: Option<SecretString>,
    #[serde(default)]
    pub site_url: Option<String>,
    #[serde(default)]
    pub site_domain: Option<String>,
    #[serde(default)]
    pub site_currency: Option<String>,
    #[serde(default)]
    pub site_language: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use sitekit_driver::{DriverOption, OptionValue};

    #[test]
    fn test_deserialize_full_seed() {
        let seed: ResolverSeed = serde_json::from_str(
            r#"{
                "pdo_options": {"emulate_prepares": true},
                "dsn": "mysql:host=h;port=3306;dbname=d;charset=utf8",
                "username": "app",
                "password": "s3cret",
                "site_url": "https://example.com",
                "site_domain": "example.com",
                "site_currency": "EUR",
                "site_language": "en"
            }"#,
        )
        .unwrap();

        let options = seed.driver_options.unwrap();
        assert_eq!(
            options.get(DriverOption::EmulatePrepares),
            Some(&OptionValue::Flag(true))
        );
        assert_eq!(seed.username.as_deref(), Some("app"));
        assert_eq!(seed.password.unwrap().expose_secret(), "s3cret");
        assert!(seed.settings_file.is_none());
    }

    #[test]
    fn test_empty_document_leaves_everything_unset() {
        let seed: ResolverSeed = serde_json::from_str("{}").unwrap();
        assert!(seed.driver_options.is_none());
        assert!(seed.settings_file.is_none());
        assert!(seed.dsn.is_none());
        assert!(seed.password.is_none());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let seed: ResolverSeed =
            serde_json::from_str(r#"{"site_language": "en", "cache_dir": "/tmp"}"#).unwrap();
        assert_eq!(seed.site_language.as_deref(), Some("en"));
    }

    /// Debug output of a seed must not leak the password.
    #[test]
    fn test_seed_debug_does_not_expose_password() {
        let seed: ResolverSeed = serde_json::from_str(r#"{"password": "hunter2"}"#).unwrap();
        let debug_output = format!("{seed:?}");
        assert!(
            !debug_output.contains("hunter2"),
            "Debug output should not contain the password"
        );
    }
}
