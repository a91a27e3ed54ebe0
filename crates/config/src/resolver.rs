//! The configuration resolver.
//!
//! Responsibilities:
//! - Hold the resolved fields and the lazily built connection handle.
//! - Apply direct-mode setters and the settings-file sequence through one
//!   shared validation path.
//! - Enforce input-mode precedence at construction (settings file wins).
//!
//! Does NOT handle:
//! - Settings-file parsing (see `settings`).
//! - Format rules (see `validate`).
//! - Opening the actual connection (delegated to the injected driver).
//!
//! Invariants:
//! - The connection handle is only (re)built at two trigger points: a
//!   password set, and the explicit rebuild at the end of a settings-file
//!   apply. No other setter touches it.
//! - Each rebuild replaces the handle outright; nothing is merged.
//! - A failed rebuild leaves the previous handle in place and surfaces the
//!   driver's error unmodified.

use secrecy::SecretString;
use std::path::{Path, PathBuf};

use sitekit_driver::{ConnectionOptions, DatabaseDriver};

use crate::error::ConfigError;
use crate::seed::ResolverSeed;
use crate::settings::Settings;
use crate::validate;

/// Resolves database and site configuration, owning the connection handle.
///
/// Built once during process initialization, then treated as read-only.
pub struct ConfigResolver<D: DatabaseDriver> {
    driver: D,
    options: ConnectionOptions,
    dsn: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
    settings_file: Option<PathBuf>,
    site_url: Option<String>,
    site_domain: Option<String>,
    site_currency: Option<String>,
    site_language: Option<String>,
    connection: Option<D::Handle>,
}

impl<D: DatabaseDriver> ConfigResolver<D> {
    /// Create an empty resolver with the stock driver options.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            options: ConnectionOptions::default(),
            dsn: None,
            username: None,
            password: None,
            settings_file: None,
            site_url: None,
            site_domain: None,
            site_currency: None,
            site_language: None,
            connection: None,
        }
    }

    /// Build a resolver from a one-shot seed object.
    ///
    /// The options mapping is applied first. A `settings_file` key then
    /// takes the file-mode path and every other value key is ignored;
    /// otherwise the direct fields are applied in fixed order, password
    /// after dsn and username so the connection trigger sees them.
    pub fn from_seed(driver: D, seed: ResolverSeed) -> Result<Self, ConfigError> {
        let mut resolver = Self::new(driver);

        if let Some(options) = seed.driver_options {
            resolver.set_options(options);
        }

        if let Some(path) = seed.settings_file {
            resolver.set_settings_file(path)?;
            return Ok(resolver);
        }

        if let Some(dsn) = seed.dsn {
            resolver.set_dsn(dsn);
        }
        if let Some(username) = seed.username {
            resolver.set_username(username);
        }
        if let Some(password) = seed.password {
            resolver.set_password(password)?;
        }
        if let Some(url) = seed.site_url {
            resolver.set_site_url(url)?;
        }
        if let Some(domain) = seed.site_domain {
            resolver.set_site_domain(domain)?;
        }
        if let Some(currency) = seed.site_currency {
            resolver.set_site_currency(currency)?;
        }
        if let Some(language) = seed.site_language {
            resolver.set_site_language(language)?;
        }

        Ok(resolver)
    }

    // Credential setters

    /// Store the DSN. Content is the driver's to judge at connect time.
    pub fn set_dsn(&mut self, dsn: impl Into<String>) {
        self.dsn = Some(dsn.into());
    }

    /// Store the username. Content is the driver's to judge at connect time.
    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = Some(username.into());
    }

    /// Store the password and rebuild the connection.
    ///
    /// The password is the last necessary credential, so setting it is the
    /// direct-mode connection trigger. Unset dsn/username reach the driver
    /// as empty strings and fail there, never silently.
    pub fn set_password(&mut self, password: SecretString) -> Result<(), ConfigError> {
        self.password = Some(password);
        self.rebuild_connection()
    }

    /// Replace the whole driver options mapping.
    ///
    /// Takes effect on the next connection rebuild, not retroactively.
    pub fn set_options(&mut self, options: ConnectionOptions) {
        self.options = options;
    }

    // Site metadata setters, all pure validation gates

    /// Store the site URL after checking it parses as an absolute URL.
    pub fn set_site_url(&mut self, value: impl Into<String>) -> Result<(), ConfigError> {
        let value = value.into();
        validate::site_url(&value)?;
        self.site_url = Some(value);
        Ok(())
    }

    /// Store the site domain after checking domain-name syntax.
    pub fn set_site_domain(&mut self, value: impl Into<String>) -> Result<(), ConfigError> {
        let value = value.into();
        validate::site_domain(&value)?;
        self.site_domain = Some(value);
        Ok(())
    }

    /// Store the site currency after checking the 3-or-4 character rule.
    pub fn set_site_currency(&mut self, value: impl Into<String>) -> Result<(), ConfigError> {
        let value = value.into();
        validate::site_currency(&value)?;
        self.site_currency = Some(value);
        Ok(())
    }

    /// Store the site language after checking the 2 character rule.
    pub fn set_site_language(&mut self, value: impl Into<String>) -> Result<(), ConfigError> {
        let value = value.into();
        validate::site_language(&value)?;
        self.site_language = Some(value);
        Ok(())
    }

    // File mode

    /// Load a settings file and funnel its values through the setters above.
    ///
    /// Fails with `NotFound` if the path does not exist, then with whatever
    /// the parse, the required-key gate, a validator, or the driver raises.
    /// A failure mid-sequence aborts the remaining assignments.
    pub fn set_settings_file(&mut self, path: impl Into<PathBuf>) -> Result<(), ConfigError> {
        let path = path.into();
        if !path.exists() {
            return Err(ConfigError::NotFound { path });
        }
        let settings = Settings::load(&path)?;
        self.settings_file = Some(path);
        self.apply_settings(settings)
    }

    /// Apply gathered settings in fixed order, then rebuild explicitly.
    ///
    /// The password set already triggers one rebuild; the trailing rebuild
    /// is the defined end-of-parse trigger and is kept as its own step.
    fn apply_settings(&mut self, settings: Settings) -> Result<(), ConfigError> {
        self.set_dsn(settings.dsn);
        self.set_username(settings.username);
        self.set_password(settings.password)?;
        self.set_site_url(settings.site_url)?;
        self.set_site_domain(settings.site_domain)?;
        self.set_site_currency(settings.site_currency)?;
        self.set_site_language(settings.site_language)?;
        self.rebuild_connection()
    }

    /// Open a fresh connection from the currently stored fields.
    fn rebuild_connection(&mut self) -> Result<(), ConfigError> {
        let dsn = self.dsn.as_deref().unwrap_or("");
        let username = self.username.as_deref().unwrap_or("");
        let password = self
            .password
            .clone()
            .unwrap_or_else(|| SecretString::new(String::new().into()));

        tracing::debug!(dsn = %dsn, username = %username, "opening database connection");
        let handle = self.driver.connect(dsn, username, &password, &self.options)?;
        self.connection = Some(handle);
        Ok(())
    }

    // Accessors

    /// The connection handle, if a rebuild has succeeded.
    pub fn connection(&self) -> Option<&D::Handle> {
        self.connection.as_ref()
    }

    /// The driver options mapping currently in effect.
    pub fn options(&self) -> &ConnectionOptions {
        &self.options
    }

    /// The settings file this resolver was loaded from, if file mode was used.
    pub fn settings_file(&self) -> Option<&Path> {
        self.settings_file.as_deref()
    }

    pub fn site_url(&self) -> Option<&str> {
        self.site_url.as_deref()
    }

    pub fn site_domain(&self) -> Option<&str> {
        self.site_domain.as_deref()
    }

    pub fn site_currency(&self) -> Option<&str> {
        self.site_currency.as_deref()
    }

    pub fn site_language(&self) -> Option<&str> {
        self.site_language.as_deref()
    }
}
