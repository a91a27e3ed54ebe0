//! Centralized constants for the Sitekit workspace.
//!
//! This module contains format rules and settings-file key names used across
//! the crate to avoid magic value duplication.

// =============================================================================
// Site Metadata Format Rules
// =============================================================================

/// Shortest accepted site currency code (ISO 4217 alphabetic).
pub const SITE_CURRENCY_MIN_LEN: usize = 3;

/// Longest accepted site currency code (room for non-ISO codes like "USDT").
pub const SITE_CURRENCY_MAX_LEN: usize = 4;

/// Exact length of a site language code (ISO 639-1).
pub const SITE_LANGUAGE_LEN: usize = 2;

// =============================================================================
// Settings File Layout
// =============================================================================

/// Section holding the database connection keys.
pub const SECTION_DATABASE: &str = "database";

/// Section holding the site metadata keys.
pub const SECTION_SITE: &str = "site";

/// Required keys of the `[database]` section.
pub const REQUIRED_DATABASE_KEYS: [&str; 7] = [
    "driver", "host", "port", "dbname", "charset", "username", "password",
];

/// Required keys of the `[site]` section.
pub const REQUIRED_SITE_KEYS: [&str; 4] = ["url", "domain", "currency", "language"];

// =============================================================================
// DSN Derivation
// =============================================================================

/// Driver name that selects the PostgreSQL client-encoding DSN clause.
pub const POSTGRES_DRIVER: &str = "pgsql";
