//! Format validators for site metadata.
//!
//! Responsibilities:
//! - Gate every site metadata value behind a pure format check.
//!
//! Does NOT handle:
//! - Credential or DSN content (the driver rejects those at connect time).
//! - Normalization; accepted values are stored exactly as supplied.
//!
//! Invariants:
//! - Both input modes (direct setters and the settings-file loader) funnel
//!   through these functions, so the two modes cannot diverge.
//! - Length rules count characters, not bytes.

use crate::constants::{SITE_CURRENCY_MAX_LEN, SITE_CURRENCY_MIN_LEN, SITE_LANGUAGE_LEN};
use crate::error::ConfigError;

/// Longest domain name accepted, per RFC 1035.
const MAX_DOMAIN_LEN: usize = 253;

/// Longest single domain label accepted, per RFC 1035.
const MAX_LABEL_LEN: usize = 63;

/// Require a syntactically valid absolute URL with a scheme and a host.
pub(crate) fn site_url(value: &str) -> Result<(), ConfigError> {
    let rejected = || ConfigError::InvalidInput {
        field: "site_url",
        value: value.to_string(),
    };

    let parsed = url::Url::parse(value).map_err(|_| rejected())?;
    if parsed.host_str().is_none() {
        return Err(rejected());
    }
    Ok(())
}

/// Require a syntactically valid bare domain name (labels only, no scheme).
pub(crate) fn site_domain(value: &str) -> Result<(), ConfigError> {
    if is_valid_domain(value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidInput {
            field: "site_domain",
            value: value.to_string(),
        })
    }
}

/// Require a currency code of 3 or 4 characters.
pub(crate) fn site_currency(value: &str) -> Result<(), ConfigError> {
    let length = value.chars().count();
    if length == SITE_CURRENCY_MIN_LEN || length == SITE_CURRENCY_MAX_LEN {
        Ok(())
    } else {
        Err(ConfigError::InvalidInput {
            field: "site_currency",
            value: value.to_string(),
        })
    }
}

/// Require a language code of exactly 2 characters.
pub(crate) fn site_language(value: &str) -> Result<(), ConfigError> {
    if value.chars().count() == SITE_LANGUAGE_LEN {
        Ok(())
    } else {
        Err(ConfigError::InvalidInput {
            field: "site_language",
            value: value.to_string(),
        })
    }
}

/// Check domain syntax: dot-separated labels of letters, digits, and
/// interior hyphens.
fn is_valid_domain(value: &str) -> bool {
    if value.is_empty() || value.len() > MAX_DOMAIN_LEN {
        return false;
    }
    value.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    if label.is_empty() || label.len() > MAX_LABEL_LEN {
        return false;
    }
    if label.starts_with('-') || label.ends_with('-') {
        return false;
    }
    label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
