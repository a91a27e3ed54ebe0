//! Driver options mapping.
//!
//! Responsibilities:
//! - Define the option names a driver recognizes and their value types.
//! - Provide the named default option set used when a caller supplies none.
//!
//! Does NOT handle:
//! - Interpreting the options (each driver decides what to do with them).
//!
//! Invariants:
//! - The mapping is replaced wholesale, never merged; the resolver hands the
//!   driver exactly the map the caller configured.
//! - Iteration order is deterministic (BTreeMap) so derived behavior is
//!   reproducible across runs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Option names recognized across drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriverOption {
    /// How the driver reports failures (e.g. raise on error vs. silent).
    ErrorMode,
    /// Default shape of returned rows (e.g. associative).
    FetchMode,
    /// Whether prepared statements are emulated client-side.
    EmulatePrepares,
}

/// Value assigned to a driver option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Flag(bool),
    Number(i64),
    Text(String),
}

/// The driver options mapping handed to `DatabaseDriver::connect`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionOptions(BTreeMap<DriverOption, OptionValue>);

/// The stock option set: fail loudly, associative rows, real prepares.
pub fn default_connection_options() -> ConnectionOptions {
    let mut map = BTreeMap::new();
    map.insert(
        DriverOption::ErrorMode,
        OptionValue::Text("exception".to_string()),
    );
    map.insert(
        DriverOption::FetchMode,
        OptionValue::Text("assoc".to_string()),
    );
    map.insert(DriverOption::EmulatePrepares, OptionValue::Flag(false));
    ConnectionOptions(map)
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        default_connection_options()
    }
}

impl ConnectionOptions {
    /// Create an empty options mapping.
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Set an option, returning self for chained construction.
    pub fn with(mut self, option: DriverOption, value: OptionValue) -> Self {
        self.0.insert(option, value);
        self
    }

    /// Look up a single option.
    pub fn get(&self, option: DriverOption) -> Option<&OptionValue> {
        self.0.get(&option)
    }

    /// Iterate over the configured options in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = (DriverOption, &OptionValue)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(DriverOption, OptionValue)> for ConnectionOptions {
    fn from_iter<I: IntoIterator<Item = (DriverOption, OptionValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_option_set() {
        let options = ConnectionOptions::default();
        assert_eq!(options.len(), 3);
        assert_eq!(
            options.get(DriverOption::ErrorMode),
            Some(&OptionValue::Text("exception".to_string()))
        );
        assert_eq!(
            options.get(DriverOption::FetchMode),
            Some(&OptionValue::Text("assoc".to_string()))
        );
        assert_eq!(
            options.get(DriverOption::EmulatePrepares),
            Some(&OptionValue::Flag(false))
        );
    }

    #[test]
    fn test_with_overrides_existing_value() {
        let options =
            ConnectionOptions::default().with(DriverOption::EmulatePrepares, OptionValue::Flag(true));
        assert_eq!(
            options.get(DriverOption::EmulatePrepares),
            Some(&OptionValue::Flag(true))
        );
        assert_eq!(options.len(), 3);
    }

    #[test]
    fn test_deserialize_from_json_object() {
        let options: ConnectionOptions = serde_json::from_str(
            r#"{"error_mode": "silent", "emulate_prepares": true, "fetch_mode": 2}"#,
        )
        .unwrap();
        assert_eq!(
            options.get(DriverOption::ErrorMode),
            Some(&OptionValue::Text("silent".to_string()))
        );
        assert_eq!(
            options.get(DriverOption::EmulatePrepares),
            Some(&OptionValue::Flag(true))
        );
        assert_eq!(
            options.get(DriverOption::FetchMode),
            Some(&OptionValue::Number(2))
        );
    }

    #[test]
    fn test_iteration_order_is_deterministic() {
        let keys: Vec<DriverOption> = ConnectionOptions::default()
            .iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(
            keys,
            vec![
                DriverOption::ErrorMode,
                DriverOption::FetchMode,
                DriverOption::EmulatePrepares,
            ]
        );
    }
}
