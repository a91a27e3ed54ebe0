//! Configuration resolution for Sitekit.
//!
//! This crate gathers database connection parameters and site metadata from
//! either direct field assignment or an INI settings file, validates every
//! value, and lazily opens a database connection through an injected
//! [`sitekit_driver::DatabaseDriver`] once the credentials are complete.

pub mod constants;
mod dsn;
mod error;
mod resolver;
mod seed;
mod settings;
mod validate;

pub use dsn::DsnParts;
pub use error::ConfigError;
pub use resolver::ConfigResolver;
pub use seed::ResolverSeed;

// Re-exported so callers only need one crate in scope.
pub use sitekit_driver::{
    ConnectionOptions, DatabaseDriver, DriverError, DriverOption, OptionValue,
};
