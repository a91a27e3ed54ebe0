//! Database driver seam for Sitekit.
//!
//! This crate defines the contract between the configuration resolver and
//! whatever database driver the application links in: the `DatabaseDriver`
//! trait, the driver options mapping, and the passthrough error type.

mod driver;
mod error;
mod options;

pub use driver::DatabaseDriver;
pub use error::DriverError;
pub use options::{ConnectionOptions, DriverOption, OptionValue, default_connection_options};
