//! The driver connection contract.
//!
//! Responsibilities:
//! - Define the capability the resolver needs from a database driver:
//!   open a connection from a DSN, credentials, and an options mapping.
//!
//! Does NOT handle:
//! - Pooling, retries, or timeouts (the driver's business, if anyone's).
//! - DSN construction or validation (see the config crate).
//!
//! Invariants:
//! - `connect` is synchronous and blocking; it returns a live handle or a
//!   `DriverError`, nothing in between.
//! - The handle type is driver-defined and opaque to the resolver.

use secrecy::SecretString;

use crate::error::DriverError;
use crate::options::ConnectionOptions;

/// A synchronous database driver capable of opening connections.
///
/// The resolver hands the driver whatever dsn/username/password it currently
/// holds; unset fields arrive as empty strings and are the driver's to
/// reject. Implementations must not silently accept incomplete credentials.
pub trait DatabaseDriver {
    /// The live connection handle this driver produces.
    type Handle;

    /// Open a connection, or report the driver's own failure verbatim.
    fn connect(
        &self,
        dsn: &str,
        username: &str,
        password: &SecretString,
        options: &ConnectionOptions,
    ) -> Result<Self::Handle, DriverError>;
}
