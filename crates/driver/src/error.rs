//! Error type for driver-level connection failures.
//!
//! Responsibilities:
//! - Carry the driver's own diagnostic message and code, unmodified.
//!
//! Does NOT handle:
//! - Configuration validation errors (see the config crate).
//!
//! Invariants:
//! - The message and code are whatever the underlying driver reported;
//!   nothing is rewritten or translated on the way through.

use thiserror::Error;

/// A connection attempt rejected by the underlying database driver.
///
/// Raised for auth rejections, unreachable hosts, and malformed DSNs alike;
/// distinguishing those is the driver's business, not ours.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("driver error {code}: {message}")]
pub struct DriverError {
    /// Diagnostic message exactly as the driver produced it.
    pub message: String,
    /// Driver-specific error code.
    pub code: i32,
}

impl DriverError {
    /// Create a driver error from a driver-reported message and code.
    pub fn new(message: impl Into<String>, code: i32) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }
}
