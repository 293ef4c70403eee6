// ndefshare/src/error.rs

//! Engine error type.
//!
//! Protocol-level failures (unknown instruction, unmatched file id, bad
//! addressing mode) are not errors: they are answered with a failure
//! [`Response`](crate::protocol::Response). `Error` covers the NFC service
//! boundary and wire-data parsing.

use thiserror::Error;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("nfc service call {method} failed: {reason}")]
    Service {
        method: &'static str,
        reason: String,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
