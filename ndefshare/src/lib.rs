// ndefshare/src/lib.rs

//! ndefshare
//!
//! NFC Forum Type 4 Tag emulation engine: serves a single NDEF message to
//! an external reader over a host-card-emulation channel, tracking which
//! bytes the reader actually received.
#![warn(missing_docs)]

pub mod app;
pub mod constants;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod registration;
pub mod service;
pub mod tag;
pub mod test_support;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
