// ndefshare/src/service/mod.rs

//! Boundary to the external NFC coordination daemon.

pub mod mock;
pub mod traits;

pub use traits::NfcService;
