// ndefshare/src/protocol/mod.rs

//! ISO/IEC 7816-4 command/response surface of the emulated tag.

pub mod apdu;
pub mod response;

pub use apdu::Apdu;
pub use response::{Response, ResponseIdGen};
