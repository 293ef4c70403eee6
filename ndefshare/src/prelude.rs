// ndefshare/src/prelude.rs

//! Convenient re-exports of the engine's main types.

pub use crate::app::{Event, NdefApp};
pub use crate::protocol::{Apdu, Response};
pub use crate::registration::{RegistrationEvent, RegistrationState};
pub use crate::service::NfcService;
