// ndefshare/src/registration.rs

//! Registration handshake with the NFC coordination daemon.
//!
//! Claiming card-emulation duty takes three asynchronous requests, issued
//! strictly one after another:
//!
//! 1. `RegisterLocalHostApp("/ndefshare")` — announce the endpoint with the
//!    NDEF Tag Application AID and the implicit-selection flag;
//! 2. `RequestMode` — enable card-emulation listening, disable
//!    reader/writer polling;
//! 3. `RequestTechs` — claim NFC-A exclusively.
//!
//! A failure at any step halts the sequence (one warning, no retry).
//! Teardown releases whatever was acquired, in reverse order.

use derive_more::Display;
use log::{debug, warn};

use crate::constants::{
    APP_NAME, APP_PATH, MODE_CARD_EMULATION, MODE_READER_WRITER, NDEF_AID,
    REGISTER_FLAGS_ALLOW_IMPLICIT_SELECT, TECH_NFC_A, TECHS_ALL_BUT_NFC_A,
};
use crate::service::NfcService;
use crate::types::{ModeId, TechId};

/// Handshake progress.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RegistrationState {
    /// Not started (oversized message, or not yet kicked off).
    Idle,
    /// `RegisterLocalHostApp` issued, completion pending.
    AwaitingRegister,
    /// `RequestMode` issued, grant pending.
    AwaitingMode,
    /// `RequestTechs` issued, grant pending.
    AwaitingTechs,
    /// All three resources acquired; the tag is discoverable.
    Ready,
    /// A step failed; the sequence never advances past this.
    Failed,
}

/// Completion of an asynchronous daemon request, fed back into the engine
/// by whatever owns the bus connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationEvent {
    /// `RegisterLocalHostApp` succeeded.
    Registered,
    /// `RegisterLocalHostApp` failed.
    RegisterFailed(String),
    /// `RequestMode` succeeded with this grant id.
    ModeGranted(ModeId),
    /// `RequestMode` failed.
    ModeFailed(String),
    /// `RequestTechs` succeeded with this grant id.
    TechsGranted(TechId),
    /// `RequestTechs` failed.
    TechsFailed(String),
}

/// The handshake state machine plus the resources it has acquired so far,
/// kept separately from the state so teardown can release exactly what was
/// granted no matter where the sequence stopped.
#[derive(Debug, Default)]
pub struct Registration {
    state: RegistrationState,
    registered_app: bool,
    mode_id: Option<ModeId>,
    tech_id: Option<TechId>,
}

impl Default for RegistrationState {
    fn default() -> Self {
        Self::Idle
    }
}

impl Registration {
    /// Fresh, idle machine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current handshake state.
    pub fn state(&self) -> RegistrationState {
        self.state
    }

    /// True once all three resources are held.
    pub fn is_ready(&self) -> bool {
        self.state == RegistrationState::Ready
    }

    /// Issue the first request. Only meaningful from `Idle`.
    pub fn start(&mut self, service: &mut dyn NfcService) {
        if self.state != RegistrationState::Idle {
            return;
        }
        match service.register_local_host_app(
            APP_PATH,
            APP_NAME,
            &NDEF_AID,
            REGISTER_FLAGS_ALLOW_IMPLICIT_SELECT,
        ) {
            Ok(()) => self.state = RegistrationState::AwaitingRegister,
            Err(e) => {
                warn!("{}", e);
                self.state = RegistrationState::Failed;
            }
        }
    }

    /// Advance the machine on a completion event, issuing the next request
    /// where the sequence continues. Returns true when this event completed
    /// the handshake.
    pub fn handle_event(&mut self, event: RegistrationEvent, service: &mut dyn NfcService) -> bool {
        match (self.state, event) {
            (RegistrationState::AwaitingRegister, RegistrationEvent::Registered) => {
                self.registered_app = true;
                debug!("registered ndef share endpoint at {}", APP_PATH);
                match service.request_mode(MODE_CARD_EMULATION, MODE_READER_WRITER) {
                    Ok(()) => self.state = RegistrationState::AwaitingMode,
                    Err(e) => {
                        warn!("{}", e);
                        self.state = RegistrationState::Failed;
                    }
                }
            }
            (RegistrationState::AwaitingMode, RegistrationEvent::ModeGranted(id)) => {
                self.mode_id = Some(id);
                debug!("CE mode request {}", id.as_u32());
                match service.request_techs(TECH_NFC_A, TECHS_ALL_BUT_NFC_A) {
                    Ok(()) => self.state = RegistrationState::AwaitingTechs,
                    Err(e) => {
                        warn!("{}", e);
                        self.state = RegistrationState::Failed;
                    }
                }
            }
            (RegistrationState::AwaitingTechs, RegistrationEvent::TechsGranted(id)) => {
                self.tech_id = Some(id);
                debug!("NFC-A tech request {}", id.as_u32());
                self.state = RegistrationState::Ready;
                return true;
            }
            (RegistrationState::AwaitingRegister, RegistrationEvent::RegisterFailed(reason))
            | (RegistrationState::AwaitingMode, RegistrationEvent::ModeFailed(reason))
            | (RegistrationState::AwaitingTechs, RegistrationEvent::TechsFailed(reason)) => {
                warn!("registration halted in {}: {}", self.state, reason);
                self.state = RegistrationState::Failed;
            }
            (state, event) => {
                // Stale or out-of-order completion; nothing to advance.
                debug!("ignoring {:?} in state {}", event, state);
            }
        }
        false
    }

    /// Release whatever was acquired, in reverse order. Each request is
    /// fire-and-forget; issue failures are logged and skipped.
    pub fn release(&mut self, service: &mut dyn NfcService) {
        if let Some(id) = self.tech_id.take() {
            if let Err(e) = service.release_techs(id) {
                warn!("{}", e);
            }
        }
        if let Some(id) = self.mode_id.take() {
            if let Err(e) = service.release_mode(id) {
                warn!("{}", e);
            }
        }
        if self.registered_app {
            self.registered_app = false;
            if let Err(e) = service.unregister_local_host_app(APP_PATH) {
                warn!("{}", e);
            }
        }
        self.state = RegistrationState::Idle;
    }
}
