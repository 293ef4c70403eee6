// ndefshare/src/test_support.rs

//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockNfcService setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::app::NdefApp;
use crate::registration::RegistrationEvent;
use crate::service::mock::MockNfcService;
use crate::types::{ModeId, TechId};

/// Mock service handle shared between an app under test and the test body.
pub type SharedMock = Rc<RefCell<MockNfcService>>;

/// Build an app over `message` backed by a shared mock service, returning
/// both so the test can inspect issued requests, including after drop.
#[doc(hidden)]
pub fn mock_app(message: &[u8]) -> (NdefApp<SharedMock>, SharedMock) {
    let service = MockNfcService::shared();
    let app = NdefApp::new(message, service.clone());
    (app, service)
}

/// Drive the registration handshake to Ready with fixed grant ids.
#[doc(hidden)]
pub fn complete_registration(app: &mut NdefApp<SharedMock>) {
    app.registration_event(RegistrationEvent::Registered);
    app.registration_event(RegistrationEvent::ModeGranted(ModeId::new(1)));
    app.registration_event(RegistrationEvent::TechsGranted(TechId::new(2)));
}
