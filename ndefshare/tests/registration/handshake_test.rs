#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use ndefshare::app::{Event, NdefApp};
use ndefshare::constants::NDEF_AID;
use ndefshare::registration::{RegistrationEvent, RegistrationState};
use ndefshare::service::mock::{MockNfcService, ServiceCall};
use ndefshare::test_support::{complete_registration, mock_app};
use ndefshare::types::{ModeId, TechId};

#[test]
fn construction_registers_the_endpoint() {
    let (app, svc) = mock_app(fixtures::SAMPLE_MESSAGE);
    assert_eq!(app.registration_state(), RegistrationState::AwaitingRegister);
    assert_eq!(
        svc.borrow().calls,
        vec![ServiceCall::RegisterLocalHostApp {
            path: "/ndefshare".to_string(),
            name: "NfcShare".to_string(),
            aid: NDEF_AID.to_vec(),
            flags: 0x01,
        }]
    );
}

#[test]
fn handshake_steps_issue_requests_in_order() {
    let (mut app, svc) = mock_app(fixtures::SAMPLE_MESSAGE);

    app.registration_event(RegistrationEvent::Registered);
    assert_eq!(app.registration_state(), RegistrationState::AwaitingMode);

    app.registration_event(RegistrationEvent::ModeGranted(ModeId::new(11)));
    assert_eq!(app.registration_state(), RegistrationState::AwaitingTechs);

    app.registration_event(RegistrationEvent::TechsGranted(TechId::new(22)));
    assert!(app.is_ready());
    assert_eq!(app.take_events(), vec![Event::ReadyChanged]);

    assert_eq!(
        &svc.borrow().calls[1..],
        &[
            ServiceCall::RequestMode {
                enable: 0x08,
                disable: 0x02
            },
            ServiceCall::RequestTechs {
                allow: 0x01,
                disallow: 0xffff_fffe
            },
        ]
    );
}

#[test]
fn ready_fires_once() {
    let (mut app, _svc) = mock_app(fixtures::SAMPLE_MESSAGE);
    complete_registration(&mut app);
    assert_eq!(app.take_events(), vec![Event::ReadyChanged]);

    // A duplicate grant is ignored and does not re-fire readiness.
    app.registration_event(RegistrationEvent::TechsGranted(TechId::new(99)));
    assert!(app.take_events().is_empty());
    assert!(app.is_ready());
}

#[test]
fn daemon_failure_halts_the_handshake() {
    let (mut app, svc) = mock_app(fixtures::SAMPLE_MESSAGE);
    app.registration_event(RegistrationEvent::Registered);
    app.registration_event(RegistrationEvent::ModeFailed("mode busy".to_string()));

    assert_eq!(app.registration_state(), RegistrationState::Failed);
    assert!(!app.is_ready());
    assert!(app.take_events().is_empty());
    // Register + RequestMode were issued, nothing after the failure.
    assert_eq!(svc.borrow().calls.len(), 2);
}

#[test]
fn tech_failure_halts_the_handshake() {
    let (mut app, _svc) = mock_app(fixtures::SAMPLE_MESSAGE);
    app.registration_event(RegistrationEvent::Registered);
    app.registration_event(RegistrationEvent::ModeGranted(ModeId::new(11)));
    app.registration_event(RegistrationEvent::TechsFailed("no NFC-A".to_string()));
    assert_eq!(app.registration_state(), RegistrationState::Failed);
    assert!(!app.is_ready());
}

#[test]
fn unissuable_register_fails_at_construction() {
    let service = MockNfcService::shared();
    service.borrow_mut().set_issue_failures(1);
    let app = NdefApp::new(fixtures::SAMPLE_MESSAGE, service.clone());
    assert_eq!(app.registration_state(), RegistrationState::Failed);
    assert!(service.borrow().calls.is_empty());
}
