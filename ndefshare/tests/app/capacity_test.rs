#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use ndefshare::constants::{CC_EF, MAX_NDEF_MESSAGE_SIZE, NDEF_EF};
use ndefshare::protocol::Apdu;
use ndefshare::registration::RegistrationState;
use ndefshare::test_support::mock_app;

#[test]
fn cc_advertises_the_patched_file_size() -> anyhow::Result<()> {
    let (mut app, _svc) = mock_app(fixtures::SAMPLE_MESSAGE);
    app.process(&Apdu::select(&CC_EF));
    let resp = app.process(&fixtures::read_all());
    // 15-byte CC with the 12-byte NDEF file size patched in big-endian.
    assert_eq!(hex::encode(resp.payload()), "000f20ffffffff0406e104000c00ff");
    assert!(!app.is_too_much_data());
    Ok(())
}

#[test]
fn maximum_message_size_still_fits() {
    let message = vec![0x33u8; MAX_NDEF_MESSAGE_SIZE];
    let (app, svc) = mock_app(&message);
    assert!(!app.is_too_much_data());
    assert_eq!(app.bytes_total(), MAX_NDEF_MESSAGE_SIZE + 2);
    assert_eq!(svc.borrow().calls.len(), 1);
}

#[test]
fn oversized_message_disables_the_engine() {
    let message = vec![0x33u8; MAX_NDEF_MESSAGE_SIZE + 1];
    let (app, svc) = mock_app(&message);
    assert!(app.is_too_much_data());
    assert_eq!(app.bytes_total(), 0);
    assert!(!app.is_ready());
    assert_eq!(app.registration_state(), RegistrationState::Idle);
    // The registration handshake was never started.
    assert!(svc.borrow().calls.is_empty());
}

#[test]
fn oversized_message_leaves_an_empty_readable_file() {
    let message = vec![0x33u8; MAX_NDEF_MESSAGE_SIZE + 1];
    let (mut app, _svc) = mock_app(&message);
    // The NDEF file is still selectable but has nothing to serve.
    let resp = app.process(&Apdu::select(&NDEF_EF));
    assert_eq!(resp.status_word().as_u16(), 0x9000);
    let resp = app.process(&fixtures::read_all());
    assert_eq!(resp.status_word().as_u16(), 0x9000);
    assert!(resp.payload().is_empty());
}

#[test]
fn empty_message_is_not_too_much_data() {
    let (app, svc) = mock_app(&[]);
    assert!(!app.is_too_much_data());
    assert_eq!(app.bytes_total(), 2);
    assert_eq!(svc.borrow().calls.len(), 1);
}
