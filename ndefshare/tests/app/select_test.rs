#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use ndefshare::constants::{CC_EF, NDEF_EF};
use ndefshare::protocol::Apdu;
use ndefshare::test_support::mock_app;

#[test]
fn select_by_file_id_succeeds_for_both_files() {
    for fid in [CC_EF, NDEF_EF] {
        let (mut app, _svc) = mock_app(fixtures::SAMPLE_MESSAGE);
        let resp = app.process(&Apdu::new(0x00, 0xa4, 0x00, 0x0c, &fid, 0));
        assert_eq!(resp.status_word().as_u16(), 0x9000);
        assert!(resp.payload().is_empty());
    }
}

#[test]
fn select_rejects_wrong_parameters() {
    let (mut app, _svc) = mock_app(fixtures::SAMPLE_MESSAGE);
    // Wrong P1 (select by DF name).
    let resp = app.process(&Apdu::new(0x00, 0xa4, 0x04, 0x0c, &CC_EF, 0));
    assert_eq!(resp.status_word().as_u16(), 0x6f00);
    // Wrong P2 (response data requested).
    let resp = app.process(&Apdu::new(0x00, 0xa4, 0x00, 0x00, &CC_EF, 0));
    assert_eq!(resp.status_word().as_u16(), 0x6f00);
}

#[test]
fn select_rejects_unknown_file_id() {
    let (mut app, _svc) = mock_app(fixtures::SAMPLE_MESSAGE);
    let resp = app.process(&Apdu::select(&[0xe1, 0x05]));
    assert_eq!(resp.status_word().as_u16(), 0x6f00);
}

#[test]
fn select_rejects_malformed_file_id() {
    let (mut app, _svc) = mock_app(fixtures::SAMPLE_MESSAGE);
    assert_eq!(app.process(&Apdu::select(&[0xe1])).status_word().as_u16(), 0x6f00);
    assert_eq!(
        app.process(&Apdu::select(&[0xe1, 0x03, 0x00]))
            .status_word()
            .as_u16(),
        0x6f00
    );
}

#[test]
fn failed_select_leaves_selection_unchanged() {
    let (mut app, _svc) = mock_app(fixtures::SAMPLE_MESSAGE);
    assert_eq!(app.process(&Apdu::select(&CC_EF)).status_word().as_u16(), 0x9000);
    assert_eq!(
        app.process(&Apdu::select(&[0xe1, 0x05]))
            .status_word()
            .as_u16(),
        0x6f00
    );
    // A read still serves the previously selected CC file.
    let resp = app.process(&fixtures::read_all());
    assert_eq!(resp.status_word().as_u16(), 0x9000);
    assert_eq!(resp.payload().len(), 15);
}

#[test]
fn select_switches_between_files() {
    let (mut app, _svc) = mock_app(fixtures::SAMPLE_MESSAGE);
    app.process(&Apdu::select(&CC_EF));
    assert_eq!(app.process(&fixtures::read_all()).payload().len(), 15);
    app.process(&Apdu::select(&NDEF_EF));
    assert_eq!(app.process(&fixtures::read_all()).payload().len(), 12);
}
