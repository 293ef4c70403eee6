// ndefshare/src/app/mod.rs

//! The emulated NDEF Tag application.
//!
//! Owns the two-file model (Capability Container + NDEF file), processes
//! SELECT / READ BINARY commands, defers read progress until the transport
//! confirms delivery, and drives the registration handshake that makes the
//! tag discoverable.

pub mod events;

pub use events::Event;

use std::collections::{BTreeMap, VecDeque};
use std::convert::TryFrom;

use log::debug;

use crate::constants::{
    CC_FILE_ID, INS_READ_BINARY, INS_SELECT, ISO_CLA, LOCAL_HOST_APP_INTERFACE_VERSION,
    NDEF_FILE_ID, P1_SELECT_BY_FILE_ID, P2_RESPONSE_NONE, P2_SELECT_FILE_FIRST,
};
use crate::protocol::apdu::read_binary_offset;
use crate::protocol::{Apdu, Response, ResponseIdGen};
use crate::registration::{Registration, RegistrationEvent, RegistrationState};
use crate::service::NfcService;
use crate::tag::{File, layout};
use crate::types::{FileId, ResponseId};
use crate::utils::bytes_to_hex;

use events::Snapshot;

/// Emulated NFC Forum Type 4 Tag serving one NDEF message.
///
/// All state is mutated from a single event loop: command processing is
/// synchronous, while registration completions and delivery
/// acknowledgements arrive as separate calls on the same loop. State
/// changes of interest to an embedding layer are queued as [`Event`]s.
pub struct NdefApp<S: NfcService> {
    files: BTreeMap<FileId, File>,
    selected_file: Option<FileId>,
    last_read_id: Option<ResponseId>,
    done: bool,
    ids: ResponseIdGen,
    registration: Registration,
    service: S,
    events: VecDeque<Event>,
}

impl<S: NfcService> NdefApp<S> {
    /// Build the file set for `message` and start the registration
    /// handshake.
    ///
    /// If the message is too large to represent, the engine is deliberately
    /// left in a permanent non-ready state and the handshake is never
    /// started; see [`is_too_much_data`](Self::is_too_much_data).
    pub fn new(message: &[u8], service: S) -> Self {
        let mut files = BTreeMap::new();
        files.insert(CC_FILE_ID, File::new("CC", layout::cc_file_data(message.len())));
        files.insert(NDEF_FILE_ID, File::new("NDEF", layout::ndef_file_data(message)));

        let mut app = Self {
            files,
            selected_file: None,
            last_read_id: None,
            done: false,
            ids: ResponseIdGen::new(),
            registration: Registration::new(),
            service,
            events: VecDeque::new(),
        };
        if !app.is_too_much_data() {
            app.registration.start(&mut app.service);
        }
        app
    }

    /// Version of the local host application interface.
    pub fn interface_version() -> i32 {
        LOCAL_HOST_APP_INTERFACE_VERSION
    }

    // The file table is fixed at construction and always holds both files.
    fn ndef_file(&self) -> &File {
        &self.files[&NDEF_FILE_ID]
    }

    /// An empty NDEF file means the supplied message was too large.
    pub fn is_too_much_data(&self) -> bool {
        self.ndef_file().size() == 0
    }

    /// True once the registration handshake completed.
    pub fn is_ready(&self) -> bool {
        self.registration.is_ready()
    }

    /// Sticky flag, set once the NDEF file was fully confirmed-read.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Total NDEF file size in bytes.
    pub fn bytes_total(&self) -> usize {
        self.ndef_file().size()
    }

    /// NDEF file bytes confirmed as delivered to the reader.
    pub fn bytes_transferred(&self) -> usize {
        self.ndef_file().bytes_read()
    }

    /// Current registration handshake state.
    pub fn registration_state(&self) -> RegistrationState {
        self.registration.state()
    }

    /// Drain the queued state-change events.
    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.drain(..).collect()
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            ready: self.is_ready(),
            done: self.done,
            bytes_transferred: self.bytes_transferred(),
        }
    }

    fn emit_changes(&mut self, before: Snapshot) {
        let after = self.snapshot();
        before.diff_into(&after, &mut self.events);
    }

    /// Process one command APDU. Every dispatch, handled or not, is
    /// answered with exactly one response.
    pub fn process(&mut self, apdu: &Apdu<'_>) -> Response {
        debug!(
            "C-APDU {:02x} {:02x} {:02x} {:02x} [{}] le={}",
            apdu.cla,
            apdu.ins,
            apdu.p1,
            apdu.p2,
            bytes_to_hex(apdu.data),
            apdu.le
        );
        let id = self.ids.next_id();
        if apdu.cla == ISO_CLA {
            match apdu.ins {
                INS_SELECT => return self.select(id, apdu.p1, apdu.p2, apdu.data),
                INS_READ_BINARY => {
                    let response = self.read_binary(id, apdu.p1, apdu.p2, apdu.le);
                    self.last_read_id = Some(response.id());
                    return response;
                }
                _ => {}
            }
        }
        Response::failure(id)
    }

    fn select(&mut self, id: ResponseId, p1: u8, p2: u8, fid_bytes: &[u8]) -> Response {
        if p1 == P1_SELECT_BY_FILE_ID && p2 == (P2_SELECT_FILE_FIRST | P2_RESPONSE_NONE) {
            if let Ok(fid) = FileId::try_from(fid_bytes) {
                if let Some(file) = self.files.get(&fid) {
                    debug!("selected {} {}", fid.to_hex(), file.name());
                    self.selected_file = Some(fid);
                    return Response::success(id, Vec::new());
                }
            }
        }
        debug!("unknown file {}", bytes_to_hex(fid_bytes));
        Response::failure(id)
    }

    fn read_binary(&mut self, id: ResponseId, p1: u8, p2: u8, le: u32) -> Response {
        let Some(offset) = read_binary_offset(p1, p2) else {
            return Response::failure(id);
        };
        let Some(fid) = self.selected_file else {
            return Response::failure(id);
        };
        let Some(file) = self.files.get_mut(&fid) else {
            return Response::failure(id);
        };
        let data = file.read(offset, le as usize).to_vec();
        debug!("{}", bytes_to_hex(&data));
        Response::success(id, data)
    }

    /// Delivery acknowledgement from the transport for response `id`.
    ///
    /// Confirms the selected file's pending read only when the transmission
    /// succeeded and `id` matches the most recent read response; stale or
    /// failed acknowledgements leave the pending range for a retry or a
    /// superseding read.
    pub fn response_status(&mut self, id: ResponseId, ok: bool) {
        debug!(
            "response {} {}",
            id.as_u32(),
            if ok { "ok" } else { "failed" }
        );
        if !ok || self.last_read_id != Some(id) {
            return;
        }
        let Some(fid) = self.selected_file else {
            return;
        };
        let before = self.snapshot();
        debug!("read {} confirmed", id.as_u32());
        if let Some(file) = self.files.get_mut(&fid) {
            file.confirm_read();
        }
        self.emit_changes(before);
    }

    /// A reader session started.
    pub fn started(&mut self, host: &str) {
        debug!("host {} has started", host);
        self.may_be_reset();
    }

    /// The reader session restarted, e.g. the reader re-selected the tag.
    pub fn restarted(&mut self, host: &str) {
        debug!("host {} has been restarted", host);
        self.may_be_done();
        self.may_be_reset();
    }

    /// The reader session ended.
    pub fn stopped(&mut self, host: &str) {
        debug!("host {} left", host);
        self.may_be_done();
        self.may_be_reset();
    }

    /// The application was implicitly selected for a session.
    pub fn implicit_select(&mut self, host: &str) {
        debug!("implicitly selected for {}", host);
    }

    /// The application was selected by AID.
    pub fn selected(&mut self, host: &str) {
        debug!("selected for {}", host);
    }

    /// The application was deselected.
    pub fn deselected(&mut self, host: &str) {
        debug!("deselected for {}", host);
    }

    /// Registration handshake completion from the NFC daemon.
    pub fn registration_event(&mut self, event: RegistrationEvent) {
        let before = self.snapshot();
        self.registration.handle_event(event, &mut self.service);
        self.emit_changes(before);
    }

    // A restarted session cannot be assumed to resume the previous
    // transfer: partial, unfinished progress starts over from byte 0.
    // Confirmed bytes of a *finished* transfer stay confirmed.
    fn may_be_reset(&mut self) {
        let ndef = self.ndef_file();
        if !self.done && !ndef.is_fully_read() && ndef.bytes_read() > 0 {
            let before = self.snapshot();
            if let Some(file) = self.files.get_mut(&NDEF_FILE_ID) {
                file.reset();
            }
            self.emit_changes(before);
        }
    }

    // Sets the sticky done flag at most once, but signals completion every
    // time the file is found fully read, supporting readers that re-read
    // the tag on every tap.
    fn may_be_done(&mut self) {
        if self.ndef_file().is_fully_read() {
            if !self.done {
                self.done = true;
                self.events.push_back(Event::DoneChanged);
            }
            self.events.push_back(Event::TransferComplete);
        }
    }
}

impl<S: NfcService> Drop for NdefApp<S> {
    fn drop(&mut self) {
        self.registration.release(&mut self.service);
    }
}
