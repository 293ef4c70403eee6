// ndefshare/src/app/events.rs

use std::collections::VecDeque;

/// Externally observable engine event, delivered through
/// [`NdefApp::take_events`](crate::app::NdefApp::take_events).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// The registration handshake completed; the tag is discoverable.
    ReadyChanged,
    /// The sticky done flag flipped (fires at most once per session).
    DoneChanged,
    /// The NDEF file's confirmed byte count changed.
    BytesTransferredChanged,
    /// The NDEF file is fully read. Repeats on every re-read, even after
    /// the done flag was already set.
    TransferComplete,
}

/// Observable-state snapshot taken before a compound mutation; comparing
/// two snapshots yields exactly the change events to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Snapshot {
    pub ready: bool,
    pub done: bool,
    pub bytes_transferred: usize,
}

impl Snapshot {
    /// Queue the change events for the transition `self` -> `after`.
    pub(crate) fn diff_into(&self, after: &Snapshot, out: &mut VecDeque<Event>) {
        if self.ready != after.ready {
            out.push_back(Event::ReadyChanged);
        }
        if self.done != after.done {
            out.push_back(Event::DoneChanged);
        }
        if self.bytes_transferred != after.bytes_transferred {
            out.push_back(Event::BytesTransferredChanged);
        }
    }
}
