// ndefshare/src/protocol/response.rs

use crate::types::{ResponseId, StatusWord};

/// Immutable result of processing one command APDU.
///
/// The correlation id lets a delivery acknowledgement arriving later refer
/// back to this exact response; the engine only commits read progress once
/// the transport has acknowledged the matching id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    sw: StatusWord,
    payload: Vec<u8>,
    id: ResponseId,
}

impl Response {
    /// Normal processing (9000) with the given payload.
    pub fn success(id: ResponseId, payload: Vec<u8>) -> Self {
        Self {
            sw: StatusWord::OK,
            payload,
            id,
        }
    }

    /// Failure with no precise diagnosis (6F00), empty payload.
    pub fn failure(id: ResponseId) -> Self {
        Self {
            sw: StatusWord::FAILURE,
            payload: Vec::new(),
            id,
        }
    }

    /// Status word of this response.
    pub fn status_word(&self) -> StatusWord {
        self.sw
    }

    /// Response data field.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Correlation id.
    pub fn id(&self) -> ResponseId {
        self.id
    }

    /// Decompose into the `(response, SW1, SW2, response_id)` tuple the
    /// transport returns to the reader side.
    pub fn into_parts(self) -> (Vec<u8>, u8, u8, u32) {
        (
            self.payload,
            self.sw.sw1(),
            self.sw.sw2(),
            self.id.as_u32(),
        )
    }
}

/// Monotonic response id source, one per emulation session.
///
/// Wraps around at `u32::MAX` but never yields zero, so every produced
/// response has a usable correlation id.
#[derive(Debug, Default)]
pub struct ResponseIdGen {
    last: u32,
}

impl ResponseIdGen {
    /// New generator starting before the first id.
    pub fn new() -> Self {
        Self::default()
    }

    /// Next non-zero id.
    pub fn next_id(&mut self) -> ResponseId {
        self.last = self.last.wrapping_add(1);
        if self.last == 0 {
            self.last = 1;
        }
        ResponseId::new(self.last)
    }
}
