// ndefshare/src/tag/layout.rs

//! Byte images of the two files the emulated tag serves.

use log::warn;

use crate::constants::{CC_NDEF_SIZE_OFFSET, CC_TEMPLATE, MAX_NDEF_FILE_SIZE, MAX_NDEF_MESSAGE_SIZE};

/// Build the Capability Container file for an NDEF message of the given
/// length.
///
/// The maximum NDEF file size field is patched big-endian into the fixed
/// template. An oversized message leaves the field unpatched; the CC then
/// describes a file that will never be exposed.
pub fn cc_file_data(message_len: usize) -> Vec<u8> {
    let mut data = CC_TEMPLATE.to_vec();
    let file_len = message_len + 2; // Extra 2 bytes for the message size

    if file_len <= MAX_NDEF_FILE_SIZE {
        data[CC_NDEF_SIZE_OFFSET] = (file_len >> 8) as u8;
        data[CC_NDEF_SIZE_OFFSET + 1] = file_len as u8;
    } else {
        warn!("NDEF message too large: {} byte(s)", message_len);
    }
    data
}

/// Build the NDEF file: 2-byte big-endian message length followed by the
/// raw message. Yields an empty buffer when the message does not fit.
pub fn ndef_file_data(message: &[u8]) -> Vec<u8> {
    let mut data = Vec::new();

    if message.len() <= MAX_NDEF_MESSAGE_SIZE {
        data.reserve(message.len() + 2);
        data.extend_from_slice(&(message.len() as u16).to_be_bytes());
        data.extend_from_slice(message);
    }
    data
}
