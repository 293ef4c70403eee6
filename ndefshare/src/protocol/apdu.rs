// ndefshare/src/protocol/apdu.rs

use crate::constants::{
    INS_READ_BINARY, INS_SELECT, ISO_CLA, P1_SELECT_BY_FILE_ID, P2_RESPONSE_NONE,
    P2_SELECT_FILE_FIRST,
};

/// One command APDU as delivered by the HCE transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Apdu<'a> {
    /// Command class; only [`ISO_CLA`] is handled.
    pub cla: u8,
    /// Instruction byte.
    pub ins: u8,
    /// Parameter 1.
    pub p1: u8,
    /// Parameter 2.
    pub p2: u8,
    /// Command data field (the file id for SELECT).
    pub data: &'a [u8],
    /// Expected response length (Le); zero means "to end of file"
    /// for READ BINARY.
    pub le: u32,
}

impl<'a> Apdu<'a> {
    /// Assemble an APDU from the transport's call arguments.
    pub fn new(cla: u8, ins: u8, p1: u8, p2: u8, data: &'a [u8], le: u32) -> Self {
        Self {
            cla,
            ins,
            p1,
            p2,
            data,
            le,
        }
    }

    /// SELECT-by-file-id command for the given identifier bytes.
    pub fn select(file_id: &'a [u8]) -> Self {
        Self::new(
            ISO_CLA,
            INS_SELECT,
            P1_SELECT_BY_FILE_ID,
            P2_SELECT_FILE_FIRST | P2_RESPONSE_NONE,
            file_id,
            0,
        )
    }

    /// READ BINARY with the offset encoded in P1/P2.
    pub fn read_binary(offset: u16, le: u32) -> Self {
        Self::new(
            ISO_CLA,
            INS_READ_BINARY,
            (offset >> 8) as u8,
            offset as u8,
            &[],
            le,
        )
    }
}

/// Decode the READ BINARY offset from P1/P2.
///
/// With bit 8 of P1 clear, P1-P2 encode a fifteen-bit offset from zero to
/// 32767. A set bit 8 selects an addressing mode this tag does not support,
/// yielding `None`.
pub fn read_binary_offset(p1: u8, p2: u8) -> Option<usize> {
    if p1 & 0x80 == 0 {
        Some(((p1 as usize) << 8) | p2 as usize)
    } else {
        None
    }
}
