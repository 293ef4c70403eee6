// ndefshare/src/constants.rs
//! Common protocol constants used across the crate
//!
//! Capability Container layout ([NFCForum-TS-Type-4-Tag_2.0]):
//!
//! | Offset | Size | Description                                          |
//! |--------|------|------------------------------------------------------|
//! | 0      | 2    | CCLEN (total length, 0x000F-0xFFFE bytes)            |
//! | 2      | 1    | Mapping Version (major/minor 4 bits each)            |
//! | 3      | 2    | MLe (Maximum R-APDU data size)                       |
//! | 5      | 2    | MLc (Maximum C-APDU data size)                       |
//! | 7      | 8    | NDEF File Control TLV                                |
//!
//! NDEF File Control TLV: T=4, L=6, file id (2), maximum NDEF file size (2),
//! read access condition (1), write access condition (1).

use crate::types::FileId;

/// NDEF Tag Application identifier (AID), presented at registration.
pub const NDEF_AID: [u8; 7] = [0xd2, 0x76, 0x00, 0x00, 0x85, 0x01, 0x01];

/// Capability Container elementary file id bytes.
pub const CC_EF: [u8; 2] = [0xe1, 0x03];

/// NDEF elementary file id bytes.
pub const NDEF_EF: [u8; 2] = [0xe1, 0x04];

/// Capability Container file id.
pub const CC_FILE_ID: FileId = FileId::from_bytes(CC_EF);

/// NDEF file id.
pub const NDEF_FILE_ID: FileId = FileId::from_bytes(NDEF_EF);

/// Capability Container template. The maximum NDEF file size field at
/// [`CC_NDEF_SIZE_OFFSET`] is patched per message.
pub const CC_TEMPLATE: [u8; 15] = [
    0x00, 0x0f, // CCLEN
    0x20, // mapping version 2.0
    0xff, 0xff, // MLe
    0xff, 0xff, // MLc
    0x04, 0x06, // NDEF File Control TLV: T, L
    0xe1, 0x04, // file id
    0x00, 0x00, // maximum NDEF file size (patched)
    0x00, // read access
    0xff, // write access
];

/// Offset of the NDEF File Control TLV inside the CC.
pub const CC_NDEF_TLV_OFFSET: usize = 7;

/// Offset of the NDEF file id inside the CC.
pub const CC_NDEF_FID_OFFSET: usize = CC_NDEF_TLV_OFFSET + 2;

/// Offset of the maximum NDEF file size field inside the CC.
pub const CC_NDEF_SIZE_OFFSET: usize = CC_NDEF_TLV_OFFSET + 4;

/// Largest representable NDEF file (length prefix included).
pub const MAX_NDEF_FILE_SIZE: usize = 0xfffe;

/// Largest NDEF message that fits in the file after the 2-byte length prefix.
pub const MAX_NDEF_MESSAGE_SIZE: usize = MAX_NDEF_FILE_SIZE - 2;

/// The only command class this application handles.
pub const ISO_CLA: u8 = 0x00;

/// SELECT instruction byte.
pub const INS_SELECT: u8 = 0xa4;

/// READ BINARY instruction byte.
pub const INS_READ_BINARY: u8 = 0xb0;

/// SELECT P1: select by file identifier.
pub const P1_SELECT_BY_FILE_ID: u8 = 0x00;

/// SELECT P2: first or only occurrence.
pub const P2_SELECT_FILE_FIRST: u8 = 0x00;

/// SELECT P2: no response data expected.
pub const P2_RESPONSE_NONE: u8 = 0x0c;

/// Well-known object path under which the emulation endpoint registers.
pub const APP_PATH: &str = "/ndefshare";

/// Application name presented at registration.
pub const APP_NAME: &str = "NfcShare";

/// Registration flag: allow implicit selection.
pub const REGISTER_FLAGS_ALLOW_IMPLICIT_SELECT: u32 = 0x01;

/// NFC coordination daemon bus name.
pub const NFC_SERVICE_NAME: &str = "org.sailfishos.nfc.daemon";

/// NFC coordination daemon object path.
pub const NFC_SERVICE_PATH: &str = "/";

/// NFC coordination daemon interface.
pub const NFC_SERVICE_INTERFACE: &str = "org.sailfishos.nfc.Daemon";

/// Version of the local host application interface this engine implements.
pub const LOCAL_HOST_APP_INTERFACE_VERSION: i32 = 1;

/// Polling mode bit: P2P Initiator.
pub const MODE_P2P_INITIATOR: u32 = 0x01;

/// Polling mode bit: Reader/Writer.
pub const MODE_READER_WRITER: u32 = 0x02;

/// Listening mode bit: P2P Target.
pub const MODE_P2P_TARGET: u32 = 0x04;

/// Listening mode bit: Card Emulation.
pub const MODE_CARD_EMULATION: u32 = 0x08;

/// Technology bit: NFC-A.
pub const TECH_NFC_A: u32 = 0x01;

/// Technology bit: NFC-B.
pub const TECH_NFC_B: u32 = 0x02;

/// Technology bit: NFC-F.
pub const TECH_NFC_F: u32 = 0x04;

/// Every technology except NFC-A, disallowed at registration.
pub const TECHS_ALL_BUT_NFC_A: u32 = !TECH_NFC_A;
