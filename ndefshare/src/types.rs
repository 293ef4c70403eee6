// ndefshare/src/types.rs

use crate::Error;
use std::convert::TryFrom;

/// Elementary file identifier - Newtype Pattern (2 bytes, big-endian on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FileId([u8; 2]);

impl FileId {
    /// Wrap raw identifier bytes.
    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    /// Identifier bytes as sent in the SELECT data field.
    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    /// Hex rendering for log output.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for FileId {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 2 {
            return Err(Error::InvalidLength {
                expected: 2,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 2];
        arr.copy_from_slice(&bytes[..2]);
        Ok(Self(arr))
    }
}

/// ISO/IEC 7816-4 status word (SW1/SW2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusWord([u8; 2]);

impl StatusWord {
    /// 9000 - Normal processing
    pub const OK: Self = Self([0x90, 0x00]);
    /// 6F00 - Failure (No precise diagnosis)
    pub const FAILURE: Self = Self([0x6f, 0x00]);

    /// Wrap raw SW1/SW2 bytes.
    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    /// SW1 byte.
    pub fn sw1(&self) -> u8 {
        self.0[0]
    }

    /// SW2 byte.
    pub fn sw2(&self) -> u8 {
        self.0[1]
    }

    /// Combined big-endian value, e.g. `0x9000`.
    pub fn as_u16(&self) -> u16 {
        u16::from_be_bytes(self.0)
    }
}

/// Response correlation id (u32)
///
/// Ids produced by the engine are never zero; zero only ever appears in
/// acknowledgements for responses this engine did not produce, which the
/// confirmation logic ignores by id comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResponseId(u32);

impl ResponseId {
    /// Wrap a raw correlation id received from the transport.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw id value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

/// Correlation id for a granted listening/polling mode (u32)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeId(u32);

impl ModeId {
    /// Wrap a raw mode grant id returned by the NFC daemon.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw id value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

/// Correlation id for a granted technology set (u32)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TechId(u32);

impl TechId {
    /// Wrap a raw technology grant id returned by the NFC daemon.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw id value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}
