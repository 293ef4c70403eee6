// ndefshare/src/tag/file.rs

use log::debug;
use std::ops::Range;

/// A fixed-size emulated tag file with per-byte confirmed-read tracking.
///
/// `read` only stages a pending byte range; nothing counts as transferred
/// until `confirm_read` commits it after the transport has acknowledged
/// delivery. A new `read` supersedes any pending range that was never
/// confirmed. The buffer is never resized after construction.
#[derive(Debug, Clone)]
pub struct File {
    name: &'static str,
    data: Vec<u8>,
    // One flag per byte in `data`.
    confirmed: Vec<bool>,
    // Delivered but not yet confirmed; empty when no read is outstanding.
    pending: Range<usize>,
}

impl File {
    /// Create a file over the given content.
    pub fn new(name: &'static str, data: Vec<u8>) -> Self {
        let confirmed = vec![false; data.len()];
        Self {
            name,
            data,
            confirmed,
            pending: 0..0,
        }
    }

    /// Label used in log output only, never in protocol matching.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Total file size in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Number of bytes confirmed as delivered to the reader.
    pub fn bytes_read(&self) -> usize {
        self.confirmed.iter().filter(|&&c| c).count()
    }

    /// True once every byte has been confirmed.
    pub fn is_fully_read(&self) -> bool {
        self.bytes_read() == self.size()
    }

    /// Read a byte range, staging it as the new pending range.
    ///
    /// The offset is clamped to the file size and the range is clipped at
    /// the end of the buffer; `expected == 0` reads to the end. Out-of-range
    /// offsets yield an empty slice rather than an error, matching
    /// permissive reader behavior.
    pub fn read(&mut self, offset: usize, expected: usize) -> &[u8] {
        let off = offset.min(self.data.len());
        let len = if expected == 0 {
            self.data.len() - off
        } else {
            expected
        };
        let end = off.saturating_add(len).min(self.data.len());

        debug!("reading [{}..{}) from {}", off, end, self.name);
        self.pending = off..end;
        &self.data[off..end]
    }

    /// Commit the pending range as confirmed. No-op when nothing is pending.
    pub fn confirm_read(&mut self) {
        let pending = std::mem::replace(&mut self.pending, 0..0);
        for flag in &mut self.confirmed[pending] {
            *flag = true;
        }
        debug!("{} bytes out of {}", self.bytes_read(), self.size());
    }

    /// Discard all progress: confirmed flags and the pending range.
    ///
    /// Used when a reader session restarted with the transfer incomplete,
    /// so the next session starts over from byte 0.
    pub fn reset(&mut self) {
        self.confirmed.fill(false);
        self.pending = 0..0;
    }
}
