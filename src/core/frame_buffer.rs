//! Fixed-Capacity Frame Buffer
//!
//! Satu buffer menyimpan tepat satu frame. Encode menimpa dari
//! offset 0, decode adalah pure read tanpa consumption marker.

use tracing::debug;

use crate::error::{DecodeError, EncodeError};
use crate::protocol::{Decoder, Encoder, Frame, FrameRef};

/// Storage untuk satu frame.
///
/// Implementor hanya menyediakan akses ke bytes; encode/decode
/// sudah disediakan oleh default methods.
pub trait FrameStore {
    fn bytes(&self) -> &[u8];

    fn bytes_mut(&mut self) -> &mut [u8];

    #[inline]
    fn capacity(&self) -> usize {
        self.bytes().len()
    }

    /// Tulis frame ke storage. Returns total bytes yang ditulis.
    fn encode(&mut self, magic: i32, declared_length: i32, data: &[u8]) -> Result<usize, EncodeError> {
        let written = Encoder::new(self.bytes_mut())
            .encode(magic, declared_length, data)?
            .len();
        debug!(magic, declared_length, written, "frame packed");
        Ok(written)
    }

    /// Zero-copy view ke frame saat ini
    fn decode_ref(&self) -> Result<FrameRef<'_>, DecodeError> {
        Decoder::new(self.bytes()).decode()
    }

    fn decode(&self) -> Result<Frame, DecodeError> {
        let frame = self.decode_ref()?.to_frame();
        debug!(magic = frame.magic, length = frame.length, "frame unpacked");
        Ok(frame)
    }
}

/// Heap-backed frame buffer, zero-initialized
pub struct FrameBuffer {
    buffer: Box<[u8]>,
}

impl FrameBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: vec![0u8; capacity].into_boxed_slice(),
        }
    }

    /// Kembalikan ke kondisi awal (semua nol)
    pub fn clear(&mut self) {
        self.buffer.fill(0);
    }
}

impl FrameStore for FrameBuffer {
    #[inline(always)]
    fn bytes(&self) -> &[u8] {
        &self.buffer
    }

    #[inline(always)]
    fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }
}
