//! Fixed-Layout Frame Format
//!
//! Layout:
//! ┌──────────────┬──────────────┬─────────────────────────────┐
//! │ magic (i32)  │ length (i32) │ payload (`length` bytes)    │
//! │ [0, 4)       │ [4, 8)       │ [8, 8 + length)             │
//! └──────────────┴──────────────┴─────────────────────────────┘
//!
//! Semua integer little-endian. Magic adalah tag opaque, framer
//! tidak pernah menginterpretasikannya.

/// Ukuran header: magic + length
pub const HEADER_SIZE: usize = 8;
/// Kapasitas default frame buffer
pub const DEFAULT_CAPACITY: usize = 8200;
/// Payload terbesar yang muat di buffer default (8192)
pub const MAX_PAYLOAD_SIZE: usize = DEFAULT_CAPACITY - HEADER_SIZE;

/// Frame Header - fixed 8 bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameHeader {
    /// Tag dari caller, pass-through
    pub magic: i32,
    /// Panjang payload dalam bytes
    pub length: i32,
}

impl FrameHeader {
    #[inline(always)]
    pub fn new(magic: i32, length: i32) -> Self {
        Self { magic, length }
    }

    /// Serialize ke 8 bytes little-endian
    #[inline(always)]
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[0..4].copy_from_slice(&self.magic.to_le_bytes());
        out[4..8].copy_from_slice(&self.length.to_le_bytes());
        out
    }

    /// Parse header dari awal buffer.
    ///
    /// Returns `None` jika buffer lebih pendek dari `HEADER_SIZE`.
    /// Tidak ada validasi length di sini; itu tugas `Decoder`.
    #[inline(always)]
    pub fn from_bytes(buf: &[u8]) -> Option<Self> {
        if buf.len() < HEADER_SIZE {
            return None;
        }
        let magic = i32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
        let length = i32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
        Some(Self { magic, length })
    }

    /// Total frame size (header + payload), `None` untuk length negatif
    #[inline(always)]
    pub fn total_size(&self) -> Option<usize> {
        usize::try_from(self.length)
            .ok()
            .map(|len| HEADER_SIZE + len)
    }
}

/// Decoded frame yang memiliki payload-nya sendiri
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    pub magic: i32,
    pub length: i32,
    pub payload: Vec<u8>,
}

impl Frame {
    #[inline]
    pub fn header(&self) -> FrameHeader {
        FrameHeader::new(self.magic, self.length)
    }

    /// Payload sebagai UTF-8, jika valid
    pub fn payload_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.payload).ok()
    }
}

/// Zero-copy view ke frame di dalam buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRef<'a> {
    pub header: FrameHeader,
    pub payload: &'a [u8],
}

impl FrameRef<'_> {
    /// Copy payload keluar dari buffer
    pub fn to_frame(&self) -> Frame {
        Frame {
            magic: self.header.magic,
            length: self.header.length,
            payload: self.payload.to_vec(),
        }
    }
}
