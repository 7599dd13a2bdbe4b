//! Zero-Allocation Encoder/Decoder
//!
//! Encode dan decode langsung ke buffer milik caller.
//! Semua pengecekan dilakukan sebelum byte pertama ditulis,
//! jadi encode yang gagal tidak pernah merusak frame lama.

use tracing::warn;

use super::frame::{FrameHeader, FrameRef, HEADER_SIZE};
use crate::error::{DecodeError, EncodeError};

/// Encoder di atas buffer fixed-capacity
///
/// Setiap `encode` menulis ulang buffer dari offset 0.
/// Byte setelah akhir frame baru tidak disentuh.
pub struct Encoder<'a> {
    buffer: &'a mut [u8],
}

impl<'a> Encoder<'a> {
    #[inline(always)]
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self { buffer }
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Ruang payload setelah header
    #[inline(always)]
    pub fn available(&self) -> usize {
        self.buffer.len().saturating_sub(HEADER_SIZE)
    }

    /// Validasi frame tanpa menulis apapun.
    ///
    /// Returns jumlah payload bytes yang akan ditulis.
    #[inline(always)]
    pub fn check(&self, declared_length: i32, data: &[u8]) -> Result<usize, EncodeError> {
        let len = match usize::try_from(declared_length) {
            Ok(len) if len > 0 => len,
            _ => {
                return Err(EncodeError::InvalidLength {
                    declared: declared_length,
                })
            }
        };

        let available = self.available();
        if len > available {
            warn!(declared_length, available, "frame length exceeds buffer capacity");
            return Err(EncodeError::BufferOverflow {
                declared: declared_length,
                available,
            });
        }

        if data.len() < len {
            return Err(EncodeError::ShortPayload {
                declared: declared_length,
                actual: data.len(),
            });
        }

        Ok(len)
    }

    /// Encode satu frame ke buffer
    ///
    /// Hanya `declared_length` byte pertama dari `data` yang di-copy.
    /// Returns slice ke frame yang baru ditulis.
    #[inline(always)]
    pub fn encode(
        &mut self,
        magic: i32,
        declared_length: i32,
        data: &[u8],
    ) -> Result<&[u8], EncodeError> {
        let len = self.check(declared_length, data)?;
        let end = HEADER_SIZE + len;

        let header = FrameHeader::new(magic, declared_length);
        self.buffer[..HEADER_SIZE].copy_from_slice(&header.to_bytes());
        self.buffer[HEADER_SIZE..end].copy_from_slice(&data[..len]);

        Ok(&self.buffer[..end])
    }
}

/// Zero-copy decoder
///
/// Pure read: decode berulang pada buffer yang sama selalu
/// menghasilkan frame yang sama.
pub struct Decoder<'a> {
    buffer: &'a [u8],
}

impl<'a> Decoder<'a> {
    #[inline(always)]
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer }
    }

    /// Baca header saja
    #[inline(always)]
    pub fn header(&self) -> Result<FrameHeader, DecodeError> {
        FrameHeader::from_bytes(self.buffer).ok_or(DecodeError::TruncatedHeader {
            len: self.buffer.len(),
        })
    }

    /// Decode frame (zero-copy untuk payload)
    ///
    /// Length field adalah satu-satunya sumber kebenaran untuk
    /// batas payload; tidak ada scanning terminator.
    #[inline(always)]
    pub fn decode(&self) -> Result<FrameRef<'a>, DecodeError> {
        let header = self.header()?;

        let end = match header.total_size() {
            Some(end) if end <= self.buffer.len() => end,
            _ => {
                warn!(
                    length = header.length,
                    capacity = self.buffer.len(),
                    "malformed frame header"
                );
                return Err(DecodeError::MalformedFrame {
                    length: header.length,
                    capacity: self.buffer.len(),
                });
            }
        };

        Ok(FrameRef {
            header,
            payload: &self.buffer[HEADER_SIZE..end],
        })
    }

    /// Remaining bytes setelah frame saat ini
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        match self.header().ok().and_then(|h| h.total_size()) {
            Some(end) => self.buffer.len().saturating_sub(end),
            None => self.buffer.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::frame::DEFAULT_CAPACITY;

    #[test]
    fn test_encode_decode_hello() {
        let mut buf = vec![0u8; DEFAULT_CAPACITY];
        let written = Encoder::new(&mut buf).encode(0x1234, 5, b"hello").unwrap().len();
        assert_eq!(written, 13);

        assert_eq!(&buf[0..4], &0x1234i32.to_le_bytes());
        assert_eq!(&buf[4..8], &5i32.to_le_bytes());
        assert_eq!(&buf[8..13], b"hello");

        let frame = Decoder::new(&buf).decode().unwrap();
        assert_eq!(frame.header.magic, 0x1234);
        assert_eq!(frame.header.length, 5);
        assert_eq!(frame.payload, b"hello");
    }

    #[test]
    fn test_invalid_length_writes_nothing() {
        let mut buf = vec![0xAAu8; 64];
        for len in [0, -1, i32::MIN] {
            let err = Encoder::new(&mut buf).encode(1, len, b"abc").unwrap_err();
            assert_eq!(err, EncodeError::InvalidLength { declared: len });
        }
        assert!(buf.iter().all(|&b| b == 0xAA));
    }

    #[test]
    fn test_overflow_boundary() {
        let mut buf = vec![0u8; DEFAULT_CAPACITY];
        let data = vec![b'x'; 8193];

        let err = Encoder::new(&mut buf).encode(1, 8193, &data).unwrap_err();
        assert_eq!(
            err,
            EncodeError::BufferOverflow {
                declared: 8193,
                available: 8192
            }
        );
        assert!(buf.iter().all(|&b| b == 0));

        let written = Encoder::new(&mut buf)
            .encode(1, 8192, &data[..8192])
            .unwrap()
            .len();
        assert_eq!(written, DEFAULT_CAPACITY);
    }

    #[test]
    fn test_short_payload_rejected() {
        let mut buf = vec![0u8; 64];
        let err = Encoder::new(&mut buf).encode(1, 10, b"abc").unwrap_err();
        assert_eq!(
            err,
            EncodeError::ShortPayload {
                declared: 10,
                actual: 3
            }
        );
    }

    #[test]
    fn test_encode_copies_only_declared_prefix() {
        let mut buf = vec![0u8; 64];
        Encoder::new(&mut buf).encode(9, 3, b"abcdef").unwrap();
        let frame = Decoder::new(&buf).decode().unwrap();
        assert_eq!(frame.payload, b"abc");
        assert_eq!(buf[11], 0);
    }

    #[test]
    fn test_encoder_reuse_overwrites_from_start() {
        let mut buf = vec![0u8; 64];
        Encoder::new(&mut buf).encode(1, 6, b"First!").unwrap();
        Encoder::new(&mut buf).encode(2, 3, b"Two").unwrap();

        let frame = Decoder::new(&buf).decode().unwrap();
        assert_eq!(frame.header.magic, 2);
        assert_eq!(frame.payload, b"Two");
        // Tail lama tetap ada, di luar batas frame
        assert_eq!(&buf[11..14], b"st!");
    }

    #[test]
    fn test_decode_zeroed_buffer() {
        let buf = vec![0u8; DEFAULT_CAPACITY];
        let frame = Decoder::new(&buf).decode().unwrap();
        assert_eq!(frame.header, FrameHeader::default());
        assert!(frame.payload.is_empty());
    }

    #[test]
    fn test_decode_malformed_length() {
        let mut buf = vec![0u8; 32];
        buf[4..8].copy_from_slice(&25i32.to_le_bytes());
        assert_eq!(
            Decoder::new(&buf).decode().unwrap_err(),
            DecodeError::MalformedFrame {
                length: 25,
                capacity: 32
            }
        );

        buf[4..8].copy_from_slice(&(-4i32).to_le_bytes());
        assert!(matches!(
            Decoder::new(&buf).decode(),
            Err(DecodeError::MalformedFrame { length: -4, .. })
        ));
    }

    #[test]
    fn test_decode_truncated_header() {
        let buf = [0u8; 5];
        assert_eq!(
            Decoder::new(&buf).decode().unwrap_err(),
            DecodeError::TruncatedHeader { len: 5 }
        );
    }

    #[test]
    fn test_remaining() {
        let mut buf = vec![0u8; 32];
        Encoder::new(&mut buf).encode(1, 4, b"abcd").unwrap();
        assert_eq!(Decoder::new(&buf).remaining(), 20);
    }
}
