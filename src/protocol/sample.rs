//! Fixed-Size Sample Record
//!
//! Layout (little-endian):
//! ┌──────────┬────────────┬──────────────────┬──────────────────────────┐
//! │ idx (u32)│ magic (u32)│ data_length (u32)│ data [u8; 8192], padded  │
//! └──────────┴────────────┴──────────────────┴──────────────────────────┘
//!
//! Berbeda dengan frame, record ini selalu berukuran tetap dan
//! membawa `idx` sebagai field nyata.

use crate::error::SampleError;

/// Ukuran field data, selalu di-pad sampai ukuran ini
pub const SAMPLE_DATA_SIZE: usize = 8192;
/// Header: idx + magic + data_length
pub const SAMPLE_HEADER_SIZE: usize = 12;
/// Total record size (8204 bytes)
pub const SAMPLE_SIZE: usize = SAMPLE_HEADER_SIZE + SAMPLE_DATA_SIZE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleRecord {
    pub idx: u32,
    pub magic: u32,
    data_length: u32,
    data: Box<[u8; SAMPLE_DATA_SIZE]>,
}

impl SampleRecord {
    /// Membuat record baru, data di-pad dengan nol
    pub fn new(idx: u32, magic: u32, data: &[u8]) -> Result<Self, SampleError> {
        if data.len() > SAMPLE_DATA_SIZE {
            return Err(SampleError::DataTooLong {
                len: data.len(),
                max: SAMPLE_DATA_SIZE,
            });
        }

        let mut padded = Box::new([0u8; SAMPLE_DATA_SIZE]);
        padded[..data.len()].copy_from_slice(data);

        Ok(Self {
            idx,
            magic,
            // data.len() <= 8192, selalu muat di u32
            data_length: data.len() as u32,
            data: padded,
        })
    }

    #[inline]
    pub fn data_length(&self) -> u32 {
        self.data_length
    }

    /// Data tanpa padding
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data[..self.data_length as usize]
    }

    /// Tulis record ke `out`, yang harus tepat `SAMPLE_SIZE` bytes
    pub fn write_to(&self, out: &mut [u8]) -> Result<(), SampleError> {
        if out.len() != SAMPLE_SIZE {
            return Err(SampleError::WrongSize {
                expected: SAMPLE_SIZE,
                actual: out.len(),
            });
        }

        out[0..4].copy_from_slice(&self.idx.to_le_bytes());
        out[4..8].copy_from_slice(&self.magic.to_le_bytes());
        out[8..12].copy_from_slice(&self.data_length.to_le_bytes());
        out[SAMPLE_HEADER_SIZE..].copy_from_slice(&self.data[..]);
        Ok(())
    }

    /// Encode ke buffer baru
    pub fn encode(idx: u32, magic: u32, data: &[u8]) -> Result<Vec<u8>, SampleError> {
        let record = Self::new(idx, magic, data)?;
        let mut out = vec![0u8; SAMPLE_SIZE];
        record.write_to(&mut out)?;
        Ok(out)
    }

    /// Parse record dari tepat `SAMPLE_SIZE` bytes
    pub fn decode(bytes: &[u8]) -> Result<Self, SampleError> {
        if bytes.len() != SAMPLE_SIZE {
            return Err(SampleError::WrongSize {
                expected: SAMPLE_SIZE,
                actual: bytes.len(),
            });
        }

        let read_u32 =
            |at: usize| u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]]);
        let idx = read_u32(0);
        let magic = read_u32(4);
        let data_length = read_u32(8);

        if data_length as usize > SAMPLE_DATA_SIZE {
            return Err(SampleError::BadLength {
                declared: data_length,
                max: SAMPLE_DATA_SIZE,
            });
        }

        // Padding di luar data_length dibuang, tetap nol
        let len = data_length as usize;
        let mut data = Box::new([0u8; SAMPLE_DATA_SIZE]);
        data[..len].copy_from_slice(&bytes[SAMPLE_HEADER_SIZE..SAMPLE_HEADER_SIZE + len]);

        Ok(Self {
            idx,
            magic,
            data_length,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_size() {
        assert_eq!(SAMPLE_SIZE, 8204);
    }

    #[test]
    fn test_sample_full_record() {
        let data = vec![b'b'; SAMPLE_DATA_SIZE];
        let bytes = SampleRecord::encode(3, 0x12345678, &data).unwrap();

        assert_eq!(&bytes[0..4], &3u32.to_le_bytes());
        assert_eq!(&bytes[4..8], &0x12345678u32.to_le_bytes());
        assert_eq!(&bytes[8..12], &8192u32.to_le_bytes());

        let record = SampleRecord::decode(&bytes).unwrap();
        assert_eq!(record.idx, 3);
        assert_eq!(record.magic, 0x12345678);
        assert_eq!(record.data(), &data[..]);
    }

    #[test]
    fn test_sample_short_data_is_padded() {
        let bytes = SampleRecord::encode(0, 1, b"abc").unwrap();
        assert_eq!(bytes.len(), SAMPLE_SIZE);
        assert!(bytes[SAMPLE_HEADER_SIZE + 3..].iter().all(|&b| b == 0));
        assert_eq!(SampleRecord::decode(&bytes).unwrap().data(), b"abc");
    }

    #[test]
    fn test_sample_padding_ignored_on_decode() {
        let clean = SampleRecord::encode(5, 9, b"abc").unwrap();
        let mut dirty = clean.clone();
        dirty[SAMPLE_HEADER_SIZE + 3..].fill(0xEE);

        let a = SampleRecord::decode(&clean).unwrap();
        let b = SampleRecord::decode(&dirty).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, SampleRecord::new(5, 9, b"abc").unwrap());

        let mut out = vec![0xFFu8; SAMPLE_SIZE];
        b.write_to(&mut out).unwrap();
        assert_eq!(out, clean);
    }

    #[test]
    fn test_sample_errors() {
        let too_long = vec![0u8; SAMPLE_DATA_SIZE + 1];
        assert_eq!(
            SampleRecord::encode(0, 0, &too_long).unwrap_err(),
            SampleError::DataTooLong {
                len: 8193,
                max: SAMPLE_DATA_SIZE
            }
        );

        assert!(matches!(
            SampleRecord::decode(&[0u8; 12]),
            Err(SampleError::WrongSize { actual: 12, .. })
        ));

        let mut bytes = SampleRecord::encode(0, 0, b"x").unwrap();
        bytes[8..12].copy_from_slice(&9000u32.to_le_bytes());
        assert_eq!(
            SampleRecord::decode(&bytes).unwrap_err(),
            SampleError::BadLength {
                declared: 9000,
                max: SAMPLE_DATA_SIZE
            }
        );
    }
}
