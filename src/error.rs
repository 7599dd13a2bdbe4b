//! Error types untuk frame packing
//!
//! Semua error adalah pelanggaran precondition lokal, terdeteksi
//! sebelum ada byte yang ditulis ke buffer.

use thiserror::Error;

/// Gagal menulis frame ke buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Declared length nol atau negatif
    #[error("invalid frame length {declared}: must be greater than zero")]
    InvalidLength { declared: i32 },

    /// Payload tidak muat setelah header
    #[error("frame length {declared} exceeds remaining capacity {available}")]
    BufferOverflow { declared: i32, available: usize },

    /// Source data lebih pendek dari declared length
    #[error("payload has {actual} bytes but frame declares {declared}")]
    ShortPayload { declared: i32, actual: usize },
}

/// Gagal membaca frame dari buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Header length tidak konsisten dengan kapasitas buffer
    #[error("malformed frame: length {length} does not fit buffer of {capacity} bytes")]
    MalformedFrame { length: i32, capacity: usize },

    /// Buffer bahkan tidak cukup untuk header
    #[error("buffer of {len} bytes is too short for a frame header")]
    TruncatedHeader { len: usize },
}

/// Error untuk fixed-size sample record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SampleError {
    #[error("sample data is {len} bytes, maximum is {max}")]
    DataTooLong { len: usize, max: usize },

    #[error("sample record must be {expected} bytes, got {actual}")]
    WrongSize { expected: usize, actual: usize },

    #[error("sample declares {declared} data bytes, maximum is {max}")]
    BadLength { declared: u32, max: usize },
}

/// Error konfigurasi
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("capacity {capacity} leaves no room for payload after the {header}-byte header")]
    CapacityTooSmall { capacity: usize, header: usize },

    #[error("capacity {capacity} exceeds the largest length a frame header can express")]
    CapacityTooLarge { capacity: usize },
}

/// Unified error untuk semua operasi hermes-frame
#[derive(Debug, Error)]
pub enum FrameError {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Sample(#[from] SampleError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO error dari mmap transport
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("global frame buffer is already initialized")]
    AlreadyInitialized,
}

/// Result type alias using FrameError
pub type Result<T> = std::result::Result<T, FrameError>;
