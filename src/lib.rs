//! Hermes Frame - Fixed-Layout Binary Frame Packer
//!
//! Arsitektur:
//! - Fixed layout: magic (4) + length (4) + payload, little-endian
//! - Zero-Copy: Decode mengembalikan view langsung ke buffer
//! - No partial write: Semua cek sebelum byte pertama ditulis
//! - Shared transport: Heap atau mmap-backed buffer di balik `Mutex`

pub mod config;
pub mod core;
pub mod error;
pub mod protocol;

pub use crate::config::FrameConfig;
pub use crate::core::{pack, unpack, FrameBuffer, FrameStore, MmapFrameBuffer, SharedFrameBuffer};
pub use crate::error::{DecodeError, EncodeError, FrameError, Result};
pub use crate::protocol::{Frame, FrameHeader, SampleRecord, DEFAULT_CAPACITY, HEADER_SIZE};
