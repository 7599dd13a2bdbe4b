//! Protocol Layer: Fixed-Layout Binary Framing
//!
//! Prinsip desain:
//! - Fixed offsets: magic di [0,4), length di [4,8), payload setelahnya
//! - Length field adalah satu-satunya sumber kebenaran
//! - No allocation: Encode/decode langsung ke/dari buffer caller

mod encoder;
mod frame;
mod sample;

pub use encoder::{Decoder, Encoder};
pub use frame::{Frame, FrameHeader, FrameRef, DEFAULT_CAPACITY, HEADER_SIZE, MAX_PAYLOAD_SIZE};
pub use sample::{SampleRecord, SAMPLE_DATA_SIZE, SAMPLE_HEADER_SIZE, SAMPLE_SIZE};
