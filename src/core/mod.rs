//! Core module: Frame Buffer dengan heap atau mmap backing
//!
//! Prinsip desain:
//! - Satu buffer, satu frame: encode menimpa, decode tidak mengkonsumsi
//! - Explicit buffer: codec bekerja di atas `FrameStore` milik caller
//! - Shared buffer global hanya di boundary, dijaga `Mutex`

mod frame_buffer;
mod mmap_storage;
mod shared;

pub use frame_buffer::{FrameBuffer, FrameStore};
pub use mmap_storage::MmapFrameBuffer;
pub use shared::{global, init_global, pack, unpack, FrameGuard, SharedFrameBuffer};
