//! Process-wide shared frame buffer
//!
//! Frame store dibungkus `Mutex`; setiap akses lewat scoped guard
//! yang otomatis dilepas di semua exit path. Untuk encode-lalu-decode
//! yang atomic, pegang satu guard untuk keduanya.
//!
//! `pack`/`unpack` mempertahankan call convention boundary:
//! `pack(idx, magic, length, data)` dan `unpack()` tanpa argumen,
//! keduanya terhadap satu buffer global.

use std::sync::{Mutex, MutexGuard, OnceLock};

use tracing::{info, trace};

use super::{FrameBuffer, FrameStore, MmapFrameBuffer};
use crate::config::FrameConfig;
use crate::error::{DecodeError, EncodeError, FrameError, Result};
use crate::protocol::{Frame, DEFAULT_CAPACITY};

type DynStore = Box<dyn FrameStore + Send>;

/// Guard yang memegang lock atas shared buffer
pub type FrameGuard<'a> = MutexGuard<'a, DynStore>;

/// Frame store yang aman dipakai lintas thread
pub struct SharedFrameBuffer {
    inner: Mutex<DynStore>,
}

impl SharedFrameBuffer {
    pub fn new<S: FrameStore + Send + 'static>(store: S) -> Self {
        Self {
            inner: Mutex::new(Box::new(store)),
        }
    }

    /// Heap buffer, atau mmap jika `storage_path` di-set
    pub fn from_config(config: &FrameConfig) -> Result<Self> {
        config.validate()?;
        match &config.storage_path {
            Some(path) => Ok(Self::new(MmapFrameBuffer::open(path, config.capacity)?)),
            None => Ok(Self::new(FrameBuffer::new(config.capacity))),
        }
    }

    /// Ambil lock atas buffer.
    ///
    /// Thread yang panic saat memegang lock tidak bisa meninggalkan
    /// frame setengah jadi (semua cek terjadi sebelum write), jadi
    /// poisoning diabaikan.
    pub fn lock(&self) -> FrameGuard<'_> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    /// Pack satu frame. `idx` tidak termasuk layout frame.
    pub fn pack(
        &self,
        idx: i32,
        magic: i32,
        length: i32,
        data: &[u8],
    ) -> std::result::Result<(), EncodeError> {
        trace!(idx, "frame index is not part of the fixed layout");
        self.lock().encode(magic, length, data).map(|_| ())
    }

    pub fn unpack(&self) -> std::result::Result<Frame, DecodeError> {
        self.lock().decode()
    }

    /// Pack lalu unpack di bawah satu lock
    pub fn pack_unpack(
        &self,
        idx: i32,
        magic: i32,
        length: i32,
        data: &[u8],
    ) -> Result<Frame> {
        trace!(idx, "frame index is not part of the fixed layout");
        let mut guard = self.lock();
        guard.encode(magic, length, data)?;
        Ok(guard.decode()?)
    }
}

static GLOBAL: OnceLock<SharedFrameBuffer> = OnceLock::new();

/// Buffer global, dibuat lazily dengan kapasitas default
pub fn global() -> &'static SharedFrameBuffer {
    GLOBAL.get_or_init(|| SharedFrameBuffer::new(FrameBuffer::new(DEFAULT_CAPACITY)))
}

/// Install buffer global dari config. Harus dipanggil sebelum
/// `pack`/`unpack` pertama.
pub fn init_global(config: &FrameConfig) -> Result<&'static SharedFrameBuffer> {
    let shared = SharedFrameBuffer::from_config(config)?;
    GLOBAL
        .set(shared)
        .map_err(|_| FrameError::AlreadyInitialized)?;
    info!(
        capacity = config.capacity,
        mmap = config.storage_path.is_some(),
        "global frame buffer ready"
    );
    Ok(global())
}

/// Pack ke buffer global
pub fn pack<D: AsRef<[u8]>>(
    idx: i32,
    magic: i32,
    length: i32,
    data: D,
) -> std::result::Result<(), EncodeError> {
    global().pack(idx, magic, length, data.as_ref())
}

/// Unpack dari buffer global
pub fn unpack() -> std::result::Result<Frame, DecodeError> {
    global().unpack()
}
