//! Memory-Mapped Frame Buffer
//!
//! Frame buffer di-mmap dari file, memungkinkan:
//! - Satu proses pack, proses lain unpack dari file yang sama
//! - Frame terakhir tetap ada setelah restart
//!
//! File berukuran tepat `capacity` bytes, tanpa metadata header.

use memmap2::{MmapMut, MmapOptions};
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::FrameStore;

/// Mmap-backed frame buffer
pub struct MmapFrameBuffer {
    mmap: MmapMut,
    path: PathBuf,
}

impl MmapFrameBuffer {
    /// Membuat atau membuka file frame buffer
    ///
    /// File baru di-zero-fill oleh OS, jadi decode pertama
    /// menghasilkan zero frame. File yang sudah ada tidak pernah
    /// di-resize: ukurannya harus sama dengan `capacity`, karena
    /// peer lain mungkin sedang me-mmap file tersebut.
    pub fn open<P: AsRef<Path>>(path: P, capacity: usize) -> io::Result<Self> {
        if capacity == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "frame buffer capacity must be non-zero",
            ));
        }

        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;

        let existing = file.metadata()?.len();
        if existing == 0 {
            file.set_len(capacity as u64)?;
        } else if existing != capacity as u64 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "frame file {} is {} bytes, expected capacity {}",
                    path.display(),
                    existing,
                    capacity
                ),
            ));
        }

        // SAFETY: File dibuka read/write dan ukurannya tepat capacity.
        // Proses lain yang menulis file yang sama bisa menyebabkan
        // torn read, sama seperti shared buffer biasa.
        let mmap = unsafe { MmapOptions::new().len(capacity).map_mut(&file)? };

        debug!(path = %path.display(), capacity, "mapped frame buffer");

        Ok(Self {
            mmap,
            path: path.to_path_buf(),
        })
    }

    /// Flush frame ke disk
    pub fn flush(&self) -> io::Result<()> {
        self.mmap.flush()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FrameStore for MmapFrameBuffer {
    #[inline(always)]
    fn bytes(&self) -> &[u8] {
        &self.mmap[..]
    }

    #[inline(always)]
    fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.mmap[..]
    }
}
