//! Shared Circular Buffer - satu Mutex per operasi
//!
//! Setiap operasi mengambil lock hanya selama pemanggilan itu sendiri.
//! Tidak ada operasi yang menunggu data atau ruang kosong: overflow dan
//! empty-read langsung dikembalikan ke caller.
//!
//! View hasil `read` hanya bisa diakses di dalam closure yang berjalan di
//! bawah lock, jadi view tidak pernah bisa dibaca bersamaan dengan mutasi
//! dari thread lain.

use std::sync::{Mutex, MutexGuard};

use log::warn;

use super::circular_buffer::CircularBuffer;
use super::rotating_view::RotatingView;
use crate::error::Result;

/// Handle thread-safe di atas [`CircularBuffer`].
///
/// Bungkus dengan `Arc` untuk dibagi antar thread.
pub struct SharedCircularBuffer<T, const N: usize> {
    inner: Mutex<CircularBuffer<T, N>>,
}

impl<T: Default, const N: usize> Default for SharedCircularBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default, const N: usize> SharedCircularBuffer<T, N> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(CircularBuffer::new()),
        }
    }

    #[inline]
    pub fn pop(&self) -> Option<T> {
        self.lock().pop()
    }
}

impl<T, const N: usize> From<CircularBuffer<T, N>> for SharedCircularBuffer<T, N> {
    fn from(buffer: CircularBuffer<T, N>) -> Self {
        Self {
            inner: Mutex::new(buffer),
        }
    }
}

impl<T, const N: usize> SharedCircularBuffer<T, N> {
    /// Ambil lock untuk operasi gabungan.
    ///
    /// Lock yang poisoned tetap dipakai: setiap operasi buffer menjaga
    /// invariant-nya sendiri sebelum bisa panic di tengah jalan.
    pub fn lock(&self) -> MutexGuard<'_, CircularBuffer<T, N>> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            warn!("ring buffer lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    pub fn into_inner(self) -> CircularBuffer<T, N> {
        self.inner
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.lock().is_full()
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.lock().count()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    #[inline]
    pub const fn size(&self) -> usize {
        N
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    #[inline]
    pub fn write(&self, value: T) -> Result<()> {
        self.lock().write(value)
    }

    /// Lihat [`CircularBuffer::write_all`]: commit sebagian lalu error.
    pub fn write_all<I>(&self, values: I) -> Result<usize>
    where
        I: IntoIterator<Item = T>,
    {
        self.lock().write_all(values)
    }

    /// Konsumsi `min(n, count)` elemen dan berikan view-nya ke `f`.
    ///
    /// `f` berjalan di bawah lock. Jangan panggil operasi lain pada buffer
    /// yang sama dari dalam `f` (deadlock).
    pub fn read_with<R, F>(&self, n: usize, f: F) -> R
    where
        F: FnOnce(RotatingView<'_, T>) -> R,
    {
        let mut guard = self.lock();
        f(guard.read(n))
    }

    pub fn read_all_with<R, F>(&self, f: F) -> R
    where
        F: FnOnce(RotatingView<'_, T>) -> R,
    {
        let mut guard = self.lock();
        f(guard.read_all())
    }

    /// Copy elemen tertua tanpa mengkonsumsinya.
    pub fn peek_cloned(&self) -> Result<T>
    where
        T: Clone,
    {
        self.lock().peek().cloned()
    }
}
