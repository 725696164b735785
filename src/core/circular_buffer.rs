//! Fixed-Capacity Circular Buffer
//!
//! Storage dialokasikan sekali saat `new()`, setelah itu tidak ada alokasi
//! di hot path. Pembacaan bulk tidak meng-copy data: `read(n)` mengembalikan
//! [`RotatingView`] yang meminjam storage langsung.
//!
//! # Invariants
//! - `write_offset == (read_offset + count) % N` di luar mutasi.
//! - Slot `(read_offset + i) % N` untuk `0 <= i < count` berisi elemen valid;
//!   slot lain berisi nilai basi yang tidak boleh terbaca lewat API publik.
//!
//! # Threading
//! Tipe ini tidak tersinkronisasi. Semua mutasi butuh `&mut self`, jadi view
//! yang masih hidup otomatis mencegah `write`/`read`/`clear` berikutnya.
//! Untuk akses multi-thread pakai [`super::SharedCircularBuffer`].

use log::{debug, trace};

use super::dump::SlotDump;
use super::rotating_view::RotatingView;
use crate::error::{Result, RingError};

/// Circular buffer berkapasitas tetap `N`.
pub struct CircularBuffer<T, const N: usize> {
    // Pre-allocated di heap - tidak ada alokasi setelah init
    storage: Box<[T]>,
    write_offset: usize,
    read_offset: usize,
    count: usize,
}

impl<T: Default, const N: usize> Default for CircularBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default, const N: usize> CircularBuffer<T, N> {
    /// Membuat buffer kosong. Semua slot diisi `T::default()`.
    ///
    /// Alokasi hanya terjadi sekali di sini.
    pub fn new() -> Self {
        let n = Self::CAPACITY;

        let mut storage = Vec::with_capacity(n);
        storage.resize_with(n, T::default);

        Self {
            storage: storage.into_boxed_slice(),
            write_offset: 0,
            read_offset: 0,
            count: 0,
        }
    }

    /// Ambil elemen tertua dan pindahkan keluar dari slot-nya.
    ///
    /// Returns `None` jika buffer kosong. Slot yang ditinggalkan diisi
    /// `T::default()`.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let value = std::mem::take(&mut self.storage[self.read_offset]);
        self.read_offset = Self::advance(self.read_offset, 1);
        self.count -= 1;

        self.debug_check();
        Some(value)
    }
}

impl<T, const N: usize> CircularBuffer<T, N> {
    const CAPACITY: usize = {
        assert!(N > 0, "CircularBuffer capacity must be > 0");
        N
    };

    #[inline(always)]
    fn advance(offset: usize, by: usize) -> usize {
        debug_assert!(offset < N && by <= N);
        let next = offset + by;
        if next >= N {
            next - N
        } else {
            next
        }
    }

    #[inline(always)]
    fn debug_check(&self) {
        debug_assert!(self.count <= N);
        debug_assert!(self.read_offset < N && self.write_offset < N);
        debug_assert_eq!(
            self.write_offset,
            Self::advance(self.read_offset, self.count)
        );
    }

    /// Cek apakah buffer kosong
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Cek apakah buffer penuh
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.count == N
    }

    /// Sisa slot kosong (`N - count`).
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        N - self.count
    }

    /// Kapasitas total buffer
    #[inline(always)]
    pub const fn size(&self) -> usize {
        N
    }

    /// Jumlah elemen dalam buffer
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline(always)]
    pub fn read_offset(&self) -> usize {
        self.read_offset
    }

    #[inline(always)]
    pub fn write_offset(&self) -> usize {
        self.write_offset
    }

    /// Array fisik apa adanya, termasuk slot basi.
    #[inline(always)]
    pub fn slots(&self) -> &[T] {
        &self.storage
    }

    /// Buang semua elemen secara logis.
    ///
    /// Isi slot tidak disentuh; `read_offset` dipindah ke `write_offset`.
    pub fn clear(&mut self) {
        trace!("clear: discarding {} element(s)", self.count);

        self.read_offset = self.write_offset;
        self.count = 0;

        self.debug_check();
    }

    /// Tulis satu elemen.
    ///
    /// Jika buffer penuh, return [`RingError::Overflow`] dan state tidak
    /// berubah sama sekali.
    #[inline]
    pub fn write(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            debug!("write rejected: buffer full ({} slots)", N);
            return Err(RingError::Overflow { accepted: 0 });
        }

        self.storage[self.write_offset] = value;
        self.write_offset = Self::advance(self.write_offset, 1);
        self.count += 1;

        self.debug_check();
        Ok(())
    }

    /// Tulis banyak elemen sekaligus.
    ///
    /// Elemen yang muat di-commit dulu, baru overflow dilaporkan. Ini
    /// bukan operasi atomik: saat gagal, `accepted` pada error menyatakan
    /// berapa elemen yang sudah masuk buffer. Iterator hanya ditarik satu
    /// elemen melewati kapasitas untuk mendeteksi overflow; elemen itu
    /// di-drop, sisanya tidak disentuh.
    ///
    /// Returns jumlah elemen yang ditulis jika semuanya muat.
    pub fn write_all<I>(&mut self, values: I) -> Result<usize>
    where
        I: IntoIterator<Item = T>,
    {
        let mut values = values.into_iter();
        let room = self.capacity();
        let mut accepted = 0;

        // count dinaikkan per elemen: panic dari iterator atau dari drop
        // slot lama tetap meninggalkan invariant cursor utuh
        while accepted < room {
            let Some(value) = values.next() else { break };
            self.storage[self.write_offset] = value;
            self.write_offset = Self::advance(self.write_offset, 1);
            self.count += 1;
            accepted += 1;
        }
        self.debug_check();

        if values.next().is_some() {
            debug!("bulk write overflow: accepted {} element(s)", accepted);
            return Err(RingError::Overflow { accepted });
        }

        Ok(accepted)
    }

    /// Konsumsi semua elemen, sama dengan `read(self.count())`.
    #[inline]
    pub fn read_all(&mut self) -> RotatingView<'_, T> {
        self.read(self.count)
    }

    /// Konsumsi `min(n, count)` elemen tertua.
    ///
    /// View yang dikembalikan meminjam storage, urutan oldest -> newest.
    /// Buffer kosong menghasilkan view kosong, tidak pernah error.
    pub fn read(&mut self, n: usize) -> RotatingView<'_, T> {
        let k = n.min(self.count);
        let start = self.read_offset;

        trace!("read: requested {}, consuming {} from slot {}", n, k, start);

        self.read_offset = Self::advance(self.read_offset, k);
        self.count -= k;
        self.debug_check();

        RotatingView::new(&self.storage, start, k)
    }

    /// Elemen tertua tanpa mengkonsumsinya.
    #[inline]
    pub fn peek(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(RingError::Empty);
        }
        Ok(&self.storage[self.read_offset])
    }

    /// View non-konsumtif atas seluruh isi buffer.
    #[inline]
    pub fn iter(&self) -> RotatingView<'_, T> {
        RotatingView::new(&self.storage, self.read_offset, self.count)
    }

    /// Renderer slot fisik beserta marker cursor, untuk debugging.
    pub fn dump(&self) -> SlotDump<'_, T, N> {
        SlotDump::new(self)
    }
}
