//! Rotating View - lensa read-through di atas array fisik
//!
//! Memetakan urutan logis (oldest -> newest) ke array fisik yang sudah
//! wrap-around, tanpa copy dan tanpa alokasi. Elemen logis ke-`i`
//! berada di slot fisik `(offset + i) mod N`.
//!
//! View hanya meminjam storage (`&'a [T]`), jadi borrow checker yang
//! menjamin view tidak hidup lebih lama dari buffer dan tidak bisa dibaca
//! setelah buffer dimutasi.

use std::fmt;
use std::iter::FusedIterator;

/// Wrap index yang dijamin `< 2 * n` kembali ke `[0, n)`.
///
/// Cukup satu pengurangan, tidak perlu modulo.
#[inline(always)]
fn wrap(idx: usize, n: usize) -> usize {
    debug_assert!(n == 0 || idx < 2 * n);
    if idx >= n {
        idx - n
    } else {
        idx
    }
}

/// Lazy view sepanjang `len` elemen yang dimulai di slot fisik `offset`.
///
/// Restartable: setiap pemanggilan [`RotatingView::iter`] memutar ulang
/// elemen yang sama dari offset yang sama. View tidak pernah mengubah
/// storage di bawahnya.
pub struct RotatingView<'a, T> {
    storage: &'a [T],
    offset: usize,
    len: usize,
}

impl<'a, T> RotatingView<'a, T> {
    /// Membuat view di atas `storage`.
    ///
    /// `offset` dinormalisasi modulo panjang storage.
    ///
    /// # Panics
    /// Panic jika `len > storage.len()`.
    pub fn new(storage: &'a [T], offset: usize, len: usize) -> Self {
        assert!(
            len <= storage.len(),
            "view length {} exceeds storage length {}",
            len,
            storage.len()
        );

        let offset = if storage.is_empty() {
            0
        } else {
            offset % storage.len()
        };

        Self {
            storage,
            offset,
            len,
        }
    }

    /// View kosong, tidak menunjuk slot manapun.
    pub const fn empty() -> Self {
        Self {
            storage: &[],
            offset: 0,
            len: 0,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Slot fisik tempat view dimulai
    #[inline(always)]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Elemen logis ke-`index`, atau `None` jika di luar view.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a T> {
        if index >= self.len {
            return None;
        }
        self.storage
            .get(wrap(self.offset + index, self.storage.len()))
    }

    #[inline]
    pub fn first(&self) -> Option<&'a T> {
        self.get(0)
    }

    #[inline]
    pub fn last(&self) -> Option<&'a T> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Dua potongan kontigu yang membentuk view, sesuai urutan logis.
    ///
    /// Potongan kedua kosong jika view tidak melewati ujung array.
    pub fn as_slices(&self) -> (&'a [T], &'a [T]) {
        let n = self.storage.len();
        let end = self.offset + self.len;

        if end <= n {
            (&self.storage[self.offset..end], &[])
        } else {
            (&self.storage[self.offset..], &self.storage[..end - n])
        }
    }

    /// Iterator baru dari awal view.
    #[inline]
    pub fn iter(&self) -> RotatingIter<'a, T> {
        RotatingIter {
            storage: self.storage,
            head: self.offset,
            remaining: self.len,
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.len);
        let (front, back) = self.as_slices();
        out.extend_from_slice(front);
        out.extend_from_slice(back);
        out
    }
}

impl<T> Clone for RotatingView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RotatingView<'_, T> {}

impl<T> Default for RotatingView<'_, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for RotatingView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for RotatingView<'a, T> {
    type Item = &'a T;
    type IntoIter = RotatingIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &RotatingView<'a, T> {
    type Item = &'a T;
    type IntoIter = RotatingIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq<[T]> for RotatingView<'_, T> {
    fn eq(&self, other: &[T]) -> bool {
        self.len == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq> PartialEq<&[T]> for RotatingView<'_, T> {
    fn eq(&self, other: &&[T]) -> bool {
        *self == **other
    }
}

impl<T: PartialEq, const M: usize> PartialEq<[T; M]> for RotatingView<'_, T> {
    fn eq(&self, other: &[T; M]) -> bool {
        *self == other[..]
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for RotatingView<'_, T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == other[..]
    }
}

impl<T: PartialEq> PartialEq for RotatingView<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

/// Iterator di atas [`RotatingView`].
///
/// Terminasi memakai countdown `remaining`, bukan perbandingan index fisik
/// dengan offset awal. Dengan begitu view sepanjang `N` yang dimulai di
/// offset mana pun tetap menghasilkan tepat `N` elemen: tidak berhenti
/// di langkah 0 dan tidak berputar dua kali.
pub struct RotatingIter<'a, T> {
    storage: &'a [T],
    // Slot fisik elemen depan berikutnya
    head: usize,
    remaining: usize,
}

impl<T> Clone for RotatingIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage,
            head: self.head,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for RotatingIter<'a, T> {
    type Item = &'a T;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let item = &self.storage[self.head];

        self.head += 1;
        if self.head == self.storage.len() {
            self.head = 0;
        }
        self.remaining -= 1;

        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.remaining {
            self.head = wrap(self.head + self.remaining, self.storage.len());
            self.remaining = 0;
            return None;
        }
        self.head = wrap(self.head + n, self.storage.len());
        self.remaining -= n;
        self.next()
    }
}

impl<T> DoubleEndedIterator for RotatingIter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        let idx = wrap(self.head + self.remaining, self.storage.len());

        Some(&self.storage[idx])
    }
}

impl<T> ExactSizeIterator for RotatingIter<'_, T> {}

impl<T> FusedIterator for RotatingIter<'_, T> {}
