//! Error types untuk operasi ring buffer
//!
//! Kedua kondisi di sini adalah hasil normal saat buffer berada di bawah
//! tekanan kapasitas, bukan kegagalan fatal. Caller yang memutuskan
//! apakah retry, drop, atau menunggu.

use thiserror::Error as ThisError;

#[derive(ThisError, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingError {
    /// Write tidak bisa diterima seluruhnya.
    ///
    /// `accepted` elemen pertama sudah di-commit ke buffer sebelum error
    /// ini dikembalikan (selalu 0 untuk single-element write). Sisa input
    /// tidak dihitung: iterator tidak ditarik melewati elemen pertama yang
    /// ditolak.
    #[error("ring buffer is full: accepted {accepted} element(s)")]
    Overflow { accepted: usize },
    #[error("ring buffer is empty")]
    Empty,
}

impl RingError {
    #[inline]
    pub fn is_overflow(&self) -> bool {
        matches!(self, RingError::Overflow { .. })
    }

    /// Jumlah elemen yang tetap ter-commit walaupun operasi gagal.
    #[inline]
    pub fn accepted(&self) -> usize {
        match self {
            RingError::Overflow { accepted } => *accepted,
            RingError::Empty => 0,
        }
    }
}

pub type Result<T, E = RingError> = std::result::Result<T, E>;
