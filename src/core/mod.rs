//! Core module: Fixed-Capacity Ring Buffer dengan Rotated View
//!
//! Prinsip desain:
//! - Zero-Copy: `read` mengembalikan view yang meminjam storage, bukan copy
//! - No-Allocation: Storage pre-allocated saat init
//! - Borrow-Checked Aliasing: view tidak bisa hidup melewati mutasi berikutnya

mod circular_buffer;
mod dump;
mod rotating_view;
mod shared;

pub use circular_buffer::CircularBuffer;
pub use dump::SlotDump;
pub use rotating_view::{RotatingIter, RotatingView};
pub use shared::SharedCircularBuffer;
