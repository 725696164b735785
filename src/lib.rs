//! Ringview - Fixed-Capacity Ring Buffer
//!
//! Arsitektur:
//! - Fixed Storage: kapasitas `N` ditentukan saat compile time
//! - Zero-Copy Reads: `RotatingView` membaca langsung dari array fisik
//! - Coarse Locking: `SharedCircularBuffer` memakai satu Mutex per operasi
//!
//! ```
//! use ringview::core::CircularBuffer;
//!
//! let mut rb: CircularBuffer<char, 16> = CircularBuffer::new();
//! rb.write_all("Hello World!".chars()).unwrap();
//!
//! let out: String = rb.read_all().iter().collect();
//! assert_eq!(out, "Hello World!");
//! ```

pub mod core;
pub mod error;

pub use crate::core::{CircularBuffer, RotatingView, SharedCircularBuffer};
pub use crate::error::{Result, RingError};
