//! Slot dump untuk debugging: isi array fisik beserta posisi cursor.

use std::fmt;

use super::circular_buffer::CircularBuffer;

const READ_MARKER: &str = " r ->";
const WRITE_MARKER: &str = "<- w";

/// Dibuat oleh [`CircularBuffer::dump`].
///
/// `{}` merender slot dengan `Debug`, `{:x}` dengan hex dua digit
/// (untuk buffer byte). Contoh `{:x}` untuk buffer 4 slot dengan 2 elemen:
///
/// ```text
/// Size: 4, Count: 2
///        0x00
///  r ->  0x61
///        0x62
///        0x00 <- w
/// ```
pub struct SlotDump<'a, T, const N: usize> {
    buffer: &'a CircularBuffer<T, N>,
}

impl<'a, T, const N: usize> SlotDump<'a, T, N> {
    pub(crate) fn new(buffer: &'a CircularBuffer<T, N>) -> Self {
        Self { buffer }
    }
}

impl<T, const N: usize> SlotDump<'_, T, N> {
    fn render<F>(&self, f: &mut fmt::Formatter<'_>, slot_fmt: F) -> fmt::Result
    where
        F: Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
    {
        let rb = self.buffer;
        writeln!(f, "Size: {}, Count: {}", rb.size(), rb.count())?;

        for (i, slot) in rb.slots().iter().enumerate() {
            let r = if i == rb.read_offset() { READ_MARKER } else { "" };
            let w = if i == rb.write_offset() { WRITE_MARKER } else { "" };
            write!(f, "{:>5}  ", r)?;
            slot_fmt(slot, f)?;
            writeln!(f, " {}", w)?;
        }

        Ok(())
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Display for SlotDump<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, |slot, f| write!(f, "{:?}", slot))
    }
}

impl<T: fmt::LowerHex, const N: usize> fmt::LowerHex for SlotDump<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, |slot, f| write!(f, "0x{:02x}", slot))
    }
}
