//! Bit streamer capability
//!
//! Glyphs and bitmaps reach the renderer as a finite, ordered sequence of
//! single bits, row by row, left to right.

/// Source of bitmap bits
pub trait BitStreamer {
    /// Declared width in pixels
    fn width(&self) -> u32;

    /// Declared height in pixels
    fn height(&self) -> u32;

    /// Next bit of the sequence, `None` once exhausted
    fn next_bit(&mut self) -> Option<bool>;

    /// Take up to eight bits, first bit in the least significant position
    ///
    /// Bits past the end of the sequence read as zero.
    fn take_bits(&mut self, count: u32) -> u8 {
        let mut bits = 0u8;
        for i in 0..count.min(8) {
            if self.next_bit().unwrap_or(false) {
                bits |= 1 << i;
            }
        }
        bits
    }
}

impl<T: BitStreamer + ?Sized> BitStreamer for &mut T {
    fn width(&self) -> u32 {
        T::width(self)
    }

    fn height(&self) -> u32 {
        T::height(self)
    }

    fn next_bit(&mut self) -> Option<bool> {
        T::next_bit(self)
    }

    fn take_bits(&mut self, count: u32) -> u8 {
        T::take_bits(self, count)
    }
}

/// Bit streamer over an in-memory bitmap
///
/// Rows start on byte boundaries (`ceil(width / 8)` bytes each) and pixels
/// are packed least significant bit first, the same layout as the
/// framebuffer. Missing trailing bytes read as zero.
#[derive(Debug, Clone)]
pub struct SliceBitStreamer<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
    stride: usize,
    row: u32,
    col: u32,
}

impl<'a> SliceBitStreamer<'a> {
    pub fn new(data: &'a [u8], width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
            stride: (width as usize).div_ceil(8),
            row: 0,
            col: 0,
        }
    }

    /// Restart the sequence from the first bit
    pub fn rewind(&mut self) {
        self.row = 0;
        self.col = 0;
    }
}

impl BitStreamer for SliceBitStreamer<'_> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn next_bit(&mut self) -> Option<bool> {
        if self.width == 0 || self.row >= self.height {
            return None;
        }
        let index = self.row as usize * self.stride + (self.col / 8) as usize;
        let bit = self
            .data
            .get(index)
            .is_some_and(|byte| byte & (1 << (self.col & 7)) != 0);

        self.col += 1;
        if self.col == self.width {
            self.col = 0;
            self.row += 1;
        }
        Some(bit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_streamer_order() {
        // 3x2: row 0 = 1,0,1 ; row 1 = 0,1,1
        let data = [0b101, 0b110];
        let mut bits = SliceBitStreamer::new(&data, 3, 2);

        let mut seq = [false; 6];
        for slot in seq.iter_mut() {
            *slot = bits.next_bit().unwrap();
        }
        assert_eq!(seq, [true, false, true, false, true, true]);
        assert_eq!(bits.next_bit(), None);
    }

    #[test]
    fn test_take_bits_packs_lsb_first() {
        let data = [0b1011_0110, 0b0000_0001];
        let mut bits = SliceBitStreamer::new(&data, 9, 1);

        assert_eq!(bits.take_bits(4), 0b0110);
        assert_eq!(bits.take_bits(4), 0b1011);
        // One real bit left, the rest reads as zero
        assert_eq!(bits.take_bits(8), 0b0000_0001);
    }

    #[test]
    fn test_rewind() {
        let data = [0xFF];
        let mut bits = SliceBitStreamer::new(&data, 2, 1);
        assert_eq!(bits.take_bits(2), 0b11);
        assert_eq!(bits.next_bit(), None);
        bits.rewind();
        assert_eq!(bits.next_bit(), Some(true));
    }
}
