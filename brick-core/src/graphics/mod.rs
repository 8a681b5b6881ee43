//! Drawing primitives
//!
//! Everything here works directly on the packed framebuffer bytes. Runs are
//! split into a partial first byte, whole bytes and a partial last byte so a
//! wide fill touches each byte once.

mod arrow;
mod bitmap;
mod line;
mod text;

pub use arrow::draw_arrow;
pub use bitmap::draw_bitmap;
pub use line::{draw_box, draw_hline, draw_rect_outline, draw_vline};
pub use text::{text_width, write_text, write_text_box};

use crate::framebuffer::FrameBuffer;
use crate::traits::DisplayError;

/// Apply `bits` to `byte`: OR them in for set, AND them out for clear
#[inline]
pub(crate) fn apply_mask(byte: &mut u8, bits: u8, set: bool) {
    if set {
        *byte |= bits;
    } else {
        *byte &= !bits;
    }
}

/// Fail unless the `width` x `height` region at `(x, y)` fits the buffer
pub(crate) fn check_region(
    fb: &FrameBuffer,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> Result<(), DisplayError> {
    let right = x.checked_add(width).ok_or(DisplayError::OutOfBounds)?;
    let bottom = y.checked_add(height).ok_or(DisplayError::OutOfBounds)?;
    if right > fb.width() || bottom > fb.height() {
        return Err(DisplayError::OutOfBounds);
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod testing {
    //! Shared fixtures for drawing tests

    use crate::traits::{BitStreamer, Font, SliceBitStreamer};

    /// Fixed-width font whose every glyph is a solid block
    pub struct BlockFont {
        pub width: u32,
        pub height: u32,
        pub rows: [u8; 16],
    }

    impl BlockFont {
        pub fn new(width: u32, height: u32) -> Self {
            assert!(width <= 8 && height <= 16);
            Self {
                width,
                height,
                rows: [0xFF; 16],
            }
        }
    }

    impl Font for BlockFont {
        type Glyph<'a> = SliceBitStreamer<'a>;

        fn height(&self) -> u32 {
            self.height
        }

        fn glyph_width(&self, ch: char) -> u32 {
            // Narrow glyph for the space so widths are not uniform
            if ch == ' ' {
                self.width / 2
            } else {
                self.width
            }
        }

        fn glyph(&self, ch: char) -> Self::Glyph<'_> {
            SliceBitStreamer::new(&self.rows, self.glyph_width(ch), self.height)
        }
    }

    /// Streamer yielding a fixed bit pattern, then zeros
    pub struct PatternBits {
        pub bits: &'static [bool],
        pub pos: usize,
    }

    impl BitStreamer for PatternBits {
        fn width(&self) -> u32 {
            self.bits.len() as u32
        }

        fn height(&self) -> u32 {
            1
        }

        fn next_bit(&mut self) -> Option<bool> {
            let bit = self.bits.get(self.pos).copied();
            self.pos += 1;
            bit
        }
    }
}
