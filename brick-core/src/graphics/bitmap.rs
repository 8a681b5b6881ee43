//! Bitmap blits from a bit streamer

use super::{apply_mask, check_region};
use crate::framebuffer::FrameBuffer;
use crate::geometry::{Color, Point};
use crate::traits::{BitStreamer, DisplayError};

/// Blit `width` x `height` streamed bits with their top-left at `origin`
///
/// Each destination row is written in runs bounded by byte edges: the
/// streamed bits for a run are shifted into place and ORed in (set) or
/// their complement ANDed in (clear).
pub fn draw_bitmap<B: BitStreamer + ?Sized>(
    fb: &mut FrameBuffer,
    bits: &mut B,
    origin: Point,
    width: u32,
    height: u32,
    color: Color,
) -> Result<(), DisplayError> {
    if width == 0 || height == 0 {
        return Ok(());
    }
    check_region(fb, origin.x, origin.y, width, height)?;

    let set = color.is_set();
    let stride = fb.bytes_per_row();
    let bytes = fb.as_bytes_mut();

    for row in 0..height {
        let y = (origin.y + row) as usize;
        let mut index = y * stride + (origin.x / 8) as usize;
        let mut bit_offset = origin.x & 7;
        let mut remaining = width;

        while remaining > 0 {
            let run = (8 - bit_offset).min(remaining);
            let chunk = bits.take_bits(run) << bit_offset;
            apply_mask(&mut bytes[index], chunk, set);

            remaining -= run;
            bit_offset = 0;
            index += 1;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayGeometry;
    use crate::graphics::testing::PatternBits;
    use crate::traits::SliceBitStreamer;

    #[test]
    fn test_bitmap_aligned() {
        let mut fb = FrameBuffer::new(DisplayGeometry::EV3);
        let data = [0xA5, 0x3C];
        let mut bits = SliceBitStreamer::new(&data, 8, 2);

        draw_bitmap(&mut fb, &mut bits, Point::new(8, 1), 8, 2, Color::Black).unwrap();
        assert_eq!(fb.row(1).unwrap()[1], 0xA5);
        assert_eq!(fb.row(2).unwrap()[1], 0x3C);
        assert_eq!(fb.row(1).unwrap()[0], 0);
        assert_eq!(fb.row(1).unwrap()[2], 0);
    }

    #[test]
    fn test_bitmap_unaligned_spans_bytes() {
        let mut fb = FrameBuffer::new(DisplayGeometry::EV3);
        let mut bits = PatternBits {
            bits: &[true, true, false, true, true, true],
            pos: 0,
        };

        draw_bitmap(&mut fb, &mut bits, Point::new(5, 0), 6, 1, Color::Black).unwrap();
        for x in 0..16 {
            let expected = matches!(x, 5 | 6 | 8 | 9 | 10);
            assert_eq!(fb.is_pixel_set(x, 0).unwrap(), expected, "x={}", x);
        }
    }

    #[test]
    fn test_bitmap_leaves_background_when_drawing() {
        let mut fb = FrameBuffer::new(DisplayGeometry::EV3);
        fb.set_pixel(1, 0, true).unwrap();
        let mut bits = PatternBits {
            bits: &[true, false, false],
            pos: 0,
        };

        draw_bitmap(&mut fb, &mut bits, Point::new(0, 0), 3, 1, Color::Black).unwrap();
        assert!(fb.is_pixel_set(0, 0).unwrap());
        assert!(fb.is_pixel_set(1, 0).unwrap());
        assert!(!fb.is_pixel_set(2, 0).unwrap());
    }

    #[test]
    fn test_bitmap_clear_removes_streamed_bits_only() {
        let mut fb = FrameBuffer::new(DisplayGeometry::EV3);
        fb.fill(true);
        let mut bits = PatternBits {
            bits: &[true, false, true],
            pos: 0,
        };

        draw_bitmap(&mut fb, &mut bits, Point::new(6, 0), 3, 1, Color::White).unwrap();
        assert!(!fb.is_pixel_set(6, 0).unwrap());
        assert!(fb.is_pixel_set(7, 0).unwrap());
        assert!(!fb.is_pixel_set(8, 0).unwrap());
        assert!(fb.is_pixel_set(9, 0).unwrap());
    }

    #[test]
    fn test_bitmap_out_of_bounds() {
        let mut fb = FrameBuffer::new(DisplayGeometry::EV3);
        let data = [0xFF; 4];
        let mut bits = SliceBitStreamer::new(&data, 8, 4);
        assert_eq!(
            draw_bitmap(&mut fb, &mut bits, Point::new(174, 0), 8, 4, Color::Black),
            Err(DisplayError::OutOfBounds)
        );
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }
}
