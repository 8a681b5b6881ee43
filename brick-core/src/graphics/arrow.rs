//! Arrow glyphs

use super::{check_region, draw_hline, draw_vline};
use crate::framebuffer::FrameBuffer;
use crate::geometry::{Color, Orientation, Point, Rect};
use crate::traits::DisplayError;

/// Draw a filled triangular arrow spanning `rect`
///
/// The shaft runs along the midline of the long axis with the tip on the
/// edge named by `orientation`. At each step back from the tip a
/// perpendicular run is drawn whose half-width grows linearly with slope
/// `(cross / 2) / length`, so the base of the arrow spans the whole rect.
pub fn draw_arrow(
    fb: &mut FrameBuffer,
    rect: Rect,
    orientation: Orientation,
    color: Color,
) -> Result<(), DisplayError> {
    if rect.is_empty() {
        return Ok(());
    }
    check_region(fb, rect.p1.x, rect.p1.y, rect.width(), rect.height())?;

    match orientation {
        Orientation::Left | Orientation::Right => {
            let length = rect.width();
            let mid = rect.p1.y + rect.height() / 2;
            draw_hline(fb, Point::new(rect.p1.x, mid), length, color)?;

            for step in 0..length {
                let x = if orientation == Orientation::Right {
                    rect.p2.x - 1 - step
                } else {
                    rect.p1.x + step
                };
                let half = half_width(step, rect.height(), length);
                let top = mid - half;
                let run = (2 * half + 1).min(rect.p2.y - top);
                draw_vline(fb, Point::new(x, top), run, color)?;
            }
        }
        Orientation::Up | Orientation::Down => {
            let length = rect.height();
            let mid = rect.p1.x + rect.width() / 2;
            draw_vline(fb, Point::new(mid, rect.p1.y), length, color)?;

            for step in 0..length {
                let y = if orientation == Orientation::Down {
                    rect.p2.y - 1 - step
                } else {
                    rect.p1.y + step
                };
                let half = half_width(step, rect.width(), length);
                let left = mid - half;
                let run = (2 * half + 1).min(rect.p2.x - left);
                draw_hline(fb, Point::new(left, y), run, color)?;
            }
        }
    }

    Ok(())
}

/// Half-width of the arrowhead `step` pixels back from the tip
///
/// Stays below `cross / 2`, so `mid - half` never leaves the rect.
fn half_width(step: u32, cross: u32, length: u32) -> u32 {
    ((step as u64 * (cross / 2) as u64) / length as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayGeometry;

    fn column_count(fb: &FrameBuffer, x: u32) -> usize {
        (0..fb.height())
            .filter(|&y| fb.is_pixel_set(x, y).unwrap())
            .count()
    }

    fn row_count(fb: &FrameBuffer, y: u32) -> usize {
        (0..fb.width())
            .filter(|&x| fb.is_pixel_set(x, y).unwrap())
            .count()
    }

    #[test]
    fn test_right_arrow_profile() {
        let mut fb = FrameBuffer::new(DisplayGeometry::EV3);
        let rect = Rect::new(Point::new(10, 10), Point::new(26, 18));

        draw_arrow(&mut fb, rect, Orientation::Right, Color::Black).unwrap();

        // Tip is a single pixel on the midline at the right edge
        assert_eq!(column_count(&fb, 25), 1);
        assert!(fb.is_pixel_set(25, 14).unwrap());
        // Base is widest: half = 15 * 4 / 16 = 3
        assert_eq!(column_count(&fb, 10), 7);
        // Width never decreases moving away from the tip
        for x in 11..26 {
            assert!(column_count(&fb, x) <= column_count(&fb, x - 1));
        }
        // Nothing outside the rect
        assert_eq!(column_count(&fb, 9), 0);
        assert_eq!(column_count(&fb, 26), 0);
    }

    #[test]
    fn test_left_arrow_mirrors_right() {
        let rect = Rect::new(Point::new(0, 0), Point::new(12, 6));
        let mut right = FrameBuffer::new(DisplayGeometry::EV3);
        let mut left = FrameBuffer::new(DisplayGeometry::EV3);

        draw_arrow(&mut right, rect, Orientation::Right, Color::Black).unwrap();
        draw_arrow(&mut left, rect, Orientation::Left, Color::Black).unwrap();

        for x in 0..12 {
            for y in 0..6 {
                assert_eq!(
                    left.is_pixel_set(x, y).unwrap(),
                    right.is_pixel_set(11 - x, y).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_up_and_down_arrows() {
        let rect = Rect::new(Point::new(20, 20), Point::new(30, 40));
        let mut up = FrameBuffer::new(DisplayGeometry::EV3);
        let mut down = FrameBuffer::new(DisplayGeometry::EV3);

        draw_arrow(&mut up, rect, Orientation::Up, Color::Black).unwrap();
        draw_arrow(&mut down, rect, Orientation::Down, Color::Black).unwrap();

        assert_eq!(row_count(&up, 20), 1);
        assert!(up.is_pixel_set(25, 20).unwrap());
        assert_eq!(row_count(&down, 39), 1);
        assert!(down.is_pixel_set(25, 39).unwrap());
        // half = 19 * 5 / 20 = 4
        assert_eq!(row_count(&up, 39), 9);
        assert_eq!(row_count(&down, 20), 9);
    }

    #[test]
    fn test_arrow_clear_on_filled_buffer() {
        let mut fb = FrameBuffer::new(DisplayGeometry::EV3);
        fb.fill(true);
        let rect = Rect::new(Point::new(0, 0), Point::new(8, 8));

        draw_arrow(&mut fb, rect, Orientation::Right, Color::White).unwrap();
        assert!(!fb.is_pixel_set(7, 4).unwrap());
        assert!(fb.is_pixel_set(7, 0).unwrap());
    }

    #[test]
    fn test_arrow_out_of_bounds() {
        let mut fb = FrameBuffer::new(DisplayGeometry::EV3);
        let rect = Rect::new(Point::new(170, 0), Point::new(180, 8));
        assert_eq!(
            draw_arrow(&mut fb, rect, Orientation::Left, Color::Black),
            Err(DisplayError::OutOfBounds)
        );
    }
}
