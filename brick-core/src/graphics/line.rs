//! Horizontal runs, vertical runs and boxes

use super::{apply_mask, check_region};
use crate::framebuffer::FrameBuffer;
use crate::geometry::{Color, Point, Rect};
use crate::traits::DisplayError;

/// Set or clear `length` pixels of row `start.y` from column `start.x`
pub fn draw_hline(
    fb: &mut FrameBuffer,
    start: Point,
    length: u32,
    color: Color,
) -> Result<(), DisplayError> {
    if length == 0 {
        return Ok(());
    }
    check_region(fb, start.x, start.y, length, 1)?;

    let set = color.is_set();
    let stride = fb.bytes_per_row();
    let bytes = fb.as_bytes_mut();
    let mut index = start.y as usize * stride + (start.x / 8) as usize;
    let mut remaining = length;

    // Partial first byte
    let bit_offset = start.x & 7;
    if bit_offset != 0 {
        let bits_in_byte = (8 - bit_offset).min(remaining);
        let mask = (0xFFu8 >> (8 - bits_in_byte)) << bit_offset;
        apply_mask(&mut bytes[index], mask, set);
        remaining -= bits_in_byte;
        index += 1;
    }

    // Whole bytes
    while remaining >= 8 {
        apply_mask(&mut bytes[index], 0xFF, set);
        remaining -= 8;
        index += 1;
    }

    // Partial last byte
    if remaining > 0 {
        let mask = 0xFFu8 >> (8 - remaining);
        apply_mask(&mut bytes[index], mask, set);
    }

    Ok(())
}

/// Set or clear `length` pixels of column `start.x` from row `start.y`
pub fn draw_vline(
    fb: &mut FrameBuffer,
    start: Point,
    length: u32,
    color: Color,
) -> Result<(), DisplayError> {
    if length == 0 {
        return Ok(());
    }
    check_region(fb, start.x, start.y, 1, length)?;

    for y in start.y..start.y + length {
        fb.set_pixel(start.x, y, color.is_set())?;
    }
    Ok(())
}

/// Fill `rect` with one horizontal run per row
pub fn draw_box(fb: &mut FrameBuffer, rect: Rect, color: Color) -> Result<(), DisplayError> {
    if rect.is_empty() {
        return Ok(());
    }
    check_region(fb, rect.p1.x, rect.p1.y, rect.width(), rect.height())?;

    for y in rect.p1.y..rect.p2.y {
        draw_hline(fb, Point::new(rect.p1.x, y), rect.width(), color)?;
    }
    Ok(())
}

/// Draw the border of `rect`
pub fn draw_rect_outline(
    fb: &mut FrameBuffer,
    rect: Rect,
    color: Color,
) -> Result<(), DisplayError> {
    if rect.is_empty() {
        return Ok(());
    }
    check_region(fb, rect.p1.x, rect.p1.y, rect.width(), rect.height())?;

    let (width, height) = (rect.width(), rect.height());
    let right = rect.p2.x - 1;
    let bottom = rect.p2.y - 1;

    draw_hline(fb, rect.p1, width, color)?;
    draw_hline(fb, Point::new(rect.p1.x, bottom), width, color)?;
    draw_vline(fb, rect.p1, height, color)?;
    draw_vline(fb, Point::new(right, rect.p1.y), height, color)
}
