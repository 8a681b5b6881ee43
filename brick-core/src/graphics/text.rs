//! Glyph text layout

use super::{check_region, draw_bitmap, draw_box};
use crate::framebuffer::FrameBuffer;
use crate::geometry::{Alignment, Color, Point, Rect};
use crate::traits::{DisplayError, Font};

/// Sum of the advance widths of every glyph in `text`
pub fn text_width<F: Font + ?Sized>(font: &F, text: &str) -> u32 {
    text.chars().map(|ch| font.glyph_width(ch)).sum()
}

/// Draw `text` left to right from `origin`
///
/// Stops before the first glyph that would cross the right edge of the
/// display; clipping is not an error. An origin outside the display is.
/// Returns the cursor after the last glyph drawn.
pub fn write_text<F: Font + ?Sized>(
    fb: &mut FrameBuffer,
    font: &F,
    origin: Point,
    text: &str,
    color: Color,
) -> Result<Point, DisplayError> {
    if !text.is_empty() && (origin.x >= fb.width() || origin.y >= fb.height()) {
        return Err(DisplayError::OutOfBounds);
    }

    let mut cursor = origin;
    let height = font.height();

    for ch in text.chars() {
        let width = font.glyph_width(ch);
        if cursor.x.saturating_add(width) > fb.width() {
            break;
        }
        let mut glyph = font.glyph(ch);
        draw_bitmap(fb, &mut glyph, cursor, width, height, color)?;
        cursor = cursor.offset_x(width);
    }

    Ok(cursor)
}

/// Clear `rect` and draw `text` inside it with the given alignment
///
/// The box is filled with the inverse of `color` first. A text wider than
/// the box starts at the left edge. Glyphs that would run past the bottom
/// of the display fail before the box is touched.
pub fn write_text_box<F: Font + ?Sized>(
    fb: &mut FrameBuffer,
    font: &F,
    rect: Rect,
    text: &str,
    color: Color,
    alignment: Alignment,
) -> Result<Point, DisplayError> {
    if !text.is_empty() {
        check_region(fb, rect.p1.x, rect.p1.y, rect.width().max(1), font.height())?;
    }
    draw_box(fb, rect, color.inverse())?;

    let slack = rect.width().saturating_sub(text_width(font, text));
    let offset = match alignment {
        Alignment::Left => 0,
        Alignment::Center => slack / 2,
        Alignment::Right => slack,
    };

    write_text(fb, font, rect.p1.offset_x(offset), text, color)
}
