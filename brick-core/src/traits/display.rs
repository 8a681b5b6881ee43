//! Drawing surface traits

use crate::framebuffer::FrameBuffer;
use crate::geometry::{Alignment, Color, Orientation, Point, Rect};
use crate::graphics;

use super::{BitStreamer, Font};

/// Errors that can occur while drawing or pushing a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Pixel or region lies outside the framebuffer
    OutOfBounds,
    /// Mapped output accepted fewer bytes than the frame holds
    ShortWrite { written: usize, expected: usize },
    /// Mapped output reported an error
    Output,
    /// Geometry cannot be packed into the hardware line format
    InvalidGeometry,
}

impl core::fmt::Display for DisplayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DisplayError::OutOfBounds => write!(f, "coordinates outside the framebuffer"),
            DisplayError::ShortWrite { written, expected } => {
                write!(f, "short write to display: {} of {} bytes", written, expected)
            }
            DisplayError::Output => write!(f, "display output failed"),
            DisplayError::InvalidGeometry => write!(f, "unsupported display geometry"),
        }
    }
}

/// Anything that owns a framebuffer
pub trait Canvas {
    fn frame_buffer(&self) -> &FrameBuffer;

    fn frame_buffer_mut(&mut self) -> &mut FrameBuffer;
}

impl Canvas for FrameBuffer {
    fn frame_buffer(&self) -> &FrameBuffer {
        self
    }

    fn frame_buffer_mut(&mut self) -> &mut FrameBuffer {
        self
    }
}

/// Drawing primitives for every [`Canvas`]
///
/// Out-of-range coordinates fail with [`DisplayError::OutOfBounds`] before
/// any pixel is touched. Text running past the right edge of the display is
/// clipped silently instead.
pub trait CanvasExt: Canvas {
    /// Set or clear a horizontal run of `length` pixels starting at `start`
    fn draw_hline(&mut self, start: Point, length: u32, color: Color) -> Result<(), DisplayError> {
        graphics::draw_hline(self.frame_buffer_mut(), start, length, color)
    }

    /// Set or clear a vertical run of `length` pixels starting at `start`
    fn draw_vline(&mut self, start: Point, length: u32, color: Color) -> Result<(), DisplayError> {
        graphics::draw_vline(self.frame_buffer_mut(), start, length, color)
    }

    /// Fill a rectangle
    fn draw_box(&mut self, rect: Rect, color: Color) -> Result<(), DisplayError> {
        graphics::draw_box(self.frame_buffer_mut(), rect, color)
    }

    /// Draw the one-pixel border of a rectangle
    fn draw_rect_outline(&mut self, rect: Rect, color: Color) -> Result<(), DisplayError> {
        graphics::draw_rect_outline(self.frame_buffer_mut(), rect, color)
    }

    /// Blit `width` x `height` bits from `bits` at `origin`
    ///
    /// Set bits are drawn in `color`; clear bits leave the destination alone.
    fn draw_bitmap<B: BitStreamer + ?Sized>(
        &mut self,
        bits: &mut B,
        origin: Point,
        width: u32,
        height: u32,
        color: Color,
    ) -> Result<(), DisplayError> {
        graphics::draw_bitmap(self.frame_buffer_mut(), bits, origin, width, height, color)
    }

    /// Blit a bitmap using the streamer's declared size
    fn draw_bitmap_at<B: BitStreamer + ?Sized>(
        &mut self,
        bits: &mut B,
        origin: Point,
        color: Color,
    ) -> Result<(), DisplayError> {
        let (width, height) = (bits.width(), bits.height());
        graphics::draw_bitmap(self.frame_buffer_mut(), bits, origin, width, height, color)
    }

    /// Width of `text` in pixels when drawn with `font`
    fn text_width<F: Font + ?Sized>(&self, font: &F, text: &str) -> u32 {
        graphics::text_width(font, text)
    }

    /// Draw `text` left to right from `origin`
    ///
    /// Returns the cursor position after the last glyph drawn.
    fn write_text<F: Font + ?Sized>(
        &mut self,
        font: &F,
        origin: Point,
        text: &str,
        color: Color,
    ) -> Result<Point, DisplayError> {
        graphics::write_text(self.frame_buffer_mut(), font, origin, text, color)
    }

    /// Clear `rect` to the inverse colour and draw aligned `text` inside it
    fn write_text_box<F: Font + ?Sized>(
        &mut self,
        font: &F,
        rect: Rect,
        text: &str,
        color: Color,
        alignment: Alignment,
    ) -> Result<Point, DisplayError> {
        graphics::write_text_box(self.frame_buffer_mut(), font, rect, text, color, alignment)
    }

    /// Draw a filled arrow spanning `rect`, pointing towards `orientation`
    fn draw_arrow(
        &mut self,
        rect: Rect,
        orientation: Orientation,
        color: Color,
    ) -> Result<(), DisplayError> {
        graphics::draw_arrow(self.frame_buffer_mut(), rect, orientation, color)
    }
}

// Blanket implementation for all Canvas types
impl<T: Canvas + ?Sized> CanvasExt for T {}
