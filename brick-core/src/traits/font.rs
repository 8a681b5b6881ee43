//! Font capability
//!
//! Font resource parsing happens elsewhere; the renderer only needs glyph
//! metrics and a bit streamer per glyph.

use super::BitStreamer;

/// Bitmap font
pub trait Font {
    /// Bit streamer yielding one glyph's pixels
    type Glyph<'a>: BitStreamer
    where
        Self: 'a;

    /// Glyph height in pixels, shared by all glyphs
    fn height(&self) -> u32;

    /// Advance width of `ch` in pixels
    fn glyph_width(&self, ch: char) -> u32;

    /// Pixels of `ch`, `glyph_width(ch)` bits per row
    fn glyph(&self, ch: char) -> Self::Glyph<'_>;
}
