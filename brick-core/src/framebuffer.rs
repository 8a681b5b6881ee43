//! Monochrome software framebuffer
//!
//! One bit per pixel, row-major. Within a byte, pixel `x` lives in bit
//! `x & 7` (least significant bit is the leftmost pixel). The row stride is
//! always taken from the geometry, never from a literal.

use alloc::vec;
use alloc::vec::Vec;

use crate::config::DisplayGeometry;
use crate::traits::DisplayError;

/// Off-screen bitmap mirroring the display contents
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    geometry: DisplayGeometry,
    stride: usize,
    data: Vec<u8>,
}

impl FrameBuffer {
    /// Create a cleared framebuffer
    ///
    /// The buffer size is fixed for the lifetime of the value.
    pub fn new(geometry: DisplayGeometry) -> Self {
        Self {
            geometry,
            stride: geometry.bytes_per_row(),
            data: vec![0; geometry.buffer_len()],
        }
    }

    pub fn geometry(&self) -> DisplayGeometry {
        self.geometry
    }

    pub fn width(&self) -> u32 {
        self.geometry.width
    }

    pub fn height(&self) -> u32 {
        self.geometry.height
    }

    /// Bytes per framebuffer row
    pub fn bytes_per_row(&self) -> usize {
        self.stride
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the packed bytes
    ///
    /// Drawing primitives operate on whole bytes; callers must keep the
    /// row layout intact.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Bytes of row `y`
    pub fn row(&self, y: u32) -> Result<&[u8], DisplayError> {
        if y >= self.geometry.height {
            return Err(DisplayError::OutOfBounds);
        }
        let start = y as usize * self.stride;
        Ok(&self.data[start..start + self.stride])
    }

    /// Byte index and bit mask of pixel `(x, y)`
    fn locate(&self, x: u32, y: u32) -> Result<(usize, u8), DisplayError> {
        if x >= self.geometry.width || y >= self.geometry.height {
            return Err(DisplayError::OutOfBounds);
        }
        let index = (x / 8) as usize + y as usize * self.stride;
        Ok((index, 1 << (x & 7)))
    }

    /// Set or clear a single pixel
    pub fn set_pixel(&mut self, x: u32, y: u32, on: bool) -> Result<(), DisplayError> {
        let (index, mask) = self.locate(x, y)?;
        if on {
            self.data[index] |= mask;
        } else {
            self.data[index] &= !mask;
        }
        Ok(())
    }

    /// Read a single pixel
    pub fn is_pixel_set(&self, x: u32, y: u32) -> Result<bool, DisplayError> {
        let (index, mask) = self.locate(x, y)?;
        Ok(self.data[index] & mask != 0)
    }

    /// Zero the whole buffer
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Zero `count` full rows starting at `y0`
    pub fn clear_rows(&mut self, y0: u32, count: u32) -> Result<(), DisplayError> {
        let end = y0.checked_add(count).ok_or(DisplayError::OutOfBounds)?;
        if end > self.geometry.height {
            return Err(DisplayError::OutOfBounds);
        }
        let start = y0 as usize * self.stride;
        let stop = end as usize * self.stride;
        self.data[start..stop].fill(0);
        Ok(())
    }

    /// Set every pixel to the same value
    pub fn fill(&mut self, on: bool) {
        self.data.fill(if on { 0xFF } else { 0x00 });
    }

    /// Replace the contents with `bytes`
    ///
    /// Longer input is truncated, shorter input leaves the remainder cleared.
    pub fn load(&mut self, bytes: &[u8]) {
        let len = bytes.len().min(self.data.len());
        self.data[..len].copy_from_slice(&bytes[..len]);
        self.data[len..].fill(0);
    }
}

impl core::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("width", &self.geometry.width)
            .field("height", &self.geometry.height)
            .field("stride", &self.stride)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_read_pixel() {
        let mut fb = FrameBuffer::new(DisplayGeometry::EV3);

        fb.set_pixel(10, 5, true).unwrap();
        assert!(fb.is_pixel_set(10, 5).unwrap());
        assert_eq!(fb.as_bytes()[1 + 5 * 23], 1 << 2);

        fb.set_pixel(10, 5, false).unwrap();
        assert!(!fb.is_pixel_set(10, 5).unwrap());
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_lsb_is_leftmost_pixel() {
        let mut fb = FrameBuffer::new(DisplayGeometry::EV3);
        fb.set_pixel(0, 0, true).unwrap();
        fb.set_pixel(15, 0, true).unwrap();
        assert_eq!(fb.as_bytes()[0], 0x01);
        assert_eq!(fb.as_bytes()[1], 0x80);
    }

    #[test]
    fn test_stride_follows_geometry() {
        // 100 px wide: 13 bytes per row, unlike the EV3 default
        let mut fb = FrameBuffer::new(DisplayGeometry::new(100, 10));
        assert_eq!(fb.bytes_per_row(), 13);

        fb.set_pixel(0, 1, true).unwrap();
        assert_eq!(fb.as_bytes()[13], 0x01);
        assert!(fb.is_pixel_set(0, 1).unwrap());
        assert!(!fb.is_pixel_set(0, 0).unwrap());
    }

    #[test]
    fn test_out_of_bounds() {
        let mut fb = FrameBuffer::new(DisplayGeometry::EV3);
        // Column 178 would still fall inside row 0's padding byte
        assert_eq!(fb.set_pixel(178, 0, true), Err(DisplayError::OutOfBounds));
        assert_eq!(fb.set_pixel(0, 128, true), Err(DisplayError::OutOfBounds));
        assert_eq!(fb.is_pixel_set(200, 0), Err(DisplayError::OutOfBounds));
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_clear_rows() {
        let mut fb = FrameBuffer::new(DisplayGeometry::EV3);
        fb.fill(true);

        fb.clear_rows(2, 3).unwrap();
        assert!(fb.row(1).unwrap().iter().all(|&b| b == 0xFF));
        for y in 2..5 {
            assert!(fb.row(y).unwrap().iter().all(|&b| b == 0));
        }
        assert!(fb.row(5).unwrap().iter().all(|&b| b == 0xFF));

        assert_eq!(fb.clear_rows(120, 9), Err(DisplayError::OutOfBounds));
        assert_eq!(fb.clear_rows(u32::MAX, 2), Err(DisplayError::OutOfBounds));
    }

    #[test]
    fn test_clear_all() {
        let mut fb = FrameBuffer::new(DisplayGeometry::EV3);
        fb.fill(true);
        fb.clear();
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                assert!(!fb.is_pixel_set(x, y).unwrap());
            }
        }
    }

    #[test]
    fn test_load_pads_and_truncates() {
        let mut fb = FrameBuffer::new(DisplayGeometry::new(16, 2));
        fb.fill(true);

        fb.load(&[0xAA, 0x55]);
        assert_eq!(fb.as_bytes(), &[0xAA, 0x55, 0x00, 0x00]);

        fb.load(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(fb.as_bytes(), &[1, 2, 3, 4]);
    }
}
