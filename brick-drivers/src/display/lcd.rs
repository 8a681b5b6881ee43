//! EV3 LCD driver
//!
//! The panel takes three pixels per byte. Each three-bit group of the
//! framebuffer maps to one hardware byte through a fixed lookup table; the
//! table and the packing order are the panel's wire contract.
//!
//! # Row Packing
//!
//! A 178 px row is 23 framebuffer bytes and 60 hardware bytes:
//!
//! ```text
//! 7 chunks x 3 bytes (24 bits) -> 8 groups each = 56 bytes
//! 1 tail   x 2 bytes (16 bits) -> 4 groups      =  4 bytes
//! ```
//!
//! Groups are peeled from the low end of the little-endian chunk, so the
//! leftmost pixels come out first.
//!
//! # Scrolling
//!
//! `update(row_offset)` starts reading at framebuffer row
//! `row_offset % height` and wraps to row 0 at the end of the buffer,
//! giving a vertical scroll without moving any bytes.

use alloc::vec;
use alloc::vec::Vec;

use brick_core::config::{DisplayGeometry, Validate};
use brick_core::{Canvas, DisplayError, FrameBuffer};
use brick_hal::MappedOutput;

/// Three-bit group to hardware byte
pub const HW_LOOKUP: [u8; 8] = [0x00, 0xE0, 0x1C, 0xFC, 0x03, 0xE3, 0x1F, 0xFF];

/// Source bytes per packing chunk
const CHUNK_BYTES: usize = 3;

/// Pack one framebuffer row into one hardware row
///
/// Stops once `dst` is full; surplus bits of the last chunk are dropped.
pub fn pack_row(src: &[u8], dst: &mut [u8]) {
    let mut out = 0;

    for chunk in src.chunks(CHUNK_BYTES) {
        if out == dst.len() {
            break;
        }

        let mut pixels = 0u32;
        for (i, &byte) in chunk.iter().enumerate() {
            pixels |= (byte as u32) << (8 * i);
        }

        let groups = (chunk.len() * 8 / 3).min(dst.len() - out);
        for slot in &mut dst[out..out + groups] {
            *slot = HW_LOOKUP[(pixels & 0x7) as usize];
            pixels >>= 3;
        }
        out += groups;
    }
}

/// Framebuffer to hardware frame converter
///
/// Owns the hardware frame so repeated updates do not allocate.
#[derive(Debug, Clone)]
pub struct LineCodec {
    geometry: DisplayGeometry,
    hw_buffer: Vec<u8>,
}

impl LineCodec {
    /// Create a codec for `geometry`
    ///
    /// Fails when a framebuffer row cannot feed a full hardware row.
    pub fn new(geometry: DisplayGeometry) -> Result<Self, DisplayError> {
        geometry
            .validate()
            .map_err(|_| DisplayError::InvalidGeometry)?;
        Ok(Self {
            geometry,
            hw_buffer: vec![0; geometry.hw_buffer_len()],
        })
    }

    pub fn geometry(&self) -> DisplayGeometry {
        self.geometry
    }

    /// Last encoded hardware frame
    pub fn hw_buffer(&self) -> &[u8] {
        &self.hw_buffer
    }

    /// Encode `fb` starting at framebuffer row `row_offset`
    pub fn encode(&mut self, fb: &FrameBuffer, row_offset: u32) -> Result<&[u8], DisplayError> {
        if fb.geometry() != self.geometry {
            return Err(DisplayError::InvalidGeometry);
        }

        let stride = self.geometry.bytes_per_row();
        let hw_stride = self.geometry.hw_bytes_per_row();
        let height = self.geometry.height;
        let limit = stride * height as usize;
        let src = fb.as_bytes();

        let mut in_offset = (row_offset % height) as usize * stride;
        for dst in self.hw_buffer.chunks_mut(hw_stride) {
            if in_offset >= limit {
                in_offset = 0;
            }
            pack_row(&src[in_offset..in_offset + stride], dst);
            in_offset += stride;
        }

        Ok(&self.hw_buffer)
    }
}

/// LCD driver: framebuffer, codec and mapped output
pub struct Lcd<M> {
    frame_buffer: FrameBuffer,
    codec: LineCodec,
    output: M,
}

impl<M: MappedOutput> Lcd<M> {
    /// Create a driver for a panel of the given geometry
    pub fn new(output: M, geometry: DisplayGeometry) -> Result<Self, DisplayError> {
        let codec = LineCodec::new(geometry)?;
        if output.len() < geometry.hw_buffer_len() {
            warn!(
                "mapped region holds {} bytes, frame needs {}",
                output.len(),
                geometry.hw_buffer_len()
            );
        }
        Ok(Self {
            frame_buffer: FrameBuffer::new(geometry),
            codec,
            output,
        })
    }

    /// Create a driver for the EV3 178x128 panel
    pub fn ev3(output: M) -> Result<Self, DisplayError> {
        Self::new(output, DisplayGeometry::EV3)
    }

    pub fn geometry(&self) -> DisplayGeometry {
        self.codec.geometry()
    }

    /// Hardware frame produced by the last update
    pub fn hw_buffer(&self) -> &[u8] {
        self.codec.hw_buffer()
    }

    pub fn output(&self) -> &M {
        &self.output
    }

    /// Release the mapped output
    pub fn into_output(self) -> M {
        self.output
    }

    /// Push the framebuffer to the panel, starting at row `row_offset`
    ///
    /// The whole hardware frame is written in one shot at offset 0. A write
    /// that lands fewer bytes fails with [`DisplayError::ShortWrite`].
    pub fn update(&mut self, row_offset: u32) -> Result<(), DisplayError> {
        trace!("lcd update, row offset {}", row_offset);

        let frame = self.codec.encode(&self.frame_buffer, row_offset)?;
        let expected = frame.len();
        let written = self.output.write_at(0, frame).map_err(|_| {
            error!("lcd write failed");
            DisplayError::Output
        })?;

        if written != expected {
            error!("lcd short write: {} of {} bytes", written, expected);
            return Err(DisplayError::ShortWrite { written, expected });
        }
        Ok(())
    }

    /// Push the framebuffer without scrolling
    pub fn refresh(&mut self) -> Result<(), DisplayError> {
        self.update(0)
    }

    /// Push the framebuffer scrolled up by `rows`
    pub fn scroll(&mut self, rows: u32) -> Result<(), DisplayError> {
        self.update(rows)
    }

    /// Replace the framebuffer with `picture` and push it
    ///
    /// The picture uses the framebuffer layout; it is truncated or padded
    /// with cleared pixels to the buffer size.
    pub fn show_picture(&mut self, picture: &[u8]) -> Result<(), DisplayError> {
        self.frame_buffer.load(picture);
        self.update(0)
    }

    /// Clear the framebuffer (the panel changes on the next update)
    pub fn clear(&mut self) {
        self.frame_buffer.clear();
    }

    /// Clear `count` rows starting at `y0`
    pub fn clear_rows(&mut self, y0: u32, count: u32) -> Result<(), DisplayError> {
        self.frame_buffer.clear_rows(y0, count)
    }
}

impl<M> Canvas for Lcd<M> {
    fn frame_buffer(&self) -> &FrameBuffer {
        &self.frame_buffer
    }

    fn frame_buffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.frame_buffer
    }
}
