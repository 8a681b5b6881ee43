//! Display configuration types

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{ConfigError, Validate};

/// Source bytes consumed per packing chunk
const CHUNK_BYTES: usize = 3;

/// Hardware bytes produced per full chunk (24 bits, 3 bits each)
const GROUPS_PER_CHUNK: usize = 8;

/// Monochrome display geometry
///
/// The software framebuffer stores one bit per pixel; the hardware line
/// format stores three pixels per byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayGeometry {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl DisplayGeometry {
    /// EV3 brick LCD: 178x128
    pub const EV3: Self = Self {
        width: 178,
        height: 128,
    };

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Framebuffer stride: `ceil(width / 8)`
    pub const fn bytes_per_row(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    /// Hardware stride: `ceil(width / 3)`
    pub const fn hw_bytes_per_row(&self) -> usize {
        (self.width as usize).div_ceil(3)
    }

    /// Framebuffer size in bytes
    pub const fn buffer_len(&self) -> usize {
        self.bytes_per_row() * self.height as usize
    }

    /// Hardware frame size in bytes
    pub const fn hw_buffer_len(&self) -> usize {
        self.hw_bytes_per_row() * self.height as usize
    }

    /// Number of hardware bytes one framebuffer row can feed
    ///
    /// Full three-byte chunks yield eight groups; the trailing partial chunk
    /// yields as many whole three-bit groups as its bits allow.
    pub const fn packed_capacity(&self) -> usize {
        let stride = self.bytes_per_row();
        let tail_bits = (stride % CHUNK_BYTES) * 8;
        (stride / CHUNK_BYTES) * GROUPS_PER_CHUNK + tail_bits / 3
    }
}

impl Default for DisplayGeometry {
    fn default() -> Self {
        Self::EV3
    }
}

impl Validate for DisplayGeometry {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid);
        }
        if self.hw_bytes_per_row() > self.packed_capacity() {
            return Err(ConfigError::Invalid);
        }
        Ok(())
    }
}

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Screenshot rendering options
///
/// Unset pixels are painted with a vertical gradient running from `start`
/// at the top row to `end` at the bottom row, imitating the backlit panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScreenshotConfig {
    /// Background colour of the top row
    pub start: Rgb,
    /// Background colour of the bottom row
    pub end: Rgb,
}

impl Default for ScreenshotConfig {
    fn default() -> Self {
        Self {
            start: Rgb::new(0xE6, 0xF0, 0xD2),
            end: Rgb::new(0x9B, 0xB4, 0x82),
        }
    }
}

impl Validate for ScreenshotConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }
}
