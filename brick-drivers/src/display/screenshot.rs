//! Framebuffer screenshots
//!
//! Set pixels render black. Unset pixels take a vertical two-colour
//! gradient: the bottom row gets the `end` colour and every row above it
//! steps towards `start`, reaching it at the top row. Encoding and file
//! handling belong to the [`ImageEncoder`] collaborator.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Write;

use brick_core::config::{Rgb, ScreenshotConfig};
use brick_core::{Canvas, FrameBuffer, ImageEncoder};
use heapless::String;

/// File name prefix of every screenshot
pub const FILE_PREFIX: &str = "ScreenShot";

/// Longest file stem: prefix, `YYYYMMDD-hhmmss`
const STEM_CAPACITY: usize = 32;

/// Wall-clock time used in the screenshot file name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timestamp {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl Timestamp {
    /// File stem for this time, e.g. `ScreenShot20240131-094502`
    pub fn file_stem(&self) -> Result<String<STEM_CAPACITY>, core::fmt::Error> {
        let mut stem = String::new();
        write!(
            stem,
            "{}{:04}{:02}{:02}-{:02}{:02}{:02}",
            FILE_PREFIX, self.year, self.month, self.day, self.hour, self.minute, self.second
        )?;
        Ok(stem)
    }
}

/// Screenshot export failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenshotError<E> {
    /// The image encoder failed
    Encoder(E),
    /// Timestamp did not fit the file name
    FileName,
}

impl<E: core::fmt::Display> core::fmt::Display for ScreenshotError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ScreenshotError::Encoder(e) => write!(f, "image encoder failed: {}", e),
            ScreenshotError::FileName => write!(f, "screenshot file name too long"),
        }
    }
}

/// Renders framebuffers to RGB and hands them to an encoder
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenshotExporter {
    config: ScreenshotConfig,
}

impl ScreenshotExporter {
    pub fn new(config: ScreenshotConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScreenshotConfig {
        &self.config
    }

    /// Background colour of row `y`
    pub fn background(&self, y: u32, height: u32) -> Rgb {
        // Rows counted from the bottom
        let k = height.saturating_sub(1).saturating_sub(y);
        let span = height.saturating_sub(1).max(1);
        let (start, end) = (self.config.start, self.config.end);
        Rgb::new(
            lerp(end.r, start.r, k, span),
            lerp(end.g, start.g, k, span),
            lerp(end.b, start.b, k, span),
        )
    }

    /// Render `fb` to row-major RGB, top row first
    pub fn render_rgb(&self, fb: &FrameBuffer) -> Vec<u8> {
        let (width, height) = (fb.width(), fb.height());
        let mut rgb = vec![0u8; width as usize * height as usize * 3];
        let row_len = width as usize * 3;
        if rgb.is_empty() {
            return rgb;
        }

        let rows = rgb
            .chunks_exact_mut(row_len)
            .zip(fb.as_bytes().chunks_exact(fb.bytes_per_row()))
            .enumerate()
            .rev();
        for (y, (out, bits)) in rows {
            let background = self.background(y as u32, height);
            for (x, pixel) in out.chunks_exact_mut(3).enumerate() {
                let set = bits[x / 8] & (1 << (x & 7)) != 0;
                let color = if set { Rgb::BLACK } else { background };
                pixel.copy_from_slice(&[color.r, color.g, color.b]);
            }
        }
        rgb
    }

    /// Render `canvas` and write it as `ScreenShot<timestamp>` under `directory`
    pub fn export<C, E>(
        &self,
        canvas: &C,
        encoder: &mut E,
        directory: &str,
        time: Timestamp,
    ) -> Result<(), ScreenshotError<E::Error>>
    where
        C: Canvas + ?Sized,
        E: ImageEncoder + ?Sized,
    {
        let fb = canvas.frame_buffer();
        let stem = time.file_stem().map_err(|_| ScreenshotError::FileName)?;
        let rgb = self.render_rgb(fb);

        debug!("writing screenshot {}", stem.as_str());
        encoder
            .write_rgb(directory, &stem, fb.width(), fb.height(), &rgb)
            .map_err(ScreenshotError::Encoder)
    }
}

/// Step from `from` towards `to` by `k / span` of the distance
fn lerp(from: u8, to: u8, k: u32, span: u32) -> u8 {
    let delta = to as i64 - from as i64;
    (from as i64 + delta * k as i64 / span as i64) as u8
}
