//! PNG screenshot encoder for hosts with a file system

use std::format;
use std::path::{Path, PathBuf};

use brick_core::ImageEncoder;

/// Writes screenshots as `<directory>/<stem>.png`
#[derive(Debug, Clone, Copy, Default)]
pub struct PngEncoder;

impl PngEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Full path of the file written for `file_stem`
    pub fn path_for(directory: &str, file_stem: &str) -> PathBuf {
        Path::new(directory).join(format!("{}.png", file_stem))
    }
}

impl ImageEncoder for PngEncoder {
    type Error = image::ImageError;

    fn write_rgb(
        &mut self,
        directory: &str,
        file_stem: &str,
        width: u32,
        height: u32,
        rgb: &[u8],
    ) -> Result<(), Self::Error> {
        let path = Self::path_for(directory, file_stem);
        image::save_buffer_with_format(
            &path,
            rgb,
            width,
            height,
            image::ColorType::Rgb8,
            image::ImageFormat::Png,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{ScreenshotExporter, Timestamp};
    use brick_core::config::DisplayGeometry;
    use brick_core::FrameBuffer;

    #[test]
    fn test_writes_png_file() {
        let dir = std::env::temp_dir();
        let directory = dir.to_str().unwrap();
        let time = Timestamp {
            year: 2021,
            month: 6,
            day: 3,
            hour: 12,
            minute: 0,
            second: 41,
        };

        let mut fb = FrameBuffer::new(DisplayGeometry::EV3);
        fb.set_pixel(0, 0, true).unwrap();
        ScreenshotExporter::default()
            .export(&fb, &mut PngEncoder::new(), directory, time)
            .unwrap();

        let path = PngEncoder::path_for(directory, "ScreenShot20210603-120041");
        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (178, 128));
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
        assert_eq!(img.get_pixel(1, 0).0, [0xE6, 0xF0, 0xD2]);

        std::fs::remove_file(path).unwrap();
    }
}
