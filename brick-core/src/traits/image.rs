//! Image encoder capability
//!
//! Screenshots are rendered to plain RGB here and handed to an encoder that
//! owns the file format and the file system.

/// Image file writer
pub trait ImageEncoder {
    /// Error type for encoding or writing
    type Error;

    /// Encode an RGB image and write it under `directory`
    ///
    /// # Arguments
    /// * `directory` - Target directory supplied by the caller
    /// * `file_stem` - File name without extension; the encoder adds its own
    /// * `width`, `height` - Image size in pixels
    /// * `rgb` - Row-major pixels, three bytes each, top row first
    fn write_rgb(
        &mut self,
        directory: &str,
        file_stem: &str,
        width: u32,
        height: u32,
        rgb: &[u8],
    ) -> Result<(), Self::Error>;
}

impl<T: ImageEncoder + ?Sized> ImageEncoder for &mut T {
    type Error = T::Error;

    fn write_rgb(
        &mut self,
        directory: &str,
        file_stem: &str,
        width: u32,
        height: u32,
        rgb: &[u8],
    ) -> Result<(), Self::Error> {
        T::write_rgb(self, directory, file_stem, width, height, rgb)
    }
}
