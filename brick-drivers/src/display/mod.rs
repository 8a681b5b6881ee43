//! LCD output and screenshots

pub mod lcd;
#[cfg(feature = "std")]
pub mod png;
pub mod screenshot;

pub use lcd::{Lcd, LineCodec, HW_LOOKUP};
#[cfg(feature = "std")]
pub use png::PngEncoder;
pub use screenshot::{ScreenshotError, ScreenshotExporter, Timestamp, FILE_PREFIX};
