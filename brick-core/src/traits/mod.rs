//! Capability traits
//!
//! These traits describe the collaborators the core consumes (bit streamers,
//! fonts, image encoders) and the drawing surface it provides.

pub mod bitstream;
pub mod display;
pub mod font;
pub mod image;

pub use bitstream::{BitStreamer, SliceBitStreamer};
pub use display::{Canvas, CanvasExt, DisplayError};
pub use font::Font;
pub use image::ImageEncoder;
