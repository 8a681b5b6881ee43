//! Board-agnostic core of the Brick driver layer
//!
//! This crate contains everything that does not touch a device:
//!
//! - Monochrome framebuffer with bit-level pixel access
//! - Pixel geometry and colour value types
//! - Drawing primitives (runs, boxes, bitmap blits, text, arrows)
//! - Capability traits supplied from outside (bit streamers, fonts,
//!   image encoders)
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod config;
pub mod framebuffer;
pub mod geometry;
pub mod graphics;
pub mod traits;

pub use framebuffer::FrameBuffer;
pub use geometry::{Alignment, Color, Orientation, Point, Rect};
pub use traits::{BitStreamer, Canvas, CanvasExt, DisplayError, Font, ImageEncoder};
