//! Hardware driver implementations
//!
//! This crate drives the peripherals through the `brick-hal` collaborators:
//!
//! - LCD: packs the framebuffer into the hardware line format and pushes it
//!   to the memory-mapped output
//! - Screenshots: renders the framebuffer for an external image encoder
//! - Sensor bus: transaction polling, device bring-up and register access
//! - Sensors: drivers built on register access

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod fmt;

pub mod bus;
pub mod display;
pub mod sensor;

#[cfg(test)]
mod mock;

pub use bus::{BusContext, BusError, BusTransport, RegisterBus, RegisterClient};
pub use display::{Lcd, LineCodec, ScreenshotExporter};
