//! Brick Hardware Abstraction Layer
//!
//! This crate defines the operating-system collaborators the driver layer
//! talks through. The drivers never open files or issue system calls
//! themselves; a platform crate (Linux character devices, a simulator, test
//! mocks) implements these traits and hands them in.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (sensor programs, menus)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  brick-drivers (LCD, sensor bus)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  brick-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ mmap region   │       │ ioctl handle  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`mapped::MappedOutput`] - Memory-mapped display output
//! - [`control::DeviceControl`] - Buffer exchange control call
//! - [`port::PortModeSetter`] - Sensor port mode configuration

#![no_std]
#![deny(unsafe_code)]

pub mod control;
pub mod mapped;
pub mod port;

// Re-export key traits at crate root for convenience
pub use control::DeviceControl;
pub use mapped::MappedOutput;
pub use port::{AnalogMode, OperatingMode, PortModeSetter, SensorPort};
