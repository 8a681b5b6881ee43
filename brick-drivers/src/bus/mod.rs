//! Sensor bus drivers
//!
//! Register access on the sensor bus goes through three layers:
//!
//! ```text
//! RegisterClient ──► BusTransport ──► DeviceControl::exchange
//!   (registers)       (frame + poll)     (platform)
//! ```
//!
//! [`BusContext`] owns the device handle and the port mode setter, runs the
//! bring-up sequence for each sensor and hands out clients.

pub mod client;
pub mod context;
pub mod transport;

pub use client::{RegisterClient, DEFAULT_READ_LEN};
pub use context::BusContext;
pub use transport::BusTransport;

use brick_protocol::{FrameError, MAX_READ_LEN};
use heapless::Vec;

/// Sensor bus errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// Device reported a negative status for the transaction
    Io { status: i32 },
    /// Device stayed busy for the whole retry budget
    Timeout { attempts: u32 },
    /// The control call itself failed
    Control,
    /// Port mode setter rejected a bring-up step
    ModeSetter,
    /// Write payload does not fit the frame
    PayloadTooLarge,
    /// Requested reply does not fit the frame
    ReadTooLarge,
}

impl From<FrameError> for BusError {
    fn from(e: FrameError) -> Self {
        match e {
            FrameError::PayloadTooLarge => BusError::PayloadTooLarge,
            FrameError::ReadTooLarge => BusError::ReadTooLarge,
        }
    }
}

impl core::fmt::Display for BusError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BusError::Io { status } => write!(f, "bus transaction failed with status {}", status),
            BusError::Timeout { attempts } => {
                write!(f, "bus device still busy after {} attempts", attempts)
            }
            BusError::Control => write!(f, "device control call failed"),
            BusError::ModeSetter => write!(f, "port mode change failed"),
            BusError::PayloadTooLarge => write!(f, "write payload too large"),
            BusError::ReadTooLarge => write!(f, "read length too large"),
        }
    }
}

/// Register-level access to one device on the bus
///
/// Sensor drivers are written against this trait so they can run on any
/// transport.
pub trait RegisterBus {
    /// Read `len` bytes starting at `register`
    fn read_register(&mut self, register: u8, len: usize) -> Result<Vec<u8, MAX_READ_LEN>, BusError>;

    /// Write `data` starting at `register`
    fn write_register(&mut self, register: u8, data: &[u8]) -> Result<(), BusError>;
}

impl<T: RegisterBus + ?Sized> RegisterBus for &mut T {
    fn read_register(&mut self, register: u8, len: usize) -> Result<Vec<u8, MAX_READ_LEN>, BusError> {
        T::read_register(self, register, len)
    }

    fn write_register(&mut self, register: u8, data: &[u8]) -> Result<(), BusError> {
        T::write_register(self, register, data)
    }
}
