//! NXT-style I2C sensor
//!
//! Digital sensors on the brick follow a common register map: three 8-byte
//! ASCII identification fields at the bottom, NUL padded, and device
//! specific data registers from 0x42 up.

use brick_hal::{DeviceControl, PortModeSetter, SensorPort};
use brick_protocol::MAX_READ_LEN;
use embedded_hal::delay::DelayNs;
use heapless::{String, Vec};

use crate::bus::{BusContext, BusError, RegisterBus, RegisterClient};

/// Identification register addresses
pub mod reg {
    /// Firmware version string
    pub const VERSION: u8 = 0x00;
    /// Vendor id string
    pub const VENDOR_ID: u8 = 0x08;
    /// Device id string
    pub const DEVICE_ID: u8 = 0x10;
    /// First data register
    pub const DATA: u8 = 0x42;
}

/// Factory default 8-bit address
pub const DEFAULT_ADDRESS: u8 = 0x02;

/// Length of each identification field
pub const ID_LEN: usize = 8;

/// Identification strings read from the sensor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub version: String<ID_LEN>,
    pub vendor_id: String<ID_LEN>,
    pub device_id: String<ID_LEN>,
}

/// Generic NXT-style I2C sensor
pub struct NxtI2cSensor<R> {
    bus: R,
}

impl<D: DeviceControl + Clone> NxtI2cSensor<RegisterClient<D>> {
    /// Bring up the sensor on `port` and bind to it
    pub fn open<M: PortModeSetter, T: DelayNs>(
        ctx: &mut BusContext<D, M>,
        port: SensorPort,
        address: u8,
        delay: &mut T,
    ) -> Result<Self, BusError> {
        Ok(Self::new(ctx.open(port, address, delay)?))
    }
}

impl<R: RegisterBus> NxtI2cSensor<R> {
    /// Bind to an already initialised register bus
    pub fn new(bus: R) -> Self {
        Self { bus }
    }

    pub fn version(&mut self) -> Result<String<ID_LEN>, BusError> {
        self.read_id(reg::VERSION)
    }

    pub fn vendor_id(&mut self) -> Result<String<ID_LEN>, BusError> {
        self.read_id(reg::VENDOR_ID)
    }

    pub fn device_id(&mut self) -> Result<String<ID_LEN>, BusError> {
        self.read_id(reg::DEVICE_ID)
    }

    /// Read all three identification fields
    pub fn identify(&mut self) -> Result<DeviceInfo, BusError> {
        let info = DeviceInfo {
            version: self.version()?,
            vendor_id: self.vendor_id()?,
            device_id: self.device_id()?,
        };
        debug!(
            "sensor {} {} {}",
            info.vendor_id.as_str(),
            info.device_id.as_str(),
            info.version.as_str()
        );
        Ok(info)
    }

    /// Read `len` raw bytes starting at data register `register`
    pub fn read_data(&mut self, register: u8, len: usize) -> Result<Vec<u8, MAX_READ_LEN>, BusError> {
        self.bus.read_register(register, len)
    }

    /// Write a command byte to `register`
    pub fn write_command(&mut self, register: u8, command: u8) -> Result<(), BusError> {
        self.bus.write_register(register, &[command])
    }

    pub fn bus(&mut self) -> &mut R {
        &mut self.bus
    }

    pub fn release(self) -> R {
        self.bus
    }

    fn read_id(&mut self, register: u8) -> Result<String<ID_LEN>, BusError> {
        let raw = self.bus.read_register(register, ID_LEN)?;
        Ok(ascii_field(&raw))
    }
}

/// Printable ASCII up to the first NUL within the field, trailing spaces dropped
fn ascii_field(raw: &[u8]) -> String<ID_LEN> {
    let mut out = String::new();
    for &byte in raw.iter().take(ID_LEN).take_while(|&&b| b != 0) {
        let ch = if byte.is_ascii_graphic() || byte == b' ' {
            byte as char
        } else {
            '?'
        };
        if out.push(ch).is_err() {
            break;
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out
}
