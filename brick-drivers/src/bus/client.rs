//! Register read/write API

use brick_hal::DeviceControl;
use brick_protocol::MAX_READ_LEN;
use heapless::Vec;

use super::{BusError, BusTransport, RegisterBus};

/// Reply length used by [`RegisterClient::read_block`]
pub const DEFAULT_READ_LEN: usize = 8;

/// Register access for one device, layered on [`BusTransport`]
///
/// Transport failures are surfaced unchanged.
pub struct RegisterClient<D> {
    transport: BusTransport<D>,
}

impl<D: DeviceControl> RegisterClient<D> {
    pub fn new(transport: BusTransport<D>) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &BusTransport<D> {
        &self.transport
    }

    /// Read `len` bytes starting at `register`
    pub fn read_register(
        &mut self,
        register: u8,
        len: usize,
    ) -> Result<Vec<u8, MAX_READ_LEN>, BusError> {
        self.transport.transact(register, &[], len)
    }

    /// Read [`DEFAULT_READ_LEN`] bytes starting at `register`
    pub fn read_block(&mut self, register: u8) -> Result<Vec<u8, MAX_READ_LEN>, BusError> {
        self.read_register(register, DEFAULT_READ_LEN)
    }

    /// Write `data` starting at `register`
    pub fn write_register(&mut self, register: u8, data: &[u8]) -> Result<(), BusError> {
        self.transport.transact(register, data, 0).map(|_| ())
    }

    /// Write a single byte to `register`
    pub fn write_register_byte(&mut self, register: u8, value: u8) -> Result<(), BusError> {
        self.write_register(register, &[value])
    }

    pub fn into_transport(self) -> BusTransport<D> {
        self.transport
    }
}

impl<D: DeviceControl> RegisterBus for RegisterClient<D> {
    fn read_register(&mut self, register: u8, len: usize) -> Result<Vec<u8, MAX_READ_LEN>, BusError> {
        RegisterClient::read_register(self, register, len)
    }

    fn write_register(&mut self, register: u8, data: &[u8]) -> Result<(), BusError> {
        RegisterClient::write_register(self, register, data)
    }
}
