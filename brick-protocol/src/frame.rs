//! Command frame encoding and decoding for the sensor bus.
//!
//! Frame format (76 bytes):
//! - STATUS (4 bytes, offset 0): signed result, -1 until the device answers
//! - PORT (1 byte, offset 4): zero-based sensor port
//! - REPEAT (1 byte, offset 5): always 1
//! - TIME (2 bytes, offset 6): repeat interval, always 0
//! - WRITE LENGTH (1 byte, offset 8): payload length + 2
//! - ADDRESS (1 byte, offset 9): 7-bit device address
//! - REGISTER (1 byte, offset 10)
//! - WRITE DATA (30 bytes, offset 11): zero-padded payload
//! - READ LENGTH (1 byte, offset 41): requested reply length, negated
//! - REPLY (30 bytes, offset 42): filled by the device
//! - PAD (4 bytes, offset 72)

use heapless::Vec;

/// Exchange opcode for the bus device (`_IOWR('i', 5, FRAME_SIZE)`)
pub const EXCHANGE_REQUEST: u32 = 0xC04C_6905;

/// Total frame size in bytes, matching the size encoded in [`EXCHANGE_REQUEST`]
pub const FRAME_SIZE: usize = 76;

/// Maximum payload bytes after the register byte
pub const MAX_WRITE_LEN: usize = 30;

/// Maximum reply bytes
pub const MAX_READ_LEN: usize = 30;

/// Status value written before submission
pub const STATUS_PENDING: i32 = -1;

const STATUS_OFFSET: usize = 0;
const PORT_OFFSET: usize = 4;
const REPEAT_OFFSET: usize = 5;
const TIME_OFFSET: usize = 6;
const WRITE_LEN_OFFSET: usize = 8;
const ADDRESS_OFFSET: usize = 9;
const REGISTER_OFFSET: usize = 10;
const WRITE_DATA_OFFSET: usize = 11;
const READ_LEN_OFFSET: usize = WRITE_DATA_OFFSET + MAX_WRITE_LEN;
const REPLY_OFFSET: usize = READ_LEN_OFFSET + 1;

/// Errors that can occur while building a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Write payload exceeds [`MAX_WRITE_LEN`]
    PayloadTooLarge,
    /// Requested reply exceeds [`MAX_READ_LEN`]
    ReadTooLarge,
}

impl core::fmt::Display for FrameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FrameError::PayloadTooLarge => write!(f, "write payload exceeds {} bytes", MAX_WRITE_LEN),
            FrameError::ReadTooLarge => write!(f, "reply length exceeds {} bytes", MAX_READ_LEN),
        }
    }
}

/// Decoded status word of a submitted frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameStatus {
    /// Transfer still in progress, resubmit
    Busy,
    /// Transfer finished, reply is valid
    Complete,
    /// Transfer failed with the given device status
    Failed(i32),
}

impl FrameStatus {
    /// Classify a raw status word
    pub fn from_raw(status: i32) -> Self {
        match status {
            s if s < 0 => FrameStatus::Failed(s),
            0 => FrameStatus::Complete,
            _ => FrameStatus::Busy,
        }
    }
}

/// A single bus transaction frame
///
/// Frames are built fresh for each transaction and owned by the caller for
/// its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusFrame {
    bytes: [u8; FRAME_SIZE],
    read_len: u8,
}

impl BusFrame {
    /// Build a frame for one register transaction
    ///
    /// # Arguments
    /// * `port` - Zero-based sensor port
    /// * `address` - 8-bit device address (shifted to 7 bits on the wire)
    /// * `register` - Register to write or read from
    /// * `payload` - Bytes written after the register byte
    /// * `read_len` - Number of reply bytes requested
    pub fn new(
        port: u8,
        address: u8,
        register: u8,
        payload: &[u8],
        read_len: usize,
    ) -> Result<Self, FrameError> {
        if payload.len() > MAX_WRITE_LEN {
            return Err(FrameError::PayloadTooLarge);
        }
        if read_len > MAX_READ_LEN {
            return Err(FrameError::ReadTooLarge);
        }

        let mut bytes = [0u8; FRAME_SIZE];
        bytes[STATUS_OFFSET..STATUS_OFFSET + 4].copy_from_slice(&STATUS_PENDING.to_le_bytes());
        bytes[PORT_OFFSET] = port;
        bytes[REPEAT_OFFSET] = 1;
        bytes[TIME_OFFSET..TIME_OFFSET + 2].copy_from_slice(&0i16.to_le_bytes());
        bytes[WRITE_LEN_OFFSET] = (payload.len() + 2) as u8;
        bytes[ADDRESS_OFFSET] = address >> 1;
        bytes[REGISTER_OFFSET] = register;
        bytes[WRITE_DATA_OFFSET..WRITE_DATA_OFFSET + payload.len()].copy_from_slice(payload);
        bytes[READ_LEN_OFFSET] = (-(read_len as i8)) as u8;

        Ok(Self {
            bytes,
            read_len: read_len as u8,
        })
    }

    /// Frame for a register read with no payload
    pub fn read(port: u8, address: u8, register: u8, len: usize) -> Result<Self, FrameError> {
        Self::new(port, address, register, &[], len)
    }

    /// Frame for a register write with no reply
    pub fn write(port: u8, address: u8, register: u8, data: &[u8]) -> Result<Self, FrameError> {
        Self::new(port, address, register, data, 0)
    }

    /// Raw frame bytes
    pub fn as_bytes(&self) -> &[u8; FRAME_SIZE] {
        &self.bytes
    }

    /// Raw frame bytes for in-place mutation by the device
    pub fn as_mut_bytes(&mut self) -> &mut [u8; FRAME_SIZE] {
        &mut self.bytes
    }

    /// Raw status word
    pub fn status_raw(&self) -> i32 {
        let mut word = [0u8; 4];
        word.copy_from_slice(&self.bytes[STATUS_OFFSET..STATUS_OFFSET + 4]);
        i32::from_le_bytes(word)
    }

    /// Decoded status word
    pub fn status(&self) -> FrameStatus {
        FrameStatus::from_raw(self.status_raw())
    }

    /// Sensor port
    pub fn port(&self) -> u8 {
        self.bytes[PORT_OFFSET]
    }

    /// 7-bit device address as stored in the frame
    pub fn address(&self) -> u8 {
        self.bytes[ADDRESS_OFFSET]
    }

    /// Register byte
    pub fn register(&self) -> u8 {
        self.bytes[REGISTER_OFFSET]
    }

    /// Write length field (payload + address + register)
    pub fn write_len_field(&self) -> u8 {
        self.bytes[WRITE_LEN_OFFSET]
    }

    /// Payload bytes following the register
    pub fn payload(&self) -> &[u8] {
        let len = (self.write_len_field() as usize).saturating_sub(2);
        &self.bytes[WRITE_DATA_OFFSET..WRITE_DATA_OFFSET + len]
    }

    /// Requested reply length
    pub fn read_len(&self) -> usize {
        self.read_len as usize
    }

    /// Reply bytes, valid once the status reads [`FrameStatus::Complete`]
    pub fn reply(&self) -> &[u8] {
        &self.bytes[REPLY_OFFSET..REPLY_OFFSET + self.read_len()]
    }

    /// Copy the reply out of the frame
    pub fn reply_vec(&self) -> Result<Vec<u8, MAX_READ_LEN>, FrameError> {
        Vec::from_slice(self.reply()).map_err(|_| FrameError::ReadTooLarge)
    }
}
