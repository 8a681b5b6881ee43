//! Test doubles for the HAL collaborators

use alloc::rc::Rc;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::RefCell;

use brick_hal::{
    AnalogMode, DeviceControl, MappedOutput, OperatingMode, PortModeSetter, SensorPort,
};
use brick_protocol::FRAME_SIZE;
use embedded_hal::delay::DelayNs;

const REPLY_OFFSET: usize = 42;

#[derive(Default)]
struct DeviceState {
    statuses: Vec<i32>,
    reply: Vec<u8>,
    frames: Vec<[u8; FRAME_SIZE]>,
    fail: bool,
}

/// Bus device that answers with a scripted status sequence
///
/// The last status repeats once the script runs out. Clones share state so
/// a test can keep a handle after moving the device into a driver.
#[derive(Clone, Default)]
pub struct ScriptedDevice {
    state: Rc<RefCell<DeviceState>>,
}

impl ScriptedDevice {
    pub fn new(statuses: &[i32]) -> Self {
        let device = Self::default();
        device.state.borrow_mut().statuses = statuses.to_vec();
        device
    }

    /// Reply bytes written on completion
    pub fn with_reply(self, reply: &[u8]) -> Self {
        self.state.borrow_mut().reply = reply.to_vec();
        self
    }

    /// Make every control call fail
    pub fn failing(self) -> Self {
        self.state.borrow_mut().fail = true;
        self
    }

    pub fn calls(&self) -> usize {
        self.state.borrow().frames.len()
    }

    /// Frames as submitted, before the device rewrote them
    pub fn frames(&self) -> Vec<[u8; FRAME_SIZE]> {
        self.state.borrow().frames.clone()
    }
}

impl DeviceControl for ScriptedDevice {
    type Error = ();

    fn exchange(&mut self, _request: u32, buffer: &mut [u8]) -> Result<(), ()> {
        let mut state = self.state.borrow_mut();
        if state.fail {
            return Err(());
        }

        let mut submitted = [0u8; FRAME_SIZE];
        submitted.copy_from_slice(&buffer[..FRAME_SIZE]);
        let call = state.frames.len();
        state.frames.push(submitted);

        let status = match state.statuses.get(call) {
            Some(&s) => s,
            None => state.statuses.last().copied().unwrap_or(0),
        };
        buffer[0..4].copy_from_slice(&status.to_le_bytes());

        if status == 0 {
            let len = state.reply.len();
            buffer[REPLY_OFFSET..REPLY_OFFSET + len].copy_from_slice(&state.reply);
        }
        Ok(())
    }
}

/// Mapped output backed by a vector, accepting at most its own length
pub struct MockOutput {
    pub data: Vec<u8>,
    pub writes: usize,
    pub fail: bool,
}

impl MockOutput {
    pub fn new(len: usize) -> Self {
        Self {
            data: vec![0; len],
            writes: 0,
            fail: false,
        }
    }
}

impl MappedOutput for MockOutput {
    type Error = ();

    fn len(&self) -> usize {
        self.data.len()
    }

    fn write_at(&mut self, offset: usize, data: &[u8]) -> Result<usize, ()> {
        if self.fail {
            return Err(());
        }
        self.writes += 1;
        let end = (offset + data.len()).min(self.data.len());
        let n = end.saturating_sub(offset);
        self.data[offset..offset + n].copy_from_slice(&data[..n]);
        Ok(n)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeCall {
    Analog(SensorPort, AnalogMode),
    Reset(SensorPort),
    Operating(SensorPort, OperatingMode),
}

/// Port mode setter that records every call
#[derive(Default)]
pub struct MockModes {
    pub calls: Vec<ModeCall>,
    pub fail_reset: bool,
}

impl PortModeSetter for MockModes {
    type Error = ();

    fn set_analog_mode(&mut self, port: SensorPort, mode: AnalogMode) -> Result<(), ()> {
        self.calls.push(ModeCall::Analog(port, mode));
        Ok(())
    }

    fn reset(&mut self, port: SensorPort) -> Result<(), ()> {
        if self.fail_reset {
            return Err(());
        }
        self.calls.push(ModeCall::Reset(port));
        Ok(())
    }

    fn set_operating_mode(&mut self, port: SensorPort, mode: OperatingMode) -> Result<(), ()> {
        self.calls.push(ModeCall::Operating(port, mode));
        Ok(())
    }
}

/// Delay that records requested milliseconds instead of sleeping
#[derive(Default)]
pub struct MockDelay {
    pub delays_ms: Vec<u32>,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
    }
}
