//! Bus transaction execution
//!
//! A transaction submits one frame through the exchange control call and
//! classifies the status word the device writes back:
//!
//! - `< 0`: failed, surfaced as [`BusError::Io`] without retrying
//! - `== 0`: complete, the reply is copied out of the frame
//! - `> 0`: busy, the same frame is submitted again
//!
//! The busy loop is bounded by [`RetryPolicy::max_attempts`].

use brick_core::config::RetryPolicy;
use brick_hal::{DeviceControl, SensorPort};
use brick_protocol::{BusFrame, FrameStatus, EXCHANGE_REQUEST, MAX_READ_LEN};
use heapless::Vec;

use super::BusError;

/// Executes frames for one device on one port
pub struct BusTransport<D> {
    device: D,
    port: SensorPort,
    address: u8,
    retry: RetryPolicy,
}

impl<D: DeviceControl> BusTransport<D> {
    /// Create a transport
    ///
    /// # Arguments
    /// * `device` - Bus device handle
    /// * `port` - Port the sensor is plugged into
    /// * `address` - 8-bit device address
    /// * `retry` - Busy-poll bound
    pub fn new(device: D, port: SensorPort, address: u8, retry: RetryPolicy) -> Self {
        Self {
            device,
            port,
            address,
            retry,
        }
    }

    pub fn port(&self) -> SensorPort {
        self.port
    }

    /// 8-bit device address
    pub fn address(&self) -> u8 {
        self.address
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// Submit `frame` until the device completes or fails it
    ///
    /// Returns the number of submissions made. The frame holds the reply on
    /// success.
    pub fn execute(&mut self, frame: &mut BusFrame) -> Result<u32, BusError> {
        let max_attempts = self.retry.max_attempts.max(1);

        for attempt in 1..=max_attempts {
            self.device
                .exchange(EXCHANGE_REQUEST, frame.as_mut_bytes())
                .map_err(|_| {
                    error!("bus exchange call failed on port {}", self.port.index());
                    BusError::Control
                })?;

            match frame.status() {
                FrameStatus::Complete => {
                    if attempt > 1 {
                        trace!("bus transaction done after {} attempts", attempt);
                    }
                    return Ok(attempt);
                }
                FrameStatus::Failed(status) => {
                    warn!(
                        "bus transaction failed on port {}: status {}",
                        self.port.index(),
                        status
                    );
                    return Err(BusError::Io { status });
                }
                FrameStatus::Busy => {}
            }
        }

        warn!(
            "bus device on port {} busy after {} attempts",
            self.port.index(),
            max_attempts
        );
        Err(BusError::Timeout {
            attempts: max_attempts,
        })
    }

    /// Run one register transaction and return the reply
    pub fn transact(
        &mut self,
        register: u8,
        payload: &[u8],
        read_len: usize,
    ) -> Result<Vec<u8, MAX_READ_LEN>, BusError> {
        let mut frame = BusFrame::new(
            self.port.index(),
            self.address,
            register,
            payload,
            read_len,
        )?;
        self.execute(&mut frame)?;
        Ok(frame.reply_vec()?)
    }

    /// Release the device handle
    pub fn into_device(self) -> D {
        self.device
    }
}
