//! Bus device ownership and sensor bring-up
//!
//! Every sensor is brought up once before its first transaction:
//!
//! ```text
//! analog mode ─► reset ─► settle ─► (operating mode ─► settle) x N
//! ```
//!
//! Slow devices need the operating mode applied more than once. The delays
//! and the repeat count come from [`BringUpConfig`].

use brick_core::config::{BringUpConfig, BusConfig, ConfigError, Validate};
use brick_hal::{AnalogMode, DeviceControl, OperatingMode, PortModeSetter, SensorPort};
use embedded_hal::delay::DelayNs;

use super::{BusError, BusTransport, RegisterClient};

/// Shared bus state: device handle, port mode setter and configuration
///
/// The device handle is cloned into every client, so `D` is typically a
/// shared handle to the open bus device.
pub struct BusContext<D, M> {
    device: D,
    modes: M,
    config: BusConfig,
}

impl<D, M> BusContext<D, M>
where
    D: DeviceControl + Clone,
    M: PortModeSetter,
{
    /// Create a context, rejecting invalid configuration
    pub fn new(device: D, modes: M, config: BusConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            device,
            modes,
            config,
        })
    }

    pub fn config(&self) -> &BusConfig {
        &self.config
    }

    pub fn modes(&self) -> &M {
        &self.modes
    }

    /// Run the bring-up sequence for the sensor on `port`
    pub fn bring_up<T: DelayNs>(&mut self, port: SensorPort, delay: &mut T) -> Result<(), BusError> {
        let BringUpConfig {
            sensor_type,
            sensor_mode,
            reset_settle_ms,
            mode_settle_ms,
            mode_repeats,
        } = self.config.bring_up;

        debug!("bringing up sensor on port {}", port.index());

        self.modes
            .set_analog_mode(port, AnalogMode::Set)
            .map_err(|_| mode_failure(port, "analog mode"))?;
        self.modes
            .reset(port)
            .map_err(|_| mode_failure(port, "reset"))?;
        delay.delay_ms(reset_settle_ms);

        let mode = OperatingMode {
            type_id: sensor_type,
            mode: sensor_mode,
        };
        for _ in 0..mode_repeats {
            self.modes
                .set_operating_mode(port, mode)
                .map_err(|_| mode_failure(port, "operating mode"))?;
            delay.delay_ms(mode_settle_ms);
        }

        info!("sensor on port {} ready", port.index());
        Ok(())
    }

    /// Client for a device that is already up
    pub fn client(&self, port: SensorPort, address: u8) -> RegisterClient<D> {
        RegisterClient::new(BusTransport::new(
            self.device.clone(),
            port,
            address,
            self.config.retry,
        ))
    }

    /// Bring up the sensor on `port` and return a client for it
    pub fn open<T: DelayNs>(
        &mut self,
        port: SensorPort,
        address: u8,
        delay: &mut T,
    ) -> Result<RegisterClient<D>, BusError> {
        self.bring_up(port, delay)?;
        Ok(self.client(port, address))
    }
}

fn mode_failure(port: SensorPort, step: &str) -> BusError {
    error!("bring-up {} failed on port {}", step, port.index());
    BusError::ModeSetter
}
