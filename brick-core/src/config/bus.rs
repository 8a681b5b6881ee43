//! Sensor bus configuration types

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{ConfigError, Validate};

/// Bound on the busy-poll loop of a bus transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RetryPolicy {
    /// Maximum number of frame submissions, including the first one
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 10_000,
        }
    }
}

impl Validate for RetryPolicy {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::Invalid);
        }
        Ok(())
    }
}

/// Device bring-up sequence parameters
///
/// Slow devices need the operating mode applied more than once, with a
/// settle delay after each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BringUpConfig {
    /// Device type identifier passed to the operating mode call
    pub sensor_type: u8,
    /// Mode within the device type
    pub sensor_mode: u8,
    /// Delay after the reset, in milliseconds
    pub reset_settle_ms: u32,
    /// Delay after each operating mode application, in milliseconds
    pub mode_settle_ms: u32,
    /// How many times the operating mode is applied
    pub mode_repeats: u8,
}

impl Default for BringUpConfig {
    fn default() -> Self {
        Self {
            sensor_type: 100, // generic I2C
            sensor_mode: 0,
            reset_settle_ms: 100,
            mode_settle_ms: 100,
            mode_repeats: 2,
        }
    }
}

impl Validate for BringUpConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.mode_repeats == 0 {
            return Err(ConfigError::Invalid);
        }
        Ok(())
    }
}

/// Complete sensor bus configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BusConfig {
    pub retry: RetryPolicy,
    pub bring_up: BringUpConfig,
}

impl Validate for BusConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.retry.validate()?;
        self.bring_up.validate()
    }
}
