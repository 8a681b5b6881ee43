//! Sensor drivers built on register access

pub mod nxt_i2c;

pub use nxt_i2c::{DeviceInfo, NxtI2cSensor};
