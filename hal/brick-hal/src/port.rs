//! Sensor port configuration
//!
//! Port enumeration and analog/operating mode selection live in the
//! platform; the bus drivers only need to request a mode change during
//! device bring-up.

/// Physical sensor port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SensorPort {
    One = 0,
    Two = 1,
    Three = 2,
    Four = 3,
}

impl SensorPort {
    /// All ports in order
    pub const ALL: [SensorPort; 4] = [
        SensorPort::One,
        SensorPort::Two,
        SensorPort::Three,
        SensorPort::Four,
    ];

    /// Zero-based port index as used on the wire
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Create a port from its zero-based index
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }
}

/// Analog pin mode of a sensor port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnalogMode {
    /// Pins left floating
    #[default]
    Float,
    /// Pins driven for a digital bus device
    Set,
}

/// Operating mode requested from the port after reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OperatingMode {
    /// Device type identifier
    pub type_id: u8,
    /// Mode within the device type
    pub mode: u8,
}

impl OperatingMode {
    /// Generic I2C device, mode 0
    pub const I2C: Self = Self {
        type_id: 100,
        mode: 0,
    };
}

impl Default for OperatingMode {
    fn default() -> Self {
        Self::I2C
    }
}

/// Sensor port mode setter
///
/// Provided by the platform's port manager. Each call takes effect
/// immediately; settling delays are the caller's concern.
pub trait PortModeSetter {
    /// Error type for mode changes
    type Error;

    /// Set the analog pin mode of a port
    fn set_analog_mode(&mut self, port: SensorPort, mode: AnalogMode) -> Result<(), Self::Error>;

    /// Reset the device attached to a port
    fn reset(&mut self, port: SensorPort) -> Result<(), Self::Error>;

    /// Select the operating mode of a port
    fn set_operating_mode(
        &mut self,
        port: SensorPort,
        mode: OperatingMode,
    ) -> Result<(), Self::Error>;
}

impl<T: PortModeSetter + ?Sized> PortModeSetter for &mut T {
    type Error = T::Error;

    fn set_analog_mode(&mut self, port: SensorPort, mode: AnalogMode) -> Result<(), Self::Error> {
        T::set_analog_mode(self, port, mode)
    }

    fn reset(&mut self, port: SensorPort) -> Result<(), Self::Error> {
        T::reset(self, port)
    }

    fn set_operating_mode(
        &mut self,
        port: SensorPort,
        mode: OperatingMode,
    ) -> Result<(), Self::Error> {
        T::set_operating_mode(self, port, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_index_roundtrip() {
        for port in SensorPort::ALL {
            assert_eq!(SensorPort::from_index(port.index()), Some(port));
        }
        assert_eq!(SensorPort::from_index(4), None);
    }

    #[test]
    fn test_default_operating_mode_is_i2c() {
        assert_eq!(OperatingMode::default(), OperatingMode::I2C);
    }
}
