//! Configuration types
//!
//! Board-agnostic configuration structures. With the `serde` feature they
//! can be stored as postcard binary data and loaded with [`decode`].

pub mod bus;
pub mod display;

pub use bus::{BringUpConfig, BusConfig, RetryPolicy};
pub use display::{DisplayGeometry, Rgb, ScreenshotConfig};

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Binary data could not be deserialized
    Deserialize,
    /// Values are out of their supported range
    Invalid,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::Deserialize => write!(f, "configuration data is malformed"),
            ConfigError::Invalid => write!(f, "configuration value out of range"),
        }
    }
}

/// Validation hook for configuration types
pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Decode and validate a postcard-encoded configuration blob
#[cfg(feature = "serde")]
pub fn decode<T>(bytes: &[u8]) -> Result<T, ConfigError>
where
    T: serde::de::DeserializeOwned + Validate,
{
    let value: T = postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;
    value.validate()?;
    Ok(value)
}

/// Encode a configuration value into postcard binary form
#[cfg(feature = "serde")]
pub fn encode<T>(value: &T) -> Result<alloc::vec::Vec<u8>, ConfigError>
where
    T: serde::Serialize,
{
    postcard::to_allocvec(value).map_err(|_| ConfigError::Invalid)
}
