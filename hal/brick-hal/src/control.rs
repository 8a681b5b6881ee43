//! Device control call abstractions
//!
//! The sensor bus device is driven through an ioctl-style call: the caller
//! submits an opaque buffer, the device mutates it in place and the status of
//! the transfer is reported inside the buffer itself.

/// Device control handle
///
/// Implementations typically wrap an open character device. The call blocks
/// for the duration of the underlying transfer.
pub trait DeviceControl {
    /// Error type for a failed control call
    type Error;

    /// Submit `buffer` under `request` and let the device mutate it in place
    ///
    /// # Arguments
    /// * `request` - 32-bit opcode identifying the operation
    /// * `buffer` - Request/response buffer, rewritten by the device
    fn exchange(&mut self, request: u32, buffer: &mut [u8]) -> Result<(), Self::Error>;
}

impl<T: DeviceControl + ?Sized> DeviceControl for &mut T {
    type Error = T::Error;

    fn exchange(&mut self, request: u32, buffer: &mut [u8]) -> Result<(), Self::Error> {
        T::exchange(self, request, buffer)
    }
}
