//! Memory-mapped output abstractions
//!
//! The LCD is driven by writing a complete hardware frame into a mapped
//! region. Implementations wrap whatever mapping the platform provides.

/// Memory-mapped output region
pub trait MappedOutput {
    /// Error type for mapped writes
    type Error;

    /// Size of the mapped region in bytes
    fn len(&self) -> usize;

    /// Check whether the region is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy `data` into the region starting at `offset`
    ///
    /// Returns the number of bytes actually written, which may be less than
    /// `data.len()` when the region ends early.
    fn write_at(&mut self, offset: usize, data: &[u8]) -> Result<usize, Self::Error>;
}

impl<T: MappedOutput + ?Sized> MappedOutput for &mut T {
    type Error = T::Error;

    fn len(&self) -> usize {
        T::len(self)
    }

    fn write_at(&mut self, offset: usize, data: &[u8]) -> Result<usize, Self::Error> {
        T::write_at(self, offset, data)
    }
}
