use tinyvec::ArrayVec;

/// Default capacity of the parser's field buffer, terminator included.
pub const FIELD_CAPACITY: usize = 32;

/// Bounded, append-only byte accumulator.
///
/// Appending past capacity is refused rather than growing or panicking, and
/// reads past the current length yield `0`.
#[derive(Debug, Copy, Clone)]
pub struct FieldBuffer<const N: usize = FIELD_CAPACITY>(ArrayVec<[u8; N]>);

impl<const N: usize> Default for FieldBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FieldBuffer<N> {
    pub fn new() -> Self {
        Self(ArrayVec::new())
    }

    /// Appends `b`, or returns false and leaves the buffer untouched when full.
    pub fn append(&mut self, b: u8) -> bool {
        self.0.try_push(b).is_none()
    }

    /// Byte at `index`, or `0` when `index` is not below the current size.
    pub fn at(&self, index: usize) -> u8 {
        self.0.get(index).copied().unwrap_or(0)
    }

    /// Resets the size to zero. Storage is reused in place.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn size(&self) -> usize {
        self.0.len()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.0.len() == N
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl<const N: usize> defmt::Format for FieldBuffer<N> {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=[u8]:a}", self.0.as_slice())
    }
}
