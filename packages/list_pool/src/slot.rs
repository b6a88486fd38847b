/// One unit of pooling: a buffer plus the identity of the slot that holds it.
///
/// The slot id survives rent/return cycles. The buffer inside may be swapped out by the
/// shrink policy without changing the id.
#[derive(Debug)]
pub(crate) struct Slot<T> {
    pub(crate) id: u64,
    pub(crate) buffer: Vec<T>,
}

impl<T> Slot<T> {
    pub(crate) fn new(id: u64, capacity: usize) -> Self {
        Self {
            id,
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Prepares the slot for a new checkout.
    ///
    /// The buffer is emptied without giving up its allocation. A `min_capacity` of zero means
    /// "no hint"; otherwise the buffer grows in place until it can hold at least that many
    /// elements.
    pub(crate) fn reset(&mut self, min_capacity: usize) {
        self.buffer.clear();

        if min_capacity > self.buffer.capacity() {
            // Length is zero after the clear, so this reserves room for `min_capacity` elements.
            self.buffer.reserve(min_capacity);
        }
    }

    /// Drops the current buffer and starts over with an empty one of the given capacity.
    ///
    /// The old allocation is released entirely, not shrunk in place.
    pub(crate) fn replace_buffer(&mut self, capacity: usize) {
        self.buffer = Vec::with_capacity(capacity);
    }
}
