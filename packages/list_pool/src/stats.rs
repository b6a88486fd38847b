/// A snapshot of a [`ListPool`][crate::ListPool]'s counters, returned by
/// [`ListPool::stats()`][crate::ListPool::stats].
///
/// Counters wrap on overflow.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct PoolStats {
    pub(crate) idle: usize,
    pub(crate) checked_out: usize,
    pub(crate) created: u64,
    pub(crate) replaced: u64,
    pub(crate) rents: u64,
}

impl PoolStats {
    /// Buffers waiting in the pool.
    #[must_use]
    pub fn idle(&self) -> usize {
        self.idle
    }

    /// Leases rented and not yet released.
    #[must_use]
    pub fn checked_out(&self) -> usize {
        self.checked_out
    }

    /// Slots created because no idle buffer was available at rent time.
    #[must_use]
    pub fn created(&self) -> u64 {
        self.created
    }

    /// Returned buffers that exceeded the capacity ceiling and were replaced with a
    /// default-sized buffer.
    #[must_use]
    pub fn replaced(&self) -> u64 {
        self.replaced
    }

    /// Total number of rents.
    #[must_use]
    pub fn rents(&self) -> u64 {
        self.rents
    }

    /// Rents that were served from an idle buffer instead of a new one.
    #[must_use]
    pub fn reused(&self) -> u64 {
        self.rents.saturating_sub(self.created)
    }
}
