use std::any::type_name;
use std::cell::RefCell;
use std::fmt;
use std::num::NonZero;
use std::rc::Rc;
use std::thread;

use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::{DropPolicy, Lease, ListPoolBuilder, PoolStats, Slot};

/// Default capacity of a freshly allocated buffer.
pub const DEFAULT_CAPACITY: usize = 32;

/// Default ceiling on the capacity a returned buffer may keep.
pub const DEFAULT_MAX_ALLOWED_CAPACITY: usize = 512;

/// Shared state behind every handle to the same pool.
pub(crate) struct PoolCore<T> {
    /// Slots not checked out by anyone. Popped from the end, so the most recently returned
    /// (and most likely cache-warm) buffer is handed out first.
    idle: Vec<Slot<T>>,

    default_capacity: NonZero<usize>,

    /// Never smaller than `default_capacity`.
    max_allowed_capacity: NonZero<usize>,

    drop_policy: DropPolicy,

    next_slot_id: u64,
    checked_out: usize,
    created: u64,
    replaced: u64,
    rents: u64,
}

impl<T> PoolCore<T> {
    pub(crate) fn new(
        default_capacity: NonZero<usize>,
        max_allowed_capacity: NonZero<usize>,
        drop_policy: DropPolicy,
    ) -> Self {
        Self {
            idle: Vec::new(),
            default_capacity,
            max_allowed_capacity: default_capacity.max(max_allowed_capacity),
            drop_policy,
            next_slot_id: 0,
            checked_out: 0,
            created: 0,
            replaced: 0,
            rents: 0,
        }
    }

    /// Hands out the most recently returned slot, creating a new one if none are idle.
    ///
    /// The slot is not reset here. The caller does that after the pool state is no longer
    /// borrowed.
    fn take_slot(&mut self) -> Slot<T> {
        let slot = self.idle.pop().unwrap_or_else(|| {
            let id = self.next_slot_id;
            self.next_slot_id = self.next_slot_id.wrapping_add(1);
            self.created = self.created.wrapping_add(1);

            trace!(
                element_type = type_name::<T>(),
                slot_id = id,
                capacity = self.default_capacity.get(),
                "creating new list slot"
            );

            Slot::new(id, self.default_capacity.get())
        });

        self.checked_out = self.checked_out.wrapping_add(1);
        self.rents = self.rents.wrapping_add(1);

        slot
    }

    /// Takes a slot back from a lease. The buffer must already be empty.
    pub(crate) fn return_slot(&mut self, mut slot: Slot<T>) {
        debug_assert!(slot.buffer.is_empty());

        self.checked_out = self.checked_out.saturating_sub(1);

        let capacity = slot.buffer.capacity();

        // A `Vec` of zero-sized elements reports `usize::MAX` capacity but owns no memory.
        if size_of::<T>() != 0 && capacity > self.max_allowed_capacity.get() {
            debug!(
                element_type = type_name::<T>(),
                slot_id = slot.id,
                capacity,
                max_allowed_capacity = self.max_allowed_capacity.get(),
                "returned list buffer exceeds capacity ceiling; replacing with default-sized buffer"
            );

            slot.replace_buffer(self.default_capacity.get());
            self.replaced = self.replaced.wrapping_add(1);
        }

        trace!(
            element_type = type_name::<T>(),
            slot_id = slot.id,
            capacity = slot.buffer.capacity(),
            "list slot returned to pool"
        );

        self.idle.push(slot);
    }

    #[cfg_attr(test, mutants::skip)] // Only effect is a log event - no API contract to test.
    fn warn_abandoned_leases(&self) {
        warn!(
            element_type = type_name::<T>(),
            checked_out = self.checked_out,
            "list pool dropped while leases were still checked out"
        );
    }

    fn stats(&self) -> PoolStats {
        PoolStats {
            idle: self.idle.len(),
            checked_out: self.checked_out,
            created: self.created,
            replaced: self.replaced,
            rents: self.rents,
        }
    }
}

impl<T> Drop for PoolCore<T> {
    fn drop(&mut self) {
        if self.checked_out == 0 {
            return;
        }

        match self.drop_policy {
            DropPolicy::MayAbandonLeases => self.warn_abandoned_leases(),
            DropPolicy::MustNotAbandonLeases => {
                // Do not double-panic if we are already unwinding.
                if !thread::panicking() {
                    panic!(
                        "dropped a ListPool<{}> with {} lease(s) still checked out when the drop policy forbids it",
                        type_name::<T>(),
                        self.checked_out
                    );
                }
            }
        }
    }
}

impl<T> fmt::Debug for PoolCore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(type_name::<Self>())
            .field("idle", &self.idle.len())
            .field("default_capacity", &self.default_capacity)
            .field("max_allowed_capacity", &self.max_allowed_capacity)
            .field("drop_policy", &self.drop_policy)
            .field("checked_out", &self.checked_out)
            .finish_non_exhaustive()
    }
}

/// A single-threaded pool of reusable `Vec<T>` buffers.
///
/// Renting returns a [`Lease`] over an empty buffer that has kept its allocation from earlier
/// use. The lease gives the buffer back when it is dropped or explicitly
/// [released][Lease::release], so repeated short-lived lists in a hot path stop allocating after
/// the first few iterations.
///
/// # Capacity policy
///
/// * New buffers are allocated with the pool's default capacity.
/// * Buffers may grow without limit while rented.
/// * A returned buffer whose capacity exceeds the ceiling is discarded and replaced with a fresh
///   buffer of the default capacity, so one oversized list does not inflate the pool forever.
///
/// The number of idle buffers is not limited. The pool holds as many as were checked out at the
/// same time at peak.
///
/// # Single-threaded design
///
/// This type is a cheaply cloneable handle to shared state and is neither [`Send`] nor
/// [`Sync`]. All clones refer to the same idle buffers. Create one pool per thread if you
/// need pooling on several threads.
///
/// # Example
///
/// ```rust
/// use list_pool::ListPool;
///
/// let pool = ListPool::<u32>::new();
///
/// for frame in 0..3 {
///     let mut scratch = pool.rent();
///     scratch.extend(0..frame);
///
///     // The buffer goes back to the pool at the end of each iteration.
/// }
///
/// assert_eq!(pool.idle_count(), 1);
/// ```
pub struct ListPool<T> {
    core: Rc<RefCell<PoolCore<T>>>,
}

impl<T> ListPool<T> {
    /// Creates a pool with [`DEFAULT_CAPACITY`] and [`DEFAULT_MAX_ALLOWED_CAPACITY`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use list_pool::ListPool;
    ///
    /// let pool = ListPool::<String>::new();
    ///
    /// assert_eq!(pool.default_capacity(), 32);
    /// assert_eq!(pool.max_allowed_capacity(), 512);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Returns a builder for creating a [`ListPool`] with custom configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::num::NonZero;
    ///
    /// use list_pool::ListPool;
    ///
    /// let pool = ListPool::<u8>::builder()
    ///     .default_capacity(NonZero::new(1024).unwrap())
    ///     .max_allowed_capacity(NonZero::new(64 * 1024).unwrap())
    ///     .build();
    ///
    /// assert_eq!(pool.default_capacity(), 1024);
    /// ```
    pub fn builder() -> ListPoolBuilder<T> {
        ListPoolBuilder::new()
    }

    /// Creates a pool from plain integer capacities.
    ///
    /// If `max_allowed_capacity` is smaller than `default_capacity`, the ceiling is raised to
    /// `default_capacity`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroCapacity`] if either capacity is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use list_pool::ListPool;
    ///
    /// let pool = ListPool::<u64>::with_capacities(50, 10).unwrap();
    /// assert_eq!(pool.max_allowed_capacity(), 50);
    ///
    /// assert!(ListPool::<u64>::with_capacities(0, 10).is_err());
    /// ```
    pub fn with_capacities(default_capacity: usize, max_allowed_capacity: usize) -> Result<Self> {
        let default_capacity = NonZero::new(default_capacity).ok_or(Error::ZeroCapacity {
            parameter: "default_capacity",
        })?;

        let max_allowed_capacity =
            NonZero::new(max_allowed_capacity).ok_or(Error::ZeroCapacity {
                parameter: "max_allowed_capacity",
            })?;

        Ok(Self::builder()
            .default_capacity(default_capacity)
            .max_allowed_capacity(max_allowed_capacity)
            .build())
    }

    pub(crate) fn from_core(core: PoolCore<T>) -> Self {
        Self {
            core: Rc::new(RefCell::new(core)),
        }
    }

    /// Rents an empty buffer.
    ///
    /// The most recently returned buffer is reused if one is idle, otherwise a new buffer with
    /// the default capacity is allocated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use list_pool::ListPool;
    ///
    /// let pool = ListPool::<char>::new();
    ///
    /// let mut lease = pool.rent();
    /// lease.push('a');
    /// lease.release();
    ///
    /// let lease = pool.rent();
    /// assert!(lease.is_empty());
    /// ```
    #[must_use]
    pub fn rent(&self) -> Lease<T> {
        self.rent_with_capacity(0)
    }

    /// Rents an empty buffer that can hold at least `min_capacity` elements without
    /// reallocating.
    ///
    /// A `min_capacity` of zero is no hint at all. A reused buffer that is too small is grown;
    /// it is not replaced.
    ///
    /// # Example
    ///
    /// ```rust
    /// use list_pool::ListPool;
    ///
    /// let pool = ListPool::<u16>::new();
    ///
    /// let lease = pool.rent_with_capacity(100);
    /// assert!(lease.capacity() >= 100);
    /// ```
    #[must_use]
    pub fn rent_with_capacity(&self, min_capacity: usize) -> Lease<T> {
        let mut slot = self.core.borrow_mut().take_slot();

        slot.reset(min_capacity);

        trace!(
            element_type = type_name::<T>(),
            slot_id = slot.id,
            min_capacity,
            capacity = slot.buffer.capacity(),
            "rented list buffer"
        );

        Lease::new(slot, Rc::downgrade(&self.core))
    }

    /// Rents a buffer for the duration of `f` and returns it to the pool afterwards.
    ///
    /// The buffer is returned on every exit path, including when `f` panics.
    ///
    /// # Example
    ///
    /// ```rust
    /// use list_pool::ListPool;
    ///
    /// let pool = ListPool::<u32>::new();
    ///
    /// let sum: u32 = pool.rent_with(10, |numbers| {
    ///     numbers.extend(1..=10);
    ///     numbers.iter().sum()
    /// });
    ///
    /// assert_eq!(sum, 55);
    /// assert_eq!(pool.checked_out_count(), 0);
    /// ```
    pub fn rent_with<R>(&self, min_capacity: usize, f: impl FnOnce(&mut Vec<T>) -> R) -> R {
        let mut lease = self.rent_with_capacity(min_capacity);
        f(lease.buffer_mut())
    }

    /// Returns the number of buffers waiting in the pool.
    #[must_use]
    pub fn idle_count(&self) -> usize {
        self.core.borrow().idle.len()
    }

    /// Returns the number of leases that have been rented and not yet released.
    #[must_use]
    pub fn checked_out_count(&self) -> usize {
        self.core.borrow().checked_out
    }

    /// Returns the capacity new buffers are allocated with.
    #[must_use]
    pub fn default_capacity(&self) -> usize {
        self.core.borrow().default_capacity.get()
    }

    /// Returns the largest capacity a returned buffer may keep.
    ///
    /// This is never smaller than [`default_capacity()`][Self::default_capacity].
    #[must_use]
    pub fn max_allowed_capacity(&self) -> usize {
        self.core.borrow().max_allowed_capacity.get()
    }

    /// Returns a snapshot of the pool's counters.
    ///
    /// # Example
    ///
    /// ```rust
    /// use list_pool::ListPool;
    ///
    /// let pool = ListPool::<u8>::new();
    ///
    /// for _ in 0..10 {
    ///     let _lease = pool.rent();
    /// }
    ///
    /// let stats = pool.stats();
    /// assert_eq!(stats.rents(), 10);
    /// assert_eq!(stats.created(), 1);
    /// assert_eq!(stats.reused(), 9);
    /// ```
    #[must_use]
    pub fn stats(&self) -> PoolStats {
        self.core.borrow().stats()
    }
}

impl<T> Default for ListPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Manual impl because the derive would needlessly require `T: Clone`.
impl<T> Clone for ListPool<T> {
    fn clone(&self) -> Self {
        Self {
            core: Rc::clone(&self.core),
        }
    }
}

impl<T> fmt::Debug for ListPool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(type_name::<Self>())
            .field("core", &self.core)
            .finish()
    }
}
