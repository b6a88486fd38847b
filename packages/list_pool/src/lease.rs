use std::any::type_name;
use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::rc::Weak;

use tracing::debug;

use crate::{PoolCore, Slot};

/// A buffer rented from a [`ListPool`][crate::ListPool].
///
/// The lease dereferences to the `Vec<T>` it holds, so it can be used like the vector itself.
/// The buffer goes back to the pool exactly once, either when [`release()`][Self::release] is
/// called or when the lease is dropped, whichever happens first. Because the drop happens on
/// every exit path (early return, `?`, unwinding), a lease held in a local variable is a scope
/// guard and needs no explicit cleanup.
///
/// The lease does not keep its pool alive. If the pool is dropped first, releasing the lease
/// simply drops the buffer.
///
/// # Identity
///
/// Equality and hashing compare identity, never buffer contents: two leases are equal only if
/// they were rented from the same pool and hold the same slot. Each slot is held by at most one
/// lease at a time, so distinct live leases are never equal.
///
/// # Single-threaded design
///
/// This type is neither [`Send`] nor [`Sync`].
///
/// # Example
///
/// ```rust
/// use list_pool::ListPool;
///
/// let pool = ListPool::<&str>::new();
///
/// let mut words = pool.rent();
/// words.push("hello");
/// words.push("world");
///
/// assert_eq!(words.join(" "), "hello world");
/// assert_eq!(words.to_string(), "Lease<&str>[2]");
///
/// words.release();
/// assert_eq!(pool.idle_count(), 1);
/// ```
pub struct Lease<T> {
    /// Non-owning. Only used to route the buffer back on release.
    pool: Weak<RefCell<PoolCore<T>>>,

    slot_id: u64,
    buffer: Vec<T>,

    /// Set once the buffer has gone back to the pool for this checkout.
    released: bool,
}

impl<T> Lease<T> {
    pub(crate) fn new(slot: Slot<T>, pool: Weak<RefCell<PoolCore<T>>>) -> Self {
        Self {
            pool,
            slot_id: slot.id,
            buffer: slot.buffer,
            released: false,
        }
    }

    /// Returns the rented buffer.
    #[must_use]
    pub fn buffer(&self) -> &Vec<T> {
        &self.buffer
    }

    /// Returns the rented buffer for mutation.
    #[must_use]
    pub fn buffer_mut(&mut self) -> &mut Vec<T> {
        &mut self.buffer
    }

    /// Identifies the pool slot this lease holds.
    ///
    /// A slot keeps its id across rent/return cycles, so renting again after a release
    /// typically yields the same id. The id is unique within one pool.
    ///
    /// # Example
    ///
    /// ```rust
    /// use list_pool::ListPool;
    ///
    /// let pool = ListPool::<u8>::new();
    ///
    /// let lease = pool.rent();
    /// let id = lease.slot_id();
    /// lease.release();
    ///
    /// assert_eq!(pool.rent().slot_id(), id);
    /// ```
    #[must_use]
    pub fn slot_id(&self) -> u64 {
        self.slot_id
    }

    /// Returns the buffer to the pool.
    ///
    /// Equivalent to dropping the lease. Consuming the lease prevents any further access to a
    /// buffer that the pool may already have handed to another renter.
    pub fn release(mut self) {
        self.release_core();
        // The drop that follows is a no-op because `released` is now set.
    }

    fn release_core(&mut self) {
        if self.released {
            return;
        }

        self.released = true;

        // Empty the buffer before touching the pool state. Element destructors may themselves
        // rent from or release to this pool.
        let mut buffer = mem::take(&mut self.buffer);
        buffer.clear();

        let slot = Slot {
            id: self.slot_id,
            buffer,
        };

        match self.pool.upgrade() {
            Some(pool) => pool.borrow_mut().return_slot(slot),
            None => log_orphaned_release::<T>(slot.id),
        }
    }
}

#[cfg_attr(test, mutants::skip)] // Only effect is a log event - no API contract to test.
fn log_orphaned_release<T>(slot_id: u64) {
    debug!(
        element_type = type_name::<T>(),
        slot_id,
        "lease released after its pool was dropped; discarding buffer"
    );
}

impl<T> Deref for Lease<T> {
    type Target = Vec<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.buffer
    }
}

impl<T> DerefMut for Lease<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buffer
    }
}

impl<T> AsRef<[T]> for Lease<T> {
    fn as_ref(&self) -> &[T] {
        &self.buffer
    }
}

impl<T> AsMut<[T]> for Lease<T> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.buffer
    }
}

impl<T> Drop for Lease<T> {
    fn drop(&mut self) {
        self.release_core();
    }
}

impl<T> PartialEq for Lease<T> {
    fn eq(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.pool, &other.pool) && self.slot_id == other.slot_id
    }
}

impl<T> Eq for Lease<T> {}

impl<T> Hash for Lease<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ptr::hash(self.pool.as_ptr(), state);
        self.slot_id.hash(state);
    }
}

impl<T> fmt::Display for Lease<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lease<{}>[{}]", type_name::<T>(), self.buffer.len())
    }
}

impl<T> fmt::Debug for Lease<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(type_name::<Self>())
            .field("type_name", &type_name::<T>())
            .field("slot_id", &self.slot_id)
            .field("len", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .finish_non_exhaustive()
    }
}
