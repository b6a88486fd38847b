use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;
use std::num::NonZero;

use crate::{DEFAULT_CAPACITY, DEFAULT_MAX_ALLOWED_CAPACITY, DropPolicy, ListPool, PoolCore};

const DEFAULT_CAPACITY_NZ: NonZero<usize> = match NonZero::new(DEFAULT_CAPACITY) {
    Some(value) => value,
    None => panic!("default capacity must be non-zero"),
};

const DEFAULT_MAX_ALLOWED_CAPACITY_NZ: NonZero<usize> =
    match NonZero::new(DEFAULT_MAX_ALLOWED_CAPACITY) {
        Some(value) => value,
        None => panic!("default max allowed capacity must be non-zero"),
    };

/// Builder for creating an instance of [`ListPool`].
///
/// # Examples
///
/// ```
/// use std::num::NonZero;
///
/// use list_pool::{DropPolicy, ListPool};
///
/// // Default configuration.
/// let pool = ListPool::<u32>::builder().build();
///
/// // Small buffers, tight ceiling, strict leak checking.
/// let pool = ListPool::<u32>::builder()
///     .default_capacity(NonZero::new(8).unwrap())
///     .max_allowed_capacity(NonZero::new(16).unwrap())
///     .drop_policy(DropPolicy::MustNotAbandonLeases)
///     .build();
/// ```
#[must_use]
pub struct ListPoolBuilder<T> {
    default_capacity: NonZero<usize>,
    max_allowed_capacity: NonZero<usize>,
    drop_policy: DropPolicy,

    // The builder holds no `T`, so it stays `Send` and `Sync` whatever `T` is.
    _element: PhantomData<fn() -> T>,
}

impl<T> ListPoolBuilder<T> {
    pub(crate) fn new() -> Self {
        Self {
            default_capacity: DEFAULT_CAPACITY_NZ,
            max_allowed_capacity: DEFAULT_MAX_ALLOWED_CAPACITY_NZ,
            drop_policy: DropPolicy::default(),
            _element: PhantomData,
        }
    }

    /// Sets the capacity that newly allocated buffers start with, and that oversized buffers
    /// are reset to when returned.
    ///
    /// Defaults to [`DEFAULT_CAPACITY`].
    pub fn default_capacity(mut self, capacity: NonZero<usize>) -> Self {
        self.default_capacity = capacity;
        self
    }

    /// Sets the largest capacity a returned buffer may keep.
    ///
    /// If this is smaller than the default capacity, the default capacity is used as the
    /// ceiling instead. Defaults to [`DEFAULT_MAX_ALLOWED_CAPACITY`].
    pub fn max_allowed_capacity(mut self, capacity: NonZero<usize>) -> Self {
        self.max_allowed_capacity = capacity;
        self
    }

    /// Sets the [drop policy][DropPolicy] for the pool. This governs how to treat leases that
    /// are still checked out when the pool is dropped.
    pub fn drop_policy(mut self, policy: DropPolicy) -> Self {
        self.drop_policy = policy;
        self
    }

    /// Builds the pool with the specified configuration.
    ///
    /// For simple cases, prefer [`ListPool::new()`] which is equivalent to
    /// `ListPool::builder().build()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::num::NonZero;
    ///
    /// use list_pool::ListPool;
    ///
    /// let pool = ListPool::<u32>::builder()
    ///     .default_capacity(NonZero::new(50).unwrap())
    ///     .max_allowed_capacity(NonZero::new(10).unwrap())
    ///     .build();
    ///
    /// // The ceiling is never below the default capacity.
    /// assert_eq!(pool.max_allowed_capacity(), 50);
    /// ```
    #[must_use]
    pub fn build(self) -> ListPool<T> {
        ListPool::from_core(PoolCore::new(
            self.default_capacity,
            self.max_allowed_capacity,
            self.drop_policy,
        ))
    }
}

impl<T> fmt::Debug for ListPoolBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(type_name::<Self>())
            .field("default_capacity", &self.default_capacity)
            .field("max_allowed_capacity", &self.max_allowed_capacity)
            .field("drop_policy", &self.drop_policy)
            .finish()
    }
}
