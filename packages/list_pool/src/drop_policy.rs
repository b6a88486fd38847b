/// Determines what happens when the last handle to a pool is dropped while leases taken from
/// it are still checked out.
///
/// Outstanding leases remain usable either way. When released, they find their pool gone and
/// simply drop their buffer.
///
/// # Examples
///
/// ```
/// use list_pool::{DropPolicy, ListPool};
///
/// // The drop policy is set at pool creation time.
/// let pool = ListPool::<u8>::builder()
///     .drop_policy(DropPolicy::MustNotAbandonLeases)
///     .build();
///
/// let lease = pool.rent();
/// lease.release();
///
/// // Nothing is checked out, so dropping the pool is fine.
/// drop(pool);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum DropPolicy {
    /// The pool may be dropped with leases still checked out. A warning is logged via
    /// `tracing` so that forgotten leases can be tracked down. This is the default.
    #[default]
    MayAbandonLeases,

    /// The pool will panic if any lease is still checked out when it is dropped.
    ///
    /// Useful in tests to catch leases that escape the scope they were meant for, for example
    /// leases leaked via `mem::forget()` or stashed in long-lived structures.
    MustNotAbandonLeases,
}
