#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! This package provides [`ListPool`], a single-threaded pool of reusable `Vec<T>` buffers.
//!
//! Hot paths that build many short-lived lists (per frame, per request, per parsed record)
//! can rent an empty buffer that kept its allocation from earlier use instead of allocating a
//! new one each time.
//!
//! # Features
//!
//! - **Scoped leases**: [`Lease`] returns its buffer when dropped, on every exit path.
//! - **Explicit release**: [`Lease::release()`] consumes the lease, so the buffer cannot be
//!   touched after it went back to the pool.
//! - **Capacity hints**: [`ListPool::rent_with_capacity()`] grows a reused buffer as needed.
//! - **Retained-capacity ceiling**: a buffer that grew past the ceiling is replaced with a
//!   default-sized one when returned.
//! - **Weak back-reference**: leases never keep the pool alive.
//! - **Optional leak detection**: the pool can be configured to panic on drop if leases are
//!   still checked out.
//!
//! # Example
//!
//! ```rust
//! use list_pool::ListPool;
//!
//! let pool = ListPool::<u32>::new();
//!
//! // Scoped form: the buffer goes back when the closure returns.
//! let total: u32 = pool.rent_with(4, |numbers| {
//!     numbers.extend([1, 2, 3, 4]);
//!     numbers.iter().sum()
//! });
//! assert_eq!(total, 10);
//!
//! // Guard form: the buffer goes back when the lease is dropped or released.
//! let mut lease = pool.rent();
//! assert!(lease.is_empty());
//! lease.push(7);
//! lease.release();
//!
//! // Both rents above were served by the same buffer.
//! assert_eq!(pool.stats().created(), 1);
//! ```
//!
//! # Thread safety
//!
//! [`ListPool`] and [`Lease`] are neither [`Send`] nor [`Sync`]. Use one pool per thread.

mod builder;
mod drop_policy;
mod error;
mod lease;
mod pool;
mod slot;
mod stats;

pub use builder::*;
pub use drop_policy::*;
pub use error::Error;
pub use lease::*;
pub use pool::{DEFAULT_CAPACITY, DEFAULT_MAX_ALLOWED_CAPACITY, ListPool};
pub(crate) use pool::PoolCore;
pub(crate) use slot::Slot;
pub use stats::*;
