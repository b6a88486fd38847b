//! End-to-end behavior of `ListPool` and `Lease` through the public API only.

use std::num::{NonZero, ParseIntError};
use std::panic::{self, AssertUnwindSafe};

use list_pool::{DropPolicy, ListPool};

#[test]
fn rent_after_release_yields_empty_buffer() {
    let pool = ListPool::<String>::new();

    let mut lease = pool.rent();
    lease.push("left over".to_string());
    lease.push("more".to_string());
    lease.release();

    let lease = pool.rent();
    assert!(lease.is_empty());
}

#[test]
fn repeated_rent_release_reuses_one_slot() {
    let pool = ListPool::<u64>::new();

    let first_id = pool.rent().slot_id();

    for i in 0..100 {
        let mut lease = pool.rent();
        lease.extend(0..i);

        assert_eq!(lease.slot_id(), first_id);
        assert!(pool.idle_count() <= 1);

        lease.release();
        assert_eq!(pool.idle_count(), 1);
    }

    assert_eq!(pool.stats().created(), 1);
    assert_eq!(pool.stats().rents(), 101);
}

#[test]
fn default_pool_buffers_hold_at_least_32() {
    let pool = ListPool::<u8>::new();

    assert!(pool.rent().capacity() >= 32);
}

#[test]
fn min_capacity_grows_existing_buffer() {
    let pool = ListPool::<u32>::new();

    let lease = pool.rent();
    let id = lease.slot_id();
    assert!(lease.capacity() < 100);
    lease.release();

    let lease = pool.rent_with_capacity(100);
    assert!(lease.capacity() >= 100);

    // Same slot, grown rather than swapped for a new one.
    assert_eq!(lease.slot_id(), id);
    assert_eq!(pool.stats().created(), 1);
}

#[test]
fn zero_min_capacity_is_no_hint() {
    let pool = ListPool::<u32>::with_capacities(8, 16).unwrap();

    let lease = pool.rent_with_capacity(0);
    assert_eq!(lease.capacity(), 8);
}

#[test]
fn oversized_buffer_shrinks_to_default_not_ceiling() {
    let pool = ListPool::<u32>::builder()
        .default_capacity(NonZero::new(8).unwrap())
        .max_allowed_capacity(NonZero::new(16).unwrap())
        .build();

    let mut lease = pool.rent();
    lease.reserve_exact(100);
    assert!(lease.capacity() >= 100);
    lease.release();

    assert_eq!(pool.rent().capacity(), 8);
}

#[test]
fn ceiling_is_raised_to_default() {
    let pool = ListPool::<u32>::with_capacities(50, 10).unwrap();

    assert_eq!(pool.max_allowed_capacity(), 50);

    // A buffer at exactly the default capacity is kept as-is.
    let lease = pool.rent();
    let capacity = lease.capacity();
    lease.release();
    assert_eq!(pool.rent().capacity(), capacity);
    assert_eq!(pool.stats().replaced(), 0);
}

#[test]
fn explicit_release_and_scope_exit_return_once() {
    let pool = ListPool::<u32>::new();

    {
        let lease = pool.rent();
        assert_eq!(pool.idle_count(), 0);

        // Explicit release followed by the end of scope.
        lease.release();
    }

    assert_eq!(pool.idle_count(), 1);
    assert_eq!(pool.checked_out_count(), 0);
}

#[test]
fn concurrent_leases_are_distinct() {
    let pool = ListPool::<u32>::new();

    let mut first = pool.rent();
    let mut second = pool.rent();

    assert_ne!(first, second);
    assert_ne!(first.slot_id(), second.slot_id());

    first.push(1);
    second.extend([2, 3]);

    assert_eq!(first.as_slice(), &[1]);
    assert_eq!(second.as_slice(), &[2, 3]);
    assert_eq!(pool.checked_out_count(), 2);

    drop(first);
    drop(second);

    assert_eq!(pool.idle_count(), 2);
}

fn parse_numbers(pool: &ListPool<u32>, input: &str) -> Result<u32, ParseIntError> {
    let mut numbers = pool.rent();

    for part in input.split(',') {
        // An early return via `?` still hands the buffer back.
        numbers.push(part.trim().parse()?);
    }

    Ok(numbers.iter().sum())
}

#[test]
fn early_return_releases_lease() {
    let pool = ListPool::<u32>::new();

    assert_eq!(parse_numbers(&pool, "1, 2, 3").unwrap(), 6);
    assert!(parse_numbers(&pool, "1, x, 3").is_err());

    assert_eq!(pool.checked_out_count(), 0);
    assert_eq!(pool.idle_count(), 1);
}

#[test]
fn panic_inside_scope_releases_lease() {
    let pool = ListPool::<u32>::new();

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut lease = pool.rent();
        lease.push(1);
        panic!("failure while the lease is held");
    }));

    assert!(result.is_err());
    assert_eq!(pool.checked_out_count(), 0);
    assert_eq!(pool.idle_count(), 1);
}

#[test]
fn rent_with_scoped_form() {
    let pool = ListPool::<char>::new();

    let word: String = pool.rent_with(5, |letters| {
        assert!(letters.capacity() >= 5);
        letters.extend("hello".chars());
        letters.iter().rev().collect()
    });

    assert_eq!(word, "olleh");
    assert_eq!(pool.idle_count(), 1);
}

#[test]
fn lease_outliving_pool_is_harmless() {
    let pool = ListPool::<Vec<u8>>::new();
    let mut lease = pool.rent();

    drop(pool);

    lease.push(vec![1, 2, 3]);
    assert_eq!(lease.len(), 1);
    drop(lease);
}

#[test]
fn strict_drop_policy_allows_clean_shutdown() {
    let pool = ListPool::<u32>::builder()
        .drop_policy(DropPolicy::MustNotAbandonLeases)
        .build();

    for _ in 0..3 {
        let mut lease = pool.rent();
        lease.push(1);
    }

    drop(pool);
}
