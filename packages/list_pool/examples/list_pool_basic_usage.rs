//! Example demonstrating per-frame scratch buffers rented from a `ListPool`.
//!
//! Each simulated frame collects visible entity ids into a pooled buffer. After the first
//! frame, no further buffers are allocated.

use list_pool::ListPool;

fn visible_entities(pool: &ListPool<u32>, frame: u32) -> usize {
    let mut visible = pool.rent();

    for entity in 0..100_u32 {
        if (entity ^ frame) & 1 == 0 {
            visible.push(entity);
        }
    }

    visible.len()
    // `visible` goes back to the pool here.
}

fn main() {
    println!("=== ListPool: per-frame scratch buffers ===");

    let pool = ListPool::<u32>::new();

    for frame in 0..5 {
        let count = visible_entities(&pool, frame);
        println!("Frame {frame}: {count} visible entities");
    }

    // The scoped form hands the buffer back when the closure returns.
    let largest = pool.rent_with(16, |ids| {
        ids.extend([4, 8, 15, 16, 23, 42]);
        ids.iter().copied().max()
    });
    println!("Largest id: {largest:?}");

    let stats = pool.stats();
    println!(
        "Rents: {}, buffers created: {}, reused: {}",
        stats.rents(),
        stats.created(),
        stats.reused()
    );
}
