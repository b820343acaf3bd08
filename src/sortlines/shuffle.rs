//! Fisher–Yates shuffle over an injected random source
//!
//! The generator is a parameter so callers choose between the thread-local
//! generator and a seeded one (`StdRng::seed_from_u64`) for reproducible output.

use rand::Rng;

/// Shuffle `items` in place. Walks from the last index down to 1, swapping each
/// element with a uniformly drawn index in `0..=i`.
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for i in (1..items.len()).rev() {
        let r = rng.random_range(0..=i);
        items.swap(i, r);
    }
}
