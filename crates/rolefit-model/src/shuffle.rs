//! Deterministic seeded shuffling.
//!
//! The trainer needs reproducible pseudo-randomness for the train/test
//! split and the solver's per-epoch sample order: the same corpus and seed
//! must reproduce identical artifacts. Rather than pulling in a PRNG crate,
//! permutations are driven by SipHash keyed on the seed — the same hasher
//! already used for stable hashing elsewhere in the stack.

use std::hash::Hasher;

use siphasher::sip::SipHasher13;

/// Derives a pseudo-random `u64` from a seed, a stream id, and a counter.
///
/// Streams keep independent shuffles (per label group, per epoch) from
/// reusing the same value sequence.
fn mix(seed: u64, stream: u64, counter: u64) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(seed, stream);
    hasher.write_u64(counter);
    hasher.finish()
}

/// Deterministic Fisher-Yates shuffle.
///
/// The same `(seed, stream)` pair and slice length always produce the same
/// permutation, on every platform.
pub fn shuffle<T>(items: &mut [T], seed: u64, stream: u64) {
    for i in (1..items.len()).rev() {
        let j = (mix(seed, stream, i as u64) % (i as u64 + 1)) as usize;
        items.swap(i, j);
    }
}
