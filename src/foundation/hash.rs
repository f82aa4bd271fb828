use crate::foundation::rng::SceneRng;

/// Sum of the Unicode scalar values of `seed`.
///
/// Stable across runs and platforms. Not collision resistant: anagrams and short seeds collide
/// freely, which is acceptable for picking among a handful of canned variants.
pub fn seed_hash(seed: &str) -> u64 {
    seed.chars().map(|c| u64::from(u32::from(c))).sum()
}

/// Pick an index in `[0, len)`.
///
/// With a seed the result is `seed_hash(seed) % len`; without one it comes from `rng`.
/// Returns `None` when `len == 0`.
pub fn pick_index<R: SceneRng + ?Sized>(seed: Option<&str>, len: usize, rng: &mut R) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match seed {
        Some(s) => (seed_hash(s) % len as u64) as usize,
        None => rng.next_index(len),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/hash.rs"]
mod tests;
