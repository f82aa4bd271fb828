use super::*;
use crate::foundation::rng::SequenceRng;

#[test]
fn empty_seed_hashes_to_zero() {
    assert_eq!(seed_hash(""), 0);
}

#[test]
fn abc_is_sum_of_code_points() {
    assert_eq!(seed_hash("abc"), 97 + 98 + 99);
    assert_eq!(seed_hash("abc"), 294);
}

#[test]
fn hash_is_stable_across_calls() {
    assert_eq!(seed_hash("mark"), seed_hash("mark"));
    assert_eq!(seed_hash("mark"), 109 + 97 + 114 + 107);
}

#[test]
fn non_ascii_uses_code_points_not_bytes() {
    assert_eq!(seed_hash("é"), 0xE9);
    assert_eq!(seed_hash("🎉"), 0x1F389);
}

#[test]
fn anagrams_collide() {
    assert_eq!(seed_hash("kram"), seed_hash("mark"));
}

#[test]
fn seeded_pick_ignores_rng() {
    let mut rng = SequenceRng::new(vec![0.99]);
    assert_eq!(pick_index(Some("abc"), 2, &mut rng), Some(0));
    assert_eq!(pick_index(Some("abc"), 5, &mut rng), Some(294 % 5));
}

#[test]
fn unseeded_pick_uses_rng() {
    let mut rng = SequenceRng::new(vec![0.0, 0.99]);
    assert_eq!(pick_index(None, 3, &mut rng), Some(0));
    assert_eq!(pick_index(None, 3, &mut rng), Some(2));
}

#[test]
fn pick_from_empty_is_none() {
    let mut rng = SequenceRng::default();
    assert_eq!(pick_index(Some("abc"), 0, &mut rng), None);
    assert_eq!(pick_index(None, 0, &mut rng), None);
}
