//! RNG seed derivation for deterministic dealing.
//!
//! A match holds one base seed; every hand's deal derives its own seed from
//! it, so a whole match replays identically from (base seed, hand number).

/// Derive the dealing seed for a hand of a match.
///
/// Unique per (match seed, hand number) pair and stable across calls.
pub fn derive_dealing_seed(match_seed: u64, hand_no: u32) -> u64 {
    // Wrapping arithmetic keeps derivation deterministic near the extremes
    match_seed
        .wrapping_add((hand_no as u64).wrapping_mul(1_000_003))
        .wrapping_add(1)
}
