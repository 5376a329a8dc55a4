//! Bounded edit distance for the typo-tolerance pass.

use smallvec::{SmallVec, smallvec};

/// Sentinel meaning "cannot be within tolerance 1".
pub const BEYOND_TOLERANCE: usize = 2;

/// Insertion/deletion/substitution edit distance between two short strings,
/// computed over `char`s with a two-row DP table. No transposition:
/// `edit_distance("ab", "ba") == 2`.
///
/// Callers only ever test the result against `<= 1`, so any pair whose
/// char counts differ by more than one short-circuits to
/// [`BEYOND_TOLERANCE`] without running the table.
pub fn edit_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    if a.is_empty() || b.is_empty() {
        return a.chars().count().max(b.chars().count());
    }

    let a: SmallVec<[char; 16]> = a.chars().collect();
    let b: SmallVec<[char; 16]> = b.chars().collect();
    if a.len().abs_diff(b.len()) > 1 {
        return BEYOND_TOLERANCE;
    }

    let mut prev: SmallVec<[usize; 24]> = (0..=b.len()).collect();
    let mut cur: SmallVec<[usize; 24]> = smallvec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        cur[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            cur[j + 1] = (cur[j] + 1) // insertion
                .min(prev[j + 1] + 1) // deletion
                .min(prev[j] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[b.len()]
}
