//! Fisher-Yates shuffle.
//!
//! # Algorithm
//!
//! Walks the sequence from the last index down to 1 and swaps each element
//! with a uniformly chosen element at or before it. Every permutation is
//! equally likely given a uniform source.
//!
//! # Complexity
//!
//! O(n) time, one random draw per swap.
//!
//! # Reference
//!
//! Durstenfeld, R. (1964). "Algorithm 235: Random permutation",
//! *Communications of the ACM* 7(7), 420.

use crate::random::RandomSource;

/// Returns a random permutation of `items`, leaving `items` untouched.
///
/// For each `i` from `len - 1` down to `1`, draws `u` from `source` and
/// swaps positions `i` and `floor(u * (i + 1))`.
///
/// # Examples
///
/// ```
/// use road_roulette::engine::shuffle;
/// use road_roulette::random::RngSource;
///
/// let input = vec![1, 2, 3, 4, 5];
/// let mut source = RngSource::seeded(42);
/// let mut output = shuffle(&input, &mut source);
/// assert_eq!(input, vec![1, 2, 3, 4, 5]);
/// output.sort();
/// assert_eq!(output, input);
/// ```
pub fn shuffle<T, S>(items: &[T], source: &mut S) -> Vec<T>
where
    T: Clone,
    S: RandomSource + ?Sized,
{
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = pick_index(source.next_f64(), i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Maps a draw in `[0, 1)` onto `0..=upper`.
///
/// Out-of-range draws from a misbehaving source are clamped.
fn pick_index(draw: f64, upper: usize) -> usize {
    let j = (draw * (upper + 1) as f64).floor();
    if j.is_nan() || j < 0.0 {
        0
    } else {
        (j as usize).min(upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{RngSource, SequenceSource};

    #[test]
    fn test_shuffle_preserves_length_and_elements() {
        let input = vec![1, 2, 3, 4, 5];
        let mut source = RngSource::seeded(3);
        let mut result = shuffle(&input, &mut source);
        assert_eq!(result.len(), input.len());
        result.sort();
        assert_eq!(result, input);
    }

    #[test]
    fn test_shuffle_does_not_mutate_input() {
        let input = vec!["a", "b", "c", "d"];
        let original = input.clone();
        let mut source = RngSource::thread();
        let _ = shuffle(&input, &mut source);
        assert_eq!(input, original);
    }

    #[test]
    fn test_shuffle_scripted_draws() {
        // i=4 j=0, i=3 j=0, i=2 j=0, i=1 j=0
        let mut source = SequenceSource::stepped(10);
        let result = shuffle(&[1, 2, 3, 4, 5], &mut source);
        assert_eq!(result, vec![2, 3, 4, 5, 1]);
        assert_eq!(source.calls(), 4);
    }

    #[test]
    fn test_shuffle_high_draws_keep_order() {
        let mut source = SequenceSource::new(vec![0.99]);
        let result = shuffle(&[1, 2, 3, 4, 5], &mut source);
        assert_eq!(result, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut source = SequenceSource::new(vec![0.5]);
        assert!(shuffle::<u8, _>(&[], &mut source).is_empty());
        assert_eq!(shuffle(&[7], &mut source), vec![7]);
        assert_eq!(source.calls(), 0);
    }

    #[test]
    fn test_pick_index_clamps() {
        assert_eq!(pick_index(0.0, 4), 0);
        assert_eq!(pick_index(0.999, 4), 4);
        assert_eq!(pick_index(1.0, 4), 4);
        assert_eq!(pick_index(-0.5, 4), 0);
        assert_eq!(pick_index(f64::NAN, 4), 0);
    }

    #[test]
    fn test_shuffle_is_uniform_over_permutations() {
        const RUNS: usize = 60_000;
        let mut source = RngSource::seeded(11);
        let mut counts = std::collections::HashMap::new();
        for _ in 0..RUNS {
            *counts.entry(shuffle(&[1, 2, 3], &mut source)).or_insert(0usize) += 1;
        }
        assert_eq!(counts.len(), 6);

        // Within 5% of RUNS / 6. Drawing j from the whole range instead of
        // 0..=i skews some permutations by about 11%.
        let expected = RUNS / 6;
        for (perm, count) in &counts {
            assert!(
                count.abs_diff(expected) <= expected / 20,
                "{perm:?} seen {count} times, expected about {expected}"
            );
        }
    }
}
