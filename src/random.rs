//! Random permutation and sampling.
//!
//! Every operation has a `_with` form taking the generator explicitly; the
//! plain form draws from [`rand::rng`]. Pass a seeded generator such as
//! `StdRng::seed_from_u64` for reproducible results.

use crate::value::Value;
use rand::Rng;

/// Shuffles `sequence` in place with the thread-local generator.
pub fn shuffle(sequence: &mut [Value]) {
    shuffle_with(sequence, &mut rand::rng());
}

/// Shuffles `sequence` in place (Fisher-Yates): every permutation is equally
/// likely.
///
/// ```rust
/// use lambars_collections::{Value, shuffle_with, values};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut numbers = values![1, 2, 3, 4, 5, 6];
/// shuffle_with(&mut numbers, &mut StdRng::seed_from_u64(7));
///
/// let mut restored: Vec<f64> = numbers.iter().filter_map(Value::as_number).collect();
/// restored.sort_by(f64::total_cmp);
/// assert_eq!(restored, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
/// ```
pub fn shuffle_with<R: Rng + ?Sized>(sequence: &mut [Value], rng: &mut R) {
    for index in (1..sequence.len()).rev() {
        let other = rng.random_range(0..=index);
        sequence.swap(index, other);
    }
}

/// Picks `count` distinct positions of `sequence` at random with the
/// thread-local generator.
pub fn sample(sequence: &[Value], count: usize) -> Vec<Value> {
    sample_with(sequence, count, &mut rand::rng())
}

/// Picks `count` distinct positions of `sequence` at random, in random order.
///
/// A `count` at least the length returns a shuffled copy of the whole
/// sequence. `sequence` itself is left untouched.
pub fn sample_with<R: Rng + ?Sized>(sequence: &[Value], count: usize, rng: &mut R) -> Vec<Value> {
    let mut pool = sequence.to_vec();
    let count = count.min(pool.len());
    // Partial Fisher-Yates: only the first `count` slots are settled.
    for index in 0..count {
        let other = rng.random_range(index..pool.len());
        pool.swap(index, other);
    }
    pool.truncate(count);
    pool
}

/// Picks one element at random with the thread-local generator.
pub fn sample_one(sequence: &[Value]) -> Option<Value> {
    sample_one_with(sequence, &mut rand::rng())
}

/// Picks one element at random; `None` when `sequence` is empty.
pub fn sample_one_with<R: Rng + ?Sized>(sequence: &[Value], rng: &mut R) -> Option<Value> {
    if sequence.is_empty() {
        return None;
    }
    sequence.get(rng.random_range(0..sequence.len())).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    fn sorted_numbers(values: &[Value]) -> Vec<f64> {
        let mut numbers: Vec<f64> = values.iter().filter_map(Value::as_number).collect();
        numbers.sort_by(f64::total_cmp);
        numbers
    }

    #[rstest]
    fn test_shuffle_is_a_permutation() {
        let mut numbers: Vec<Value> = (0..50).map(Value::from).collect();
        shuffle_with(&mut numbers, &mut StdRng::seed_from_u64(1));

        assert_eq!(sorted_numbers(&numbers), (0..50).map(f64::from).collect::<Vec<_>>());
    }

    #[rstest]
    fn test_shuffle_same_seed_same_order() {
        let mut first: Vec<Value> = (0..20).map(Value::from).collect();
        let mut second = first.clone();
        shuffle_with(&mut first, &mut StdRng::seed_from_u64(42));
        shuffle_with(&mut second, &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
    }

    #[rstest]
    fn test_shuffle_short_sequences() {
        let mut empty: Vec<Value> = values![];
        let mut single = values!["only"];
        shuffle(&mut empty);
        shuffle(&mut single);

        assert!(empty.is_empty());
        assert_eq!(single, values!["only"]);
    }

    #[rstest]
    fn test_shuffle_spreads_first_position() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut leading = [0_u32; 3];
        for _ in 0..6_000 {
            let mut numbers = values![0, 1, 2];
            shuffle_with(&mut numbers, &mut rng);
            if let Some(Value::Number(first)) = numbers.first() {
                leading[*first as usize] += 1;
            }
        }

        for count in leading {
            assert!((1_700..=2_300).contains(&count), "skewed count {count}");
        }
    }

    #[rstest]
    #[case(0, 0)]
    #[case(3, 3)]
    #[case(6, 6)]
    #[case(10, 6)]
    fn test_sample_length(#[case] count: usize, #[case] expected: usize) {
        let numbers = values![1, 2, 3, 4, 5, 6];
        let picked = sample_with(&numbers, count, &mut StdRng::seed_from_u64(3));

        assert_eq!(picked.len(), expected);
    }

    #[rstest]
    fn test_sample_picks_distinct_members_and_leaves_input() {
        let numbers = values![1, 2, 3, 4, 5, 6];
        let picked = sample_with(&numbers, 4, &mut StdRng::seed_from_u64(9));

        assert_eq!(numbers, values![1, 2, 3, 4, 5, 6]);
        assert!(picked.iter().all(|value| numbers.contains(value)));
        let mut distinct = sorted_numbers(&picked);
        distinct.dedup();
        assert_eq!(distinct.len(), 4);
    }

    #[rstest]
    fn test_sample_of_everything_is_a_permutation() {
        let numbers = values![1, 2, 3, 4];
        let picked = sample(&numbers, 4);

        assert_eq!(sorted_numbers(&picked), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[rstest]
    fn test_sample_one() {
        let numbers = values![1, 2, 3];

        assert!(sample_one(&numbers).is_some_and(|value| numbers.contains(&value)));
        assert_eq!(sample_one(&[]), None);
        assert_eq!(
            sample_one_with(&values!["x"], &mut StdRng::seed_from_u64(0)),
            Some(Value::from("x"))
        );
    }
}
