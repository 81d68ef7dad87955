//! Zero-sum triplets
//!
//! Sorting first turns the cubic search for `a + b + c = 0` into a quadratic
//! one: fix an anchor, then close in on the rest of the slice from both ends.
//! Runs of equal values are skipped at both levels so that every triplet of
//! values is reported exactly once.

use std::cmp::Ordering;

use tracing::{instrument, trace};

/// Finds every distinct triplet of values in `values` that sums to zero.
///
/// Each triplet is in ascending order. Triplets are listed by ascending anchor,
/// then by ascending middle value. Fewer than three values give an empty result.
/// The caller's slice is left untouched; a private copy is sorted.
///
/// O(n log n) for the sort, O(n^2) for the scan.
///
/// # Example
/// ```
/// use two_pointers::three_sum::find_zero_sum_triplets;
/// assert_eq!(
///     find_zero_sum_triplets(&[-1, 0, 1, 2, -1, -4]),
///     vec![[-1, -1, 2], [-1, 0, 1]]
/// );
/// assert!(find_zero_sum_triplets(&[1, 2]).is_empty());
/// ```
#[instrument(level = "trace", skip_all, fields(len = values.len()))]
pub fn find_zero_sum_triplets(values: &[i32]) -> Vec<[i32; 3]> {
    let mut triplets = Vec::new();
    scan_triplets(values, |triplet| triplets.push(triplet));
    trace!(found = triplets.len(), "zero-sum triplet scan finished");
    triplets
}

/// Counts the distinct zero-sum triplets without collecting them.
///
/// # Example
/// ```
/// use two_pointers::three_sum::count_zero_sum_triplets;
/// assert_eq!(count_zero_sum_triplets(&[0, 0, 0, 0]), 1);
/// ```
pub fn count_zero_sum_triplets(values: &[i32]) -> usize {
    let mut count = 0;
    scan_triplets(values, |_| count += 1);
    count
}

fn scan_triplets<F>(values: &[i32], mut emit: F)
where
    F: FnMut([i32; 3]),
{
    if values.len() < 3 {
        return;
    }

    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let n = sorted.len();

    for anchor in 0..n - 2 {
        let pivot = sorted[anchor];
        // Everything to the right is >= pivot > 0.
        if pivot > 0 {
            break;
        }
        if anchor > 0 && pivot == sorted[anchor - 1] {
            continue;
        }

        let (mut left, mut right) = (anchor + 1, n - 1);
        while left < right {
            // Widened so three i32 extremes cannot overflow.
            let sum = i64::from(pivot) + i64::from(sorted[left]) + i64::from(sorted[right]);
            match sum.cmp(&0) {
                Ordering::Equal => {
                    emit([pivot, sorted[left], sorted[right]]);
                    while left < right && sorted[left] == sorted[left + 1] {
                        left += 1;
                    }
                    while left < right && sorted[right] == sorted[right - 1] {
                        right -= 1;
                    }
                    left += 1;
                    right -= 1;
                }
                Ordering::Less => left += 1,
                Ordering::Greater => right -= 1,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    /// Cubic reference: every index combination, deduplicated by sorted values.
    fn brute_force(values: &[i32]) -> BTreeSet<[i32; 3]> {
        let mut found = BTreeSet::new();
        for i in 0..values.len() {
            for j in i + 1..values.len() {
                for k in j + 1..values.len() {
                    let sum = i64::from(values[i]) + i64::from(values[j]) + i64::from(values[k]);
                    if sum == 0 {
                        let mut triplet = [values[i], values[j], values[k]];
                        triplet.sort_unstable();
                        found.insert(triplet);
                    }
                }
            }
        }
        found
    }

    #[test]
    fn test_classic_input() {
        assert_eq!(
            find_zero_sum_triplets(&[-1, 0, 1, 2, -1, -4]),
            vec![[-1, -1, 2], [-1, 0, 1]]
        );
    }

    #[test]
    fn test_short_inputs_are_empty() {
        assert!(find_zero_sum_triplets(&[]).is_empty());
        assert!(find_zero_sum_triplets(&[0]).is_empty());
        assert!(find_zero_sum_triplets(&[0, 0]).is_empty());
    }

    #[test]
    fn test_all_zeros() {
        assert_eq!(find_zero_sum_triplets(&[0, 0, 0]), vec![[0, 0, 0]]);
        assert_eq!(find_zero_sum_triplets(&[0; 10]), vec![[0, 0, 0]]);
    }

    #[test]
    fn test_no_solution() {
        assert!(find_zero_sum_triplets(&[1, 2, -2, -1]).is_empty());
        assert!(find_zero_sum_triplets(&[1, 2, 3]).is_empty());
        assert!(find_zero_sum_triplets(&[-3, -2, -1]).is_empty());
    }

    #[test]
    fn test_duplicate_runs() {
        assert_eq!(
            find_zero_sum_triplets(&[-2, 0, 1, 1, 2]),
            vec![[-2, 0, 2], [-2, 1, 1]]
        );

        let heavy = [-4, -2, -2, -2, 0, 1, 2, 2, 2, 3, 3, 4, 4, 6, 6];
        let found = find_zero_sum_triplets(&heavy);
        assert_eq!(
            found,
            vec![
                [-4, -2, 6],
                [-4, 0, 4],
                [-4, 1, 3],
                [-4, 2, 2],
                [-2, -2, 4],
                [-2, 0, 2],
            ]
        );
        assert_eq!(found.iter().copied().collect::<BTreeSet<_>>(), brute_force(&heavy));
    }

    #[test]
    fn test_input_is_not_reordered() {
        let values = vec![3, -1, -2, 0];
        let _ = find_zero_sum_triplets(&values);
        assert_eq!(values, vec![3, -1, -2, 0]);
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let values = [i32::MAX, i32::MAX, i32::MIN, i32::MIN, 1];
        assert_eq!(find_zero_sum_triplets(&values), vec![[i32::MIN, 1, i32::MAX]]);
    }

    #[test]
    fn test_count_matches_find() {
        let values = [-5, 1, 10, -1, -2, 3, 4, -3, 0];
        assert_eq!(
            count_zero_sum_triplets(&values),
            find_zero_sum_triplets(&values).len()
        );
        assert_eq!(count_zero_sum_triplets(&[]), 0);
    }

    proptest! {
        #[test]
        fn prop_matches_brute_force(values in prop::collection::vec(-10i32..=10, 0..14)) {
            let found = find_zero_sum_triplets(&values);
            let unique: BTreeSet<[i32; 3]> = found.iter().copied().collect();

            prop_assert_eq!(unique.len(), found.len());
            for triplet in &found {
                prop_assert_eq!(triplet.iter().map(|&v| i64::from(v)).sum::<i64>(), 0);
                prop_assert!(triplet[0] <= triplet[1] && triplet[1] <= triplet[2]);
            }
            prop_assert_eq!(unique, brute_force(&values));
        }

        #[test]
        fn prop_is_repeatable(values in prop::collection::vec(-20i32..=20, 0..20)) {
            prop_assert_eq!(find_zero_sum_triplets(&values), find_zero_sum_triplets(&values));
        }
    }
}
