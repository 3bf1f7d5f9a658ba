use std::collections::HashMap;

use log::trace;

/// Indices of two distinct elements that add up to `target`.
///
/// Returns the first pair completed while scanning left to right, earlier
/// index first. An element whose complement falls outside `i64` can still
/// be the complement of a later element, so it is recorded either way.
pub fn two_sum(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::new();
    for (i, &num) in nums.iter().enumerate() {
        let complement = target.checked_sub(num);
        if let Some(&j) = complement.and_then(|c| seen.get(&c)) {
            return Some((j, i));
        }
        seen.insert(num, i);
    }
    None
}

/// Length of the shortest contiguous window whose sum is at least `target`,
/// or 0 if no window reaches it.
pub fn min_subarray_len(target: u64, nums: &[u64]) -> usize {
    let mut best = usize::MAX;
    let mut left = 0;
    let target = u128::from(target);
    // Wide enough that no window of `u64`s can overflow it
    let mut sum: u128 = 0;

    for (right, &num) in nums.iter().enumerate() {
        sum += u128::from(num);
        while sum >= target && left <= right {
            best = best.min(right - left + 1);
            trace!("Window [{}, {}] sums to {}", left, right, sum);
            sum -= u128::from(nums[left]);
            left += 1;
        }
    }

    if best == usize::MAX {
        0
    } else {
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_sum() {
        assert_eq!(two_sum(&[2, 7, 11, 15], 9), Some((0, 1)));
        assert_eq!(two_sum(&[3, 2, 4], 6), Some((1, 2)));
        assert_eq!(two_sum(&[3, 3], 6), Some((0, 1)));
        assert_eq!(two_sum(&[-4, 10, 1], 6), Some((0, 1)));
    }

    #[test]
    fn test_two_sum_no_pair() {
        assert_eq!(two_sum(&[1, 2, 3], 7), None);
        // An element is never paired with itself
        assert_eq!(two_sum(&[3], 6), None);
        assert_eq!(two_sum(&[], 0), None);
    }

    #[test]
    fn test_two_sum_extreme_values() {
        assert_eq!(two_sum(&[i64::MIN, 5], 1), None);
        assert_eq!(two_sum(&[i64::MAX, 5], -1), None);
        assert_eq!(two_sum(&[i64::MIN, 3, i64::MAX], -1), Some((0, 2)));
        assert_eq!(two_sum(&[i64::MAX, i64::MIN, 7], 7), None);
        assert_eq!(two_sum(&[-1, i64::MIN + 1], i64::MIN), Some((0, 1)));
    }

    #[test]
    fn test_min_subarray_len() {
        assert_eq!(min_subarray_len(7, &[2, 3, 1, 2, 4, 3]), 2);
        assert_eq!(min_subarray_len(4, &[1, 4, 4]), 1);
        assert_eq!(min_subarray_len(11, &[1, 2, 3, 4, 5]), 3);
    }

    #[test]
    fn test_min_subarray_len_unreachable() {
        assert_eq!(min_subarray_len(11, &[1, 1, 1, 1, 1, 1, 1, 1]), 0);
        assert_eq!(min_subarray_len(1, &[]), 0);
    }

    #[test]
    fn test_min_subarray_len_large_values() {
        assert_eq!(min_subarray_len(u64::MAX, &[1, u64::MAX]), 1);
        assert_eq!(min_subarray_len(u64::MAX, &[u64::MAX - 1, 1, u64::MAX - 1]), 2);
        assert_eq!(min_subarray_len(u64::MAX, &[u64::MAX / 2, u64::MAX / 2, u64::MAX / 2]), 3);
    }

    #[test]
    fn test_min_subarray_len_zero_target() {
        assert_eq!(min_subarray_len(0, &[5, 6]), 1);
    }
}
