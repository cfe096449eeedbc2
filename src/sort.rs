use log::{debug, trace};
use crate::merge::merge;
use crate::util::array_copy;

/// Returns a sorted copy of `arr` using top-down merge sort. The input is left
/// untouched and the caller owns the result.
pub fn merge_sort(arr: &[i32]) -> Vec<i32> {
    debug!("Input: {:?}", arr);
    let mut sorted = vec![0; arr.len()];
    array_copy(arr, &mut sorted, 0, arr.len());
    if !sorted.is_empty() {
        let end = sorted.len() - 1;
        merge_sort_range(&mut sorted, 0, end);
    }
    debug!("Output: {:?}", sorted);
    sorted
}

/// Sorts `arr[start..=end]` in place. Ranges with `end <= start` are already sorted.
pub fn merge_sort_range(arr: &mut [i32], start: usize, end: usize) {
    if end > start {
        let mid = (start + end) / 2;
        trace!("Splitting [{}, {}] at {}", start, end, mid);
        merge_sort_range(arr, start, mid);
        merge_sort_range(arr, mid + 1, end);
        merge(arr, start, mid, end);
    }
}

/// Non-recursive merge sort, in place.
///
/// Stage `s` cuts the slice into `2^s` parts at `ceil(k * n / 2^s)` and merges
/// neighbouring parts, for `s` from `ceil(log2 n)` down to 1. Every part of a
/// stage is the union of two parts merged in the stage before.
pub fn merge_sort_bottom_up(arr: &mut [i32]) {
    debug!("Input: {:?}", arr);
    let n = arr.len();
    if n < 2 {
        return;
    }
    let stages = n.next_power_of_two().trailing_zeros();
    for s in (1..=stages).rev() {
        let parts = 1usize << s;
        let bound = |k: usize| (k * n).div_ceil(parts);
        for k in (0..parts).step_by(2) {
            let (lo, mid, hi) = (bound(k), bound(k + 1), bound(k + 2));
            if lo < mid && mid < hi {
                merge(arr, lo, mid - 1, hi - 1);
            }
        }
        trace!("After stage with {} parts: {:?}", parts, arr);
    }
    debug!("Output: {:?}", arr);
}
