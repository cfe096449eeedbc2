use log::debug;
use crate::search::{linear_search, Criterion, Direction};

/// Sorts `arr` in place in non-decreasing order.
///
/// Each key is shifted left past every element strictly greater than it, so equal
/// elements keep their relative order.
pub fn insertion_sort(arr: &mut [i32]) {
    debug!("Input: {:?}", arr);
    insertion_sort_by(arr, |a, b| a > b);
    debug!("Output: {:?}", arr);
}

/// Same result as [`insertion_sort`], with the scan and the guard folded into one
/// loop condition.
pub fn insertion_sort_while(arr: &mut [i32]) {
    debug!("Input: {:?}", arr);
    for i in 1..arr.len() {
        let key = arr[i];
        let mut j = i;
        while j > 0 && arr[j - 1] > key {
            arr[j] = arr[j - 1];
            j -= 1;
        }
        arr[j] = key;
    }
    debug!("Output: {:?}", arr);
}

/// Returns a sorted copy of `arr`, leaving the input untouched.
pub fn insertion_sort_copy(arr: &[i32]) -> Vec<i32> {
    let mut sorted = arr.to_vec();
    insertion_sort(&mut sorted);
    sorted
}

/// Returns a sorted copy of `arr`. Every key is placed right after the last
/// element of the sorted prefix that is strictly smaller than it, found with a
/// backward [`linear_search`].
///
/// Not stable: a key lands in front of the equal keys already placed.
pub fn insertion_sort_search(arr: &[i32]) -> Vec<i32> {
    let mut sorted = arr.to_vec();
    debug!("Input: {:?}", sorted);
    for i in 1..sorted.len() {
        let key = sorted[i];
        let insert_at = linear_search(&sorted[..i], key, Direction::Backward, Criterion::Less)
            .map_or(0, |idx| idx + 1);
        sorted[insert_at..=i].rotate_right(1);
    }
    debug!("Output: {:?}", sorted);
    sorted
}

// `is_greater` must be a strict ordering, otherwise stability is lost.
pub(crate) fn insertion_sort_by<T: Copy, F: Fn(&T, &T) -> bool>(arr: &mut [T], is_greater: F) {
    for i in 1..arr.len() {
        let key = arr[i];
        let mut hole = 0;
        for j in (1..=i).rev() {
            if is_greater(&arr[j - 1], &key) {
                arr[j] = arr[j - 1];
            } else {
                hole = j;
                break;
            }
        }
        arr[hole] = key;
    }
}
