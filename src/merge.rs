use log::trace;
use crate::config::SENTINEL;
use crate::util::array_copy;

/// Merges the sorted runs `arr[start..=mid]` and `arr[mid + 1..=end]` in place.
///
/// The right head is taken only when the left head is strictly greater, so equal
/// elements keep their order. Exhausted runs are detected by their cursors, which
/// makes every `i32` valid input.
pub fn merge(arr: &mut [i32], start: usize, mid: usize, end: usize) {
    merge_by(arr, start, mid, end, |a, b| a > b);
}

/// Sentinel form of [`merge`]: both runs are copied into buffers one slot longer
/// than the run, the extra slot holding [`SENTINEL`], and exactly `end - start + 1`
/// elements are written back.
///
/// Data equal to [`SENTINEL`] is not supported: once the left run is exhausted its
/// sentinel wins the tie against a real `i32::MAX` on the right, and the next step
/// reads past the end of the left buffer and panics.
pub fn merge_sentinel(arr: &mut [i32], start: usize, mid: usize, end: usize) {
    let left_len = mid - start + 1;
    let right_len = end - mid;
    let mut left = vec![0; left_len + 1];
    let mut right = vec![0; right_len + 1];
    array_copy(arr, &mut left, start, mid + 1);
    array_copy(arr, &mut right, mid + 1, end + 1);
    left[left_len] = SENTINEL;
    right[right_len] = SENTINEL;
    trace!("Merging {:?} and {:?} into [{}, {}]", &left[..left_len], &right[..right_len], start, end);

    let (mut i, mut j) = (0, 0);
    for k in start..=end {
        if left[i] > right[j] {
            arr[k] = right[j];
            j += 1;
        } else {
            arr[k] = left[i];
            i += 1;
        }
    }
}

/// Merges the half-open runs `arr[start..mid]` and `arr[mid..end]` without a
/// buffer. Every right element that belongs before the current left element is
/// rotated into place, costing up to *O*(*n^2*) moves.
pub fn merge_in_place(arr: &mut [i32], start: usize, mid: usize, end: usize) {
    let (mut i, mut j) = (start, mid);
    while i < j && j < end {
        if arr[i] > arr[j] {
            arr[i..=j].rotate_right(1);
            j += 1;
        }
        i += 1;
    }
}

pub(crate) fn merge_by<T: Copy, F: Fn(&T, &T) -> bool>(arr: &mut [T], start: usize, mid: usize, end: usize, is_greater: F) {
    let left = arr[start..=mid].to_vec();
    let right = arr[mid + 1..=end].to_vec();

    let (mut i, mut j) = (0, 0);
    for k in start..=end {
        let take_right = if i == left.len() {
            true
        } else if j == right.len() {
            false
        } else {
            is_greater(&left[i], &right[j])
        };
        if take_right {
            arr[k] = right[j];
            j += 1;
        } else {
            arr[k] = left[i];
            i += 1;
        }
    }
}
