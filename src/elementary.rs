use log::debug;

/// Returns a sorted copy of `arr`. Each position receives the first minimum of the
/// remaining suffix by a swap, so the sort is not stable.
pub fn selection_sort(arr: &[i32]) -> Vec<i32> {
    let mut sorted = arr.to_vec();
    for i in 0..sorted.len().saturating_sub(1) {
        let mut min = i;
        for j in i + 1..sorted.len() {
            if sorted[j] < sorted[min] {
                min = j;
            }
        }
        sorted.swap(i, min);
    }
    debug!("Input: {:?}, output: {:?}", arr, sorted);
    sorted
}

/// Sorts `arr` in place. Pass `i` carries the smallest remaining element from the
/// back of the slice down to index `i`.
pub fn bubble_sort(arr: &mut [i32]) {
    debug!("Input: {:?}", arr);
    for i in 0..arr.len().saturating_sub(1) {
        for j in (i + 1..arr.len()).rev() {
            if arr[j] < arr[j - 1] {
                arr.swap(j, j - 1);
            }
        }
    }
    debug!("Output: {:?}", arr);
}
