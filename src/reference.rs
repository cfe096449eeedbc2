//! Behavioral reference for a known-broken copy-returning insertion sort.
//!
//! The routine here is known to be wrong and is kept only to check parity with
//! earlier results. Use [`crate::insertion_sort_copy`] for real work.

use log::{debug, trace};

/// Copy-returning insertion sort with a write-on-stop defect.
///
/// The key is only written when the backward scan stops at an element not
/// greater than it. If every placed element is greater, the scan runs off index 0
/// without writing, so slot 0 keeps a stale copy of its old value and the key is
/// lost. `[4, 1, 3, 2]` comes back as `[4, 4, 4, 4]`.
pub fn insertion_sort_copy_defective(arr: &[i32]) -> Vec<i32> {
    let mut sorted = vec![0; arr.len()];
    let Some(&first) = arr.first() else {
        return sorted;
    };
    sorted[0] = first;
    for i in 1..arr.len() {
        let key = arr[i];
        let mut written = false;
        for j in (0..i).rev() {
            if sorted[j] > key {
                sorted[j + 1] = sorted[j];
            } else {
                sorted[j + 1] = key;
                written = true;
                break;
            }
        }
        if !written {
            trace!("Key {} dropped at i={}", key, i);
        }
    }
    debug!("Input: {:?}, output: {:?}", arr, sorted);
    sorted
}
