//! Validating wrappers around the core routines.
//!
//! The core routines trust their arguments and panic on bad indices. These
//! wrappers reject bad arguments with an error before touching the data.

use anyhow::{ensure, Result};
use crate::config::SENTINEL;
use crate::merge::{merge, merge_sentinel};
use crate::sort::merge_sort_range;
use crate::util::{array_copy, is_sorted};

fn check_runs(arr: &[i32], start: usize, mid: usize, end: usize) -> Result<()> {
    ensure!(start <= mid && mid < end, "expected start <= mid < end, got start={start}, mid={mid}, end={end}");
    ensure!(end < arr.len(), "end index {end} out of bounds for length {}", arr.len());
    ensure!(is_sorted(&arr[start..=mid]), "left run [{start}, {mid}] is not sorted");
    ensure!(is_sorted(&arr[mid + 1..=end]), "right run [{}, {end}] is not sorted", mid + 1);
    Ok(())
}

pub fn try_merge(arr: &mut [i32], start: usize, mid: usize, end: usize) -> Result<()> {
    check_runs(arr, start, mid, end)?;
    merge(arr, start, mid, end);
    Ok(())
}

pub fn try_merge_sentinel(arr: &mut [i32], start: usize, mid: usize, end: usize) -> Result<()> {
    check_runs(arr, start, mid, end)?;
    if let Some(pos) = arr[start..=end].iter().position(|&x| x >= SENTINEL) {
        anyhow::bail!("value at index {} collides with the sentinel {SENTINEL}", start + pos);
    }
    merge_sentinel(arr, start, mid, end);
    Ok(())
}

pub fn try_merge_sort_range(arr: &mut [i32], start: usize, end: usize) -> Result<()> {
    ensure!(start <= end, "expected start <= end, got start={start}, end={end}");
    ensure!(end < arr.len(), "end index {end} out of bounds for length {}", arr.len());
    merge_sort_range(arr, start, end);
    Ok(())
}

pub fn try_array_copy(src: &[i32], dst: &mut [i32], start: usize, end: usize) -> Result<()> {
    ensure!(start <= end, "expected start <= end, got start={start}, end={end}");
    ensure!(end <= src.len(), "end index {end} out of bounds for source length {}", src.len());
    ensure!(dst.len() >= end - start, "destination holds {} elements, {} needed", dst.len(), end - start);
    array_copy(src, dst, start, end);
    Ok(())
}
