use std::ops::Range;

/// Trailing value of the sentinel merge's run buffers. Must not occur in real data.
pub const SENTINEL: i32 = i32::MAX;

pub const DEMO_SAMPLE: [i32; 4] = [4, 1, 3, 2];
pub const DEFAULT_SEED: u64 = 12345;
pub const DEFAULT_RANDOM_LEN: usize = 16;
pub const RANDOM_RANGE: Range<i32> = -100..100;

const _: () = {
    assert!(SENTINEL == i32::MAX, "SENTINEL must be the largest i32");
    assert!(DEMO_SAMPLE.len() != 0, "DEMO_SAMPLE must not be empty");
    assert!(RANDOM_RANGE.end < SENTINEL, "random samples must stay below SENTINEL");
};
