#![allow(dead_code)]

use std::env;
use rand::{thread_rng, Rng};
use lazy_static::lazy_static;

lazy_static! {
    pub static ref SEED: u64 = initialize_seed();
    pub static ref NUM_RUNS: usize = get_num_runs();
    pub static ref MAX_ELEMENTS: usize = get_max_elements();
}

// every ordering of `values`, by Heap's algorithm
pub fn permutations(values: &[i32]) -> Vec<Vec<i32>> {
    let mut arr = values.to_vec();
    let mut counters = vec![0; arr.len()];
    let mut result = vec![arr.clone()];
    let mut i = 1;
    while i < arr.len() {
        if counters[i] < i {
            let j = if i % 2 == 0 { 0 } else { counters[i] };
            arr.swap(j, i);
            result.push(arr.clone());
            counters[i] += 1;
            i = 1;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }
    result
}

fn initialize_seed() -> u64 {
    let randomize_seed = env::var("RANDOMIZE_SEED")
        .map(|val| val == "true")
        .unwrap_or(false);

    if randomize_seed {
        println!("Randomizing seed");
        let seed: u64 = thread_rng().gen_range(0..u64::MAX / 2);
        println!("Seed: {}", seed);
        seed
    } else {
        let seed = env::var("SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(12345);
        println!("Seed: {}", seed);
        seed
    }
}

fn get_num_runs() -> usize {
    env::var("NUM_RUNS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(4)
}

fn get_max_elements() -> usize {
    env::var("MAX_ELEMENTS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(2048)
}
