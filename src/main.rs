use std::env;
use anyhow::{bail, Context, Result};
use log::{error, info, LevelFilter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use textbook_sorts::config::{DEFAULT_RANDOM_LEN, DEFAULT_SEED, DEMO_SAMPLE, RANDOM_RANGE};
use textbook_sorts::reference::insertion_sort_copy_defective;
use textbook_sorts::{
    bubble_sort, display, insertion_sort, insertion_sort_copy, insertion_sort_search, insertion_sort_while,
    is_sorted, merge_sort, merge_sort_bottom_up, selection_sort,
};

const USAGE: &str = "Usage: sorting-demo [algorithm] [len|random] [seed?]\n\
    algorithms: insertion, insertion-while, insertion-copy, insertion-defective, \
    insertion-search, selection, bubble, merge, merge-bottom-up";

fn run(algorithm: &str, arr: &[i32]) -> Result<Vec<i32>> {
    let mut sorted = arr.to_vec();
    match algorithm {
        "insertion" => insertion_sort(&mut sorted),
        "insertion-while" => insertion_sort_while(&mut sorted),
        "insertion-copy" => sorted = insertion_sort_copy(arr),
        "insertion-defective" => sorted = insertion_sort_copy_defective(arr),
        "insertion-search" => sorted = insertion_sort_search(arr),
        "selection" => sorted = selection_sort(arr),
        "bubble" => bubble_sort(&mut sorted),
        "merge" => sorted = merge_sort(arr),
        "merge-bottom-up" => merge_sort_bottom_up(&mut sorted),
        other => bail!("unknown algorithm '{other}'\n{USAGE}"),
    }
    Ok(sorted)
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut args = env::args();
    args.next();

    let algorithm = match args.next() {
        Some(arg) => arg,
        None => {
            info!("No algorithm specified. Using 'insertion-while'");
            "insertion-while".to_string()
        }
    };

    let arr: Vec<i32> = match args.next() {
        Some(arg) => {
            let len = match arg.as_str() {
                "random" => DEFAULT_RANDOM_LEN,
                _ => arg.parse::<usize>().with_context(|| format!("invalid length '{arg}'\n{USAGE}"))?,
            };
            let seed = match args.next() {
                Some(arg) => arg.parse::<u64>().with_context(|| format!("invalid seed '{arg}'\n{USAGE}"))?,
                None => {
                    info!("No seed specified. Using {}", DEFAULT_SEED);
                    DEFAULT_SEED
                }
            };
            let mut rng = StdRng::seed_from_u64(seed);
            (0..len).map(|_| rng.gen_range(RANDOM_RANGE)).collect()
        }
        None => {
            info!("No length specified. Using the fixed sample {:?}", DEMO_SAMPLE);
            DEMO_SAMPLE.to_vec()
        }
    };

    info!("Sorting {} elements with '{}'", arr.len(), algorithm);
    let sorted = run(&algorithm, &arr)?;
    display(&sorted)?;

    if is_sorted(&sorted) {
        info!("Output is sorted");
    } else {
        error!("Output is not sorted");
    }
    Ok(())
}
