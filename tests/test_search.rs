mod common;

#[cfg(test)]
mod searching {
    use rand::prelude::SliceRandom;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::common::SEED;

    use textbook_sorts::search::compare;
    use textbook_sorts::{linear_search, Criterion, Direction};

    const CRITERIA: [Criterion; 5] = [
        Criterion::Greater,
        Criterion::Less,
        Criterion::GreaterEqual,
        Criterion::LessEqual,
        Criterion::Equal,
    ];

    // -5..5 followed by its mirror
    fn mirrored() -> Vec<i32> {
        let half: Vec<i32> = (-5..5).collect();
        half.iter().chain(half.iter().rev()).copied().collect()
    }

    fn expected(arr: &[i32], value: i32, direction: Direction, criterion: Criterion) -> Option<usize> {
        let matching: Vec<usize> = (0..arr.len()).filter(|&i| compare(arr[i], value, criterion)).collect();
        match direction {
            Direction::Forward => matching.first().copied(),
            Direction::Backward => matching.last().copied(),
        }
    }

    #[test]
    fn against_mask() {
        let arr = mirrored();
        let mut values = arr.clone();
        values.shuffle(&mut StdRng::seed_from_u64(*SEED));
        values.truncate(arr.len() / 2);
        values.extend([-6, 5]);

        for direction in [Direction::Forward, Direction::Backward] {
            for criterion in CRITERIA {
                for &value in &values {
                    assert_eq!(
                        linear_search(&arr, value, direction, criterion),
                        expected(&arr, value, direction, criterion),
                        "value={value}, direction={direction:?}, criterion={criterion:?}. Seed: {}",
                        *SEED
                    );
                }
            }
        }
    }
}
