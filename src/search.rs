#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Relation an element must have to the searched value, written as `element <op> value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    Greater,
    Less,
    GreaterEqual,
    LessEqual,
    Equal,
}

pub fn compare(element: i32, value: i32, criterion: Criterion) -> bool {
    match criterion {
        Criterion::Greater => element > value,
        Criterion::Less => element < value,
        Criterion::GreaterEqual => element >= value,
        Criterion::LessEqual => element <= value,
        Criterion::Equal => element == value,
    }
}

/// Returns the index of the first element, walking in `direction`, that satisfies
/// `criterion` against `value`.
pub fn linear_search(arr: &[i32], value: i32, direction: Direction, criterion: Criterion) -> Option<usize> {
    let matches = |&(_, &element): &(usize, &i32)| compare(element, value, criterion);
    match direction {
        Direction::Forward => arr.iter().enumerate().find(matches),
        Direction::Backward => arr.iter().enumerate().rev().find(matches),
    }
    .map(|(idx, _)| idx)
}
