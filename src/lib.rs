pub mod checked;
pub mod config;
pub mod elementary;
pub mod insertion;
pub mod merge;
pub mod reference;
pub mod search;
pub mod sort;
pub mod util;

pub use elementary::{bubble_sort, selection_sort};
pub use insertion::{insertion_sort, insertion_sort_copy, insertion_sort_search, insertion_sort_while};
pub use merge::{merge, merge_in_place, merge_sentinel};
pub use search::{linear_search, Criterion, Direction};
pub use sort::{merge_sort, merge_sort_bottom_up, merge_sort_range};
pub use util::{array_copy, display, display_to, is_sorted, render};
