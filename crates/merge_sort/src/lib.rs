mod merge;
mod split;

/// Sorts `data` in non-decreasing order with a top-down merge sort.
///
/// The sort is stable: elements that compare equal keep their relative order.
/// Each merge step allocates two temporary buffers holding clones of the runs
/// being merged; they are dropped before the step returns.
///
/// ```
/// let mut data = vec![38, 27, 43, 3, 9, 82, 10];
/// merge_sort::sort(&mut data);
/// assert_eq!(data, [3, 9, 10, 27, 38, 43, 82]);
/// ```
pub fn sort<T: Ord + Clone>(data: &mut [T]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    split::sort_range(data, 0, len - 1);
}
