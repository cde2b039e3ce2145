use super::merge::merge;

/// Sorts the closed range `data[left..=right]`.
pub(crate) fn sort_range<T: Ord + Clone>(data: &mut [T], left: usize, right: usize) {
    if left >= right {
        return;
    }

    // Lower-biased midpoint; `left + right` could overflow.
    let mid = left + (right - left) / 2;

    sort_range(data, left, mid);
    sort_range(data, mid + 1, right);
    merge(data, left, mid, right);
}
