/// Merges the sorted runs `data[left..=mid]` and `data[mid + 1..=right]` into a
/// single sorted run over `data[left..=right]`.
///
/// Ties are taken from the left run, which keeps the merge stable.
pub(crate) fn merge<T: Ord + Clone>(data: &mut [T], left: usize, mid: usize, right: usize) {
    debug_assert!(left <= mid && mid < right && right < data.len());

    let mut lo = data[left..=mid].to_vec();
    let mut hi = data[mid + 1..=right].to_vec();
    let n1 = lo.len();
    let n2 = hi.len();

    let mut i = 0;
    let mut j = 0;
    let mut k = left;

    // A buffer slot is never read again once consumed, so its value is
    // swapped into place instead of cloned a second time.
    while i < n1 && j < n2 {
        if lo[i] <= hi[j] {
            std::mem::swap(&mut data[k], &mut lo[i]);
            i += 1;
        } else {
            std::mem::swap(&mut data[k], &mut hi[j]);
            j += 1;
        }
        k += 1;
    }

    if i < n1 {
        data[k..=right].swap_with_slice(&mut lo[i..]);
    } else {
        data[k..=right].swap_with_slice(&mut hi[j..]);
    }
}
