use std::cmp::Ordering;

use log::trace;

/// Find `target` in a sorted slice by repeated halving.
///
/// Returns the index of a matching element, or `None` when there is none.
/// The result is unspecified if `sorted` is not sorted ascending.
pub fn binary_search(sorted: &[i64], target: i64) -> Option<usize> {
    let (mut start, mut end) = (0, sorted.len());

    // Half-open window [start, end)
    while start < end {
        let mid = start + (end - start) / 2;
        trace!("Window [{}, {}), probing index {}", start, end, mid);
        match sorted[mid].cmp(&target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => start = mid + 1,
            Ordering::Greater => end = mid,
        }
    }
    None
}
