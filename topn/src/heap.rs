//! Min-heap repair routines over a plain slice.
//!
//! The ordering is supplied by the caller on every call so the same storage can be
//! used unordered while filling and heap-ordered afterwards.
use std::cmp::Ordering;

#[inline]
fn less<T, F>(data: &[T], a: usize, b: usize, cmp: &mut F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    cmp(&data[a], &data[b]) == Ordering::Less
}

/// Arrange `data` into min-heap order in place, O(n).
pub(crate) fn heapify<T, F>(data: &mut [T], cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = data.len();
    for pos in (0..len / 2).rev() {
        sift_down(data, pos, cmp);
    }
}

/// Move the element at `pos` towards the leaves until neither child is smaller.
pub(crate) fn sift_down<T, F>(data: &mut [T], mut pos: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let end = data.len();
    loop {
        let left = 2 * pos + 1;
        if left >= end {
            break;
        }
        let right = left + 1;
        let child = if right < end && less(data, right, left, cmp) {
            right
        } else {
            left
        };
        if !less(data, child, pos, cmp) {
            break;
        }
        data.swap(pos, child);
        pos = child;
    }
}

#[cfg(test)]
pub(crate) fn is_min_heap<T, F>(data: &[T], cmp: &mut F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    (1..data.len()).all(|pos| !less(data, pos, (pos - 1) / 2, cmp))
}
