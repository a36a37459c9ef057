//! Remainder-absorbing static partitioning of an index range.

use std::num::NonZeroUsize;
use std::ops::Range;

/// Split `0..len` into `parts` contiguous slices of `len / parts` indices,
/// the last slice absorbing the remainder.
///
/// Empty slices are left out: `len < parts` gives one range covering
/// everything and `len == 0` gives none. The returned ranges are ordered,
/// pairwise disjoint and together cover `0..len` exactly.
pub fn partition(len: usize, parts: NonZeroUsize) -> Vec<Range<usize>> {
    let parts = parts.get();
    let size = len / parts;
    let mut ranges = Vec::with_capacity(parts.min(len));
    let mut start = 0;
    if size > 0 {
        for _ in 1..parts {
            ranges.push(start..start + size);
            start += size;
        }
    }
    if start < len {
        ranges.push(start..len);
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn covers_every_index_once() {
        for len in 0..70 {
            for k in 1..12 {
                let ranges = partition(len, parts(k));
                let mut next = 0;
                for range in &ranges {
                    assert_eq!(range.start, next, "gap or overlap for len={} k={}", len, k);
                    assert!(range.start < range.end);
                    next = range.end;
                }
                assert_eq!(next, len, "len={} k={}", len, k);
                assert!(ranges.len() <= k);
            }
        }
    }

    #[test]
    fn last_slice_takes_remainder() {
        assert_eq!(partition(10, parts(4)), vec![0..2, 2..4, 4..6, 6..10]);
        assert_eq!(partition(6, parts(3)), vec![0..2, 2..4, 4..6]);
    }

    #[test]
    fn fewer_indices_than_parts() {
        assert_eq!(partition(3, parts(8)), vec![0..3]);
        assert!(partition(0, parts(2)).is_empty());
    }
}
