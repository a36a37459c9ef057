use super::Adventure;
use crate::error::Result;
use crate::table::DpTable;
use crate::types::{Bag, Comparable, Item, Sortable};
use std::iter;
use std::ops::Range;

/// Single threaded baseline. Also home of the primitives the parallel
/// strategy reuses, so both run the very same per-cell, per-merge and
/// per-slice logic.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialAdventure {}

impl SequentialAdventure {
    ///
    pub fn new() -> SequentialAdventure {
        SequentialAdventure {}
    }
}

impl Adventure for SequentialAdventure {
    fn pack_value(&self, items: &[Item], bag: &Bag) -> Result<u64> {
        let columns = bag.capacity() + 1;
        let mut table = DpTable::new(items.len(), columns);
        for item in items {
            let mut row = vec![0; columns];
            fill_cells(item, table.last(), 0..columns, &mut row);
            table.push(row);
        }
        Ok(table.get(items.len(), bag.capacity()))
    }

    fn arrange_sequence<T: Sortable>(&self, units: &mut Vec<T>) -> Result<()> {
        let len = units.len();
        for width in pass_widths(len) {
            for m in merge_plan(len, width) {
                merge(units, m.left, m.mid, m.right);
            }
        }
        Ok(())
    }

    fn select_best<T: Comparable>(&self, gems: &[T]) -> Result<T> {
        Ok(best_of(gems))
    }
}

/// Knapsack transition for the capacities in `columns`, reading the
/// previous row and writing `out[k]` for capacity `columns.start + k`.
pub fn fill_cells(item: &Item, prev: &[u64], columns: Range<usize>, out: &mut [u64]) {
    debug_assert_eq!(columns.len(), out.len());
    for (cell, w) in out.iter_mut().zip(columns) {
        *cell = if item.size() > w {
            prev[w]
        } else {
            prev[w].max(item.value() + prev[w - item.size()])
        };
    }
}

/// One merge of a pass: `[left, mid]` with `[mid + 1, right]`, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Merge {
    ///
    pub left: usize,
    ///
    pub mid: usize,
    ///
    pub right: usize,
}

/// Block widths of the bottom-up passes over `len` elements: 2, 4, 8, ...
/// up to and including the first one past `len`.
pub fn pass_widths(len: usize) -> impl Iterator<Item = usize> {
    let limit = len.saturating_mul(2);
    iter::successors(Some(2usize), |width| width.checked_mul(2))
        .take_while(move |&width| width <= limit)
}

/// All merges of the pass with blocks of `width` over `len` elements.
///
/// Full blocks come first; a trailing partial block is merged against
/// the tail only when the tail is non-empty, since merging with an empty
/// right run changes nothing. The merges are contiguous from index 0 and
/// never overlap.
pub fn merge_plan(len: usize, width: usize) -> Vec<Merge> {
    let half = (width - 1) / 2;
    let mut merges = Vec::with_capacity(len / width + 1);
    let mut left = 0;
    while left + width - 1 < len {
        merges.push(Merge {
            left,
            mid: left + half,
            right: left + width - 1,
        });
        left += width;
    }
    if left + half + 1 < len {
        merges.push(Merge {
            left,
            mid: left + half,
            right: len - 1,
        });
    }
    merges
}

/// Merge the sorted runs `units[left..=mid]` and `units[mid + 1..=right]`.
///
/// An element of the right run only goes first when it is strictly less,
/// which keeps equal elements in their original order.
pub fn merge<T: PartialOrd + Clone>(units: &mut [T], left: usize, mid: usize, right: usize) {
    let scratch = units[left..=right].to_vec();
    let (lhs, rhs) = scratch.split_at(mid + 1 - left);
    let (mut i, mut j) = (0, 0);
    for slot in &mut units[left..=right] {
        if j < rhs.len() && (i == lhs.len() || rhs[j] < lhs[i]) {
            *slot = rhs[j].clone();
            j += 1;
        } else {
            *slot = lhs[i].clone();
            i += 1;
        }
    }
}

/// Running maximum seeded with `T::default()`, replaced only by strictly
/// greater gems.
pub fn best_of<T: Comparable>(gems: &[T]) -> T {
    let mut best = T::default();
    for gem in gems {
        if best < *gem {
            best = gem.clone();
        }
    }
    best
}
