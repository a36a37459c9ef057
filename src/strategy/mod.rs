//! The three algorithms behind one interface, in a sequential and a
//! thread-pool flavour.

use crate::error::Result;
use crate::types::{Bag, Comparable, Item, Sortable};

mod parallel;
mod sequential;
pub use parallel::{ParallelAdventure, DEFAULT_MIN_PARALLEL_BLOCK};
pub use sequential::{
    best_of, fill_cells, merge, merge_plan, pass_widths, Merge, SequentialAdventure,
};

/// Trait `Adventure` is what both strategies offer. Callers pick an
/// implementation; results are identical, only the execution differs.
pub trait Adventure {
    /// Highest total value of items fitting into `bag` (0/1 knapsack).
    /// Zero for no items or zero capacity.
    fn pack_value(&self, items: &[Item], bag: &Bag) -> Result<u64>;

    /// Stable ascending sort of `units`, in place.
    ///
    /// On error the order of `units` is unspecified, and elements that were
    /// inside a failed task are gone from it.
    fn arrange_sequence<T: Sortable>(&self, units: &mut Vec<T>) -> Result<()>;

    /// The greatest of `gems`, or `T::default()` if there are none.
    fn select_best<T: Comparable>(&self, gems: &[T]) -> Result<T>;
}
