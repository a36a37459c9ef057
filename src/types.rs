use serde::{Deserialize, Serialize};

/// Something to pack: occupies `size` units of capacity, is worth `value`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    size: usize,
    value: u64,
}

impl Item {
    ///
    pub fn new(size: usize, value: u64) -> Item {
        Item { size, value }
    }

    ///
    pub fn size(&self) -> usize {
        self.size
    }

    ///
    pub fn value(&self) -> u64 {
        self.value
    }
}

/// The capacity budget of one knapsack call.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bag {
    capacity: usize,
}

impl Bag {
    ///
    pub fn new(capacity: usize) -> Bag {
        Bag { capacity }
    }

    ///
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// A gem rated by a single number. `Gem::default()` is the worthless gem
/// every real gem compares at least equal to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Gem(pub u64);

/// Elements the sort can reorder. Blanket implemented.
pub trait Sortable: PartialOrd + Clone + Send + Sync + 'static {}

impl<T: PartialOrd + Clone + Send + Sync + 'static> Sortable for T {}

/// Elements `select_best` can reduce over; `Default` must be minimal.
pub trait Comparable: Sortable + Default {}

impl<T: Sortable + Default> Comparable for T {}
