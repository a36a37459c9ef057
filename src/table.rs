use std::sync::Arc;

/// Knapsack value table, built one row at a time.
///
/// Row `i` holds the best value using the first `i` items for every
/// capacity `0..columns`; row 0 is all zeros. Finished rows are frozen
/// behind an `Arc` so tasks filling the next row can read the last one
/// without copying it.
pub struct DpTable {
    columns: usize,
    rows: Vec<Arc<Vec<u64>>>,
}

impl DpTable {
    /// Table with room for `items` rows after the zero row.
    pub fn new(items: usize, columns: usize) -> DpTable {
        let mut rows = Vec::with_capacity(items + 1);
        rows.push(Arc::new(vec![0; columns]));
        DpTable { columns, rows }
    }

    /// Most recently finished row.
    pub fn last(&self) -> &Arc<Vec<u64>> {
        // row 0 is pushed on construction
        &self.rows[self.rows.len() - 1]
    }

    /// Append the next finished row.
    pub fn push(&mut self, row: Vec<u64>) {
        debug_assert_eq!(row.len(), self.columns);
        self.rows.push(Arc::new(row));
    }

    /// Value of one cell.
    pub fn get(&self, row: usize, column: usize) -> u64 {
        self.rows[row][column]
    }
}
