use super::sequential::{best_of, fill_cells, merge, merge_plan, pass_widths, Merge};
use super::Adventure;
use crate::error::{AdventureError, Result};
use crate::partition::partition;
use crate::table::DpTable;
use crate::thread_pool::{join_all, ThreadPool};
use crate::types::{Bag, Comparable, Item, Sortable};
use slog::{Discard, Logger};
use std::mem;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Merge passes with blocks up to this width run inline.
pub const DEFAULT_MIN_PARALLEL_BLOCK: usize = 8;

/// Runs every algorithm as a series of fan-outs to a shared thread pool,
/// each closed by a barrier that waits for the whole batch.
///
/// Tasks only ever see data they own or share read-only (the frozen
/// previous DP row, a block of the sequence, the gems), so tasks of one
/// fan-out cannot write the same memory.
///
/// # Example
/// ```rust
/// use adventure::{Adventure, Bag, Item, ParallelAdventure, SharedQueueThreadPool};
///
/// let team = ParallelAdventure::<SharedQueueThreadPool>::with_threads(4).unwrap();
/// let items = vec![Item::new(2, 3), Item::new(3, 4), Item::new(4, 5), Item::new(5, 6)];
/// assert_eq!(team.pack_value(&items, &Bag::new(5)).unwrap(), 7);
///
/// let mut units = vec![5, 2, 4, 1, 3];
/// team.arrange_sequence(&mut units).unwrap();
/// assert_eq!(units, vec![1, 2, 3, 4, 5]);
/// ```
pub struct ParallelAdventure<P: ThreadPool> {
    pool: Arc<P>,
    workers: NonZeroUsize,
    min_parallel_block: usize,
    log: Logger,
}

impl<P: ThreadPool> ParallelAdventure<P> {
    /// Use `pool`, possibly shared with others, splitting work `workers` ways.
    ///
    /// Fails with [`AdventureError::ZeroWorkers`] if `workers` is 0.
    pub fn new(pool: Arc<P>, workers: u32) -> Result<ParallelAdventure<P>> {
        let workers = NonZeroUsize::new(workers as usize).ok_or(AdventureError::ZeroWorkers)?;
        Ok(ParallelAdventure {
            pool,
            workers,
            min_parallel_block: DEFAULT_MIN_PARALLEL_BLOCK,
            log: Logger::root(Discard, o!()),
        })
    }

    /// Build a dedicated pool with one thread per worker.
    pub fn with_threads(workers: u32) -> Result<ParallelAdventure<P>> {
        if workers == 0 {
            return Err(AdventureError::ZeroWorkers);
        }
        let pool = P::new(workers)?;
        ParallelAdventure::new(Arc::new(pool), workers)
    }

    /// Merge passes whose block width does not exceed `width` run on the
    /// calling thread. Only affects speed.
    pub fn min_parallel_block(mut self, width: usize) -> ParallelAdventure<P> {
        self.min_parallel_block = width;
        self
    }

    /// Log fan-outs and barriers to `log`.
    pub fn logger(mut self, log: Logger) -> ParallelAdventure<P> {
        self.log = log;
        self
    }

    ///
    pub fn workers(&self) -> usize {
        self.workers.get()
    }

    ///
    pub fn pool(&self) -> &Arc<P> {
        &self.pool
    }

    /// Run one merge pass on the pool. Each task owns its block and hands
    /// it back merged; the blocks are stitched together in order.
    ///
    /// Every task is waited for even after a failure. Blocks that came
    /// back and the untouched tail are put back into `units`; the blocks
    /// of failed tasks are lost.
    fn merge_pass<T: Sortable>(&self, units: &mut Vec<T>, merges: &[Merge]) -> Result<()> {
        let mut rest = mem::take(units);
        let covered = merges.last().map_or(0, |m| m.right + 1);
        let tail = rest.split_off(covered);
        let mut blocks = Vec::with_capacity(merges.len());
        for m in merges.iter().rev() {
            blocks.push(rest.split_off(m.left));
        }
        blocks.reverse();

        let handles: Vec<_> = merges
            .iter()
            .zip(blocks)
            .map(|(m, mut block)| {
                let (mid, right) = (m.mid - m.left, m.right - m.left);
                self.pool.submit(move || {
                    merge(&mut block, 0, mid, right);
                    block
                })
            })
            .collect();
        let mut failure = None;
        for handle in handles {
            match handle.get() {
                Ok(block) => units.extend(block),
                Err(err) => {
                    if failure.is_none() {
                        failure = Some(err);
                    }
                }
            }
        }
        units.extend(tail);
        trace!(self.log, "merge pass joined"; "failed" => failure.is_some());
        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// [`Adventure::select_best`] over gems the caller already shares,
    /// so nothing is copied before the fan-out.
    pub fn select_best_shared<T: Comparable>(&self, gems: Arc<[T]>) -> Result<T> {
        let slices = partition(gems.len(), self.workers);
        debug!(self.log, "select"; "gems" => gems.len(), "slices" => slices.len());
        let handles = slices
            .into_iter()
            .map(|span| {
                let gems = Arc::clone(&gems);
                self.pool.submit(move || best_of(&gems[span]))
            })
            .collect();
        let locals = join_all(handles)?;
        trace!(self.log, "select joined"; "tasks" => locals.len());

        let mut best = T::default();
        for local in locals {
            if best < local {
                best = local;
            }
        }
        debug!(self.log, "select done");
        Ok(best)
    }
}

impl<P: ThreadPool> Adventure for ParallelAdventure<P> {
    fn pack_value(&self, items: &[Item], bag: &Bag) -> Result<u64> {
        let columns = bag.capacity() + 1;
        let slices = partition(columns, self.workers);
        debug!(self.log, "pack";
            "items" => items.len(), "capacity" => bag.capacity(), "slices" => slices.len());

        let mut table = DpTable::new(items.len(), columns);
        for (i, item) in items.iter().enumerate() {
            let row = i + 1;
            let handles = slices
                .iter()
                .cloned()
                .map(|span| {
                    let prev = Arc::clone(table.last());
                    let item = *item;
                    self.pool.submit(move || {
                        let mut cells = vec![0; span.len()];
                        fill_cells(&item, &prev, span, &mut cells);
                        cells
                    })
                })
                .collect();
            trace!(self.log, "row fanned out"; "row" => row);
            let mut filled = join_all(handles)?.into_iter();
            trace!(self.log, "row joined"; "row" => row);
            // slices are in column order, so the first one starts the row
            let mut next = filled.next().unwrap_or_default();
            next.reserve(columns - next.len());
            for cells in filled {
                next.extend(cells);
            }
            table.push(next);
        }
        let best = table.get(items.len(), bag.capacity());
        debug!(self.log, "pack done"; "value" => best);
        Ok(best)
    }

    fn arrange_sequence<T: Sortable>(&self, units: &mut Vec<T>) -> Result<()> {
        let len = units.len();
        debug!(self.log, "arrange"; "len" => len);
        for width in pass_widths(len) {
            let merges = merge_plan(len, width);
            if width > self.min_parallel_block {
                trace!(self.log, "merge pass fanned out";
                    "width" => width, "tasks" => merges.len());
                self.merge_pass(units, &merges)?;
            } else {
                for m in merges {
                    merge(units, m.left, m.mid, m.right);
                }
            }
        }
        debug!(self.log, "arrange done");
        Ok(())
    }

    /// Copies `gems` once into shared storage; see
    /// [`ParallelAdventure::select_best_shared`] to avoid that.
    fn select_best<T: Comparable>(&self, gems: &[T]) -> Result<T> {
        self.select_best_shared(Arc::from(gems))
    }
}
