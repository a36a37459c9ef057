use super::ThreadPool;
use crate::error::Result;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

/// Spawns a fresh OS thread for every job. The thread count is ignored.
///
/// If the OS refuses a new thread the job is dropped, which a
/// [`TaskHandle`](super::TaskHandle) reports as a task failure.
pub struct NaiveThreadPool {
    spawned: AtomicUsize,
}

impl NaiveThreadPool {
    /// How many jobs have been handed a thread so far.
    pub fn spawned(&self) -> usize {
        self.spawned.load(Ordering::Relaxed)
    }
}

impl ThreadPool for NaiveThreadPool {
    fn new(_threads: u32) -> Result<NaiveThreadPool> {
        Ok(NaiveThreadPool {
            spawned: AtomicUsize::new(0),
        })
    }

    fn spawn<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let id = self.spawned.fetch_add(1, Ordering::Relaxed);
        let _ = thread::Builder::new()
            .name(format!("naive-{}", id))
            .spawn(job);
    }
}
