use super::ThreadPool;
use crate::error::{AdventureError, Result};

/// Wrapper of a fixed size `rayon::ThreadPool`.
pub struct RayonThreadPool {
    thread_pool: rayon::ThreadPool,
}

impl ThreadPool for RayonThreadPool {
    fn new(threads: u32) -> Result<RayonThreadPool> {
        if threads == 0 {
            return Err(AdventureError::ZeroWorkers);
        }
        Ok(RayonThreadPool {
            thread_pool: rayon::ThreadPoolBuilder::new()
                .num_threads(threads as usize)
                // rayon aborts on a panicking spawn without a handler
                .panic_handler(|_| {})
                .build()?,
        })
    }

    fn spawn<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.thread_pool.spawn(job);
    }
}
