use crate::error::{AdventureError, Result};
use crossbeam::channel::{self, Receiver, Sender};
use std::panic::{self, AssertUnwindSafe};
use std::thread;

use super::ThreadPool;

/// Fixed number of workers draining one shared FIFO queue.
///
/// A panicking job does not take its worker down. Dropping the pool
/// lets queued jobs finish, then stops and joins every worker.
pub struct SharedQueueThreadPool {
    sender: Sender<ThreadPoolMessage>,
    join_handles: Vec<thread::JoinHandle<()>>,
}

impl ThreadPool for SharedQueueThreadPool {
    fn new(threads: u32) -> Result<SharedQueueThreadPool> {
        if threads == 0 {
            return Err(AdventureError::ZeroWorkers);
        }
        let (sender, receiver) = channel::unbounded::<ThreadPoolMessage>();
        let mut join_handles = Vec::with_capacity(threads as usize);
        for id in 0..threads {
            let receiver = receiver.clone();
            let handle = thread::Builder::new()
                .name(format!("shared-queue-{}", id))
                .spawn(move || get_job_and_exec(receiver))?;
            join_handles.push(handle);
        }

        Ok(SharedQueueThreadPool {
            sender,
            join_handles,
        })
    }

    fn spawn<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        // workers only hang up after `drop`, which needs `&mut self`
        let _ = self.sender.send(ThreadPoolMessage::RunJob(Box::new(job)));
    }
}

impl Drop for SharedQueueThreadPool {
    fn drop(&mut self) {
        for _ in 0..self.join_handles.len() {
            let _ = self.sender.send(ThreadPoolMessage::Shutdown);
        }
        for handle in self.join_handles.drain(..) {
            let _ = handle.join();
        }
    }
}

enum ThreadPoolMessage {
    RunJob(Box<dyn FnOnce() + Send + 'static>),
    Shutdown,
}

fn get_job_and_exec(receiver: Receiver<ThreadPoolMessage>) {
    loop {
        match receiver.recv() {
            Ok(ThreadPoolMessage::RunJob(job)) => {
                let _ = panic::catch_unwind(AssertUnwindSafe(job));
            }
            Ok(ThreadPoolMessage::Shutdown) | Err(_) => break,
        }
    }
}
