//! Thread pools the parallel strategy fans its work out to.
//!
//! Every pool only has to know how to `spawn` a job. Result delivery is
//! layered on top by [`ThreadPool::submit`], which hands back a
//! [`TaskHandle`] the caller blocks on.

use crate::error::{AdventureError, Result};
use crossbeam::channel::{self, Receiver};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

mod naive;
mod rayon;
mod shared_queue;
pub use self::rayon::RayonThreadPool;
pub use naive::NaiveThreadPool;
pub use shared_queue::SharedQueueThreadPool;

/// Trait `ThreadPool` is for multithread jobs. Required functions
/// are `new` and `spawn`.
pub trait ThreadPool {
    /// Construct a new thread pool with total threads number `threads`.
    fn new(threads: u32) -> Result<Self>
    where
        Self: Sized;

    /// Submit a new workload to execute.
    fn spawn<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static;

    /// Submit a workload whose result is wanted back.
    ///
    /// A panic inside `task` is caught on the worker and reported by
    /// [`TaskHandle::get`] instead of tearing the worker down.
    fn submit<F, T>(&self, task: F) -> TaskHandle<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let (sender, receiver) = channel::bounded(1);
        self.spawn(move || {
            let outcome = panic::catch_unwind(AssertUnwindSafe(task)).map_err(panic_message);
            // the handle may already be gone, nobody is left to tell
            let _ = sender.send(outcome);
        });
        TaskHandle { receiver }
    }
}

/// Pending result of a task submitted with [`ThreadPool::submit`].
pub struct TaskHandle<T> {
    receiver: Receiver<std::result::Result<T, String>>,
}

impl<T> TaskHandle<T> {
    /// Block until the task has finished and take its result.
    pub fn get(self) -> Result<T> {
        match self.receiver.recv() {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(msg)) => Err(AdventureError::TaskFailure(msg)),
            Err(_) => Err(AdventureError::TaskFailure(
                "task was dropped before it ran".to_owned(),
            )),
        }
    }
}

/// Wait for every handle of one fan-out.
///
/// Results come back in submission order. Even when a task failed, all
/// remaining handles are still waited on before the first failure is
/// returned, so no task of this batch outlives the call.
pub fn join_all<T>(handles: Vec<TaskHandle<T>>) -> Result<Vec<T>> {
    let mut results = Vec::with_capacity(handles.len());
    let mut failure = None;
    for handle in handles {
        match handle.get() {
            Ok(value) => results.push(value),
            Err(err) => {
                if failure.is_none() {
                    failure = Some(err);
                }
            }
        }
    }
    match failure {
        Some(err) => Err(err),
        None => Ok(results),
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_owned()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "task panicked".to_owned()
    }
}

/// Which [`ThreadPool`] implementation to build.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PoolKind {
    /// [`NaiveThreadPool`]
    Naive,
    /// [`SharedQueueThreadPool`]
    SharedQueue,
    /// [`RayonThreadPool`]
    Rayon,
}

impl PoolKind {
    /// Parse the command line spelling of a pool kind.
    pub fn from_name(name: &str) -> Option<PoolKind> {
        match name {
            "naive" => Some(PoolKind::Naive),
            "shared-queue" => Some(PoolKind::SharedQueue),
            "rayon" => Some(PoolKind::Rayon),
            _ => None,
        }
    }
}

impl Default for PoolKind {
    fn default() -> PoolKind {
        PoolKind::SharedQueue
    }
}
