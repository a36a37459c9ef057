#![deny(missing_docs)]
//! adventure solves three problems, 0/1 knapsack, stable merge sort and
//! maximum selection, with two interchangeable strategies.
//! `SequentialAdventure` runs on the calling thread; `ParallelAdventure`
//! splits each algorithm into fan-outs on a thread pool separated by
//! barriers, and gives identical answers.

#[macro_use]
extern crate slog;

mod config;
mod error;
pub mod partition;
pub mod strategy;
mod table;
pub mod thread_pool;
mod types;

pub use config::{Config, StrategyKind};
pub use error::{AdventureError, Result};
pub use strategy::{Adventure, ParallelAdventure, SequentialAdventure};
pub use thread_pool::{
    NaiveThreadPool, PoolKind, RayonThreadPool, SharedQueueThreadPool, TaskHandle, ThreadPool,
};
pub use types::{Bag, Comparable, Gem, Item, Sortable};
