use std::error;
use std::fmt;
use std::io;
use std::result;

/// Error type for every fallible operation of this crate.
#[derive(Debug)]
pub enum AdventureError {
    /// Reading an input or config file, or spawning a worker thread failed.
    Io(io::Error),
    /// Input or config could not be (de)serialized.
    Serde(serde_json::Error),
    /// Building a rayon pool failed.
    ThreadPool(rayon::ThreadPoolBuildError),
    /// A worker count or pool size of zero was requested.
    ZeroWorkers,
    /// A pool task panicked or was dropped before producing its result.
    TaskFailure(String),
}

///
pub type Result<T> = result::Result<T, AdventureError>;

impl fmt::Display for AdventureError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AdventureError::Io(err) => write!(f, "io error: {}", err),
            AdventureError::Serde(err) => write!(f, "serde error: {}", err),
            AdventureError::ThreadPool(err) => write!(f, "thread pool error: {}", err),
            AdventureError::ZeroWorkers => write!(f, "worker count must be positive"),
            AdventureError::TaskFailure(msg) => write!(f, "task failed: {}", msg),
        }
    }
}

impl error::Error for AdventureError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            AdventureError::Io(err) => Some(err),
            AdventureError::Serde(err) => Some(err),
            AdventureError::ThreadPool(err) => Some(err),
            AdventureError::ZeroWorkers | AdventureError::TaskFailure(_) => None,
        }
    }
}

impl From<io::Error> for AdventureError {
    fn from(err: io::Error) -> AdventureError {
        AdventureError::Io(err)
    }
}

impl From<serde_json::Error> for AdventureError {
    fn from(err: serde_json::Error) -> AdventureError {
        AdventureError::Serde(err)
    }
}

impl From<rayon::ThreadPoolBuildError> for AdventureError {
    fn from(err: rayon::ThreadPoolBuildError) -> AdventureError {
        AdventureError::ThreadPool(err)
    }
}
