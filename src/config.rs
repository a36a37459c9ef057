use crate::error::{AdventureError, Result};
use crate::strategy::DEFAULT_MIN_PARALLEL_BLOCK;
use crate::thread_pool::PoolKind;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Which strategy a driver should run.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// `SequentialAdventure`
    Sequential,
    /// `ParallelAdventure`
    Parallel,
}

impl StrategyKind {
    /// Parse the command line spelling of a strategy.
    pub fn from_name(name: &str) -> Option<StrategyKind> {
        match name {
            "sequential" => Some(StrategyKind::Sequential),
            "parallel" => Some(StrategyKind::Parallel),
            _ => None,
        }
    }
}

impl Default for StrategyKind {
    fn default() -> StrategyKind {
        StrategyKind::Sequential
    }
}

/// Settings for picking and building a strategy.
///
/// Every field is optional in a config file, missing ones take their
/// default. For example:
///
/// ```json
/// { "strategy": "parallel", "pool": "rayon", "workers": 4 }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    ///
    pub strategy: StrategyKind,
    ///
    pub pool: PoolKind,
    /// Worker count, also used as the pool size. Defaults to the CPU count.
    pub workers: u32,
    /// Widest merge block still merged on the calling thread.
    pub min_parallel_block: usize,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            strategy: StrategyKind::default(),
            pool: PoolKind::default(),
            workers: num_cpus::get() as u32,
            min_parallel_block: DEFAULT_MIN_PARALLEL_BLOCK,
        }
    }
}

impl Config {
    /// Read a JSON config file and validate it.
    pub fn load(path: &Path) -> Result<Config> {
        let config: Config = serde_json::from_reader(BufReader::new(File::open(path)?))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no strategy can be built from.
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(AdventureError::ZeroWorkers);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "strategy": "parallel", "pool": "rayon", "workers": 3 }}"#).unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.strategy, StrategyKind::Parallel);
        assert_eq!(config.pool, PoolKind::Rayon);
        assert_eq!(config.workers, 3);
        assert_eq!(config.min_parallel_block, DEFAULT_MIN_PARALLEL_BLOCK);
    }

    #[test]
    fn zero_workers_invalid() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "workers": 0 }}"#).unwrap();
        assert!(matches!(Config::load(file.path()), Err(AdventureError::ZeroWorkers)));
    }

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert!(config.workers > 0);
        assert!(config.validate().is_ok());
    }
}
