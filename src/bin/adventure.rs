#[macro_use]
extern crate clap;
#[macro_use]
extern crate slog;
extern crate slog_async;
extern crate slog_term;

use adventure::{
    Adventure, Bag, Config, Gem, Item, NaiveThreadPool, ParallelAdventure, PoolKind,
    RayonThreadPool, Result, SequentialAdventure, SharedQueueThreadPool, StrategyKind, ThreadPool,
};
use clap::{App, ArgMatches};
use serde::de::DeserializeOwned;
use slog::{Drain, Level, Logger};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::process::exit;

fn main() {
    /* load clap config from yaml file */
    let yaml = load_yaml!("cli.yml");
    let matches = App::from_yaml(yaml)
        .name(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("{}", e);
        exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let log = build_logger(matches.is_present("verbose"));
    let config = load_config(matches)?;
    info!(log, "start";
        "strategy" => ?config.strategy, "pool" => ?config.pool, "workers" => config.workers);

    match config.strategy {
        StrategyKind::Sequential => dispatch(&SequentialAdventure::new(), matches),
        StrategyKind::Parallel => match config.pool {
            PoolKind::Naive => dispatch(&team::<NaiveThreadPool>(&config, &log)?, matches),
            PoolKind::SharedQueue => {
                dispatch(&team::<SharedQueueThreadPool>(&config, &log)?, matches)
            }
            PoolKind::Rayon => dispatch(&team::<RayonThreadPool>(&config, &log)?, matches),
        },
    }
}

fn build_logger(verbose: bool) -> Logger {
    let level = if verbose { Level::Debug } else { Level::Info };
    let decorator = slog_term::PlainDecorator::new(std::io::stderr());
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().filter_level(level).fuse();
    Logger::root(drain, o!())
}

/* config file first, then command line overrides */
fn load_config(matches: &ArgMatches) -> Result<Config> {
    let mut config = match matches.value_of("config") {
        Some(path) => Config::load(Path::new(path))?,
        None => Config::default(),
    };
    if let Some(strategy) = matches.value_of("strategy").and_then(StrategyKind::from_name) {
        config.strategy = strategy;
    }
    if let Some(pool) = matches.value_of("pool").and_then(PoolKind::from_name) {
        config.pool = pool;
    }
    if matches.is_present("workers") {
        config.workers = value_t!(matches, "workers", u32).unwrap_or_else(|e| e.exit());
    }
    config.validate()?;
    Ok(config)
}

fn team<P: ThreadPool>(config: &Config, log: &Logger) -> Result<ParallelAdventure<P>> {
    Ok(ParallelAdventure::<P>::with_threads(config.workers)?
        .min_parallel_block(config.min_parallel_block)
        .logger(log.new(o!("strategy" => "parallel"))))
}

fn dispatch<A: Adventure>(adventure: &A, matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        ("pack", Some(sub_m)) => {
            let capacity = value_t!(sub_m, "capacity", usize).unwrap_or_else(|e| e.exit());
            let items: Vec<Item> = read_json(sub_m)?;
            println!("{}", adventure.pack_value(&items, &Bag::new(capacity))?);
        }
        ("sort", Some(sub_m)) => {
            let mut units: Vec<i64> = read_json(sub_m)?;
            adventure.arrange_sequence(&mut units)?;
            println!("{}", serde_json::to_string(&units)?);
        }
        ("best", Some(sub_m)) => {
            let gems: Vec<Gem> = read_json(sub_m)?;
            println!("{}", adventure.select_best(&gems)?.0);
        }
        _ => unreachable!(),
    }
    Ok(())
}

fn read_json<T: DeserializeOwned>(sub_m: &ArgMatches) -> Result<T> {
    let path = sub_m.value_of("INPUT").unwrap();
    Ok(serde_json::from_reader(BufReader::new(File::open(path)?))?)
}
