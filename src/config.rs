use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::components::url;

#[derive(Parser, Debug)]
#[command(name = "libara-search")]
#[command(about = "Search a remote book catalog by title, author or genre", long_about = None)]
#[command(version)]
pub struct Config {
    /// Catalog to load once at start-up
    #[arg(long, default_value = url::DATA_URL)]
    pub url: String,

    /// Delay before a search renders its results
    #[arg(long = "delay-ms", value_name = "MILLIS", default_value_t = 50)]
    pub delay_ms: u64,

    /// Run a single search and exit instead of reading terms from stdin
    #[arg(long)]
    pub term: Option<String>,

    /// Write the whole page to this file after every update
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,
}

impl Config {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
