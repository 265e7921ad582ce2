//! Command-line definition.

use clap::{Parser, ValueEnum};
use loadtest_populate_mongodb::MongoDBLoadArgs;

#[derive(Parser, Clone, Debug)]
#[command(name = "mongo-perf-inspect")]
#[command(about = "Insert synthetic documents into MongoDB with a pool of workers until a deadline")]
#[command(long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub mongodb: MongoDBLoadArgs,

    /// Log output format
    #[arg(long, value_enum, default_value = "text")]
    pub log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[value(name = "text")]
    Text,
    /// One JSON object per line
    #[value(name = "json")]
    Json,
}
