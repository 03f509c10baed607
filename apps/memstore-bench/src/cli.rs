use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use memstore_core::Layout;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Time the four query shapes on a random dataset across layouts
    QueryMix(QueryMixArgs),

    /// Load a CSV file into one layout and run each query once
    Load(LoadArgs),
}

#[derive(Args, Debug, Clone)]
pub struct QueryMixArgs {
    /// Number of rows to generate
    #[arg(short, long, default_value_t = 100_000)]
    pub rows: usize,

    /// Number of columns to generate (at least 4)
    #[arg(short, long, default_value_t = 16)]
    pub cols: usize,

    /// Values are drawn uniformly from [0, max_value)
    #[arg(long, default_value_t = 1024)]
    pub max_value: i32,

    /// Seed for data and threshold generation
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Queries of each shape to run per layout
    #[arg(short, long, default_value_t = 100)]
    pub iterations: usize,

    /// Layouts to benchmark (repeatable; default: all)
    #[arg(short, long = "layout")]
    pub layouts: Vec<Layout>,

    /// Columns to index in the indexed layout (comma-separated)
    #[arg(long, value_delimiter = ',', default_value = "0,2")]
    pub indexed_columns: Vec<usize>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct LoadArgs {
    /// CSV file of comma-separated integers
    pub path: PathBuf,

    /// Table layout
    #[arg(short, long, default_value = "indexed")]
    pub layout: Layout,

    /// JSON store configuration; overrides --layout
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Threshold for col1 in the two-predicate sum
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub threshold1: i32,

    /// Threshold for col2 in the two-predicate sum
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub threshold2: i32,

    /// Threshold for col0 in the all-columns sum
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub sum_threshold: i32,

    /// Threshold for col0 in the update
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub update_threshold: i32,

    /// Print table contents (and indexes) after the queries
    #[arg(long)]
    pub dump: bool,
}
