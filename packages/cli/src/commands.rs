//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;
use sylpass::{GeneratorConfig, TableVariant};

#[derive(Debug, Parser)]
#[command(name = "sylpass", version)]
#[command(about = "Generate pronounceable passwords")]
pub struct Cli {
    /// Password length in characters (default: 13)
    pub length: Option<usize>,

    /// Number of passwords to print (default: 1)
    pub count: Option<usize>,

    /// Use the standard phoneme table, which includes `i` and `l`
    #[arg(long)]
    pub standard: bool,

    /// Fixed seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Configuration file (default: $XDG_CONFIG_HOME/sylpass/config.json)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Print the category flags and every unit of the active table
    #[arg(long)]
    pub show_table: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply command line overrides on top of a loaded configuration
    pub fn apply(&self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(length) = self.length {
            config.length = length;
        }
        if let Some(count) = self.count {
            config.count = count;
        }
        if self.standard {
            config.variant = TableVariant::Standard;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config
    }
}
