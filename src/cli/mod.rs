use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod summary;
mod update;

pub use config::Config;

/// particle-phase - Label particles from classified image directories
#[derive(Parser)]
#[command(name = "particle-phase")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Runs `update` with default settings when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Assign phases from the donut/noise directories and rewrite the dataset
    Update {
        /// Directory containing the donut and noise subdirectories
        #[arg(short = 'b', long, value_name = "DIR")]
        base_dir: Option<PathBuf>,

        /// Dataset CSV (defaults to particle_df.csv inside the base directory)
        #[arg(short = 'd', long, value_name = "FILE")]
        dataset: Option<PathBuf>,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Report what would change without writing the dataset
        #[arg(long)]
        dry_run: bool,

        /// Print the run statistics as JSON after the report
        #[arg(long)]
        json: bool,
    },

    /// Display the phase distribution of a dataset without modifying it
    Summary {
        /// Dataset CSV path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Load column names from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        None => update::run(None, None, None, false, false),
        Some(Commands::Update {
            base_dir,
            dataset,
            config,
            dry_run,
            json,
        }) => update::run(base_dir, dataset, config, dry_run, json),
        Some(Commands::Summary { file, config }) => summary::run(file, config),
    }
}
