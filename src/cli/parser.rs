use crate::export::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rShopTrace
#[derive(Parser)]
#[command(
    name = "rshoptrace",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn sparse in-store location logs into per-minute customer trajectories",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "conf", value_name = "FILE")]
    pub conf: Option<PathBuf>,

    /// Run in test mode (no config file written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Show or check the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Load location logs and check their timestamps
    Validate {
        /// Log files or directories (default: input_dir from config)
        inputs: Vec<PathBuf>,
    },

    /// Build per-minute trajectories and export them
    Process {
        /// Log files or directories (default: input_dir from config)
        inputs: Vec<PathBuf>,

        #[arg(long, value_name = "FILE", help = "Output file (default: output_file from config)")]
        file: Option<PathBuf>,

        #[arg(long, value_enum, help = "Output format (default: default_format from config)")]
        format: Option<ExportFormat>,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Print one summary line per visit
    Visits {
        /// Log files or directories (default: input_dir from config)
        inputs: Vec<PathBuf>,
    },
}
