//! Timing Path Analyzer CLI
//!
//! Ranks the worst paths of static timing reports and prints a one-line
//! optimization hint for each.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use timing_path_analyzer::commands::{
    display_version, execute_analyze, validate_report_file, AnalyzeArgs,
};
use timing_path_analyzer::utils::config::DEFAULT_TOP_K;

/// Timing Path Analyzer - critical paths and optimization hints
#[derive(Parser, Debug)]
#[command(name = "timing-analyzer")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank critical paths of one report or a directory of reports
    Analyze {
        /// Input timing report file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Directory containing .rpt timing reports
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Also write the results to this text file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write a JSON analysis report to this file
        #[arg(long)]
        json: Option<PathBuf>,

        /// Number of critical paths to show
        #[arg(short = 'k', long, env = "TIMING_TOP_K", default_value_t = DEFAULT_TOP_K)]
        top_k: usize,
    },

    /// Validate a JSON analysis report
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Analyze {
            file,
            dir,
            output,
            json,
            top_k,
        } => {
            let args = AnalyzeArgs {
                input_file: file,
                input_dir: dir,
                output_text: output,
                output_json: json,
                top_k,
            };

            execute_analyze(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
