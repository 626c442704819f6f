//! closesum CLI - closing-price change report and chart generator.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

mod commands;
mod display;

use commands::run::RunOptions;

#[derive(Parser)]
#[command(name = "closesum")]
#[command(about = "Daily closing-price change report and chart generator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the summary report and one chart per security
    Run {
        /// Directory holding the dated snapshot folders
        #[arg(short, long, default_value = "./stock-info-dec")]
        input: PathBuf,

        /// Snapshot file name inside each date folder
        #[arg(short, long, default_value = closesum_lib::DEFAULT_SNAPSHOT_FILE)]
        file: String,

        /// Summary report path
        #[arg(short, long, default_value = "./Full-Summary.csv")]
        report: PathBuf,

        /// Chart output directory. Files named <security>.png
        #[arg(short, long, default_value = "./charts")]
        charts_dir: PathBuf,

        /// Order folders by the calendar date in their name
        #[arg(long)]
        sort_by_date: bool,

        /// Render charts one at a time
        #[arg(long)]
        sequential: bool,
    },

    /// List the date folders a run would process
    List {
        /// Directory holding the dated snapshot folders
        #[arg(short, long, default_value = "./stock-info-dec")]
        input: PathBuf,

        /// Order folders by the calendar date in their name
        #[arg(long)]
        sort_by_date: bool,
    },
}

const fn level_filter(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG, when set, overrides the flag-derived level.
    env_logger::Builder::new()
        .filter_level(level_filter(cli.verbose, cli.quiet))
        .parse_default_env()
        .init();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Run {
            input,
            file,
            report,
            charts_dir,
            sort_by_date,
            sequential,
        } => commands::run::run(&RunOptions {
            input,
            file,
            report,
            charts_dir,
            order: display::folder_order(sort_by_date),
            sequential,
            quiet: cli.quiet,
        }),
        Commands::List {
            input,
            sort_by_date,
        } => commands::list::list_folders(&input, display::folder_order(sort_by_date)),
    }
}
