//! idldiff CLI
//!
//! Command-line interface for side-by-side interface definition diffs

use clap::{Parser, Subcommand};
use idldiff_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "idldiff")]
#[command(about = "idldiff - Side-by-side diff of interface definitions", long_about = None)]
struct Cli {
    /// Human-readable debug logs on stderr instead of JSON info logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the union of interface names from both sources
    Names(commands::names::NamesArgs),
    /// Show the diff of a single interface
    Show(commands::show::ShowArgs),
    /// Show the diff of every interface
    Report(commands::report::ReportArgs),
}

fn main() {
    let cli = Cli::parse();
    init(Profile::from_verbose(cli.verbose));

    let result = match cli.command {
        Commands::Names(args) => commands::names::execute(args),
        Commands::Show(args) => commands::show::execute(args),
        Commands::Report(args) => commands::report::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
