//! Report command
//!
//! Usage: idldiff report [--changed-only] [--format text|json] [--width <N>]

use crate::commands::{print_diffs, OutputFormat, SourceArgs};
use clap::Args;
use idldiff_core::diff::side_by_side::DEFAULT_COLUMN_WIDTH;

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Skip interfaces with identical attributes and operations
    #[arg(long)]
    pub changed_only: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Column width for text output
    #[arg(short, long, default_value_t = DEFAULT_COLUMN_WIDTH)]
    pub width: usize,
}

/// Execute report command
pub fn execute(args: ReportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let collection = args.sources.load()?;

    let diffs: Vec<_> = collection
        .diff_all()
        .into_iter()
        .filter(|diff| !args.changed_only || diff.has_changes())
        .collect();

    print_diffs(&collection, &diffs, args.format, args.width)?;
    Ok(())
}
