//! Show command
//!
//! Usage: idldiff show <NAME> [--format text|json] [--width <N>]

use crate::commands::{print_diffs, OutputFormat, SourceArgs};
use clap::Args;
use idldiff_core::diff::side_by_side::DEFAULT_COLUMN_WIDTH;
use idldiff_core::{ExError, ExErrorKind};

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Interface name to diff
    pub name: String,

    #[command(flatten)]
    pub sources: SourceArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Column width for text output
    #[arg(short, long, default_value_t = DEFAULT_COLUMN_WIDTH)]
    pub width: usize,
}

/// Execute show command
pub fn execute(args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let collection = args.sources.load()?;

    if !collection.contains(&args.name) {
        return Err(ExError::new(ExErrorKind::NotFound)
            .with_op("show")
            .with_entity_id(args.name.as_str())
            .with_message("interface is not defined in either source")
            .into());
    }

    let diff = collection.get_diff(&args.name);
    print_diffs(&collection, &[diff], args.format, args.width)?;
    Ok(())
}
