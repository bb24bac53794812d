//! Names command
//!
//! Usage: idldiff names [--left <FILE>] [--right <FILE>]

use crate::commands::SourceArgs;
use clap::Args;

#[derive(Debug, Args)]
pub struct NamesArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Only list interfaces whose attributes or operations differ
    #[arg(long)]
    pub changed_only: bool,
}

/// Execute names command
pub fn execute(args: NamesArgs) -> Result<(), Box<dyn std::error::Error>> {
    let collection = args.sources.load()?;

    for name in collection.interface_names() {
        if args.changed_only && !collection.get_diff(name).has_changes() {
            continue;
        }
        println!("{}", name);
    }

    Ok(())
}
