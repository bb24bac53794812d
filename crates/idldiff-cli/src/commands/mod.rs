//! Subcommands and the source arguments they share.

pub mod names;
pub mod report;
pub mod show;

use clap::{Args, ValueEnum};
use idldiff_core::diff::InterfaceDiff;
use idldiff_core::{load_document, ExError, IdlCollection, IdlDiffError, NamedSource};
use std::path::PathBuf;

/// Where the two documents come from and how they are labelled.
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Left (old) document
    #[arg(long, default_value = "data/webkit.json")]
    pub left: PathBuf,

    /// Right (new) document
    #[arg(long, default_value = "data/blink.json")]
    pub right: PathBuf,

    /// Column label for the left document
    #[arg(long, default_value = "webkit")]
    pub left_label: String,

    /// Column label for the right document
    #[arg(long, default_value = "blink")]
    pub right_label: String,
}

impl SourceArgs {
    /// Load both documents. Both must load before any diff runs.
    pub fn load(&self) -> Result<IdlCollection, ExError> {
        let left = load_document(&self.left)?;
        let right = load_document(&self.right)?;
        Ok(IdlCollection::new(
            NamedSource::new(self.left_label.clone(), left),
            NamedSource::new(self.right_label.clone(), right),
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Side-by-side text columns
    Text,
    /// Structured JSON
    Json,
}

/// Print diffs in the requested format.
pub fn print_diffs(
    collection: &IdlCollection,
    diffs: &[InterfaceDiff],
    format: OutputFormat,
    width: usize,
) -> Result<(), ExError> {
    match format {
        OutputFormat::Text => {
            for diff in diffs {
                print!(
                    "{}",
                    idldiff_core::diff::render_side_by_side(
                        diff,
                        collection.left_label(),
                        collection.right_label(),
                        width,
                    )
                );
                println!();
            }
        }
        OutputFormat::Json => {
            println!("{}", render_json(diffs)?);
        }
    }
    Ok(())
}

/// Structured JSON for a list of diffs.
pub fn render_json(diffs: &[InterfaceDiff]) -> Result<String, ExError> {
    serde_json::to_string_pretty(diffs)
        .map_err(|e| ExError::from(IdlDiffError::from(e)).with_op("render_json"))
}
