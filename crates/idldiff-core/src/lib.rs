//! idldiff Core - side-by-side structural diff of interface definitions
//!
//! This crate provides the diff engine that compares two named collections of
//! interface definitions, including:
//! - Interface, attribute, operation and argument models loaded from JSON
//! - Record ordering and identity rules per record kind
//! - Canonical single-line rendering of attributes and operations
//! - The sorted two-pointer merge that produces aligned left/right rows
//! - A collection model exposing the interface-name union and per-name diffs
//! - A plain-text side-by-side renderer for terminal review

pub mod collection;
pub mod diff;
pub mod document;
pub mod errors;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use collection::IdlCollection;
pub use diff::{diff_interface, DiffOutcome, DiffResult, InterfaceDiff, Line};
pub use document::{load_document, parse_document_bytes, NamedSource};
pub use errors::{ExError, ExErrorKind, IdlDiffError, Result};
pub use model::{Argument, Attribute, IdlDocument, IdlType, Interface, Operation};
