//! Interface diff engine.
//!
//! Aligns the attributes and operations of one interface across two sources
//! into side-by-side rows.
//!
//! ## Entry point
//!
//! ```
//! use idldiff_core::diff::diff_interface;
//! use idldiff_core::model::{Attribute, Interface};
//!
//! let left = Interface {
//!     attributes: vec![Attribute::new("x", "long")],
//!     ..Interface::default()
//! };
//! let diff = diff_interface("Thing", &left, &Interface::default());
//! assert_eq!(diff.attributes.left[0].text, "long x;");
//! assert!(diff.constants.is_unsupported());
//! ```
//!
//! ## Guarantees
//!
//! - **Alignment**: `left` and `right` have the same length in every result.
//! - **Exclusivity**: a row is never empty on both sides, and a row that is
//!   non-empty on both sides is unchanged with identical text.
//! - **Order independence**: input order does not affect the result.
//! - **Constants**: reported as unsupported, never as "no differences".

pub mod compare;
pub mod interface;
pub mod merge;
pub mod model;
pub mod render;
pub mod side_by_side;

pub use interface::diff_interface;
pub use merge::compute_diff;
pub use model::{Annotation, DiffOutcome, DiffResult, DiffStats, InterfaceDiff, Line};
pub use side_by_side::render_side_by_side;
