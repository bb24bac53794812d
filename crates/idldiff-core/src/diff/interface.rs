//! Per-interface orchestration of the merge diff.

use crate::diff::merge::compute_diff;
use crate::diff::model::{DiffOutcome, InterfaceDiff};
use crate::model::{Constant, Interface};

/// Diff one interface between the left and right sources.
///
/// A side that lacks the interface is passed as `Interface::default()`, so an
/// interface present on one side only comes out as all-added or all-removed.
pub fn diff_interface(name: &str, left: &Interface, right: &Interface) -> InterfaceDiff {
    InterfaceDiff {
        name: name.to_string(),
        constants: diff_constants(&left.constants, &right.constants),
        attributes: compute_diff(&left.attributes, &right.attributes),
        operations: compute_diff(&left.operations, &right.operations),
    }
}

/// Constants are not diffed; always reports [`DiffOutcome::Unsupported`].
pub fn diff_constants(_left: &[Constant], _right: &[Constant]) -> DiffOutcome {
    DiffOutcome::Unsupported
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::model::Line;
    use crate::model::{Attribute, Operation};

    #[test]
    fn test_interface_only_on_left() {
        let left = Interface {
            attributes: vec![Attribute::new("x", "long")],
            operations: vec![Operation::new("go", "void")],
            ..Interface::default()
        };
        let diff = diff_interface("Thing", &left, &Interface::default());
        assert_eq!(diff.name, "Thing");
        assert_eq!(diff.attributes.left, vec![Line::removed("long x;")]);
        assert_eq!(diff.operations.left, vec![Line::removed("void go();")]);
        assert_eq!(diff.operations.right, vec![Line::empty()]);
        assert!(diff.has_changes());
    }

    #[test]
    fn test_constants_are_unsupported_even_when_equal() {
        let diff = diff_interface("Empty", &Interface::default(), &Interface::default());
        assert!(diff.constants.is_unsupported());
        assert!(!diff.has_changes());
    }
}
