//! Sorted two-pointer merge diff.

use crate::diff::compare::{compare_records, sort_order, DiffRecord};
use crate::diff::model::DiffResult;
use crate::diff::render::RenderLine;
use std::cmp::Ordering;

/// Align two record lists into a [`DiffResult`].
///
/// Both sides are sorted (stable, on private copies; the callers' slices keep
/// their order) and walked in lockstep. An `Equal` comparison emits one
/// unchanged row and advances both cursors; `Less` emits a removed row for the
/// left record; `Greater` emits an added row for the right record. A changed
/// record therefore shows up as a removed row and an added row.
///
/// Runs in O(n log n + m log m) for the sort plus O(n + m) for the walk.
pub fn compute_diff<T>(left: &[T], right: &[T]) -> DiffResult
where
    T: DiffRecord + RenderLine,
{
    let mut left_sorted: Vec<&T> = left.iter().collect();
    let mut right_sorted: Vec<&T> = right.iter().collect();
    left_sorted.sort_by(|a, b| sort_order(*a, *b));
    right_sorted.sort_by(|a, b| sort_order(*a, *b));

    let mut result = DiffResult::default();
    let (mut i, mut j) = (0, 0);

    loop {
        match (left_sorted.get(i).copied(), right_sorted.get(j).copied()) {
            (Some(a), Some(b)) => match compare_records(Some(a), Some(b)) {
                Ordering::Equal => {
                    result.push_unchanged(a.render_line());
                    i += 1;
                    j += 1;
                }
                Ordering::Less => {
                    result.push_removed(a.render_line());
                    i += 1;
                }
                Ordering::Greater => {
                    result.push_added(b.render_line());
                    j += 1;
                }
            },
            (Some(a), None) => {
                result.push_removed(a.render_line());
                i += 1;
            }
            (None, Some(b)) => {
                result.push_added(b.render_line());
                j += 1;
            }
            (None, None) => break,
        }
    }

    let stats = result.stats();
    tracing::debug!(
        kind = T::KIND,
        left_len = left.len(),
        right_len = right.len(),
        rows = result.len(),
        unchanged = stats.unchanged,
        added = stats.added,
        removed = stats.removed,
        "merge diff complete"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::model::{Annotation, Line};
    use crate::model::{Argument, Attribute, DefaultValue, Operation};

    #[test]
    fn test_removed_only() {
        let left = vec![Attribute::new("x", "long")];
        let diff = compute_diff(&left, &[]);
        assert_eq!(diff.left, vec![Line::removed("long x;")]);
        assert_eq!(diff.right, vec![Line::empty()]);
    }

    #[test]
    fn test_added_only() {
        let right = vec![Operation::new("go", "void").with_static(true)];
        let diff = compute_diff(&[], &right);
        assert_eq!(diff.left, vec![Line::empty()]);
        assert_eq!(diff.right, vec![Line::added("static void go();")]);
    }

    #[test]
    fn test_both_empty() {
        let diff = compute_diff::<Attribute>(&[], &[]);
        assert!(diff.is_empty());
        assert!(diff.right.is_empty());
    }

    #[test]
    fn test_identity_is_sorted_and_unchanged() {
        let attrs = vec![
            Attribute::new("zeta", "long"),
            Attribute::new("Alpha", "long"),
            Attribute::new("mid", "DOMString").with_read_only(true),
        ];
        let diff = compute_diff(&attrs, &attrs.clone());
        let texts: Vec<&str> = diff.left.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["long Alpha;", "readonly DOMString mid;", "long zeta;"]);
        assert!(diff
            .rows()
            .all(|(l, r)| l.annotation == Annotation::Unchanged && l == r));
    }

    #[test]
    fn test_disjoint_names() {
        let diff = compute_diff(
            &[Attribute::new("b", "long")],
            &[Attribute::new("a", "long")],
        );
        assert_eq!(diff.left, vec![Line::empty(), Line::removed("long b;")]);
        assert_eq!(diff.right, vec![Line::added("long a;"), Line::empty()]);
    }

    #[test]
    fn test_type_change_is_remove_then_add() {
        let diff = compute_diff(
            &[Attribute::new("x", "long")],
            &[Attribute::new("x", "double")],
        );
        assert_eq!(diff.left, vec![Line::removed("long x;"), Line::empty()]);
        assert_eq!(diff.right, vec![Line::empty(), Line::added("double x;")]);
    }

    #[test]
    fn test_overload_gains_argument() {
        let one = Operation::new("foo", "void").with_argument(Argument::new("a", "long"));
        let two = one.clone().with_argument(Argument::new("b", "long"));
        let diff = compute_diff(&[one.clone()], &[one, two]);
        assert_eq!(
            diff.right,
            vec![
                Line::unchanged("void foo(long a);"),
                Line::added("void foo(long a, long b);")
            ]
        );
        assert_eq!(diff.left[1], Line::empty());
    }

    #[test]
    fn test_defaults_differing_only_in_json_kind_align_regardless_of_order() {
        let with_default = |value: serde_json::Value| {
            Operation::new("f", "void").with_argument(
                Argument::new("a", "long")
                    .optional()
                    .with_default(DefaultValue::new("long", value)),
            )
        };
        let string_zero = with_default(serde_json::json!("0"));
        let number_zero = with_default(serde_json::json!(0));

        let diff = compute_diff(
            &[string_zero.clone(), number_zero.clone()],
            &[number_zero.clone(), string_zero.clone()],
        );
        assert_eq!(diff.len(), 2);
        assert!(diff
            .rows()
            .all(|(l, r)| l.annotation == Annotation::Unchanged && r.annotation == Annotation::Unchanged));
        assert_eq!(
            diff,
            compute_diff(&[string_zero.clone(), number_zero.clone()], &[string_zero, number_zero])
        );
    }

    #[test]
    fn test_caller_order_is_preserved() {
        let left = vec![Attribute::new("b", "long"), Attribute::new("a", "long")];
        let _ = compute_diff(&left, &[]);
        assert_eq!(left[0].name, "b");
        assert_eq!(left[1].name, "a");
    }
}
