//! Plain-text side-by-side renderer for interface diffs.

use crate::diff::model::{DiffOutcome, DiffResult, InterfaceDiff, Line};

/// Default column width used by the CLI.
pub const DEFAULT_COLUMN_WIDTH: usize = 48;

const ELLIPSIS: &str = "...";

/// Render an [`InterfaceDiff`] as two text columns.
///
/// Rows carry a gutter marker: `-` removed, `+` added, blank otherwise. Text
/// longer than `width` is cut and suffixed with `...`. This is a review aid
/// only and does not affect the structured diff.
pub fn render_side_by_side(
    diff: &InterfaceDiff,
    left_label: &str,
    right_label: &str,
    width: usize,
) -> String {
    let width = width.max(ELLIPSIS.len() + 1);
    let mut out = String::new();

    out.push_str(&format!("== {} ==\n", diff.name));
    push_row(&mut out, ' ', left_label, ' ', right_label, width);
    out.push_str(&format!(
        "{}-+-{}\n",
        "-".repeat(width + 2),
        "-".repeat(width + 2)
    ));

    match &diff.constants {
        DiffOutcome::Computed(result) => push_section(&mut out, "constants", result, width),
        DiffOutcome::Unsupported => out.push_str("[constants] (not computed)\n"),
    }
    push_section(&mut out, "attributes", &diff.attributes, width);
    push_section(&mut out, "operations", &diff.operations, width);

    out
}

fn push_section(out: &mut String, title: &str, result: &DiffResult, width: usize) {
    let stats = result.stats();
    out.push_str(&format!(
        "[{}] {} unchanged, {} removed, {} added\n",
        title, stats.unchanged, stats.removed, stats.added
    ));
    for (left, right) in result.rows() {
        push_line_pair(out, left, right, width);
    }
}

fn push_line_pair(out: &mut String, left: &Line, right: &Line, width: usize) {
    push_row(
        out,
        left.annotation.marker(),
        &left.text,
        right.annotation.marker(),
        &right.text,
        width,
    );
}

fn push_row(
    out: &mut String,
    left_marker: char,
    left: &str,
    right_marker: char,
    right: &str,
    width: usize,
) {
    let row = format!(
        "{} {:<width$} | {} {}",
        left_marker,
        fit(left, width),
        right_marker,
        fit(right, width),
        width = width
    );
    out.push_str(row.trim_end());
    out.push('\n');
}

/// Cut `text` to at most `width` characters.
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width - ELLIPSIS.len()).collect();
    format!("{kept}{ELLIPSIS}")
}
