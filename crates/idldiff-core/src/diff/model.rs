//! Interface diff output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq` so a
//! presentation layer can consume them as JSON.

use serde::{Deserialize, Serialize};

/// Per-row classification driving display style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Annotation {
    /// Present on both sides with the same identity
    Unchanged,
    /// Present only on the right side
    Added,
    /// Present only on the left side
    Removed,
    /// Filler opposite an added or removed row
    Empty,
}

impl Annotation {
    /// Single-character gutter marker used by text renderers.
    pub fn marker(&self) -> char {
        match self {
            Annotation::Unchanged => ' ',
            Annotation::Added => '+',
            Annotation::Removed => '-',
            Annotation::Empty => ' ',
        }
    }
}

/// One displayed row on one side of a diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub text: String,
    pub annotation: Annotation,
}

impl Line {
    pub fn unchanged(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            annotation: Annotation::Unchanged,
        }
    }

    pub fn added(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            annotation: Annotation::Added,
        }
    }

    pub fn removed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            annotation: Annotation::Removed,
        }
    }

    pub fn empty() -> Self {
        Self {
            text: String::new(),
            annotation: Annotation::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.annotation == Annotation::Empty
    }
}

/// Row counts of a [`DiffResult`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub unchanged: usize,
    pub added: usize,
    pub removed: usize,
}

impl DiffStats {
    pub fn rows(&self) -> usize {
        self.unchanged + self.added + self.removed
    }
}

/// Two positionally aligned row sequences for one record kind.
///
/// `left[k]` and `right[k]` belong to the same merge step, so both vectors
/// always have the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    pub left: Vec<Line>,
    pub right: Vec<Line>,
}

impl DiffResult {
    pub(crate) fn push_unchanged(&mut self, text: String) {
        self.left.push(Line::unchanged(text.clone()));
        self.right.push(Line::unchanged(text));
    }

    pub(crate) fn push_removed(&mut self, text: String) {
        self.left.push(Line::removed(text));
        self.right.push(Line::empty());
    }

    pub(crate) fn push_added(&mut self, text: String) {
        self.left.push(Line::empty());
        self.right.push(Line::added(text));
    }

    /// Number of aligned rows.
    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Iterate rows as `(left, right)` pairs.
    pub fn rows(&self) -> impl Iterator<Item = (&Line, &Line)> {
        self.left.iter().zip(self.right.iter())
    }

    pub fn stats(&self) -> DiffStats {
        let mut stats = DiffStats::default();
        for (left, right) in self.rows() {
            match (left.annotation, right.annotation) {
                (Annotation::Removed, _) => stats.removed += 1,
                (_, Annotation::Added) => stats.added += 1,
                _ => stats.unchanged += 1,
            }
        }
        stats
    }

    pub fn has_changes(&self) -> bool {
        self.rows()
            .any(|(left, right)| left.is_empty() || right.is_empty())
    }
}

/// Result of diffing one record kind.
///
/// `Unsupported` marks a kind the engine does not compute, so callers can
/// tell "not computed" apart from "no differences".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "result", rename_all = "snake_case")]
pub enum DiffOutcome {
    Computed(DiffResult),
    Unsupported,
}

impl DiffOutcome {
    pub fn is_unsupported(&self) -> bool {
        matches!(self, DiffOutcome::Unsupported)
    }

    pub fn computed(&self) -> Option<&DiffResult> {
        match self {
            DiffOutcome::Computed(result) => Some(result),
            DiffOutcome::Unsupported => None,
        }
    }
}

/// The full diff of one interface between the two sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceDiff {
    /// Interface name
    pub name: String,
    /// Always [`DiffOutcome::Unsupported`] in this implementation
    pub constants: DiffOutcome,
    pub attributes: DiffResult,
    pub operations: DiffResult,
}

impl InterfaceDiff {
    /// True if attributes or operations differ. Constants never count.
    pub fn has_changes(&self) -> bool {
        self.attributes.has_changes() || self.operations.has_changes()
    }
}
