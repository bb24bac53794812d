//! The two loaded sources and per-interface diff access.

use crate::diff::{diff_interface, InterfaceDiff};
use crate::document::NamedSource;
use crate::model::Interface;
use crate::{log_op_end, log_op_start};
use std::collections::BTreeSet;
use std::sync::OnceLock;
use std::time::Instant;

/// Two immutable documents and the interface-name union over them.
///
/// The sources are never mutated after construction, so the name union is
/// computed at most once and then shared. Diffs are computed on every call
/// and owned by the caller. The model is `Send + Sync`; concurrent callers
/// need no further locking.
#[derive(Debug)]
pub struct IdlCollection {
    left: NamedSource,
    right: NamedSource,
    interface_names: OnceLock<Vec<String>>,
}

impl IdlCollection {
    pub fn new(left: NamedSource, right: NamedSource) -> Self {
        Self {
            left,
            right,
            interface_names: OnceLock::new(),
        }
    }

    pub fn left_label(&self) -> &str {
        &self.left.label
    }

    pub fn right_label(&self) -> &str {
        &self.right.label
    }

    /// Union of interface names from both sources, deduplicated and sorted.
    pub fn interface_names(&self) -> &[String] {
        self.interface_names.get_or_init(|| {
            self.left
                .document
                .keys()
                .chain(self.right.document.keys())
                .cloned()
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect()
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.left.document.contains_key(name) || self.right.document.contains_key(name)
    }

    /// Diff one interface. A name missing from a source diffs as an empty
    /// interface on that side; an unknown name yields an all-empty diff.
    pub fn get_diff(&self, name: &str) -> InterfaceDiff {
        let op = "get_diff";
        let start = Instant::now();
        log_op_start!(op, interface = name);

        let empty = Interface::default();
        let left = self.left.document.get(name).unwrap_or(&empty);
        let right = self.right.document.get(name).unwrap_or(&empty);
        let diff = diff_interface(name, left, right);

        log_op_end!(
            op,
            duration_ms = start.elapsed().as_millis() as u64,
            interface = name,
            row_count = diff.attributes.len() + diff.operations.len(),
            changed = diff.has_changes()
        );
        diff
    }

    /// Diff every interface in name order.
    pub fn diff_all(&self) -> Vec<InterfaceDiff> {
        self.interface_names()
            .iter()
            .map(|name| self.get_diff(name))
            .collect()
    }
}
