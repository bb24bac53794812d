//! Record ordering and identity.
//!
//! [`compare_records`] is the three-way comparison the merge walks with:
//! `Equal` is the only signal that two records are the same, any other result
//! just says which side is consumed next. It is deliberately not a total
//! order (records with the same name but a different base type always compare
//! `Less`, in both directions). [`sort_order`] is the total order both sides
//! are sorted by before the merge; it agrees with [`compare_records`] on names
//! and on operation argument counts, and ties only on records
//! [`compare_records`] calls `Equal`.

use crate::model::{Argument, Attribute, DefaultValue, Operation};
use serde_json::Value;
use std::cmp::Ordering;

/// A record kind the merge diff can align.
pub trait DiffRecord {
    /// Record kind used in log events.
    const KIND: &'static str;

    fn name(&self) -> &str;

    fn base_type(&self) -> &str;

    /// Kind-specific tie-break, applied once names and base types match.
    /// Returns `Equal` only when the records are the same.
    fn compare_fields(&self, other: &Self) -> Ordering;

    /// Total order over the kind-specific fields, used for sorting.
    fn order_fields(&self, other: &Self) -> Ordering;
}

/// Compare two names the way a human-facing sorted list expects:
/// case-insensitive first, punctuation before digits before letters, then
/// lowercase before uppercase.
pub fn collate(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(collation_key(b))
        .then_with(|| b.cmp(a))
}

fn collation_key(name: &str) -> impl Iterator<Item = (u8, char)> + '_ {
    name.chars()
        .flat_map(char::to_lowercase)
        .map(|c| (char_class(c), c))
}

fn char_class(c: char) -> u8 {
    if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    }
}

/// Three-way comparison of two optional records.
///
/// An absent record means its list ran out: `None` on the left sorts after
/// everything, `None` on the right sorts before.
pub fn compare_records<T: DiffRecord>(a: Option<&T>, b: Option<&T>) -> Ordering {
    let (a, b) = match (a, b) {
        (None, _) => return Ordering::Greater,
        (_, None) => return Ordering::Less,
        (Some(a), Some(b)) => (a, b),
    };

    match collate(a.name(), b.name()) {
        Ordering::Equal => {}
        unequal => return unequal,
    }

    if a.base_type() != b.base_type() {
        return Ordering::Less;
    }

    a.compare_fields(b)
}

/// Sort order for one side of the merge: name, then base type, then fields.
pub fn sort_order<T: DiffRecord>(a: &T, b: &T) -> Ordering {
    collate(a.name(), b.name())
        .then_with(|| a.base_type().cmp(b.base_type()))
        .then_with(|| a.order_fields(b))
}

fn differs_if(unequal: bool) -> Ordering {
    if unequal {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

impl DiffRecord for Attribute {
    const KIND: &'static str = "attribute";

    fn name(&self) -> &str {
        &self.name
    }

    fn base_type(&self) -> &str {
        self.idl_type.base_type()
    }

    fn compare_fields(&self, other: &Self) -> Ordering {
        differs_if(self.is_static != other.is_static || self.is_read_only != other.is_read_only)
    }

    fn order_fields(&self, other: &Self) -> Ordering {
        (self.is_static, self.is_read_only).cmp(&(other.is_static, other.is_read_only))
    }
}

impl DiffRecord for Argument {
    const KIND: &'static str = "argument";

    fn name(&self) -> &str {
        &self.name
    }

    fn base_type(&self) -> &str {
        self.idl_type.base_type()
    }

    fn compare_fields(&self, other: &Self) -> Ordering {
        differs_if(
            self.is_optional != other.is_optional
                || self.is_variadic != other.is_variadic
                || self.default_value != other.default_value,
        )
    }

    fn order_fields(&self, other: &Self) -> Ordering {
        (self.is_optional, self.is_variadic)
            .cmp(&(other.is_optional, other.is_variadic))
            .then_with(|| {
                self.default_value
                    .as_ref()
                    .map(default_key)
                    .cmp(&other.default_value.as_ref().map(default_key))
            })
    }
}

/// Sort key for a default value. Ties exactly when the values are equal, so
/// the string `"0"` and the number `0` never share a key.
fn default_key(default: &DefaultValue) -> (&str, u8, String) {
    let (kind, text) = match &default.value {
        Value::Null => (0, String::new()),
        Value::Bool(b) => (1, b.to_string()),
        // -0.0 == 0.0 for JSON numbers
        Value::Number(n) if n.is_f64() && n.as_f64() == Some(0.0) => (2, "0.0".to_string()),
        Value::Number(n) => (2, n.to_string()),
        Value::String(s) => (3, s.clone()),
        Value::Array(_) => (4, default.value.to_string()),
        Value::Object(_) => (5, default.value.to_string()),
    };
    (default.idl_type.as_str(), kind, text)
}

impl DiffRecord for Operation {
    const KIND: &'static str = "operation";

    fn name(&self) -> &str {
        &self.name
    }

    fn base_type(&self) -> &str {
        self.idl_type.base_type()
    }

    fn compare_fields(&self, other: &Self) -> Ordering {
        if self.is_static != other.is_static {
            return Ordering::Less;
        }
        match self.arguments.len().cmp(&other.arguments.len()) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
        let all_same = self
            .arguments
            .iter()
            .zip(&other.arguments)
            .all(|(a, b)| compare_records(Some(a), Some(b)) == Ordering::Equal);
        differs_if(!all_same)
    }

    fn order_fields(&self, other: &Self) -> Ordering {
        self.is_static
            .cmp(&other.is_static)
            .then_with(|| self.arguments.len().cmp(&other.arguments.len()))
            .then_with(|| {
                self.arguments
                    .iter()
                    .zip(&other.arguments)
                    .map(|(a, b)| sort_order(a, b))
                    .find(|ord| ord.is_ne())
                    .unwrap_or(Ordering::Equal)
            })
    }
}
