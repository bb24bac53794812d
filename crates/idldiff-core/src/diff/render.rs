//! Canonical single-line rendering of records.

use crate::model::{Argument, Attribute, Operation, STRING_TYPE};

/// Renders a record as the one line shown in a diff row.
pub trait RenderLine {
    fn render_line(&self) -> String;
}

/// Space-join the parts, skipping empty ones.
fn join_words<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn flag(set: bool, word: &'static str) -> &'static str {
    if set {
        word
    } else {
        ""
    }
}

impl RenderLine for Attribute {
    fn render_line(&self) -> String {
        let name = format!("{};", self.name);
        join_words([
            flag(self.is_static, "static"),
            flag(self.is_read_only, "readonly"),
            self.idl_type.base_type(),
            name.as_str(),
        ])
    }
}

impl RenderLine for Argument {
    fn render_line(&self) -> String {
        let default = self.default_value.as_ref().map(|default| {
            if default.idl_type == STRING_TYPE {
                format!("= \"{}\"", default.literal())
            } else {
                format!("= {}", default.literal())
            }
        });
        join_words([
            flag(self.is_optional, "optional"),
            self.idl_type.base_type(),
            self.name.as_str(),
            default.as_deref().unwrap_or(""),
            flag(self.is_variadic, "..."),
        ])
    }
}

impl RenderLine for Operation {
    fn render_line(&self) -> String {
        let prefix = join_words([
            flag(self.is_static, "static"),
            self.idl_type.base_type(),
            self.name.as_str(),
        ]);
        let arguments = self
            .arguments
            .iter()
            .map(RenderLine::render_line)
            .collect::<Vec<_>>()
            .join(", ");
        format!("{prefix}({arguments});")
    }
}
