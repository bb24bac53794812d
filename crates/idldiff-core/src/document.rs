//! Loading interface documents.
//!
//! A document is a JSON object mapping interface name to definition. Loading
//! fails fast on anything malformed: the diff never runs over a partially
//! understood document.

#![allow(clippy::result_large_err)]

use crate::errors::{ExError, IdlDiffError};
use crate::model::{IdlDocument, Interface};
use crate::{log_op_end, log_op_error, log_op_start};
use serde_json::{Map, Value};
use std::path::Path;
use std::time::Instant;

/// Record lists that must carry a `name` on every entry.
const NAMED_LISTS: &[&str] = &["attributes", "constants", "operations"];

/// A loaded document together with the label it is displayed under.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedSource {
    pub label: String,
    pub document: IdlDocument,
}

impl NamedSource {
    pub fn new(label: impl Into<String>, document: IdlDocument) -> Self {
        Self {
            label: label.into(),
            document,
        }
    }
}

/// Parse raw document bytes into an [`IdlDocument`].
///
/// # Errors
///
/// - `InvalidDocument` — bytes are not UTF-8, not JSON, the root is not an
///   object, or an interface has the wrong shape
/// - `MissingField` — an attribute, constant, operation or argument has no
///   string `name`
pub fn parse_document_bytes(bytes: &[u8]) -> Result<IdlDocument, ExError> {
    let op = "parse_document_bytes";

    let text = std::str::from_utf8(bytes).map_err(|e| {
        ExError::from(IdlDiffError::InvalidUtf8 {
            message: e.to_string(),
        })
        .with_op(op)
    })?;

    let raw: Value = serde_json::from_str(text).map_err(|e| {
        ExError::from(IdlDiffError::InvalidJson {
            message: e.to_string(),
        })
        .with_op(op)
    })?;

    let Value::Object(entries) = raw else {
        return Err(ExError::from(IdlDiffError::DocumentNotObject).with_op(op));
    };

    let mut document = IdlDocument::new();
    for (name, value) in entries {
        check_record_names(&name, &value).map_err(|e| ExError::from(e).with_op(op))?;
        let interface: Interface = serde_json::from_value(value).map_err(|e| {
            ExError::from(IdlDiffError::MalformedInterface {
                interface: name.clone(),
                message: e.to_string(),
            })
            .with_op(op)
        })?;
        document.insert(name, interface);
    }

    Ok(document)
}

/// Every record (and every operation argument) must have a string `name`.
fn check_record_names(interface: &str, value: &Value) -> Result<(), IdlDiffError> {
    let Some(object) = value.as_object() else {
        return Err(IdlDiffError::MalformedInterface {
            interface: interface.to_string(),
            message: "interface definition must be an object".to_string(),
        });
    };

    for list in NAMED_LISTS {
        for record in records(object, list) {
            require_name(interface, record)?;
            if *list != "operations" {
                continue;
            }
            if let Some(operation) = record.as_object() {
                for argument in records(operation, "arguments") {
                    require_name(interface, argument)?;
                }
            }
        }
    }
    Ok(())
}

fn records<'a>(object: &'a Map<String, Value>, key: &str) -> &'a [Value] {
    object
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn require_name(interface: &str, record: &Value) -> Result<(), IdlDiffError> {
    match record.get("name") {
        Some(Value::String(_)) => Ok(()),
        _ => Err(IdlDiffError::MissingField {
            interface: interface.to_string(),
            field: "name".to_string(),
        }),
    }
}

/// Read and parse a document from disk.
///
/// # Errors
///
/// - `Io` — the file cannot be read
/// - any error from [`parse_document_bytes`]
pub fn load_document(path: &Path) -> Result<IdlDocument, ExError> {
    let op = "load_document";
    let start = Instant::now();
    let source = path.display().to_string();
    log_op_start!(op, source = source.as_str());

    let result = std::fs::read(path)
        .map_err(|e| {
            ExError::from(IdlDiffError::Io {
                path: source.clone(),
                message: e.to_string(),
            })
            .with_op(op)
        })
        .and_then(|bytes| parse_document_bytes(&bytes));

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(document) => {
            log_op_end!(
                op,
                duration_ms = duration_ms,
                source = source.as_str(),
                interface_count = document.len()
            );
        }
        Err(err) => {
            log_op_error!(
                op,
                err.clone(),
                duration_ms = duration_ms,
                source = source.as_str()
            );
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExErrorKind;
    use serde_json::json;

    fn bytes(v: &Value) -> Vec<u8> {
        serde_json::to_vec(v).unwrap()
    }

    #[test]
    fn test_parse_minimal_document() {
        let doc = parse_document_bytes(&bytes(&json!({
            "Node": {
                "attributes": [
                    {"name": "nodeType", "idl_type": {"base_type": "unsigned short"},
                     "is_static": false, "is_read_only": true}
                ],
                "constants": [],
                "operations": []
            }
        })))
        .unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc["Node"].attributes[0].name, "nodeType");
    }

    #[test]
    fn test_root_must_be_object() {
        let err = parse_document_bytes(b"[1, 2, 3]").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidDocument);
        assert_eq!(err.op(), Some("parse_document_bytes"));
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_document_bytes(b"{not json").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidDocument);
    }

    #[test]
    fn test_invalid_utf8() {
        let err = parse_document_bytes(&[0xff, 0xfe, 0xfd]).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidDocument);
        assert!(err.message().contains("UTF-8"));
    }

    #[test]
    fn test_missing_argument_name_fails_fast() {
        let err = parse_document_bytes(&bytes(&json!({
            "Window": {
                "operations": [
                    {"name": "alert", "idl_type": {"base_type": "void"},
                     "arguments": [{"idl_type": "DOMString"}]}
                ]
            }
        })))
        .unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::MissingField);
        assert_eq!(err.entity_id(), Some("Window"));
    }

    #[test]
    fn test_malformed_interface() {
        let err = parse_document_bytes(&bytes(&json!({
            "Window": {"attributes": "nope"}
        })))
        .unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidDocument);
        assert_eq!(err.entity_id(), Some("Window"));
    }

    #[test]
    fn test_load_missing_file_is_io() {
        let err = load_document(Path::new("/definitely/not/here.json")).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Io);
        assert_eq!(err.op(), Some("load_document"));
    }
}
