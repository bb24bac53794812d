//! Interface definition models.
//!
//! These mirror the JSON produced by the interface extractor: one object per
//! interface name, each with `attributes`, `constants` and `operations` lists.
//! Fields the diff never reads (extended attributes and the like) are ignored
//! on load.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A loaded document: interface name to definition.
pub type IdlDocument = BTreeMap<String, Interface>;

/// The declared string type; default values of this type render quoted.
pub const STRING_TYPE: &str = "DOMString";

/// A type reference.
///
/// Attribute and operation types are objects carrying `base_type`; argument
/// types may also appear as a bare type name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdlType {
    Typed { base_type: String },
    Named(String),
}

impl IdlType {
    pub fn new(base_type: impl Into<String>) -> Self {
        IdlType::Typed {
            base_type: base_type.into(),
        }
    }

    /// The type name, whichever shape it was declared in.
    pub fn base_type(&self) -> &str {
        match self {
            IdlType::Typed { base_type } => base_type,
            IdlType::Named(name) => name,
        }
    }
}

/// A typed, named property of an interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub idl_type: IdlType,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub is_read_only: bool,
}

impl Attribute {
    pub fn new(name: impl Into<String>, base_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            idl_type: IdlType::new(base_type),
            is_static: false,
            is_read_only: false,
        }
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn with_read_only(mut self, is_read_only: bool) -> Self {
        self.is_read_only = is_read_only;
        self
    }
}

/// A default value attached to an optional argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultValue {
    pub idl_type: String,
    pub value: Value,
}

impl DefaultValue {
    pub fn new(idl_type: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            idl_type: idl_type.into(),
            value: value.into(),
        }
    }

    /// The literal as written in a signature. Strings appear verbatim, other
    /// JSON scalars as their JSON text.
    pub fn literal(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// A parameter of an operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    pub name: String,
    pub idl_type: IdlType,
    #[serde(default)]
    pub is_optional: bool,
    #[serde(default)]
    pub is_variadic: bool,
    #[serde(default)]
    pub default_value: Option<DefaultValue>,
}

impl Argument {
    pub fn new(name: impl Into<String>, base_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            idl_type: IdlType::new(base_type),
            is_optional: false,
            is_variadic: false,
            default_value: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    pub fn variadic(mut self) -> Self {
        self.is_variadic = true;
        self
    }

    pub fn with_default(mut self, default_value: DefaultValue) -> Self {
        self.default_value = Some(default_value);
        self
    }
}

/// A named, optionally static method with an ordered argument list.
///
/// Argument order is part of the signature and is never re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    pub name: String,
    pub idl_type: IdlType,
    #[serde(default)]
    pub is_static: bool,
    #[serde(default)]
    pub arguments: Vec<Argument>,
}

impl Operation {
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            idl_type: IdlType::new(return_type),
            is_static: false,
            arguments: Vec::new(),
        }
    }

    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn with_argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }
}

/// A constant member. Loaded so documents round-trip, never diffed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constant {
    pub name: String,
    #[serde(default)]
    pub idl_type: Option<IdlType>,
    #[serde(default)]
    pub value: Option<Value>,
}

/// One interface definition.
///
/// An interface missing from a source is represented by
/// `Interface::default()`, never by an absent value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Interface {
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub constants: Vec<Constant>,
    #[serde(default)]
    pub operations: Vec<Operation>,
}

impl Interface {
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.constants.is_empty() && self.operations.is_empty()
    }
}
