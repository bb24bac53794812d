use thiserror::Error;

/// Result type alias using IdlDiffError
pub type Result<T> = std::result::Result<T, IdlDiffError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Lookup
    NotFound,

    // Document loading
    /// Document bytes are not valid UTF-8 JSON, or the JSON has the wrong shape
    InvalidDocument,
    /// A required record field (e.g. `name`) is absent
    MissingField,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::InvalidDocument => "ERR_INVALID_DOCUMENT",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and context for
/// debugging. Built with the `with_*` methods.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (an interface name or a document path)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for document loading and rendering
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IdlDiffError {
    /// Document bytes are not UTF-8
    #[error("Document is not valid UTF-8: {message}")]
    InvalidUtf8 { message: String },

    /// Document text is not JSON
    #[error("Document is not valid JSON: {message}")]
    InvalidJson { message: String },

    /// Document JSON root is not an object keyed by interface name
    #[error("Document root must be an object keyed by interface name")]
    DocumentNotObject,

    /// A record inside an interface lacks a required field
    #[error("Interface {interface} has a record without `{field}`")]
    MissingField { interface: String, field: String },

    /// An interface definition does not match the expected shape
    #[error("Interface {interface} is malformed: {message}")]
    MalformedInterface { interface: String, message: String },

    /// Reading a document from disk failed
    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    /// Serializing a diff for output failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<IdlDiffError> for ExError {
    fn from(err: IdlDiffError) -> Self {
        match err {
            IdlDiffError::InvalidUtf8 { .. }
            | IdlDiffError::InvalidJson { .. }
            | IdlDiffError::DocumentNotObject => {
                let message = err.to_string();
                ExError::new(ExErrorKind::InvalidDocument).with_message(message)
            }

            IdlDiffError::MissingField { ref interface, .. } => {
                let interface = interface.clone();
                let message = err.to_string();
                ExError::new(ExErrorKind::MissingField)
                    .with_entity_id(interface)
                    .with_message(message)
            }

            IdlDiffError::MalformedInterface { ref interface, .. } => {
                let interface = interface.clone();
                let message = err.to_string();
                ExError::new(ExErrorKind::InvalidDocument)
                    .with_entity_id(interface)
                    .with_message(message)
            }

            IdlDiffError::Io { ref path, .. } => {
                let path = path.clone();
                let message = err.to_string();
                ExError::new(ExErrorKind::Io)
                    .with_entity_id(path)
                    .with_message(message)
            }

            IdlDiffError::Serialization { .. } => {
                let message = err.to_string();
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for IdlDiffError {
    fn from(err: serde_json::Error) -> Self {
        IdlDiffError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
            (ExErrorKind::InvalidDocument, "ERR_INVALID_DOCUMENT"),
            (ExErrorKind::MissingField, "ERR_MISSING_FIELD"),
            (ExErrorKind::Io, "ERR_IO"),
            (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_display_includes_op_and_entity() {
        let err = ExError::new(ExErrorKind::NotFound)
            .with_op("get_diff")
            .with_entity_id("Node")
            .with_message("interface not in either source");
        let text = err.to_string();
        assert!(text.starts_with("[ERR_NOT_FOUND]"));
        assert!(text.contains("get_diff"));
        assert!(text.contains("Node"));
    }

    #[test]
    fn test_missing_field_maps_to_missing_field_kind() {
        let ex: ExError = IdlDiffError::MissingField {
            interface: "Window".to_string(),
            field: "name".to_string(),
        }
        .into();
        assert_eq!(ex.kind(), ExErrorKind::MissingField);
        assert_eq!(ex.entity_id(), Some("Window"));
        assert!(ex.message().contains("`name`"));
    }

    #[test]
    fn test_json_error_maps_to_serialization_kind() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let ex = ExError::from(IdlDiffError::from(json_err)).with_op("render_json");
        assert_eq!(ex.kind(), ExErrorKind::Serialization);
        assert_eq!(ex.code(), "ERR_SERIALIZATION");
        assert!(ex.to_string().starts_with("[ERR_SERIALIZATION] in operation 'render_json'"));
    }
}
