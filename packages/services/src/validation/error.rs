use super::report::KeySegment;

/// Raised when a validation report does not have the expected recursive
/// shape. This is a wiring bug between a contract and the normalizer, never
/// something to show an end user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error("validation report shape mismatch at `{path}`: found {found}")]
    ShapeMismatch { path: String, found: String },
}

impl NormalizeError {
    pub(crate) fn shape_mismatch(path: &[KeySegment], found: impl Into<String>) -> Self {
        NormalizeError::ShapeMismatch {
            path: render_path(path),
            found: found.into(),
        }
    }
}

/// Errors raised while projecting raw input through a schema description
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("schema description could not be introspected: {0}")]
    Introspection(String),
    #[error("projected input could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

fn render_path(path: &[KeySegment]) -> String {
    if path.is_empty() {
        return "<root>".to_string();
    }
    path.iter()
        .map(|segment| segment.to_string())
        .collect::<Vec<String>>()
        .join(".")
}
