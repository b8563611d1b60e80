//! Error types for mdview library.

use thiserror::Error;

/// Result type alias for mdview operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while preparing or rendering a document tree.
#[derive(Error, Debug)]
pub enum Error {
    /// The node-type identifier has no renderer in the dispatch table.
    #[error("Unsupported node type: {0}")]
    UnsupportedNodeType(String),

    /// Malformed document or style JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Embedded markup could not be parsed or rewritten.
    #[error("Embed error: {0}")]
    Embed(String),

    /// Error while exporting a rendered tree.
    #[error("Rendering error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnsupportedNodeType("spoiler".to_string());
        assert_eq!(err.to_string(), "Unsupported node type: spoiler");

        let err = Error::Embed("unclosed tag".to_string());
        assert_eq!(err.to_string(), "Embed error: unclosed tag");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
