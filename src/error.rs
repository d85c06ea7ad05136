//! Error types for the converter.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the converter library.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Document contains no graph element.
    #[error("No <graph> element found in {}", .path.display())]
    MissingGraph { path: PathBuf },

    /// Node or edge id does not follow the GraphML id scheme.
    #[error("Invalid {kind} id '{id}': expected '{prefix}' followed by digits (e.g., {prefix}12)")]
    InvalidId {
        kind: &'static str,
        id: String,
        prefix: char,
    },

    /// Missing required XML attribute.
    #[error("Missing required attribute '{attribute}' on <{element}>")]
    MissingAttribute {
        element: String,
        attribute: &'static str,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
