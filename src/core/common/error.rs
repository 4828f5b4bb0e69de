use std::fmt;

use crate::core::indexing::vector::kdtree::KdTreeError;

#[derive(Debug)]
pub enum TesseraError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Configuration(String),
    Index(KdTreeError),
    InvalidInput { message: String },
}

impl fmt::Display for TesseraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO Error: {}", e),
            Self::Json(e) => write!(f, "JSON Serialization/Deserialization Error: {}", e),
            Self::Configuration(s) => write!(f, "Configuration error: {}", s),
            Self::Index(e) => write!(f, "Index Error: {}", e),
            Self::InvalidInput { message } => write!(f, "Invalid input: {}", message),
        }
    }
}

impl std::error::Error for TesseraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Index(e) => Some(e),
            _ => None,
        }
    }
}

// Manual From implementations
impl From<std::io::Error> for TesseraError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for TesseraError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<KdTreeError> for TesseraError {
    fn from(err: KdTreeError) -> Self {
        Self::Index(err)
    }
}

impl TesseraError {
    /// Shorthand for an `InvalidInput` error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput { message: message.into() }
    }

    /// True when the error is the "no result" condition of querying an empty index.
    #[must_use]
    pub const fn is_empty_index(&self) -> bool {
        matches!(self, Self::Index(KdTreeError::EmptyTree(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_kdtree_error_converts_and_keeps_source() {
        let err: TesseraError = KdTreeError::EmptyTree("nothing here".to_string()).into();
        assert!(err.is_empty_index());
        assert_eq!(err.to_string(), "Index Error: KD-Tree Empty: nothing here");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_invalid_input_display() {
        let err = TesseraError::invalid_input("bad coordinate 'x'");
        assert!(!err.is_empty_index());
        assert_eq!(err.to_string(), "Invalid input: bad coordinate 'x'");
        assert!(err.source().is_none());
    }
}
