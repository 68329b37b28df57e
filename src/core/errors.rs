use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaggerError {
    /// Taxonomy or configuration could not be loaded. Nothing useful can run without it.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A single card document could not be read, parsed or written.
    #[error("Document error in {}: {message}", .path.display())]
    Document { path: PathBuf, message: String },

    /// A keyword pattern failed to compile. Keywords are escaped, so this points at a bug.
    #[error("Match evaluation error: {0}")]
    MatchEvaluation(#[from] regex::Error),

    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TaggerError: {0}")]
    Custom(String),
}

impl TaggerError {
    pub fn document(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        TaggerError::Document { path: path.into(), message: message.to_string() }
    }
}

impl From<std::io::Error> for TaggerError {
    fn from(error: std::io::Error) -> Self {
        TaggerError::Io(Box::new(error))
    }
}

impl From<tempfile::PersistError> for TaggerError {
    fn from(error: tempfile::PersistError) -> Self {
        TaggerError::Io(Box::new(error.error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_error_names_the_file() {
        let err = TaggerError::document("decks/food.json", "expected `cards` to be an array");
        assert_eq!(
            err.to_string(),
            "Document error in decks/food.json: expected `cards` to be an array"
        );
    }
}
