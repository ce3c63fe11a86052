//! @acp:module "Errors"
//! @acp:summary "Library error type and result alias"
//! @acp:domain cli
//! @acp:layer model

use std::path::PathBuf;

use thiserror::Error;

use crate::problem::GenerationError;

/// Errors produced by the MathGen library
#[derive(Debug, Error)]
pub enum MathGenError {
    /// Range text did not have the `<min>-<max>` shape, or min > max
    #[error("Invalid range '{input}': {reason}")]
    InvalidRange { input: String, reason: String },

    /// Operation choice was not one of the known modes
    #[error("Invalid operation '{0}' (expected 1, 2 or 3)")]
    InvalidMode(String),

    /// Input ended before a required answer was read
    #[error("Missing input: {0}")]
    MissingInput(&'static str),

    /// Rejection sampling gave up
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// Font face file was not present in any searched directory
    #[error("Font '{face}' not found in the system fonts (searched {})", display_dirs(.searched))]
    FontNotFound { face: String, searched: Vec<PathBuf> },

    /// Font file exists but could not be parsed
    #[error("Font '{face}' could not be parsed: {reason}")]
    FontParse { face: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn display_dirs(dirs: &[PathBuf]) -> String {
    if dirs.is_empty() {
        return "no directories".to_string();
    }
    dirs.iter()
        .map(|d| d.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, MathGenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_not_found_lists_directories() {
        let err = MathGenError::FontNotFound {
            face: "cour.ttf".to_string(),
            searched: vec![PathBuf::from("/a"), PathBuf::from("/b")],
        };
        assert_eq!(
            err.to_string(),
            "Font 'cour.ttf' not found in the system fonts (searched /a, /b)"
        );
    }

    #[test]
    fn test_font_not_found_without_directories() {
        let err = MathGenError::FontNotFound {
            face: "cour.ttf".to_string(),
            searched: vec![],
        };
        assert!(err.to_string().ends_with("(searched no directories)"));
    }
}
