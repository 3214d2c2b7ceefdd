//! Core error types for Petasos

pub mod matrix;

use thiserror::Error;
pub use matrix::MatrixFormatError;

/// Main error type for Petasos operations
#[derive(Error, Debug)]
pub enum PetasosError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Scoring matrix format error: {0}")]
    MatrixFormat(#[from] MatrixFormatError),

    #[error("Scoring matrix has no entry for residue '{symbol}'")]
    Lookup { symbol: char },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid sequence: {0}")]
    InvalidSequence(String),
}

/// Result type alias for Petasos operations
pub type PetasosResult<T> = Result<T, PetasosError>;

impl PetasosError {
    /// Errors raised by the caller's inputs rather than by the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PetasosError::Lookup { .. }
                | PetasosError::InvalidParameter(_)
                | PetasosError::InvalidSequence(_)
        )
    }
}

impl From<serde_json::Error> for PetasosError {
    fn from(err: serde_json::Error) -> Self {
        PetasosError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        let io_error = PetasosError::Io(io::Error::new(io::ErrorKind::NotFound, "file not found"));
        assert!(format!("{}", io_error).contains("IO error"));

        let config_error = PetasosError::Configuration("missing field".to_string());
        assert_eq!(format!("{}", config_error), "Configuration error: missing field");

        let lookup = PetasosError::Lookup { symbol: 'J' };
        assert_eq!(
            format!("{}", lookup),
            "Scoring matrix has no entry for residue 'J'"
        );

        let param = PetasosError::InvalidParameter("gap penalty must be non-negative".to_string());
        assert_eq!(
            format!("{}", param),
            "Invalid parameter: gap penalty must be non-negative"
        );
    }

    #[test]
    fn test_matrix_error_conversion() {
        let err: PetasosError = MatrixFormatError::DuplicateRowHeader('W').into();

        match err {
            PetasosError::MatrixFormat(MatrixFormatError::DuplicateRowHeader(c)) => {
                assert_eq!(c, 'W')
            }
            _ => panic!("Expected MatrixFormat error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let petasos_err: PetasosError = io_err.into();

        match petasos_err {
            PetasosError::Io(e) => {
                assert_eq!(e.kind(), io::ErrorKind::PermissionDenied);
            }
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let parse_result: Result<serde_json::Value, serde_json::Error> =
            serde_json::from_str("{invalid json}");
        let petasos_err: PetasosError = parse_result.unwrap_err().into();

        assert!(matches!(petasos_err, PetasosError::Serialization(_)));
    }

    #[test]
    fn test_input_error_classification() {
        assert!(PetasosError::Lookup { symbol: 'B' }.is_input_error());
        assert!(PetasosError::InvalidParameter("x".into()).is_input_error());
        assert!(!PetasosError::Configuration("x".into()).is_input_error());
        assert!(!PetasosError::MatrixFormat(MatrixFormatError::MissingHeader).is_input_error());
    }
}
