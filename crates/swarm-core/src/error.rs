//! Error types for Swarm

use thiserror::Error;

/// The main error type for Swarm operations
#[derive(Debug, Error)]
pub enum SwarmError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),
}

/// Result type alias for Swarm operations
pub type Result<T> = std::result::Result<T, SwarmError>;

impl From<toml::de::Error> for SwarmError {
    fn from(err: toml::de::Error) -> Self {
        SwarmError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for SwarmError {
    fn from(err: toml::ser::Error) -> Self {
        SwarmError::TomlSerError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_field() {
        let err = SwarmError::ValueOutOfRange {
            field: "boundary_restitution".into(),
            min: 0.0,
            max: 1.0,
            value: 1.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("boundary_restitution"));
        assert!(msg.contains("1.5"));
    }

    #[test]
    fn toml_error_converts() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("width = ");
        let err: SwarmError = parsed.unwrap_err().into();
        assert!(matches!(err, SwarmError::TomlParseError(_)));
    }
}
