use thiserror::Error;

#[derive(Error, Debug)]
pub enum DustyError {
    #[error("Domain error: {0}")]
    DomainError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type DustyResult<T> = Result<T, DustyError>;

/// Reject non-finite or non-positive inputs with a [`DustyError::DomainError`].
pub fn require_positive(label: &str, value: f64) -> DustyResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(DustyError::DomainError(format!(
            "{label} must be finite and > 0, got {value}"
        )));
    }
    Ok(value)
}

/// Reject non-finite or negative inputs with a [`DustyError::DomainError`].
pub fn require_non_negative(label: &str, value: f64) -> DustyResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(DustyError::DomainError(format!(
            "{label} must be finite and >= 0, got {value}"
        )));
    }
    Ok(value)
}

/// Reject non-finite or zero inputs with a [`DustyError::DomainError`].
pub fn require_nonzero(label: &str, value: f64) -> DustyResult<f64> {
    if !value.is_finite() || value == 0.0 {
        return Err(DustyError::DomainError(format!(
            "{label} must be finite and non-zero, got {value}"
        )));
    }
    Ok(value)
}
