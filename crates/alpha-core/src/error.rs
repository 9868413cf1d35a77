//! Error types for core configuration

use thiserror::Error;

/// Invalid clock settings
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimeConfigError {
    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must be finite and non-negative, got {value}")]
    Negative { field: &'static str, value: f32 },
}
