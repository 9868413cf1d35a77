/// Errors raised while building a player motion controller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MotionConfigError {
    #[error("{field} must be strictly positive, got {value}")]
    NonPositiveTime { field: &'static str, value: f32 },

    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },
}
