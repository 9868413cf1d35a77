/// Errors that can occur while configuring world systems.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WorldError {
    #[error("sun intensity table has {found} entries but a day has {expected} hours")]
    IntensityCountMismatch { expected: usize, found: usize },

    #[error("a day must have at least one hour")]
    NoHours,

    #[error("day cycle duration must be positive, got {0}")]
    NonPositiveCycle(f32),
}
