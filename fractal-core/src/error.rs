//! Errors reported when a [`crate::config::Config`] is rejected.

/// Reasons a [`crate::config::Config`] can fail validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("shrink factor must lie in (0, 1), got {0}")]
    ShrinkFactor(f32),
    #[error("trunk ratio must lie in (0, 1], got {0}")]
    TrunkRatio(f32),
    #[error("minimum branch length must be positive, got {0}")]
    MinBranchLen(f32),
    #[error("random spread must be finite and non-negative, got {0}")]
    RandomSpread(f32),
    #[error("jitter amplitude must be finite and non-negative, got {0}")]
    JitterAmplitude(f32),
}
