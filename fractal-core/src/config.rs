use std::f32::consts::{FRAC_PI_4, FRAC_PI_8, PI};

use crate::{
    error::ConfigError,
    types::{MAX_DEPTH, MIN_DEPTH},
};

/// Fixed constants of the branching algorithm.
///
/// These rarely change at runtime; the defaults reproduce the classic
/// fractal tree look.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Multiplier applied to a parent's direction vector to get a child's.
    pub shrink_factor: f32,
    /// Trunk length as a fraction of the canvas height.
    pub trunk_ratio: f32,
    /// Scaled direction vectors shorter than this produce no children.
    pub min_branch_len: f32,
    /// Half-width of the uniform angular offset used when randomizing.
    pub random_spread: f32,
    /// Half-width of the per-axis endpoint displacement applied per frame.
    pub jitter_amplitude: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shrink_factor: 0.67,
            trunk_ratio: 0.3,
            min_branch_len: 1.0,
            random_spread: FRAC_PI_8,
            jitter_amplitude: 1.0,
        }
    }
}

impl Config {
    /// Checks that every field lies in a range the generator can work with.
    ///
    /// A shrink factor of 1 or more would never reach `min_branch_len` and
    /// only the depth limit would stop growth, so it is rejected too.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.shrink_factor > 0.0 && self.shrink_factor < 1.0) {
            return Err(ConfigError::ShrinkFactor(self.shrink_factor));
        }
        if !(self.trunk_ratio > 0.0 && self.trunk_ratio <= 1.0) {
            return Err(ConfigError::TrunkRatio(self.trunk_ratio));
        }
        if !(self.min_branch_len > 0.0 && self.min_branch_len.is_finite()) {
            return Err(ConfigError::MinBranchLen(self.min_branch_len));
        }
        if !(self.random_spread >= 0.0 && self.random_spread.is_finite()) {
            return Err(ConfigError::RandomSpread(self.random_spread));
        }
        if !(self.jitter_amplitude >= 0.0 && self.jitter_amplitude.is_finite()) {
            return Err(ConfigError::JitterAmplitude(self.jitter_amplitude));
        }
        Ok(())
    }
}

/// The user-facing controls: two sliders and two toggles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Params {
    /// Rotation between a parent and each child, in radians.
    pub angle: f32,
    /// Number of expansion rounds.
    pub depth: usize,
    /// Add a random angular offset to every new child.
    pub randomize: bool,
    /// Drift segment endpoints a little on every frame.
    pub jitter: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            angle: FRAC_PI_4,
            depth: MAX_DEPTH,
            randomize: false,
            jitter: false,
        }
    }
}

impl Params {
    /// Returns a copy with `angle` in `[0, π]` and `depth` in
    /// `[MIN_DEPTH, MAX_DEPTH]`. A NaN angle becomes `0`.
    pub fn clamped(self) -> Self {
        let angle = if self.angle.is_nan() {
            0.0
        } else {
            self.angle.clamp(0.0, PI)
        };

        Self {
            angle,
            depth: self.depth.clamp(MIN_DEPTH, MAX_DEPTH),
            ..self
        }
    }
}
