use std::fmt;

/// Options for [`Pinch`](super::Pinch).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct PinchConfig {
    /// Minimum movement in pixels before firing. Accepted and validated, but not
    /// consulted by the recognizer yet.
    pub threshold: f32,
    /// Minimum number of active inputs for a pinch to be recognized.
    pub min_inputs: usize,
}

impl PinchConfig {
    pub const DEFAULT_THRESHOLD: f32 = 1.0;
    pub const DEFAULT_MIN_INPUTS: usize = 2;

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_min_inputs(self.min_inputs)?;
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(ConfigError::Threshold(self.threshold));
        }
        Ok(())
    }
}

impl Default for PinchConfig {
    fn default() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
            min_inputs: Self::DEFAULT_MIN_INPUTS,
        }
    }
}

/// Options for [`Rotate`](super::Rotate).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct RotateConfig {
    /// Minimum number of active inputs for a rotate to be recognized.
    pub min_inputs: usize,
    /// Hold each emit for one step and fold single-step sign reversals into it.
    pub smoothing: bool,
}

impl RotateConfig {
    pub const DEFAULT_MIN_INPUTS: usize = 2;

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_min_inputs(self.min_inputs)
    }
}

impl Default for RotateConfig {
    fn default() -> Self {
        Self {
            min_inputs: Self::DEFAULT_MIN_INPUTS,
            smoothing: true,
        }
    }
}

fn check_min_inputs(n: usize) -> Result<(), ConfigError> {
    if n == 0 {
        return Err(ConfigError::MinInputs(n));
    }
    Ok(())
}

/// A recognizer option outside its valid range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// `min_inputs` must be at least 1.
    MinInputs(usize),
    /// `threshold` must be finite and non-negative.
    Threshold(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MinInputs(n) => write!(f, "minInputs must be at least 1 (got {n})"),
            ConfigError::Threshold(t) => {
                write!(f, "threshold must be a finite, non-negative number (got {t})")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
