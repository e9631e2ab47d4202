//! Runtime configuration for pathkit-planning-core.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Arc-length spans closer than this are treated as a single point.
pub const DEFAULT_DEGENERATE_SPAN_TOLERANCE: f64 = 1.0e-4;
/// Allowed gap between the integrated and the sampled arc-length span.
pub const DEFAULT_ARC_SPAN_TOLERANCE: f64 = 1.0e-4;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level configuration, one section per concern.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningConfig {
    pub interpolation: InterpolationConfig,
    pub diagnostics: DiagnosticsConfig,
}

/// What the trajectory interpolator does when the arc length integrated from
/// the speed profile disagrees with the sampled path arc lengths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArcSpanCheck {
    /// Skip the comparison.
    Ignore,
    /// Log a warning and keep the integrated span.
    #[default]
    Warn,
    /// Fail the interpolation.
    Reject,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpolationConfig {
    pub degenerate_span_tolerance: f64,
    pub arc_span_tolerance: f64,
    pub arc_span_check: ArcSpanCheck,
}

impl Default for InterpolationConfig {
    fn default() -> Self {
        Self {
            degenerate_span_tolerance: DEFAULT_DEGENERATE_SPAN_TOLERANCE,
            arc_span_tolerance: DEFAULT_ARC_SPAN_TOLERANCE,
            arc_span_check: ArcSpanCheck::default(),
        }
    }
}

/// Feature flags and output location for context dumps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Also dump the prediction feed.
    pub enable_prediction: bool,
    /// Directory that snapshot feeds write into.
    pub dump_dir: PathBuf,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            enable_prediction: false,
            dump_dir: std::env::temp_dir().join("pathkit-dumps"),
        }
    }
}

impl PlanningConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Check that tolerances are finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let interp = &self.interpolation;
        for (name, value) in [
            ("degenerate_span_tolerance", interp.degenerate_span_tolerance),
            ("arc_span_tolerance", interp.arc_span_tolerance),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "interpolation.{name} must be finite and >= 0, got {value}"
                )));
            }
        }
        Ok(())
    }
}
