//! Application settings loaded from TOML
//!
//! Every field has a default, so an empty file (or no file at all) yields a
//! working configuration. Values are checked by [`Settings::validate`] after
//! loading.

use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::Deserialize;

use super::styles::{map_style, MapStyle};
use crate::animation::{AnimationConfig, CameraSettings, DEFAULT_DURATION_MS, DEFAULT_FOLLOW_THRESHOLD};
use crate::curve::{Curvature, CurveKind, PathCurveBuilder, DEFAULT_SAMPLE_COUNT};
use crate::errors::{AnimError, AnimResult};
use crate::route::DistanceUnit;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "travelanim.toml";

/// Accepted range for the exported marker model scale
pub const MODEL_SIZE_RANGE: (f64, f64) = (0.1, 2.0);

/// `[curve]` section
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CurveSettings {
    pub sample_count: usize,
    pub kind: CurveKind,
    pub curvature: Curvature,
    pub dedupe_joints: bool,
}

impl Default for CurveSettings {
    fn default() -> Self {
        CurveSettings {
            sample_count: DEFAULT_SAMPLE_COUNT,
            kind: CurveKind::default(),
            curvature: Curvature::default(),
            dedupe_joints: true,
        }
    }
}

/// `[animation]` section
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub duration_ms: f64,
    pub follow_threshold: f64,
    pub max_fps: Option<f64>,
    /// Constant marker speed in degrees per second; derives the duration from the route length
    pub velocity: Option<f64>,
    /// Clock step used when playback is simulated
    pub frame_step_ms: f64,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        AnimationSettings {
            duration_ms: DEFAULT_DURATION_MS,
            follow_threshold: DEFAULT_FOLLOW_THRESHOLD,
            max_fps: None,
            velocity: None,
            frame_step_ms: 1000.0 / 60.0,
        }
    }
}

/// `[export]` section: video export options
///
/// `duration_secs` is the clip length; the animate command uses it in place of
/// `[animation].duration_ms` when asked for an export-length run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Scale of the travelling model
    pub model_size: f64,
    /// Length of the exported clip in seconds
    pub duration_secs: f64,
    /// Unit of the distance label
    pub units: DistanceUnit,
    /// Short name of the map style
    pub map_style: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        ExportSettings {
            model_size: 0.8,
            duration_secs: 20.0,
            units: DistanceUnit::Kilometers,
            map_style: "streets-v12".to_string(),
        }
    }
}

/// Complete settings
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub curve: CurveSettings,
    pub animation: AnimationSettings,
    pub camera: CameraSettings,
    pub export: ExportSettings,
}

impl Settings {
    /// Parse and validate settings from a TOML string
    pub fn from_str(content: &str) -> AnimResult<Self> {
        let settings: Settings = toml::from_str(content)
            .map_err(|e| AnimError::ConfigError(format!("Failed to parse settings: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> AnimResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_str(&content)
    }

    /// Load settings from an explicit path, then `travelanim.toml`, then defaults
    ///
    /// # Arguments
    /// * `provided` - Path given on the command line; a missing file here is an error
    pub fn load(provided: Option<&str>) -> AnimResult<Self> {
        if let Some(path) = provided {
            info!("Loading settings from {}", path);
            return Self::from_file(path);
        }

        if Path::new(DEFAULT_CONFIG_FILE).is_file() {
            info!("Loading settings from {}", DEFAULT_CONFIG_FILE);
            return Self::from_file(DEFAULT_CONFIG_FILE);
        }

        debug!("No settings file found, using defaults");
        Ok(Settings::default())
    }

    /// Check value ranges
    pub fn validate(&self) -> AnimResult<()> {
        if self.curve.sample_count < 2 {
            return Err(AnimError::ConfigError(format!(
                "curve.sample_count must be at least 2, got {}", self.curve.sample_count
            )));
        }
        if !(self.animation.duration_ms.is_finite() && self.animation.duration_ms > 0.0) {
            return Err(AnimError::ConfigError(format!(
                "animation.duration_ms must be positive, got {}", self.animation.duration_ms
            )));
        }
        if !(0.0..=1.0).contains(&self.animation.follow_threshold) {
            return Err(AnimError::ConfigError(format!(
                "animation.follow_threshold must be within [0, 1], got {}", self.animation.follow_threshold
            )));
        }
        if let Some(fps) = self.animation.max_fps {
            if !(fps.is_finite() && fps > 0.0) {
                return Err(AnimError::ConfigError(format!("animation.max_fps must be positive, got {}", fps)));
            }
        }
        if let Some(velocity) = self.animation.velocity {
            if !(velocity.is_finite() && velocity > 0.0) {
                return Err(AnimError::ConfigError(format!("animation.velocity must be positive, got {}", velocity)));
            }
        }
        if !(self.animation.frame_step_ms.is_finite() && self.animation.frame_step_ms > 0.0) {
            return Err(AnimError::ConfigError(format!(
                "animation.frame_step_ms must be positive, got {}", self.animation.frame_step_ms
            )));
        }
        let (min_size, max_size) = MODEL_SIZE_RANGE;
        if !(min_size..=max_size).contains(&self.export.model_size) {
            return Err(AnimError::ConfigError(format!(
                "export.model_size must be within [{}, {}], got {}", min_size, max_size, self.export.model_size
            )));
        }
        if !(self.export.duration_secs.is_finite() && self.export.duration_secs > 0.0) {
            return Err(AnimError::ConfigError(format!(
                "export.duration_secs must be positive, got {}", self.export.duration_secs
            )));
        }
        map_style(&self.export.map_style)?;
        Ok(())
    }

    /// Curve builder described by the `[curve]` section
    pub fn curve_builder(&self) -> PathCurveBuilder {
        PathCurveBuilder::new(self.curve.kind, self.curve.curvature)
    }

    /// Start configuration for the animator
    pub fn animation_config(&self) -> AnimationConfig {
        AnimationConfig {
            duration_ms: self.animation.duration_ms,
            sample_count_per_segment: self.curve.sample_count,
            follow_threshold: self.animation.follow_threshold,
            max_fps: self.animation.max_fps,
            dedupe_joints: self.curve.dedupe_joints,
        }
    }

    /// Start configuration using the export clip length as duration
    pub fn export_animation_config(&self) -> AnimationConfig {
        AnimationConfig {
            duration_ms: self.export.duration_secs * 1000.0,
            ..self.animation_config()
        }
    }

    /// Resolved map style of the `[export]` section
    pub fn map_style(&self) -> AnimResult<&'static MapStyle> {
        map_style(&self.export.map_style)
    }
}
