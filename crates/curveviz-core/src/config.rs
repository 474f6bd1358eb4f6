//! Tunables for both subsystems.
//!
//! Defaults reproduce the stock look of the site. Hosts may override any
//! subset of fields by passing JSON to `from_json`; missing fields keep
//! their defaults.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::pose::{Pose, Viewport};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("`{field}` range is empty or inverted: [{min}, {max})")]
    InvalidRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
    #[error("`{field}` must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("ambient palette must contain at least one color")]
    EmptyPalette,
}

/// Half-open sampling range `[min, max)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        if self.min.is_finite() && self.max.is_finite() && self.min < self.max {
            Ok(())
        } else {
            Err(ConfigError::InvalidRange {
                field,
                min: self.min,
                max: self.max,
            })
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

/// Settings for the decorative background animation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AmbientConfig {
    pub curve_count: usize,
    /// Control points are offset from their endpoint by up to this much per axis.
    pub control_jitter: f64,
    pub stroke_width: Span,
    /// Progress added per frame.
    pub speed: Span,
    pub palette: Vec<Color>,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            curve_count: 15,
            control_jitter: 100.0,
            stroke_width: Span::new(1.0, 4.0),
            speed: Span::new(0.001, 0.006),
            palette: Color::palette(),
        }
    }
}

impl AmbientConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if !(self.control_jitter >= 0.0 && self.control_jitter.is_finite()) {
            return Err(ConfigError::NonPositive {
                field: "control_jitter",
                value: self.control_jitter,
            });
        }
        self.stroke_width.validate("stroke_width")?;
        self.speed.validate("speed")?;
        positive("speed.min", self.speed.min)
    }
}

/// Settings for the interactive pose demo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    /// Pointer hit radius around a pose, also the drag clamp margin.
    pub hit_radius: f64,
    pub grid_spacing: f64,
    pub grid_color: Color,
    pub path_color: Color,
    pub path_width: f64,
    pub vehicle_color: Color,
    pub start_color: Color,
    pub end_color: Color,
    /// Progress value at which the path counts as fully driven.
    pub max_progress: f64,
    pub sweep_step: f64,
    pub sweep_interval_ms: u32,
    /// Horizontal fractions of the start→end span where the two controls sit.
    pub control_fractions: (f64, f64),
    /// Vertical offset of the controls from their pose.
    pub control_lift: f64,
    /// Offsets of the reset layout from the viewport center.
    pub reset_offset: (f64, f64),
    /// Start and end headings of the reset layout, in degrees.
    pub reset_headings: (f64, f64),
    pub initial_start: Pose,
    pub initial_end: Pose,
    pub initial_viewport: Viewport,
    pub max_canvas_height: f64,
    /// Canvas height as a fraction of its width, before the height cap.
    pub aspect: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            hit_radius: 30.0,
            grid_spacing: 20.0,
            grid_color: Color::GRID,
            path_color: Color::BLUE,
            path_width: 3.0,
            vehicle_color: Color::BLUE.with_alpha(0.8),
            start_color: Color::GREEN.with_alpha(0.8),
            end_color: Color::RED.with_alpha(0.8),
            max_progress: 100.0,
            sweep_step: 1.0,
            sweep_interval_ms: 30,
            control_fractions: (0.3, 0.7),
            control_lift: 50.0,
            reset_offset: (100.0, 50.0),
            reset_headings: (0.0, 90.0),
            initial_start: Pose::new(100.0, 200.0, 0.0),
            initial_end: Pose::new(300.0, 150.0, 90.0),
            initial_viewport: Viewport::new(500.0, 300.0),
            max_canvas_height: 300.0,
            aspect: 0.6,
        }
    }
}

impl DemoConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("hit_radius", self.hit_radius)?;
        positive("grid_spacing", self.grid_spacing)?;
        positive("max_progress", self.max_progress)?;
        positive("sweep_step", self.sweep_step)?;
        positive("sweep_interval_ms", f64::from(self.sweep_interval_ms))?;
        positive("max_canvas_height", self.max_canvas_height)?;
        positive("aspect", self.aspect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        AmbientConfig::default().validate().unwrap();
        DemoConfig::default().validate().unwrap();
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AmbientConfig::from_json(r#"{ "curve_count": 4 }"#).unwrap();
        assert_eq!(config.curve_count, 4);
        assert_eq!(config.speed, Span::new(0.001, 0.006));
        assert_eq!(config.palette.len(), 5);

        let demo = DemoConfig::from_json(r#"{ "grid_spacing": 40.0 }"#).unwrap();
        assert!((demo.grid_spacing - 40.0).abs() < f64::EPSILON);
        assert!((demo.hit_radius - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_invalid() {
        assert!(matches!(
            AmbientConfig::from_json(r#"{ "palette": [] }"#),
            Err(ConfigError::EmptyPalette)
        ));
        assert!(matches!(
            AmbientConfig::from_json(r#"{ "speed": { "min": 0.01, "max": 0.001 } }"#),
            Err(ConfigError::InvalidRange { field: "speed", .. })
        ));
        assert!(matches!(
            DemoConfig::from_json(r#"{ "hit_radius": 0 }"#),
            Err(ConfigError::NonPositive { field: "hit_radius", .. })
        ));
        assert!(matches!(
            DemoConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
