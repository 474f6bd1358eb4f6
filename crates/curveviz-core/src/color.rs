//! Colors and stroke styles used by the scene renderers.

use serde::{Deserialize, Serialize};

/// RGBA color with a fractional alpha, as canvas styles expect.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: f64) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    pub const BLUE: Color = Color::rgb(59, 130, 246);
    pub const GREEN: Color = Color::rgb(16, 185, 129);
    pub const RED: Color = Color::rgb(239, 68, 68);
    pub const PURPLE: Color = Color::rgb(217, 70, 239);
    pub const AMBER: Color = Color::rgb(245, 158, 11);
    pub const GRID: Color = Color::rgb(229, 231, 235);
    pub const WHEEL: Color = Color::rgba(31, 41, 55, 0.8);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(255, 255, 255, 0.0);

    /// The five colors ambient curves are drawn from.
    pub fn palette() -> Vec<Color> {
        vec![
            Self::BLUE.with_alpha(0.5),
            Self::GREEN.with_alpha(0.5),
            Self::RED.with_alpha(0.5),
            Self::PURPLE.with_alpha(0.5),
            Self::AMBER.with_alpha(0.5),
        ]
    }

    /// CSS `rgba(...)` notation.
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Stroke style for lines and curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}
