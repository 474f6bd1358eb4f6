//! Curveviz Core Library
//!
//! Cubic bezier geometry, pose and drag state machines, and scene rendering
//! for the two canvas widgets of the site:
//! - Ambient mode: a field of random curves with markers gliding along them
//! - Pose demo: two draggable vehicles joined by a path a third one drives
//!
//! Nothing here touches the DOM. Scenes draw onto a [`Surface`] and draw
//! randomness from a [`RandomSource`], both supplied by the host.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod ambient;
pub mod color;
pub mod config;
pub mod demo;
pub mod drag;
pub mod geometry;
pub mod glyph;
pub mod pose;
pub mod random;
pub mod surface;
pub mod sweep;

#[cfg(test)]
mod test_utils;

pub use ambient::{AmbientAnimator, AmbientCurve};
pub use color::{Color, Stroke};
pub use config::{AmbientConfig, ConfigError, DemoConfig, Span};
pub use demo::PoseDemo;
pub use drag::{DragController, DragMove, DragState};
pub use geometry::{CubicBezier, Point, clamp_with_margin, evaluate_cubic_bezier, tangent_angle};
pub use pose::{Pose, PoseId, PosePatch, Viewport};
pub use random::{RandomSource, seeded};
pub use surface::{Rect, Surface};
pub use sweep::{ProgressSweep, SweepTick};
