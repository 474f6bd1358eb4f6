//! Decorative background animation: endlessly chaining random curves.

use crate::color::{Color, Stroke};
use crate::config::AmbientConfig;
use crate::geometry::{CubicBezier, Point};
use crate::glyph::draw_ambient_marker;
use crate::pose::Viewport;
use crate::random::RandomSource;
use crate::surface::Surface;

/// One curve slot of the background animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AmbientCurve {
    pub start: Point,
    pub end: Point,
    pub control1: Point,
    pub control2: Point,
    pub color: Color,
    pub stroke_width: f64,
    pub speed: f64,
    /// Marker position along the curve, always in `[0, 1)`.
    pub progress: f64,
}

impl AmbientCurve {
    pub fn bezier(&self) -> CubicBezier {
        CubicBezier::new(self.start, self.control1, self.control2, self.end)
    }

    /// Advances the marker by one step. Returns `true` when the segment was
    /// completed and the caller must regenerate its geometry.
    fn step(&mut self) -> bool {
        self.progress += self.speed;
        if self.progress >= 1.0 {
            self.progress = 0.0;
            true
        } else {
            false
        }
    }
}

/// Owns the curve pool, its random source and its run state.
pub struct AmbientAnimator<R> {
    curves: Vec<AmbientCurve>,
    rng: R,
    viewport: Viewport,
    config: AmbientConfig,
    running: bool,
    wraps: u64,
}

impl<R: RandomSource> AmbientAnimator<R> {
    /// Creates `config.curve_count` desynchronized curves inside `viewport`.
    /// An empty palette falls back to [`Color::palette`].
    pub fn new(viewport: Viewport, mut config: AmbientConfig, mut rng: R) -> Self {
        if config.palette.is_empty() {
            tracing::warn!("ambient palette is empty, using the default palette");
            config.palette = Color::palette();
        }
        let curves = (0..config.curve_count)
            .map(|_| spawn_curve(&mut rng, viewport, &config))
            .collect();
        Self {
            curves,
            rng,
            viewport,
            config,
            running: false,
            wraps: 0,
        }
    }

    /// Begins advancing on `tick`.
    pub fn start(&mut self) {
        if !self.running {
            tracing::debug!(curves = self.curves.len(), "ambient animator started");
        }
        self.running = true;
    }

    /// Freezes the animation; `tick` becomes a no-op until `start`.
    pub fn stop(&mut self) {
        if self.running {
            tracing::debug!(wraps = self.wraps, "ambient animator stopped");
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn curves(&self) -> &[AmbientCurve] {
        &self.curves
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Total number of completed segments across all slots.
    pub fn wraps(&self) -> u64 {
        self.wraps
    }

    /// Updates the sampling bounds for future segments. Existing geometry
    /// is left as is, even if it now lies outside the viewport.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Advances every curve by its speed if running.
    pub fn tick(&mut self) {
        if self.running {
            self.update();
        }
    }

    /// Advances every curve by its speed, chaining a fresh segment onto any
    /// curve whose marker reached the end.
    pub fn update(&mut self) {
        for curve in &mut self.curves {
            if curve.step() {
                rechain(curve, &mut self.rng, self.viewport, &self.config);
                self.wraps += 1;
            }
        }
    }

    /// Clears the surface and draws every curve with its marker.
    pub fn render(&self, surface: &mut dyn Surface) {
        surface.clear();
        for curve in &self.curves {
            let bezier = curve.bezier();
            surface.stroke_cubic(&bezier, Stroke::new(curve.color, curve.stroke_width));
            let (at, heading) = bezier.sample(curve.progress);
            draw_ambient_marker(surface, at, heading, curve.color);
        }
    }

    /// One animation frame: advance, then draw.
    pub fn frame(&mut self, surface: &mut dyn Surface) {
        self.tick();
        self.render(surface);
    }
}

fn random_point<R: RandomSource>(rng: &mut R, viewport: Viewport) -> Point {
    Point::new(rng.uniform(0.0, viewport.width), rng.uniform(0.0, viewport.height))
}

fn jitter<R: RandomSource>(rng: &mut R, anchor: Point, amount: f64) -> Point {
    anchor.offset(rng.uniform(-amount, amount), rng.uniform(-amount, amount))
}

fn spawn_curve<R: RandomSource>(rng: &mut R, viewport: Viewport, config: &AmbientConfig) -> AmbientCurve {
    let start = random_point(rng, viewport);
    let end = random_point(rng, viewport);
    let control1 = jitter(rng, start, config.control_jitter);
    let control2 = jitter(rng, end, config.control_jitter);
    let color = config.palette[rng.index(config.palette.len())];
    let stroke_width = rng.uniform(config.stroke_width.min, config.stroke_width.max);
    let speed = rng.uniform(config.speed.min, config.speed.max);
    let progress = rng.next_unit();
    AmbientCurve {
        start,
        end,
        control1,
        control2,
        color,
        stroke_width,
        speed,
        progress,
    }
}

fn rechain<R: RandomSource>(
    curve: &mut AmbientCurve,
    rng: &mut R,
    viewport: Viewport,
    config: &AmbientConfig,
) {
    curve.start = curve.end;
    curve.end = random_point(rng, viewport);
    curve.control1 = jitter(rng, curve.start, config.control_jitter);
    curve.control2 = jitter(rng, curve.end, config.control_jitter);
    tracing::debug!(x = curve.end.x, y = curve.end.y, "ambient curve rechained");
}
