//! The interactive start/end pose demo.
//!
//! `PoseDemo` owns both poses, the path progress, the drag controller and the
//! progress sweep. Input handlers translate DOM events into the calls below;
//! everything here runs without a canvas.

use crate::color::Stroke;
use crate::config::DemoConfig;
use crate::drag::DragController;
use crate::geometry::{CubicBezier, Point};
use crate::glyph::{VehicleStyle, draw_grid, draw_vehicle};
use crate::pose::{Pose, PoseId, PosePatch, Viewport};
use crate::surface::Surface;
use crate::sweep::{ProgressSweep, SweepTick};

pub struct PoseDemo {
    config: DemoConfig,
    start: Pose,
    end: Pose,
    progress: f64,
    viewport: Viewport,
    drag: DragController,
    sweep: ProgressSweep,
}

impl PoseDemo {
    pub fn new(config: DemoConfig) -> Self {
        let sweep = ProgressSweep::new(config.max_progress, config.sweep_step);
        Self {
            start: config.initial_start,
            end: config.initial_end,
            progress: config.max_progress,
            viewport: config.initial_viewport,
            drag: DragController::new(),
            sweep,
            config,
        }
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    pub fn start(&self) -> Pose {
        self.start
    }

    pub fn end(&self) -> Pose {
        self.end
    }

    pub fn pose(&self, id: PoseId) -> Pose {
        match id {
            PoseId::Start => self.start,
            PoseId::End => self.end,
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn dragging(&self) -> Option<PoseId> {
        self.drag.dragging()
    }

    pub fn is_animating(&self) -> bool {
        self.sweep.is_active()
    }

    /// Generation of the current sweep; see [`ProgressSweep::generation`].
    pub fn sweep_generation(&self) -> u64 {
        self.sweep.generation()
    }

    fn pose_mut(&mut self, id: PoseId) -> &mut Pose {
        match id {
            PoseId::Start => &mut self.start,
            PoseId::End => &mut self.end,
        }
    }

    fn clamp_pose(&mut self, id: PoseId) {
        let margin = self.config.hit_radius;
        let viewport = self.viewport;
        let pose = self.pose_mut(id);
        let clamped = viewport.clamp_point(pose.position(), margin);
        pose.x = clamped.x;
        pose.y = clamped.y;
    }

    /// Merges `patch` into the target pose. Positions are kept inside the
    /// viewport margin and `theta` inside the orientation range.
    pub fn set_pose(&mut self, id: PoseId, patch: PosePatch) {
        self.pose_mut(id).apply(patch);
        self.clamp_pose(id);
    }

    /// Sets how far along the path the moving vehicle is, clamped to
    /// `[0, max_progress]`.
    pub fn set_path_progress(&mut self, value: f64) {
        self.progress = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, self.config.max_progress)
        };
    }

    /// Restarts the sweep from 0, cancelling any sweep already running.
    /// Returns the generation a timer should present on each tick.
    pub fn animate(&mut self) -> u64 {
        let (generation, progress) = self.sweep.start();
        self.progress = progress;
        tracing::debug!(generation, "path animation started");
        generation
    }

    /// Advances the sweep one step from the current progress, so a value set
    /// with [`Self::set_path_progress`] mid-sweep is where it continues from.
    pub fn tick_sweep(&mut self) -> SweepTick {
        let tick = self.sweep.tick(self.progress);
        if let SweepTick::Continue(p) | SweepTick::Finished(p) = tick {
            self.progress = p;
        }
        tick
    }

    pub fn cancel_sweep(&mut self) {
        self.sweep.cancel();
    }

    /// Puts both poses back in the default layout around the viewport center
    /// and shows the full path without the moving vehicle.
    pub fn reset(&mut self) {
        self.sweep.cancel();
        let center = self.viewport.center();
        let (dx, dy) = self.config.reset_offset;
        let (start_heading, end_heading) = self.config.reset_headings;
        self.start = Pose::new(center.x - dx, center.y + dy, start_heading);
        self.end = Pose::new(center.x + dx, center.y - dy, end_heading);
        self.clamp_pose(PoseId::Start);
        self.clamp_pose(PoseId::End);
        self.progress = self.config.max_progress;
        tracing::info!(
            width = self.viewport.width,
            height = self.viewport.height,
            "pose demo reset"
        );
    }

    /// Adopts a new canvas size. Poses are clamped into it, not rescaled.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.clamp_pose(PoseId::Start);
        self.clamp_pose(PoseId::End);
    }

    /// Path from `start` to `end` with controls lifted off the straight line.
    pub fn interactive_curve(&self) -> CubicBezier {
        let (f1, f2) = self.config.control_fractions;
        let lift = self.config.control_lift;
        let dx = self.end.x - self.start.x;
        CubicBezier::new(
            self.start.position(),
            Point::new(self.start.x + dx * f1, self.start.y - lift),
            Point::new(self.start.x + dx * f2, self.end.y + lift),
            self.end.position(),
        )
    }

    pub fn pointer_down(&mut self, at: Point) -> Option<PoseId> {
        self.drag.pointer_down(
            at,
            self.start.position(),
            self.end.position(),
            self.config.hit_radius,
        )
    }

    /// Moves the dragged pose, if any. Returns `true` when a pose moved.
    pub fn pointer_move(&mut self, at: Point) -> bool {
        match self
            .drag
            .pointer_move(at, self.viewport, self.config.hit_radius)
        {
            Some(step) => {
                self.set_pose(step.target, PosePatch::position(step.to));
                true
            }
            None => false,
        }
    }

    pub fn pointer_up(&mut self) -> Option<PoseId> {
        self.drag.pointer_up()
    }

    /// Returns whether the browser's default touch handling must be
    /// prevented.
    pub fn touch_start(&mut self, touches: usize, at: Point) -> bool {
        self.drag.touch_start(
            touches,
            at,
            self.start.position(),
            self.end.position(),
            self.config.hit_radius,
        )
    }

    /// Returns whether the browser's default touch handling must be
    /// prevented.
    pub fn touch_move(&mut self, touches: usize, at: Point) -> bool {
        let (step, prevent) =
            self.drag
                .touch_move(touches, at, self.viewport, self.config.hit_radius);
        if let Some(step) = step {
            self.set_pose(step.target, PosePatch::position(step.to));
        }
        prevent
    }

    pub fn touch_end(&mut self) -> Option<PoseId> {
        self.drag.touch_end()
    }

    pub fn touch_cancel(&mut self) -> Option<PoseId> {
        self.drag.touch_cancel()
    }

    /// Draws grid, path, the moving vehicle while the path is not fully
    /// driven, then both pose glyphs on top.
    pub fn render(&self, surface: &mut dyn Surface) {
        let config = &self.config;
        surface.clear();
        draw_grid(
            surface,
            config.grid_spacing,
            Stroke::new(config.grid_color, 1.0),
        );

        let curve = self.interactive_curve();
        surface.stroke_cubic(&curve, Stroke::new(config.path_color, config.path_width));

        if self.progress < config.max_progress {
            let (at, heading) = curve.sample(self.progress / config.max_progress);
            draw_vehicle(
                surface,
                at,
                heading,
                config.vehicle_color,
                &VehicleStyle::MARKER,
            );
        }

        for (pose, color) in [
            (self.start, config.start_color),
            (self.end, config.end_color),
        ] {
            draw_vehicle(
                surface,
                pose.position(),
                pose.heading(),
                color,
                &VehicleStyle::POSE,
            );
        }
    }
}

impl Default for PoseDemo {
    fn default() -> Self {
        Self::new(DemoConfig::default())
    }
}
