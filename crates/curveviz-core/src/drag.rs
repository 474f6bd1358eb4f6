//! Pointer drag state machine for the two demo poses.

use crate::geometry::Point;
use crate::pose::{PoseId, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(PoseId),
}

/// A pose moved by a drag, already clamped into the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragMove {
    pub target: PoseId,
    pub to: Point,
}

/// Tracks which pose, if any, is following the pointer.
///
/// Mouse and single-touch input share the same transitions. Touch handlers
/// report whether the browser's default gesture must be suppressed.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn dragging(&self) -> Option<PoseId> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging(id) => Some(id),
        }
    }

    /// Starts a drag when `at` lies strictly within `radius` of a pose. When
    /// both are in range the start pose wins. A press while already dragging
    /// is ignored. Returns the pose picked up, if any.
    pub fn pointer_down(
        &mut self,
        at: Point,
        start: Point,
        end: Point,
        radius: f64,
    ) -> Option<PoseId> {
        if self.state != DragState::Idle {
            return None;
        }
        let hit = if at.distance(start) < radius {
            PoseId::Start
        } else if at.distance(end) < radius {
            PoseId::End
        } else {
            return None;
        };
        tracing::debug!(pose = %hit, x = at.x, y = at.y, "drag started");
        self.state = DragState::Dragging(hit);
        Some(hit)
    }

    /// While dragging, returns the new position for the dragged pose,
    /// clamped to stay `margin` away from the viewport edges.
    pub fn pointer_move(&self, at: Point, viewport: Viewport, margin: f64) -> Option<DragMove> {
        self.dragging().map(|target| DragMove {
            target,
            to: viewport.clamp_point(at, margin),
        })
    }

    /// Ends any drag. Returns the pose that was released.
    pub fn pointer_up(&mut self) -> Option<PoseId> {
        let released = self.dragging();
        if let Some(id) = released {
            tracing::debug!(pose = %id, "drag ended");
        }
        self.state = DragState::Idle;
        released
    }

    /// Touch variant of [`pointer_down`](Self::pointer_down). Only a single
    /// touch can start a drag. The returned flag is `true` when the touch
    /// landed on a pose and default scrolling must be prevented.
    pub fn touch_start(
        &mut self,
        touches: usize,
        at: Point,
        start: Point,
        end: Point,
        radius: f64,
    ) -> bool {
        touches == 1 && self.pointer_down(at, start, end, radius).is_some()
    }

    /// Touch variant of [`pointer_move`](Self::pointer_move). Multi-touch
    /// moves are ignored, but default handling stays suppressed while a
    /// drag is active.
    pub fn touch_move(
        &self,
        touches: usize,
        at: Point,
        viewport: Viewport,
        margin: f64,
    ) -> (Option<DragMove>, bool) {
        let active = self.dragging().is_some();
        if touches != 1 {
            return (None, active);
        }
        (self.pointer_move(at, viewport, margin), active)
    }

    pub fn touch_end(&mut self) -> Option<PoseId> {
        self.pointer_up()
    }

    pub fn touch_cancel(&mut self) -> Option<PoseId> {
        self.pointer_up()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: Point = Point::new(100.0, 200.0);
    const END: Point = Point::new(300.0, 150.0);
    const VIEWPORT: Viewport = Viewport::new(500.0, 300.0);

    #[test]
    fn test_press_near_start_picks_start() {
        let mut drag = DragController::new();
        assert_eq!(drag.pointer_down(Point::new(110.0, 210.0), START, END, 30.0), Some(PoseId::Start));
        assert_eq!(drag.state(), DragState::Dragging(PoseId::Start));
    }

    #[test]
    fn test_hit_radius_is_exclusive() {
        let mut drag = DragController::new();
        assert_eq!(drag.pointer_down(Point::new(330.0, 150.0), START, END, 30.0), None);
        assert_eq!(drag.pointer_down(Point::new(329.5, 150.0), START, END, 30.0), Some(PoseId::End));
    }

    #[test]
    fn test_press_far_away_stays_idle() {
        let mut drag = DragController::new();
        assert_eq!(drag.pointer_down(Point::new(200.0, 20.0), START, END, 30.0), None);
        assert_eq!(drag.state(), DragState::Idle);
        assert!(drag.pointer_move(Point::new(1.0, 1.0), VIEWPORT, 30.0).is_none());
    }

    #[test]
    fn test_overlapping_poses_prefer_start() {
        let mut drag = DragController::new();
        let here = Point::new(200.0, 200.0);
        assert_eq!(drag.pointer_down(here, here, here, 30.0), Some(PoseId::Start));
    }

    #[test]
    fn test_second_press_ignored_while_dragging() {
        let mut drag = DragController::new();
        drag.pointer_down(START, START, END, 30.0);
        assert_eq!(drag.pointer_down(END, START, END, 30.0), None);
        assert_eq!(drag.dragging(), Some(PoseId::Start));
    }

    #[test]
    fn test_move_is_clamped_and_release_returns_idle() {
        let mut drag = DragController::new();
        drag.pointer_down(Point::new(150.0, 200.0), Point::new(150.0, 200.0), END, 30.0);

        let moved = drag.pointer_move(Point::new(200.0, 210.0), VIEWPORT, 30.0);
        assert_eq!(
            moved,
            Some(DragMove {
                target: PoseId::Start,
                to: Point::new(200.0, 210.0)
            })
        );

        let moved = drag.pointer_move(Point::new(-50.0, 900.0), VIEWPORT, 30.0);
        assert_eq!(moved.map(|m| m.to), Some(Point::new(30.0, 270.0)));

        assert_eq!(drag.pointer_up(), Some(PoseId::Start));
        assert_eq!(drag.state(), DragState::Idle);
        assert!(drag.pointer_move(Point::new(250.0, 250.0), VIEWPORT, 30.0).is_none());
        assert_eq!(drag.pointer_up(), None);
    }

    #[test]
    fn test_touch_single_finger_only() {
        let mut drag = DragController::new();
        assert!(!drag.touch_start(2, START, START, END, 30.0));
        assert_eq!(drag.state(), DragState::Idle);

        assert!(drag.touch_start(1, END, START, END, 30.0));
        let (moved, prevent) = drag.touch_move(2, Point::new(250.0, 100.0), VIEWPORT, 30.0);
        assert!(moved.is_none());
        assert!(prevent);

        let (moved, prevent) = drag.touch_move(1, Point::new(250.0, 100.0), VIEWPORT, 30.0);
        assert_eq!(moved.map(|m| m.target), Some(PoseId::End));
        assert!(prevent);

        assert_eq!(drag.touch_cancel(), Some(PoseId::End));
        let (_, prevent) = drag.touch_move(1, Point::new(250.0, 100.0), VIEWPORT, 30.0);
        assert!(!prevent);
    }
}
