//! Constrained Drag Physics
//!
//! Pointer-driven offset with elastic resistance past the constraint box,
//! momentum on release and a bounce spring that brings the element back
//! inside the box. The offset lives here, not in application state.

use serde::{Deserialize, Serialize};

use crate::spring::{Spring, SpringConfig};

/// Pointer samples older than this at release carry no momentum
const VELOCITY_WINDOW_MS: f64 = 100.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Allowed offset box relative to the element's origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraints {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for Constraints {
    fn default() -> Self {
        Self { left: -150.0, right: 150.0, top: -80.0, bottom: 80.0 }
    }
}

impl Constraints {
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    pub fn clamp(&self, p: Point) -> Point {
        Point::new(clamp_axis(p.x, self.left, self.right), clamp_axis(p.y, self.top, self.bottom))
    }

    /// Past an edge, only `elastic` of the overshoot is applied
    pub fn elastic(&self, p: Point, elastic: f64) -> Point {
        Point::new(
            elastic_axis(p.x, self.left, self.right, elastic),
            elastic_axis(p.y, self.top, self.bottom, elastic),
        )
    }

    /// Inverse of [`Constraints::elastic`]: the raw offset that displays as `p`
    pub fn unelastic(&self, p: Point, elastic: f64) -> Point {
        Point::new(
            unelastic_axis(p.x, self.left, self.right, elastic),
            unelastic_axis(p.y, self.top, self.bottom, elastic),
        )
    }
}

fn clamp_axis(v: f64, min: f64, max: f64) -> f64 {
    if min > max { (min + max) / 2.0 } else { v.clamp(min, max) }
}

fn elastic_axis(v: f64, min: f64, max: f64, elastic: f64) -> f64 {
    let elastic = elastic.clamp(0.0, 1.0);
    if v < min {
        min + (v - min) * elastic
    } else if v > max {
        max + (v - max) * elastic
    } else {
        v
    }
}

fn unelastic_axis(v: f64, min: f64, max: f64, elastic: f64) -> f64 {
    let elastic = elastic.clamp(0.0, 1.0);
    if elastic == 0.0 {
        return clamp_axis(v, min, max);
    }
    if v < min {
        min + (v - min) / elastic
    } else if v > max {
        max + (v - max) / elastic
    } else {
        v
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DragConfig {
    pub constraints: Constraints,
    pub elastic: f64,
    /// Release velocity (px/s) times this is added to the resting target
    pub momentum_power: f64,
    pub bounce_spring: SpringConfig,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            constraints: Constraints::default(),
            elastic: 0.2,
            momentum_power: 0.8,
            bounce_spring: SpringConfig::new(500.0, 10.0, 0.5, 10.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Sample {
    at_ms: f64,
    pointer: Point,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Dragging { pointer_start: Point, offset_start: Point },
    Settling,
}

/// Drag state for one element
#[derive(Debug, Clone)]
pub struct DragController {
    config: DragConfig,
    phase: Phase,
    x: Spring,
    y: Spring,
    last: Option<Sample>,
    previous: Option<Sample>,
}

impl DragController {
    pub fn new(config: DragConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
            x: Spring::new(config.bounce_spring, 0.0),
            y: Spring::new(config.bounce_spring, 0.0),
            last: None,
            previous: None,
        }
    }

    pub fn offset(&self) -> Point {
        Point::new(self.x.value(), self.y.value())
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    pub fn is_settling(&self) -> bool {
        self.phase == Phase::Settling
    }

    /// Grab the element. A grab during settling takes over from the
    /// current position.
    pub fn press(&mut self, pointer: Point, at_ms: f64) {
        let offset = self.offset();
        self.x.jump_to(offset.x);
        self.y.jump_to(offset.y);
        let offset_start = self.config.constraints.unelastic(offset, self.config.elastic);
        self.phase = Phase::Dragging { pointer_start: pointer, offset_start };
        self.previous = None;
        self.last = Some(Sample { at_ms, pointer });
    }

    /// Follow the pointer; returns the displayed offset
    pub fn drag_to(&mut self, pointer: Point, at_ms: f64) -> Point {
        let Phase::Dragging { pointer_start, offset_start } = self.phase else {
            return self.offset();
        };
        let raw = Point::new(
            offset_start.x + pointer.x - pointer_start.x,
            offset_start.y + pointer.y - pointer_start.y,
        );
        let shown = self.config.constraints.elastic(raw, self.config.elastic);
        self.x.jump_to(shown.x);
        self.y.jump_to(shown.y);
        self.previous = self.last;
        self.last = Some(Sample { at_ms, pointer });
        shown
    }

    /// Pointer velocity in px/s from the last two samples
    pub fn velocity(&self, now_ms: f64) -> Point {
        match (self.previous, self.last) {
            (Some(prev), Some(last)) if now_ms - last.at_ms <= VELOCITY_WINDOW_MS => {
                let dt = (last.at_ms - prev.at_ms) / 1000.0;
                if dt > 0.0 {
                    Point::new((last.pointer.x - prev.pointer.x) / dt, (last.pointer.y - prev.pointer.y) / dt)
                } else {
                    Point::ORIGIN
                }
            }
            _ => Point::ORIGIN,
        }
    }

    /// Let go. Returns the resting target the element settles toward.
    pub fn release(&mut self, now_ms: f64) -> Point {
        if !self.is_dragging() {
            return Point::new(self.x.target(), self.y.target());
        }
        let velocity = self.velocity(now_ms);
        let offset = self.offset();
        let power = self.config.momentum_power;
        let projected = Point::new(offset.x + velocity.x * power, offset.y + velocity.y * power);
        let target = self.config.constraints.clamp(projected);
        self.x.launch(target.x, velocity.x);
        self.y.launch(target.y, velocity.y);
        self.phase = Phase::Settling;
        self.last = None;
        self.previous = None;
        target
    }

    /// Advance the settle animation; returns true while still moving
    pub fn step(&mut self, dt: f64) -> bool {
        if self.phase != Phase::Settling {
            return false;
        }
        let moving_x = self.x.step(dt);
        let moving_y = self.y.step(dt);
        if !moving_x && !moving_y {
            self.phase = Phase::Idle;
        }
        moving_x || moving_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(drag: &mut DragController) {
        let mut frames = 0;
        while drag.step(1.0 / 60.0) {
            frames += 1;
            assert!(frames < 60 * 20, "drag did not settle");
        }
    }

    #[test]
    fn test_elastic_applies_only_overshoot() {
        let c = Constraints::default();
        assert_eq!(c.elastic(Point::new(100.0, -50.0), 0.2), Point::new(100.0, -50.0));
        let p = c.elastic(Point::new(500.0, 500.0), 0.2);
        assert!((p.x - 220.0).abs() < 1e-9);
        assert!((p.y - 164.0).abs() < 1e-9);
        let p = c.elastic(Point::new(-250.0, -180.0), 0.2);
        assert!((p.x + 170.0).abs() < 1e-9);
        assert!((p.y + 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_drag_far_out_settles_inside_constraints() {
        let mut drag = DragController::new(DragConfig::default());
        drag.press(Point::ORIGIN, 0.0);
        drag.drag_to(Point::new(250.0, 250.0), 16.0);
        let shown = drag.drag_to(Point::new(500.0, 500.0), 32.0);
        assert!(!drag.config.constraints.contains(shown));

        let target = drag.release(40.0);
        assert_eq!(target, Point::new(150.0, 80.0));
        assert!(drag.is_settling());
        settle(&mut drag);

        let rest = drag.offset();
        assert!(rest.x.abs() <= 150.0 && rest.y.abs() <= 80.0);
        assert!(!drag.is_settling());
    }

    #[test]
    fn test_release_inside_bounds_without_motion_stays_put() {
        let mut drag = DragController::new(DragConfig::default());
        drag.press(Point::ORIGIN, 0.0);
        drag.drag_to(Point::new(40.0, -20.0), 16.0);
        // pointer held still for a while before release
        let target = drag.release(500.0);
        assert_eq!(target, Point::new(40.0, -20.0));
        settle(&mut drag);
        assert_eq!(drag.offset(), Point::new(40.0, -20.0));
    }

    #[test]
    fn test_momentum_projects_release_target() {
        let mut drag = DragController::new(DragConfig::default());
        drag.press(Point::ORIGIN, 0.0);
        drag.drag_to(Point::new(10.0, 0.0), 100.0);
        drag.drag_to(Point::new(20.0, 0.0), 150.0);
        // 10px over 50ms = 200px/s, projected 160px, clamped to the right edge
        let target = drag.release(160.0);
        assert_eq!(target, Point::new(150.0, 0.0));
    }

    #[test]
    fn test_press_while_settling_takes_over() {
        let mut drag = DragController::new(DragConfig::default());
        drag.press(Point::ORIGIN, 0.0);
        drag.drag_to(Point::new(500.0, 0.0), 16.0);
        drag.release(500.0);
        drag.step(0.05);
        let mid = drag.offset();

        drag.press(Point::new(10.0, 10.0), 600.0);
        assert!(drag.is_dragging());
        assert_eq!(drag.offset(), mid);
        assert!(!drag.step(0.05));
        let shown = drag.drag_to(Point::new(10.0, 10.0), 616.0);
        assert!((shown.x - mid.x).abs() < 1e-6);
        assert!((shown.y - mid.y).abs() < 1e-6);
    }

    #[test]
    fn test_drag_without_press_is_ignored() {
        let mut drag = DragController::new(DragConfig::default());
        assert_eq!(drag.drag_to(Point::new(90.0, 90.0), 0.0), Point::ORIGIN);
        assert_eq!(drag.release(0.0), Point::ORIGIN);
    }
}
