//! Drag/keyboard driven island rotation with idle damping.
//!
//! While the user drives the island, its heading moves with the input and
//! the stage is reclassified every frame. Once input stops, the last
//! velocity decays geometrically until it snaps to zero; the stage is not
//! reclassified during that free spin.

use std::f64::consts::{PI, TAU};

use crate::stage::Stage;

/// Multiplier applied to the velocity on every idle frame
pub const DAMPING_FACTOR: f64 = 0.95;
/// Idle velocities below this magnitude snap to zero
pub const REST_THRESHOLD: f64 = 0.001;
/// Radians per viewport width of pointer travel
pub const DRAG_SENSITIVITY: f64 = 0.01 * PI;
/// Heading change per arrow key press
pub const KEY_STEP: f64 = 0.01 * PI;
/// Velocity left behind by an arrow key press
pub const KEY_SPEED: f64 = 0.0125;

/// Arrow keys that steer the island
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Steer {
    Left,
    Right,
}

/// Maps any angle into `[0, 2π)`
pub fn normalize(angle: f64) -> f64 {
    ((angle % TAU) + TAU) % TAU
}

#[derive(Clone, Debug)]
pub struct RotationController {
    /// Island heading in radians, never wrapped
    orientation: f64,
    /// Radians per frame
    velocity: f64,
    rotating: bool,
    last_x: f64,
    stage: Option<Stage>,
}

impl RotationController {
    pub fn new(orientation: f64) -> Self {
        RotationController {
            orientation,
            velocity: 0.0,
            rotating: false,
            last_x: 0.0,
            stage: None,
        }
    }

    pub fn pointer_down(&mut self, x: f64) {
        self.rotating = true;
        self.last_x = x;
    }

    pub fn pointer_move(&mut self, x: f64, viewport_width: f64) {
        if !self.rotating {
            return;
        }
        let delta = (x - self.last_x) / viewport_width;
        self.orientation += delta * DRAG_SENSITIVITY;
        self.velocity = delta * DRAG_SENSITIVITY;
        self.last_x = x;
    }

    pub fn pointer_up(&mut self) {
        self.rotating = false;
    }

    pub fn key_down(&mut self, steer: Steer) {
        self.rotating = true;
        match steer {
            Steer::Left => {
                self.orientation += KEY_STEP;
                self.velocity = KEY_SPEED;
            }
            Steer::Right => {
                self.orientation -= KEY_STEP;
                self.velocity = -KEY_SPEED;
            }
        }
    }

    pub fn key_up(&mut self, _steer: Steer) {
        self.rotating = false;
    }

    /// Per-frame update, returning the stage to display
    pub fn tick(&mut self) -> Option<Stage> {
        if self.rotating {
            self.stage = Stage::from_normalized(normalize(self.orientation));
        } else {
            self.velocity *= DAMPING_FACTOR;
            if self.velocity.abs() < REST_THRESHOLD {
                self.velocity = 0.0;
            }
            self.orientation += self.velocity;
        }
        self.stage
    }

    pub fn orientation(&self) -> f64 {
        self.orientation
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn is_rotating(&self) -> bool {
        self.rotating
    }

    pub fn stage(&self) -> Option<Stage> {
        self.stage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_at(orientation: f64) -> RotationController {
        let mut controller = RotationController::new(orientation);
        controller.pointer_down(0.0);
        controller
    }

    #[test]
    fn normalize_stays_in_range_and_is_periodic() {
        for &angle in &[-100.0, -TAU, -1.0, -1e-12, 0.0, 1.0, TAU, 7.5, 1234.5] {
            let n = normalize(angle);
            assert!((0.0..TAU).contains(&n), "normalize({angle}) = {n}");
            let shifted = normalize(angle + TAU);
            let diff = (shifted - n).abs();
            assert!(diff < 1e-9 || (TAU - diff) < 1e-9, "angle {angle}");
        }
    }

    #[test]
    fn active_orientation_selects_stage() {
        assert_eq!(active_at(0.0).tick(), Some(Stage::Contact));
        assert_eq!(active_at(1.5).tick(), Some(Stage::Portfolio));
        assert_eq!(active_at(4.5).tick(), Some(Stage::Greeting));
        assert_eq!(active_at(2.5).tick(), None);
        assert_eq!(active_at(-TAU + 3.9).tick(), Some(Stage::Experience));
    }

    #[test]
    fn drag_scales_by_viewport_width() {
        let mut controller = RotationController::new(0.0);
        controller.pointer_down(100.0);
        controller.pointer_move(150.0, 1000.0);
        let expected = 0.05 * 0.01 * PI;
        assert!((controller.orientation() - expected).abs() < 1e-12);
        assert!((controller.velocity() - expected).abs() < 1e-12);
        assert!((expected - 0.001571).abs() < 1e-6);
    }

    #[test]
    fn pointer_move_without_press_is_ignored() {
        let mut controller = RotationController::new(1.0);
        controller.pointer_move(500.0, 1000.0);
        assert_eq!(controller.orientation(), 1.0);
        assert_eq!(controller.velocity(), 0.0);
    }

    #[test]
    fn arrow_keys_step_and_set_speed() {
        let mut controller = RotationController::new(0.0);
        controller.key_down(Steer::Left);
        assert!(controller.is_rotating());
        assert!((controller.orientation() - KEY_STEP).abs() < 1e-12);
        assert_eq!(controller.velocity(), KEY_SPEED);

        controller.key_down(Steer::Right);
        controller.key_down(Steer::Right);
        assert!((controller.orientation() + KEY_STEP).abs() < 1e-12);
        assert_eq!(controller.velocity(), -KEY_SPEED);

        controller.key_up(Steer::Right);
        assert!(!controller.is_rotating());
    }

    #[test]
    fn idle_frames_damp_until_rest() {
        let mut controller = RotationController::new(0.0);
        controller.key_down(Steer::Left);
        controller.key_up(Steer::Left);

        let before = controller.velocity();
        let _ = controller.tick();
        assert!((controller.velocity() - before * DAMPING_FACTOR).abs() < 1e-15);
        assert!(controller.velocity().abs() < before.abs());

        for _ in 0..200 {
            let _ = controller.tick();
        }
        assert_eq!(controller.velocity(), 0.0);
        let resting = controller.orientation();
        let _ = controller.tick();
        assert_eq!(controller.orientation(), resting);
    }

    #[test]
    fn idle_frames_keep_the_last_stage() {
        let mut controller = active_at(4.5);
        assert_eq!(controller.tick(), Some(Stage::Greeting));
        controller.pointer_up();
        controller.orientation = 2.5;
        assert_eq!(controller.tick(), Some(Stage::Greeting));
    }

    #[test]
    fn rotating_frames_do_not_apply_velocity() {
        let mut controller = active_at(1.0);
        controller.pointer_move(50.0, 100.0);
        let heading = controller.orientation();
        let _ = controller.tick();
        assert_eq!(controller.orientation(), heading);
    }
}
