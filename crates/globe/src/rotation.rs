//! Auto-rotation state machine: rotate, freeze on interaction, resume
//! after a cooldown.
//!
//! The cooldown is a stored deadline timestamp compared on every tick, not
//! a scheduled timer, so re-interaction before expiry needs no
//! cancellation; the deadline is simply overwritten.

/// Rotation mode of the globe body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RotationMode {
    /// Advancing the rotation angle every tick.
    AutoRotating,
    /// Pointer held down; angle frozen while the orbit camera takes over.
    Interacting,
    /// Pointer released; angle stays frozen until `deadline` passes.
    CoolingDown { deadline: f64 },
}

/// Drives the per-frame rotation angle of the globe body and glow shell.
///
/// The only mutable state in the visualization. `tick` is the sole
/// mutator of the angles and is expected to run once per animation frame;
/// pointer handlers only switch modes. Angles accumulate as a tick count
/// times the increment, so `angle() == ticks * increment` holds exactly
/// with no float drift.
#[derive(Debug, Clone)]
pub struct RotationController {
    mode: RotationMode,
    /// Ticks spent auto-rotating since creation.
    auto_ticks: u64,
    increment_per_frame: f32,
    cooldown_seconds: f64,
}

impl Default for RotationController {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INCREMENT, Self::DEFAULT_COOLDOWN_SECONDS)
    }
}

impl RotationController {
    /// Body rotation per frame in radians. The glow shell advances at half
    /// this rate for a subtle parallax between layers.
    pub const DEFAULT_INCREMENT: f32 = 0.001;
    /// Idle delay before auto-rotation resumes after interaction.
    pub const DEFAULT_COOLDOWN_SECONDS: f64 = 3.0;

    pub fn new(increment_per_frame: f32, cooldown_seconds: f64) -> Self {
        Self {
            mode: RotationMode::AutoRotating,
            auto_ticks: 0,
            increment_per_frame,
            cooldown_seconds,
        }
    }

    /// Current mode.
    pub fn mode(&self) -> RotationMode {
        self.mode
    }

    /// Body rotation angle in radians.
    pub fn angle(&self) -> f32 {
        self.auto_ticks as f32 * self.increment_per_frame
    }

    /// Glow-shell rotation angle in radians (half the body rate).
    pub fn glow_angle(&self) -> f32 {
        self.auto_ticks as f32 * (self.increment_per_frame / 2.0)
    }

    /// Pointer pressed on the globe. Freezes rotation from any mode; a
    /// press during cooldown discards the pending deadline.
    pub fn pointer_down(&mut self) {
        self.mode = RotationMode::Interacting;
    }

    /// Pointer released or left the globe at time `now` (seconds).
    /// Rotation stays frozen until the cooldown deadline passes.
    pub fn pointer_released(&mut self, now: f64) {
        if self.mode == RotationMode::Interacting {
            self.mode = RotationMode::CoolingDown {
                deadline: now + self.cooldown_seconds,
            };
        }
    }

    /// Advance one animation frame at time `now` (seconds).
    pub fn tick(&mut self, now: f64) {
        if let RotationMode::CoolingDown { deadline } = self.mode {
            if now >= deadline {
                self.mode = RotationMode::AutoRotating;
            }
        }
        if self.mode == RotationMode::AutoRotating {
            self.auto_ticks += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_exactly_under_auto_rotation() {
        let mut rot = RotationController::default();
        for i in 0..240 {
            rot.tick(i as f64 / 60.0);
        }
        assert_eq!(rot.angle(), 240.0 * RotationController::DEFAULT_INCREMENT);
        assert_eq!(
            rot.glow_angle(),
            240.0 * (RotationController::DEFAULT_INCREMENT / 2.0)
        );
    }

    #[test]
    fn pointer_down_freezes_the_angle() {
        let mut rot = RotationController::default();
        rot.tick(0.0);
        let frozen = rot.angle();
        rot.pointer_down();
        assert_eq!(rot.mode(), RotationMode::Interacting);
        for i in 1..100 {
            rot.tick(i as f64 / 60.0);
        }
        assert_eq!(rot.angle(), frozen);
    }

    #[test]
    fn resumes_only_after_the_cooldown_deadline() {
        let mut rot = RotationController::default();
        rot.pointer_down();
        rot.pointer_released(10.0);
        assert_eq!(
            rot.mode(),
            RotationMode::CoolingDown { deadline: 13.0 }
        );

        rot.tick(11.0);
        rot.tick(12.999);
        assert_eq!(rot.angle(), 0.0, "must not rotate before the deadline");

        rot.tick(13.0);
        assert_eq!(rot.mode(), RotationMode::AutoRotating);
        assert_eq!(rot.angle(), RotationController::DEFAULT_INCREMENT);
    }

    #[test]
    fn press_during_cooldown_overwrites_the_deadline() {
        let mut rot = RotationController::default();
        rot.pointer_down();
        rot.pointer_released(10.0);
        rot.pointer_down();
        assert_eq!(rot.mode(), RotationMode::Interacting);

        // Old deadline must be gone: ticking past it stays frozen.
        rot.tick(14.0);
        assert_eq!(rot.angle(), 0.0);

        rot.pointer_released(14.0);
        rot.tick(17.0);
        assert_eq!(rot.mode(), RotationMode::AutoRotating);
    }

    #[test]
    fn release_without_interaction_is_ignored() {
        let mut rot = RotationController::default();
        rot.pointer_released(5.0);
        assert_eq!(rot.mode(), RotationMode::AutoRotating);
    }

    #[test]
    fn angle_is_monotonic_while_auto_rotating() {
        let mut rot = RotationController::default();
        let mut last = rot.angle();
        for i in 0..1000 {
            rot.tick(i as f64 / 60.0);
            assert!(rot.angle() >= last);
            last = rot.angle();
        }
    }
}
