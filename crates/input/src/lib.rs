//! Pointer input handling for the globe view.
//!
//! Event handlers only record intent here; the animation tick consumes the
//! per-frame flags and drives the rotation state machine. Everything runs
//! on the one render thread, so no locking is involved.

use glam::Vec2;

/// Pointer element state, as delivered by the host windowing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementState {
    Pressed,
    Released,
}

/// Frame-coherent pointer state over the visualization region.
#[derive(Debug, Default)]
pub struct PointerState {
    /// Primary button currently held.
    held: bool,
    /// Button went down this frame.
    pressed: bool,
    /// Button went up this frame.
    released: bool,
    /// Pointer left the region this frame.
    left: bool,
    /// Pointer position in region coordinates.
    position: Vec2,
    /// Pointer movement delta this frame.
    delta: Vec2,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear per-frame state. Call at the start of each frame.
    pub fn begin_frame(&mut self) {
        self.pressed = false;
        self.released = false;
        self.left = false;
        self.delta = Vec2::ZERO;
    }

    /// Process a primary-button event.
    pub fn process_button(&mut self, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if !self.held {
                    self.pressed = true;
                }
                self.held = true;
            }
            ElementState::Released => {
                if self.held {
                    self.released = true;
                }
                self.held = false;
            }
        }
    }

    /// Process pointer motion to a new position.
    pub fn process_motion(&mut self, position: Vec2) {
        self.delta += position - self.position;
        self.position = position;
    }

    /// Process the pointer leaving the visualization region. A held drag
    /// ends here the same way a release does.
    pub fn process_leave(&mut self) {
        self.left = true;
        if self.held {
            self.released = true;
            self.held = false;
        }
    }

    /// Whether the button is currently held.
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Whether the button went down this frame.
    pub fn pressed(&self) -> bool {
        self.pressed
    }

    /// Whether the interaction ended this frame (release or leave).
    pub fn interaction_ended(&self) -> bool {
        self.released || self.left
    }

    /// Current pointer position.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Pointer movement accumulated this frame, for the orbit camera.
    pub fn delta(&self) -> Vec2 {
        self.delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_are_frame_flags() {
        let mut pointer = PointerState::new();
        pointer.process_button(ElementState::Pressed);
        assert!(pointer.pressed());
        assert!(pointer.is_held());

        pointer.begin_frame();
        assert!(!pointer.pressed());
        assert!(pointer.is_held());

        pointer.process_button(ElementState::Released);
        assert!(pointer.interaction_ended());
        assert!(!pointer.is_held());
    }

    #[test]
    fn repeated_press_events_fire_once() {
        let mut pointer = PointerState::new();
        pointer.process_button(ElementState::Pressed);
        pointer.begin_frame();
        pointer.process_button(ElementState::Pressed);
        assert!(!pointer.pressed(), "auto-repeat must not re-press");
    }

    #[test]
    fn leave_ends_a_held_drag() {
        let mut pointer = PointerState::new();
        pointer.process_button(ElementState::Pressed);
        pointer.begin_frame();
        pointer.process_leave();
        assert!(pointer.interaction_ended());
        assert!(!pointer.is_held());
    }

    #[test]
    fn motion_accumulates_delta_within_a_frame() {
        let mut pointer = PointerState::new();
        pointer.process_motion(Vec2::new(10.0, 0.0));
        pointer.process_motion(Vec2::new(15.0, 5.0));
        assert_eq!(pointer.delta(), Vec2::new(15.0, 5.0));
        assert_eq!(pointer.position(), Vec2::new(15.0, 5.0));

        pointer.begin_frame();
        assert_eq!(pointer.delta(), Vec2::ZERO);
    }
}
