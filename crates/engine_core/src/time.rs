//! Time management for the animation loop.

use std::time::{Duration, Instant};

/// Manages frame timing and delta time calculation.
///
/// The rotation state machine is driven by timestamps from
/// [`Time::elapsed_seconds`], so a host render loop only needs to call
/// [`Time::update`] once per frame and feed the elapsed time through.
#[derive(Debug)]
pub struct Time {
    /// Time when the engine started.
    start_time: Instant,
    /// Time of the last frame.
    last_frame: Instant,
    /// Duration of the last frame.
    delta: Duration,
    /// Total elapsed time since start.
    elapsed: Duration,
    /// Frame count since start.
    frame_count: u64,
    /// Fixed timestep for the animation tick (default 60 Hz).
    fixed_timestep: Duration,
    /// Accumulated time for fixed updates.
    accumulator: Duration,
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

impl Time {
    /// Create a new time manager.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_frame: now,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
            fixed_timestep: Duration::from_secs_f64(1.0 / 60.0),
            accumulator: Duration::ZERO,
        }
    }

    /// Update timing at the start of a new frame.
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta = now - self.last_frame;
        self.last_frame = now;
        self.elapsed = now - self.start_time;
        self.frame_count += 1;
        self.accumulator += self.delta;
    }

    /// Get the delta time in seconds.
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Get total elapsed time in seconds.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Get the current frame count.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the fixed timestep in seconds.
    pub fn fixed_timestep_seconds(&self) -> f64 {
        self.fixed_timestep.as_secs_f64()
    }

    /// Check if a fixed update should run and consume the time.
    pub fn should_fixed_update(&mut self) -> bool {
        if self.accumulator >= self.fixed_timestep {
            self.accumulator -= self.fixed_timestep;
            true
        } else {
            false
        }
    }

    /// Get the current FPS (averaged over last frame).
    pub fn fps(&self) -> f32 {
        if self.delta.as_secs_f32() > 0.0 {
            1.0 / self.delta.as_secs_f32()
        } else {
            0.0
        }
    }

    /// Set the fixed timestep rate in Hz.
    pub fn set_fixed_rate(&mut self, hz: f64) {
        self.fixed_timestep = Duration::from_secs_f64(1.0 / hz);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_starts_at_frame_zero() {
        let time = Time::new();
        assert_eq!(time.frame_count(), 0);
        assert_eq!(time.delta_seconds(), 0.0);
    }

    #[test]
    fn update_advances_frame_count_and_elapsed() {
        let mut time = Time::new();
        time.update();
        time.update();
        assert_eq!(time.frame_count(), 2);
        assert!(time.elapsed_seconds() >= 0.0);
    }

    #[test]
    fn fps_reflects_the_last_frame_delta() {
        let mut time = Time::new();
        assert_eq!(time.fps(), 0.0, "no frame yet");
        std::thread::sleep(Duration::from_millis(2));
        time.update();
        assert!(time.fps() > 0.0);
    }

    #[test]
    fn fixed_update_consumes_accumulator() {
        let mut time = Time::new();
        time.set_fixed_rate(1000.0);
        std::thread::sleep(Duration::from_millis(5));
        time.update();
        // At 1 kHz at least one fixed step must be pending after 5 ms.
        assert!(time.should_fixed_update());
    }
}
