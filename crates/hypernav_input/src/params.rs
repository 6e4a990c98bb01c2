//! Navigation parameters

use std::time::Duration;

/// Speeds and timings read by the navigator on every event
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigationParams {
    /// Hyperbolic distance per second while a movement key is held
    pub translation_velocity: f64,
    /// Radians per second while a turn key is held
    pub rotation_velocity: f64,
    /// Distance or angle per pixel of pointer drag
    pub drag_sensitivity: f64,
    /// Delay between motion ticks while keys are held
    pub tick_interval: Duration,
    /// How long a key release may be followed by a re-press and still count
    /// as held (absorbs key auto-repeat)
    pub release_debounce: Duration,
    /// Delay from the first key press to the first tick
    pub arm_delay: Duration,
}

impl Default for NavigationParams {
    fn default() -> Self {
        Self {
            translation_velocity: 0.4,
            rotation_velocity: 0.4,
            drag_sensitivity: 0.01,
            tick_interval: Duration::from_millis(10),
            release_debounce: Duration::from_millis(5),
            arm_delay: Duration::from_millis(1),
        }
    }
}

impl NavigationParams {
    /// Builder: set translation velocity
    pub fn with_translation_velocity(mut self, velocity: f64) -> Self {
        self.translation_velocity = velocity;
        self
    }

    /// Builder: set rotation velocity
    pub fn with_rotation_velocity(mut self, velocity: f64) -> Self {
        self.rotation_velocity = velocity;
        self
    }

    /// Builder: set pointer drag sensitivity
    pub fn with_drag_sensitivity(mut self, sensitivity: f64) -> Self {
        self.drag_sensitivity = sensitivity;
        self
    }

    /// Builder: set the motion tick interval
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Builder: set the key release debounce window
    pub fn with_release_debounce(mut self, window: Duration) -> Self {
        self.release_debounce = window;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = NavigationParams::default();
        assert_eq!(params.translation_velocity, 0.4);
        assert_eq!(params.rotation_velocity, 0.4);
        assert_eq!(params.tick_interval, Duration::from_millis(10));
        assert_eq!(params.release_debounce, Duration::from_millis(5));
    }

    #[test]
    fn test_builders() {
        let params = NavigationParams::default()
            .with_translation_velocity(1.0)
            .with_rotation_velocity(2.0)
            .with_drag_sensitivity(0.02)
            .with_tick_interval(Duration::from_millis(16))
            .with_release_debounce(Duration::from_millis(8));
        assert_eq!(params.translation_velocity, 1.0);
        assert_eq!(params.rotation_velocity, 2.0);
        assert_eq!(params.drag_sensitivity, 0.02);
        assert_eq!(params.tick_interval, Duration::from_millis(16));
        assert_eq!(params.release_debounce, Duration::from_millis(8));
    }
}
