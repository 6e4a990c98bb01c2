//! Capabilities the navigator borrows from its host widget
//!
//! The navigator never owns a window or a renderer. Event handlers that need
//! one take it as a parameter implementing these traits.

use bitflags::bitflags;
use winit::keyboard::ModifiersState;

/// Depth read back from the rendered frame under a pixel
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthSample {
    /// Encoded depth of the surface under the pixel, in `[0, 1)` for a hit
    pub depth: f64,
    /// Viewport width in pixels
    pub width: u32,
    /// Viewport height in pixels
    pub height: u32,
}

/// Queries against the rendered scene
pub trait SceneQuery {
    /// Read the depth buffer at window coordinates `(x, y)`
    fn read_depth(&mut self, x: f64, y: f64) -> DepthSample;

    /// Current vertical field of view in degrees
    fn fov_degrees(&self) -> f64;
}

/// Requests from the navigator back to the host
pub trait RenderTrigger {
    /// Schedule a redraw if the view has been initialized
    fn request_redraw(&mut self);

    /// Give keyboard focus to the view
    fn request_focus(&mut self) {}
}

bitflags! {
    /// Modifier keys held when a pointer button goes down
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CONTROL = 1 << 1;
        const ALT = 1 << 2;
    }
}

impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        let mut modifiers = Modifiers::empty();
        modifiers.set(Modifiers::SHIFT, state.shift_key());
        modifiers.set(Modifiers::CONTROL, state.control_key());
        modifiers.set(Modifiers::ALT, state.alt_key());
        modifiers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_from_winit() {
        let state = ModifiersState::CONTROL | ModifiersState::ALT;
        let modifiers = Modifiers::from(state);
        assert!(modifiers.contains(Modifiers::CONTROL));
        assert!(modifiers.contains(Modifiers::ALT));
        assert!(!modifiers.contains(Modifiers::SHIFT));
    }

    #[test]
    fn test_no_modifiers() {
        assert_eq!(Modifiers::from(ModifiersState::empty()), Modifiers::empty());
    }
}
