//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard input to application actions like Exit or ResetView.
//! Movement keys are NOT mapped here - they go directly to the navigator.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by special input (not movement)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Return the camera to its starting placement (R key)
    ResetView,
    /// Re-orthonormalize the view state (N key)
    NormalizeView,
    /// Log the current view state (U key)
    DumpViewState,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
}

/// Maps raw input events to semantic actions
///
/// Stateless; handles application keys only.
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for application keys, `None` for everything else
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyR => Some(InputAction::ResetView),
            KeyCode::KeyN => Some(InputAction::NormalizeView),
            KeyCode::KeyU => Some(InputAction::DumpViewState),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            _ => None, // Movement keys handled by navigator
        }
    }
}
