//! Hyperboloid navigator
//!
//! Owns the view state and turns keyboard and pointer events into Lorentz
//! operators applied through a [`ViewModel`]. Everything runs on the host's
//! event thread; each handler takes `&mut self`, so a motion tick and an
//! input event always see and leave a consistent state.
//!
//! The host drives timing: after every event it asks [`next_tick`] when to
//! call [`tick`] again (e.g. via winit's `ControlFlow::WaitUntil`) and
//! stops waking up once it returns `None`.
//!
//! [`next_tick`]: HyperboloidNavigator::next_tick
//! [`tick`]: HyperboloidNavigator::tick

use std::time::Instant;

use hypernav_core::ViewModel;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

use crate::gesture::{Gesture, GestureMode, OrbitPivot};
use crate::host::{Modifiers, RenderTrigger, SceneQuery};
use crate::key_motion::KeyMotion;
use crate::params::NavigationParams;

/// Navigation state for one view
pub struct HyperboloidNavigator<M: ViewModel> {
    model: M,
    view_state: M::State,
    key_motion: KeyMotion,
    gesture: Option<Gesture<M::State>>,

    // Configuration
    pub params: NavigationParams,
}

impl<M: ViewModel> HyperboloidNavigator<M> {
    pub fn new(model: M) -> Self {
        let view_state = model.initial_view_state();
        Self {
            model,
            view_state,
            key_motion: KeyMotion::new(),
            gesture: None,
            params: NavigationParams::default(),
        }
    }

    /// Builder: set navigation parameters
    pub fn with_params(mut self, params: NavigationParams) -> Self {
        self.params = params;
        self
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Current view state, for the renderer
    pub fn view_state(&self) -> &M::State {
        &self.view_state
    }

    /// Jump back to the model's initial placement
    pub fn reset_view_state(&mut self) {
        self.view_state = self.model.initial_view_state();
    }

    /// Ask the model to correct accumulated floating-point drift
    pub fn fix_view_state(&mut self) {
        self.view_state = self.model.normalize_view_state(&self.view_state);
    }

    /// Keyboard focus follows the pointer into the view
    pub fn pointer_enter<H: RenderTrigger>(&mut self, host: &mut H) {
        host.request_focus();
    }

    /// Process a key press; returns true if the key is a movement key
    pub fn key_press(&mut self, key: KeyCode, now: Instant) -> bool {
        self.key_motion.press(key, now, &self.params)
    }

    /// Process a key release
    pub fn key_release(&mut self, key: KeyCode, now: Instant) {
        self.key_motion.release(key, now);
    }

    /// Apply held-key motion up to `now`.
    ///
    /// Returns false (and leaves the view untouched) once every key has been
    /// released; [`next_tick`](Self::next_tick) is `None` from then on.
    pub fn tick<H: RenderTrigger>(&mut self, now: Instant, host: &mut H) -> bool {
        match self.key_motion.tick(now, &self.params) {
            Some(operator) => {
                self.view_state = self.model.update_view_state(&self.view_state, &operator);
                host.request_redraw();
                true
            }
            None => false,
        }
    }

    /// When the host should call [`tick`](Self::tick) next
    pub fn next_tick(&self) -> Option<Instant> {
        self.key_motion.next_tick()
    }

    /// Check if any movement keys are held
    pub fn is_moving(&self) -> bool {
        self.key_motion.is_active()
    }

    /// Mode of the drag in progress, if any
    pub fn gesture_mode(&self) -> Option<GestureMode> {
        self.gesture.as_ref().map(Gesture::mode)
    }

    /// Start a drag gesture. Only the primary button navigates; the mode is
    /// picked from `modifiers` and replaces any gesture already running.
    pub fn button_press<Q: SceneQuery>(
        &mut self,
        button: MouseButton,
        pos: (f64, f64),
        modifiers: Modifiers,
        scene: &mut Q,
    ) {
        if button != MouseButton::Left {
            return;
        }

        let mode = GestureMode::from_modifiers(modifiers);
        log::debug!("{:?} gesture at ({:.0}, {:.0})", mode, pos.0, pos.1);

        self.gesture = Some(match mode {
            GestureMode::Free => Gesture::free(pos, &self.view_state),
            GestureMode::Rotate => Gesture::rotate(pos),
            GestureMode::Orbit => {
                let sample = scene.read_depth(pos.0, pos.1);
                let pivot = OrbitPivot::pick(pos.0, pos.1, sample, scene.fov_degrees());
                Gesture::orbit(pos, &self.view_state, pivot)
            }
        });
    }

    /// Pointer moved with the button held. Ignored when no gesture is active.
    pub fn button_drag<H: RenderTrigger>(&mut self, pos: (f64, f64), host: &mut H) {
        let Some(gesture) = self.gesture.as_mut() else {
            log::trace!("Drag without gesture ignored");
            return;
        };

        self.view_state = gesture.drag(pos, &self.view_state, &self.model, self.params.drag_sensitivity);
        host.request_redraw();
    }

    /// End the drag gesture
    pub fn button_release(&mut self, button: MouseButton) {
        if button == MouseButton::Left && self.gesture.take().is_some() {
            log::debug!("Gesture ended");
        }
    }
}

impl<M: ViewModel + Default> Default for HyperboloidNavigator<M> {
    fn default() -> Self {
        Self::new(M::default())
    }
}
