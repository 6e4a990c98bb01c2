//! View state and the model that updates it
//!
//! The renderer owns the meaning of a view state. Navigation only needs an
//! initial value and a way to push a Lorentz operator onto it, which is what
//! [`ViewModel`] captures. [`LorentzView`] is the plain hyperboloid model:
//! the state is the camera-to-world isometry itself.

use bytemuck::{Pod, Zeroable};
use hypernav_math::lorentz;
use hypernav_math::mat4::{self, Mat4, IDENTITY};
use hypernav_math::Vec4;

/// Source of view states for a navigator.
///
/// Implementations must be pure: the same inputs always give the same state
/// and nothing observable changes as a side effect.
pub trait ViewModel {
    type State: Clone;

    /// Canonical starting placement of the camera
    fn initial_view_state(&self) -> Self::State;

    /// Apply `operator` (the cumulative delta since the last call) to `state`
    fn update_view_state(&self, state: &Self::State, operator: &Mat4) -> Self::State;

    /// Re-validate `state` without moving the camera
    fn normalize_view_state(&self, state: &Self::State) -> Self::State;
}

/// Camera placement in the hyperboloid model
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// Camera-to-world isometry (column 0 is the camera position)
    pub transform: Mat4,
}

impl Default for ViewState {
    fn default() -> Self {
        Self { transform: IDENTITY }
    }
}

impl ViewState {
    /// Point of the hyperboloid the camera sits at
    pub fn camera_position(&self) -> Vec4 {
        mat4::transform(self.transform, Vec4::ORIGIN)
    }

    /// Hyperbolic distance from the camera to the origin
    pub fn distance_from_origin(&self) -> f64 {
        // Clamp rounding below 1 so acosh stays defined
        self.camera_position().t.max(1.0).acosh()
    }

    /// Pack the state for upload to a shader
    pub fn uniforms(&self) -> ViewUniforms {
        ViewUniforms {
            view_matrix: mat4::to_f32(self.transform),
        }
    }
}

/// GPU-side view data
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ViewUniforms {
    pub view_matrix: [[f32; 4]; 4],
}

/// Reference view model: right-multiplies operators onto the camera
/// isometry and re-orthonormalizes after every update.
#[derive(Clone, Copy, Debug, Default)]
pub struct LorentzView {
    /// Starting placement
    pub initial: ViewState,
}

impl LorentzView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: start somewhere other than the origin
    pub fn with_initial(mut self, initial: ViewState) -> Self {
        self.initial = initial;
        self
    }
}

impl ViewModel for LorentzView {
    type State = ViewState;

    fn initial_view_state(&self) -> ViewState {
        self.initial
    }

    fn update_view_state(&self, state: &ViewState, operator: &Mat4) -> ViewState {
        ViewState {
            transform: lorentz::orthonormalize(mat4::mul(state.transform, *operator)),
        }
    }

    fn normalize_view_state(&self, state: &ViewState) -> ViewState {
        let transform = lorentz::orthonormalize(state.transform);
        log::trace!(
            "Normalized view state (drift {:.3e})",
            mat4::max_abs_diff(transform, state.transform)
        );
        ViewState { transform }
    }
}
