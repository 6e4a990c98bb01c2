//! Pointer drag gestures
//!
//! - Plain drag: pan, relative to where the drag started
//! - Control + drag: turn in place, incrementally from the previous sample
//! - Alt + drag: orbit around the surface point under the cursor at press

use hypernav_core::ViewModel;
use hypernav_math::lorentz::{self, x_rotation, y_rotation};
use hypernav_math::mat4::{self, Mat4, IDENTITY};
use hypernav_math::Vec3;

use crate::host::{DepthSample, Modifiers};

/// Which gesture a button press starts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureMode {
    Free,
    Rotate,
    Orbit,
}

impl GestureMode {
    /// Alt selects orbit, otherwise Control selects rotate
    pub fn from_modifiers(modifiers: Modifiers) -> Self {
        if modifiers.contains(Modifiers::ALT) {
            GestureMode::Orbit
        } else if modifiers.contains(Modifiers::CONTROL) {
            GestureMode::Rotate
        } else {
            GestureMode::Free
        }
    }
}

/// Translate-rotate-untranslate sandwich around a picked point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitPivot {
    /// Moves the origin to the picked point
    pub forward: Mat4,
    /// Moves the picked point back to the origin
    pub inverse: Mat4,
}

impl OrbitPivot {
    /// Pivot about the camera itself
    pub const CAMERA: Self = Self { forward: IDENTITY, inverse: IDENTITY };

    /// Build the pivot for a picked pixel.
    ///
    /// A depth outside `[0, 1)` means nothing was hit, and the pivot falls
    /// back to the camera so the orbit becomes a turn in place. A degenerate
    /// viewport or field of view falls back the same way.
    pub fn pick(x: f64, y: f64, sample: DepthSample, fov_degrees: f64) -> Self {
        if !(0.0..1.0).contains(&sample.depth) {
            log::debug!("No surface under ({}, {}) (depth {}), orbiting camera", x, y, sample.depth);
            return Self::CAMERA;
        }

        let direction = unproject(x, y, sample.width, sample.height, fov_degrees);
        if sample.width == 0 || !direction.is_finite() {
            log::warn!(
                "Cannot unproject ({}, {}) in a {}x{} viewport at fov {}, orbiting camera",
                x, y, sample.width, sample.height, fov_degrees
            );
            return Self::CAMERA;
        }

        Self {
            forward: lorentz::translation(direction, sample.depth.atanh()),
            inverse: lorentz::translation(direction, (-sample.depth).atanh()),
        }
    }
}

/// View-space unit direction through window pixel `(x, y)`.
///
/// Both screen axes are divided by the viewport width, which matches the
/// projection the ray tracer uses.
pub fn unproject(x: f64, y: f64, width: u32, height: u32, fov_degrees: f64) -> Vec3 {
    let width = width as f64;
    let height = height as f64;

    let frag_x = (x - 0.5 * width) / width;
    let frag_y = ((height - y) - 0.5 * height) / width;
    let depth = -0.5 / (fov_degrees.to_radians() / 2.0).tan();

    Vec3::new(frag_x, frag_y, depth).normalized()
}

/// An in-progress drag
#[derive(Clone, Debug)]
pub enum Gesture<S> {
    Free {
        anchor: (f64, f64),
        anchor_state: S,
    },
    Rotate {
        last: (f64, f64),
    },
    Orbit {
        last: (f64, f64),
        anchor_state: S,
        pivot: OrbitPivot,
        /// Rotation accumulated since the press
        rotation: Mat4,
    },
}

impl<S: Clone> Gesture<S> {
    pub fn free(pos: (f64, f64), state: &S) -> Self {
        Gesture::Free { anchor: pos, anchor_state: state.clone() }
    }

    pub fn rotate(pos: (f64, f64)) -> Self {
        Gesture::Rotate { last: pos }
    }

    pub fn orbit(pos: (f64, f64), state: &S, pivot: OrbitPivot) -> Self {
        Gesture::Orbit {
            last: pos,
            anchor_state: state.clone(),
            pivot,
            rotation: IDENTITY,
        }
    }

    pub fn mode(&self) -> GestureMode {
        match self {
            Gesture::Free { .. } => GestureMode::Free,
            Gesture::Rotate { .. } => GestureMode::Rotate,
            Gesture::Orbit { .. } => GestureMode::Orbit,
        }
    }

    /// Compute the view state for a pointer sample at `pos`.
    ///
    /// `current` is the navigator's state right now; free and orbit drags
    /// ignore it and work from the state captured at press.
    pub fn drag<M>(&mut self, pos: (f64, f64), current: &S, model: &M, sensitivity: f64) -> S
    where
        M: ViewModel<State = S>,
    {
        match self {
            Gesture::Free { anchor, anchor_state } => {
                let dx = pos.0 - anchor.0;
                let dy = pos.1 - anchor.1;
                let amount = (dx * dx + dy * dy).sqrt();

                if amount == 0.0 {
                    return anchor_state.clone();
                }

                let direction = Vec3::new(-dx / amount, dy / amount, 0.0);
                let m = lorentz::translation(direction, amount * sensitivity);
                model.update_view_state(anchor_state, &m)
            }
            Gesture::Rotate { last } => {
                let dx = pos.0 - last.0;
                let dy = pos.1 - last.1;
                *last = pos;

                let m = mat4::mul(y_rotation(-dx * sensitivity), x_rotation(-dy * sensitivity));
                model.update_view_state(current, &m)
            }
            Gesture::Orbit { last, anchor_state, pivot, rotation } => {
                let dx = pos.0 - last.0;
                let dy = pos.1 - last.1;
                *last = pos;

                let m = mat4::mul(y_rotation(dx * sensitivity), x_rotation(dy * sensitivity));
                *rotation = mat4::mul(*rotation, m);

                let sandwich = mat4::mul(pivot.forward, mat4::mul(*rotation, pivot.inverse));
                model.update_view_state(anchor_state, &sandwich)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hypernav_math::mat4::max_abs_diff;

    const EPSILON: f64 = 1e-9;

    fn sample(depth: f64) -> DepthSample {
        DepthSample { depth, width: 800, height: 600 }
    }

    #[test]
    fn test_mode_from_modifiers() {
        assert_eq!(GestureMode::from_modifiers(Modifiers::empty()), GestureMode::Free);
        assert_eq!(GestureMode::from_modifiers(Modifiers::SHIFT), GestureMode::Free);
        assert_eq!(GestureMode::from_modifiers(Modifiers::CONTROL), GestureMode::Rotate);
        assert_eq!(GestureMode::from_modifiers(Modifiers::ALT), GestureMode::Orbit);
        assert_eq!(
            GestureMode::from_modifiers(Modifiers::ALT | Modifiers::CONTROL),
            GestureMode::Orbit
        );
    }

    #[test]
    fn test_unproject_center_looks_forward() {
        let d = unproject(400.0, 300.0, 800, 600, 90.0);
        assert!(d.x.abs() < EPSILON);
        assert!(d.y.abs() < EPSILON);
        assert!((d.z + 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_unproject_right_edge() {
        // frag = (0.5, 0), depth axis -0.5 / tan(45deg) = -0.5
        let d = unproject(800.0, 300.0, 800, 600, 90.0);
        let s = std::f64::consts::FRAC_1_SQRT_2;
        assert!((d.x - s).abs() < EPSILON);
        assert!((d.z + s).abs() < EPSILON);
    }

    #[test]
    fn test_unproject_divides_vertical_by_width() {
        // Top edge: (600 - 0) - 300 = 300 pixels up, over width 800
        let d = unproject(400.0, 0.0, 800, 600, 90.0);
        assert!(d.y > 0.0, "screen top should point up");
        assert!((d.y / -d.z - 0.75).abs() < EPSILON);
    }

    #[test]
    fn test_pivot_translations_are_inverse() {
        let pivot = OrbitPivot::pick(500.0, 200.0, sample(0.6), 60.0);
        let product = mat4::mul(pivot.forward, pivot.inverse);
        assert!(max_abs_diff(product, IDENTITY) < EPSILON);
        assert!(max_abs_diff(pivot.forward, IDENTITY) > 0.1);
    }

    #[test]
    fn test_pivot_distance_is_atanh_depth() {
        let pivot = OrbitPivot::pick(400.0, 300.0, sample(0.5), 90.0);
        // Image of the origin: cosh of the distance in the time coordinate
        assert!((pivot.forward[0][0].acosh() - 0.5f64.atanh()).abs() < EPSILON);
        // Looking down -z
        assert!(pivot.forward[0][3] < 0.0);
    }

    #[test]
    fn test_background_pixel_pivots_on_camera() {
        assert_eq!(OrbitPivot::pick(10.0, 10.0, sample(1.0), 90.0), OrbitPivot::CAMERA);
        assert_eq!(OrbitPivot::pick(10.0, 10.0, sample(-0.2), 90.0), OrbitPivot::CAMERA);
        assert_eq!(OrbitPivot::pick(10.0, 10.0, sample(f64::NAN), 90.0), OrbitPivot::CAMERA);
    }

    #[test]
    fn test_degenerate_viewport_pivots_on_camera() {
        let empty = DepthSample { depth: 0.5, width: 0, height: 600 };
        assert_eq!(OrbitPivot::pick(10.0, 10.0, empty, 90.0), OrbitPivot::CAMERA);

        let collapsed = DepthSample { depth: 0.5, width: 0, height: 0 };
        assert_eq!(OrbitPivot::pick(0.0, 0.0, collapsed, 90.0), OrbitPivot::CAMERA);

        assert_eq!(OrbitPivot::pick(10.0, 10.0, sample(0.5), 0.0), OrbitPivot::CAMERA);
    }

    #[test]
    fn test_degenerate_orbit_stays_finite() {
        let model = hypernav_core::LorentzView::new();
        let start = model.initial_view_state();
        let cases = [
            (DepthSample { depth: 0.5, width: 0, height: 600 }, 90.0),
            (sample(0.5), 0.0),
        ];
        for (depth_sample, fov) in cases {
            let pivot = OrbitPivot::pick(10.0, 10.0, depth_sample, fov);
            let mut gesture = Gesture::orbit((10.0, 10.0), &start, pivot);
            let state = gesture.drag((20.0, 10.0), &start, &model, 0.01);
            assert!(state.transform.iter().flatten().all(|v| v.is_finite()));
            assert!(max_abs_diff(state.transform, IDENTITY) > 0.0);
        }
    }
}
