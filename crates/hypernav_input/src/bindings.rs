//! Movement key bindings
//!
//! Controls:
//! - A/D: Strafe left/right (X)
//! - C/E: Down/up (Y)
//! - W/S: Forward/backward (Z)
//! - Left/Right arrows: Turn (about Y)
//! - Up/Down arrows: Pitch (about X)
//! - X/Z: Roll (about Z)

use hypernav_math::lorentz::{self, Axis};
use hypernav_math::{Mat4, Vec3};
use winit::keyboard::KeyCode;

/// Direction along an axis
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    #[inline]
    pub fn apply(self, amount: f64) -> f64 {
        match self {
            Sign::Positive => amount,
            Sign::Negative => -amount,
        }
    }
}

/// What holding a movement key does
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionBinding {
    /// Turn about `axis`
    Rotation { axis: Axis, sign: Sign },
    /// Move along `axis`
    Translation { axis: Axis, sign: Sign },
}

impl MotionBinding {
    /// Build the operator for one integration step.
    ///
    /// Rotations use `rotation_amount` (radians) and translations use
    /// `translation_amount` (hyperbolic distance); the other is ignored.
    pub fn operator(self, rotation_amount: f64, translation_amount: f64) -> Mat4 {
        match self {
            MotionBinding::Rotation { axis, sign } => {
                lorentz::axis_rotation(axis, sign.apply(rotation_amount))
            }
            MotionBinding::Translation { axis, sign } => {
                let direction = match axis {
                    Axis::X => Vec3::X,
                    Axis::Y => Vec3::Y,
                    Axis::Z => Vec3::Z,
                };
                lorentz::translation(direction * sign.apply(1.0), translation_amount)
            }
        }
    }
}

/// Look up the movement binding of a key, if it has one
pub fn binding_for(key: KeyCode) -> Option<MotionBinding> {
    use MotionBinding::{Rotation, Translation};
    use Sign::{Negative, Positive};

    let binding = match key {
        KeyCode::KeyA => Translation { axis: Axis::X, sign: Negative },
        KeyCode::KeyD => Translation { axis: Axis::X, sign: Positive },
        KeyCode::KeyC => Translation { axis: Axis::Y, sign: Negative },
        KeyCode::KeyE => Translation { axis: Axis::Y, sign: Positive },
        KeyCode::KeyW => Translation { axis: Axis::Z, sign: Negative },
        KeyCode::KeyS => Translation { axis: Axis::Z, sign: Positive },
        KeyCode::ArrowLeft => Rotation { axis: Axis::Y, sign: Negative },
        KeyCode::ArrowRight => Rotation { axis: Axis::Y, sign: Positive },
        KeyCode::ArrowUp => Rotation { axis: Axis::X, sign: Negative },
        KeyCode::ArrowDown => Rotation { axis: Axis::X, sign: Positive },
        KeyCode::KeyX => Rotation { axis: Axis::Z, sign: Negative },
        KeyCode::KeyZ => Rotation { axis: Axis::Z, sign: Positive },
        _ => return None,
    };
    Some(binding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hypernav_math::mat4::{max_abs_diff, IDENTITY};

    const MOVEMENT_KEYS: [KeyCode; 12] = [
        KeyCode::KeyA,
        KeyCode::KeyD,
        KeyCode::KeyC,
        KeyCode::KeyE,
        KeyCode::KeyW,
        KeyCode::KeyS,
        KeyCode::ArrowLeft,
        KeyCode::ArrowRight,
        KeyCode::ArrowUp,
        KeyCode::ArrowDown,
        KeyCode::KeyX,
        KeyCode::KeyZ,
    ];

    #[test]
    fn test_twelve_keys_bound() {
        for key in MOVEMENT_KEYS {
            assert!(binding_for(key).is_some(), "{:?} should be bound", key);
        }
        let rotations = MOVEMENT_KEYS
            .iter()
            .filter(|k| matches!(binding_for(**k), Some(MotionBinding::Rotation { .. })))
            .count();
        assert_eq!(rotations, 6);
    }

    #[test]
    fn test_other_keys_unbound() {
        for key in [KeyCode::KeyQ, KeyCode::Space, KeyCode::KeyU, KeyCode::Escape] {
            assert_eq!(binding_for(key), None);
        }
    }

    #[test]
    fn test_strafe_left_is_negative_x() {
        let m = binding_for(KeyCode::KeyA).unwrap().operator(0.0, 0.3);
        let expected = lorentz::translation(-Vec3::X, 0.3);
        assert!(max_abs_diff(m, expected) < 1e-12);
    }

    #[test]
    fn test_paired_keys_cancel() {
        let pairs = [
            (KeyCode::KeyA, KeyCode::KeyD),
            (KeyCode::KeyC, KeyCode::KeyE),
            (KeyCode::KeyW, KeyCode::KeyS),
            (KeyCode::ArrowLeft, KeyCode::ArrowRight),
            (KeyCode::ArrowUp, KeyCode::ArrowDown),
            (KeyCode::KeyX, KeyCode::KeyZ),
        ];
        for (a, b) in pairs {
            let ma = binding_for(a).unwrap().operator(0.2, 0.2);
            let mb = binding_for(b).unwrap().operator(0.2, 0.2);
            let product = hypernav_math::mat4::mul(ma, mb);
            assert!(max_abs_diff(product, IDENTITY) < 1e-12, "{:?}/{:?}", a, b);
        }
    }

    #[test]
    fn test_binding_uses_only_its_amount() {
        let rotation = binding_for(KeyCode::ArrowLeft).unwrap();
        assert_eq!(rotation.operator(0.0, 5.0), IDENTITY);

        let translation = binding_for(KeyCode::KeyW).unwrap();
        assert_eq!(translation.operator(5.0, 0.0), IDENTITY);
    }
}
