//! Elements of the Lorentz group O(1,3)
//!
//! Isometries of hyperbolic 3-space in the hyperboloid model are the 4x4
//! matrices preserving the form diag(-1, 1, 1, 1) (and the upper sheet).
//! This module builds the two families used for navigation: rotations about
//! the coordinate axes through the origin, and translations (boosts) along
//! a geodesic through the origin.

use crate::mat4::{self, Mat4, IDENTITY};
use crate::{Vec3, Vec4};

/// The Lorentz form as a matrix
pub const LORENTZ_FORM: Mat4 = [
    [-1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Spatial coordinate axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// The ordered pair of matrix indices rotated by a positive angle.
    ///
    /// Positive angles follow the right-hand rule for every axis:
    /// X takes y toward z, Y takes z toward x, Z takes x toward y.
    fn plane(self) -> (usize, usize) {
        match self {
            Axis::X => (2, 3),
            Axis::Y => (3, 1),
            Axis::Z => (1, 2),
        }
    }
}

/// Rotation about a spatial axis through the origin
pub fn axis_rotation(axis: Axis, angle: f64) -> Mat4 {
    let (p1, p2) = axis.plane();
    mat4::plane_rotation(angle, p1, p2)
}

/// Rotation about the x axis (pitch)
pub fn x_rotation(angle: f64) -> Mat4 {
    axis_rotation(Axis::X, angle)
}

/// Rotation about the y axis (yaw)
pub fn y_rotation(angle: f64) -> Mat4 {
    axis_rotation(Axis::Y, angle)
}

/// Rotation about the z axis (roll)
pub fn z_rotation(angle: f64) -> Mat4 {
    axis_rotation(Axis::Z, angle)
}

/// Hyperbolic translation by `distance` along a unit spatial direction.
///
/// This is the boost
///
/// ```text
/// | cosh d      sinh d v^T               |
/// | sinh d v    I + (cosh d - 1) v v^T   |
/// ```
///
/// `direction` must already be unit length; it is not renormalized. A
/// negative distance moves the other way and a zero distance returns the
/// identity exactly.
pub fn translation(direction: Vec3, distance: f64) -> Mat4 {
    if distance == 0.0 {
        return IDENTITY;
    }

    let ch = distance.cosh();
    let sh = distance.sinh();
    let v = [direction.x, direction.y, direction.z];

    let mut m = IDENTITY;
    m[0][0] = ch;
    for i in 0..3 {
        m[0][i + 1] = sh * v[i];
        m[i + 1][0] = sh * v[i];
        for j in 0..3 {
            m[i + 1][j + 1] += (ch - 1.0) * v[i] * v[j];
        }
    }
    m
}

/// Lorentz inner product of two 4-vectors
#[inline]
pub fn lorentz_dot(a: Vec4, b: Vec4) -> f64 {
    a.lorentz_dot(b)
}

/// Inverse of a Lorentz isometry, `J M^T J`
pub fn inverse(m: Mat4) -> Mat4 {
    mat4::mul(LORENTZ_FORM, mat4::mul(mat4::transpose(m), LORENTZ_FORM))
}

/// Checks `M^T J M == J` entry-wise within `tolerance`
pub fn is_lorentz(m: Mat4, tolerance: f64) -> bool {
    for a in 0..4 {
        for b in 0..4 {
            let dot = lorentz_dot(mat4::get_column(m, a), mat4::get_column(m, b));
            if (dot - LORENTZ_FORM[a][b]).abs() > tolerance {
                return false;
            }
        }
    }
    true
}

/// Lorentz Gram-Schmidt on the columns of `m`.
///
/// Column 0 is scaled to form -1, then columns 1..3 are made orthogonal to
/// all previous columns and scaled to form +1. Returns an exact isometry
/// (up to rounding) close to `m` when `m` is a slightly drifted isometry.
/// Column 0 must be timelike.
pub fn orthonormalize(m: Mat4) -> Mat4 {
    let mut cols = [Vec4::ZERO; 4];

    for i in 0..4 {
        let mut v = mat4::get_column(m, i);
        for (j, basis) in cols.iter().enumerate().take(i) {
            // <basis, basis> is J[j][j] = +-1
            let coefficient = lorentz_dot(v, *basis) * LORENTZ_FORM[j][j];
            v = v - *basis * coefficient;
        }
        let norm = v.lorentz_form().abs().sqrt();
        cols[i] = v * (1.0 / norm);
    }

    cols.map(Vec4::to_array)
}
