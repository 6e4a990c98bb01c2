//! 4x4 matrix utilities for Lorentz transformations
//!
//! Matrices act on Minkowski 4-vectors `[t, x, y, z]`. Storage is
//! column-major (`m[col][row]`), so `m[0]` is the image of the time axis and
//! for an isometry of the hyperboloid it is the point the origin is moved to.

use crate::Vec4;

/// 4x4 matrix type (column-major, double precision)
pub type Mat4 = [[f64; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Create a rotation matrix in the plane spanned by two coordinate axes.
///
/// Rotates axis `p1` toward axis `p2` by `angle` radians and fixes the other
/// two coordinates. Only spatial planes (indices 1..=3) give Lorentz
/// isometries.
///
/// # Example
/// ```
/// use hypernav_math::mat4::plane_rotation;
/// // Rotation taking x toward y, i.e. about the z axis
/// let m = plane_rotation(0.5, 1, 2);
/// ```
pub fn plane_rotation(angle: f64, p1: usize, p2: usize) -> Mat4 {
    let cs = angle.cos();
    let sn = angle.sin();

    let mut m = IDENTITY;

    m[p1][p1] = cs;
    m[p2][p2] = cs;
    m[p1][p2] = sn;
    m[p2][p1] = -sn;

    m
}

/// Multiply two 4x4 matrices: result = a * b
///
/// Applying the result to a vector applies b first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f64; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Transform a Vec4 by a 4x4 matrix
///
/// result = M * v
pub fn transform(m: Mat4, v: Vec4) -> Vec4 {
    Vec4::new(
        m[0][0] * v.t + m[1][0] * v.x + m[2][0] * v.y + m[3][0] * v.z,
        m[0][1] * v.t + m[1][1] * v.x + m[2][1] * v.y + m[3][1] * v.z,
        m[0][2] * v.t + m[1][2] * v.x + m[2][2] * v.y + m[3][2] * v.z,
        m[0][3] * v.t + m[1][3] * v.x + m[2][3] * v.y + m[3][3] * v.z,
    )
}

/// Get a column vector from a matrix
pub fn get_column(m: Mat4, col: usize) -> Vec4 {
    Vec4::from_array(m[col])
}

/// Transpose a matrix
pub fn transpose(m: Mat4) -> Mat4 {
    [
        [m[0][0], m[1][0], m[2][0], m[3][0]],
        [m[0][1], m[1][1], m[2][1], m[3][1]],
        [m[0][2], m[1][2], m[2][2], m[3][2]],
        [m[0][3], m[1][3], m[2][3], m[3][3]],
    ]
}

/// Narrow to single precision for GPU upload
pub fn to_f32(m: Mat4) -> [[f32; 4]; 4] {
    m.map(|col| col.map(|v| v as f32))
}

/// Largest absolute entry-wise difference between two matrices
pub fn max_abs_diff(a: Mat4, b: Mat4) -> f64 {
    let mut diff = 0.0f64;
    for i in 0..4 {
        for j in 0..4 {
            diff = diff.max((a[i][j] - b[i][j]).abs());
        }
    }
    diff
}
