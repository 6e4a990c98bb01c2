//! Minkowski 4-vector type
//!
//! Points of the hyperboloid model live in R^{1,3}. The `t` component is the
//! time coordinate (index 0 in every matrix of this crate), followed by the
//! spatial `x`, `y`, `z` components.

/// 4-vector in Minkowski space with signature (-, +, +, +)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec4 {
    pub t: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec4 {
    pub const ZERO: Self = Self { t: 0.0, x: 0.0, y: 0.0, z: 0.0 };
    /// Base point of the hyperboloid, also the unit time direction
    pub const ORIGIN: Self = Self { t: 1.0, x: 0.0, y: 0.0, z: 0.0 };
    pub const X: Self = Self { t: 0.0, x: 1.0, y: 0.0, z: 0.0 };
    pub const Y: Self = Self { t: 0.0, x: 0.0, y: 1.0, z: 0.0 };
    pub const Z: Self = Self { t: 0.0, x: 0.0, y: 0.0, z: 1.0 };

    /// Create a new Vec4
    #[inline]
    pub const fn new(t: f64, x: f64, y: f64, z: f64) -> Self {
        Self { t, x, y, z }
    }

    /// Build from an `[t, x, y, z]` array (a matrix column)
    #[inline]
    pub const fn from_array(a: [f64; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Components as `[t, x, y, z]`
    #[inline]
    pub const fn to_array(self) -> [f64; 4] {
        [self.t, self.x, self.y, self.z]
    }

    /// Lorentz inner product: -t*t' + x*x' + y*y' + z*z'
    #[inline]
    pub fn lorentz_dot(self, other: Self) -> f64 {
        -self.t * other.t + self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Lorentz quadratic form of the vector with itself
    ///
    /// Equals -1 for points on the hyperboloid sheet.
    #[inline]
    pub fn lorentz_form(self) -> f64 {
        self.lorentz_dot(self)
    }

    /// Spatial part as `[x, y, z]`
    #[inline]
    pub fn xyz(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

// Operator overloads

impl std::ops::Add for Vec4 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(
            self.t + other.t,
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
        )
    }
}

impl std::ops::Sub for Vec4 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.t - other.t,
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
        )
    }
}

impl std::ops::Mul<f64> for Vec4 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Self::new(
            self.t * scalar,
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
        )
    }
}

impl std::ops::Neg for Vec4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.t, -self.x, -self.y, -self.z)
    }
}
