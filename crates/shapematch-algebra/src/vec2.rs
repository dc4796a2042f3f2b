//! Immutable 2D vector in double precision.
//!
//! Besides the usual component-wise arithmetic, [`Vec2`] treats itself as a complex number so that
//! a single vector can encode "rotate by θ and scale by r" as `(r·cos θ, r·sin θ)`. Composing such
//! an operator with a point is [`Vec2::cross`].

use serde::{Deserialize, Serialize};

/// A point or displacement in the plane.
///
/// Every operation returns a new value; operands are never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Vec2 {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Vec2 {
    /// Zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// The identity rotation, `1 + 0i`.
    pub const X: Self = Self { x: 1.0, y: 0.0 };

    /// Create a new vector from its components.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create a vector from an array.
    #[inline]
    pub fn from_array(arr: [f64; 2]) -> Self {
        let [x, y] = arr;
        Self { x, y }
    }

    /// Convert the vector to an array.
    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Unit vector pointing at `angle` radians from the positive x axis.
    #[inline]
    pub fn polar_unit(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(cos, sin)
    }

    /// Vector of length `magnitude` pointing at `angle` radians.
    #[inline]
    pub fn polar(angle: f64, magnitude: f64) -> Self {
        Self::polar_unit(angle).scale(magnitude)
    }

    /// Apply `f` to each component.
    #[inline]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y))
    }

    /// Combine the components of `self` and `rhs` pairwise with `f`.
    #[inline]
    pub fn zip(self, rhs: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self::new(f(self.x, rhs.x), f(self.y, rhs.y))
    }

    /// Multiply both components by `scalar`.
    #[inline]
    pub fn scale(self, scalar: f64) -> Self {
        let v: glam::DVec2 = self.into();
        Self::from(v * scalar)
    }

    /// Complex multiplication `self · rhs`.
    ///
    /// Reads as "rotate `self` by the angle of `rhs` and scale it by the length of `rhs`".
    ///
    /// ```
    /// use shapematch_algebra::Vec2;
    ///
    /// let quarter_turn = Vec2::new(0.0, 1.0);
    /// assert_eq!(Vec2::new(2.0, 0.0).cross(quarter_turn), Vec2::new(0.0, 2.0));
    /// ```
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        let a: glam::DVec2 = self.into();
        let b: glam::DVec2 = rhs.into();
        Self::from(a.rotate(b))
    }

    /// [`Vec2::cross`] performed about `origin` instead of the coordinate origin.
    #[inline]
    pub fn cross_around(self, origin: Self, rhs: Self) -> Self {
        (self - origin).cross(rhs) + origin
    }

    /// Rotate by `angle` radians counter-clockwise.
    #[inline]
    pub fn rotated(self, angle: f64) -> Self {
        self.cross(Self::polar_unit(angle))
    }

    /// Rotate by `angle` radians counter-clockwise about `origin`.
    #[inline]
    pub fn rotated_around(self, origin: Self, angle: f64) -> Self {
        self.cross_around(origin, Self::polar_unit(angle))
    }

    /// Unit vector with the same direction.
    ///
    /// The zero vector has no direction: the result is NaN.
    #[inline]
    pub fn normalized(self) -> Self {
        self.scale(1.0 / self.length())
    }

    /// Negate the angle while keeping the length, i.e. the complex conjugate.
    ///
    /// `v.cross(v.neg_argument())` is `(|v|², 0)`, which makes this the inverse of a rotation
    /// up to scale.
    #[inline]
    pub fn neg_argument(self) -> Self {
        Self::new(self.x, -self.y)
    }

    /// Squared euclidean length.
    #[inline]
    pub fn length_squared(self) -> f64 {
        let v: glam::DVec2 = self.into();
        v.length_squared()
    }

    /// Euclidean length (magnitude) of the vector.
    #[inline]
    pub fn length(self) -> f64 {
        let v: glam::DVec2 = self.into();
        v.length()
    }

    /// Dot product between two vectors.
    #[inline]
    pub fn dot(self, rhs: Self) -> f64 {
        let a: glam::DVec2 = self.into();
        let b: glam::DVec2 = rhs.into();
        a.dot(b)
    }

    /// Angle from the positive x axis in `[0, τ)`.
    #[inline]
    pub fn angle(self) -> f64 {
        crate::angle::wrap_angle(self.y.atan2(self.x))
    }

    /// Squared euclidean distance to `other`.
    #[inline]
    pub fn distance_squared(self, other: Self) -> f64 {
        (other - self).length_squared()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        (other - self).length()
    }
}

impl From<glam::DVec2> for Vec2 {
    #[inline]
    fn from(v: glam::DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Vec2> for glam::DVec2 {
    #[inline]
    fn from(v: Vec2) -> Self {
        glam::DVec2::new(v.x, v.y)
    }
}

impl From<[f64; 2]> for Vec2 {
    #[inline]
    fn from(arr: [f64; 2]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Vec2> for [f64; 2] {
    #[inline]
    fn from(v: Vec2) -> Self {
        v.to_array()
    }
}

impl From<(f64, f64)> for Vec2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.zip(rhs, |a, b| a + b)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.zip(rhs, |a, b| a - b)
    }
}

/// Component-wise product.
impl std::ops::Mul for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.zip(rhs, |a, b| a * b)
    }
}

/// Component-wise quotient. A zero divisor component yields NaN or infinity.
impl std::ops::Div for Vec2 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.zip(rhs, |a, b| a / b)
    }
}

impl std::ops::Mul<f64> for Vec2 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl std::ops::Mul<Vec2> for f64 {
    type Output = Vec2;

    #[inline]
    fn mul(self, rhs: Vec2) -> Self::Output {
        rhs.scale(self)
    }
}

impl std::ops::Div<f64> for Vec2 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        self.map(|c| c / rhs)
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_vec2_basic() {
        let v = Vec2::new(1.0, 2.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(Vec2::from_array([1.0, 2.0]).to_array(), [1.0, 2.0]);
        assert_eq!(Vec2::from((1.0, 2.0)), v);
    }

    #[test]
    fn test_vec2_arithmetic() {
        let v1 = Vec2::new(1.0, 2.0);
        let v2 = Vec2::new(3.0, 4.0);
        assert_eq!(v1 + v2, Vec2::new(4.0, 6.0));
        assert_eq!(v2 - v1, Vec2::new(2.0, 2.0));
        assert_eq!(v1 * v2, Vec2::new(3.0, 8.0));
        assert_eq!(v2 / v1, Vec2::new(3.0, 2.0));
        assert_eq!(v1 * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(2.0 * v1, Vec2::new(2.0, 4.0));
        assert_eq!(v2 / 2.0, Vec2::new(1.5, 2.0));
        assert_eq!(-v1, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn test_div_by_zero_component() {
        let v = Vec2::new(1.0, 0.0) / Vec2::new(0.0, 0.0);
        assert!(v.x.is_infinite());
        assert!(v.y.is_nan());
    }

    #[test]
    fn test_cross_is_complex_multiplication() {
        // (1 + 2i)(3 + 4i) = -5 + 10i
        let v = Vec2::new(1.0, 2.0).cross(Vec2::new(3.0, 4.0));
        assert_eq!(v, Vec2::new(-5.0, 10.0));
    }

    #[test]
    fn test_cross_with_neg_argument_cancels_rotation() {
        for v in [
            Vec2::new(3.0, 4.0),
            Vec2::new(-3.0, 4.0),
            Vec2::new(3.0, -4.0),
            Vec2::new(-3.0, -4.0),
        ] {
            let r = v.cross(v.neg_argument());
            assert_relative_eq!(r.x, 25.0);
            assert_relative_eq!(r.y, 0.0);
        }
    }

    #[test]
    fn test_rotated() {
        let v = Vec2::new(1.0, 0.0).rotated(FRAC_PI_2);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-12);

        let v = Vec2::new(2.0, 1.0).rotated_around(Vec2::new(1.0, 1.0), PI);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_polar() {
        let v = Vec2::polar(FRAC_PI_2, 3.0);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(v.y, 3.0, epsilon = 1e-12);
        assert_relative_eq!(v.angle(), FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(Vec2::new(0.0, -1.0).angle(), 1.5 * PI, epsilon = 1e-12);
    }

    #[test]
    fn test_length_and_distance() {
        let a = Vec2::new(1.0, 1.0);
        let b = Vec2::new(4.0, 5.0);
        assert_eq!((b - a).length(), 5.0);
        assert_eq!((b - a).length_squared(), 25.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.distance_squared(b), 25.0);
        assert_eq!(a.dot(b), 9.0);
    }

    #[test]
    fn test_normalized() {
        let v = Vec2::new(3.0, -4.0).normalized();
        assert_relative_eq!(v.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(v.x, 0.6, epsilon = 1e-12);
        assert_relative_eq!(v.y, -0.8, epsilon = 1e-12);

        let zero = Vec2::ZERO.normalized();
        assert!(zero.x.is_nan() && zero.y.is_nan());
    }

    #[test]
    fn test_serde_as_array() -> Result<(), Box<dyn std::error::Error>> {
        let v = Vec2::new(1.5, -2.0);
        let json = serde_json::to_string(&v)?;
        assert_eq!(json, "[1.5,-2.0]");
        let back: Vec2 = serde_json::from_str(&json)?;
        assert_eq!(back, v);
        Ok(())
    }
}
