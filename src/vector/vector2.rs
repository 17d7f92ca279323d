//! Two-dimensional vector type
//!
//! Follows the same contract as [`Vector3`](super::Vector3): `op` returns a new
//! value, `op_local` mutates the receiver and returns it. There is no cross
//! product in 2D.

use std::fmt;

use super::operand::Operand2;
use crate::constants::{K_EPSILON, K_EPSILON_NORMAL_SQRT, RAD_TO_DEG};
use crate::mathf;

/// Two-dimensional vector with `f64` components
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);
    pub const ONE: Vector2 = Vector2::new(1.0, 1.0);
    pub const RIGHT: Vector2 = Vector2::new(1.0, 0.0);
    pub const UP: Vector2 = Vector2::new(0.0, 1.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Vector2 { x, y }
    }

    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Overwrites both components and returns the receiver for chaining
    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    #[inline]
    pub fn sqr_magnitude(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.sqr_magnitude().sqrt()
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(self, rhs: impl Into<Operand2>) -> Vector2 {
        let mut out = self;
        out.add_local(rhs);
        out
    }

    pub fn add_local(&mut self, rhs: impl Into<Operand2>) -> &mut Self {
        let (x, y) = rhs.into().components();
        self.x += x;
        self.y += y;
        self
    }

    pub fn subtract(self, rhs: impl Into<Operand2>) -> Vector2 {
        let mut out = self;
        out.subtract_local(rhs);
        out
    }

    pub fn subtract_local(&mut self, rhs: impl Into<Operand2>) -> &mut Self {
        let (x, y) = rhs.into().components();
        self.x -= x;
        self.y -= y;
        self
    }

    pub fn multiply(self, rhs: impl Into<Operand2>) -> Vector2 {
        let mut out = self;
        out.multiply_local(rhs);
        out
    }

    pub fn multiply_local(&mut self, rhs: impl Into<Operand2>) -> &mut Self {
        let (x, y) = rhs.into().components();
        self.x *= x;
        self.y *= y;
        self
    }

    /// Component-wise division; a zero divisor component yields zero
    pub fn divide(self, rhs: impl Into<Operand2>) -> Vector2 {
        let mut out = self;
        out.divide_local(rhs);
        out
    }

    pub fn divide_local(&mut self, rhs: impl Into<Operand2>) -> &mut Self {
        let (x, y) = rhs.into().components();
        self.x = mathf::divide_or_zero(self.x, x);
        self.y = mathf::divide_or_zero(self.y, y);
        self
    }

    pub fn dot(&self, rhs: impl Into<Operand2>) -> f64 {
        let (x, y) = rhs.into().components();
        self.x * x + self.y * y
    }

    /// Unit vector in the same direction, or zero below [`K_EPSILON`]
    pub fn normalize(self) -> Vector2 {
        let mut out = self;
        out.normalize_local();
        out
    }

    pub fn normalize_local(&mut self) -> &mut Self {
        let mag = self.magnitude();
        if mag < K_EPSILON {
            self.set(0.0, 0.0)
        } else {
            self.divide_local((mag, mag))
        }
    }

    /// Exact component-wise comparison
    pub fn equals(&self, rhs: impl Into<Operand2>) -> bool {
        let (x, y) = rhs.into().components();
        self.x == x && self.y == y
    }

    pub fn equals_option(&self, rhs: Option<&Vector2>) -> bool {
        rhs.is_some_and(|other| self.equals(other))
    }

    pub fn distance(a: &Vector2, b: &Vector2) -> f64 {
        a.subtract(b).magnitude()
    }

    /// Interpolates between `a` and `b` with `t` clamped to `[0, 1]`
    pub fn lerp(a: &Vector2, b: &Vector2, t: f64) -> Vector2 {
        Self::lerp_with_clamp(a, b, t, true)
    }

    pub fn lerp_with_clamp(a: &Vector2, b: &Vector2, t: f64, clamp: bool) -> Vector2 {
        if clamp {
            let t = mathf::clamp01(t);
            Vector2::new(mathf::lerp(a.x, b.x, t), mathf::lerp(a.y, b.y, t))
        } else {
            Vector2::new(
                mathf::lerp_unclamped(a.x, b.x, t),
                mathf::lerp_unclamped(a.y, b.y, t),
            )
        }
    }

    /// Unsigned angle in radians; 0 if either vector is (near) zero length
    pub fn angle_rad(from: &Vector2, to: &Vector2) -> f64 {
        let denominator = (from.sqr_magnitude() * to.sqr_magnitude()).sqrt();
        if denominator.abs() < K_EPSILON_NORMAL_SQRT {
            return 0.0;
        }

        mathf::clamp(from.dot(to) / denominator, -1.0, 1.0).acos()
    }

    /// Unsigned angle in degrees
    pub fn angle(from: &Vector2, to: &Vector2) -> f64 {
        Self::angle_rad(from, to) * RAD_TO_DEG
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.x, self.y)
    }
}

impl std::ops::Add for Vector2 {
    type Output = Vector2;

    fn add(self, other: Vector2) -> Vector2 {
        Vector2::add(self, other)
    }
}

impl std::ops::Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, other: Vector2) -> Vector2 {
        self.subtract(other)
    }
}

impl std::ops::Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, scalar: f64) -> Vector2 {
        self.multiply((scalar, scalar))
    }
}

impl std::ops::Div<f64> for Vector2 {
    type Output = Vector2;

    fn div(self, scalar: f64) -> Vector2 {
        self.divide((scalar, scalar))
    }
}

impl std::ops::Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl std::ops::AddAssign for Vector2 {
    fn add_assign(&mut self, other: Vector2) {
        self.add_local(other);
    }
}

impl std::ops::SubAssign for Vector2 {
    fn sub_assign(&mut self, other: Vector2) {
        self.subtract_local(other);
    }
}

impl From<nalgebra::Vector2<f64>> for Vector2 {
    fn from(vec: nalgebra::Vector2<f64>) -> Self {
        Vector2::new(vec.x, vec.y)
    }
}

impl From<Vector2> for nalgebra::Vector2<f64> {
    fn from(v: Vector2) -> Self {
        nalgebra::Vector2::new(v.x, v.y)
    }
}
