//! # Three-Dimensional Vector Module
//!
//! `Vector3` is a plain `f64` value type for positions, directions and
//! velocities in simulation and animation code.
//!
//! ## Mutation Contract
//!
//! Each arithmetic operation comes in two forms:
//! - `op(self, rhs) -> Vector3` returns a new value and leaves the receiver untouched
//! - `op_local(&mut self, rhs) -> &mut Vector3` overwrites the receiver and returns it,
//!   so in-place updates can be chained without temporaries
//!
//! ## Operands
//!
//! Binary operations accept anything convertible to [`Operand3`]: a `(x, y, z)`
//! tuple, a `[f64; 3]`, another `Vector3` (by value or reference), or a
//! `nalgebra::Vector3<f64>`.
//!
//! ## Degenerate Inputs
//!
//! Nothing here fails. Dividing by a zero component yields zero for that
//! component, normalizing a vector shorter than [`K_EPSILON`] yields the zero
//! vector, and the angle involving a zero-length vector is zero.
//!
//! ## Examples
//!
//! ```rust
//! use gamemath::Vector3;
//!
//! let mut position = Vector3::new(1.0, 2.0, 3.0);
//!
//! // Return-new form: position is unchanged
//! let moved = position.add((1.0, 0.0, 0.0));
//! assert_eq!(moved, Vector3::new(2.0, 2.0, 3.0));
//! assert_eq!(position, Vector3::new(1.0, 2.0, 3.0));
//!
//! // In-place form, chained
//! position.add_local(Vector3::ONE).multiply_local((2.0, 2.0, 2.0));
//! assert_eq!(position, Vector3::new(4.0, 6.0, 8.0));
//! ```

use std::fmt;

use super::operand::Operand3;
use crate::constants::{K_EPSILON, K_EPSILON_NORMAL_SQRT, RAD_TO_DEG};
use crate::mathf;

/// Three-dimensional vector with `f64` components
///
/// Equality is exact, component-wise value equality. No invariant constrains
/// the components; NaN and infinities are carried through arithmetic as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector3 {
    /// X-component
    pub x: f64,
    /// Y-component
    pub y: f64,
    /// Z-component
    pub z: f64,
}

impl Vector3 {
    /// `(0, 0, 0)`
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);
    /// `(1, 1, 1)`
    pub const ONE: Vector3 = Vector3::new(1.0, 1.0, 1.0);
    /// `(1, 0, 0)`
    pub const RIGHT: Vector3 = Vector3::new(1.0, 0.0, 0.0);
    /// `(0, 1, 0)`
    pub const UP: Vector3 = Vector3::new(0.0, 1.0, 0.0);
    /// `(0, 0, 1)`
    pub const FORWARD: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    /// Creates a new vector from its components
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamemath::Vector3;
    ///
    /// let v = Vector3::new(1.0, 2.0, 3.0);
    /// assert_eq!(v.x, 1.0);
    /// assert_eq!(v.y, 2.0);
    /// assert_eq!(v.z, 3.0);
    /// ```
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// Creates the zero vector
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Overwrites all three components and returns the receiver for chaining
    pub fn set(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    /// Squared length, `x² + y² + z²`
    ///
    /// Cheaper than [`magnitude`](Self::magnitude) when only comparing lengths.
    #[inline]
    pub fn sqr_magnitude(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean length of the vector
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamemath::Vector3;
    ///
    /// assert_eq!(Vector3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
    /// ```
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.sqr_magnitude().sqrt()
    }

    /// Returns `self + rhs` component-wise
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, rhs: impl Into<Operand3>) -> Vector3 {
        let mut out = self;
        out.add_local(rhs);
        out
    }

    /// Adds `rhs` to the receiver in place
    pub fn add_local(&mut self, rhs: impl Into<Operand3>) -> &mut Self {
        let (x, y, z) = rhs.into().components();
        self.x += x;
        self.y += y;
        self.z += z;
        self
    }

    /// Returns `self - rhs` component-wise
    pub fn subtract(self, rhs: impl Into<Operand3>) -> Vector3 {
        let mut out = self;
        out.subtract_local(rhs);
        out
    }

    /// Subtracts `rhs` from the receiver in place
    pub fn subtract_local(&mut self, rhs: impl Into<Operand3>) -> &mut Self {
        let (x, y, z) = rhs.into().components();
        self.x -= x;
        self.y -= y;
        self.z -= z;
        self
    }

    /// Returns the component-wise product `self * rhs`
    pub fn multiply(self, rhs: impl Into<Operand3>) -> Vector3 {
        let mut out = self;
        out.multiply_local(rhs);
        out
    }

    /// Multiplies the receiver by `rhs` component-wise in place
    pub fn multiply_local(&mut self, rhs: impl Into<Operand3>) -> &mut Self {
        let (x, y, z) = rhs.into().components();
        self.x *= x;
        self.y *= y;
        self.z *= z;
        self
    }

    /// Returns the component-wise quotient `self / rhs`
    ///
    /// A zero divisor component produces zero in that component instead of
    /// an infinity or NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamemath::Vector3;
    ///
    /// let v = Vector3::new(4.0, 6.0, 8.0).divide((2.0, 0.0, 4.0));
    /// assert_eq!(v, Vector3::new(2.0, 0.0, 2.0));
    /// ```
    pub fn divide(self, rhs: impl Into<Operand3>) -> Vector3 {
        let mut out = self;
        out.divide_local(rhs);
        out
    }

    /// Divides the receiver by `rhs` component-wise in place
    ///
    /// Same zero-divisor rule as [`divide`](Self::divide).
    pub fn divide_local(&mut self, rhs: impl Into<Operand3>) -> &mut Self {
        let (x, y, z) = rhs.into().components();
        self.x = mathf::divide_or_zero(self.x, x);
        self.y = mathf::divide_or_zero(self.y, y);
        self.z = mathf::divide_or_zero(self.z, z);
        self
    }

    /// Dot product, `x₁*x₂ + y₁*y₂ + z₁*z₂`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamemath::Vector3;
    ///
    /// assert_eq!(Vector3::RIGHT.dot(Vector3::UP), 0.0);
    /// assert_eq!(Vector3::new(1.0, 2.0, 3.0).dot((4.0, 5.0, 6.0)), 32.0);
    /// ```
    pub fn dot(&self, rhs: impl Into<Operand3>) -> f64 {
        let (x, y, z) = rhs.into().components();
        self.x * x + self.y * y + self.z * z
    }

    /// Returns the cross product `self × rhs`
    ///
    /// # Mathematical Formula
    ///
    /// ```text
    /// cross = (y₁*z₂ - z₁*y₂, z₁*x₂ - x₁*z₂, x₁*y₂ - y₁*x₂)
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamemath::Vector3;
    ///
    /// assert_eq!(Vector3::RIGHT.cross(Vector3::UP), Vector3::FORWARD);
    /// ```
    pub fn cross(self, rhs: impl Into<Operand3>) -> Vector3 {
        let mut out = self;
        out.cross_local(rhs);
        out
    }

    /// Replaces the receiver with `self × rhs`
    pub fn cross_local(&mut self, rhs: impl Into<Operand3>) -> &mut Self {
        let (x, y, z) = rhs.into().components();
        let cx = self.y * z - self.z * y;
        let cy = self.z * x - self.x * z;
        let cz = self.x * y - self.y * x;
        self.set(cx, cy, cz)
    }

    /// Returns a unit vector in the same direction
    ///
    /// Vectors shorter than [`K_EPSILON`] normalize to the zero vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamemath::Vector3;
    ///
    /// let unit = Vector3::new(3.0, 4.0, 0.0).normalize();
    /// assert!((unit.magnitude() - 1.0).abs() < 1e-15);
    /// assert_eq!(Vector3::ZERO.normalize(), Vector3::ZERO);
    /// ```
    pub fn normalize(self) -> Vector3 {
        let mut out = self;
        out.normalize_local();
        out
    }

    /// Normalizes the receiver in place
    pub fn normalize_local(&mut self) -> &mut Self {
        let mag = self.magnitude();
        if mag < K_EPSILON {
            self.set(0.0, 0.0, 0.0)
        } else {
            self.divide_local((mag, mag, mag))
        }
    }

    /// Exact component-wise comparison against any operand form
    pub fn equals(&self, rhs: impl Into<Operand3>) -> bool {
        let (x, y, z) = rhs.into().components();
        self.x == x && self.y == y && self.z == z
    }

    /// Like [`equals`](Self::equals), with an absent operand comparing unequal
    pub fn equals_option(&self, rhs: Option<&Vector3>) -> bool {
        rhs.is_some_and(|other| self.equals(other))
    }

    /// Distance between two points
    pub fn distance(a: &Vector3, b: &Vector3) -> f64 {
        a.subtract(b).magnitude()
    }

    /// Interpolates between `a` and `b`, with `t` clamped to `[0, 1]`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamemath::Vector3;
    ///
    /// let a = Vector3::ZERO;
    /// let b = Vector3::new(10.0, 20.0, 30.0);
    /// assert_eq!(Vector3::lerp(&a, &b, 0.5), Vector3::new(5.0, 10.0, 15.0));
    /// assert_eq!(Vector3::lerp(&a, &b, 3.0), b);
    /// ```
    pub fn lerp(a: &Vector3, b: &Vector3, t: f64) -> Vector3 {
        Self::lerp_with_clamp(a, b, t, true)
    }

    /// Interpolates between `a` and `b`, optionally extrapolating
    ///
    /// With `clamp` false, `t` outside `[0, 1]` extends past the endpoints.
    pub fn lerp_with_clamp(a: &Vector3, b: &Vector3, t: f64, clamp: bool) -> Vector3 {
        if clamp {
            let t = mathf::clamp01(t);
            Vector3::new(
                mathf::lerp(a.x, b.x, t),
                mathf::lerp(a.y, b.y, t),
                mathf::lerp(a.z, b.z, t),
            )
        } else {
            Vector3::new(
                mathf::lerp_unclamped(a.x, b.x, t),
                mathf::lerp_unclamped(a.y, b.y, t),
                mathf::lerp_unclamped(a.z, b.z, t),
            )
        }
    }

    /// Unsigned angle between two vectors in radians, in `[0, π]`
    ///
    /// Returns 0 when either vector has (near) zero length. The cosine is
    /// clamped to `[-1, 1]` before `acos`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gamemath::Vector3;
    /// use std::f64::consts::PI;
    ///
    /// let angle = Vector3::angle_rad(&Vector3::RIGHT, &Vector3::UP);
    /// assert!((angle - PI / 2.0).abs() < 1e-15);
    /// ```
    pub fn angle_rad(from: &Vector3, to: &Vector3) -> f64 {
        // sqrt(a) * sqrt(b) == sqrt(a * b) for non-negative a, b
        let denominator = (from.sqr_magnitude() * to.sqr_magnitude()).sqrt();
        if denominator.abs() < K_EPSILON_NORMAL_SQRT {
            return 0.0;
        }

        let cos = mathf::clamp(from.dot(to) / denominator, -1.0, 1.0);
        cos.acos()
    }

    /// Unsigned angle between two vectors in degrees, in `[0, 180]`
    pub fn angle(from: &Vector3, to: &Vector3) -> f64 {
        Self::angle_rad(from, to) * RAD_TO_DEG
    }
}

impl fmt::Display for Vector3 {
    /// Debugging form `x_y_z`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.x, self.y, self.z)
    }
}

// Operator forms for convenience
impl std::ops::Add for Vector3 {
    type Output = Vector3;

    fn add(self, other: Vector3) -> Vector3 {
        Vector3::add(self, other)
    }
}

impl std::ops::Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, other: Vector3) -> Vector3 {
        self.subtract(other)
    }
}

impl std::ops::Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, scalar: f64) -> Vector3 {
        self.multiply((scalar, scalar, scalar))
    }
}

impl std::ops::Div<f64> for Vector3 {
    type Output = Vector3;

    fn div(self, scalar: f64) -> Vector3 {
        self.divide((scalar, scalar, scalar))
    }
}

impl std::ops::Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl std::ops::AddAssign for Vector3 {
    fn add_assign(&mut self, other: Vector3) {
        self.add_local(other);
    }
}

impl std::ops::SubAssign for Vector3 {
    fn sub_assign(&mut self, other: Vector3) {
        self.subtract_local(other);
    }
}

impl From<nalgebra::Vector3<f64>> for Vector3 {
    fn from(vec: nalgebra::Vector3<f64>) -> Self {
        Vector3::new(vec.x, vec.y, vec.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<f64> {
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}
