//! # Scalar Math Module
//!
//! Stateless helpers shared by [`Vector2`](crate::vector::Vector2) and
//! [`Vector3`](crate::vector::Vector3). Every interpolation and angle routine
//! on the vector types goes through these functions so both types clamp and
//! round at the same boundaries.
//!
//! None of these functions fail. NaN and infinite inputs propagate through the
//! arithmetic unchanged.
//!
//! ## Examples
//!
//! ```rust
//! use gamemath::mathf;
//!
//! assert_eq!(mathf::clamp(12.0, 0.0, 10.0), 10.0);
//! assert_eq!(mathf::repeat(7.0, 5.0), 2.0);
//! assert_eq!(mathf::ping_pong(7.0, 5.0), 3.0);
//! assert_eq!(mathf::lerp(0.0, 10.0, 0.25), 2.5);
//! ```

pub use crate::constants::{DEG_TO_RAD, RAD_TO_DEG};
use crate::constants::{APPROX_ABSOLUTE, APPROX_RELATIVE};

/// Clamps `value` between `min` and `max`
///
/// Values below `min` return `min`, values above `max` return `max`.
/// The bounds are not reordered; callers pass `min <= max`.
///
/// # Examples
///
/// ```rust
/// use gamemath::mathf::clamp;
///
/// assert_eq!(clamp(-1.5, -1.0, 1.0), -1.0);
/// assert_eq!(clamp(0.3, -1.0, 1.0), 0.3);
/// ```
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamps `value` into `[0, 1]`
#[inline]
pub fn clamp01(value: f64) -> f64 {
    clamp(value, 0.0, 1.0)
}

/// Loops `t` so that it is never larger than `length` and never smaller than 0
///
/// Computes `t - floor(t / length) * length` and clamps the result into
/// `[0, length]` to absorb floating-point drift at the boundary.
///
/// # Examples
///
/// ```rust
/// use gamemath::mathf::repeat;
///
/// assert_eq!(repeat(7.0, 5.0), 2.0);
/// assert_eq!(repeat(-1.0, 5.0), 4.0);
/// ```
pub fn repeat(t: f64, length: f64) -> f64 {
    clamp(t - (t / length).floor() * length, 0.0, length)
}

/// Bounces `t` back and forth between 0 and `length`
///
/// A triangle wave with period `2 * length`.
///
/// # Examples
///
/// ```rust
/// use gamemath::mathf::ping_pong;
///
/// assert_eq!(ping_pong(3.0, 5.0), 3.0);
/// assert_eq!(ping_pong(7.0, 5.0), 3.0);
/// assert_eq!(ping_pong(10.0, 5.0), 0.0);
/// ```
pub fn ping_pong(t: f64, length: f64) -> f64 {
    let t = repeat(t, length * 2.0);
    length - (t - length).abs()
}

/// Interpolates between `a` and `b` by `t`, with `t` clamped to `[0, 1]`
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * clamp01(t)
}

/// Interpolates between `a` and `b` by `t` without clamping
///
/// Values of `t` outside `[0, 1]` extrapolate past the endpoints.
#[inline]
pub fn lerp_unclamped(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Calculates the [`lerp`] parameter that produces `value` between `a` and `b`
///
/// The result is clamped to `[0, 1]`. Equal bounds are a degenerate range and
/// always return 0.
///
/// # Examples
///
/// ```rust
/// use gamemath::mathf::inverse_lerp;
///
/// assert_eq!(inverse_lerp(0.0, 10.0, 2.5), 0.25);
/// assert_eq!(inverse_lerp(5.0, 5.0, 7.0), 0.0);
/// ```
pub fn inverse_lerp(a: f64, b: f64, value: f64) -> f64 {
    if a != b {
        clamp01((value - a) / (b - a))
    } else {
        0.0
    }
}

/// Divides `value` by `divisor`, yielding 0 when `divisor` is zero
///
/// Used for component-wise vector division. A NaN divisor is not zero and
/// propagates.
#[inline]
pub fn divide_or_zero(value: f64, divisor: f64) -> f64 {
    if divisor != 0.0 {
        value / divisor
    } else {
        0.0
    }
}

/// Compares two floats with a tolerance scaled to their magnitude
pub fn approximately(a: f64, b: f64) -> bool {
    (b - a).abs() < (APPROX_RELATIVE * a.abs().max(b.abs())).max(APPROX_ABSOLUTE)
}
