//! gamemath: vector, scalar and incremental-cost math for simulations and games
//!
//! This crate provides 2D and 3D vector value types with arithmetic,
//! normalization, interpolation and angle operations, scalar helpers such as
//! clamp, repeat and ping-pong, and a geometric-growth cost formula for
//! incremental pricing.
//!
//! ```rust
//! use gamemath::{mathf, Vector2, Vector3};
//!
//! let heading = Vector3::new(0.0, 0.0, 2.0).normalize();
//! assert_eq!(heading, Vector3::FORWARD);
//!
//! let mid = Vector2::lerp(&Vector2::ZERO, &Vector2::new(4.0, 2.0), 0.5);
//! assert_eq!(mid, Vector2::new(2.0, 1.0));
//!
//! assert_eq!(mathf::ping_pong(7.0, 5.0), 3.0);
//! ```

pub mod constants;
pub mod costs;
pub mod errors;
pub mod mathf;
pub mod vector;

// Re-export commonly used types
pub use costs::{CostData, CostError};
pub use errors::{GameMathError, Result};
pub use vector::{Operand2, Operand3, Vector2, Vector3};
