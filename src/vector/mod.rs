//! 2D and 3D vector value types
//!
//! [`Vector2`] and [`Vector3`] are independent, parallel implementations; they
//! share only the scalar helpers in [`crate::mathf`].

pub mod operand;
pub mod vector2;
pub mod vector3;

pub use operand::{Operand2, Operand3};
pub use vector2::Vector2;
pub use vector3::Vector3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_vectors_degrade_consistently() {
        // Both types collapse degenerate inputs the same way
        assert_eq!(Vector2::ZERO.normalize(), Vector2::ZERO);
        assert_eq!(Vector3::ZERO.normalize(), Vector3::ZERO);
        assert_eq!(Vector2::angle(&Vector2::ZERO, &Vector2::ZERO), 0.0);
        assert_eq!(Vector3::angle(&Vector3::ZERO, &Vector3::ZERO), 0.0);
    }

    #[test]
    fn test_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<Vector2>();
        assert_send_sync::<Vector3>();
    }
}
