//! Behavioral properties shared by `Vector2` and `Vector3`

use approx::{assert_abs_diff_eq, assert_relative_eq};
use gamemath::{mathf, Vector2, Vector3};
use rstest::rstest;
use std::f64::consts::PI;

fn sample_vectors() -> Vec<Vector3> {
    vec![
        Vector3::ZERO,
        Vector3::ONE,
        Vector3::new(1.5, -2.25, 3.0),
        Vector3::new(-100.0, 0.001, 42.0),
        Vector3::new(1e-7, 0.0, -1e-7),
    ]
}

#[test]
fn clone_equals_and_is_independent() {
    for v in sample_vectors() {
        let mut c = v;
        assert!(c.equals(v));
        c.add_local((1.0, 1.0, 1.0));
        assert!(!v.equals(c), "mutating the copy of {} leaked", v);
    }
}

#[test]
fn return_new_operations_never_touch_receiver() {
    let rhs = Vector3::new(2.0, 0.0, -4.0);
    for v in sample_vectors() {
        let before = v;
        let _ = v.add(rhs);
        let _ = v.subtract(rhs);
        let _ = v.multiply(rhs);
        let _ = v.divide(rhs);
        let _ = v.cross(rhs);
        let _ = v.normalize();
        assert_eq!(v, before);
    }
}

#[test]
fn local_operations_return_the_receiver() {
    let rhs = Vector3::new(2.0, 0.0, -4.0);
    for v in sample_vectors() {
        let mut target = v;
        let expected = v.cross(rhs);
        let returned = *target.cross_local(rhs);
        assert_eq!(returned, expected);
        assert_eq!(target, expected);

        let mut target = v;
        let expected = v.divide(rhs);
        let returned = *target.divide_local(rhs);
        assert_eq!(returned, target);
        assert_eq!(target, expected);
    }
}

#[rstest]
#[case(Vector3::new(1.0, 2.0, 3.0), (0.0, 1.0, 1.0), Vector3::new(0.0, 2.0, 3.0))]
#[case(Vector3::new(1.0, 2.0, 3.0), (0.0, 0.0, 0.0), Vector3::ZERO)]
#[case(Vector3::new(-4.0, 9.0, 0.0), (2.0, 0.0, 0.0), Vector3::new(-2.0, 0.0, 0.0))]
fn divide_by_zero_component_is_zero(
    #[case] v: Vector3,
    #[case] divisor: (f64, f64, f64),
    #[case] expected: Vector3,
) {
    let result = v.divide(divisor);
    assert_eq!(result, expected);
    assert!(result.x.is_finite() && result.y.is_finite() && result.z.is_finite());
}

#[test]
fn degenerate_normalization() {
    assert_eq!(Vector3::ZERO.normalize(), Vector3::ZERO);
    assert_eq!(Vector2::ZERO.normalize(), Vector2::ZERO);

    let n = Vector3::new(0.0, 0.0, 0.0).normalize();
    assert!(!n.x.is_nan() && !n.y.is_nan() && !n.z.is_nan());
}

#[test]
fn axis_products_and_angles() {
    assert_eq!(Vector3::RIGHT.dot(Vector3::UP), 0.0);
    assert_relative_eq!(Vector3::angle(&Vector3::RIGHT, &Vector3::UP), 90.0, epsilon = 1e-12);
    assert_relative_eq!(Vector3::angle_rad(&Vector3::RIGHT, &Vector3::UP), PI / 2.0);
    assert_eq!(Vector3::RIGHT.cross(Vector3::UP), Vector3::FORWARD);
}

#[rstest]
#[case(Vector3::new(1.0, 0.0, 0.0), Vector3::new(1.0, 1.0, 0.0), 45.0)]
#[case(Vector3::new(1.0, 0.0, 0.0), Vector3::new(-1.0, 0.0, 0.0), 180.0)]
#[case(Vector3::new(0.0, 3.0, 0.0), Vector3::new(0.0, 0.0, -7.0), 90.0)]
#[case(Vector3::new(2.0, 2.0, 2.0), Vector3::new(5.0, 5.0, 5.0), 0.0)]
#[case(Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 2.0, 3.0), 0.0)]
fn angle_degrees(#[case] from: Vector3, #[case] to: Vector3, #[case] expected: f64) {
    assert_abs_diff_eq!(Vector3::angle(&from, &to), expected, epsilon = 1e-6);
    assert_abs_diff_eq!(Vector3::angle(&to, &from), expected, epsilon = 1e-6);
}

#[test]
fn nearly_parallel_vectors_stay_in_acos_domain() {
    let a = Vector3::new(0.1, 0.2, 0.3);
    let b = a * 3.0;
    let angle = Vector3::angle_rad(&a, &b);
    assert!(!angle.is_nan());
    assert_abs_diff_eq!(angle, 0.0, epsilon = 1e-7);
}

#[rstest]
#[case(-3.0)]
#[case(-0.5)]
#[case(0.0)]
#[case(0.3)]
#[case(1.0)]
#[case(7.5)]
fn clamped_lerp_stays_on_segment(#[case] t: f64) {
    let a = Vector3::new(-1.0, 5.0, 2.0);
    let b = Vector3::new(3.0, -5.0, 2.0);
    let p = Vector3::lerp(&a, &b, t);

    for (pc, ac, bc) in [(p.x, a.x, b.x), (p.y, a.y, b.y), (p.z, a.z, b.z)] {
        assert!(pc >= ac.min(bc) && pc <= ac.max(bc), "t={} left segment", t);
    }
}

#[test]
fn lerp_endpoints() {
    for a in sample_vectors() {
        for b in sample_vectors() {
            assert_eq!(Vector3::lerp(&a, &b, 0.0), a);
            let end = Vector3::lerp(&a, &b, 1.0);
            assert_abs_diff_eq!(end.x, b.x, epsilon = 1e-12);
            assert_abs_diff_eq!(end.y, b.y, epsilon = 1e-12);
            assert_abs_diff_eq!(end.z, b.z, epsilon = 1e-12);
        }
    }

    let a = Vector2::new(-2.0, 8.0);
    let b = Vector2::new(6.0, 0.5);
    assert_eq!(Vector2::lerp(&a, &b, 0.0), a);
    assert_eq!(Vector2::lerp(&a, &b, 1.0), b);
}

#[test]
fn unclamped_lerp_extrapolates() {
    let a = Vector2::new(0.0, 0.0);
    let b = Vector2::new(1.0, 2.0);
    assert_eq!(Vector2::lerp_with_clamp(&a, &b, 3.0, false), Vector2::new(3.0, 6.0));
    assert_eq!(Vector2::lerp_with_clamp(&a, &b, 3.0, true), b);
}

#[test]
fn operand_forms_agree() {
    let v = Vector3::new(1.0, 2.0, 3.0);
    let rhs = Vector3::new(4.0, 5.0, 6.0);
    let via_vector = v.multiply(rhs);
    assert_eq!(v.multiply((4.0, 5.0, 6.0)), via_vector);
    assert_eq!(v.multiply([4.0, 5.0, 6.0]), via_vector);
    assert_eq!(v.multiply(&rhs), via_vector);
    assert_eq!(v.multiply(nalgebra::Vector3::new(4.0, 5.0, 6.0)), via_vector);
}

#[rstest]
#[case(7.0, 5.0, 2.0, 3.0)]
#[case(7.0, 10.0, 7.0, 7.0)]
#[case(0.0, 4.0, 0.0, 0.0)]
#[case(-1.0, 4.0, 3.0, 1.0)]
fn scalar_wrapping(
    #[case] t: f64,
    #[case] length: f64,
    #[case] repeated: f64,
    #[case] ponged: f64,
) {
    assert_eq!(mathf::repeat(t, length), repeated);
    assert_eq!(mathf::ping_pong(t, length), ponged);
}

#[test]
fn inverse_lerp_degenerate_bounds() {
    assert_eq!(mathf::inverse_lerp(5.0, 5.0, 7.0), 0.0);
}

#[test]
fn display_formats() {
    assert_eq!(Vector3::new(1.0, 0.5, -2.0).to_string(), "1_0.5_-2");
    assert_eq!(Vector2::new(-0.25, 3.0).to_string(), "-0.25_3");
}
