use super::*;

fn round(value: f64) -> f64 {
    (value * 1000.).round() / 1000.
}

#[test]
fn can_calculate_distance_between_points() {
    let a = Point::new(3., 2.);
    let b = Point::new(9., 7.);

    assert_eq!(round(distance(&a, &b)), 7.81);
    assert_eq!(distance(&a, &b), distance(&b, &a));
}

#[test]
fn can_return_zero_distance_for_same_point() {
    let a = Point::new(-4., 12.5);

    assert_eq!(distance(&a, &a.clone()), 0.);
}

#[test]
fn can_compare_points_numerically() {
    let origin = Point::new(0., 0.);
    let negative_origin = Point::new(-0., 0.);

    assert_eq!(distance(&origin, &negative_origin), 0.);
    assert_eq!(origin, negative_origin);
    assert_ne!(origin, Point::new(0., 1e-9));
}

parameterized_test! {can_detect_finite_points, (x, y, expected), {
    assert_eq!(Point::new(x, y).is_finite(), expected);
}}

can_detect_finite_points! {
    case01: (0., 0., true),
    case02: (f64::NAN, 0., false),
    case03: (0., f64::INFINITY, false),
    case04: (-1e9, 1e9, true),
}
