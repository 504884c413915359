//! Property tests for the flattener over randomized control points.

use curvekit_core::Point;
use curvekit_geom::CubicBezier;
use proptest::prelude::*;

prop_compose! {
    fn arb_point()(x in -10_000.0..10_000.0f64, y in -10_000.0..10_000.0f64) -> Point {
        Point::new(x, y)
    }
}

prop_compose! {
    fn arb_curve()(
        p0 in arb_point(),
        p1 in arb_point(),
        p2 in arb_point(),
        p3 in arb_point(),
    ) -> CubicBezier {
        CubicBezier::new(p0, p1, p2, p3)
    }
}

proptest! {
    #[test]
    fn evaluation_hits_endpoints_exactly(curve in arb_curve()) {
        prop_assert_eq!(curve.point_at(0.0), curve.start());
        prop_assert_eq!(curve.point_at(1.0), curve.end());
    }

    #[test]
    fn flatten_preserves_endpoints(curve in arb_curve(), tol in 0.01..10.0f64) {
        prop_assume!(!curve.is_degenerate());
        let poly = curve.flatten(tol);
        prop_assert_eq!(poly.first().unwrap(), curve.start());
        prop_assert_eq!(poly.last().unwrap(), curve.end());
        prop_assert!(poly.len() >= 2);
    }

    #[test]
    fn flatten_output_is_finite_and_bounded(curve in arb_curve(), tol in 0.01..10.0f64) {
        let poly = curve.flatten(tol);
        for p in &poly.points {
            prop_assert!(p.is_finite());
        }
        // At most three monotonic pieces, each bounded by the vertex cap.
        prop_assert!(poly.len() <= 3 * 8200);
    }

    #[test]
    fn flatten_length_at_least_chord(curve in arb_curve(), tol in 0.01..10.0f64) {
        let poly = curve.flatten(tol);
        let chord = curve.start().distance_to(&curve.end());
        prop_assert!(poly.length() >= chord - 1e-6 * (1.0 + chord));
    }

    #[test]
    fn inflection_parameters_strictly_inside(curve in arb_curve()) {
        use curvekit_geom::InflectionPoints;
        match curve.find_inflection_points() {
            InflectionPoints::None => {}
            InflectionPoints::One(t) => prop_assert!(t > 0.0 && t < 1.0),
            InflectionPoints::Two(t1, t2) => {
                prop_assert!(t1 > 0.0 && t1 < 1.0);
                prop_assert!(t2 > 0.0 && t2 < 1.0);
                prop_assert!(t1 < t2);
            }
        }
    }

    #[test]
    fn validated_entry_accepts_valid_input(curve in arb_curve(), tol in 0.01..10.0f64) {
        prop_assert!(curve.try_flatten(tol).is_ok());
    }
}
