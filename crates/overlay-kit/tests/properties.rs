//! Property tests for envelope padding, dimension algebra and the emptiness oracle.

use overlay_kit::prelude::*;
use overlay_kit::util::{expand_distance, is_env_disjoint};
use proptest::prelude::*;

fn rect(env: Envelope) -> Geometry {
    Geometry::Polygon(Polygon::from_envelope(&env))
}

fn envelope() -> impl Strategy<Value = Envelope> {
    (-1e3..1e3f64, -1e3..1e3f64, 0.0..50.0f64, 0.0..50.0f64)
        .prop_map(|(x, y, w, h)| Envelope::new(x, x + w, y, y + h))
}

fn precision() -> impl Strategy<Value = PrecisionModel> {
    prop_oneof![
        Just(PrecisionModel::Floating),
        (0.01..1e4f64).prop_map(|s| PrecisionModel::fixed(s).unwrap()),
    ]
}

fn dimension() -> impl Strategy<Value = Dimension> {
    prop_oneof![
        Just(Dimension::Point),
        Just(Dimension::Curve),
        Just(Dimension::Surface),
    ]
}

fn op_code() -> impl Strategy<Value = OpCode> {
    prop::sample::select(OpCode::ALL.to_vec())
}

proptest! {
    #[test]
    fn safe_envelope_contains_input(env in envelope(), pm in precision()) {
        let safe = safe_overlap_envelope(&env, &pm);
        prop_assert!(safe.contains_env(&env));
        let d = expand_distance(&env, &pm);
        prop_assert!(d >= 0.0);
        let tol = 1e-9 * (1.0 + env.min_x().abs().max(env.max_x().abs()));
        prop_assert!(((safe.width() - env.width()) - 2.0 * d).abs() <= 2.0 * tol);
        prop_assert!(((safe.height() - env.height()) - 2.0 * d).abs() <= 2.0 * tol);
    }

    #[test]
    fn margin_formula(env in envelope(), scale in 0.01..1e4f64) {
        let floating = expand_distance(&env, &PrecisionModel::Floating);
        prop_assert_eq!(floating, 0.1 * env.height().min(env.width()));
        let pm = PrecisionModel::fixed(scale).unwrap();
        prop_assert_eq!(expand_distance(&env, &pm), 3.0 * (1.0 / scale));
    }

    #[test]
    fn dimension_algebra(d0 in dimension(), d1 in dimension()) {
        prop_assert_eq!(result_dimension(OpCode::Union, d0, d1), d0.max(d1));
        prop_assert_eq!(result_dimension(OpCode::Intersection, d0, d1), d0.min(d1));
        prop_assert_eq!(result_dimension(OpCode::Difference, d0, d1), d0);
        prop_assert_eq!(result_dimension(OpCode::SymDifference, d0, d1), d0.max(d1));
    }

    #[test]
    fn empty_result_has_requested_dimension(d in dimension()) {
        let g = create_empty_result(d, &GeometryFactory);
        prop_assert!(g.is_empty());
        prop_assert_eq!(g.dimension(), d);
    }

    /// Overlapping raw envelopes are never reported disjoint, at any precision:
    /// rounding is monotone, so an overlap survives it.
    #[test]
    fn overlapping_envelopes_never_trivially_empty(
        a in envelope(),
        dx in 0.0..1.0f64,
        dy in 0.0..1.0f64,
        pm in precision(),
    ) {
        // b starts inside a, so the boxes overlap
        let bx = a.min_x() + dx * a.width();
        let by = a.min_y() + dy * a.height();
        let b = Envelope::new(bx, bx + 10.0, by, by + 10.0);
        prop_assume!(a.intersects(&b));
        let (ga, gb) = (rect(a), rect(b));
        prop_assert!(!is_env_disjoint(Some(&ga), Some(&gb), &pm));
        prop_assert!(!is_empty_result(OpCode::Intersection, Some(&ga), Some(&gb), &pm));
    }

    #[test]
    fn union_like_ops_empty_only_when_both_empty(env in envelope(), op in op_code()) {
        let g = rect(env);
        let pm = PrecisionModel::Floating;
        match op {
            OpCode::Union | OpCode::SymDifference => {
                prop_assert!(!is_empty_result(op, Some(&g), None, &pm));
                prop_assert!(!is_empty_result(op, None, Some(&g), &pm));
            }
            OpCode::Difference => {
                prop_assert!(!is_empty_result(op, Some(&g), None, &pm));
                prop_assert!(is_empty_result(op, None, Some(&g), &pm));
            }
            OpCode::Intersection => {
                prop_assert!(is_empty_result(op, Some(&g), None, &pm));
            }
        }
        prop_assert!(is_empty_result(op, None, None, &pm));
    }

    #[test]
    fn clipping_region_within_safe_operand_envelopes(
        a in envelope(),
        b in envelope(),
        pm in precision(),
    ) {
        let input = InputGeometry::binary(rect(a), rect(b));
        let safe_a = safe_overlap_envelope(&a, &pm);
        match clipping_envelope(OpCode::Intersection, &input, &pm) {
            Some(clip) if !clip.is_null() => {
                prop_assert!(safe_a.contains_env(&clip));
                prop_assert!(safe_overlap_envelope(&b, &pm).contains_env(&clip));
            }
            Some(_) => prop_assert!(safe_a.disjoint(&safe_overlap_envelope(&b, &pm))),
            None => prop_assert!(false, "intersection always yields a clip region"),
        }
        prop_assert_eq!(clipping_envelope(OpCode::Difference, &input, &pm), Some(safe_a));
    }
}
