//! Property-based tests for classification.

use proptest::prelude::*;

use crate::rand::{draw_sides, KindChoice, ReplayToken, SampleCfg};
use crate::{classify, Kind, Reason};

fn side() -> impl Strategy<Value = i64> {
    1i64..10_000
}

fn any_side() -> impl Strategy<Value = i64> {
    -100i64..10_000
}

fn permutations<T: Copy>(a: T, b: T, c: T) -> [(T, T, T); 6] {
    [(a, b, c), (a, c, b), (b, a, c), (b, c, a), (c, a, b), (c, b, a)]
}

proptest! {
    #[test]
    fn equal_sides_are_equilateral(a in side()) {
        prop_assert_eq!(classify(a, a, a), Ok(Kind::Equilateral));
    }

    #[test]
    fn float_equal_sides_are_equilateral(a in 1e-6f64..1e6) {
        prop_assert_eq!(classify(a, a, a), Ok(Kind::Equilateral));
    }

    #[test]
    fn two_equal_sides_are_isosceles(a in side(), b in side()) {
        prop_assume!(a != b && b < 2 * a);
        for (x, y, z) in permutations(a, a, b) {
            prop_assert_eq!(classify(x, y, z), Ok(Kind::Isosceles));
        }
    }

    #[test]
    fn distinct_valid_sides_are_scalene(a in side(), b in side(), c in side()) {
        prop_assume!(a != b && b != c && a != c);
        prop_assume!(a + b > c && a + c > b && b + c > a);
        for (x, y, z) in permutations(a, b, c) {
            prop_assert_eq!(classify(x, y, z), Ok(Kind::Scalene));
        }
    }

    #[test]
    fn outcome_is_permutation_invariant(a in any_side(), b in any_side(), c in any_side()) {
        let first = classify(a, b, c).ok();
        for (x, y, z) in permutations(a, b, c) {
            prop_assert_eq!(classify(x, y, z).ok(), first);
        }
    }

    #[test]
    fn non_positive_side_is_rejected(a in -10_000i64..=0, b in side(), c in side()) {
        for (x, y, z) in permutations(a, b, c) {
            let err = classify(x, y, z).unwrap_err();
            prop_assert!(
                matches!(err.reason, Reason::NonPositiveSide { .. }),
                "got {:?}",
                err.reason
            );
        }
    }

    #[test]
    fn long_side_is_rejected(a in side(), b in side(), extra in 0i64..100) {
        let c = a + b + extra;
        for (x, y, z) in permutations(a, b, c) {
            let err = classify(x, y, z).unwrap_err();
            prop_assert!(
                matches!(err.reason, Reason::Inequality { .. }),
                "got {:?}",
                err.reason
            );
        }
    }

    #[test]
    fn sampled_triangles_match_requested_kind(seed in any::<u64>(), index in 0u64..1000, k in 0usize..3) {
        let kind = Kind::ALL[k];
        let cfg = SampleCfg { kind: KindChoice::Exactly(kind), ..SampleCfg::default() };
        let sides = draw_sides(cfg, ReplayToken::new(seed, index)).unwrap();
        prop_assert_eq!(sides.classify(), Ok(kind));
    }
}
