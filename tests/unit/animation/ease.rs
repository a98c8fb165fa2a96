use super::*;

const ALL: [Ease; 7] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert_eq!(ease.apply(-3.0), 0.0);
        assert_eq!(ease.apply(3.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn eval_matches_apply_inside_unit_range() {
    for ease in ALL {
        for t in [0.0, 0.2, 0.5, 0.9, 1.0] {
            assert_eq!(ease.eval(t), ease.apply(t));
        }
    }
}

#[test]
fn eval_does_not_clamp() {
    assert_eq!(Ease::Linear.eval(2.0), 2.0);
    assert_eq!(Ease::InQuad.eval(2.0), 4.0);
    assert_eq!(Ease::InCubic.eval(-1.0), -1.0);
    assert_eq!(Ease::OutQuad.eval(2.0), 0.0);
}
