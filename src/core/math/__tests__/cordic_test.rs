use crate::core::error::CordicError;
use crate::core::math::cordic::*;
use crate::core::math::gain::{compute_gain, default_gain};
use approx::{assert_abs_diff_eq, assert_relative_eq};

#[test]
fn 기본_제곱근_테스트() {
    super::init_logger();
    let r = sqrt_core(1.5).unwrap();

    assert_abs_diff_eq!(r.estimate(), 1.224744871391589, epsilon = 1e-9);
    assert_abs_diff_eq!(r.reference_sqrt, 1.5f64.sqrt(), epsilon = 1e-15);
    assert_relative_eq!(r.gain, 0.8281593609602157, epsilon = 1e-15);
    assert_relative_eq!(r.scaled, 1.224744871391589 * 0.8281593609602157, epsilon = 1e-12);
    println!("sqrt_core(1.5) = {:?}, 오차 {:e}", r, r.abs_error());
}

#[test]
fn 수렴_영역_전체_정확도_테스트() {
    let (lo, hi) = default_gain().domain_bounds();
    let steps = 500;
    let mut max_err: f64 = 0.0;

    for k in 1..steps {
        let d = lo + (hi - lo) * k as f64 / steps as f64;
        let r = sqrt_core(d).unwrap();
        max_err = max_err.max(r.abs_error());
        assert!(r.abs_error() < 1e-9, "d={} 오차 {:e}", d, r.abs_error());
    }
    println!("최대 오차: {:e}", max_err);
}

#[test]
fn 완전제곱수_테스트() {
    for (d, root) in [(0.04, 0.2), (0.25, 0.5), (0.64, 0.8), (1.0, 1.0), (1.44, 1.2), (2.25, 1.5)] {
        let r = sqrt_core(d).unwrap();
        assert_abs_diff_eq!(r.estimate(), root, epsilon = 1e-12);
    }
}

#[test]
fn 반복_상태_초기화_테스트() {
    let s = IterationState::new(1.5);
    assert_eq!(s, IterationState { x: 1.75, y: 1.25 });

    // y >= 0 이면 x -= y/2, y -= x/2
    let mut s1 = s;
    s1.rotate(1);
    assert_eq!(s1, IterationState { x: 1.75 - 0.625, y: 1.25 - 0.875 });

    // y < 0 이면 반대 방향
    let mut s2 = IterationState::new(0.125);
    s2.rotate(1);
    assert_eq!(s2, IterationState { x: 0.375 - 0.0625, y: -0.125 + 0.1875 });
}

#[test]
fn 반복_후_y_수렴_테스트() {
    let mut s = IterationState::new(0.7);
    s.run(300);
    assert!(s.y.abs() < 1e-15, "y가 0으로 수렴하지 않음: {:e}", s.y);
    assert_relative_eq!(s.x / default_gain().gain, 0.7f64.sqrt(), epsilon = 1e-14);
}

#[test]
fn 사용자_반복_횟수_테스트() {
    let g20 = compute_gain(20).unwrap();
    let r = sqrt_core_with(1.5, &g20).unwrap();
    assert_eq!(r.gain, g20.gain);
    assert!(r.abs_error() < 1e-11, "N=20 오차 {:e}", r.abs_error());

    let g10 = compute_gain(10).unwrap();
    let r = sqrt_core_with(1.5, &g10).unwrap();
    assert!(r.abs_error() < 1e-5, "N=10 오차 {:e}", r.abs_error());
}

#[test]
fn 도메인_에러_테스트() {
    for d in [0.0, -1.0, -0.25, f64::NAN, f64::INFINITY, 0.02, 2.4, 3.9, 100.0] {
        match sqrt_core(d) {
            Err(CordicError::Domain { .. }) => {}
            other => panic!("d={}에서 도메인 에러가 나야 함: {:?}", d, other),
        }
    }
}
