//! # 쌍곡 CORDIC 벡터링 제곱근
//!
//! (x, y) = (d + 1/4, d - 1/4) 에서 시작해 y를 0으로 보내면
//! x는 An * sqrt(x0² - y0²) = An * sqrt(d) 로 수렴한다.

use super::gain::{default_gain, GainConstant};
use super::schedule::RepeatSchedule;
use crate::core::error::Result;

/// 한 번의 호출이 독점하는 벡터링 상태
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationState {
    pub x: f64,
    pub y: f64,
}

impl IterationState {
    pub fn new(d: f64) -> Self {
        Self { x: d + 0.25, y: d - 0.25 }
    }

    /// atanh(2^-i) 만큼의 쌍곡 기본 회전 (y의 부호 방향으로 0에 접근)
    #[inline]
    pub fn rotate(&mut self, i: usize) {
        let xtemp = libm::ldexp(self.x, -(i as i32));
        let ytemp = libm::ldexp(self.y, -(i as i32));
        if self.y < 0.0 {
            self.x += ytemp;
            self.y += xtemp;
        } else {
            self.x -= ytemp;
            self.y -= xtemp;
        }
    }

    /// i = 1..=N 벡터링, 반복 인덱스에서는 같은 회전을 한 번 더
    pub fn run(&mut self, iterations: usize) {
        let mut schedule = RepeatSchedule::new();
        for i in 1..=iterations {
            self.rotate(i);
            if schedule.is_repeat(i) {
                self.rotate(i);
            }
        }
    }
}

/// 제곱근 계산 결과
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqrtResult {
    /// x_final = An * sqrt(d)
    pub scaled: f64,
    /// 검증용 라이브러리 sqrt(d) (알고리즘에는 사용하지 않음)
    pub reference_sqrt: f64,
    /// 사용된 이득 상수 An
    pub gain: f64,
}

impl SqrtResult {
    /// 이득 보정된 제곱근 추정값
    #[inline]
    pub fn estimate(&self) -> f64 {
        self.scaled / self.gain
    }

    pub fn abs_error(&self) -> f64 {
        (self.estimate() - self.reference_sqrt).abs()
    }
}

/// N = 300 기본 이득으로 sqrt(d) 계산
pub fn sqrt_core(d: f64) -> Result<SqrtResult> {
    sqrt_core_with(d, &default_gain())
}

/// 주어진 이득 상수(반복 횟수 포함)로 sqrt(d) 계산
pub fn sqrt_core_with(d: f64, gain: &GainConstant) -> Result<SqrtResult> {
    gain.check_domain(d)?;

    let mut state = IterationState::new(d);
    state.run(gain.iterations);

    // 수렴 영역 안의 입력이면 잔여각은 마지막 회전각 수준
    debug_assert!(
        state.y.abs() <= state.x * libm::ldexp(4.0, -(gain.iterations.min(40) as i32)),
        "CORDIC 미수렴: d={}, x={}, y={}",
        d,
        state.x,
        state.y
    );

    log::trace!("sqrt_core: d={}, x={}, y={:e}", d, state.x, state.y);

    Ok(SqrtResult {
        scaled: state.x,
        reference_sqrt: libm::sqrt(d),
        gain: gain.gain,
    })
}
