//! # 쌍곡 CORDIC 이득 상수
//!
//! 반복 횟수 N과 반복 스케줄로 정해지는 An과 수렴 영역, 반복 횟수별 캐시

use super::schedule::RepeatSchedule;
use crate::core::error::{CordicError, Result};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;

/// 기본 반복 횟수
pub const DEFAULT_ITERATIONS: usize = 300;

/// 2^-i가 f64 범위를 벗어나기 전까지의 최대 반복 횟수
pub const MAX_ITERATIONS: usize = 1024;

/// 반복 횟수별 이득 상수 캐시 (thread-safe)
static GAIN_CACHE: Lazy<RwLock<HashMap<usize, GainConstant>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

static DEFAULT_GAIN: Lazy<GainConstant> = Lazy::new(|| {
    GainConstant::compute(DEFAULT_ITERATIONS)
});

/// 쌍곡 CORDIC 이득 상수 An
///
/// 반복 횟수와 반복 스케줄에만 의존하므로 입력과 무관하게 한 번만 계산한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GainConstant {
    /// 반복 횟수 N
    pub iterations: usize,
    /// An = Π sqrt(1 - 2^-2i) (반복 인덱스는 두 번)
    pub gain: f64,
    /// 전체 회전각 Σ atanh(2^-i) (반복 인덱스는 두 번)
    pub max_angle: f64,
    /// 수렴 가능한 |y0/x0| 상한 = tanh(max_angle)
    pub ratio_limit: f64,
}

impl GainConstant {
    fn compute(iterations: usize) -> Self {
        let mut gain = 1.0f64;
        let mut max_angle = 0.0f64;
        let mut schedule = RepeatSchedule::new();

        for i in 1..=iterations {
            let shift = libm::ldexp(1.0, -(i as i32));
            let factor = (1.0 - shift * shift).sqrt();
            let angle = libm::atanh(shift);

            gain *= factor;
            max_angle += angle;
            if schedule.is_repeat(i) {
                gain *= factor;
                max_angle += angle;
            }
        }

        Self {
            iterations,
            gain,
            max_angle,
            ratio_limit: libm::tanh(max_angle),
        }
    }

    /// d가 벡터링 수렴 영역 안에 있는지 확인
    ///
    /// x0 = d + 0.25, y0 = d - 0.25 이므로 |y0/x0| < tanh(max_angle) 이어야 한다.
    pub fn check_domain(&self, d: f64) -> Result<()> {
        if !d.is_finite() {
            return Err(CordicError::domain(d, "유한한 값이 아님"));
        }
        if d <= 0.0 {
            return Err(CordicError::domain(d, "0 이하의 값"));
        }
        let ratio = (d - 0.25).abs() / (d + 0.25);
        if ratio >= self.ratio_limit {
            return Err(CordicError::domain(d, "쌍곡 벡터링 수렴 영역 밖"));
        }
        Ok(())
    }

    /// 수렴 영역 (하한, 상한)
    pub fn domain_bounds(&self) -> (f64, f64) {
        let t = self.ratio_limit;
        (0.25 * (1.0 - t) / (1.0 + t), 0.25 * (1.0 + t) / (1.0 - t))
    }
}

/// An 계산 (캐시 없이 매번 계산)
pub fn compute_gain(iterations: usize) -> Result<GainConstant> {
    validate_iterations(iterations)?;
    Ok(GainConstant::compute(iterations))
}

/// 반복 횟수별로 메모이즈된 An
pub fn cached_gain(iterations: usize) -> Result<GainConstant> {
    if iterations == DEFAULT_ITERATIONS {
        return Ok(default_gain());
    }
    if let Some(gain) = GAIN_CACHE.read().get(&iterations) {
        return Ok(*gain);
    }

    let gain = compute_gain(iterations)?;
    log::debug!("이득 상수 계산: N={}, An={:.16}", iterations, gain.gain);
    Ok(*GAIN_CACHE.write().entry(iterations).or_insert(gain))
}

/// N = 300 이득 상수
#[inline]
pub fn default_gain() -> GainConstant {
    *DEFAULT_GAIN
}

pub(crate) fn validate_iterations(iterations: usize) -> Result<()> {
    if iterations == 0 || iterations > MAX_ITERATIONS {
        return Err(CordicError::InvalidIterations(iterations));
    }
    Ok(())
}
