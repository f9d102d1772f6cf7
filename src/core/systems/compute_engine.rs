//! # 계산 엔진
//!
//! 설정과 캐시된 이득 상수를 묶어 제곱근 연산을 제공한다.

use super::config::CordicConfig;
use crate::core::error::Result;
use crate::core::math::cordic::{sqrt_core_with, SqrtResult};
use crate::core::math::float_adapter::{sqrt_float_with, FloatParts, EXPONENT_BIAS};
use crate::core::math::gain::{cached_gain, default_gain, GainConstant};

/// CORDIC 엔진
///
/// 생성 이후 불변이므로 여러 스레드에서 공유해도 된다.
#[derive(Debug, Clone)]
pub struct CORDICEngine {
    config: CordicConfig,
    gain: GainConstant,
}

impl CORDICEngine {
    pub fn new(config: CordicConfig) -> Result<Self> {
        config.validate()?;
        let gain = cached_gain(config.iterations)?;
        Ok(Self::from_parts(config, gain))
    }

    fn from_parts(config: CordicConfig, gain: GainConstant) -> Self {
        log::debug!(
            "CORDIC 엔진 생성: N={}, An={:.16}, 영역={:?}",
            config.iterations,
            gain.gain,
            gain.domain_bounds()
        );
        Self { config, gain }
    }

    pub fn config(&self) -> &CordicConfig {
        &self.config
    }

    pub fn gain(&self) -> &GainConstant {
        &self.gain
    }

    /// sqrt(d), d는 수렴 영역 안에 있어야 함
    pub fn sqrt(&self, d: f64) -> Result<SqrtResult> {
        sqrt_core_with(d, &self.gain)
    }

    pub fn sqrt_float(&self, mantissa: f64, biased_exponent: i32) -> Result<FloatParts> {
        sqrt_float_with(mantissa, biased_exponent, &self.gain, self.config.exponent_bias)
    }

    pub fn sqrt_parts(&self, parts: FloatParts) -> Result<FloatParts> {
        self.sqrt_float(parts.mantissa, parts.biased_exponent)
    }

    /// f32 분해는 단정밀도 바이어스(127) 기준
    pub fn sqrt_f32(&self, value: f32) -> Result<f32> {
        let parts = FloatParts::from_f32(value)?;
        let root = sqrt_float_with(parts.mantissa, parts.biased_exponent, &self.gain, EXPONENT_BIAS)?;
        Ok(root.to_f64() as f32)
    }
}

impl Default for CORDICEngine {
    fn default() -> Self {
        // 기본 설정은 항상 유효함
        Self::from_parts(CordicConfig::default(), default_gain())
    }
}
