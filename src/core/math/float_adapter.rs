//! # 부동소수점 어댑터
//!
//! (가수, 바이어스 지수) 쌍을 CORDIC 수렴 영역으로 정규화한 뒤
//! 제곱근을 계산하고 [1, 2) 가수 규약으로 되돌린다.

use super::cordic::sqrt_core_with;
use super::gain::{default_gain, GainConstant};
use crate::core::error::{CordicError, Result};

/// 단정밀도 지수 바이어스
pub const EXPONENT_BIAS: i32 = 127;

const F32_FRACTION_BITS: u32 = 23;
const F32_EXPONENT_MASK: u32 = 0xFF;
const F32_FRACTION_MASK: u32 = (1 << F32_FRACTION_BITS) - 1;

/// 가수 ∈ [1, 2) (hidden bit 포함), 바이어스 지수
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatParts {
    pub mantissa: f64,
    pub biased_exponent: i32,
}

impl FloatParts {
    pub fn new(mantissa: f64, biased_exponent: i32) -> Self {
        Self { mantissa, biased_exponent }
    }

    #[inline]
    pub fn unbiased_exponent(&self) -> i64 {
        self.biased_exponent as i64 - EXPONENT_BIAS as i64
    }

    /// mantissa * 2^(biased_exponent - bias)
    pub fn value_with_bias(&self, bias: i32) -> f64 {
        // 범위 밖 지수는 ldexp에서 0 또는 무한대로 포화됨
        let exp = (self.biased_exponent as i64 - bias as i64)
            .clamp(i32::MIN as i64, i32::MAX as i64) as i32;
        libm::ldexp(self.mantissa, exp)
    }

    pub fn to_f64(&self) -> f64 {
        self.value_with_bias(EXPONENT_BIAS)
    }

    /// 양의 정규 f32를 비트 단위로 분해
    ///
    /// 0, 음수, 비정규수, 무한대, NaN은 지원하지 않는다.
    pub fn from_f32(value: f32) -> Result<Self> {
        if !value.is_normal() || value.is_sign_negative() {
            return Err(CordicError::domain(value as f64, "양의 정규 f32가 아님"));
        }
        let bits = value.to_bits();
        let biased_exponent = ((bits >> F32_FRACTION_BITS) & F32_EXPONENT_MASK) as i32;
        let fraction = bits & F32_FRACTION_MASK;
        let mantissa = 1.0 + libm::ldexp(fraction as f64, -(F32_FRACTION_BITS as i32));
        Ok(Self { mantissa, biased_exponent })
    }
}

/// 기본 설정(N = 300, bias = 127)으로 sqrt(mantissa * 2^(e - 127))
pub fn sqrt_float(mantissa: f64, biased_exponent: i32) -> Result<FloatParts> {
    sqrt_float_with(mantissa, biased_exponent, &default_gain(), EXPONENT_BIAS)
}

pub fn sqrt_float_with(
    mantissa: f64,
    biased_exponent: i32,
    gain: &GainConstant,
    bias: i32,
) -> Result<FloatParts> {
    if !mantissa.is_finite() || mantissa <= 0.0 {
        return Err(CordicError::domain(mantissa, "가수는 양의 유한값이어야 함"));
    }
    if !(1.0..2.0).contains(&mantissa) {
        return Err(CordicError::domain(mantissa, "가수는 [1, 2) 범위여야 함"));
    }

    // 극단적인 지수에서도 넘치지 않도록 i64로 계산
    let unbiased = biased_exponent as i64 - bias as i64;

    // 홀수 지수는 가수를 반으로 나눠 짝수로 만든다 (unbiased + 1은 항상 짝수)
    let (mantissa_start, mut new_exponent) = if unbiased == 0 {
        (mantissa, 0)
    } else if unbiased % 2 != 0 {
        (mantissa / 2.0, (unbiased + 1) / 2)
    } else {
        (mantissa, unbiased / 2)
    };

    let mut mantissa_sqrt = sqrt_core_with(mantissa_start, gain)?.estimate();

    if mantissa_sqrt < 1.0 {
        new_exponent -= 1;
        mantissa_sqrt *= 2.0;
    }

    log::trace!(
        "sqrt_float: ({}, {}) -> ({}, {})",
        mantissa,
        biased_exponent,
        mantissa_sqrt,
        new_exponent + bias as i64
    );

    let biased_out = i32::try_from(new_exponent + bias as i64)
        .map_err(|_| CordicError::domain(biased_exponent as f64, "결과 지수가 i32 범위를 벗어남"))?;

    Ok(FloatParts {
        mantissa: mantissa_sqrt,
        biased_exponent: biased_out,
    })
}

/// 양의 정규 f32의 제곱근
pub fn sqrt_f32(value: f32) -> Result<f32> {
    let parts = FloatParts::from_f32(value)?;
    let root = sqrt_float(parts.mantissa, parts.biased_exponent)?;
    Ok(root.to_f64() as f32)
}
