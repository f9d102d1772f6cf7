//! # CORDIC 구성 설정

use crate::core::error::Result;
use crate::core::math::gain::{validate_iterations, DEFAULT_ITERATIONS};
use crate::core::math::float_adapter::EXPONENT_BIAS;
use serde::{Deserialize, Serialize};

/// CORDIC 제곱근 엔진 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CordicConfig {
    /// 벡터링 반복 횟수 N
    pub iterations: usize,
    /// 부동소수점 지수 바이어스
    pub exponent_bias: i32,
}

impl Default for CordicConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            exponent_bias: EXPONENT_BIAS,
        }
    }
}

impl CordicConfig {
    pub fn with_iterations(iterations: usize) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_iterations(self.iterations)
    }
}
