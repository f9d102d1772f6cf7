//! 쌍곡 CORDIC 제곱근 라이브러리
//!
//! 시프트와 덧셈만으로 sqrt(d)를 계산하는 쌍곡 벡터링 CORDIC과,
//! (가수, 바이어스 지수) 표현을 그 수렴 영역으로 정규화하는 어댑터

pub mod core;

// 핵심 모듈들 재수출
pub use crate::core::{
    // 계산
    sqrt_core, sqrt_core_with, sqrt_float, sqrt_float_with, sqrt_f32,
    // 이득 상수
    compute_gain, cached_gain, default_gain, GainConstant, RepeatSchedule,
    DEFAULT_ITERATIONS, MAX_ITERATIONS, EXPONENT_BIAS,
    // 데이터 구조
    IterationState, SqrtResult, FloatParts,
    // 엔진 및 설정
    CORDICEngine, CordicConfig,
    // 에러
    CordicError, Result,
};

// 편의 타입 별칭
pub type SqrtEngine = CORDICEngine;
