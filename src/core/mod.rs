//! # CORDIC 핵심 모듈
//!
//! 이득 상수, 벡터링 반복, 부동소수점 어댑터와 엔진

pub mod error;
pub mod math;
pub mod systems;

// 주요 타입들 재수출
pub use error::*;
pub use math::*;
pub use systems::*;
