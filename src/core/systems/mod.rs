//! # 제곱근 엔진 시스템
//!
//! 설정과 계산 엔진

pub mod config;
pub mod compute_engine;

#[cfg(test)]
mod __tests__;

// 설정 관련 재수출
pub use config::CordicConfig;

// 계산 엔진 재수출
pub use compute_engine::CORDICEngine;
