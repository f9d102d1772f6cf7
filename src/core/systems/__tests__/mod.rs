//! # 시스템 모듈 테스트
//!
//! 설정과 계산 엔진 단위테스트

pub mod config_test;
