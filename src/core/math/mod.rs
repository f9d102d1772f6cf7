pub mod schedule;
pub mod gain;
pub mod cordic;
pub mod float_adapter;

// 테스트 모듈
#[cfg(test)]
mod __tests__;

// 재수출
pub use schedule::RepeatSchedule;
pub use gain::*;
pub use cordic::*;
pub use float_adapter::*;
