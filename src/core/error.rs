//! CORDIC 제곱근 계산 에러 타입

/// 제곱근 계산 중 발생하는 에러
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CordicError {
    /// 입력이 수렴 영역 밖에 있음
    ///
    /// 0 이하, 비유한 값, 또는 쌍곡 벡터링이 y를 0으로 보낼 수 없는 값
    #[error("도메인 에러: {value} ({reason})")]
    Domain { value: f64, reason: &'static str },

    /// 반복 횟수는 1 이상이어야 함
    #[error("잘못된 반복 횟수: {0}")]
    InvalidIterations(usize),
}

impl CordicError {
    pub(crate) fn domain(value: f64, reason: &'static str) -> Self {
        CordicError::Domain { value, reason }
    }
}

pub type Result<T> = std::result::Result<T, CordicError>;
