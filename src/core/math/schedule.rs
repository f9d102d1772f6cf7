/// 쌍곡 CORDIC 반복 스케줄
///
/// 쌍곡 각도 집합 atanh(2^-i)는 그 자체로 수렴 조건을 만족하지 않으므로
/// k = 4, 13, 40, 121, ... (k' = 3k + 1) 번째 회전을 두 번 적용한다.
/// 이득 계산과 벡터링 반복은 반드시 같은 스케줄을 소비해야 한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatSchedule {
    next: usize,
}

impl RepeatSchedule {
    pub const FIRST: usize = 4;

    pub fn new() -> Self {
        Self { next: Self::FIRST }
    }

    /// 다음 반복 인덱스 (소비하지 않음)
    #[inline]
    pub fn peek(&self) -> usize {
        self.next
    }

    /// i가 반복 인덱스이면 스케줄을 진행시키고 true 반환
    #[inline]
    pub fn is_repeat(&mut self, i: usize) -> bool {
        if i == self.next {
            self.next = 3 * self.next + 1;
            true
        } else {
            false
        }
    }
}

impl Default for RepeatSchedule {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for RepeatSchedule {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let k = self.next;
        self.next = k.checked_mul(3)?.checked_add(1)?;
        Some(k)
    }
}
