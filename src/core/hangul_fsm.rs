//! 한글 조합 유한 상태 기계 (FSM)
//!
//! 자모를 왼쪽부터 하나씩 받아 음절 블록 하나를 조합 중인 상태로 유지하고,
//! 블록이 확정될 때마다 출력 버퍼에 내보낸다.

use crate::core::jamo_mapper::Jamo;
use crate::core::unicode::{
    choseong_to_jamo_char, combine_jongseong, combine_jungseong, compose_syllable,
    jongseong_to_choseong, jungseong_to_jamo_char, split_jongseong,
};

/// FSM 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// 아무것도 없음
    Empty,
    /// 초성만 입력됨
    Choseong,
    /// 초성 없이 모음만 입력됨 (겹모음 조합 대기)
    Jungseong,
    /// 초성+중성
    ChoseongJungseong,
    /// 초성+중성+종성
    ChoseongJungseongJongseong,
}

/// 한글 조합 FSM
#[derive(Debug)]
pub struct HangulFsm {
    state: State,
    /// 현재 초성 인덱스
    choseong: u32,
    /// 현재 중성 인덱스
    jungseong: u32,
    /// 현재 종성 인덱스 (0 = 없음)
    jongseong: u32,
    /// 출력 버퍼
    output: String,
}

impl HangulFsm {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// 출력 버퍼 크기를 미리 잡아 둔 FSM 생성
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: State::Empty,
            choseong: 0,
            jungseong: 0,
            jongseong: 0,
            output: String::with_capacity(capacity),
        }
    }

    /// 자모를 입력하여 상태 전이
    pub fn feed(&mut self, jamo: Jamo) {
        match jamo {
            Jamo::Consonant {
                cho_index,
                jong_index,
            } => self.feed_consonant(cho_index, jong_index),
            Jamo::Vowel { jung_index } => self.feed_vowel(jung_index),
        }
    }

    /// 자음 입력 처리
    fn feed_consonant(&mut self, cho_index: u32, jong_index: Option<u32>) {
        match self.state {
            State::Empty => self.start_choseong(cho_index),
            State::Choseong | State::Jungseong => {
                // 앞의 낱자모를 확정하고 새 초성으로
                self.flush_current();
                self.start_choseong(cho_index);
            }
            State::ChoseongJungseong => match jong_index {
                Some(jong) => {
                    self.jongseong = jong;
                    self.state = State::ChoseongJungseongJongseong;
                }
                None => {
                    // 종성 불가 자음 (ㄸ, ㅃ, ㅉ)
                    self.flush_current();
                    self.start_choseong(cho_index);
                }
            },
            State::ChoseongJungseongJongseong => {
                let combined = jong_index.and_then(|jong| combine_jongseong(self.jongseong, jong));
                match combined {
                    Some(combined) => self.jongseong = combined,
                    None => {
                        // 겹받침이 안 되면 현재 글자를 종성째 확정
                        self.flush_current();
                        self.start_choseong(cho_index);
                    }
                }
            }
        }
    }

    /// 모음 입력 처리
    fn feed_vowel(&mut self, jung_index: u32) {
        match self.state {
            State::Empty => self.start_jungseong(jung_index),
            State::Choseong => {
                self.jungseong = jung_index;
                self.state = State::ChoseongJungseong;
            }
            State::Jungseong | State::ChoseongJungseong => {
                if let Some(combined) = combine_jungseong(self.jungseong, jung_index) {
                    self.jungseong = combined;
                } else {
                    self.flush_current();
                    self.start_jungseong(jung_index);
                }
            }
            State::ChoseongJungseongJongseong => {
                // 종성을 다음 글자의 초성으로 넘긴다.
                // 겹받침이면 뒤 자음만, 홑받침이면 전체를 넘긴다.
                let (remaining_jong, next_cho) = match split_jongseong(self.jongseong) {
                    Some(split) => split,
                    None => match jongseong_to_choseong(self.jongseong) {
                        Some(next_cho) => (0, next_cho),
                        None => unreachable!("초성이 될 수 없는 종성: {}", self.jongseong),
                    },
                };
                self.jongseong = remaining_jong;
                self.flush_current();
                self.choseong = next_cho;
                self.jungseong = jung_index;
                self.state = State::ChoseongJungseong;
            }
        }
    }

    fn start_choseong(&mut self, cho_index: u32) {
        self.choseong = cho_index;
        self.state = State::Choseong;
    }

    fn start_jungseong(&mut self, jung_index: u32) {
        self.jungseong = jung_index;
        self.state = State::Jungseong;
    }

    /// 현재 조합 중인 글자를 출력 버퍼에 추가
    fn flush_current(&mut self) {
        match self.state {
            State::Empty => {}
            State::Choseong => {
                if let Some(c) = choseong_to_jamo_char(self.choseong) {
                    self.output.push(c);
                }
            }
            State::Jungseong => {
                if let Some(c) = jungseong_to_jamo_char(self.jungseong) {
                    self.output.push(c);
                }
            }
            State::ChoseongJungseong => {
                self.output
                    .push(compose_syllable(self.choseong, self.jungseong, 0));
            }
            State::ChoseongJungseongJongseong => {
                self.output
                    .push(compose_syllable(self.choseong, self.jungseong, self.jongseong));
            }
        }
        self.reset_state();
    }

    fn reset_state(&mut self) {
        self.state = State::Empty;
        self.choseong = 0;
        self.jungseong = 0;
        self.jongseong = 0;
    }

    /// 변환 불가 문자 처리 (숫자, 특수문자 등)
    pub fn feed_passthrough(&mut self, c: char) {
        self.flush_current();
        self.output.push(c);
    }

    /// FSM 종료 및 최종 결과 반환
    pub fn finish(mut self) -> String {
        self.flush_current();
        self.output
    }
}

impl Default for HangulFsm {
    fn default() -> Self {
        Self::new()
    }
}
