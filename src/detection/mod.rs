//! 변환 방향 자동 감지 모듈

mod direction;

pub use direction::{contains_korean, detect, is_korean_char, Direction};
