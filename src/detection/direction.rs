//! 변환 방향 감지
//!
//! 한글(호환용 자모 또는 완성형 음절)이 하나라도 있으면 한글 -> 영문,
//! 없으면 영문 -> 한글로 판단한다. 다수결이 아니라 존재 여부만 본다.

use serde::{Deserialize, Serialize};

use crate::core::unicode::{is_compat_jamo, is_hangul_syllable};

/// 변환 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// 영문 키 -> 한글
    ToHangul,
    /// 한글 -> 영문 키
    ToLatin,
}

/// 한글 문자인지 확인 (호환용 자모 U+3131~U+318E, 완성형 U+AC00~U+D7A3)
pub fn is_korean_char(c: char) -> bool {
    is_compat_jamo(c) || is_hangul_syllable(c)
}

/// 한글 문자가 하나라도 포함되어 있는지 검사
pub fn contains_korean(text: &str) -> bool {
    text.chars().any(is_korean_char)
}

/// 입력 텍스트의 변환 방향 결정
pub fn detect(text: &str) -> Direction {
    if contains_korean(text) {
        Direction::ToLatin
    } else {
        Direction::ToHangul
    }
}
