//! 한글 -> 영문 역변환 (두벌식 자판 기준)
//!
//! 완성형 음절은 초성/중성/종성으로 나누고, 겹모음과 겹받침은 입력 순서대로 두 키로
//! 펼친다. 낱자모는 그대로 키로 바꾸며, 키가 없는 문자는 손대지 않는다.

use crate::core::compound::decompose_compound;
use crate::core::jamo_mapper::symbol_to_keystroke;
use crate::core::unicode::{
    choseong_to_jamo_char, decompose_syllable, jongseong_to_jamo_char, jungseong_to_jamo_char,
};

/// 한글 문자열을 두벌식 영문 키 시퀀스로 역변환
///
/// # Examples
/// ```
/// use hantype::decompose;
/// assert_eq!(decompose("안녕"), "dkssud");
/// assert_eq!(decompose("읽다"), "dlfrek");
/// ```
pub fn decompose(input: &str) -> String {
    let mut result = String::with_capacity(input.len() * 2);

    for c in input.chars() {
        if let Some((cho, jung, jong)) = decompose_syllable(c) {
            push_symbol(choseong_to_jamo_char(cho), &mut result);
            push_symbol(jungseong_to_jamo_char(jung), &mut result);
            push_symbol(jongseong_to_jamo_char(jong), &mut result);
        } else if !push_jamo(c, &mut result) {
            result.push(c);
        }
    }

    result
}

/// 음절에서 꺼낸 자모를 키로 추가 (종성 없음은 None)
fn push_symbol(symbol: Option<char>, result: &mut String) {
    if let Some(symbol) = symbol {
        push_jamo(symbol, result);
    }
}

/// 자모 하나를 키로 추가. 복합 자모는 두 키로 펼친다.
/// 대응하는 키가 없으면 아무것도 쓰지 않고 false 반환
fn push_jamo(symbol: char, result: &mut String) -> bool {
    match decompose_compound(symbol) {
        Some((first, second)) => match (symbol_to_keystroke(first), symbol_to_keystroke(second)) {
            (Some(a), Some(b)) => {
                result.push(a);
                result.push(b);
                true
            }
            _ => false,
        },
        None => match symbol_to_keystroke(symbol) {
            Some(key) => {
                result.push(key);
                true
            }
            None => false,
        },
    }
}
