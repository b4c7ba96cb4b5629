//! 두벌식 자판 영문 키 <-> 한글 자모 매핑

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::core::unicode::{choseong_index, jongseong_index, jungseong_index};

/// 두벌식 자판 배열 (영문 키, 호환용 자모)
///
/// 역방향 표는 이 순서대로 만들어지며, 같은 자모가 두 번 나오면 먼저 선언된 키가
/// 대표 키가 된다.
pub const KEY_LAYOUT: [(char, char); 33] = [
    // 자음
    ('r', 'ㄱ'),
    ('R', 'ㄲ'),
    ('s', 'ㄴ'),
    ('e', 'ㄷ'),
    ('E', 'ㄸ'),
    ('f', 'ㄹ'),
    ('a', 'ㅁ'),
    ('q', 'ㅂ'),
    ('Q', 'ㅃ'),
    ('t', 'ㅅ'),
    ('T', 'ㅆ'),
    ('d', 'ㅇ'),
    ('w', 'ㅈ'),
    ('W', 'ㅉ'),
    ('c', 'ㅊ'),
    ('z', 'ㅋ'),
    ('x', 'ㅌ'),
    ('v', 'ㅍ'),
    ('g', 'ㅎ'),
    // 모음
    ('k', 'ㅏ'),
    ('o', 'ㅐ'),
    ('i', 'ㅑ'),
    ('O', 'ㅒ'),
    ('j', 'ㅓ'),
    ('p', 'ㅔ'),
    ('u', 'ㅕ'),
    ('P', 'ㅖ'),
    ('h', 'ㅗ'),
    ('y', 'ㅛ'),
    ('n', 'ㅜ'),
    ('b', 'ㅠ'),
    ('m', 'ㅡ'),
    ('l', 'ㅣ'),
];

lazy_static! {
    static ref KEY_TO_SYMBOL: HashMap<char, char> = KEY_LAYOUT.iter().copied().collect();
    static ref SYMBOL_TO_KEY: HashMap<char, char> = {
        let mut map = HashMap::with_capacity(KEY_LAYOUT.len());
        for &(key, symbol) in KEY_LAYOUT.iter() {
            map.entry(symbol).or_insert(key);
        }
        map
    };
}

/// 자모 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jamo {
    /// 자음 (cho_index: 초성 인덱스, jong_index: 종성 인덱스, None이면 종성 불가)
    Consonant {
        cho_index: u32,
        jong_index: Option<u32>,
    },
    /// 모음 (jung_index: 중성 인덱스)
    Vowel { jung_index: u32 },
}

impl Jamo {
    /// 호환용 자모에서 자모 유형 생성 (초성 또는 중성이 될 수 없는 자모는 None)
    pub fn from_symbol(symbol: char) -> Option<Self> {
        if let Some(cho_index) = choseong_index(symbol) {
            return Some(Jamo::Consonant {
                cho_index,
                jong_index: jongseong_index(symbol),
            });
        }
        jungseong_index(symbol).map(|jung_index| Jamo::Vowel { jung_index })
    }
}

/// 영문 키 하나를 호환용 자모로 변환
pub fn keystroke_to_symbol(key: char) -> Option<char> {
    KEY_TO_SYMBOL.get(&key).copied()
}

/// 호환용 자모를 대표 영문 키로 변환 (복합 자모는 None, `compound` 모듈로 먼저 분해)
pub fn symbol_to_keystroke(symbol: char) -> Option<char> {
    SYMBOL_TO_KEY.get(&symbol).copied()
}

/// 대문자 별칭 해석
///
/// 자판에 Shift 자모가 없는 대문자(A, K, G 등)를 소문자 키로 취급한다.
/// 이미 의미가 있는 대문자(R, E, Q, T, W, O, P)는 그대로 둔다.
pub fn fold_keystroke(key: char) -> char {
    if key.is_ascii_uppercase() && !KEY_TO_SYMBOL.contains_key(&key) {
        key.to_ascii_lowercase()
    } else {
        key
    }
}

/// 영문 문자 하나를 자모로 변환
/// 매핑에 없는 문자(숫자, 특수문자 등)는 None 반환
pub fn map_to_jamo(c: char) -> Option<Jamo> {
    keystroke_to_symbol(c).and_then(Jamo::from_symbol)
}
