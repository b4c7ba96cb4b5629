//! 복합 자모 분해 테이블
//!
//! 겹모음과 겹받침을 두 개의 단일 자모로 나눈다. 쌍자음(ㄲ, ㄸ, ㅃ, ㅆ, ㅉ)은
//! Shift 키 하나로 입력되므로 여기서는 단일 자모로 취급한다.

/// (복합 자모, 첫 번째 자모, 두 번째 자모)
pub const COMPOUND_TABLE: [(char, char, char); 18] = [
    // 겹모음
    ('ㅘ', 'ㅗ', 'ㅏ'),
    ('ㅙ', 'ㅗ', 'ㅐ'),
    ('ㅚ', 'ㅗ', 'ㅣ'),
    ('ㅝ', 'ㅜ', 'ㅓ'),
    ('ㅞ', 'ㅜ', 'ㅔ'),
    ('ㅟ', 'ㅜ', 'ㅣ'),
    ('ㅢ', 'ㅡ', 'ㅣ'),
    // 겹받침
    ('ㄳ', 'ㄱ', 'ㅅ'),
    ('ㄵ', 'ㄴ', 'ㅈ'),
    ('ㄶ', 'ㄴ', 'ㅎ'),
    ('ㄺ', 'ㄹ', 'ㄱ'),
    ('ㄻ', 'ㄹ', 'ㅁ'),
    ('ㄼ', 'ㄹ', 'ㅂ'),
    ('ㄽ', 'ㄹ', 'ㅅ'),
    ('ㄾ', 'ㄹ', 'ㅌ'),
    ('ㄿ', 'ㄹ', 'ㅍ'),
    ('ㅀ', 'ㄹ', 'ㅎ'),
    ('ㅄ', 'ㅂ', 'ㅅ'),
];

/// 복합 자모를 입력 순서대로 두 자모로 분해
pub fn decompose_compound(symbol: char) -> Option<(char, char)> {
    COMPOUND_TABLE
        .iter()
        .find(|(compound, _, _)| *compound == symbol)
        .map(|&(_, first, second)| (first, second))
}
