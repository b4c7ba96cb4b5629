//! 유니코드 한글 음절 조합/분해 테이블
//!
//! 초성 19자, 중성 21자, 종성 28자(종성 없음 포함)를 유니코드 순서대로 보관하고
//! 완성형 음절(U+AC00 ~ U+D7A3)과 인덱스 사이의 변환을 담당합니다.

/// 한글 음절 시작 코드포인트 (가)
pub const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
pub const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 호환용 자모 시작 (ㄱ)
pub const COMPAT_JAMO_FIRST: u32 = 0x3131;
/// 호환용 자모 중 현대 한글 마지막 (ㅣ)
pub const COMPAT_JAMO_MODERN_LAST: u32 = 0x3163;
/// 호환용 자모 영역 끝 (옛한글 포함)
pub const COMPAT_JAMO_LAST: u32 = 0x318E;

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;

/// 초성 목록 (유니코드 순서)
pub const CHOSEONG_LIST: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 목록 (유니코드 순서)
pub const JUNGSEONG_LIST: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ',
    'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 종성 목록 (유니코드 순서, 0번은 종성 없음)
pub const JONGSEONG_LIST: [Option<char>; 28] = [
    None,
    Some('ㄱ'),
    Some('ㄲ'),
    Some('ㄳ'),
    Some('ㄴ'),
    Some('ㄵ'),
    Some('ㄶ'),
    Some('ㄷ'),
    Some('ㄹ'),
    Some('ㄺ'),
    Some('ㄻ'),
    Some('ㄼ'),
    Some('ㄽ'),
    Some('ㄾ'),
    Some('ㄿ'),
    Some('ㅀ'),
    Some('ㅁ'),
    Some('ㅂ'),
    Some('ㅄ'),
    Some('ㅅ'),
    Some('ㅆ'),
    Some('ㅇ'),
    Some('ㅈ'),
    Some('ㅊ'),
    Some('ㅋ'),
    Some('ㅌ'),
    Some('ㅍ'),
    Some('ㅎ'),
];

/// 완성형 한글 음절인지 확인 (가 ~ 힣)
pub fn is_hangul_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 호환용 자모인지 확인 (ㄱ ~ ㆎ, 옛한글 포함)
pub fn is_compat_jamo(c: char) -> bool {
    (COMPAT_JAMO_FIRST..=COMPAT_JAMO_LAST).contains(&(c as u32))
}

/// 초성/중성/종성 인덱스로 완성된 한글 음절 생성 (범위를 벗어나면 None)
pub fn try_compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 초성/중성/종성 인덱스로 완성된 한글 음절 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
///
/// # Panics
/// 인덱스가 범위를 벗어나면 패닉합니다. 조합기의 상태 전이가 잘못되었다는 뜻이므로
/// 값을 잘라내지 않습니다.
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> char {
    match try_compose_syllable(choseong, jungseong, jongseong) {
        Some(c) => c,
        None => panic!(
            "음절 인덱스 범위 초과: 초성 {}, 중성 {}, 종성 {}",
            choseong, jungseong, jongseong
        ),
    }
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    if !is_hangul_syllable(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset % (JUNGSEONG_COUNT * JONGSEONG_COUNT)) / JONGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 두 중성을 복합 모음으로 조합
/// 반환: 복합 모음 인덱스 (실패 시 None)
pub fn combine_jungseong(first: u32, second: u32) -> Option<u32> {
    match (first, second) {
        (8, 0) => Some(9),    // ㅗ + ㅏ = ㅘ
        (8, 1) => Some(10),   // ㅗ + ㅐ = ㅙ
        (8, 20) => Some(11),  // ㅗ + ㅣ = ㅚ
        (13, 4) => Some(14),  // ㅜ + ㅓ = ㅝ
        (13, 5) => Some(15),  // ㅜ + ㅔ = ㅞ
        (13, 20) => Some(16), // ㅜ + ㅣ = ㅟ
        (18, 20) => Some(19), // ㅡ + ㅣ = ㅢ
        _ => None,
    }
}

/// 두 종성을 복합 종성으로 조합
/// 반환: 복합 종성 인덱스 (실패 시 None)
pub fn combine_jongseong(first: u32, second: u32) -> Option<u32> {
    match (first, second) {
        (1, 19) => Some(3),   // ㄱ + ㅅ = ㄳ
        (4, 22) => Some(5),   // ㄴ + ㅈ = ㄵ
        (4, 27) => Some(6),   // ㄴ + ㅎ = ㄶ
        (8, 1) => Some(9),    // ㄹ + ㄱ = ㄺ
        (8, 16) => Some(10),  // ㄹ + ㅁ = ㄻ
        (8, 17) => Some(11),  // ㄹ + ㅂ = ㄼ
        (8, 19) => Some(12),  // ㄹ + ㅅ = ㄽ
        (8, 25) => Some(13),  // ㄹ + ㅌ = ㄾ
        (8, 26) => Some(14),  // ㄹ + ㅍ = ㄿ
        (8, 27) => Some(15),  // ㄹ + ㅎ = ㅀ
        (17, 19) => Some(18), // ㅂ + ㅅ = ㅄ
        _ => None,
    }
}

/// 복합 종성을 분리
/// 반환: (남는 종성 인덱스, 다음 글자 초성 인덱스)
pub fn split_jongseong(jong: u32) -> Option<(u32, u32)> {
    match jong {
        3 => Some((1, 9)),   // ㄳ -> ㄱ + ㅅ
        5 => Some((4, 12)),  // ㄵ -> ㄴ + ㅈ
        6 => Some((4, 18)),  // ㄶ -> ㄴ + ㅎ
        9 => Some((8, 0)),   // ㄺ -> ㄹ + ㄱ
        10 => Some((8, 6)),  // ㄻ -> ㄹ + ㅁ
        11 => Some((8, 7)),  // ㄼ -> ㄹ + ㅂ
        12 => Some((8, 9)),  // ㄽ -> ㄹ + ㅅ
        13 => Some((8, 16)), // ㄾ -> ㄹ + ㅌ
        14 => Some((8, 17)), // ㄿ -> ㄹ + ㅍ
        15 => Some((8, 18)), // ㅀ -> ㄹ + ㅎ
        18 => Some((17, 9)), // ㅄ -> ㅂ + ㅅ
        _ => None,
    }
}

/// 단일 종성을 초성 인덱스로 변환 (종성이 다음 글자로 넘어갈 때)
pub fn jongseong_to_choseong(jong: u32) -> Option<u32> {
    let symbol = jongseong_to_jamo_char(jong)?;
    choseong_index(symbol)
}

/// 초성 인덱스 -> 호환용 자모
pub fn choseong_to_jamo_char(cho: u32) -> Option<char> {
    CHOSEONG_LIST.get(cho as usize).copied()
}

/// 중성 인덱스 -> 호환용 자모
pub fn jungseong_to_jamo_char(jung: u32) -> Option<char> {
    JUNGSEONG_LIST.get(jung as usize).copied()
}

/// 종성 인덱스 -> 호환용 자모 (0 = 종성 없음이므로 None)
pub fn jongseong_to_jamo_char(jong: u32) -> Option<char> {
    JONGSEONG_LIST.get(jong as usize).copied().flatten()
}

/// 호환용 자모 -> 초성 인덱스
pub fn choseong_index(symbol: char) -> Option<u32> {
    CHOSEONG_LIST
        .iter()
        .position(|&c| c == symbol)
        .map(|i| i as u32)
}

/// 호환용 자모 -> 중성 인덱스
pub fn jungseong_index(symbol: char) -> Option<u32> {
    JUNGSEONG_LIST
        .iter()
        .position(|&c| c == symbol)
        .map(|i| i as u32)
}

/// 호환용 자모 -> 종성 인덱스 (ㄸ, ㅃ, ㅉ 등 종성이 될 수 없는 자음은 None)
pub fn jongseong_index(symbol: char) -> Option<u32> {
    JONGSEONG_LIST
        .iter()
        .position(|&c| c == Some(symbol))
        .map(|i| i as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_syllable() {
        assert_eq!(compose_syllable(0, 0, 0), '가');
        assert_eq!(compose_syllable(0, 0, 1), '각');
        assert_eq!(compose_syllable(18, 0, 4), '한');
        assert_eq!(compose_syllable(0, 18, 8), '글');
        assert_eq!(compose_syllable(18, 20, 27), '힣');
    }

    #[test]
    #[should_panic]
    fn test_compose_out_of_range_panics() {
        compose_syllable(19, 0, 0);
    }

    #[test]
    fn test_try_compose_out_of_range() {
        assert_eq!(try_compose_syllable(0, 21, 0), None);
        assert_eq!(try_compose_syllable(0, 0, 28), None);
    }

    #[test]
    fn test_decompose_syllable() {
        assert_eq!(decompose_syllable('가'), Some((0, 0, 0)));
        assert_eq!(decompose_syllable('각'), Some((0, 0, 1)));
        assert_eq!(decompose_syllable('한'), Some((18, 0, 4)));
        assert_eq!(decompose_syllable('글'), Some((0, 18, 8)));
        assert_eq!(decompose_syllable('힣'), Some((18, 20, 27)));

        // 한글 음절이 아닌 문자
        assert_eq!(decompose_syllable('a'), None);
        assert_eq!(decompose_syllable('ㄱ'), None);
    }

    #[test]
    fn test_ranges() {
        assert!(is_hangul_syllable('가'));
        assert!(!is_hangul_syllable('ㄱ'));
        assert!(is_compat_jamo('ㄱ'));
        assert!(is_compat_jamo('ㅣ'));
        assert!(is_compat_jamo('ㆍ'));
        assert!(!is_compat_jamo('가'));
    }

    #[test]
    fn test_combine_jungseong() {
        assert_eq!(combine_jungseong(8, 0), Some(9)); // ㅗ + ㅏ = ㅘ
        assert_eq!(combine_jungseong(13, 4), Some(14)); // ㅜ + ㅓ = ㅝ
        assert_eq!(combine_jungseong(18, 20), Some(19)); // ㅡ + ㅣ = ㅢ
        assert_eq!(combine_jungseong(0, 0), None);
        assert_eq!(combine_jungseong(8, 8), None);
    }

    #[test]
    fn test_combine_jongseong() {
        assert_eq!(combine_jongseong(1, 19), Some(3)); // ㄱ + ㅅ = ㄳ
        assert_eq!(combine_jongseong(8, 1), Some(9)); // ㄹ + ㄱ = ㄺ
        assert_eq!(combine_jongseong(17, 19), Some(18)); // ㅂ + ㅅ = ㅄ
        assert_eq!(combine_jongseong(1, 1), None);
    }

    #[test]
    fn test_split_jongseong() {
        assert_eq!(split_jongseong(3), Some((1, 9))); // ㄳ -> ㄱ + ㅅ
        assert_eq!(split_jongseong(9), Some((8, 0))); // ㄺ -> ㄹ + ㄱ
        assert_eq!(split_jongseong(18), Some((17, 9))); // ㅄ -> ㅂ + ㅅ
        assert_eq!(split_jongseong(1), None);
    }

    #[test]
    fn test_jongseong_to_choseong() {
        assert_eq!(jongseong_to_choseong(1), Some(0)); // ㄱ
        assert_eq!(jongseong_to_choseong(2), Some(1)); // ㄲ
        assert_eq!(jongseong_to_choseong(20), Some(10)); // ㅆ
        assert_eq!(jongseong_to_choseong(27), Some(18)); // ㅎ

        // 복합 종성과 종성 없음은 변환 불가
        assert_eq!(jongseong_to_choseong(0), None);
        assert_eq!(jongseong_to_choseong(3), None);
        assert_eq!(jongseong_to_choseong(9), None);
    }

    #[test]
    fn test_index_char_lookup() {
        assert_eq!(choseong_to_jamo_char(0), Some('ㄱ'));
        assert_eq!(choseong_to_jamo_char(19), None);
        assert_eq!(jungseong_to_jamo_char(20), Some('ㅣ'));
        assert_eq!(jungseong_to_jamo_char(21), None);
        assert_eq!(jongseong_to_jamo_char(0), None);
        assert_eq!(jongseong_to_jamo_char(18), Some('ㅄ'));

        assert_eq!(choseong_index('ㅎ'), Some(18));
        assert_eq!(jungseong_index('ㅢ'), Some(19));
        assert_eq!(jongseong_index('ㅇ'), Some(21));
        assert_eq!(jongseong_index('ㄸ'), None);
        assert_eq!(choseong_index('ㄳ'), None);
    }

    #[test]
    fn test_combine_tables_agree_with_lists() {
        // 조합 결과가 목록 상의 복합 자모와 일치하는지
        assert_eq!(jungseong_to_jamo_char(combine_jungseong(8, 20).unwrap()), Some('ㅚ'));
        assert_eq!(jongseong_to_jamo_char(combine_jongseong(4, 27).unwrap()), Some('ㄶ'));
    }
}
