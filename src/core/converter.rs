//! 영문 <-> 한글 통합 변환기

use crate::config::HantypeConfig;
use crate::core::decomposer::decompose;
use crate::core::hangul_fsm::HangulFsm;
use crate::core::jamo_mapper::{fold_keystroke, map_to_jamo};
use crate::detection::Direction;

/// 영문 키 문자열을 한글 문자열로 조합
/// 변환할 수 없는 문자(숫자, 특수문자, 매핑 없는 영문)는 그대로 유지
pub fn compose(input: &str) -> String {
    compose_with(input, false)
}

fn compose_with(input: &str, fold_capitals: bool) -> String {
    let mut fsm = HangulFsm::with_capacity(input.len());

    for c in input.chars() {
        let key = if fold_capitals { fold_keystroke(c) } else { c };
        match map_to_jamo(key) {
            Some(jamo) => fsm.feed(jamo),
            None => fsm.feed_passthrough(c),
        }
    }

    fsm.finish()
}

/// 방향을 자동 감지하여 변환 (한글이 있으면 영문 키로, 없으면 한글로)
pub fn convert(input: &str) -> String {
    Converter::default().convert(input)
}

/// UTF-8 바이트 길이
pub fn byte_length(text: &str) -> usize {
    text.len()
}

/// 한 번의 변환 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub input: String,
    pub output: String,
    pub direction: Direction,
    /// 입력의 UTF-8 바이트 수
    pub input_bytes: usize,
    /// 출력의 UTF-8 바이트 수
    pub output_bytes: usize,
}

/// 설정을 적용한 변환기
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    config: HantypeConfig,
}

impl Converter {
    pub fn new(config: HantypeConfig) -> Self {
        Self { config }
    }

    /// 설정된 방향(기본: 자동 감지)으로 변환
    pub fn convert(&self, input: &str) -> String {
        let direction = self.config.direction.resolve(input);
        self.convert_in(direction, input)
    }

    /// 지정한 방향으로 변환
    pub fn convert_in(&self, direction: Direction, input: &str) -> String {
        log::debug!("변환 방향 {:?}: {} bytes", direction, input.len());
        match direction {
            Direction::ToHangul => compose_with(input, self.config.fold_unshifted_capitals),
            Direction::ToLatin => decompose(input),
        }
    }

    /// 변환 결과와 바이트 수를 함께 반환
    pub fn convert_detailed(&self, input: &str) -> Conversion {
        let direction = self.config.direction.resolve(input);
        let output = self.convert_in(direction, input);
        Conversion {
            input_bytes: byte_length(input),
            output_bytes: byte_length(&output),
            input: input.to_string(),
            output,
            direction,
        }
    }

    /// 이전 결과를 새 입력으로 삼아 다시 변환 (입력/출력 맞바꾸기)
    pub fn swap(&self, previous: &Conversion) -> Conversion {
        self.convert_detailed(&previous.output)
    }
}
