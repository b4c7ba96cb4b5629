//! 두벌식 자판 변환 엔진

pub mod compound;
pub mod converter;
pub mod decomposer;
pub mod hangul_fsm;
pub mod jamo_mapper;
pub mod unicode;
