//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::detection::{detect, Direction};

/// 설정 파일 경로를 직접 지정하는 환경 변수
pub const CONFIG_PATH_ENV: &str = "HANTYPE_CONFIG";

/// 변환 방향 설정
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DirectionSetting {
    /// 입력에 한글이 있는지 보고 결정
    #[default]
    Auto,
    /// 항상 영문 -> 한글
    ToHangul,
    /// 항상 한글 -> 영문
    ToLatin,
}

impl DirectionSetting {
    /// 입력 텍스트에 적용할 실제 방향
    pub fn resolve(self, text: &str) -> Direction {
        match self {
            DirectionSetting::Auto => detect(text),
            DirectionSetting::ToHangul => Direction::ToHangul,
            DirectionSetting::ToLatin => Direction::ToLatin,
        }
    }
}

/// Hantype 설정
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HantypeConfig {
    /// 변환 방향 (auto | to_hangul | to_latin)
    #[serde(default)]
    pub direction: DirectionSetting,
    /// Shift 자모가 없는 대문자(A, K 등)를 소문자 키로 취급할지 여부
    #[serde(default = "default_fold_unshifted_capitals")]
    pub fold_unshifted_capitals: bool,
}

fn default_fold_unshifted_capitals() -> bool {
    false
}

impl Default for HantypeConfig {
    fn default() -> Self {
        Self {
            direction: DirectionSetting::default(),
            fold_unshifted_capitals: default_fold_unshifted_capitals(),
        }
    }
}

/// 설정 파일 로드/저장 에러
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 읽기/쓰기 실패
    Io(std::io::Error),
    /// JSON 직렬화/파싱 실패
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "설정 파일 입출력 오류: {}", e),
            ConfigError::Parse(s) => write!(f, "설정 JSON 오류: {}", s),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

/// 절대 경로인 환경 변수 값만 사용
fn absolute_env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
}

/// 설정 파일 경로
///
/// `HANTYPE_CONFIG`가 있으면 그 경로, 없으면
/// `$XDG_CONFIG_HOME/hantype/config.json` 또는 `~/.config/hantype/config.json`
pub fn config_path() -> PathBuf {
    if let Some(path) = absolute_env_path(CONFIG_PATH_ENV) {
        return path;
    }
    let base = absolute_env_path("XDG_CONFIG_HOME").unwrap_or_else(|| {
        absolute_env_path("HOME")
            .filter(|p| p.is_dir())
            .map(|home| home.join(".config"))
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            .unwrap_or_else(|| PathBuf::from("/var/tmp"))
    });
    base.join("hantype").join("config.json")
}

/// 문자열에서 설정 파싱
pub fn parse_config(content: &str) -> Result<HantypeConfig, ConfigError> {
    Ok(serde_json::from_str(content)?)
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> HantypeConfig {
    load_config_from(&config_path())
}

/// 지정한 경로에서 설정 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config_from(path: &Path) -> HantypeConfig {
    match fs::read_to_string(path) {
        Ok(content) => parse_config(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 무시 ({}): {}", path.display(), e);
            HantypeConfig::default()
        }),
        Err(e) => {
            log::debug!("설정 파일 없음 ({}): {}", path.display(), e);
            HantypeConfig::default()
        }
    }
}

/// 설정 파일 저장
pub fn save_config(config: &HantypeConfig) -> Result<(), ConfigError> {
    save_config_to(config, &config_path())
}

/// 지정한 경로에 설정 저장 (상위 디렉토리는 필요하면 생성)
pub fn save_config_to(config: &HantypeConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HantypeConfig::default();
        assert_eq!(config.direction, DirectionSetting::Auto);
        assert!(!config.fold_unshifted_capitals);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = HantypeConfig {
            direction: DirectionSetting::ToLatin,
            fold_unshifted_capitals: true,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"to_latin\""));
        let parsed = parse_config(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_backward_compat_missing_field() {
        let config = parse_config(r#"{"fold_unshifted_capitals": true}"#).unwrap();
        assert_eq!(config.direction, DirectionSetting::Auto);
        assert!(config.fold_unshifted_capitals);

        let config = parse_config("{}").unwrap();
        assert_eq!(config, HantypeConfig::default());
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_config("{ direction: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        let err = parse_config(r#"{"direction": "sideways"}"#).unwrap_err();
        assert!(err.to_string().contains("설정 JSON 오류"));
    }

    #[test]
    fn test_direction_setting_resolve() {
        assert_eq!(DirectionSetting::Auto.resolve("rk"), Direction::ToHangul);
        assert_eq!(DirectionSetting::Auto.resolve("가"), Direction::ToLatin);
        assert_eq!(DirectionSetting::ToHangul.resolve("가"), Direction::ToHangul);
        assert_eq!(DirectionSetting::ToLatin.resolve("rk"), Direction::ToLatin);
    }

    /// 테스트마다 겹치지 않는 임시 경로
    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("hantype-test-{}-{}", std::process::id(), name))
            .join("config.json")
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let path = temp_config_path("round-trip");
        let config = HantypeConfig {
            direction: DirectionSetting::ToHangul,
            fold_unshifted_capitals: true,
        };
        save_config_to(&config, &path).unwrap();
        assert_eq!(load_config_from(&path), config);

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"to_hangul\""));
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_invalid_file_falls_back_to_default() {
        let path = temp_config_path("invalid");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_config_from(&path), HantypeConfig::default());
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let path = temp_config_path("missing");
        assert!(!path.exists());
        assert_eq!(load_config_from(&path), HantypeConfig::default());
    }

    // 환경 변수를 바꾸는 검사는 이 테스트 하나에만 둔다
    #[test]
    fn test_config_path_env_override() {
        let path = temp_config_path("env");

        std::env::set_var(CONFIG_PATH_ENV, &path);
        assert_eq!(config_path(), path);

        let config = HantypeConfig {
            direction: DirectionSetting::ToLatin,
            fold_unshifted_capitals: false,
        };
        save_config(&config).unwrap();
        assert_eq!(load_config(), config);

        // 상대 경로는 무시
        std::env::set_var(CONFIG_PATH_ENV, "relative/config.json");
        let fallback = config_path();
        assert_ne!(fallback, PathBuf::from("relative/config.json"));
        assert!(fallback.ends_with("hantype/config.json"));

        std::env::remove_var(CONFIG_PATH_ENV);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
