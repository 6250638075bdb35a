use thiserror::Error;

/// 설정 로딩 에러
/// Configuration errors (startup only)
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 숫자 값이 잘못됨 (0 또는 파싱 실패)
    /// Invalid numeric value
    #[error("Invalid value for {key}: {value}")]
    InvalidNumber { key: String, value: String },

    /// on/off 값이 잘못됨
    #[error("Invalid flag for {key}: {value} (expected true/false)")]
    InvalidFlag { key: String, value: String },
}
