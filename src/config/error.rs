// ==========================================
// 推拉门配置系统 - 配置层错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置 JSON 解析失败 ({path}): {source}")]
    JsonParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("配置值格式错误 (key: {key}, value: {value}): 必须为有限且 ≥0 的数值")]
    InvalidTolerance { key: String, value: f64 },
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
