// ==========================================
// 推拉门配置系统 - 报价单模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 报价单导出错误类型
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("报价单 CSV 写入失败: {0}")]
    CsvWriteError(String),

    #[error("报价单 JSON 序列化失败: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("报价单输出失败: {0}")]
    IoError(#[from] std::io::Error),

    #[error("报价单编码错误: {0}")]
    EncodingError(#[from] std::string::FromUtf8Error),
}

// 实现 From<csv::Error>
impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        ReportError::CsvWriteError(err.to_string())
    }
}

/// Result 类型别名
pub type ReportResult<T> = Result<T, ReportError>;
