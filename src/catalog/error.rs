// ==========================================
// 推拉门配置系统 - 目录模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 参考目录错误类型
#[derive(Error, Debug)]
pub enum CatalogError {
    // ===== 文件相关错误 =====
    #[error("目录文件读取失败: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("目录 CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 数据质量错误 =====
    #[error("目录引用为空 (行 {0})")]
    EmptyReference(usize),

    #[error("目录引用重复 (行 {row}): {reference}")]
    DuplicateReference { row: usize, reference: String },

    #[error("目录类别未知 (行 {row}): {value}（仅支持 profile/accessory）")]
    UnknownFamily { row: usize, value: String },

    #[error("几何常量格式错误 (行 {row}, 字段 {field}): {value}")]
    InvalidConstant {
        row: usize,
        field: String,
        value: String,
    },
}

// 实现 From<csv::Error>
impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        CatalogError::CsvParseError(err.to_string())
    }
}

/// Result 类型别名
pub type CatalogResult<T> = Result<T, CatalogError>;
