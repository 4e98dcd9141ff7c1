// ==========================================
// 推拉门配置系统 - 核心库
// ==========================================
// 输入: 门扇配置（系列、尺寸、轨道、拉手、横档布局）
// 输出: 型材切割清单 + 配件清单 + 填充板尺寸 + 报价单
// 系统定位: 纯推导引擎（同输入同输出，无 I/O）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "fr");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 配置输入与推导输出
pub mod domain;

// 目录层 - 参考代码查找
pub mod catalog;

// 引擎层 - 推导规则
pub mod engine;

// 配置层 - 引擎设置与配置文件加载
pub mod config;

// 报价单层 - 行与导出
pub mod report;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    AccessoryLine, AccessoryRole, Arrangement, Configuration, FillMaterial, FillingEntry,
    FillingHeights, ProfileLine, RailType, Range, Tick, TraverseGroup, TraverseLayout,
};

// 目录
pub use catalog::{Catalog, CatalogEntry, CatalogError, HandleGeometry, ReferenceCatalog};

// 引擎
pub use engine::{
    AccessoryEngine, ConfigurationNormalizer, Derivation, DerivationPipeline,
    FillingResolver, FillingWidthResolver, LayoutGeometry, ProfileEngine,
};

// 配置
pub use config::{ConfigError, ConfigManager, EngineSettings, EqualizationSettings};

// 报价单
pub use report::{ExportFormat, Quote, ReportError};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "推拉门配置系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert!(!APP_NAME.is_empty());
    }
}
