// ==========================================
// 推拉门配置系统 - 配置层
// ==========================================
// 职责: 引擎设置（等分容差、目录路径、语言）
//       + 门扇配置文档加载
// 存储: JSON 文件
// ==========================================

pub mod config_manager;
pub mod error;
pub mod settings;

// 重导出核心配置管理器
pub use config_manager::{
    config_keys, load_configuration, parse_configuration, ConfigManager, SettingsSource,
};
pub use error::{ConfigError, ConfigResult};
pub use settings::{EngineSettings, EqualizationSettings};
