// ==========================================
// 推拉门配置系统 - 配置管理器
// ==========================================
// 职责: 引擎设置加载、校验、查询
// 来源优先级: 显式路径 → 环境变量 → 用户配置目录 → 内置默认值
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::settings::{EngineSettings, EqualizationSettings};
use crate::domain::configuration::Configuration;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    /// 设置文件路径环境变量
    pub const SETTINGS_ENV: &str = "SLIDING_DOOR_SETTINGS";

    /// 用户配置目录下的应用子目录
    pub const APP_DIR: &str = "sliding-door-configurator";

    /// 设置文件名
    pub const SETTINGS_FILE: &str = "settings.json";
}

/// 设置来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsSource {
    File(PathBuf),
    Defaults,
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone)]
pub struct ConfigManager {
    settings: EngineSettings,
    source: SettingsSource,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// 使用内置默认值创建
    pub fn new() -> Self {
        Self {
            settings: EngineSettings::default(),
            source: SettingsSource::Defaults,
        }
    }

    /// 使用已构造的设置创建（会校验容差）
    pub fn with_settings(settings: EngineSettings) -> ConfigResult<Self> {
        validate(&settings)?;
        Ok(Self {
            settings,
            source: SettingsSource::Defaults,
        })
    }

    /// 从 JSON 文件加载
    ///
    /// # 参数
    /// - path: 设置文件路径
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::FileReadError {
            path: path.display().to_string(),
            source,
        })?;

        let settings = parse_settings(&raw, &path.display().to_string())?;
        info!(path = %path.display(), "引擎设置加载完成");

        Ok(Self {
            settings,
            source: SettingsSource::File(path.to_path_buf()),
        })
    }

    /// 按优先级自动加载
    ///
    /// 1) 环境变量 SLIDING_DOOR_SETTINGS 指向的文件（必须存在）
    /// 2) <用户配置目录>/sliding-door-configurator/settings.json（存在时）
    /// 3) 内置默认值
    pub fn load() -> ConfigResult<Self> {
        if let Ok(path) = std::env::var(config_keys::SETTINGS_ENV) {
            let path = path.trim();
            if !path.is_empty() {
                debug!(path, "使用环境变量指定的设置文件");
                return Self::from_path(path);
            }
        }

        match Self::default_settings_path() {
            Some(path) if path.is_file() => Self::from_path(path),
            _ => {
                debug!("未找到设置文件，使用内置默认值");
                Ok(Self::new())
            }
        }
    }

    /// 用户配置目录下的默认设置路径
    pub fn default_settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| {
            dir.join(config_keys::APP_DIR)
                .join(config_keys::SETTINGS_FILE)
        })
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn source(&self) -> &SettingsSource {
        &self.source
    }

    /// 等分归一参数
    pub fn equalization(&self) -> EqualizationSettings {
        self.settings.equalization
    }

    /// 外部目录路径（若配置）
    pub fn catalog_path(&self) -> Option<&Path> {
        self.settings.catalog_path.as_deref()
    }

    pub fn locale(&self) -> &str {
        &self.settings.locale
    }

    /// 获取设置快照（JSON格式）
    ///
    /// # 用途
    /// - 记录推导所用设置，便于复现
    pub fn get_config_snapshot(&self) -> String {
        serde_json::to_string(&self.settings).unwrap_or_else(|e| {
            warn!(error = %e, "设置快照序列化失败");
            "{}".to_string()
        })
    }
}

// ==========================================
// 门扇配置文件加载
// ==========================================

/// 从 JSON 文件读取推导输入
pub fn load_configuration(path: impl AsRef<Path>) -> ConfigResult<Configuration> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::FileReadError {
        path: path.display().to_string(),
        source,
    })?;
    parse_configuration(&raw, &path.display().to_string())
}

/// 从 JSON 文本解析推导输入
pub fn parse_configuration(raw: &str, origin: &str) -> ConfigResult<Configuration> {
    serde_json::from_str(raw).map_err(|source| ConfigError::JsonParseError {
        path: origin.to_string(),
        source,
    })
}

fn parse_settings(raw: &str, origin: &str) -> ConfigResult<EngineSettings> {
    let settings: EngineSettings =
        serde_json::from_str(raw).map_err(|source| ConfigError::JsonParseError {
            path: origin.to_string(),
            source,
        })?;
    validate(&settings)?;
    Ok(settings)
}

fn validate(settings: &EngineSettings) -> ConfigResult<()> {
    for (key, value) in settings.equalization.tolerance_fields() {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::InvalidTolerance {
                key: key.to_string(),
                value,
            });
        }
    }
    Ok(())
}
