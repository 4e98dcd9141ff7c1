use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 引擎设置（持久化对象）
///
/// 存储位置：JSON 文件（见 ConfigManager）；所有字段可缺省
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// 填充板高度等分参数
    pub equalization: EqualizationSettings,

    /// 外部目录 CSV（缺省使用内置目录）
    pub catalog_path: Option<PathBuf>,

    /// 报价单语言（fr / en）
    pub locale: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            equalization: EqualizationSettings::default(),
            catalog_path: None,
            locale: "fr".to_string(),
        }
    }
}

/// 等分归一参数
///
/// 经验常数，按原值保留，不做推导
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EqualizationSettings {
    /// 横档间距最大差 ≤ 该值 → 视为等距（mm）
    pub gap_tolerance_mm: f64,

    /// 接近度基准（乘以步长，且不小于自身）
    pub closeness_base_mm: f64,

    /// 接近度附加余量（mm）
    pub closeness_margin_mm: f64,

    /// 96 系列测量步长（mm）
    pub step_96_mm: f64,

    /// 96CA 系列测量步长（mm）
    pub step_96ca_mm: f64,

    /// 跨门扇聚类容差（mm）
    pub cluster_tolerance_mm: f64,

    /// 强制等分
    pub force: bool,
}

impl Default for EqualizationSettings {
    fn default() -> Self {
        Self {
            gap_tolerance_mm: 1.0,
            closeness_base_mm: 0.5,
            closeness_margin_mm: 2.0,
            step_96_mm: 1.0,
            step_96ca_mm: 0.5,
            cluster_tolerance_mm: 1.0,
            force: false,
        }
    }
}

impl EqualizationSettings {
    /// 接近度容差: max(base·step, base) + margin
    pub fn closeness_tolerance(&self, step: f64) -> f64 {
        (self.closeness_base_mm * step).max(self.closeness_base_mm) + self.closeness_margin_mm
    }

    /// 所有容差字段（名称, 值），用于校验
    pub(crate) fn tolerance_fields(&self) -> [(&'static str, f64); 6] {
        [
            ("gap_tolerance_mm", self.gap_tolerance_mm),
            ("closeness_base_mm", self.closeness_base_mm),
            ("closeness_margin_mm", self.closeness_margin_mm),
            ("step_96_mm", self.step_96_mm),
            ("step_96ca_mm", self.step_96ca_mm),
            ("cluster_tolerance_mm", self.cluster_tolerance_mm),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_closeness_is_2_5mm_for_both_steps() {
        let s = EqualizationSettings::default();
        assert_eq!(s.closeness_tolerance(s.step_96_mm), 2.5);
        assert_eq!(s.closeness_tolerance(s.step_96ca_mm), 2.5);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let s: EngineSettings =
            serde_json::from_str(r#"{"equalization": {"force": true}}"#).unwrap();
        assert!(s.equalization.force);
        assert_eq!(s.equalization.gap_tolerance_mm, 1.0);
        assert_eq!(s.locale, "fr");
        assert!(s.catalog_path.is_none());
    }
}
