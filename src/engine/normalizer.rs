// ==========================================
// 推拉门配置系统 - 配置规范化
// ==========================================
// 职责: 跨字段一致性（系列 ↔ 厚度 ↔ 表面处理 ↔ 拉手）
// 红线: 与推导分离,流水线不隐式调用
// 红线: 幂等 normalize(normalize(c)) == normalize(c)
// ==========================================

use crate::domain::configuration::Configuration;
use crate::domain::types::{RailType, Range, Tick};
use tracing::{debug, instrument};

/// 项目名称最大长度（字符）
pub const NAME_MAX_CHARS: usize = 80;

// ==========================================
// 选项表
// ==========================================

/// 系列可选厚度（首项为默认值）
pub fn tick_options(range: Range) -> &'static [Tick] {
    match range {
        Range::R82 => &[Tick::T19],
        Range::R96 => &[Tick::T16, Tick::T19],
        Range::R96Ca => &[Tick::T6To8, Tick::T10To12],
        Range::Other => &[Tick::T19],
    }
}

/// 系列 + 厚度可选表面处理
pub fn finish_options(range: Range, tick: Tick) -> &'static [&'static str] {
    match (range, tick) {
        (Range::R82, _) => &["LBL", "SA", "BR"],
        (Range::R96, Tick::T16) => &["LBL", "SA", "LNOG", "PB", "BR"],
        (Range::R96, Tick::T19) => &["LBL", "SA", "LNOG", "L9002G", "BI", "PB", "BR"],
        (Range::R96Ca, _) => &["LBLG", "LBL", "SA", "LNOG", "BI", "BR"],
        _ => &[],
    }
}

/// 96 / 19mm 拉手: 按表面处理过滤
const HANDLES_96_19: &[(&str, &[&str])] = &[
    ("P30", &["BR", "LBLG", "LNOG"]),
    ("P200", &["BR", "SA", "LBL"]),
    ("P300-19", &["BR", "SA", "LBL", "LNOG", "L9002G", "PB"]),
    ("P400", &["BR", "SA", "LBL", "LNOG"]),
    ("P600", &["BR", "SA", "LBL", "LNOG", "L9002G", "PB", "BI"]),
    ("P700", &["BR", "SA", "LBL", "LNOG", "L9002G", "BI"]),
    ("P710", &["BR", "SA", "LBL", "LNOG", "L9002G", "BI"]),
];

/// 系列 + 厚度 + 表面处理可选拉手
pub fn handle_options(range: Range, tick: Tick, finish: &str) -> Vec<&'static str> {
    match (range, tick) {
        (Range::R82, _) => vec!["P100", "P110"],
        (Range::R96, Tick::T16) => vec!["P300-16"],
        (Range::R96, Tick::T19) => HANDLES_96_19
            .iter()
            .filter(|(_, finishes)| finishes.contains(&finish))
            .map(|(handle, _)| *handle)
            .collect(),
        (Range::R96Ca, _) => vec!["P810"],
        _ => Vec::new(),
    }
}

// ==========================================
// ConfigurationNormalizer - 配置规范化器
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigurationNormalizer;

impl ConfigurationNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// 规范化配置
    ///
    /// 顺序: 名称 → 轨道 → 厚度 → 表面处理 → 拉手
    /// 每一步只依赖前一步结果
    #[instrument(skip(self, config), fields(range = %config.range))]
    pub fn normalize(&self, config: &Configuration) -> Configuration {
        let mut out = config.clone();

        out.name = normalize_name(&out.name);
        out.leaves_count = out.leaves_count.max(1);

        if out.range == Range::R82 && out.rail != RailType::Double {
            debug!("82 系列强制双轨");
            out.rail = RailType::Double;
        }

        let ticks = tick_options(out.range);
        if !ticks.contains(&out.tick) {
            debug!(from = %out.tick, to = %ticks[0], "厚度不适用于该系列");
            out.tick = ticks[0];
        }

        let finishes = finish_options(out.range, out.tick);
        if !finishes.contains(&out.finish_code.as_str()) {
            let fallback = finishes.first().copied().unwrap_or_default();
            debug!(from = %out.finish_code, to = fallback, "表面处理不可用");
            out.finish_code = fallback.to_string();
        }

        let handles = handle_options(out.range, out.tick, &out.finish_code);
        if !handles.contains(&out.handle.as_str()) {
            let fallback = handles.first().copied().unwrap_or_default();
            debug!(from = %out.handle, to = fallback, "拉手不可用");
            out.handle = fallback.to_string();
        }

        out
    }
}

/// 去除首尾空白并截断到 80 字符
fn normalize_name(name: &str) -> String {
    let truncated: String = name.trim().chars().take(NAME_MAX_CHARS).collect();
    truncated.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_82_forces_double_rail() {
        let mut cfg = Configuration::new(Range::R82);
        cfg.rail = RailType::Simple;
        let out = ConfigurationNormalizer::new().normalize(&cfg);
        assert_eq!(out.rail, RailType::Double);
        assert_eq!(out.tick, Tick::T19);
        assert_eq!(out.finish_code, "LBL");
        assert_eq!(out.handle, "P100");
    }

    #[test]
    fn test_96ca_tick_coerced() {
        let mut cfg = Configuration::new(Range::R96Ca);
        cfg.tick = Tick::T19;
        cfg.finish_code = "SA".to_string();
        let out = ConfigurationNormalizer::new().normalize(&cfg);
        assert_eq!(out.tick, Tick::T6To8);
        assert_eq!(out.finish_code, "SA");
        assert_eq!(out.handle, "P810");
    }

    #[test]
    fn test_96_19_handle_filtered_by_finish() {
        assert_eq!(
            handle_options(Range::R96, Tick::T19, "LBLG"),
            vec!["P30"]
        );
        assert_eq!(
            handle_options(Range::R96, Tick::T19, "BI"),
            vec!["P600", "P700", "P710"]
        );
        assert!(handle_options(Range::R96, Tick::T19, "XYZ").is_empty());
    }

    #[test]
    fn test_handle_follows_finish() {
        let mut cfg = Configuration::new(Range::R96);
        cfg.tick = Tick::T19;
        cfg.finish_code = "PB".to_string();
        cfg.handle = "P200".to_string();
        let out = ConfigurationNormalizer::new().normalize(&cfg);
        assert_eq!(out.finish_code, "PB");
        assert_eq!(out.handle, "P300-19");
    }

    #[test]
    fn test_unknown_range_has_no_finish_or_handle() {
        let mut cfg = Configuration::new(Range::Other);
        cfg.finish_code = "SA".to_string();
        cfg.handle = "P100".to_string();
        let out = ConfigurationNormalizer::new().normalize(&cfg);
        assert_eq!(out.tick, Tick::T19);
        assert_eq!(out.finish_code, "");
        assert_eq!(out.handle, "");
    }

    #[test]
    fn test_name_trimmed_and_truncated() {
        let long = format!("  {}  ", "é".repeat(100));
        assert_eq!(normalize_name(&long).chars().count(), NAME_MAX_CHARS);

        let edge = format!("{} x", "a".repeat(79));
        assert_eq!(normalize_name(&edge), "a".repeat(79));
    }

    #[test]
    fn test_idempotent() {
        let mut cfg = Configuration::new(Range::R96);
        cfg.tick = Tick::T6To8;
        cfg.finish_code = "LBLG".to_string();
        cfg.name = format!("{} y", "b".repeat(79));
        let normalizer = ConfigurationNormalizer::new();
        let once = normalizer.normalize(&cfg);
        let twice = normalizer.normalize(&once);
        assert_eq!(once, twice);
    }
}
