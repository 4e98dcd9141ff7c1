// ==========================================
// 推拉门配置系统 - 填充板尺寸解析器
// ==========================================
// 职责: 每门扇填充板切割高度（下段 / 中间段 / 上段）
// 流程: 原始分段 → 等分归一（单门扇）→ 跨门扇聚类
// ==========================================
// 红线: 所有分段 clip0（负值 → 0）
// 红线: 等分归一幂等
// ==========================================

use crate::config::settings::EqualizationSettings;
use crate::domain::configuration::Configuration;
use crate::domain::lenient::clip0;
use crate::domain::lines::{FillingEntry, FillingHeights, FillingWidth};
use crate::domain::types::{Range, Tick};
use crate::engine::profiles::{intermediate_ref, ProfileDerivation};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// 96 系列: 顶部净空（轨道 + 间隙）
const CLEARANCE_96: f64 = 50.0;
/// 96 系列: 横档半宽扣减
const HALF_BAR_96: f64 = 1.0;

/// 96CA 无横档时: 上下框合计扣减
const CLEARANCE_96CA_EMPTY: f64 = 54.0 + 120.0;

/// 96CA 横档扣减 (下段, 中间段, 上段)
#[derive(Debug, Clone, Copy, PartialEq)]
struct Deductions96Ca {
    bottom: f64,
    between: f64,
    top: f64,
}

const DEDUCT_96CA_TI28: Deductions96Ca = Deductions96Ca {
    bottom: 45.0 + 5.0,
    between: 10.0,
    top: 55.0 + 20.0 + 5.0,
};

const DEDUCT_96CA_TI37: Deductions96Ca = Deductions96Ca {
    bottom: 45.0 + 9.5,
    between: 19.0,
    top: 55.0 + 20.0 + 9.5,
};

fn is_ti37(traverse_ref: Option<&str>) -> bool {
    traverse_ref.is_some_and(|r| r.trim().eq_ignore_ascii_case("TI37"))
}

// ==========================================
// 输出结构
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillingMeta {
    pub range: Range,
    pub tick: Tick,
    pub filling_width: u32,
    /// groups[0] 对应的横档型号
    pub traverse_ref: Option<String>,
}

/// 填充板推导结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillingDerivation {
    pub per_leaf: Vec<FillingEntry>,
    pub meta: FillingMeta,
}

// ==========================================
// 纯规则函数
// ==========================================

/// 原始分段高度（中心高度内部升序，所有段 clip0）
///
/// centers 须为有限值（见 TraverseGroup::centers），与等分归一共用同一列表
///
/// - 96 / 其他: 下段 y₁−1, 中间段 yₖ₊₁−yₖ−2, 上段 H−50−yₙ−1
/// - 96CA: 按 TI28 / TI37 扣减
pub fn resolve_filling_heights(
    range: Range,
    height: u32,
    centers: &[f64],
    traverse_ref: Option<&str>,
) -> FillingHeights {
    let mut centers = centers.to_vec();
    centers.sort_by(|a, b| a.total_cmp(b));
    let h = height as f64;

    let (Some(&first), Some(&last)) = (centers.first(), centers.last()) else {
        let full = match range {
            Range::R96Ca => h - CLEARANCE_96CA_EMPTY,
            _ => h - CLEARANCE_96,
        };
        return FillingHeights {
            bottom: clip0(full),
            between: Vec::new(),
            top: None,
        };
    };

    let (bottom, between_deduct, top) = match range {
        Range::R96Ca => {
            let d = if is_ti37(traverse_ref) {
                DEDUCT_96CA_TI37
            } else {
                DEDUCT_96CA_TI28
            };
            (first - d.bottom, d.between, h - d.top - last)
        }
        _ => (
            first - HALF_BAR_96,
            2.0 * HALF_BAR_96,
            h - CLEARANCE_96 - last - HALF_BAR_96,
        ),
    };

    let between = centers
        .windows(2)
        .map(|w| clip0(w[1] - w[0] - between_deduct))
        .collect();

    FillingHeights {
        bottom: clip0(bottom),
        between,
        top: Some(clip0(top)),
    }
}

/// 理论可用总高度 ΣH（解析计算，不取原始分段之和）
///
/// - 96 / 其他: H − 50 − 2n
/// - 96CA: H − (130 + 10(n−1))；TI37: H − (139 + 19(n−1))
pub fn theoretical_span(range: Range, height: u32, n: usize, traverse_ref: Option<&str>) -> f64 {
    let h = height as f64;
    let n = n as f64;
    match range {
        Range::R96Ca => {
            if is_ti37(traverse_ref) {
                h - (139.0 + 19.0 * (n - 1.0))
            } else {
                h - (130.0 + 10.0 * (n - 1.0))
            }
        }
        _ => h - CLEARANCE_96 - 2.0 * n,
    }
}

/// 等分目标值 floor(ΣH / (n+1))，≥0
pub fn equalization_target(range: Range, height: u32, n: usize, traverse_ref: Option<&str>) -> f64 {
    clip0((theoretical_span(range, height, n, traverse_ref) / (n as f64 + 1.0)).floor())
}

/// 跨门扇聚类: 差值 ≤ tolerance 的正值归并到簇内最小值
///
/// 对升序去重后的正值贪心分簇: 值与当前簇最小值之差 ≤ tolerance 时并入
pub fn cluster_across_leaves(entries: &mut [FillingEntry], tolerance: f64) {
    let mut values: Vec<f64> = entries
        .iter()
        .flat_map(|e| e.heights.segments())
        .filter(|v| *v > 0.0)
        .collect();
    values.sort_by(|a, b| a.total_cmp(b));
    values.dedup();

    // (簇最小值, 簇最大值)
    let mut clusters: Vec<(f64, f64)> = Vec::new();
    for v in values {
        match clusters.last_mut() {
            Some((lo, hi)) if v - *lo <= tolerance => *hi = v,
            _ => clusters.push((v, v)),
        }
    }

    let representative = |v: f64| -> f64 {
        if v <= 0.0 {
            return v;
        }
        clusters
            .iter()
            .find(|(lo, hi)| v >= *lo && v <= *hi)
            .map(|(lo, _)| *lo)
            .unwrap_or(v)
    };

    for entry in entries.iter_mut() {
        entry.heights.map_segments(representative);
    }
}

// ==========================================
// FillingResolver - 填充板尺寸解析器
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct FillingResolver {
    settings: EqualizationSettings,
}

impl FillingResolver {
    pub fn new(settings: EqualizationSettings) -> Self {
        Self { settings }
    }

    /// 系列对应的测量步长
    fn step(&self, range: Range) -> f64 {
        match range {
            Range::R96Ca => self.settings.step_96ca_mm,
            _ => self.settings.step_96_mm,
        }
    }

    /// 是否视为"意图等分"
    ///
    /// 任一成立即等分:
    /// 1) 强制开关
    /// 2) 至少两个间距且 max(gap) − min(gap) ≤ 间距容差
    /// 3) 所有原始分段与目标值之差 ≤ 接近容差
    pub fn is_intended_uniform(
        &self,
        range: Range,
        centers: &[f64],
        heights: &FillingHeights,
        target: f64,
    ) -> bool {
        if self.settings.force {
            return true;
        }

        let mut sorted: Vec<f64> = centers.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let gaps: Vec<f64> = sorted.windows(2).map(|w| w[1] - w[0]).collect();
        if gaps.len() >= 2 {
            let max = gaps.iter().copied().fold(f64::MIN, f64::max);
            let min = gaps.iter().copied().fold(f64::MAX, f64::min);
            if max - min <= self.settings.gap_tolerance_mm {
                trace!(spread = max - min, "间距一致");
                return true;
            }
        }

        let tolerance = self.settings.closeness_tolerance(self.step(range));
        heights
            .segments()
            .iter()
            .all(|seg| (seg - target).abs() <= tolerance)
    }

    /// 单门扇等分归一；返回是否改写
    ///
    /// 无横档时不处理
    pub fn equalize(
        &self,
        range: Range,
        height: u32,
        centers: &[f64],
        traverse_ref: Option<&str>,
        heights: &mut FillingHeights,
    ) -> bool {
        if centers.is_empty() {
            return false;
        }
        let target = equalization_target(range, height, centers.len(), traverse_ref);
        if !self.is_intended_uniform(range, centers, heights, target) {
            return false;
        }
        heights.map_segments(|_| target);
        true
    }

    /// 推导所有门扇的填充板尺寸
    #[instrument(skip(self, config, profiles), fields(range = %config.range, leaves = config.leaves()))]
    pub fn derive(&self, config: &Configuration, profiles: &ProfileDerivation) -> FillingDerivation {
        let filling_width = profiles.meta.filling_width;
        let leaf_ref = |i: usize| -> Option<String> {
            config
                .traverses
                .group_for_leaf(i)
                .and_then(|g| intermediate_ref(config.range, config.tick, &g.kind))
                .map(str::to_string)
        };

        let mut per_leaf: Vec<FillingEntry> = config
            .centers_by_leaf()
            .into_iter()
            .enumerate()
            .map(|(i, centers)| {
                let traverse_ref = leaf_ref(i);
                let mut heights = resolve_filling_heights(
                    config.range,
                    config.height,
                    &centers,
                    traverse_ref.as_deref(),
                );
                let equalized = self.equalize(
                    config.range,
                    config.height,
                    &centers,
                    traverse_ref.as_deref(),
                    &mut heights,
                );
                debug!(leaf = i + 1, crossbars = centers.len(), equalized, "门扇分段");

                FillingEntry {
                    leaf: i as u32 + 1,
                    width: FillingWidth {
                        raw: filling_width,
                        cut: filling_width,
                    },
                    heights,
                    traverse_ref,
                    equalized,
                }
            })
            .collect();

        cluster_across_leaves(&mut per_leaf, self.settings.cluster_tolerance_mm);

        FillingDerivation {
            per_leaf,
            meta: FillingMeta {
                range: config.range,
                tick: config.tick,
                filling_width,
                traverse_ref: leaf_ref(0),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(leaf: u32, bottom: f64, between: Vec<f64>, top: Option<f64>) -> FillingEntry {
        FillingEntry {
            leaf,
            width: FillingWidth { raw: 500, cut: 500 },
            heights: FillingHeights {
                bottom,
                between,
                top,
            },
            traverse_ref: None,
            equalized: false,
        }
    }

    #[test]
    fn test_raw_96_three_crossbars() {
        let h = resolve_filling_heights(Range::R96, 2100, &[1500.0, 500.0, 1000.0], None);
        assert_eq!(h.bottom, 499.0);
        assert_eq!(h.between, vec![498.0, 498.0]);
        assert_eq!(h.top, Some(549.0));
    }

    #[test]
    fn test_raw_96ca_without_crossbars() {
        let h = resolve_filling_heights(Range::R96Ca, 2400, &[], Some("TI28"));
        assert_eq!(h.bottom, 2226.0);
        assert!(h.between.is_empty());
        assert_eq!(h.top, None);
    }

    #[test]
    fn test_raw_96ca_ti37_deductions() {
        let h = resolve_filling_heights(Range::R96Ca, 2400, &[800.0, 1600.0], Some("TI37"));
        assert_eq!(h.bottom, 745.5);
        assert_eq!(h.between, vec![781.0]);
        assert_eq!(h.top, Some(715.5));
    }

    #[test]
    fn test_raw_clip0() {
        let h = resolve_filling_heights(Range::R96, 100, &[0.0, 90.0], None);
        assert_eq!(h.bottom, 0.0);
        assert_eq!(h.top, Some(0.0));
    }

    #[test]
    fn test_theoretical_span() {
        assert_eq!(theoretical_span(Range::R96, 2100, 3, None), 2044.0);
        assert_eq!(theoretical_span(Range::R96Ca, 2400, 2, Some("TI28")), 2260.0);
        assert_eq!(theoretical_span(Range::R96Ca, 2400, 2, Some("TI37")), 2242.0);
    }

    #[test]
    fn test_equalize_uniform_gaps() {
        let resolver = FillingResolver::default();
        let centers = [500.0, 1000.0, 1500.0];
        let mut h = resolve_filling_heights(Range::R96, 2100, &centers, None);

        assert!(resolver.equalize(Range::R96, 2100, &centers, None, &mut h));
        assert_eq!(h.segments(), vec![511.0; 4]);

        // 幂等
        let before = h.clone();
        resolver.equalize(Range::R96, 2100, &centers, None, &mut h);
        assert_eq!(h, before);
    }

    #[test]
    fn test_equalize_skips_irregular_layout() {
        let resolver = FillingResolver::default();
        let centers = [300.0, 1200.0, 1500.0];
        let mut h = resolve_filling_heights(Range::R96, 2100, &centers, None);
        let raw = h.clone();

        assert!(!resolver.equalize(Range::R96, 2100, &centers, None, &mut h));
        assert_eq!(h, raw);
    }

    #[test]
    fn test_equalize_closeness_single_crossbar() {
        // n=1: ΣH = 2100−50−2 = 2048, target = 1024
        // 原始: 1024−1 = 1023, 2100−50−1024−1 = 1025 → 均在 2.5mm 内
        let resolver = FillingResolver::default();
        let centers = [1024.0];
        let mut h = resolve_filling_heights(Range::R96, 2100, &centers, None);
        assert!(resolver.equalize(Range::R96, 2100, &centers, None, &mut h));
        assert_eq!(h.segments(), vec![1024.0, 1024.0]);
    }

    #[test]
    fn test_equalize_forced() {
        let settings = EqualizationSettings {
            force: true,
            ..EqualizationSettings::default()
        };
        let resolver = FillingResolver::new(settings);
        let centers = [300.0];
        let mut h = resolve_filling_heights(Range::R96, 2100, &centers, None);
        assert!(resolver.equalize(Range::R96, 2100, &centers, None, &mut h));
        assert_eq!(h.bottom, h.top.unwrap());
    }

    #[test]
    fn test_equalize_no_crossbars_untouched() {
        let resolver = FillingResolver::new(EqualizationSettings {
            force: true,
            ..EqualizationSettings::default()
        });
        let mut h = resolve_filling_heights(Range::R96, 2100, &[], None);
        assert!(!resolver.equalize(Range::R96, 2100, &[], None, &mut h));
        assert_eq!(h.bottom, 2050.0);
    }

    #[test]
    fn test_cluster_across_leaves() {
        let mut entries = vec![
            entry(1, 199.0, vec![], Some(500.0)),
            entry(2, 198.0, vec![], Some(502.0)),
            entry(3, 0.0, vec![], None),
        ];
        cluster_across_leaves(&mut entries, 1.0);

        assert_eq!(entries[0].heights.bottom, 198.0);
        assert_eq!(entries[1].heights.bottom, 198.0);
        // 差 2mm 不归并
        assert_eq!(entries[0].heights.top, Some(500.0));
        assert_eq!(entries[1].heights.top, Some(502.0));
        // 0 不参与聚类
        assert_eq!(entries[2].heights.bottom, 0.0);
    }

    #[test]
    fn test_cluster_chain_anchored_on_minimum() {
        let mut entries = vec![
            entry(1, 100.0, vec![100.6], Some(101.2)),
        ];
        cluster_across_leaves(&mut entries, 1.0);
        // 100.6 并入 100；101.2 与簇最小值相差 >1 → 新簇
        assert_eq!(entries[0].heights.segments(), vec![100.0, 100.0, 101.2]);
    }
}
