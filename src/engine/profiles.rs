// ==========================================
// 推拉门配置系统 - 型材推导引擎
// ==========================================
// 职责: 轨道 / 拉手 / 角码 / 上下横档 / 中间横档
// 输入: Configuration + 填充宽度 + 目录
// 输出: 型材切割清单（引用 + 长度 + 数量）
// ==========================================
// 红线: 目录中不存在的引用 → 行静默省略（轨道除外）
// 红线: 所有长度/数量 floor + clamp ≥0
// ==========================================

use crate::catalog::{HandleGeometry, ReferenceCatalog};
use crate::domain::configuration::{Configuration, TraverseLayout};
use crate::domain::finish::finish_label_or_code;
use crate::domain::lenient::floor_clamp;
use crate::domain::lines::ProfileLine;
use crate::domain::types::{Arrangement, RailType, Range, Tick};
use crate::engine::filling_width::FillingWidthResolver;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 下角码引用
pub const CORNER_REF: &str = "CCLA";
/// 96CA 上横档引用
pub const TOP_TRAVERSE_REF: &str = "TI28";
/// 96CA 下横档引用
pub const BOTTOM_TRAVERSE_REF: &str = "THB52";

// ==========================================
// 输出结构
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RailLines {
    pub top: ProfileLine,
    pub bottom: ProfileLine,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraverseLines {
    pub top: Option<ProfileLine>,
    pub bottom: Option<ProfileLine>,
    pub intermediate: Vec<ProfileLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileMeta {
    pub range: Range,
    pub rail: RailType,
    pub arrangement: Arrangement,
    pub leaves: u32,
    pub filling_width: u32,
    pub handle_ref: String,
    pub geometry: HandleGeometry,
    pub finish_code: String,
    pub finish_label: String,
}

/// 型材推导结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDerivation {
    pub rails: RailLines,
    pub handle: Option<ProfileLine>,
    pub corner: Option<ProfileLine>,
    pub traverses: TraverseLines,
    pub meta: ProfileMeta,
}

impl ProfileDerivation {
    /// 按报价单顺序列出所有行: 轨道 → 拉手 → 角码 → 上横档 → 下横档 → 中间横档
    pub fn all(&self) -> Vec<&ProfileLine> {
        let mut out = vec![&self.rails.top, &self.rails.bottom];
        out.extend(self.handle.iter());
        out.extend(self.corner.iter());
        out.extend(self.traverses.top.iter());
        out.extend(self.traverses.bottom.iter());
        out.extend(self.traverses.intermediate.iter());
        out
    }

    pub fn handle_length(&self) -> u32 {
        self.handle.as_ref().map(|l| l.length).unwrap_or(0)
    }

    pub fn corner_length(&self) -> u32 {
        self.corner.as_ref().map(|l| l.length).unwrap_or(0)
    }

    pub fn top_traverse_length(&self) -> u32 {
        self.traverses.top.as_ref().map(|l| l.length).unwrap_or(0)
    }

    /// 中间横档总数（所有引用合计）
    pub fn intermediate_qty(&self) -> u32 {
        self.traverses.intermediate.iter().map(|l| l.qty).sum()
    }

    /// 中间横档长度（所有引用长度一致）
    pub fn intermediate_length(&self) -> u32 {
        self.traverses
            .intermediate
            .first()
            .map(|l| l.length)
            .unwrap_or(0)
    }
}

// ==========================================
// 纯规则函数
// ==========================================

/// 轨道引用对 (上轨, 下轨)
///
/// - 82 → RH82 / RB55
/// - 96 / 96CA 双轨 → RH96 / RB65；单轨 → RH50 / RB48
/// - 未识别系列 → RH96 / RB65
pub fn rail_refs(range: Range, rail: RailType) -> (&'static str, &'static str) {
    match (range, rail) {
        (Range::R82, _) => ("RH82", "RB55"),
        (Range::R96 | Range::R96Ca, RailType::Simple) => ("RH50", "RB48"),
        (Range::R96 | Range::R96Ca, RailType::Double) => ("RH96", "RB65"),
        (Range::Other, _) => ("RH96", "RB65"),
    }
}

/// 轨道长度: 单轨 = W × n × 2（往返行程），双轨 = W
pub fn rail_length(rail: RailType, width: u32, leaves: u32) -> u32 {
    match rail {
        RailType::Simple => width.saturating_mul(leaves).saturating_mul(2),
        RailType::Double => width,
    }
}

/// 拉手长度: 96CA = H − 54, 其他 = H − 50
pub fn handle_length(range: Range, height: u32) -> u32 {
    let clearance = if range == Range::R96Ca { 54 } else { 50 };
    height.saturating_sub(clearance)
}

/// 中间横档引用
///
/// - 96: 16 → TI16, 19 → TI19, 其他 → TI19
/// - 96CA: "28" → TI28, "37" → TI37, 其他 → 无
/// - 82 / 其他系列: 无
pub fn intermediate_ref(range: Range, tick: Tick, group_type: &str) -> Option<&'static str> {
    match range {
        Range::R96 => match tick {
            Tick::T16 => Some("TI16"),
            _ => Some("TI19"),
        },
        Range::R96Ca => match group_type.trim() {
            "28" => Some("TI28"),
            "37" => Some("TI37"),
            _ => None,
        },
        Range::R82 | Range::Other => None,
    }
}

/// 中间横档数量（按引用聚合，保持首次出现顺序）
///
/// - sameForAllLeaves: groups[0].count × n
/// - 否则: 逐组累加（每组已是"该门扇"的数量）
pub fn intermediate_quantities(
    range: Range,
    tick: Tick,
    layout: &TraverseLayout,
    leaves: u32,
) -> Vec<(&'static str, u32)> {
    let mut totals: Vec<(&'static str, u32)> = Vec::new();
    let mut add = |reference: Option<&'static str>, qty: u32| {
        let Some(reference) = reference else { return };
        if qty == 0 {
            return;
        }
        match totals.iter_mut().find(|(r, _)| *r == reference) {
            Some((_, total)) => *total = total.saturating_add(qty),
            None => totals.push((reference, qty)),
        }
    };

    if layout.same_for_all_leaves {
        if let Some(g0) = layout.groups.first() {
            add(
                intermediate_ref(range, tick, &g0.kind),
                g0.count.saturating_mul(leaves),
            );
        }
    } else {
        for group in &layout.groups {
            add(intermediate_ref(range, tick, &group.kind), group.count);
        }
    }

    totals
}

// ==========================================
// ProfileEngine - 型材推导引擎
// ==========================================
pub struct ProfileEngine<'a> {
    catalog: &'a dyn ReferenceCatalog,
}

impl<'a> ProfileEngine<'a> {
    pub fn new(catalog: &'a dyn ReferenceCatalog) -> Self {
        Self { catalog }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 推导完整型材清单
    #[instrument(skip(self, config), fields(range = %config.range, rail = %config.rail, leaves = config.leaves()))]
    pub fn derive(&self, config: &Configuration) -> ProfileDerivation {
        let leaves = config.leaves();
        let geometry = HandleGeometry::lookup(self.catalog, &config.handle);
        let filling_width = FillingWidthResolver::new(self.catalog).resolve(config);
        let finish_label = finish_label_or_code(&config.finish_code);

        let meta = ProfileMeta {
            range: config.range,
            rail: config.rail,
            arrangement: config.arrangement,
            leaves,
            filling_width,
            handle_ref: config.handle.clone(),
            geometry,
            finish_code: config.finish_code.clone(),
            finish_label,
        };

        let rails = self.calc_rails(config, &meta);
        let handle = self.calc_handle(config, &meta);
        let corner = self.calc_corner(&meta);
        let top = self.calc_top_traverse(&meta);
        let bottom = self.calc_bottom_traverse(&meta);
        let intermediate = self.calc_intermediate_traverses(config, &meta);

        debug!(
            filling_width,
            handle = handle.is_some(),
            corner = corner.is_some(),
            intermediate = intermediate.len(),
            "型材推导完成"
        );

        ProfileDerivation {
            rails,
            handle,
            corner,
            traverses: TraverseLines {
                top,
                bottom,
                intermediate,
            },
            meta,
        }
    }

    // ==========================================
    // 轨道
    // ==========================================

    fn calc_rails(&self, config: &Configuration, meta: &ProfileMeta) -> RailLines {
        let (top_ref, bottom_ref) = rail_refs(meta.range, meta.rail);
        let length = rail_length(meta.rail, config.width, meta.leaves);

        RailLines {
            top: self.make_line(top_ref, "Rail haut", length as f64, 1, meta),
            bottom: self.make_line(bottom_ref, "Rail bas", length as f64, 1, meta),
        }
    }

    // ==========================================
    // 拉手（每门扇两侧各一支）
    // ==========================================

    fn calc_handle(&self, config: &Configuration, meta: &ProfileMeta) -> Option<ProfileLine> {
        if !self.is_available(&meta.handle_ref) {
            return None;
        }
        let length = handle_length(meta.range, config.height);
        Some(self.make_line(
            &meta.handle_ref,
            "Poignée",
            length as f64,
            meta.leaves.saturating_mul(2),
            meta,
        ))
    }

    // ==========================================
    // 下角码（96CA 无）
    // ==========================================

    fn calc_corner(&self, meta: &ProfileMeta) -> Option<ProfileLine> {
        if meta.range == Range::R96Ca || !self.is_available(CORNER_REF) {
            return None;
        }
        let length = meta.filling_width as f64 - meta.geometry.c;
        Some(self.make_line(CORNER_REF, "Cornière basse", length, meta.leaves, meta))
    }

    // ==========================================
    // 上 / 下横档（仅 96CA）
    // ==========================================

    fn calc_top_traverse(&self, meta: &ProfileMeta) -> Option<ProfileLine> {
        if meta.range != Range::R96Ca || !self.is_available(TOP_TRAVERSE_REF) {
            return None;
        }
        let length = meta.filling_width as f64 - meta.geometry.t;
        Some(self.make_line(
            TOP_TRAVERSE_REF,
            "Traverse intermédiaire 28",
            length,
            meta.leaves,
            meta,
        ))
    }

    fn calc_bottom_traverse(&self, meta: &ProfileMeta) -> Option<ProfileLine> {
        if meta.range != Range::R96Ca || !self.is_available(BOTTOM_TRAVERSE_REF) {
            return None;
        }
        let length = meta.filling_width as f64 - meta.geometry.t;
        Some(self.make_line(
            BOTTOM_TRAVERSE_REF,
            "Traverse haute/basse 52",
            length,
            meta.leaves,
            meta,
        ))
    }

    // ==========================================
    // 中间横档
    // ==========================================

    fn calc_intermediate_traverses(
        &self,
        config: &Configuration,
        meta: &ProfileMeta,
    ) -> Vec<ProfileLine> {
        let length = meta.filling_width as f64 - meta.geometry.t;

        intermediate_quantities(meta.range, config.tick, &config.traverses, meta.leaves)
            .into_iter()
            .filter(|(reference, _)| self.is_available(reference))
            .map(|(reference, qty)| {
                self.make_line(reference, "Traverse intermédiaire", length, qty, meta)
            })
            .collect()
    }

    // ==========================================
    // 辅助方法
    // ==========================================

    fn is_available(&self, reference: &str) -> bool {
        let found = !reference.is_empty() && self.catalog.contains(reference);
        if !found {
            debug!(reference, "目录中无此型材，行省略");
        }
        found
    }

    fn make_line(
        &self,
        reference: &str,
        fallback_label: &str,
        length: f64,
        qty: u32,
        meta: &ProfileMeta,
    ) -> ProfileLine {
        let description = self
            .catalog
            .find_by_reference(reference)
            .map(|e| e.designation.clone())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| fallback_label.to_string());

        ProfileLine {
            reference: reference.to_string(),
            description,
            length: floor_clamp(length),
            qty,
            finish_code: meta.finish_code.clone(),
            finish_label: meta.finish_label.clone(),
        }
    }
}
