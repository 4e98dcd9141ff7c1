// ==========================================
// 推拉门配置系统 - 填充宽度解析器
// ==========================================
// 职责: 计算每个门扇的可用填充宽度
// 输入: 轨道类型 + 排布 + 总宽 + 门扇数 + 拉手几何常量 (y, z)
// 输出: 每门扇宽度 (mm, 整数, ≥0)
// ==========================================

use crate::catalog::{HandleGeometry, ReferenceCatalog};
use crate::domain::configuration::Configuration;
use crate::domain::lenient::floor_clamp;
use crate::domain::types::{Arrangement, RailType};
use tracing::trace;

// ==========================================
// FillingWidthResolver - 填充宽度解析器
// ==========================================
pub struct FillingWidthResolver<'a> {
    catalog: &'a dyn ReferenceCatalog,
}

impl<'a> FillingWidthResolver<'a> {
    pub fn new(catalog: &'a dyn ReferenceCatalog) -> Self {
        Self { catalog }
    }

    /// 按配置解析填充宽度（拉手常量从目录查找，未知拉手 → y = z = 0）
    pub fn resolve(&self, config: &Configuration) -> u32 {
        let geometry = HandleGeometry::lookup(self.catalog, &config.handle);
        let width = Self::compute(
            config.rail,
            config.arrangement,
            config.width,
            config.leaves(),
            &geometry,
        );
        trace!(
            rail = %config.rail,
            arrangement = %config.arrangement,
            handle = %config.handle,
            width,
            "填充宽度"
        );
        width
    }

    /// 填充宽度公式（均 floor 后 clamp ≥0）
    ///
    /// - 双轨 + centre: (W − 4z + 2y) / 4
    /// - 双轨 + 其他:   (W − 2z + y·(n−1)) / n
    /// - 单轨:          W − 2z
    ///
    /// 双轨门扇在每个内部接缝处搭接 y，在外侧轨槽处内缩 z；
    /// 单轨无搭接，仅两侧内缩。
    pub fn compute(
        rail: RailType,
        arrangement: Arrangement,
        width: u32,
        leaves: u32,
        geometry: &HandleGeometry,
    ) -> u32 {
        let w = width as f64;
        let n = leaves.max(1) as f64;
        let HandleGeometry { y, z, .. } = *geometry;

        let raw = match (rail, arrangement) {
            (RailType::Double, Arrangement::Centre) => (w - 4.0 * z + 2.0 * y) / 4.0,
            (RailType::Double, Arrangement::Quinconce) => (w - 2.0 * z + y * (n - 1.0)) / n,
            (RailType::Simple, _) => w - 2.0 * z,
        };

        floor_clamp(raw)
    }
}
