// ==========================================
// 推拉门配置系统 - 推导流水线
// ==========================================
// 用途: 协调四个推导引擎的执行顺序
// 流程: 填充宽度 → 型材 → { 配件, 填充板 } → 布局几何
// 红线: 纯函数,无 I/O,同输入同输出
// ==========================================

use crate::catalog::ReferenceCatalog;
use crate::config::settings::EqualizationSettings;
use crate::domain::configuration::Configuration;
use crate::engine::accessories::{AccessoryDerivation, AccessoryEngine, AccessoryLengths};
use crate::engine::fillings::{FillingDerivation, FillingResolver};
use crate::engine::layout::LayoutGeometry;
use crate::engine::profiles::{ProfileDerivation, ProfileEngine};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

// ==========================================
// Derivation - 推导结果
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Derivation {
    pub profiles: ProfileDerivation,
    pub accessories: AccessoryDerivation,
    pub fillings: FillingDerivation,
    pub layout: LayoutGeometry,
}

// ==========================================
// DerivationPipeline - 推导流水线
// ==========================================

pub struct DerivationPipeline<'a> {
    catalog: &'a dyn ReferenceCatalog,
    settings: EqualizationSettings,
}

impl<'a> DerivationPipeline<'a> {
    /// 创建流水线
    ///
    /// # 参数
    /// - catalog: 只读参考目录
    /// - settings: 等分归一参数
    pub fn new(catalog: &'a dyn ReferenceCatalog, settings: EqualizationSettings) -> Self {
        Self { catalog, settings }
    }

    /// 执行完整推导
    #[instrument(skip_all, fields(name = %config.name, range = %config.range))]
    pub fn derive(&self, config: &Configuration) -> Derivation {
        info!(
            width = config.width,
            height = config.height,
            leaves = config.leaves(),
            "开始推导"
        );

        // ==========================================
        // 步骤1: 型材（内含填充宽度）
        // ==========================================
        let profiles = ProfileEngine::new(self.catalog).derive(config);
        debug!(
            lines = profiles.all().len(),
            filling_width = profiles.meta.filling_width,
            "型材推导完成"
        );

        // ==========================================
        // 步骤2: 配件（依赖型材长度）
        // ==========================================
        let lengths = AccessoryLengths::from_profiles(&profiles);
        let accessories = AccessoryEngine::new(self.catalog).derive(config, lengths);

        // ==========================================
        // 步骤3: 填充板（依赖填充宽度）
        // ==========================================
        let fillings = FillingResolver::new(self.settings).derive(config, &profiles);

        // ==========================================
        // 步骤4: 布局几何
        // ==========================================
        let layout = LayoutGeometry::build(config, &profiles, &fillings);

        info!(
            profiles = profiles.all().len(),
            accessories = accessories.list.len(),
            leaves = fillings.per_leaf.len(),
            "推导完成"
        );

        Derivation {
            profiles,
            accessories,
            fillings,
            layout,
        }
    }
}
