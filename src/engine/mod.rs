// ==========================================
// 推拉门配置系统 - 引擎层
// ==========================================
// 职责: 配置 → 型材 / 配件 / 填充板 / 布局
// 红线: 引擎不做 I/O,不返回错误,所有输出可重复
// 红线: 目录通过 ReferenceCatalog 注入
// ==========================================

pub mod accessories;
pub mod filling_width;
pub mod fillings;
pub mod layout;
pub mod normalizer;
pub mod orchestrator;
pub mod profiles;

// 重导出核心引擎
pub use accessories::{AccessoryDerivation, AccessoryEngine, AccessoryLengths};
pub use filling_width::FillingWidthResolver;
pub use fillings::{
    cluster_across_leaves, resolve_filling_heights, theoretical_span, FillingDerivation,
    FillingResolver,
};
pub use layout::LayoutGeometry;
pub use normalizer::{finish_options, handle_options, tick_options, ConfigurationNormalizer};
pub use orchestrator::{Derivation, DerivationPipeline};
pub use profiles::{intermediate_ref, ProfileDerivation, ProfileEngine};
