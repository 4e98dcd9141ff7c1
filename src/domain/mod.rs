// ==========================================
// 推拉门配置系统 - 领域模型层
// ==========================================
// 职责: 定义配置输入、推导输出、领域枚举
// 红线: 不含目录查找逻辑,不含引擎逻辑
// ==========================================

pub mod configuration;
pub mod finish;
pub mod lenient;
pub mod lines;
pub mod types;

// 重导出核心类型
pub use configuration::{AccessoryColors, Absorber, Configuration, TraverseGroup, TraverseLayout};
pub use finish::{finish_label, finish_label_or_code, FINISH_LABELS};
pub use lines::{AccessoryLine, FillingEntry, FillingHeights, FillingWidth, ProfileLine};
pub use types::{AccessoryRole, Arrangement, FillMaterial, RailType, Range, Tick};
