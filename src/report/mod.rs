// ==========================================
// 推拉门配置系统 - 报价单层
// ==========================================
// 职责: 推导结果 → 报价单行 → JSON / CSV
// 红线: 只读推导结果,不重新计算
// ==========================================

pub mod error;
pub mod export;
pub mod quote;
pub mod rows;

pub use error::{ReportError, ReportResult};
pub use export::ExportFormat;
pub use quote::{ProjectHeader, Quote};
pub use rows::{filling_rows, format_mm, AccessoryRow, FillingRow, ProfileRow, PLACEHOLDER};
