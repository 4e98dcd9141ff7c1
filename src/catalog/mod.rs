// ==========================================
// 推拉门配置系统 - 参考目录层
// ==========================================
// 职责: 型材/配件参考代码 → 描述元数据
// 红线: 只读查找,初始化后不可变
// 红线: 引擎通过 ReferenceCatalog trait 注入,不依赖全局单例
// ==========================================

mod builtin;
pub mod error;
mod loader;

pub use error::{CatalogError, CatalogResult};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ==========================================
// CatalogFamily - 目录类别
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogFamily {
    Profile,   // 型材
    Accessory, // 配件
}

impl CatalogFamily {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "profile" | "profil" => Some(CatalogFamily::Profile),
            "accessory" | "accessoire" => Some(CatalogFamily::Accessory),
            _ => None,
        }
    }
}

impl fmt::Display for CatalogFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogFamily::Profile => write!(f, "profile"),
            CatalogFamily::Accessory => write!(f, "accessory"),
        }
    }
}

// ==========================================
// CatalogEntry - 目录条目
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub reference: String,

    pub designation: String,

    pub family: CatalogFamily,

    /// 分类（rail / poignee / roue / frein ...）
    #[serde(rename = "type")]
    pub kind: String,

    /// 门扇间搭接余量（仅拉手）
    pub y: Option<f64>,

    /// 边部间隙（仅拉手）
    pub z: Option<f64>,

    /// 角码间隙（仅拉手）
    pub c: Option<f64>,

    /// 横档间隙（仅拉手）
    pub t: Option<f64>,
}

impl CatalogEntry {
    pub fn new(reference: &str, designation: &str, family: CatalogFamily, kind: &str) -> Self {
        Self {
            reference: reference.to_string(),
            designation: designation.to_string(),
            family,
            kind: kind.to_string(),
            y: None,
            z: None,
            c: None,
            t: None,
        }
    }

    /// 设置拉手几何常量
    pub fn with_geometry(mut self, y: f64, z: f64, c: f64, t: f64) -> Self {
        self.y = Some(y);
        self.z = Some(z);
        self.c = Some(c);
        self.t = Some(t);
        self
    }
}

// ==========================================
// ReferenceCatalog - 目录查找能力
// ==========================================
pub trait ReferenceCatalog: Send + Sync {
    /// 按参考代码查找；不存在返回 None
    fn find_by_reference(&self, reference: &str) -> Option<&CatalogEntry>;

    fn contains(&self, reference: &str) -> bool {
        self.find_by_reference(reference).is_some()
    }
}

// ==========================================
// Catalog - HashMap 实现
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, CatalogEntry>,
}

impl Catalog {
    /// 空目录（所有引用都视为不可用）
    pub fn empty() -> Self {
        Self::default()
    }

    /// 内置产品目录
    pub fn builtin() -> Self {
        Self::from_entries(builtin::entries())
    }

    /// 从条目列表构建（同一引用后者覆盖前者）
    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|e| (e.reference.clone(), e))
            .collect();
        Self { entries }
    }

    /// 插入或覆盖条目
    pub fn insert(&mut self, entry: CatalogEntry) {
        self.entries.insert(entry.reference.clone(), entry);
    }

    /// 移除条目（测试"引用缺失"场景）
    pub fn remove(&mut self, reference: &str) -> Option<CatalogEntry> {
        self.entries.remove(reference)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按参考代码排序后的条目
    pub fn entries(&self) -> Vec<&CatalogEntry> {
        let mut list: Vec<&CatalogEntry> = self.entries.values().collect();
        list.sort_by(|a, b| a.reference.cmp(&b.reference));
        list
    }
}

impl ReferenceCatalog for Catalog {
    fn find_by_reference(&self, reference: &str) -> Option<&CatalogEntry> {
        self.entries.get(reference)
    }
}

// ==========================================
// HandleGeometry - 拉手几何常量
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HandleGeometry {
    pub y: f64,
    pub z: f64,
    pub c: f64,
    pub t: f64,
    /// 拉手引用是否存在于目录
    pub found: bool,
}

impl HandleGeometry {
    /// 查找拉手常量；未知引用或缺失常量 → 0
    pub fn lookup(catalog: &dyn ReferenceCatalog, handle_ref: &str) -> Self {
        match catalog.find_by_reference(handle_ref) {
            Some(entry) => Self {
                y: finite_or_zero(entry.y),
                z: finite_or_zero(entry.z),
                c: finite_or_zero(entry.c),
                t: finite_or_zero(entry.t),
                found: true,
            },
            None => Self::default(),
        }
    }
}

fn finite_or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}
