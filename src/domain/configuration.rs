// ==========================================
// 推拉门配置系统 - 配置输入实体
// ==========================================
// 职责: 一次推导调用的不可变输入值
// 红线: 引擎只做单字段 clamp,不做跨字段校验
//       (跨字段一致性见 engine::normalizer)
// ==========================================

use crate::domain::lenient;
use crate::domain::types::{Arrangement, FillMaterial, RailType, Range, Tick};
use serde::{Deserialize, Serialize};

// ==========================================
// TraverseGroup - 横档组（按门扇）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TraverseGroup {
    /// 横档型号代码（96CA: "28" / "37"）
    #[serde(rename = "type", default, deserialize_with = "lenient::text")]
    pub kind: String,

    /// 每个门扇的横档数量
    #[serde(default, deserialize_with = "lenient::mm")]
    pub count: u32,

    /// 横档中心高度（mm，自面板底部量起，未排序）
    #[serde(default, deserialize_with = "lenient::centers")]
    pub heights: Vec<f64>,
}

impl TraverseGroup {
    /// 有效中心高度: 取前 count 个，丢弃非有限值
    pub fn centers(&self) -> Vec<f64> {
        self.heights
            .iter()
            .copied()
            .take(self.count as usize)
            .filter(|h| h.is_finite())
            .collect()
    }
}

// ==========================================
// TraverseLayout - 横档布局
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraverseLayout {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub groups: Vec<TraverseGroup>,

    /// 所有门扇相同（只看 groups[0]）
    #[serde(default = "default_true", deserialize_with = "lenient::flag_or_true")]
    pub same_for_all_leaves: bool,
}

impl Default for TraverseLayout {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            same_for_all_leaves: true,
        }
    }
}

impl TraverseLayout {
    /// 第 leaf_index 个门扇（0 起）使用的横档组
    pub fn group_for_leaf(&self, leaf_index: usize) -> Option<&TraverseGroup> {
        if self.same_for_all_leaves {
            self.groups.first()
        } else {
            self.groups.get(leaf_index)
        }
    }
}

fn default_true() -> bool {
    true
}

// ==========================================
// Absorber - 制动器数量
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Absorber {
    /// 阻尼制动器
    #[serde(default, deserialize_with = "lenient::mm")]
    pub fram: u32,

    /// 经济型制动器
    #[serde(default, deserialize_with = "lenient::mm")]
    pub freco: u32,

    /// 弹片制动器
    #[serde(default, deserialize_with = "lenient::mm")]
    pub frlamelle: u32,
}

// ==========================================
// AccessoryColors - 配件颜色（仅用于选择配件型号变体）
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AccessoryColors {
    #[serde(default, deserialize_with = "lenient::text")]
    pub seal: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub brushes: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub pglass: String,
}

// ==========================================
// Configuration - 推导输入
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// 项目名称
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,

    /// 缺失 → 未识别系列
    #[serde(default = "default_range")]
    pub range: Range,

    #[serde(default = "default_rail")]
    pub rail: RailType,

    #[serde(default = "default_arrangement")]
    pub arrangement: Arrangement,

    #[serde(default, deserialize_with = "lenient::mm")]
    pub width: u32,

    #[serde(default, deserialize_with = "lenient::mm")]
    pub height: u32,

    #[serde(default = "default_leaves", deserialize_with = "leaves")]
    pub leaves_count: u32,

    #[serde(default)]
    pub tick: Tick,

    #[serde(default, deserialize_with = "lenient::text")]
    pub handle: String,

    #[serde(default, alias = "colorProfiles", deserialize_with = "lenient::text")]
    pub finish_code: String,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub traverses: TraverseLayout,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub absorber: Absorber,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub colors: AccessoryColors,

    /// 填充材料代码（"miroir" / "verre" / 其他）
    #[serde(default, deserialize_with = "lenient::text")]
    pub filling: String,
}

fn default_range() -> Range {
    Range::Other
}

fn default_rail() -> RailType {
    RailType::Double
}

fn default_arrangement() -> Arrangement {
    Arrangement::Quinconce
}

fn default_leaves() -> u32 {
    1
}

/// 门扇数至少为 1
fn leaves<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    lenient::mm(deserializer).map(|n| n.max(1))
}

impl Configuration {
    /// 以系列创建默认配置（其他字段取表单初始值）
    pub fn new(range: Range) -> Self {
        Self {
            name: String::new(),
            range,
            rail: RailType::Double,
            arrangement: Arrangement::Quinconce,
            width: 1200,
            height: 2100,
            leaves_count: 2,
            tick: Tick::T19,
            handle: String::new(),
            finish_code: String::new(),
            traverses: TraverseLayout::default(),
            absorber: Absorber::default(),
            colors: AccessoryColors::default(),
            filling: String::new(),
        }
    }

    /// 门扇数（调用方直接构造时也保证 ≥1）
    pub fn leaves(&self) -> u32 {
        self.leaves_count.max(1)
    }

    pub fn fill_material(&self) -> FillMaterial {
        FillMaterial::from_code(&self.filling)
    }

    /// 每个门扇的横档中心高度（升序）
    pub fn centers_by_leaf(&self) -> Vec<Vec<f64>> {
        (0..self.leaves() as usize)
            .map(|i| {
                let mut centers = self
                    .traverses
                    .group_for_leaf(i)
                    .map(TraverseGroup::centers)
                    .unwrap_or_default();
                centers.sort_by(|a, b| a.total_cmp(b));
                centers
            })
            .collect()
    }
}
