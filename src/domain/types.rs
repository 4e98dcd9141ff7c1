// ==========================================
// 推拉门配置系统 - 领域类型定义
// ==========================================
// 枚举字段在输入边界宽松解析:
// - 大小写/空格不敏感
// - 未识别的值落入文档化的默认分支
// ==========================================

use crate::domain::lenient::LenientText;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 产品系列 (Range)
// ==========================================
// 几乎所有公式分支都由系列决定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "LenientText", into = "String")]
pub enum Range {
    R82,   // 82 系列（强制双轨）
    R96,   // 96 系列
    R96Ca, // 96CA 系列（带上下横档）
    /// 未识别系列 → 默认分支
    ///
    /// 原始输入文本不保留，序列化固定为 "OTHER"（再次解析仍为 Other）
    Other,
}

impl Range {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_uppercase().as_str() {
            "82" => Range::R82,
            "96" => Range::R96,
            "96CA" => Range::R96Ca,
            _ => Range::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Range::R82 => "82",
            Range::R96 => "96",
            Range::R96Ca => "96CA",
            Range::Other => "OTHER",
        }
    }
}

impl From<LenientText> for Range {
    fn from(value: LenientText) -> Self {
        Range::parse(&value.0)
    }
}

impl From<Range> for String {
    fn from(value: Range) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 轨道类型 (Rail Type)
// ==========================================
// 非 "simple" 一律视为双轨
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "LenientText", into = "String")]
pub enum RailType {
    Simple, // 单轨（吊轨）
    Double, // 双轨
}

impl RailType {
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("simple") {
            RailType::Simple
        } else {
            RailType::Double
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RailType::Simple => "simple",
            RailType::Double => "double",
        }
    }
}

impl From<LenientText> for RailType {
    fn from(value: LenientText) -> Self {
        RailType::parse(&value.0)
    }
}

impl From<RailType> for String {
    fn from(value: RailType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for RailType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 门扇排布 (Arrangement)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "LenientText", into = "String")]
pub enum Arrangement {
    Quinconce, // 交错排布（默认）
    Centre,    // 居中对开
}

impl Arrangement {
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("centre") {
            Arrangement::Centre
        } else {
            Arrangement::Quinconce
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Arrangement::Quinconce => "quinconce",
            Arrangement::Centre => "centre",
        }
    }
}

impl From<LenientText> for Arrangement {
    fn from(value: LenientText) -> Self {
        Arrangement::parse(&value.0)
    }
}

impl From<Arrangement> for String {
    fn from(value: Arrangement) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 板厚代码 (Tick)
// ==========================================
// 96 → 16/19; 96CA → 6-8/10-12; 82 → 19
// 别名: "6"/"8" → 6-8, "10"/"12" → 10-12
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "LenientText", into = "String")]
pub enum Tick {
    T16,
    T19,
    T6To8,
    T10To12,
    Unspecified,
}

impl Tick {
    pub fn parse(value: &str) -> Self {
        let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
        match compact.as_str() {
            "16" => Tick::T16,
            "19" => Tick::T19,
            "6" | "8" | "6-8" => Tick::T6To8,
            "10" | "12" | "10-12" => Tick::T10To12,
            _ => Tick::Unspecified,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tick::T16 => "16",
            Tick::T19 => "19",
            Tick::T6To8 => "6-8",
            Tick::T10To12 => "10-12",
            Tick::Unspecified => "",
        }
    }
}

impl Default for Tick {
    fn default() -> Self {
        Tick::Unspecified
    }
}

impl From<LenientText> for Tick {
    fn from(value: LenientText) -> Self {
        Tick::parse(&value.0)
    }
}

impl From<Tick> for String {
    fn from(value: Tick) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 填充材料类别 (Fill Material)
// ==========================================
// 供 3D 预览选择材质: miroir → 镜面, verre → 玻璃, 其他 → 奶油色箱体
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FillMaterial {
    Mirror,
    Glass,
    CreamBox,
}

impl FillMaterial {
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "miroir" => FillMaterial::Mirror,
            "verre" => FillMaterial::Glass,
            _ => FillMaterial::CreamBox,
        }
    }
}

impl fmt::Display for FillMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillMaterial::Mirror => write!(f, "MIRROR"),
            FillMaterial::Glass => write!(f, "GLASS"),
            FillMaterial::CreamBox => write!(f, "CREAM_BOX"),
        }
    }
}

// ==========================================
// 配件角色 (Accessory Role)
// ==========================================
// 序列化值与报价单分组键一致（法语代码）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AccessoryRole {
    #[serde(rename = "roue")]
    Wheel,
    #[serde(rename = "cale")]
    Shim,
    #[serde(rename = "frein")]
    Brake,
    #[serde(rename = "guide")]
    Guide,
    #[serde(rename = "antideraillement")]
    AntiDerailment,
    #[serde(rename = "joint")]
    Seal,
    #[serde(rename = "balai")]
    Brush,
    #[serde(rename = "capot")]
    Cap,
    #[serde(rename = "equerre")]
    Bracket,
}

impl AccessoryRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessoryRole::Wheel => "roue",
            AccessoryRole::Shim => "cale",
            AccessoryRole::Brake => "frein",
            AccessoryRole::Guide => "guide",
            AccessoryRole::AntiDerailment => "antideraillement",
            AccessoryRole::Seal => "joint",
            AccessoryRole::Brush => "balai",
            AccessoryRole::Cap => "capot",
            AccessoryRole::Bracket => "equerre",
        }
    }
}

impl fmt::Display for AccessoryRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
