// ==========================================
// 推拉门配置系统 - 报价单行
// ==========================================
// 职责: 推导结果 → 可打印文本行
// 三张表: 型材 / 配件 / 填充板
// ==========================================

use crate::domain::lines::{AccessoryLine, ProfileLine};
use crate::engine::fillings::FillingDerivation;
use serde::{Deserialize, Serialize};

/// 空值占位符
pub const PLACEHOLDER: &str = "—";

/// 填充板行名称
pub const FILLING_DESIGNATION: &str = "Remplissage";

/// 配件表中显示的颜色
const DISPLAYED_ACCESSORY_FINISHES: &[&str] = &["Noir", "Gris", "Translucide"];

/// 毫米显示: 整数不带小数，否则保留一位
pub fn format_mm(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

fn or_placeholder(value: &str) -> String {
    if value.trim().is_empty() {
        PLACEHOLDER.to_string()
    } else {
        value.to_string()
    }
}

// ==========================================
// ProfileRow - 型材行
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRow {
    #[serde(rename = "ref")]
    pub reference: String,
    pub designation: String,
    pub finish: String,
    pub qty: u32,
    pub length: String,
}

impl From<&ProfileLine> for ProfileRow {
    fn from(line: &ProfileLine) -> Self {
        let finish = if !line.finish_label.is_empty() {
            line.finish_label.clone()
        } else {
            or_placeholder(&line.finish_code)
        };
        Self {
            reference: line.reference.clone(),
            designation: or_placeholder(&line.description),
            finish,
            qty: line.qty,
            length: format!("{} mm", line.length),
        }
    }
}

// ==========================================
// AccessoryRow - 配件行
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessoryRow {
    #[serde(rename = "ref")]
    pub reference: String,
    pub designation: String,
    pub finish: String,
    pub qty: u32,
    pub length: String,
}

impl From<&AccessoryLine> for AccessoryRow {
    fn from(line: &AccessoryLine) -> Self {
        let finish = line
            .finish_label
            .as_deref()
            .filter(|f| DISPLAYED_ACCESSORY_FINISHES.contains(f))
            .unwrap_or(PLACEHOLDER)
            .to_string();
        let length = match line.length {
            Some(l) if l > 0 => format!("{} mm", l),
            _ => PLACEHOLDER.to_string(),
        };
        Self {
            reference: line.reference.clone(),
            designation: or_placeholder(&line.designation),
            finish,
            qty: line.qty,
            length,
        }
    }
}

// ==========================================
// FillingRow - 填充板行
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillingRow {
    pub designation: String,
    pub qty: u32,
    pub dimensions: String,
}

/// 按 (宽, 高) 合并相同切割件，保持首次出现顺序
///
/// 高度为 0 的段不生成行
pub fn filling_rows(fillings: &FillingDerivation) -> Vec<FillingRow> {
    let mut cuts: Vec<(u32, f64, u32)> = Vec::new();

    for entry in &fillings.per_leaf {
        let width = entry.width.cut;
        for height in entry.heights.segments() {
            if height <= 0.0 {
                continue;
            }
            match cuts
                .iter_mut()
                .find(|(w, h, _)| *w == width && *h == height)
            {
                Some((_, _, qty)) => *qty += 1,
                None => cuts.push((width, height, 1)),
            }
        }
    }

    cuts.into_iter()
        .map(|(width, height, qty)| FillingRow {
            designation: FILLING_DESIGNATION.to_string(),
            qty,
            dimensions: format!("{} x {} mm", width, format_mm(height)),
        })
        .collect()
}
