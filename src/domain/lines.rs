// ==========================================
// 推拉门配置系统 - 推导输出实体
// ==========================================
// 红线: 每次调用重新计算,无独立生命周期
// 红线: 数量为 0 的行永不输出
// ==========================================

use crate::domain::types::AccessoryRole;
use serde::{Deserialize, Serialize};

// ==========================================
// ProfileLine - 型材行
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLine {
    #[serde(rename = "ref")]
    pub reference: String,

    /// 名称（目录 designation，缺失时使用固定回退名称）
    pub description: String,

    /// 切割长度 (mm)
    pub length: u32,

    pub qty: u32,

    pub finish_code: String,

    pub finish_label: String,
}

// ==========================================
// AccessoryLine - 配件行
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessoryLine {
    #[serde(rename = "ref")]
    pub reference: String,

    pub designation: String,

    /// 分组类型（目录 type 优先，否则取角色代码）
    #[serde(rename = "type")]
    pub kind: String,

    pub role: AccessoryRole,

    pub qty: u32,

    /// 长度 (mm)，仅线材类配件
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_label: Option<String>,
}

// ==========================================
// FillingEntry - 单门扇填充板尺寸
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillingWidth {
    pub raw: u32,
    pub cut: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillingHeights {
    /// 最下段
    pub bottom: f64,

    /// 相邻横档之间的各段（长度 = 横档数 - 1）
    pub between: Vec<f64>,

    /// 最上段（无横档时为 None）
    pub top: Option<f64>,
}

impl FillingHeights {
    /// 按自下而上顺序列出所有段
    pub fn segments(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.between.len() + 2);
        out.push(self.bottom);
        out.extend(self.between.iter().copied());
        if let Some(top) = self.top {
            out.push(top);
        }
        out
    }

    /// 对每段应用同一个映射
    pub fn map_segments(&mut self, mut f: impl FnMut(f64) -> f64) {
        self.bottom = f(self.bottom);
        for v in self.between.iter_mut() {
            *v = f(*v);
        }
        if let Some(top) = self.top.as_mut() {
            *top = f(*top);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillingEntry {
    /// 门扇序号（1 起）
    pub leaf: u32,

    pub width: FillingWidth,

    pub heights: FillingHeights,

    /// 该门扇使用的中间横档型号
    pub traverse_ref: Option<String>,

    /// 是否经过等分归一
    pub equalized: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_order() {
        let h = FillingHeights {
            bottom: 10.0,
            between: vec![20.0, 30.0],
            top: Some(40.0),
        };
        assert_eq!(h.segments(), vec![10.0, 20.0, 30.0, 40.0]);

        let h = FillingHeights {
            bottom: 10.0,
            between: vec![],
            top: None,
        };
        assert_eq!(h.segments(), vec![10.0]);
    }

    #[test]
    fn test_accessory_line_serialization() {
        let line = AccessoryLine {
            reference: "EQUERSUSPM".to_string(),
            designation: "Équerre".to_string(),
            kind: "equerre".to_string(),
            role: AccessoryRole::Bracket,
            qty: 3,
            length: None,
            finish_label: Some("Noir".to_string()),
        };
        let v = serde_json::to_value(&line).unwrap();
        assert_eq!(v["ref"], "EQUERSUSPM");
        assert_eq!(v["type"], "equerre");
        assert!(v.get("length").is_none());
    }
}
