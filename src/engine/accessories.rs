// ==========================================
// 推拉门配置系统 - 配件推导引擎
// ==========================================
// 职责: 滑轮 / 制动 / 导向 / 密封 / 毛刷 / 玻璃压条 / 罩盖 / 吊架
// 输入: Configuration + 型材引擎导出的长度
// 输出: 配件清单 + 按类型分组
// ==========================================
// 红线: 数量为 0 的行不输出
// 红线: 配件不因目录缺失而省略（目录仅提供名称与类型）
// ==========================================

use crate::catalog::ReferenceCatalog;
use crate::domain::configuration::{Absorber, AccessoryColors, Configuration};
use crate::domain::lines::AccessoryLine;
use crate::domain::types::{AccessoryRole, RailType, Range, Tick};
use crate::engine::profiles::ProfileDerivation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// 无类型配件的分组键
pub const UNTYPED_GROUP: &str = "autre";

/// 固定黑色配件的表面处理名称
const BLACK: &str = "Noir";

/// 每个吊架覆盖的轨道长度 (mm)
const BRACKET_SPACING_MM: u32 = 500;

// ==========================================
// AccessoryLengths - 型材引擎提供的长度
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccessoryLengths {
    pub handle: u32,
    pub top_traverse: u32,
    pub corner: u32,
    /// 中间横档总数
    pub ti_qty: u32,
    pub ti_len: u32,
}

impl AccessoryLengths {
    pub fn from_profiles(profiles: &ProfileDerivation) -> Self {
        Self {
            handle: profiles.handle_length(),
            top_traverse: profiles.top_traverse_length(),
            corner: profiles.corner_length(),
            ti_qty: profiles.intermediate_qty(),
            ti_len: profiles.intermediate_length(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessoryMeta {
    pub range: Range,
    pub tick: Tick,
    pub rail: RailType,
    pub leaves: u32,
    pub absorber: Absorber,
    pub colors: AccessoryColors,
    pub lengths: AccessoryLengths,
}

/// 配件推导结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessoryDerivation {
    pub list: Vec<AccessoryLine>,
    pub by_type: BTreeMap<String, Vec<AccessoryLine>>,
    pub meta: AccessoryMeta,
}

/// 单行可选参数
#[derive(Debug, Default)]
struct LineOptions<'s> {
    designation: Option<&'s str>,
    length: Option<u32>,
    finish_label: Option<String>,
}

/// 颜色 → 型号变体
///
/// 映射表中无此颜色 → 保留基础型号；
/// 颜色非空时即作为表面处理名称
fn map_finish_ref(base: &str, color: &str, mapping: &[(&str, &str)]) -> (String, Option<String>) {
    let color = color.trim();
    let reference = mapping
        .iter()
        .find(|(key, _)| *key == color)
        .map(|(_, r)| r.to_string())
        .unwrap_or_else(|| base.to_string());
    let finish = (!color.is_empty()).then(|| color.to_string());
    (reference, finish)
}

/// 按类型分组（空类型 → "autre"），组内保持原顺序
pub fn group_by_type(list: &[AccessoryLine]) -> BTreeMap<String, Vec<AccessoryLine>> {
    let mut out: BTreeMap<String, Vec<AccessoryLine>> = BTreeMap::new();
    for line in list {
        let key = if line.kind.is_empty() {
            UNTYPED_GROUP.to_string()
        } else {
            line.kind.clone()
        };
        out.entry(key).or_default().push(line.clone());
    }
    out
}

// ==========================================
// AccessoryEngine - 配件推导引擎
// ==========================================
pub struct AccessoryEngine<'a> {
    catalog: &'a dyn ReferenceCatalog,
}

impl<'a> AccessoryEngine<'a> {
    pub fn new(catalog: &'a dyn ReferenceCatalog) -> Self {
        Self { catalog }
    }

    /// 推导完整配件清单
    #[instrument(skip(self, config, lengths), fields(range = %config.range, leaves = config.leaves()))]
    pub fn derive(&self, config: &Configuration, lengths: AccessoryLengths) -> AccessoryDerivation {
        let leaves = config.leaves();
        let mut list = Vec::new();

        self.push_wheels(&mut list, config, leaves);
        self.push_brakes(&mut list, config);
        self.push_guides(&mut list, config, leaves);
        match config.range {
            Range::R96 => self.push_seals_96(&mut list, config, leaves, &lengths),
            Range::R96Ca => {
                self.push_seals_96ca(&mut list, config, leaves, &lengths);
                self.push_glazing_96ca(&mut list, config, leaves, &lengths);
            }
            Range::R82 | Range::Other => {}
        }
        self.push_caps(&mut list, config);
        self.push_brackets(&mut list, config, leaves);

        let by_type = group_by_type(&list);
        debug!(lines = list.len(), groups = by_type.len(), "配件推导完成");

        AccessoryDerivation {
            list,
            by_type,
            meta: AccessoryMeta {
                range: config.range,
                tick: config.tick,
                rail: config.rail,
                leaves,
                absorber: config.absorber,
                colors: config.colors.clone(),
                lengths,
            },
        }
    }

    // ==========================================
    // 滑轮 / 垫片
    // ==========================================

    fn push_wheels(&self, list: &mut Vec<AccessoryLine>, config: &Configuration, leaves: u32) {
        match config.range {
            Range::R82 | Range::R96 => {
                self.push(list, "KITROUPRO", AccessoryRole::Wheel, leaves, LineOptions::default());
                if config.tick == Tick::T16 {
                    self.push(list, "CALE16-19", AccessoryRole::Shim, leaves, LineOptions::default());
                }
            }
            Range::R96Ca => {
                self.push(
                    list,
                    "ROUTHB52",
                    AccessoryRole::Wheel,
                    leaves.saturating_mul(2),
                    LineOptions::default(),
                );
            }
            Range::Other => {}
        }
    }

    // ==========================================
    // 制动器
    // ==========================================

    fn push_brakes(&self, list: &mut Vec<AccessoryLine>, config: &Configuration) {
        let Absorber {
            fram,
            freco,
            frlamelle,
        } = config.absorber;

        match config.range {
            Range::R82 => {
                self.push(list, "FR82", AccessoryRole::Brake, fram, LineOptions::default());
                self.push(list, "FR82E", AccessoryRole::Brake, freco, LineOptions::default());
            }
            Range::R96 => {
                let reference = if config.tick == Tick::T16 { "FR96-16" } else { "FR96" };
                self.push(list, reference, AccessoryRole::Brake, fram, LineOptions::default());
            }
            Range::R96Ca => {
                self.push(list, "FRBASEO", AccessoryRole::Brake, fram, LineOptions::default());
            }
            Range::Other => return,
        }

        // 弹片制动器: 成对输出
        self.push(list, "FREIN", AccessoryRole::Brake, frlamelle, LineOptions::default());
        self.push(list, "FREINENROB", AccessoryRole::Brake, frlamelle, LineOptions::default());
    }

    // ==========================================
    // 上导向 / 防脱轨
    // ==========================================

    fn push_guides(&self, list: &mut Vec<AccessoryLine>, config: &Configuration, leaves: u32) {
        let Absorber { fram, freco, .. } = config.absorber;

        match config.range {
            Range::R82 => {
                let qty = leaves.saturating_sub(fram.saturating_add(freco)).saturating_mul(2);
                self.push(list, "GUIDHAUT82CN", AccessoryRole::Guide, qty, LineOptions::default());
            }
            Range::R96 => {
                let qty = leaves.saturating_sub(fram).saturating_mul(2);
                let reference = if config.tick == Tick::T16 {
                    "GUIDHAUT16"
                } else {
                    "GUIDHAUT96"
                };
                self.push(list, reference, AccessoryRole::Guide, qty, LineOptions::default());
            }
            Range::R96Ca => {
                let qty = leaves.saturating_add(leaves.saturating_sub(fram));
                self.push(list, "GUIDHAUTBASEO", AccessoryRole::Guide, qty, LineOptions::default());
                self.push(
                    list,
                    "ANTIDERAIL1",
                    AccessoryRole::AntiDerailment,
                    qty,
                    LineOptions::default(),
                );
            }
            Range::Other => {}
        }
    }

    // ==========================================
    // 96: 密封条 / 毛刷
    // ==========================================

    fn push_seals_96(
        &self,
        list: &mut Vec<AccessoryLine>,
        config: &Configuration,
        leaves: u32,
        lengths: &AccessoryLengths,
    ) {
        self.push_rail_seal(list, config, leaves);

        let brushes = &config.colors.brushes;

        let (reference, finish) =
            map_finish_ref("JB48/1050", brushes, &[("Noir", "JB48/1050NO"), ("Gris", "JB48/1050")]);
        if lengths.corner > 0 {
            self.push(
                list,
                &reference,
                AccessoryRole::Brush,
                leaves,
                LineOptions {
                    designation: Some("Balai anti-poussière"),
                    length: Some(lengths.corner),
                    finish_label: finish,
                },
            );
        }

        let (reference, finish) =
            map_finish_ref("JB48/500", brushes, &[("Noir", "JB48/500NO"), ("Gris", "JB48/500")]);
        if lengths.handle > 0 {
            self.push(
                list,
                &reference,
                AccessoryRole::Brush,
                leaves.saturating_mul(2),
                LineOptions {
                    designation: Some("Balai de côté"),
                    length: Some(lengths.handle),
                    finish_label: finish,
                },
            );
        }
    }

    // ==========================================
    // 96CA: 密封条（轨道 + 拉手两侧）
    // ==========================================

    fn push_seals_96ca(
        &self,
        list: &mut Vec<AccessoryLine>,
        config: &Configuration,
        leaves: u32,
        lengths: &AccessoryLengths,
    ) {
        self.push_rail_seal(list, config, leaves);

        if lengths.handle > 0 {
            let (reference, finish) = seal_ref(&config.colors.seal);
            self.push(
                list,
                &reference,
                AccessoryRole::Seal,
                leaves.saturating_mul(2),
                LineOptions {
                    designation: Some("Joint de butée"),
                    length: Some(lengths.handle),
                    finish_label: finish,
                },
            );
        }
    }

    // ==========================================
    // 96CA: 玻璃压条（按厚度选型号）
    // ==========================================

    fn push_glazing_96ca(
        &self,
        list: &mut Vec<AccessoryLine>,
        config: &Configuration,
        leaves: u32,
        lengths: &AccessoryLengths,
    ) {
        let (base, designation) = match config.tick {
            Tick::T6To8 => ("PVITRAGE", "Profil de vitrage 6-8"),
            Tick::T10To12 => ("PVITRAGE12", "Profil de vitrage 10-12"),
            _ => {
                debug!(tick = %config.tick, "厚度不适用玻璃压条");
                return;
            }
        };
        let black = format!("{}NO", base);
        let (reference, finish) =
            map_finish_ref(base, &config.colors.pglass, &[("Noir", black.as_str()), ("Translucide", base)]);

        // 拉手两侧 / 顶部 / 中间横档
        let runs = [
            (leaves.saturating_mul(2), lengths.handle),
            (leaves.saturating_mul(2), lengths.top_traverse),
            (lengths.ti_qty, lengths.ti_len),
        ];
        for (qty, length) in runs {
            if length == 0 {
                continue;
            }
            self.push(
                list,
                &reference,
                AccessoryRole::Seal,
                qty,
                LineOptions {
                    designation: Some(designation),
                    length: Some(length),
                    finish_label: finish.clone(),
                },
            );
        }
    }

    // ==========================================
    // 单轨: 罩盖 / 吊架
    // ==========================================

    fn push_caps(&self, list: &mut Vec<AccessoryLine>, config: &Configuration) {
        if config.rail != RailType::Simple || !matches!(config.range, Range::R96 | Range::R96Ca) {
            return;
        }
        for (reference, designation) in [
            ("CAPOTRH50", "Capot monorail haut"),
            ("CAPOTRB48", "Capot monorail bas"),
        ] {
            self.push(
                list,
                reference,
                AccessoryRole::Cap,
                2,
                LineOptions {
                    designation: Some(designation),
                    length: None,
                    finish_label: Some(BLACK.to_string()),
                },
            );
        }
    }

    fn push_brackets(&self, list: &mut Vec<AccessoryLine>, config: &Configuration, leaves: u32) {
        if config.rail != RailType::Simple {
            return;
        }
        let run = config.width.saturating_mul(leaves).saturating_mul(2);
        self.push(
            list,
            "EQUERSUSPM",
            AccessoryRole::Bracket,
            run.div_ceil(BRACKET_SPACING_MM),
            LineOptions {
                designation: Some("Équerre de suspension + vis"),
                length: None,
                finish_label: Some(BLACK.to_string()),
            },
        );
    }

    // ==========================================
    // 辅助方法
    // ==========================================

    /// 轨道方向的密封条（96 / 96CA 共用）
    fn push_rail_seal(&self, list: &mut Vec<AccessoryLine>, config: &Configuration, leaves: u32) {
        let length = match config.rail {
            RailType::Simple => config.width.saturating_mul(leaves).saturating_mul(2),
            RailType::Double => config.width,
        };
        if length == 0 {
            return;
        }
        let (reference, finish) = seal_ref(&config.colors.seal);
        self.push(
            list,
            &reference,
            AccessoryRole::Seal,
            1,
            LineOptions {
                designation: Some("Joint de butée"),
                length: Some(length),
                finish_label: finish,
            },
        );
    }

    fn push(
        &self,
        list: &mut Vec<AccessoryLine>,
        reference: &str,
        role: AccessoryRole,
        qty: u32,
        options: LineOptions<'_>,
    ) {
        if qty == 0 {
            return;
        }
        let entry = self.catalog.find_by_reference(reference);
        if entry.is_none() {
            debug!(reference, "配件不在目录中，使用角色作为类型");
        }

        let designation = options
            .designation
            .map(str::to_string)
            .or_else(|| entry.map(|e| e.designation.clone()))
            .unwrap_or_default();
        let kind = entry
            .map(|e| e.kind.clone())
            .filter(|k| !k.is_empty())
            .unwrap_or_else(|| role.as_str().to_string());

        list.push(AccessoryLine {
            reference: reference.to_string(),
            designation,
            kind,
            role,
            qty,
            length: options.length.filter(|l| *l > 0),
            finish_label: options.finish_label.filter(|f| !f.is_empty()),
        });
    }
}

fn seal_ref(color: &str) -> (String, Option<String>) {
    map_finish_ref("JBUT", color, &[("Noir", "JBUTNO"), ("Gris", "JBUTNO")])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_finish_ref() {
        assert_eq!(
            map_finish_ref("JBUT", "Gris", &[("Noir", "JBUTNO"), ("Gris", "JBUTNO")]),
            ("JBUTNO".to_string(), Some("Gris".to_string()))
        );
        assert_eq!(
            map_finish_ref("JBUT", " ", &[("Noir", "JBUTNO")]),
            ("JBUT".to_string(), None)
        );
        // 未映射的颜色仍作为表面处理名称
        assert_eq!(
            map_finish_ref("JBUT", "Blanc", &[("Noir", "JBUTNO")]),
            ("JBUT".to_string(), Some("Blanc".to_string()))
        );
    }

    #[test]
    fn test_group_by_type_untyped_bucket() {
        let line = |reference: &str, kind: &str| AccessoryLine {
            reference: reference.to_string(),
            designation: String::new(),
            kind: kind.to_string(),
            role: AccessoryRole::Wheel,
            qty: 1,
            length: None,
            finish_label: None,
        };
        let grouped = group_by_type(&[line("A", "roue"), line("B", ""), line("C", "roue")]);
        assert_eq!(grouped.keys().collect::<Vec<_>>(), vec!["autre", "roue"]);
        assert_eq!(grouped["roue"].len(), 2);
        assert_eq!(grouped["roue"][1].reference, "C");
    }
}
