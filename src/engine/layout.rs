// ==========================================
// 推拉门配置系统 - 三维布局几何
// ==========================================
// 职责: 汇总 3D 渲染所需的尺寸与引用
// 输入: Configuration + 型材推导 + 填充板推导
// 红线: 只读汇总,不做新的几何计算
// ==========================================

use crate::catalog::HandleGeometry;
use crate::domain::configuration::Configuration;
use crate::domain::lines::FillingHeights;
use crate::domain::types::FillMaterial;
use crate::engine::fillings::FillingDerivation;
use crate::engine::profiles::{intermediate_ref, ProfileDerivation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinishRef {
    pub code: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overall {
    pub width: u32,
    pub height: u32,
    pub leaves: u32,
    pub finish: FinishRef,
}

/// 引用 + 长度
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefLength {
    #[serde(rename = "ref")]
    pub reference: String,
    pub length: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntermediateLayout {
    /// 无横档型号时为 None
    #[serde(rename = "ref")]
    pub reference: Option<String>,
    /// 每门扇中心高度（升序）
    pub by_leaf: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillingLayout {
    pub width_per_leaf: u32,
    pub heights_by_leaf: Vec<FillingHeights>,
}

// ==========================================
// LayoutGeometry - 布局几何
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutGeometry {
    pub overall: Overall,
    pub rail_top: RefLength,
    pub rail_bottom: RefLength,
    pub handle: Option<RefLength>,
    pub handle_offsets: HandleGeometry,
    pub intermediate: IntermediateLayout,
    pub fillings: FillingLayout,
    pub material: FillMaterial,
}

impl LayoutGeometry {
    pub fn build(
        config: &Configuration,
        profiles: &ProfileDerivation,
        fillings: &FillingDerivation,
    ) -> Self {
        let to_ref_length = |reference: &str, length: u32| RefLength {
            reference: reference.to_string(),
            length,
        };

        // 已输出的中间横档优先；否则按 groups[0] 推断
        let intermediate_reference = profiles
            .traverses
            .intermediate
            .first()
            .map(|l| l.reference.clone())
            .or_else(|| {
                config
                    .traverses
                    .groups
                    .first()
                    .and_then(|g| intermediate_ref(config.range, config.tick, &g.kind))
                    .map(str::to_string)
            });

        Self {
            overall: Overall {
                width: config.width,
                height: config.height,
                leaves: config.leaves(),
                finish: FinishRef {
                    code: profiles.meta.finish_code.clone(),
                    label: profiles.meta.finish_label.clone(),
                },
            },
            rail_top: to_ref_length(&profiles.rails.top.reference, profiles.rails.top.length),
            rail_bottom: to_ref_length(
                &profiles.rails.bottom.reference,
                profiles.rails.bottom.length,
            ),
            handle: profiles
                .handle
                .as_ref()
                .map(|l| to_ref_length(&l.reference, l.length)),
            handle_offsets: profiles.meta.geometry,
            intermediate: IntermediateLayout {
                reference: intermediate_reference,
                by_leaf: config.centers_by_leaf(),
            },
            fillings: FillingLayout {
                width_per_leaf: fillings.meta.filling_width,
                heights_by_leaf: fillings
                    .per_leaf
                    .iter()
                    .map(|e| e.heights.clone())
                    .collect(),
            },
            material: config.fill_material(),
        }
    }
}
