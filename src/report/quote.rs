// ==========================================
// 推拉门配置系统 - 报价单
// ==========================================
// 职责: 项目信息 + 三张明细表
// 标识: uuid v4 + 生成时间（UTC）
// ==========================================

use crate::domain::configuration::Configuration;
use crate::engine::orchestrator::Derivation;
use crate::report::rows::{filling_rows, AccessoryRow, FillingRow, ProfileRow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectHeader {
    pub name: String,
    pub range: String,
    pub width: u32,
    pub height: u32,
    pub leaves: u32,
    pub finish: String,
}

// ==========================================
// Quote - 报价单
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub project: ProjectHeader,
    pub profiles: Vec<ProfileRow>,
    pub accessories: Vec<AccessoryRow>,
    pub fillings: Vec<FillingRow>,
}

impl Quote {
    pub fn from_derivation(config: &Configuration, derivation: &Derivation) -> Self {
        Self::from_derivation_at(config, derivation, Utc::now())
    }

    /// 指定生成时间（便于测试比较）
    pub fn from_derivation_at(
        config: &Configuration,
        derivation: &Derivation,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let profiles = derivation
            .profiles
            .all()
            .into_iter()
            .map(ProfileRow::from)
            .collect();
        let accessories = derivation
            .accessories
            .list
            .iter()
            .map(AccessoryRow::from)
            .collect();

        Self {
            id: Uuid::new_v4(),
            generated_at,
            project: ProjectHeader {
                name: config.name.clone(),
                range: config.range.to_string(),
                width: config.width,
                height: config.height,
                leaves: config.leaves(),
                finish: derivation.profiles.meta.finish_label.clone(),
            },
            profiles,
            accessories,
            fillings: filling_rows(&derivation.fillings),
        }
    }

    pub fn row_count(&self) -> usize {
        self.profiles.len() + self.accessories.len() + self.fillings.len()
    }
}
