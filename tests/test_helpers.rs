// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试目录、配置构建器、一键推导
// ==========================================

#![allow(dead_code)]

use sliding_door_configurator::catalog::{Catalog, CatalogEntry, CatalogFamily};
use sliding_door_configurator::config::EqualizationSettings;
use sliding_door_configurator::domain::{
    Absorber, AccessoryColors, Arrangement, Configuration, RailType, Range, Tick, TraverseGroup,
    TraverseLayout,
};
use sliding_door_configurator::engine::{Derivation, DerivationPipeline};
use sliding_door_configurator::logging;

/// 测试拉手: y=10, z=5, c=8, t=12
pub const TEST_HANDLE: &str = "PTEST";

/// 内置目录 + 测试拉手
pub fn test_catalog() -> Catalog {
    let mut catalog = Catalog::builtin();
    catalog.insert(
        CatalogEntry::new(TEST_HANDLE, "Poignée test", CatalogFamily::Profile, "poignee")
            .with_geometry(10.0, 5.0, 8.0, 12.0),
    );
    catalog
}

/// 使用测试目录和默认等分参数推导
pub fn derive(config: &Configuration) -> Derivation {
    logging::init_test();
    let catalog = test_catalog();
    DerivationPipeline::new(&catalog, EqualizationSettings::default()).derive(config)
}

// ==========================================
// ConfigBuilder - 配置构建器
// ==========================================
pub struct ConfigBuilder {
    config: Configuration,
}

impl ConfigBuilder {
    /// 默认: 1200×2100, 2 门扇, 双轨错位, 19mm, 无拉手
    pub fn new(range: Range) -> Self {
        Self {
            config: Configuration::new(range),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.config.name = name.to_string();
        self
    }

    pub fn rail(mut self, rail: RailType) -> Self {
        self.config.rail = rail;
        self
    }

    pub fn arrangement(mut self, arrangement: Arrangement) -> Self {
        self.config.arrangement = arrangement;
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    pub fn leaves(mut self, leaves: u32) -> Self {
        self.config.leaves_count = leaves;
        self
    }

    pub fn tick(mut self, tick: Tick) -> Self {
        self.config.tick = tick;
        self
    }

    pub fn handle(mut self, handle: &str) -> Self {
        self.config.handle = handle.to_string();
        self
    }

    pub fn finish(mut self, code: &str) -> Self {
        self.config.finish_code = code.to_string();
        self
    }

    pub fn filling(mut self, material: &str) -> Self {
        self.config.filling = material.to_string();
        self
    }

    /// 所有门扇相同的横档组
    pub fn traverses(mut self, kind: &str, heights: &[f64]) -> Self {
        self.config.traverses = TraverseLayout {
            groups: vec![group(kind, heights)],
            same_for_all_leaves: true,
        };
        self
    }

    /// 每门扇独立的横档组
    pub fn traverses_per_leaf(mut self, groups: &[(&str, &[f64])]) -> Self {
        self.config.traverses = TraverseLayout {
            groups: groups.iter().map(|(kind, heights)| group(kind, heights)).collect(),
            same_for_all_leaves: false,
        };
        self
    }

    pub fn absorber(mut self, fram: u32, freco: u32, frlamelle: u32) -> Self {
        self.config.absorber = Absorber {
            fram,
            freco,
            frlamelle,
        };
        self
    }

    pub fn colors(mut self, seal: &str, brushes: &str, pglass: &str) -> Self {
        self.config.colors = AccessoryColors {
            seal: seal.to_string(),
            brushes: brushes.to_string(),
            pglass: pglass.to_string(),
        };
        self
    }

    pub fn build(self) -> Configuration {
        self.config
    }
}

/// 横档组: count 取高度个数
pub fn group(kind: &str, heights: &[f64]) -> TraverseGroup {
    TraverseGroup {
        kind: kind.to_string(),
        count: heights.len() as u32,
        heights: heights.to_vec(),
    }
}
