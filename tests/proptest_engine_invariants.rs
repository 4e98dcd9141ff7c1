// ==========================================
// 推导引擎性质测试 (proptest)
// ==========================================
// 性质:
// 1. 相同输入 → 相同推导
// 2. 输出行数量均 > 0
// 3. 填充板分段非负
// 4. 分段个数: 中间段 = 横档数 − 1；有横档才有上段
// 5. 填充宽度随总宽单调不减
// 6. 等分归一幂等
// 7. 规范化幂等
// ==========================================

mod test_helpers;

use proptest::prelude::*;
use sliding_door_configurator::catalog::HandleGeometry;
use sliding_door_configurator::config::EqualizationSettings;
use sliding_door_configurator::domain::{
    Arrangement, Configuration, RailType, Range, Tick, TraverseGroup, TraverseLayout,
};
use sliding_door_configurator::engine::{
    resolve_filling_heights, ConfigurationNormalizer, FillingResolver, FillingWidthResolver,
};
use test_helpers::{derive, TEST_HANDLE};

// ==========================================
// 生成策略
// ==========================================

fn range_strategy() -> impl Strategy<Value = Range> {
    prop_oneof![
        Just(Range::R82),
        Just(Range::R96),
        Just(Range::R96Ca),
        Just(Range::Other),
    ]
}

fn tick_strategy() -> impl Strategy<Value = Tick> {
    prop_oneof![
        Just(Tick::T16),
        Just(Tick::T19),
        Just(Tick::T6To8),
        Just(Tick::T10To12),
        Just(Tick::Unspecified),
    ]
}

fn rail_strategy() -> impl Strategy<Value = RailType> {
    prop_oneof![Just(RailType::Simple), Just(RailType::Double)]
}

fn arrangement_strategy() -> impl Strategy<Value = Arrangement> {
    prop_oneof![Just(Arrangement::Quinconce), Just(Arrangement::Centre)]
}

fn handle_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("P200".to_string()),
        Just("P810".to_string()),
        Just(TEST_HANDLE.to_string()),
        Just("INCONNU".to_string()),
    ]
}

fn centers_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..3000.0, 0..5)
}

fn config_strategy() -> impl Strategy<Value = Configuration> {
    (
        range_strategy(),
        tick_strategy(),
        rail_strategy(),
        arrangement_strategy(),
        0u32..4000,
        0u32..3200,
        1u32..6,
        handle_strategy(),
        centers_strategy(),
        prop_oneof![Just(""), Just("19"), Just("28"), Just("37")],
        (0u32..4, 0u32..4, 0u32..4),
    )
        .prop_map(
            |(range, tick, rail, arrangement, width, height, leaves, handle, centers, kind, absorber)| {
                let mut config = Configuration::new(range);
                config.tick = tick;
                config.rail = rail;
                config.arrangement = arrangement;
                config.width = width;
                config.height = height;
                config.leaves_count = leaves;
                config.handle = handle;
                config.absorber.fram = absorber.0;
                config.absorber.freco = absorber.1;
                config.absorber.frlamelle = absorber.2;
                config.traverses = TraverseLayout {
                    groups: vec![TraverseGroup {
                        kind: kind.to_string(),
                        count: centers.len() as u32,
                        heights: centers,
                    }],
                    same_for_all_leaves: true,
                };
                config
            },
        )
}

// ==========================================
// 1-3. 完整推导
// ==========================================

proptest! {
    #[test]
    fn derivation_is_deterministic(config in config_strategy()) {
        prop_assert_eq!(derive(&config), derive(&config));
    }

    #[test]
    fn emitted_lines_have_positive_qty(config in config_strategy()) {
        let derivation = derive(&config);
        for line in derivation.profiles.all() {
            prop_assert!(line.qty > 0, "型材 {} 数量为 0", line.reference);
        }
        for line in &derivation.accessories.list {
            prop_assert!(line.qty > 0, "配件 {} 数量为 0", line.reference);
        }
    }

    #[test]
    fn filling_segments_non_negative(config in config_strategy()) {
        let derivation = derive(&config);
        prop_assert_eq!(derivation.fillings.per_leaf.len(), config.leaves() as usize);
        for entry in &derivation.fillings.per_leaf {
            for seg in entry.heights.segments() {
                prop_assert!(seg >= 0.0 && seg.is_finite(), "分段 {} 非法", seg);
            }
        }
    }
}

// ==========================================
// 4. 分段个数
// ==========================================

proptest! {
    #[test]
    fn segment_count_follows_crossbars(
        range in range_strategy(),
        height in 0u32..3200,
        centers in centers_strategy(),
        ti37 in any::<bool>(),
    ) {
        let traverse_ref = if ti37 { Some("TI37") } else { Some("TI28") };
        let heights = resolve_filling_heights(range, height, &centers, traverse_ref);

        if centers.is_empty() {
            prop_assert!(heights.between.is_empty());
            prop_assert_eq!(heights.top, None);
        } else {
            prop_assert_eq!(heights.between.len(), centers.len() - 1);
            prop_assert!(heights.top.is_some());
        }
    }
}

// ==========================================
// 5. 填充宽度单调
// ==========================================

proptest! {
    #[test]
    fn filling_width_monotonic_in_width(
        rail in rail_strategy(),
        arrangement in arrangement_strategy(),
        width in 0u32..5000,
        extra in 0u32..500,
        leaves in 1u32..6,
        y in 0.0f64..40.0,
        z in 0.0f64..40.0,
    ) {
        let geometry = HandleGeometry { y, z, c: 0.0, t: 0.0, found: true };
        let narrow = FillingWidthResolver::compute(rail, arrangement, width, leaves, &geometry);
        let wide = FillingWidthResolver::compute(rail, arrangement, width + extra, leaves, &geometry);
        prop_assert!(wide >= narrow, "{} < {}", wide, narrow);
    }
}

// ==========================================
// 6-7. 幂等
// ==========================================

proptest! {
    #[test]
    fn equalize_is_idempotent(
        range in range_strategy(),
        height in 500u32..3200,
        centers in centers_strategy(),
        force in any::<bool>(),
    ) {
        let mut sorted = centers;
        sorted.sort_by(|a, b| a.total_cmp(b));
        let resolver = FillingResolver::new(EqualizationSettings {
            force,
            ..EqualizationSettings::default()
        });

        let mut heights = resolve_filling_heights(range, height, &sorted, None);
        resolver.equalize(range, height, &sorted, None, &mut heights);
        let once = heights.clone();
        resolver.equalize(range, height, &sorted, None, &mut heights);
        prop_assert_eq!(heights, once);
    }

    #[test]
    fn normalize_is_idempotent(config in config_strategy(), name in ".{0,120}") {
        let mut config = config;
        config.name = name;
        config.finish_code = "SA".to_string();

        let normalizer = ConfigurationNormalizer::new();
        let once = normalizer.normalize(&config);
        let twice = normalizer.normalize(&once);
        prop_assert_eq!(once, twice);
    }
}
