// ==========================================
// 推拉门配置系统 - 内置产品目录
// ==========================================
// 型材: 轨道 / 拉手 / 角码 / 横档
// 配件: 滑轮 / 制动 / 导向 / 密封 / 毛刷 / 罩盖 / 吊架
// ==========================================

use super::{CatalogEntry, CatalogFamily};

// (reference, designation, type)
const PROFILES: &[(&str, &str, &str)] = &[
    // 轨道
    ("RH82", "Rail haut 82", "rail"),
    ("RB55", "Rail bas 55", "rail"),
    ("RH96", "Rail haut 96", "rail"),
    ("RB65", "Rail bas 65", "rail"),
    ("RH50", "Rail haut monorail 50", "rail"),
    ("RB48", "Rail bas monorail 48", "rail"),
    // 角码
    ("CCLA", "Cornière basse", "corniere"),
    // 横档
    ("TI16", "Traverse intermédiaire 16", "traverse"),
    ("TI19", "Traverse intermédiaire 19", "traverse"),
    ("TI28", "Traverse intermédiaire 28", "traverse"),
    ("TI37", "Traverse intermédiaire 37", "traverse"),
    ("THB52", "Traverse haute/basse 52", "traverse"),
];

// (reference, designation, y, z, c, t)
const HANDLES: &[(&str, &str, f64, f64, f64, f64)] = &[
    ("P100", "Poignée P100", 30.0, 15.0, 20.0, 0.0),
    ("P110", "Poignée P110", 32.0, 16.0, 22.0, 0.0),
    ("P300-16", "Poignée P300 16mm", 28.0, 14.0, 18.0, 40.0),
    ("P30", "Poignée P30", 24.0, 12.0, 17.0, 38.0),
    ("P200", "Poignée P200", 30.0, 15.0, 20.0, 42.0),
    ("P300-19", "Poignée P300 19mm", 28.0, 14.0, 18.0, 40.0),
    ("P400", "Poignée P400", 34.0, 17.0, 22.0, 44.0),
    ("P600", "Poignée P600", 36.0, 18.0, 24.0, 46.0),
    ("P700", "Poignée P700", 26.0, 13.0, 18.0, 39.0),
    ("P710", "Poignée P710", 26.0, 13.0, 18.0, 39.0),
    ("P810", "Poignée P810", 34.0, 17.0, 0.0, 47.0),
];

// (reference, designation, type)
const ACCESSORIES: &[(&str, &str, &str)] = &[
    // 滑轮 / 垫片
    ("KITROUPRO", "Kit roulettes pro", "roue"),
    ("CALE16-19", "Cale 16-19", "cale"),
    ("ROUTHB52", "Roulette traverse basse 52", "roue"),
    // 制动
    ("FR82", "Frein amortisseur 82", "frein"),
    ("FR82E", "Frein éco 82", "frein"),
    ("FR96", "Frein amortisseur 96", "frein"),
    ("FR96-16", "Frein amortisseur 96 16mm", "frein"),
    ("FRBASEO", "Frein amortisseur BASEO", "frein"),
    ("FREIN", "Frein à lamelle", "frein"),
    ("FREINENROB", "Frein à lamelle enrobé", "frein"),
    // 导向 / 防脱轨
    ("GUIDHAUT82CN", "Guide haut 82", "guide"),
    ("GUIDHAUT16", "Guide haut 16", "guide"),
    ("GUIDHAUT96", "Guide haut 96", "guide"),
    ("GUIDHAUTBASEO", "Guide haut BASEO", "guide"),
    ("ANTIDERAIL1", "Anti-déraillement", "antideraillement"),
    // 密封 / 毛刷 / 玻璃压条
    ("JBUT", "Joint de butée", "joint"),
    ("JBUTNO", "Joint de butée noir", "joint"),
    ("JB48/1050", "Balai anti-poussière", "balai"),
    ("JB48/1050NO", "Balai anti-poussière noir", "balai"),
    ("JB48/500", "Balai de côté", "balai"),
    ("JB48/500NO", "Balai de côté noir", "balai"),
    ("PVITRAGE", "Profil de vitrage 6-8", "joint"),
    ("PVITRAGENO", "Profil de vitrage 6-8 noir", "joint"),
    ("PVITRAGE12", "Profil de vitrage 10-12", "joint"),
    ("PVITRAGE12NO", "Profil de vitrage 10-12 noir", "joint"),
    // 罩盖 / 吊架
    ("CAPOTRH50", "Capot monorail haut", "capot"),
    ("CAPOTRB48", "Capot monorail bas", "capot"),
    ("EQUERSUSPM", "Équerre de suspension + vis", "equerre"),
];

pub(super) fn entries() -> Vec<CatalogEntry> {
    let profiles = PROFILES.iter().map(|(reference, designation, kind)| {
        CatalogEntry::new(reference, designation, CatalogFamily::Profile, kind)
    });

    let handles = HANDLES.iter().map(|(reference, designation, y, z, c, t)| {
        CatalogEntry::new(reference, designation, CatalogFamily::Profile, "poignee")
            .with_geometry(*y, *z, *c, *t)
    });

    let accessories = ACCESSORIES.iter().map(|(reference, designation, kind)| {
        CatalogEntry::new(reference, designation, CatalogFamily::Accessory, kind)
    });

    profiles.chain(handles).chain(accessories).collect()
}
