// ==========================================
// 推拉门配置系统 - 表面处理代码表
// ==========================================
// 固定映射: 代码 → 显示名称
// 未知代码 → 原样显示
// ==========================================

/// 表面处理代码表（顺序即展示顺序）
pub const FINISH_LABELS: &[(&str, &str)] = &[
    ("LBL", "Laqué Blanc 9010"),
    ("LBLG", "Laqué Blanc 9003 Granité"),
    ("L9002G", "Laqué Blanc Gris 9002 Granité"),
    ("SA", "Anodisé Argent"),
    ("LNOG", "Laqué Noir 9005 Granité"),
    ("BI", "Inox Brossé"),
    ("PB", "Bronze Poli"),
    ("BR", "Brut"),
];

/// 查找表面处理名称
pub fn finish_label(code: &str) -> Option<&'static str> {
    FINISH_LABELS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
}

/// 表面处理显示名称: 已知代码 → 名称; 否则 → 代码本身
pub fn finish_label_or_code(code: &str) -> String {
    finish_label(code)
        .map(str::to_string)
        .unwrap_or_else(|| code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(finish_label("SA"), Some("Anodisé Argent"));
        assert_eq!(finish_label_or_code("LNOG"), "Laqué Noir 9005 Granité");
    }

    #[test]
    fn test_unknown_code_falls_back() {
        assert_eq!(finish_label("XYZ"), None);
        assert_eq!(finish_label_or_code("XYZ"), "XYZ");
        assert_eq!(finish_label_or_code(""), "");
    }
}
