// ==========================================
// 目录 CSV 导入集成测试
// ==========================================
// 测试目标: 文件导入、错误行号、导入目录驱动推导
// ==========================================

mod test_helpers;

use sliding_door_configurator::catalog::{Catalog, CatalogError, HandleGeometry, ReferenceCatalog};
use sliding_door_configurator::config::EqualizationSettings;
use sliding_door_configurator::domain::{RailType, Range};
use sliding_door_configurator::engine::DerivationPipeline;
use std::io::Write;
use tempfile::NamedTempFile;
use test_helpers::ConfigBuilder;

const CATALOG_CSV: &str = "\
reference,designation,family,type,y,z,c,t
RH82,Rail haut 82 (import),profile,rail,,,,
RB55,Rail bas 55,profile,rail,,,,
CCLA,Cornière basse,profil,corniere,,,,
PX1,Poignée import,profile,poignee,\"12,5\",6,9,0
KITROUPRO,Kit roulettes,accessoire,roue,,,,
";

fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_catalog_file() {
    let file = write_csv(CATALOG_CSV);
    let catalog = Catalog::from_csv_path(file.path()).unwrap();

    assert_eq!(catalog.len(), 5);
    let geometry = HandleGeometry::lookup(&catalog, "PX1");
    assert!(geometry.found);
    assert_eq!(geometry.y, 12.5, "逗号小数点应被接受");
    assert_eq!(geometry.z, 6.0);

    let refs: Vec<&str> = catalog.entries().iter().map(|e| e.reference.as_str()).collect();
    assert_eq!(refs, vec!["CCLA", "KITROUPRO", "PX1", "RB55", "RH82"]);
}

#[test]
fn test_imported_catalog_drives_derivation() {
    let file = write_csv(CATALOG_CSV);
    let catalog = Catalog::from_csv_path(file.path()).unwrap();

    let config = ConfigBuilder::new(Range::R82)
        .rail(RailType::Double)
        .size(1200, 2100)
        .leaves(2)
        .handle("PX1")
        .build();
    let derivation = DerivationPipeline::new(&catalog, EqualizationSettings::default()).derive(&config);

    // (1200 − 12 + 12.5) / 2 = 600.25 → 600
    assert_eq!(derivation.profiles.meta.filling_width, 600);
    assert_eq!(derivation.profiles.rails.top.description, "Rail haut 82 (import)");
    assert_eq!(derivation.profiles.corner.as_ref().unwrap().length, 591);

    // 目录中没有的配件仍输出（名称为空）
    let guide = derivation
        .accessories
        .list
        .iter()
        .find(|l| l.reference == "GUIDHAUT82CN")
        .unwrap();
    assert_eq!(guide.designation, "");
    assert_eq!(guide.kind, "guide");
}

#[test]
fn test_missing_file() {
    let err = Catalog::from_csv_path("/definitely/not/here.csv").unwrap_err();
    assert!(matches!(err, CatalogError::FileReadError(_)));
}

#[test]
fn test_error_reports_row_number() {
    let file = write_csv("reference,designation,family,type,y\nA,a,profile,rail,\nB,b,profile,poignee,x\n");
    let err = Catalog::from_csv_path(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidConstant { row: 3, ref field, .. } if field == "y"));
    assert!(err.to_string().contains("行 3"));
}

#[test]
fn test_builtin_catalog_is_read_only_capability() {
    fn assert_send_sync<T: Send + Sync>(_: &T) {}
    let catalog = Catalog::builtin();
    assert_send_sync(&catalog);

    let dyn_catalog: &dyn ReferenceCatalog = &catalog;
    assert!(dyn_catalog.contains("P810"));
    assert!(dyn_catalog.find_by_reference("").is_none());
}
