// ==========================================
// 推拉门配置系统 - 目录 CSV 导入
// ==========================================
// 列: reference,designation,family,type,y,z,c,t
// 几何常量允许留空
// ==========================================

use super::error::{CatalogError, CatalogResult};
use super::{Catalog, CatalogEntry, CatalogFamily};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::{info, instrument};

impl Catalog {
    /// 从 CSV 文件加载目录
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_csv_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        let catalog = Self::from_csv_reader(file)?;
        info!(entries = catalog.len(), "目录加载完成");
        Ok(catalog)
    }

    /// 从任意 CSV 输入加载目录
    pub fn from_csv_reader<R: Read>(input: R) -> CatalogResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(input);

        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for (row_idx, result) in reader.records().enumerate() {
            let record = result?;
            let row_number = row_idx + 2; // +2 因为行号从1开始,且跳过header

            let reference = get_string_field(&record, 0)
                .ok_or(CatalogError::EmptyReference(row_number))?;
            if !seen.insert(reference.clone()) {
                return Err(CatalogError::DuplicateReference {
                    row: row_number,
                    reference,
                });
            }

            let family_raw = get_string_field(&record, 2).unwrap_or_default();
            let family = CatalogFamily::parse(&family_raw).ok_or_else(|| {
                CatalogError::UnknownFamily {
                    row: row_number,
                    value: family_raw.clone(),
                }
            })?;

            let mut entry = CatalogEntry::new(
                &reference,
                &get_string_field(&record, 1).unwrap_or_default(),
                family,
                &get_string_field(&record, 3).unwrap_or_default(),
            );
            entry.y = get_constant_field(&record, 4, "y", row_number)?;
            entry.z = get_constant_field(&record, 5, "z", row_number)?;
            entry.c = get_constant_field(&record, 6, "c", row_number)?;
            entry.t = get_constant_field(&record, 7, "t", row_number)?;

            entries.push(entry);
        }

        Ok(Self::from_entries(entries))
    }
}

// ==========================================
// 辅助方法: CSV字段解析
// ==========================================

fn get_string_field(record: &csv::StringRecord, index: usize) -> Option<String> {
    record
        .get(index)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn get_constant_field(
    record: &csv::StringRecord,
    index: usize,
    field: &str,
    row: usize,
) -> CatalogResult<Option<f64>> {
    match get_string_field(record, index) {
        None => Ok(None),
        Some(raw) => raw
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Some)
            .ok_or(CatalogError::InvalidConstant {
                row,
                field: field.to_string(),
                value: raw,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ReferenceCatalog;

    const SAMPLE: &str = "reference,designation,family,type,y,z,c,t\n\
        RH96,Rail haut 96,profile,rail,,,,\n\
        P200,Poignée P200,profile,poignee,30,15,20,42\n\
        FR96,Frein 96,accessory,frein\n";

    #[test]
    fn test_load_sample() {
        let catalog = Catalog::from_csv_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 3);

        let p200 = catalog.find_by_reference("P200").unwrap();
        assert_eq!(p200.y, Some(30.0));
        assert_eq!(p200.t, Some(42.0));

        let rail = catalog.find_by_reference("RH96").unwrap();
        assert_eq!(rail.y, None);

        // 列数不足的行: 常量视为缺失
        let brake = catalog.find_by_reference("FR96").unwrap();
        assert_eq!(brake.family, CatalogFamily::Accessory);
        assert_eq!(brake.c, None);
    }

    #[test]
    fn test_duplicate_reference_rejected() {
        let csv = "reference,designation,family,type\nRH96,A,profile,rail\nRH96,B,profile,rail\n";
        let err = Catalog::from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateReference { row: 3, .. }));
    }

    #[test]
    fn test_bad_constant_rejected() {
        let csv = "reference,designation,family,type,y\nP1,X,profile,poignee,abc\n";
        let err = Catalog::from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidConstant { row: 2, .. }));
    }

    #[test]
    fn test_unknown_family_rejected() {
        let csv = "reference,designation,family,type\nP1,X,glass,poignee\n";
        let err = Catalog::from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownFamily { .. }));
    }

    #[test]
    fn test_empty_reference_rejected() {
        let csv = "reference,designation,family,type\n,X,profile,rail\n";
        let err = Catalog::from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyReference(2)));
    }
}
