// ==========================================
// 推拉门配置系统 - 报价单导出
// ==========================================
// 格式: JSON（完整结构）/ CSV（扁平表，首列为分区）
// CSV 表头与分区名随当前语言切换
// ==========================================

use crate::i18n::t;
use crate::report::error::ReportResult;
use crate::report::quote::Quote;
use std::io::Write;
use tracing::{debug, instrument};

/// 导出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "json" => Some(ExportFormat::Json),
            "csv" => Some(ExportFormat::Csv),
            _ => None,
        }
    }
}

const CSV_COLUMNS: [&str; 6] = [
    "report.columns.section",
    "report.columns.reference",
    "report.columns.designation",
    "report.columns.finish",
    "report.columns.qty",
    "report.columns.dimension",
];

impl Quote {
    /// JSON 导出（带缩进）
    pub fn to_json(&self) -> ReportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// CSV 导出到字符串
    pub fn to_csv(&self) -> ReportResult<String> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// 按格式写出
    #[instrument(skip(self, out), fields(quote_id = %self.id))]
    pub fn export<W: Write>(&self, format: ExportFormat, mut out: W) -> ReportResult<()> {
        match format {
            ExportFormat::Json => {
                serde_json::to_writer_pretty(&mut out, self)?;
                writeln!(out)?;
            }
            ExportFormat::Csv => self.write_csv(out)?,
        }
        debug!(rows = self.row_count(), ?format, "报价单导出完成");
        Ok(())
    }

    /// CSV 写出
    pub fn write_csv<W: Write>(&self, out: W) -> ReportResult<()> {
        let mut writer = csv::Writer::from_writer(out);

        writer.write_record(CSV_COLUMNS.iter().map(|key| t(key)))?;

        let section = t("report.sections.profiles");
        for row in &self.profiles {
            writer.write_record([
                section.as_str(),
                row.reference.as_str(),
                row.designation.as_str(),
                row.finish.as_str(),
                row.qty.to_string().as_str(),
                row.length.as_str(),
            ])?;
        }

        let section = t("report.sections.accessories");
        for row in &self.accessories {
            writer.write_record([
                section.as_str(),
                row.reference.as_str(),
                row.designation.as_str(),
                row.finish.as_str(),
                row.qty.to_string().as_str(),
                row.length.as_str(),
            ])?;
        }

        let section = t("report.sections.fillings");
        for row in &self.fillings {
            writer.write_record([
                section.as_str(),
                "",
                row.designation.as_str(),
                "",
                row.qty.to_string().as_str(),
                row.dimensions.as_str(),
            ])?;
        }

        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format_parse() {
        assert_eq!(ExportFormat::parse("JSON"), Some(ExportFormat::Json));
        assert_eq!(ExportFormat::parse(" csv "), Some(ExportFormat::Csv));
        assert_eq!(ExportFormat::parse("pdf"), None);
    }
}
