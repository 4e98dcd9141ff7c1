// ==========================================
// 推拉门配置系统 - 命令行入口
// ==========================================
// 用法:
//   sliding-door-configurator <configuration.json>
//       [--settings PATH] [--catalog PATH]
//       [--format json|csv] [--locale fr|en]
//       [--normalize] [--log-json]
// 报价单输出到 stdout,日志输出到 stderr
// ==========================================

use anyhow::{bail, Context, Result};
use sliding_door_configurator::config::{load_configuration, ConfigManager};
use sliding_door_configurator::i18n::{self, t, t_with_args};
use sliding_door_configurator::{
    logging, Catalog, ConfigurationNormalizer, DerivationPipeline, ExportFormat, Quote,
};
use std::path::PathBuf;

#[derive(Debug)]
struct CliArgs {
    configuration: PathBuf,
    settings: Option<PathBuf>,
    catalog: Option<PathBuf>,
    format: ExportFormat,
    locale: Option<String>,
    normalize: bool,
    log_json: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs> {
    let mut args = args.into_iter();
    let mut configuration = None;
    let mut settings = None;
    let mut catalog = None;
    let mut format = ExportFormat::Json;
    let mut locale = None;
    let mut normalize = false;
    let mut log_json = false;

    while let Some(arg) = args.next() {
        let mut value_for = |option: &str| -> Result<String> {
            args.next()
                .filter(|v| !v.starts_with("--"))
                .with_context(|| t_with_args("cli.missing_value", &[("option", option)]))
        };

        match arg.as_str() {
            "--settings" => settings = Some(PathBuf::from(value_for("--settings")?)),
            "--catalog" => catalog = Some(PathBuf::from(value_for("--catalog")?)),
            "--format" => {
                let value = value_for("--format")?;
                format = ExportFormat::parse(&value).with_context(|| {
                    t_with_args("cli.invalid_format", &[("value", value.as_str())])
                })?;
            }
            "--locale" => locale = Some(value_for("--locale")?),
            "--normalize" => normalize = true,
            "--log-json" => log_json = true,
            "-h" | "--help" => bail!(t("cli.usage")),
            other if other.starts_with("--") => {
                bail!(t_with_args("cli.unknown_option", &[("option", other)]))
            }
            other => {
                if configuration.is_some() {
                    bail!(t("cli.usage"));
                }
                configuration = Some(PathBuf::from(other));
            }
        }
    }

    let Some(configuration) = configuration else {
        bail!(t("cli.usage"));
    };

    Ok(CliArgs {
        configuration,
        settings,
        catalog,
        format,
        locale,
        normalize,
        log_json,
    })
}

fn main() -> Result<()> {
    let args = parse_args(std::env::args().skip(1))?;

    if args.log_json {
        logging::init_json();
    } else {
        logging::init();
    }

    tracing::info!(
        "{} v{}",
        sliding_door_configurator::APP_NAME,
        sliding_door_configurator::VERSION
    );

    // ==========================================
    // 设置 / 语言
    // ==========================================
    let manager = match &args.settings {
        Some(path) => ConfigManager::from_path(path)
            .with_context(|| format!("无法加载设置文件 {}", path.display()))?,
        None => ConfigManager::load().context("无法加载引擎设置")?,
    };
    tracing::debug!(source = ?manager.source(), settings = %manager.get_config_snapshot(), "引擎设置");
    i18n::set_locale(args.locale.as_deref().unwrap_or(manager.locale()));

    // ==========================================
    // 目录
    // ==========================================
    let catalog_path = args
        .catalog
        .clone()
        .or_else(|| manager.catalog_path().map(PathBuf::from));
    let catalog = match &catalog_path {
        Some(path) => Catalog::from_csv_path(path)
            .with_context(|| format!("无法加载目录 {}", path.display()))?,
        None => Catalog::builtin(),
    };

    // ==========================================
    // 配置 → 推导 → 报价单
    // ==========================================
    let mut configuration = load_configuration(&args.configuration)
        .with_context(|| format!("无法加载配置 {}", args.configuration.display()))?;
    if args.normalize {
        configuration = ConfigurationNormalizer::new().normalize(&configuration);
    }

    let pipeline = DerivationPipeline::new(&catalog, manager.equalization());
    let derivation = pipeline.derive(&configuration);
    let quote = Quote::from_derivation(&configuration, &derivation);

    let stdout = std::io::stdout();
    quote
        .export(args.format, stdout.lock())
        .context("报价单输出失败")?;

    let rows = quote.row_count().to_string();
    let id = quote.id.to_string();
    tracing::info!(
        "{}",
        t_with_args("cli.quote_ready", &[("id", id.as_str()), ("rows", rows.as_str())])
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_full_command_line() {
        let parsed = parse_args(args(&[
            "door.json",
            "--settings",
            "s.json",
            "--format",
            "csv",
            "--locale",
            "en",
            "--normalize",
        ]))
        .unwrap();

        assert_eq!(parsed.configuration, PathBuf::from("door.json"));
        assert_eq!(parsed.settings, Some(PathBuf::from("s.json")));
        assert_eq!(parsed.format, ExportFormat::Csv);
        assert_eq!(parsed.locale.as_deref(), Some("en"));
        assert!(parsed.normalize);
        assert!(!parsed.log_json);
        assert!(parsed.catalog.is_none());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_args(args(&[])).is_err());
        assert!(parse_args(args(&["door.json", "--format", "pdf"])).is_err());
        assert!(parse_args(args(&["door.json", "--catalog"])).is_err());
        assert!(parse_args(args(&["door.json", "--bogus"])).is_err());
        assert!(parse_args(args(&["a.json", "b.json"])).is_err());
    }
}
