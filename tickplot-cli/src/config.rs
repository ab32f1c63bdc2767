//! TOML configuration file: `[chart]` and `[log]` tables.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tickplot_tui::ChartConfig;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub chart: ChartConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence.
    pub level: String,
    /// Log file. Defaults to `<data dir>/tickplot/tickplot.log`.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LogConfig {
    pub fn file_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("tickplot")
                .join("tickplot.log")
        })
    }
}

/// `<config dir>/tickplot/config.toml`.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tickplot")
        .join("config.toml")
}

/// Loads `path`. A missing file gives defaults; an unreadable or invalid one
/// is an error.
pub fn load(path: &Path) -> Result<AppConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read config {}", path.display()))
        }
    };

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("invalid config {}", path.display()))?;
    config
        .chart
        .validate()
        .with_context(|| format!("invalid [chart] in {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickplot_core::SliceMethod;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn reads_both_tables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[chart]
spacing = 2
slice_method = "first"

[log]
level = "tickplot_tui=trace"
file = "/tmp/tickplot-test.log"
"#,
        )
        .unwrap();

        let config = load(&path).unwrap();
        assert_eq!(config.chart.spacing, 2);
        assert_eq!(config.chart.slice_method, SliceMethod::First);
        assert_eq!(config.log.level, "tickplot_tui=trace");
        assert_eq!(config.log.file_path(), PathBuf::from("/tmp/tickplot-test.log"));
    }

    #[test]
    fn invalid_chart_settings_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[chart]\nvolume_fraction = 3.0\n").unwrap();

        let err = load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("volume fraction 3"));
    }

    #[test]
    fn syntax_errors_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[chart\n").unwrap();

        let err = load(&path).unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }
}
