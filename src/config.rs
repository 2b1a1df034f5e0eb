use crate::error::{ArsipError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_ARCHIVE_NAME: &str = "INDOARSIP_Arsip_Renamed.zip";
pub const DEFAULT_REPORT_NAME: &str = "INDOARSIP_Laporan_Tidak_Cocok.xlsx";
pub const DEFAULT_PREVIEW_NAME: &str = "INDOARSIP_Preview_Rename.xlsx";

const COLUMN_ENV: &str = "ARSIP_REFERENCE_COLUMN";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// 参照列名の既定値
    pub default_column: Option<String>,
    pub archive_name: String,
    pub report_name: String,
    pub preview_name: String,
    /// 出力先の既定値（省略時はカレント）
    pub output_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_column: None,
            archive_name: DEFAULT_ARCHIVE_NAME.into(),
            report_name: DEFAULT_REPORT_NAME.into(),
            preview_name: DEFAULT_PREVIEW_NAME.into(),
            output_dir: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &std::path::Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &std::path::Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ArsipError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("arsip-rename").join("config.json"))
    }

    /// 参照列名を決定（引数 > 環境変数 > 設定ファイル）
    pub fn resolve_column(&self, explicit: Option<&str>) -> Option<String> {
        if let Some(column) = explicit {
            return Some(column.to_string());
        }

        // 環境変数を優先
        if let Ok(column) = std::env::var(COLUMN_ENV) {
            return Some(column);
        }

        self.default_column.clone()
    }

    pub fn set_default_column(&mut self, column: String) -> Result<()> {
        self.default_column = Some(column);
        self.save()
    }
}
