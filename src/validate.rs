//! 入力検証
//!
//! 処理を始める前に不足・不正な入力をまとめて検出する。
//! 1件でもメッセージがあれば何も処理しない。

use crate::error::{ArsipError, Result};
use crate::scanner::InputSource;
use std::path::{Path, PathBuf};

/// 1回の検証・照合の入力
#[derive(Debug, Clone, Default)]
pub struct ValidationRequest {
    pub source: Option<InputSource>,
    pub reference_file: Option<PathBuf>,
    pub reference_column: String,
    pub sheet: Option<String>,
}

fn is_zip(path: &Path) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case("zip"))
        .unwrap_or(false)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

impl ValidationRequest {
    /// 検証メッセージ一覧（空なら問題なし）
    pub fn messages(&self) -> Vec<String> {
        let mut errors = Vec::new();

        match &self.source {
            None => errors.push(
                "アーカイブ入力がありません（--zip / --folder / --files のいずれかを指定）"
                    .to_string(),
            ),
            Some(InputSource::Archive(path)) => {
                if !path.is_file() {
                    errors.push(format!("ZIPファイルが見つかりません: {}", path.display()));
                } else if !is_zip(path) {
                    errors.push(format!("ZIPファイルではありません: {}", file_name(path)));
                }
            }
            Some(InputSource::Folder(path)) => {
                if !path.is_dir() {
                    errors.push(format!("フォルダが見つかりません: {}", path.display()));
                }
            }
            Some(InputSource::Files(paths)) => {
                if paths.is_empty() {
                    errors.push("ファイルが指定されていません".to_string());
                }

                let zips: Vec<String> = paths
                    .iter()
                    .filter(|p| is_zip(p))
                    .map(|p| file_name(p))
                    .collect();
                if !zips.is_empty() {
                    errors.push(format!(
                        "ZIPファイルは --files では指定できません。--zip を使用してください: {}",
                        zips.join(", ")
                    ));
                }

                for path in paths.iter().filter(|p| !is_zip(p) && !p.is_file()) {
                    errors.push(format!("ファイルが見つかりません: {}", path.display()));
                }
            }
        }

        match &self.reference_file {
            None => errors.push("参照Excelファイルがありません（--reference）".to_string()),
            Some(path) if !path.is_file() => {
                errors.push(format!("参照Excelファイルが見つかりません: {}", path.display()));
            }
            Some(_) => {}
        }

        if self.reference_column.trim().is_empty() {
            errors.push("参照列名が空です（--column）".to_string());
        }

        errors
    }

    pub fn validate(&self) -> Result<()> {
        let errors = self.messages();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ArsipError::Validation(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request_reports_everything() {
        let messages = ValidationRequest::default().messages();
        assert_eq!(messages.len(), 3);
    }

    #[test]
    fn test_zip_in_files_mode_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = dir.path().join("0336.pdf");
        let zip = dir.path().join("arsip.ZIP");
        let reference = dir.path().join("ref.xlsx");
        std::fs::write(&pdf, b"x").unwrap();
        std::fs::write(&zip, b"x").unwrap();
        std::fs::write(&reference, b"x").unwrap();

        let request = ValidationRequest {
            source: Some(InputSource::Files(vec![pdf, zip])),
            reference_file: Some(reference),
            reference_column: "Nama".into(),
            sheet: None,
        };
        let messages = request.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("arsip.ZIP"));
    }

    #[test]
    fn test_blank_column_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let reference = dir.path().join("ref.xlsx");
        std::fs::write(&reference, b"x").unwrap();

        let request = ValidationRequest {
            source: Some(InputSource::Folder(dir.path().to_path_buf())),
            reference_file: Some(reference),
            reference_column: "   ".into(),
            sheet: None,
        };
        assert!(matches!(request.validate(), Err(ArsipError::Validation(m)) if m.len() == 1));
    }

    #[test]
    fn test_valid_request() {
        let dir = tempfile::tempdir().unwrap();
        let reference = dir.path().join("ref.xlsx");
        std::fs::write(&reference, b"x").unwrap();

        let request = ValidationRequest {
            source: Some(InputSource::Folder(dir.path().to_path_buf())),
            reference_file: Some(reference),
            reference_column: "Nama Arsip".into(),
            sheet: None,
        };
        assert!(request.validate().is_ok());
    }
}
