//! 照合処理の型定義
//!
//! - FileEntry: 入力ファイル1件
//! - ReferenceValues: 参照列の値（行順を保持）
//! - MatchResult: 1回の照合の結果（cocok / tidak cocok / リネーム対応）

use crate::code::split_extension;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 入力ファイル
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    /// 実ファイルの場所
    pub path: PathBuf,
    /// 拡張子を含むファイル名
    pub filename: String,
    /// 先頭の `.` を含む拡張子（なければ空）
    pub extension: String,
    /// 入力セット内での相対位置（一覧表示用）
    #[serde(default)]
    pub relative_path: String,
    #[serde(default)]
    pub size: u64,
}

impl FileEntry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let extension = split_extension(&filename).1.to_string();

        Self {
            relative_path: filename.clone(),
            path,
            filename,
            extension,
            size: 0,
        }
    }

    pub fn with_relative_path(mut self, relative_path: impl Into<String>) -> Self {
        self.relative_path = relative_path.into();
        self
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }
}

/// 参照列の値
///
/// 空セル・空白のみのセルは除外済み。順序は元の表の行順。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceValues(Vec<String>);

impl ReferenceValues {
    /// セル値（文字列化済み）から構築
    pub fn from_cells<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let values = cells
            .into_iter()
            .flatten()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        Self(values)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// リネーム対応1件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameEntry {
    pub path: PathBuf,
    pub original_name: String,
    /// 抽出コード
    pub code: String,
    /// 一致した参照値
    pub reference: String,
    /// 参照値 + 元の拡張子
    pub new_name: String,
}

/// 照合結果
///
/// `matched` と `unmatched` は入力順を保持し、入力を過不足なく分割する。
/// `rename_mapping` は `matched` と同じ順序で1件ずつ対応する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub matched: Vec<FileEntry>,
    pub unmatched: Vec<FileEntry>,
    pub rename_mapping: Vec<RenameEntry>,
}

impl MatchResult {
    pub fn total(&self) -> usize {
        self.matched.len() + self.unmatched.len()
    }

    /// ファイルの新しい名前（未一致ならNone）
    pub fn new_name_for(&self, path: &Path) -> Option<&str> {
        self.rename_mapping
            .iter()
            .find(|r| r.path == path)
            .map(|r| r.new_name.as_str())
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            total: self.total(),
            matched: self.matched.len(),
            unmatched: self.unmatched.len(),
        }
    }
}

/// 集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub total: usize,
    pub matched: usize,
    pub unmatched: usize,
}

impl MatchSummary {
    pub fn matched_percent(&self) -> f64 {
        percent(self.matched, self.total)
    }

    pub fn unmatched_percent(&self) -> f64 {
        percent(self.unmatched, self.total)
    }
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_entry_from_path() {
        let entry = FileEntry::new("/tmp/arsip/file_pelanggan_0336.pdf");
        assert_eq!(entry.filename, "file_pelanggan_0336.pdf");
        assert_eq!(entry.extension, ".pdf");
        assert_eq!(entry.relative_path, "file_pelanggan_0336.pdf");
    }

    #[test]
    fn test_file_entry_without_extension() {
        let entry = FileEntry::new("arsip/0336");
        assert_eq!(entry.filename, "0336");
        assert_eq!(entry.extension, "");
    }

    #[test]
    fn test_reference_values_trim_and_drop_empty() {
        let refs = ReferenceValues::from_cells(vec![
            Some("  0336-PT. CONTAINER  "),
            None,
            Some("   "),
            Some(""),
            Some("0007-CONTOH PT"),
        ]);
        assert_eq!(refs.as_slice(), &["0336-PT. CONTAINER", "0007-CONTOH PT"]);
        assert_eq!(refs.len(), 2);
    }

    #[test]
    fn test_summary_percent() {
        let summary = MatchSummary { total: 4, matched: 3, unmatched: 1 };
        assert!((summary.matched_percent() - 75.0).abs() < f64::EPSILON);
        assert!((summary.unmatched_percent() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary_percent_empty() {
        let summary = MatchSummary::default();
        assert_eq!(summary.matched_percent(), 0.0);
        assert_eq!(summary.unmatched_percent(), 0.0);
    }

    #[test]
    fn test_match_result_json_roundtrip() {
        let entry = FileEntry::new("a/0336.pdf").with_size(10);
        let result = MatchResult {
            matched: vec![entry.clone()],
            unmatched: vec![],
            rename_mapping: vec![RenameEntry {
                path: entry.path.clone(),
                original_name: entry.filename.clone(),
                code: "0336".into(),
                reference: "0336-A".into(),
                new_name: "0336-A.pdf".into(),
            }],
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("renameMapping"));
        let parsed: MatchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
