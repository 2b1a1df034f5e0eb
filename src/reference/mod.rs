//! 参照Excelの読み込み
//!
//! 1行目をヘッダーとして扱い、指定列の値を行順のまま文字列化する。

use crate::error::{ArsipError, Result};
use arsip_rename_common::ReferenceValues;
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// 参照表（ヘッダー + データ行）
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl ReferenceTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        Self { headers, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.headers
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// 指定列の参照値（空セル除外・前後空白除去・行順維持）
    pub fn values(&self, column: &str) -> Result<ReferenceValues> {
        let index = self
            .headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| ArsipError::ColumnNotFound {
                column: column.to_string(),
                available: self.headers.clone(),
            })?;

        Ok(ReferenceValues::from_cells(
            self.rows.iter().map(|row| row.get(index).cloned().flatten()),
        ))
    }
}

/// セル値を文字列に変換（空・エラーはNone）
pub fn cell_to_string(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        // 336.0 → "336"
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => Some(format!("{}", *f as i64)),
        Data::Float(f) => Some(f.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        // 2024-01-01 00:00:00（変換できなければシリアル値）
        Data::DateTime(dt) => Some(
            dt.as_datetime()
                .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| dt.as_f64().to_string()),
        ),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
    }
}

/// Excel/ODSを読み込む（シート省略時は先頭シート）
pub fn load_reference_table(path: &Path, sheet: Option<&str>) -> Result<ReferenceTable> {
    if !path.is_file() {
        return Err(ArsipError::FileNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path)?;
    let sheet_names = workbook.sheet_names();

    let sheet_name = match sheet {
        Some(name) => {
            if !sheet_names.iter().any(|s| s == name) {
                return Err(ArsipError::InvalidReference(format!(
                    "シート '{}' が見つかりません。利用可能なシート: {}",
                    name,
                    sheet_names.join(", ")
                )));
            }
            name.to_string()
        }
        None => sheet_names
            .first()
            .cloned()
            .ok_or_else(|| ArsipError::InvalidReference("シートがありません".into()))?,
    };

    let range = workbook.worksheet_range(&sheet_name)?;
    let mut rows = range.rows();

    let headers: Vec<String> = rows
        .next()
        .map(|row| {
            row.iter()
                .map(|c| cell_to_string(c).unwrap_or_default().trim().to_string())
                .collect()
        })
        .unwrap_or_default();

    let rows: Vec<Vec<Option<String>>> = rows
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    tracing::debug!(
        sheet = %sheet_name,
        columns = headers.len(),
        rows = rows.len(),
        "参照表読み込み完了"
    );

    Ok(ReferenceTable::new(headers, rows))
}

/// 参照ファイルの指定列を読み込む
pub fn load_reference_values(
    path: &Path,
    column: &str,
    sheet: Option<&str>,
) -> Result<ReferenceValues> {
    load_reference_table(path, sheet)?.values(column)
}
