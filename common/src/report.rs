//! レポート生成（xlsx）
//!
//! - 未一致レポート: ファイル名 + ステータスの2列
//! - リネームプレビュー: 旧名・コード・新名の一覧

use crate::error::{Error, Result};
use crate::types::{FileEntry, MatchResult};
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, Worksheet};

pub const UNMATCHED_SHEET_NAME: &str = "Arsip Tidak Cocok";
pub const UNMATCHED_HEADERS: [&str; 2] = ["Nama File Tidak Cocok", "Status"];
pub const UNMATCHED_STATUS: &str = "Tidak Ditemukan di Referensi";

pub const PREVIEW_SHEET_NAME: &str = "Preview Rename";
pub const PREVIEW_HEADERS: [&str; 5] =
    ["No", "Nama Arsip Lama", "Kode Ekstrak", "Nama Arsip Baru", "Status"];
pub const PREVIEW_STATUS: &str = "Siap Rename";

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x2A5298))
        .set_font_color(Color::White)
        .set_border(FormatBorder::Thin)
}

fn write_header(worksheet: &mut Worksheet, headers: &[&str], widths: &[f64]) -> Result<()> {
    let format = header_format();
    for (col, (header, width)) in headers.iter().zip(widths).enumerate() {
        let col = col as u16;
        worksheet
            .write_string_with_format(0, col, *header, &format)
            .map_err(|e| Error::Report(format!("ヘッダー書き込みエラー: {}", e)))?;
        worksheet
            .set_column_width(col, *width)
            .map_err(|e| Error::Report(format!("列幅設定エラー: {}", e)))?;
    }
    Ok(())
}

fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, value: &str) -> Result<()> {
    worksheet
        .write_string(row, col, value)
        .map_err(|e| Error::Report(format!("セル書き込みエラー: {}", e)))?;
    Ok(())
}

/// 未一致ファイルのレポートをバッファに生成
pub fn unmatched_report_buffer(unmatched: &[FileEntry]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(UNMATCHED_SHEET_NAME)
        .map_err(|e| Error::Report(format!("シート名設定エラー: {}", e)))?;

    write_header(worksheet, &UNMATCHED_HEADERS, &[48.0, 32.0])?;

    for (i, file) in unmatched.iter().enumerate() {
        let row = i as u32 + 1;
        write_cell(worksheet, row, 0, &file.filename)?;
        write_cell(worksheet, row, 1, UNMATCHED_STATUS)?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| Error::Report(format!("Excel保存エラー: {}", e)))
}

/// リネーム予定一覧をバッファに生成
pub fn rename_preview_buffer(result: &MatchResult) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(PREVIEW_SHEET_NAME)
        .map_err(|e| Error::Report(format!("シート名設定エラー: {}", e)))?;

    write_header(worksheet, &PREVIEW_HEADERS, &[6.0, 40.0, 14.0, 48.0, 14.0])?;

    for (i, entry) in result.rename_mapping.iter().enumerate() {
        let row = i as u32 + 1;
        worksheet
            .write_number(row, 0, (i + 1) as f64)
            .map_err(|e| Error::Report(format!("セル書き込みエラー: {}", e)))?;
        write_cell(worksheet, row, 1, &entry.original_name)?;
        write_cell(worksheet, row, 2, &entry.code)?;
        write_cell(worksheet, row, 3, &entry.new_name)?;
        write_cell(worksheet, row, 4, PREVIEW_STATUS)?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| Error::Report(format!("Excel保存エラー: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::match_files;

    #[test]
    fn test_unmatched_report_is_xlsx() {
        let files = vec![FileEntry::new("a/none.pdf"), FileEntry::new("a/lain.doc")];
        let buffer = unmatched_report_buffer(&files).unwrap();
        // xlsxはZIPコンテナ
        assert!(buffer.starts_with(b"PK"));
    }

    #[test]
    fn test_unmatched_report_empty() {
        let buffer = unmatched_report_buffer(&[]).unwrap();
        assert!(!buffer.is_empty());
    }

    #[test]
    fn test_rename_preview_buffer() {
        let files = vec![FileEntry::new("a/0336.pdf")];
        let result = match_files(&files, &["0336-A".to_string()]);
        let buffer = rename_preview_buffer(&result).unwrap();
        assert!(buffer.starts_with(b"PK"));
    }
}
