//! 未一致レポート / プレビューの出力

use crate::error::Result;
use arsip_rename_common::report::{rename_preview_buffer, unmatched_report_buffer};
use arsip_rename_common::MatchResult;
use std::path::Path;

fn write_buffer(output: &Path, buffer: &[u8]) -> Result<()> {
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output, buffer)?;
    Ok(())
}

/// 未一致レポートを書き出す（未一致0件なら何もしない）
pub fn write_unmatched_report(result: &MatchResult, output: &Path) -> Result<bool> {
    if result.unmatched.is_empty() {
        return Ok(false);
    }
    let buffer = unmatched_report_buffer(&result.unmatched)?;
    write_buffer(output, &buffer)?;
    Ok(true)
}

pub fn write_preview_report(result: &MatchResult, output: &Path) -> Result<()> {
    let buffer = rename_preview_buffer(result)?;
    write_buffer(output, &buffer)
}
