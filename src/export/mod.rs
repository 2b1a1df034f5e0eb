pub mod archive;
pub mod report;

use crate::config::Config;
use crate::error::Result;
use arsip_rename_common::MatchResult;
use std::path::{Path, PathBuf};

/// 出力オプション
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// 個別ファイルも出力する
    pub individual: bool,
    /// プレビューExcelも出力する
    pub preview: bool,
    pub show_progress: bool,
}

/// 出力されたファイル
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    pub archive: Option<PathBuf>,
    pub archive_entries: usize,
    pub unmatched_report: Option<PathBuf>,
    pub preview_report: Option<PathBuf>,
    pub individual_dir: Option<PathBuf>,
    pub individual_files: usize,
}

fn individual_dir_for(output_dir: &Path, archive_name: &str) -> PathBuf {
    let stem = Path::new(archive_name)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "renamed".to_string());
    output_dir.join(stem)
}

pub fn export_results(
    result: &MatchResult,
    output_dir: &Path,
    config: &Config,
    options: &ExportOptions,
) -> Result<ExportSummary> {
    let mut summary = ExportSummary::default();

    let report_path = output_dir.join(&config.report_name);
    if report::write_unmatched_report(result, &report_path)? {
        println!("✔ 未一致レポート出力: {} ({}件)", report_path.display(), result.unmatched.len());
        summary.unmatched_report = Some(report_path);
    }

    if !result.rename_mapping.is_empty() {
        let archive_path = output_dir.join(&config.archive_name);
        println!("- ZIPを生成中...");
        summary.archive_entries = archive::write_renamed_archive(
            &result.rename_mapping,
            &archive_path,
            options.show_progress,
        )?;
        println!("✔ ZIP出力: {} ({}件)", archive_path.display(), summary.archive_entries);
        summary.archive = Some(archive_path);

        if options.individual {
            let dir = individual_dir_for(output_dir, &config.archive_name);
            println!("- 個別ファイルをコピー中...");
            summary.individual_files =
                archive::write_renamed_files(&result.rename_mapping, &dir, options.show_progress)?;
            println!("✔ 個別ファイル出力: {} ({}件)", dir.display(), summary.individual_files);
            summary.individual_dir = Some(dir);
        }

        if options.preview {
            let preview_path = output_dir.join(&config.preview_name);
            report::write_preview_report(result, &preview_path)?;
            println!("✔ プレビュー出力: {}", preview_path.display());
            summary.preview_report = Some(preview_path);
        }
    } else {
        println!("⚠ 一致したファイルがないためZIPは生成しません");
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_individual_dir_from_archive_name() {
        let dir = individual_dir_for(Path::new("/out"), "INDOARSIP_Arsip_Renamed.zip");
        assert_eq!(dir, PathBuf::from("/out/INDOARSIP_Arsip_Renamed"));
    }
}
