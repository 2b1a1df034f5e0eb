//! リネーム済みZIP / 個別ファイルの出力

use crate::error::Result;
use arsip_rename_common::{split_extension, RenameEntry};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// 個別ファイル名として使えない区切り文字を `_` に置換
pub fn flat_file_name(name: &str) -> String {
    name.replace(['/', '\\'], "_")
}

/// (参照値部分, 元の拡張子) に分割
///
/// 新しい名前は「参照値 + 元の拡張子」なので、参照値内の `.` では分割しない。
fn split_new_name(entry: &RenameEntry) -> (&str, &str) {
    match entry.new_name.strip_prefix(entry.reference.as_str()) {
        Some(ext) if !entry.reference.is_empty() => {
            entry.new_name.split_at(entry.new_name.len() - ext.len())
        }
        _ => split_extension(&entry.new_name),
    }
}

/// 出力名の重複を ` (2)`, ` (3)` … の接尾辞で解消
///
/// 同じ参照値に複数ファイルが一致した場合に、後のファイルが上書きされないようにする。
/// `flatten` が真なら区切り文字も置換する（個別ファイル出力用）。
pub fn unique_output_names(entries: &[RenameEntry], flatten: bool) -> Vec<(PathBuf, String)> {
    let mut used = HashSet::new();

    entries
        .iter()
        .map(|entry| {
            let (stem, ext) = split_new_name(entry);
            let (stem, ext) = if flatten {
                (flat_file_name(stem), flat_file_name(ext))
            } else {
                (stem.to_string(), ext.to_string())
            };

            let mut name = format!("{}{}", stem, ext);
            let mut n = 2;
            while !used.insert(name.clone()) {
                name = format!("{} ({}){}", stem, n, ext);
                n += 1;
            }
            if name != entry.new_name {
                tracing::warn!(from = %entry.new_name, to = %name, "出力名を変更");
            }
            (entry.path.clone(), name)
        })
        .collect()
}

fn progress_bar(len: usize, show: bool) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar().template("{bar:40} {pos}/{len} {msg}") {
        bar.set_style(style);
    }
    bar
}

/// リネーム済みZIPを書き出す（Deflate圧縮）
///
/// 戻り値は書き込んだエントリ数。
pub fn write_renamed_archive(
    entries: &[RenameEntry],
    output: &Path,
    show_progress: bool,
) -> Result<usize> {
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(output)?;
    let mut writer = ZipWriter::new(BufWriter::new(file));
    let options = FileOptions::<()>::default().compression_method(CompressionMethod::Deflated);

    let names = unique_output_names(entries, false);
    let bar = progress_bar(names.len(), show_progress);

    for (source, name) in &names {
        bar.set_message(name.clone());
        writer.start_file(name.as_str(), options)?;
        let mut input = File::open(source)?;
        io::copy(&mut input, &mut writer)?;
        bar.inc(1);
    }

    writer.finish()?;
    bar.finish_and_clear();

    tracing::debug!(count = names.len(), path = %output.display(), "ZIP出力完了");
    Ok(names.len())
}

/// リネーム済みファイルを個別にコピー
pub fn write_renamed_files(
    entries: &[RenameEntry],
    output_dir: &Path,
    show_progress: bool,
) -> Result<usize> {
    std::fs::create_dir_all(output_dir)?;

    let names = unique_output_names(entries, true);
    let bar = progress_bar(names.len(), show_progress);

    for (source, name) in &names {
        bar.set_message(name.clone());
        std::fs::copy(source, output_dir.join(name))?;
        bar.inc(1);
    }
    bar.finish_and_clear();

    Ok(names.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str, reference: &str, extension: &str) -> RenameEntry {
        RenameEntry {
            path: PathBuf::from(path),
            original_name: path.to_string(),
            code: String::new(),
            reference: reference.to_string(),
            new_name: format!("{}{}", reference, extension),
        }
    }

    fn names_of(names: Vec<(PathBuf, String)>) -> Vec<String> {
        names.into_iter().map(|(_, n)| n).collect()
    }

    #[test]
    fn test_unique_names_without_conflict() {
        let entries = [entry("a", "0336-A", ".pdf"), entry("b", "0007-B", ".pdf")];
        let names = unique_output_names(&entries, false);
        assert_eq!(names_of(names), vec!["0336-A.pdf", "0007-B.pdf"]);
    }

    #[test]
    fn test_unique_names_with_conflict() {
        let names = unique_output_names(
            &[
                entry("a", "0336-A", ".pdf"),
                entry("b", "0336-A", ".pdf"),
                entry("c", "0336-A", ".pdf"),
                entry("d", "0336-A", ".jpg"),
            ],
            false,
        );
        assert_eq!(
            names_of(names),
            vec!["0336-A.pdf", "0336-A (2).pdf", "0336-A (3).pdf", "0336-A.jpg"]
        );
    }

    #[test]
    fn test_reference_with_dot_keeps_text() {
        // 参照値内の `.` は拡張子扱いしない（接尾辞は参照値の直後）
        let names = unique_output_names(
            &[entry("a", "0336-PT. MARITIME", ".pdf"), entry("b", "0336-PT. MARITIME", ".pdf")],
            false,
        );
        assert_eq!(names[1].1, "0336-PT. MARITIME (2).pdf");
    }

    #[test]
    fn test_reference_with_dot_and_no_extension() {
        let entries = [entry("a", "0336-PT. X", ""), entry("b", "0336-PT. X", "")];
        let names = unique_output_names(&entries, false);
        assert_eq!(names_of(names), vec!["0336-PT. X", "0336-PT. X (2)"]);
    }

    #[test]
    fn test_flat_file_name() {
        assert_eq!(flat_file_name("0336/PT/2024.pdf"), "0336_PT_2024.pdf");
        assert_eq!(flat_file_name(r"0336\PT.pdf"), "0336_PT.pdf");
        assert_eq!(flat_file_name("0336-A.pdf"), "0336-A.pdf");
    }

    #[test]
    fn test_flatten_then_dedup() {
        // 置換後に同名になる場合も重複回避される
        let entries = [entry("a", "0336/PT", ".pdf"), entry("b", "0336_PT", ".pdf")];
        let names = unique_output_names(&entries, true);
        assert_eq!(names_of(names), vec!["0336_PT.pdf", "0336_PT (2).pdf"]);
    }

    #[test]
    fn test_write_files_with_separator_in_reference() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("file_0336.pdf");
        std::fs::write(&source, b"isi").unwrap();

        let mut rename = entry("", "0336/PT/2024", ".pdf");
        rename.path = source;

        let out = dir.path().join("out");
        let count = write_renamed_files(&[rename], &out, false).unwrap();
        assert_eq!(count, 1);
        assert_eq!(std::fs::read(out.join("0336_PT_2024.pdf")).unwrap(), b"isi");
    }
}
