//! ZIPアーカイブの展開

use crate::error::Result;
use std::fs::File;
use std::io;
use std::path::Path;
use tempfile::TempDir;
use zip::ZipArchive;

/// ZIPを一時ディレクトリへ展開
///
/// 展開先の外に出るエントリ名（`../` や絶対パス）はスキップする。
pub fn extract_zip(zip_path: &Path) -> Result<TempDir> {
    let temp_dir = tempfile::Builder::new().prefix("arsip-rename-").tempdir()?;
    extract_zip_into(zip_path, temp_dir.path())?;
    Ok(temp_dir)
}

pub fn extract_zip_into(zip_path: &Path, dest: &Path) -> Result<usize> {
    let file = File::open(zip_path)?;
    let mut archive = ZipArchive::new(file)?;
    let mut extracted = 0;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;

        let Some(relative) = entry.enclosed_name() else {
            tracing::warn!(name = entry.name(), "展開先の外を指すエントリをスキップ");
            continue;
        };
        let out_path = dest.join(relative);

        if entry.is_dir() {
            std::fs::create_dir_all(&out_path)?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut out_file = File::create(&out_path)?;
        io::copy(&mut entry, &mut out_file)?;
        extracted += 1;
    }

    tracing::debug!(count = extracted, path = %zip_path.display(), "ZIP展開完了");
    Ok(extracted)
}
