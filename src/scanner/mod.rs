//! 入力ファイルの収集
//!
//! ZIP / フォルダ / ファイル指定のいずれかから FileEntry の一覧を作る。
//! 隠しファイルやmacOSのメタデータは除外する。

pub mod archive;

use crate::error::{ArsipError, Result};
use arsip_rename_common::FileEntry;
use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::{DirEntry, WalkDir};

const MACOS_METADATA_DIR: &str = "__MACOSX";

/// 入力元
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// ZIPアーカイブ
    Archive(PathBuf),
    /// フォルダ（再帰）
    Folder(PathBuf),
    /// 個別ファイル
    Files(Vec<PathBuf>),
}

impl InputSource {
    pub fn describe(&self) -> String {
        match self {
            InputSource::Archive(path) => path.display().to_string(),
            InputSource::Folder(path) => path.display().to_string(),
            InputSource::Files(paths) => format!("{}件のファイル", paths.len()),
        }
    }
}

/// 収集結果
///
/// ZIP展開時は一時ディレクトリを保持する（drop で削除）。
#[derive(Debug)]
pub struct CollectedInputs {
    pub files: Vec<FileEntry>,
    /// 走査のルート（ファイル指定時はNone）
    pub root: Option<PathBuf>,
    workspace: Option<TempDir>,
}

impl CollectedInputs {
    pub fn is_extracted(&self) -> bool {
        self.workspace.is_some()
    }
}

pub fn collect(source: &InputSource) -> Result<CollectedInputs> {
    match source {
        InputSource::Archive(zip_path) => {
            if !zip_path.is_file() {
                return Err(ArsipError::FileNotFound(zip_path.display().to_string()));
            }
            let workspace = archive::extract_zip(zip_path)?;
            let root = workspace.path().to_path_buf();
            let files = scan_folder(&root)?;
            Ok(CollectedInputs { files, root: Some(root), workspace: Some(workspace) })
        }
        InputSource::Folder(folder) => {
            let files = scan_folder(folder)?;
            Ok(CollectedInputs { files, root: Some(folder.clone()), workspace: None })
        }
        InputSource::Files(paths) => {
            let files = collect_files(paths)?;
            Ok(CollectedInputs { files, root: None, workspace: None })
        }
    }
}

/// 除外対象のディレクトリか
fn is_skipped_dir(name: &str) -> bool {
    name.starts_with('.') || name == MACOS_METADATA_DIR
}

/// 除外対象のファイル名か
pub fn is_skipped_file(name: &str) -> bool {
    name.starts_with('.') || name.starts_with("__") || name == ".DS_Store"
}

fn entry_name(entry: &DirEntry) -> &str {
    entry.file_name().to_str().unwrap_or("")
}

/// フォルダを再帰的に走査
///
/// 兄弟要素はファイル名順に並ぶ。
pub fn scan_folder(folder: &Path) -> Result<Vec<FileEntry>> {
    if !folder.is_dir() {
        return Err(ArsipError::FolderNotFound(folder.display().to_string()));
    }

    let mut files = Vec::new();

    let walker = WalkDir::new(folder)
        .sort_by_file_name()
        .into_iter()
        // ルート自体は一時ディレクトリ名（`.tmp...`）の場合があるので判定しない
        .filter_entry(|e| {
            e.depth() == 0 || !e.file_type().is_dir() || !is_skipped_dir(entry_name(e))
        });

    for entry in walker.filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry_name(&entry);
        if is_skipped_file(name) || inside_macos_metadata(entry.path(), folder) {
            tracing::debug!(file = name, "除外");
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(folder)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .to_string();
        let size = entry.metadata().map(|m| m.len()).unwrap_or(0);

        files.push(
            FileEntry::new(entry.path())
                .with_relative_path(relative)
                .with_size(size),
        );
    }

    Ok(files)
}

fn inside_macos_metadata(path: &Path, root: &Path) -> bool {
    path.strip_prefix(root)
        .map(|rel| rel.components().any(|c| c.as_os_str() == OsStr::new(MACOS_METADATA_DIR)))
        .unwrap_or(false)
}

/// 指定ファイルをそのままの順序で収集（重複パスは1件に）
pub fn collect_files(paths: &[PathBuf]) -> Result<Vec<FileEntry>> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for path in paths {
        if !path.is_file() {
            return Err(ArsipError::FileNotFound(path.display().to_string()));
        }
        if !seen.insert(path.clone()) {
            continue;
        }
        let size = std::fs::metadata(path)?.len();
        files.push(FileEntry::new(path.clone()).with_size(size));
    }

    Ok(files)
}

/// サイズをKB表記に（小数2桁）
pub fn format_size_kb(size: u64) -> String {
    format!("{:.2} KB", size as f64 / 1024.0)
}

/// 収集したファイルの一覧表示行（No / ファイル名 / 場所 / サイズ）
pub fn listing_lines(files: &[FileEntry]) -> Vec<String> {
    files
        .iter()
        .enumerate()
        .map(|(i, f)| {
            format!(
                "{:>4}. {}  [{}]  {}",
                i + 1,
                f.filename,
                f.relative_path,
                format_size_kb(f.size)
            )
        })
        .collect()
}

/// 展開された全項目（隠しファイル含む）のファイル名
///
/// 有効なファイルが0件だったときの診断用。
pub fn list_all_items(root: &Path) -> Vec<String> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect()
}
