//! ファイル名からの照合コード抽出
//!
//! 抽出優先順位（拡張子を除いた名前に対して）:
//! 1. 末尾の `_数字`（例: `file_pelanggan_0336` → `0336`）
//! 2. 先頭の数字（例: `0336_document` → `0336`）
//! 3. 最初に現れる数字列（例: `doc12ument` → `12`）
//! 4. 数字がなければ名前全体

use regex::Regex;

lazy_static::lazy_static! {
    static ref TRAILING_CODE_RE: Regex = Regex::new(r"_(\d+)$").unwrap();
    static ref LEADING_CODE_RE: Regex = Regex::new(r"^(\d+)").unwrap();
    static ref ANY_DIGITS_RE: Regex = Regex::new(r"\d+").unwrap();
}

/// ファイル名を (拡張子なしの名前, 拡張子) に分割
///
/// 拡張子は最後の `.` を含む。先頭のドットだけの名前（`.hidden`）は拡張子なし扱い。
///
/// # Examples
/// ```
/// use arsip_rename_common::split_extension;
///
/// assert_eq!(split_extension("arsip.tar.gz"), ("arsip.tar", ".gz"));
/// assert_eq!(split_extension("README"), ("README", ""));
/// ```
pub fn split_extension(filename: &str) -> (&str, &str) {
    match filename.rfind('.') {
        Some(idx) if filename[..idx].chars().any(|c| c != '.') => {
            (&filename[..idx], &filename[idx..])
        }
        _ => (filename, ""),
    }
}

/// ファイル名から照合コードを抽出
///
/// 失敗しない。空文字列には空文字列を返す。
///
/// # Examples
/// ```
/// use arsip_rename_common::extract_code;
///
/// assert_eq!(extract_code("file_pelanggan_0336.pdf"), "0336");
/// assert_eq!(extract_code("nodigitshere.pdf"), "nodigitshere");
/// ```
pub fn extract_code(filename: &str) -> String {
    let (stem, _) = split_extension(filename);

    if let Some(cap) = TRAILING_CODE_RE.captures(stem) {
        return cap[1].to_string();
    }

    if let Some(cap) = LEADING_CODE_RE.captures(stem) {
        return cap[1].to_string();
    }

    if let Some(m) = ANY_DIGITS_RE.find(stem) {
        return m.as_str().to_string();
    }

    stem.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_underscore_code() {
        assert_eq!(extract_code("file_pelanggan_0336.pdf"), "0336");
        assert_eq!(extract_code("scan_2024_0042.jpg"), "0042");
    }

    #[test]
    fn test_leading_code() {
        assert_eq!(extract_code("0336_document.pdf"), "0336");
        assert_eq!(extract_code("0007-CONTOH.docx"), "0007");
    }

    #[test]
    fn test_trailing_wins_over_leading() {
        // 末尾パターンが先頭パターンより優先
        assert_eq!(extract_code("12_arsip_0336.pdf"), "0336");
    }

    #[test]
    fn test_first_digit_run() {
        assert_eq!(extract_code("doc12ument.pdf"), "12");
        assert_eq!(extract_code("a1b22c333.pdf"), "1");
        // `_` の後に数字以外が続く場合は末尾パターンにならない
        assert_eq!(extract_code("arsip_0336a.pdf"), "0336");
    }

    #[test]
    fn test_no_digits_returns_stem() {
        assert_eq!(extract_code("nodigitshere.pdf"), "nodigitshere");
        assert_eq!(extract_code("README"), "README");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_code(""), "");
    }

    #[test]
    fn test_only_last_extension_stripped() {
        // `backup_0099.tar` は末尾パターンに一致せず、最初の数字列で拾われる
        assert_eq!(extract_code("backup_0099.tar.gz"), "0099");
        assert_eq!(extract_code("arsip.v2.pdf"), "2");
    }

    #[test]
    fn test_digits_in_extension_ignored() {
        assert_eq!(extract_code("laporan.mp3"), "laporan");
    }

    #[test]
    fn test_deterministic() {
        for name in ["file_pelanggan_0336.pdf", "x9y.txt", ".env", ""] {
            assert_eq!(extract_code(name), extract_code(name));
        }
    }

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("a.pdf"), ("a", ".pdf"));
        assert_eq!(split_extension("a.b.c"), ("a.b", ".c"));
        assert_eq!(split_extension("noext"), ("noext", ""));
        assert_eq!(split_extension(".hidden"), (".hidden", ""));
        assert_eq!(split_extension("trailing."), ("trailing", "."));
        assert_eq!(split_extension(""), ("", ""));
    }
}
