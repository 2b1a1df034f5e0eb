//! 参照値との前方一致照合
//!
//! 各ファイルのコードで参照値を先頭から走査し、コードで始まる最初の参照値を採用する。
//! 参照値の並び順がそのまま優先順位になる。

use crate::code::extract_code;
use crate::types::{FileEntry, MatchResult, RenameEntry};

/// コードで始まる最初の参照値を探す
///
/// 大文字小文字を区別する文字列の前方一致。
pub fn find_reference<'a>(code: &str, reference_values: &'a [String]) -> Option<&'a str> {
    reference_values
        .iter()
        .find(|reference| reference.starts_with(code))
        .map(String::as_str)
}

/// ファイル一覧を参照値と照合
///
/// 呼び出し側は空の参照値を渡さないこと（空文字列はすべてのコードに一致してしまう）。
/// [`crate::ReferenceValues`] 経由で構築すれば保証される。
pub fn match_files(files: &[FileEntry], reference_values: &[String]) -> MatchResult {
    let mut result = MatchResult::default();

    for file in files {
        let code = extract_code(&file.filename);

        match find_reference(&code, reference_values) {
            Some(reference) => {
                result.rename_mapping.push(RenameEntry {
                    path: file.path.clone(),
                    original_name: file.filename.clone(),
                    new_name: format!("{}{}", reference, file.extension),
                    reference: reference.to_string(),
                    code,
                });
                result.matched.push(file.clone());
            }
            None => result.unmatched.push(file.clone()),
        }
    }

    result
}
