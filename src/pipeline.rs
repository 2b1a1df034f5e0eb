//! 検証・照合の一連の処理
//!
//! 入力検証 → ファイル収集 → 参照値読み込み → 照合。
//! 結果は ValidatedRun として呼び出し側が保持し、出力処理に渡す。

use crate::error::{ArsipError, Result};
use crate::reference;
use crate::scanner::{self, CollectedInputs, InputSource};
use crate::validate::ValidationRequest;
use arsip_rename_common::{match_files, MatchResult, ReferenceValues};
use std::path::Path;

/// 検証済みの照合結果
///
/// ZIP展開先の一時ディレクトリを保持しているので、出力が終わるまで drop しないこと。
#[derive(Debug)]
pub struct ValidatedRun {
    pub inputs: CollectedInputs,
    pub reference_values: ReferenceValues,
    pub result: MatchResult,
}

impl ValidatedRun {
    /// 照合結果をJSONで保存
    pub fn save_result(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.result)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// 入力を検証して照合まで実行
pub fn validate_and_match(request: &ValidationRequest) -> Result<ValidatedRun> {
    request.validate()?;

    // validate() 済みなので両方Some
    let (Some(source), Some(reference_file)) = (&request.source, &request.reference_file) else {
        return Err(ArsipError::Validation(request.messages()));
    };

    let inputs = scanner::collect(source)?;
    tracing::info!(
        count = inputs.files.len(),
        source = %source.describe(),
        extracted = inputs.is_extracted(),
        "ファイル収集完了"
    );

    if inputs.files.is_empty() {
        let found_items = match (&inputs.root, source) {
            (Some(root), InputSource::Archive(_) | InputSource::Folder(_)) => {
                scanner::list_all_items(root)
            }
            _ => Vec::new(),
        };
        return Err(ArsipError::NoFilesFound {
            source_name: source.describe(),
            found_items,
        });
    }

    let reference_values = reference::load_reference_values(
        reference_file,
        request.reference_column.trim(),
        request.sheet.as_deref(),
    )?;
    tracing::info!(count = reference_values.len(), "参照値読み込み完了");

    let result = match_files(&inputs.files, reference_values.as_slice());
    tracing::info!(
        matched = result.matched.len(),
        unmatched = result.unmatched.len(),
        "照合完了"
    );

    Ok(ValidatedRun { inputs, reference_values, result })
}
