//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// コアは I/O を行わないので、失敗しうるのはレポート生成のみ。
#[derive(Error, Debug)]
pub enum Error {
    /// xlsx書き出し時のシート・セル操作の失敗
    #[error("レポート生成エラー: {0}")]
    Report(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_error_display() {
        let error = Error::Report("シート名設定エラー".to_string());
        assert_eq!(format!("{}", error), "レポート生成エラー: シート名設定エラー");
    }
}
