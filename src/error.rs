use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArsipError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("入力が不正です:\n{}", format_messages(.0))]
    Validation(Vec<String>),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error(
        "有効なファイルがありません: {source_name}（検出された項目: {}件）",
        .found_items.len()
    )]
    NoFilesFound {
        source_name: String,
        found_items: Vec<String>,
    },

    #[error("列 '{column}' が見つかりません。利用可能な列: {}", .available.join(", "))]
    ColumnNotFound {
        column: String,
        available: Vec<String>,
    },

    #[error("参照ファイルが不正: {0}")]
    InvalidReference(String),

    #[error("ZIP処理エラー: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Excel読み込みエラー: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] arsip_rename_common::Error),
}

fn format_messages(messages: &[String]) -> String {
    messages
        .iter()
        .map(|m| format!("  - {}", m))
        .collect::<Vec<_>>()
        .join("\n")
}

pub type Result<T> = std::result::Result<T, ArsipError>;
