use crate::scanner::InputSource;
use crate::validate::ValidationRequest;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "arsip-rename")]
#[command(about = "参照Excelに基づくアーカイブファイル一括リネームツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// 入力ファイルと参照Excelの指定
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// アーカイブZIPファイル
    #[arg(long, conflicts_with_all = ["folder", "files"])]
    pub zip: Option<PathBuf>,

    /// アーカイブフォルダ（サブフォルダも走査）
    #[arg(long, conflicts_with = "files")]
    pub folder: Option<PathBuf>,

    /// 個別ファイル（ZIPは不可）
    #[arg(long, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// 参照Excelファイル
    #[arg(short, long)]
    pub reference: Option<PathBuf>,

    /// 参照列名（省略時は設定の既定値）
    #[arg(short, long)]
    pub column: Option<String>,

    /// シート名（省略時は先頭シート）
    #[arg(long)]
    pub sheet: Option<String>,
}

impl InputArgs {
    pub fn source(&self) -> Option<InputSource> {
        if let Some(zip) = &self.zip {
            Some(InputSource::Archive(zip.clone()))
        } else if let Some(folder) = &self.folder {
            Some(InputSource::Folder(folder.clone()))
        } else if !self.files.is_empty() {
            Some(InputSource::Files(self.files.clone()))
        } else {
            None
        }
    }

    /// 検証リクエストを組み立てる
    pub fn to_request(&self, column: Option<String>) -> ValidationRequest {
        ValidationRequest {
            source: self.source(),
            reference_file: self.reference.clone(),
            reference_column: column.unwrap_or_default(),
            sheet: self.sheet.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// ファイルと参照値を照合して結果を表示
    Validate {
        #[command(flatten)]
        input: InputArgs,

        /// 照合結果JSONの保存先
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// 照合してリネーム済みZIPと未一致レポートを出力
    Run {
        #[command(flatten)]
        input: InputArgs,

        /// 出力ディレクトリ（省略時は設定値またはカレント）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 個別ファイルもフォルダに出力
        #[arg(long)]
        individual: bool,

        /// リネーム予定一覧（Excel）も出力
        #[arg(long)]
        preview: bool,

        /// 照合結果JSONの保存先
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// 参照Excelの列名を表示
    Columns {
        /// 参照Excelファイル
        #[arg(required = true)]
        reference: PathBuf,

        /// シート名（省略時は先頭シート）
        #[arg(long)]
        sheet: Option<String>,
    },

    /// ファイル名から抽出されるコードを表示
    Code {
        /// ファイル名
        #[arg(required = true)]
        filenames: Vec<String>,
    },

    /// 設定を表示/編集
    Config {
        /// 参照列名の既定値を設定
        #[arg(long)]
        set_column: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
