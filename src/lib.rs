//! arsip-rename
//!
//! ファイル名から抽出したコードで参照Excelの値を前方一致検索し、
//! 一致したファイルを参照値の名前でZIPにまとめ直す。

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod reference;
pub mod scanner;
pub mod validate;

pub use arsip_rename_common::{extract_code, match_files, FileEntry, MatchResult};
