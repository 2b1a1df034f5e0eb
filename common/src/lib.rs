//! Arsip Rename Common Library
//!
//! ファイル名からのコード抽出と参照値照合（I/Oなしの純粋な処理）

pub mod code;
pub mod error;
pub mod matcher;
#[cfg(feature = "excel")]
pub mod report;
pub mod types;

pub use code::{extract_code, split_extension};
pub use error::{Error, Result};
pub use matcher::{find_reference, match_files};
pub use types::{FileEntry, MatchResult, MatchSummary, ReferenceValues, RenameEntry};
