//! Resume Analyzer CLI
//!
//! 履歴書ファイルと求人テキストを解析エンドポイントに送り、
//! フィットスコアとスキル一覧を端末に表示する

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod report;
