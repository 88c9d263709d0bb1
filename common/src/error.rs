//! エラー型定義

use thiserror::Error;

/// ユーザー向けの入力不足メッセージ
pub const VALIDATION_MESSAGE: &str = "Please upload a resume and paste a job posting.";

/// ユーザー向けの汎用エラーメッセージ（原因は区別しない）
pub const REQUEST_FAILED_MESSAGE: &str = "Something went wrong. Check if the backend is running.";

/// 送信前の入力チェックエラー
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("resume file is not selected")]
    MissingResume,

    #[error("job posting is empty")]
    MissingJobPosting,
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("HTTP error: status {status}")]
    Http { status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Backend error: {message}")]
    Backend {
        message: String,
        raw_output: Option<String>,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// 入力チェック以外はすべてリクエストエラー扱い
    pub fn is_request_error(&self) -> bool {
        !matches!(self, Error::Validation(_))
    }

    /// 画面に出すメッセージ（詳細はログ側に出す）
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::Validation(_) => VALIDATION_MESSAGE,
            _ => REQUEST_FAILED_MESSAGE,
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
